use std::fmt;

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::{
    auth::session::SessionService,
    entities::session::AdminPrincipal,
    errors::AuthError,
    settings::AppConfig,
};

/// A credential as presented by a request, before it is checked.
#[derive(PartialEq)]
pub enum Credential {
    Bearer(Zeroizing<String>),
    Session(String),
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::Bearer(_) => f.write_str("Bearer([REDACTED])"),
            Credential::Session(_) => f.write_str("Session([REDACTED])"),
        }
    }
}

/// Single authorization point for every mutating operation. Bearer tokens and
/// admin session cookies are two ways of proving knowledge of the same secret.
#[derive(Clone)]
pub struct AdminGuard {
    secret: Zeroizing<String>,
    sessions: SessionService,
}

impl AdminGuard {
    pub fn new(config: &AppConfig) -> Self {
        AdminGuard {
            secret: Zeroizing::new(config.admin_secret.clone()),
            sessions: SessionService::new(config),
        }
    }

    pub fn sessions(&self) -> &SessionService {
        &self.sessions
    }

    pub fn authorize(&self, credential: &Credential) -> Result<AdminPrincipal, AuthError> {
        match credential {
            Credential::Bearer(token) => {
                self.check_secret(token)?;
                Ok(AdminPrincipal::SharedSecret)
            }
            Credential::Session(token) => {
                let claims = self.sessions.verify(token)?;
                Ok(AdminPrincipal::Session(claims))
            }
        }
    }

    /// Exchanges the admin password for a signed session token.
    pub fn open_session(&self, password: &str) -> Result<String, AuthError> {
        self.check_secret(password)?;
        self.sessions.issue()
    }

    fn check_secret(&self, presented: &str) -> Result<(), AuthError> {
        let matches: bool = presented.as_bytes().ct_eq(self.secret.as_bytes()).into();
        if matches {
            Ok(())
        } else {
            tracing::warn!("Rejected admin credential");
            Err(AuthError::WrongCredentials)
        }
    }
}

impl fmt::Debug for AdminGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminGuard")
            .field("secret", &"[REDACTED]")
            .field("sessions", &self.sessions)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::AppEnvironment;

    fn guard() -> AdminGuard {
        AdminGuard::new(&AppConfig {
            env: AppEnvironment::Testing,
            debug: false,
            name: "test".into(),
            port: 0,
            host: "127.0.0.1".into(),
            worker_count: 1,
            database_url: "postgres://localhost/test".into(),
            database_password: None,
            database_max_connections: 1,
            run_migrations: false,
            admin_secret: "admin123".into(),
            session_secret: "session_secret_that_is_long_enough_for_hs512".into(),
            session_ttl_minutes: 30,
            cors_allowed_origins: "*".into(),
        })
    }

    fn bearer(token: &str) -> Credential {
        Credential::Bearer(Zeroizing::new(token.to_string()))
    }

    #[test]
    fn exact_secret_is_accepted() {
        assert_eq!(guard().authorize(&bearer("admin123")), Ok(AdminPrincipal::SharedSecret));
    }

    #[test]
    fn near_misses_are_rejected() {
        let guard = guard();
        for candidate in ["admin12", "admin1234", "ADMIN123", " admin123", ""] {
            assert_eq!(
                guard.authorize(&bearer(candidate)),
                Err(AuthError::WrongCredentials),
                "{candidate:?} should not authorize"
            );
        }
    }

    #[test]
    fn session_opened_with_secret_authorizes() {
        let guard = guard();
        let token = guard.open_session("admin123").unwrap();

        let principal = guard.authorize(&Credential::Session(token)).unwrap();
        assert!(matches!(principal, AdminPrincipal::Session(_)));
    }

    #[test]
    fn wrong_password_opens_no_session() {
        assert_eq!(guard().open_session("guess"), Err(AuthError::WrongCredentials));
    }

    #[test]
    fn garbage_session_is_rejected() {
        let result = guard().authorize(&Credential::Session("not-a-token".into()));
        assert_eq!(result, Err(AuthError::InvalidSession));
    }

    #[test]
    fn debug_never_prints_the_secret() {
        let rendered = format!("{:?} {:?}", guard(), bearer("admin123"));
        assert!(!rendered.contains("admin123"));
    }
}
