use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, Header, Validation};

use crate::entities::session::{SessionClaims, ADMIN_SUBJECT};
use crate::errors::AuthError;
use crate::settings::{AppConfig, SessionKeys};

const SESSION_ALGORITHM: Algorithm = Algorithm::HS512;
pub const SESSION_COOKIE: &str = "portfolio_admin_session";
const SESSION_COOKIE_PATH: &str = "/admin";

/// Issues and verifies the signed admin session carried in a cookie.
#[derive(Clone, Debug)]
pub struct SessionService {
    keys: SessionKeys,
    ttl: Duration,
    secure_cookie: bool,
}

impl SessionService {
    pub fn new(config: &AppConfig) -> Self {
        SessionService {
            keys: SessionKeys::from(config),
            ttl: Duration::minutes(config.session_ttl_minutes),
            secure_cookie: config.is_production(),
        }
    }

    pub fn issue(&self) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: ADMIN_SUBJECT.to_string(),
            iat: now.timestamp() as usize,
            exp: (now + self.ttl).timestamp() as usize,
        };

        encode(&Header::new(SESSION_ALGORITHM), &claims, &self.keys.encoding).map_err(|e| {
            tracing::warn!("Failed to sign admin session: {}", e);
            AuthError::SessionCreation
        })
    }

    pub fn verify(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let mut validation = Validation::new(SESSION_ALGORITHM);
        validation.validate_exp = true;
        validation.leeway = 0;

        let data = decode::<SessionClaims>(token, &self.keys.decoding, &validation)?;

        if data.claims.sub != ADMIN_SUBJECT {
            return Err(AuthError::InvalidSession);
        }
        Ok(data.claims)
    }

    pub fn cookie(&self, token: String) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE, token)
            .path(SESSION_COOKIE_PATH)
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(self.secure_cookie)
            .max_age(CookieDuration::seconds(self.ttl.num_seconds()))
            .finish()
    }

    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(SESSION_COOKIE, "")
            .path(SESSION_COOKIE_PATH)
            .http_only(true)
            .finish();
        cookie.make_removal();
        cookie
    }
}
