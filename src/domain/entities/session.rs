use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

pub const ADMIN_SUBJECT: &str = "admin";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionClaims {
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

impl SessionClaims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp as i64, 0).single()
    }
}

/// Body of the admin login form.
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginForm {
    pub password: String,
}

/// Who passed the guard, and how.
#[derive(Debug, Clone, PartialEq)]
pub enum AdminPrincipal {
    SharedSecret,
    Session(SessionClaims),
}
