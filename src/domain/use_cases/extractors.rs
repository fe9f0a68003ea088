use std::marker::PhantomData;

use actix_web::{http::header, web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use zeroize::Zeroizing;

use crate::{
    auth::{guard::Credential, session::SESSION_COOKIE},
    entities::session::AdminPrincipal,
    errors::AuthError,
    AppState,
};

/// Where a request carries its admin credential.
pub trait CredentialSource {
    fn credential(req: &HttpRequest) -> Result<Credential, AuthError>;
}

/// `Authorization: Bearer <secret>`, used by the public API.
pub struct BearerToken;

/// Signed session cookie, used by the admin console.
pub struct SessionCookie;

impl CredentialSource for BearerToken {
    fn credential(req: &HttpRequest) -> Result<Credential, AuthError> {
        let value = req
            .headers()
            .get(header::AUTHORIZATION)
            .ok_or(AuthError::MissingCredentials)?
            .to_str()
            .map_err(|_| AuthError::MalformedHeader)?;

        let mut parts = value.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => {
                Ok(Credential::Bearer(Zeroizing::new(token.to_string())))
            }
            _ => Err(AuthError::MalformedHeader),
        }
    }
}

impl CredentialSource for SessionCookie {
    fn credential(req: &HttpRequest) -> Result<Credential, AuthError> {
        req.cookie(SESSION_COOKIE)
            .map(|cookie| Credential::Session(cookie.value().to_string()))
            .ok_or(AuthError::SessionRequired)
    }
}

/// Extractor that only succeeds for requests the admin guard accepts.
/// Usage: add `_admin: Authorized<BearerToken>` as a handler parameter.
#[derive(Debug)]
pub struct Authorized<S> {
    pub principal: AdminPrincipal,
    source: PhantomData<S>,
}

impl<S: CredentialSource> Authorized<S> {
    pub fn check(req: &HttpRequest) -> Result<Self, AuthError> {
        let state = req
            .app_data::<web::Data<AppState>>()
            .ok_or(AuthError::MissingState)?;
        let credential = S::credential(req)?;
        let principal = state.guard.authorize(&credential)?;

        Ok(Authorized { principal, source: PhantomData })
    }
}

impl<S: CredentialSource> FromRequest for Authorized<S> {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(Self::check(req).map_err(Into::into))
    }
}
