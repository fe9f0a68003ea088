use std::fmt;

use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use jsonwebtoken::errors::{ErrorKind, Error as JwtError};
use derive_more::Display;
use serde::Serialize;

#[derive(Debug)]
pub enum AppError {
    ValidationError(FieldError),
    NotFound(String),
    Unauthorized(AuthError),
    Gateway(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(e) => write!(f, "Validation error: {}: {}", e.field, e.message),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Unauthorized(e) => write!(f, "Unauthorized: {}", e),
            AppError::Gateway(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl AppError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::ValidationError(FieldError {
            field: field.into(),
            message: message.into(),
        })
    }

    /// Machine-readable failure kind used as the `error` key of the body.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "validation_error",
            AppError::NotFound(_) => "not_found",
            AppError::Unauthorized(_) => "unauthorized",
            AppError::Gateway(_) => "gateway_error",
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::ValidationError(error) => {
                serde_json::json!({
                    "error": self.kind(),
                    "message": error.message,
                    "field": error.field,
                })
            }
            AppError::NotFound(message) => {
                serde_json::json!({"error": self.kind(), "message": message})
            }
            AppError::Unauthorized(auth) => return auth.error_response(),
            // Driver details stay in the logs.
            AppError::Gateway(_) => {
                serde_json::json!({"error": self.kind(), "message": "Database error"})
            }
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Gateway(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            _ => {
                tracing::error!("Gateway call failed: {}", err);
                AppError::Gateway(err.to_string())
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::Unauthorized(err)
    }
}

#[derive(Debug, Display, PartialEq)]
pub enum AuthError {
    #[display("Missing Authorization header")]
    MissingCredentials,

    #[display("Invalid Authorization header")]
    MalformedHeader,

    #[display("Invalid credentials")]
    WrongCredentials,

    #[display("Admin session required")]
    SessionRequired,

    #[display("Admin session expired")]
    SessionExpired,

    #[display("Invalid admin session")]
    InvalidSession,

    #[display("Session creation error")]
    SessionCreation,

    #[display("Application state missing")]
    MissingState,
}

impl ResponseError for AuthError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({"error": "unauthorized", "message": self.to_string()}))
    }
    fn status_code(&self) -> StatusCode {
        match *self {
            AuthError::SessionCreation => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::MissingState => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        }
    }
}

impl From<JwtError> for AuthError {
    fn from(e: JwtError) -> Self {
        match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::SessionExpired,
            _ => AuthError::InvalidSession,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_rt::test]
    async fn validation_error_body_names_the_field() {
        let err = AppError::validation("descricao", "descricao is required");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "validation_error");
        assert_eq!(json["field"], "descricao");
        assert_eq!(json["message"], "descricao is required");
    }

    #[actix_rt::test]
    async fn not_found_body_carries_the_resource_message() {
        let response = AppError::NotFound("Project not found".into()).error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({"error": "not_found", "message": "Project not found"}));
    }

    #[actix_rt::test]
    async fn unauthorized_uses_auth_error_body() {
        let err = AppError::from(AuthError::WrongCredentials);
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Invalid credentials");
    }

    #[test]
    fn row_not_found_maps_to_not_found() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn other_gateway_failures_are_server_errors() {
        let err = AppError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.kind(), "gateway_error");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
