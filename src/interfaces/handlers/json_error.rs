use actix_web::{http::StatusCode, HttpResponse};

pub fn json_error(status: StatusCode, error: &str, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(serde_json::json!({
        "error": error,
        "message": message
    }))
}

/// Fallback for every unmatched route.
pub async fn not_found() -> HttpResponse {
    json_error(StatusCode::NOT_FOUND, "not_found", "Endpoint not found")
}
