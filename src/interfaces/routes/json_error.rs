use actix_web::{
    error::{InternalError, JsonPayloadError, PathError},
    http::StatusCode,
    web,
};

use crate::handlers::json_error::{json_error, not_found};

/// Extractor failures and unmatched routes all answer in JSON.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        let response = json_body_error(&err);
        InternalError::from_response(err, response).into()
    }));

    // Ids are integers; anything else names no record.
    cfg.app_data(web::PathConfig::default().error_handler(|err: PathError, _req| {
        tracing::debug!("Unparseable path parameter: {}", err);
        let response = json_error(StatusCode::NOT_FOUND, "not_found", "Resource not found");
        InternalError::from_response(err, response).into()
    }));

    cfg.default_service(web::to(not_found));
}

fn json_body_error(err: &JsonPayloadError) -> actix_web::HttpResponse {
    let status = match err {
        JsonPayloadError::ContentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            StatusCode::PAYLOAD_TOO_LARGE
        }
        _ => StatusCode::BAD_REQUEST,
    };
    json_error(status, "bad_request", &format!("Invalid JSON body: {err}"))
}
