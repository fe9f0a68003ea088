use actix_web::{get, web, HttpResponse, Responder};
use humantime::format_duration;
use serde::Serialize;
use std::time::Duration;

use crate::{constants::START_TIME, AppState};

#[derive(Serialize)]
struct HealthCheckResponse {
    status: &'static str,
    message: &'static str,
    database: &'static str,
    uptime: String,
    version: &'static str,
    timestamp: String,
}

/// Liveness check. Always 200; gateway trouble shows up in `database`.
#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let now_utc = chrono::Utc::now();
    let uptime = now_utc.signed_duration_since(*START_TIME);
    let human_uptime = format_duration(Duration::from_secs(uptime.num_seconds().max(0) as u64));

    let database = match state.check_gateway().await {
        Ok(_) => "OK",
        Err(e) => {
            tracing::warn!("Health check could not reach the database: {}", e);
            "Unavailable"
        }
    };

    HttpResponse::Ok().json(HealthCheckResponse {
        status: "ok",
        message: "Portfolio API is running",
        database,
        uptime: human_uptime.to_string(),
        version: env!("CARGO_PKG_VERSION"),
        timestamp: now_utc.to_rfc3339(),
    })
}
