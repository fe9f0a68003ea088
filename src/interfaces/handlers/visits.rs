use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    errors::AppError,
    use_cases::extractors::{Authorized, SessionCookie},
    AppState,
};

#[instrument(skip(state))]
pub async fn get_visits(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let count = state.visit_handler.current().await?;
    Ok(HttpResponse::Ok().json(count))
}

/// Public: every page view counts, no credential needed.
#[instrument(skip(state))]
pub async fn record_visit(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let count = state.visit_handler.record_visit().await?;
    Ok(HttpResponse::Ok().json(count))
}

pub async fn admin_get_visits(
    _admin: Authorized<SessionCookie>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    get_visits(state).await
}
