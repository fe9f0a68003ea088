use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use tracing::instrument;

use crate::{
    entities::certificate::{CertificateFilter, NewCertificateRequest, UpdateCertificateRequest},
    errors::AppError,
    use_cases::extractors::{Authorized, CredentialSource, SessionCookie},
    AppState,
};

#[instrument(skip(state))]
pub async fn list_certificates(
    filter: web::Query<CertificateFilter>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let certificates = state.certificate_handler.list_certificates(&filter).await?;
    Ok(HttpResponse::Ok().json(certificates))
}

#[instrument(skip(state))]
pub async fn get_certificate(
    certificate_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let certificate = state
        .certificate_handler
        .get_certificate(certificate_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(certificate))
}

#[instrument(skip(_admin, state, data))]
pub async fn create_certificate<S: CredentialSource>(
    _admin: Authorized<S>,
    state: web::Data<AppState>,
    data: web::Json<NewCertificateRequest>,
) -> Result<impl Responder, AppError> {
    let certificate = state
        .certificate_handler
        .create_certificate(data.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(certificate))
}

#[instrument(skip(_admin, state, data))]
pub async fn update_certificate<S: CredentialSource>(
    _admin: Authorized<S>,
    certificate_id: web::Path<i64>,
    state: web::Data<AppState>,
    data: web::Json<UpdateCertificateRequest>,
) -> Result<impl Responder, AppError> {
    let certificate = state
        .certificate_handler
        .update_certificate(certificate_id.into_inner(), data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(certificate))
}

#[instrument(skip(_admin, state))]
pub async fn delete_certificate<S: CredentialSource>(
    _admin: Authorized<S>,
    certificate_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state
        .certificate_handler
        .delete_certificate(certificate_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Certificate deleted successfully" })))
}

pub async fn admin_list_certificates(
    _admin: Authorized<SessionCookie>,
    filter: web::Query<CertificateFilter>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    list_certificates(filter, state).await
}

pub async fn admin_get_certificate(
    _admin: Authorized<SessionCookie>,
    certificate_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    get_certificate(certificate_id, state).await
}
