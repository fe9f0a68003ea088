use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use tracing::instrument;

use crate::{
    entities::project::{NewProjectRequest, UpdateProjectRequest},
    errors::AppError,
    use_cases::extractors::{Authorized, CredentialSource, SessionCookie},
    AppState,
};

#[instrument(skip(state))]
pub async fn list_projects(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let projects = state.project_handler.list_projects().await?;
    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state))]
pub async fn get_project(
    project_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let project = state.project_handler.get_project(project_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(project))
}

#[instrument(skip(_admin, state, data))]
pub async fn create_project<S: CredentialSource>(
    _admin: Authorized<S>,
    state: web::Data<AppState>,
    data: web::Json<NewProjectRequest>,
) -> Result<impl Responder, AppError> {
    let project = state.project_handler.create_project(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(project))
}

#[instrument(skip(_admin, state, data))]
pub async fn update_project<S: CredentialSource>(
    _admin: Authorized<S>,
    project_id: web::Path<i64>,
    state: web::Data<AppState>,
    data: web::Json<UpdateProjectRequest>,
) -> Result<impl Responder, AppError> {
    let project = state
        .project_handler
        .update_project(project_id.into_inner(), data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(project))
}

#[instrument(skip(_admin, state))]
pub async fn delete_project<S: CredentialSource>(
    _admin: Authorized<S>,
    project_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.project_handler.delete_project(project_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Project deleted successfully" })))
}

pub async fn admin_list_projects(
    _admin: Authorized<SessionCookie>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    list_projects(state).await
}

pub async fn admin_get_project(
    _admin: Authorized<SessionCookie>,
    project_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    get_project(project_id, state).await
}
