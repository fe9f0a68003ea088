use actix_web::{
    error::{InternalError, UrlencodedError},
    get, http::header, post, web, HttpRequest, HttpResponse, Responder,
};
use tracing::instrument;

use crate::{
    entities::session::LoginForm,
    errors::AuthError,
    use_cases::extractors::{Authorized, SessionCookie},
    AppState,
};

const LOGIN_PAGE: &str = include_str!("../../../templates/login.html");
const DASHBOARD_PAGE: &str = include_str!("../../../templates/admin_dashboard.html");
const ERROR_SLOT: &str = "{{error}}";

fn login_page(error: Option<&str>) -> String {
    let notice = error
        .map(|message| format!(r#"<p class="error">{message}</p>"#))
        .unwrap_or_default();
    LOGIN_PAGE.replace(ERROR_SLOT, &notice)
}

fn html(mut builder: actix_web::HttpResponseBuilder, body: String) -> HttpResponse {
    builder.content_type("text/html; charset=utf-8").body(body)
}

fn see_other(location: &str) -> actix_web::HttpResponseBuilder {
    let mut builder = HttpResponse::SeeOther();
    builder.insert_header((header::LOCATION, location));
    builder
}

#[get("/login")]
pub async fn login_form() -> impl Responder {
    html(HttpResponse::Ok(), login_page(None))
}

#[post("/login")]
#[instrument(skip(state, form))]
pub async fn login(state: web::Data<AppState>, form: web::Form<LoginForm>) -> HttpResponse {
    match state.guard.open_session(&form.password) {
        Ok(token) => {
            tracing::info!("Admin session opened");
            let cookie = state.guard.sessions().cookie(token);
            see_other("/admin").cookie(cookie).finish()
        }
        Err(AuthError::WrongCredentials) => {
            html(HttpResponse::Unauthorized(), login_page(Some("Invalid password")))
        }
        Err(e) => {
            tracing::error!("Could not open admin session: {}", e);
            html(HttpResponse::InternalServerError(), login_page(Some("Login is unavailable")))
        }
    }
}

/// Form bodies that don't decode (e.g. no `password`) get the login page back.
pub fn login_form_error(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!("Rejected login form: {}", err);
    let response = html(HttpResponse::BadRequest(), login_page(Some("Password is required")));
    InternalError::from_response(err, response).into()
}

#[post("/logout")]
pub async fn logout(state: web::Data<AppState>) -> HttpResponse {
    see_other("/admin/login")
        .cookie(state.guard.sessions().removal_cookie())
        .finish()
}

#[get("")]
pub async fn dashboard(req: HttpRequest) -> HttpResponse {
    match Authorized::<SessionCookie>::check(&req) {
        Ok(_) => html(HttpResponse::Ok(), DASHBOARD_PAGE.to_string()),
        Err(e) => {
            tracing::debug!("Dashboard requires a session: {}", e);
            see_other("/admin/login").finish()
        }
    }
}
