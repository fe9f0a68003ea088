use actix_web::web;

use crate::{
    handlers::{admin, certificates, projects, visits},
    use_cases::extractors::SessionCookie,
};

/// Console pages plus a session-authenticated mirror of the JSON API.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .app_data(web::FormConfig::default().error_handler(admin::login_form_error))
            .service(admin::login_form)
            .service(admin::login)
            .service(admin::logout)
            .service(admin::dashboard)
            .service(
                web::scope("/api")
                    .service(
                        web::resource("/projetos")
                            .route(web::get().to(projects::admin_list_projects))
                            .route(web::post().to(projects::create_project::<SessionCookie>))
                    )
                    .service(
                        web::resource("/projetos/{project_id}")
                            .route(web::get().to(projects::admin_get_project))
                            .route(web::put().to(projects::update_project::<SessionCookie>))
                            .route(web::delete().to(projects::delete_project::<SessionCookie>))
                    )
                    .service(
                        web::resource("/certificados")
                            .route(web::get().to(certificates::admin_list_certificates))
                            .route(web::post().to(certificates::create_certificate::<SessionCookie>))
                    )
                    .service(
                        web::resource("/certificados/{certificate_id}")
                            .route(web::get().to(certificates::admin_get_certificate))
                            .route(web::put().to(certificates::update_certificate::<SessionCookie>))
                            .route(web::delete().to(certificates::delete_certificate::<SessionCookie>))
                    )
                    .service(
                        web::resource("/visitas")
                            .route(web::get().to(visits::admin_get_visits))
                    )
            )
    );
}
