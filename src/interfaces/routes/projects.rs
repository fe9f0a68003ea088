use actix_web::web;

use crate::{handlers::projects, use_cases::extractors::BearerToken};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/projetos")
            .service(
                web::resource("")
                    .route(web::get().to(projects::list_projects))
                    .route(web::post().to(projects::create_project::<BearerToken>))
            )
            .service(
                web::resource("/{project_id}")
                    .route(web::get().to(projects::get_project))
                    .route(web::put().to(projects::update_project::<BearerToken>))
                    .route(web::delete().to(projects::delete_project::<BearerToken>))
            )
    );
}
