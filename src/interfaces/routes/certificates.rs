use actix_web::web;

use crate::{handlers::certificates, use_cases::extractors::BearerToken};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/certificados")
            .service(
                web::resource("")
                    .route(web::get().to(certificates::list_certificates))
                    .route(web::post().to(certificates::create_certificate::<BearerToken>))
            )
            .service(
                web::resource("/{certificate_id}")
                    .route(web::get().to(certificates::get_certificate))
                    .route(web::put().to(certificates::update_certificate::<BearerToken>))
                    .route(web::delete().to(certificates::delete_certificate::<BearerToken>))
            )
    );
}
