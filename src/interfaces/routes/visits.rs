use actix_web::web;

use crate::handlers::visits;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/visitas")
            .route(web::get().to(visits::get_visits))
            .route(web::post().to(visits::record_visit))
    );
}
