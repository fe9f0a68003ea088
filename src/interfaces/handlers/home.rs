use actix_web::{get, HttpResponse, Responder};

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Portfolio API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "projetos": "/api/projetos",
            "certificados": "/api/certificados",
            "visitas": "/api/visitas",
            "admin": "/admin"
        }
    }))
}
