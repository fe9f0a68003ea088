use actix_cors::Cors;
use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{fmt, EnvFilter};

use portfolio_api::{
    constants::START_TIME,
    db::postgres::{create_pool, run_migrations},
    graceful_shutdown::shutdown_signal,
    routes::configure_routes,
    settings::AppConfig,
    AppState,
};

fn init_tracing(config: &AppConfig) {
    let default_level = if config.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if config.is_production() {
        fmt().json().with_env_filter(filter).init();
    } else {
        fmt().with_env_filter(filter).init();
    }
}

fn cors(allowed_origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);

    if allowed_origins.iter().any(|origin| origin == "*") {
        return cors.allow_any_origin();
    }
    allowed_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = match AppConfig::new() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config);
    once_cell::sync::Lazy::force(&START_TIME);
    tracing::info!("Loaded configuration: {:?}", config);

    if config.uses_default_admin_secret() {
        tracing::warn!("APP_ADMIN_SECRET is not set; using the default admin secret");
    }
    if config.uses_ephemeral_session_secret() {
        tracing::warn!("APP_SESSION_SECRET is not set; admin sessions will not survive a restart");
    }

    let gateway_url = config.gateway_url().context("Invalid database configuration")?;
    let pool = create_pool(&gateway_url, config.database_max_connections)
        .await
        .context("Failed to create database connection pool")?;

    if config.run_migrations {
        run_migrations(&pool).await.context("Failed to run database migrations")?;
    }

    let app_state = web::Data::new(AppState::new(&config, pool));
    let allowed_origins = config.cors_origins();
    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "🚀 Starting {} v{} on {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(cors(&allowed_origins))
            .wrap(TracingLogger::default())
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {server_addr}"))?
    .run();

    tokio::select! {
        res = server => res.context("Server error")?,
        _ = shutdown_signal() => {},
    }

    tracing::info!("Server stopped");
    Ok(())
}
