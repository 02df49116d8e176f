mod api;
mod config;
mod database;
mod middleware;
mod models;
mod seeds;
mod services;
mod state;
mod utils;
mod views;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::{AppConfig, StoreBackend};
use crate::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    log::info!("🚀 Starting Want-to-Go Service...");
    if config.store_backend == StoreBackend::MongoDB {
        log::info!("📊 Database: {}", config.database_url);
    }
    if config.session.secret == crate::config::SessionConfig::default().secret {
        log::warn!("⚠️  SESSION_SECRET not set; using the built-in development secret");
    }

    let state = AppState::new(&config)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, format!("Failed to initialise store: {}", e)))?;

    // 🌱 Seed default destination catalog
    if config.seed_catalog {
        seeds::catalog_seed::seed_default_catalog(state.catalog.as_ref()).await;
    }

    let state_data = web::Data::new(state);
    let session_config = config.session.clone();
    let allowed_origin = config.allowed_origin.clone();

    log::info!("🌐 Server starting on http://{}:{}", config.host, config.port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", config.host, config.port);

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .supports_credentials()
            .max_age(3600);
        if let Some(origin) = &allowed_origin {
            cors = cors.allowed_origin(origin);
        }

        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(state_data.clone())
            .wrap(cors)
            .wrap(middleware::SecurityHeaders)
            .wrap(middleware::SessionMiddleware::new(session_config.clone()))
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi)
            )
            .configure(api::routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
