use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;
use studysync_match::config::Settings;
use studysync_match::routes::{self, AppState};
use studysync_match::services::{Catalog, SessionStore};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting StudySync match service...");

    let catalog = match &settings.catalog.path {
        Some(path) => Catalog::load(path).map_err(|e| {
            error!("Failed to load catalog from {}: {}", path, e);
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?,
        None => {
            info!("No catalog path configured, using built-in seed data");
            Catalog::seed()
        }
    };

    let sessions = SessionStore::new(
        settings.session.max_sessions,
        settings.session.idle_timeout_secs,
    );

    info!(
        "Session store initialized (max: {} sessions, idle timeout: {}s)",
        settings.session.max_sessions, settings.session.idle_timeout_secs
    );

    // Build application state
    let app_state = AppState {
        catalog: Arc::new(catalog),
        sessions,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
