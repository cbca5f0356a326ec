// Route exports
pub mod dashboard;
pub mod search;
pub mod signup;

use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::error::{handle_json_payload_error, handle_path_error};
use crate::models::HealthResponse;
use crate::services::{Catalog, SessionStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub sessions: SessionStore,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::PathConfig::default().error_handler(handle_path_error))
            .route("/health", web::get().to(health_check))
            .configure(signup::configure)
            .configure(search::configure)
            .configure(dashboard::configure),
    );
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    tracing::trace!("Health check with {} live sessions", state.sessions.len());

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}
