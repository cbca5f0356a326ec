use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::core::route_search;
use crate::error::ApiError;
use crate::models::{DashboardResponse, DashboardView, RouteSearchRequest, RouteSearchResponse};
use crate::routes::AppState;

/// Configure all dashboard routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/dashboard/route", web::post().to(route))
        .route("/dashboard/{id}", web::get().to(dashboard));
}

/// Pick the search page for the dashboard search box
///
/// POST /api/v1/dashboard/route
async fn route(req: web::Json<RouteSearchRequest>) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let domain = route_search(&req.query).ok_or(ApiError::BlankQuery)?;
    tracing::debug!("Dashboard query {:?} routed to {}", req.query, domain);

    Ok(HttpResponse::Ok().json(RouteSearchResponse { domain }))
}

/// Dashboard summary for a signup session
///
/// GET /api/v1/dashboard/{id}
async fn dashboard(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let handle = state
        .sessions
        .get(&id)
        .await
        .ok_or(ApiError::SessionNotFound(id))?;
    let draft = handle.lock().await;

    // TODO: serve DashboardView::Tutor once tutor accounts are confirmed as a product feature
    Ok(HttpResponse::Ok().json(DashboardResponse {
        greeting_name: draft.display_name().to_string(),
        view: DashboardView::Student,
        suggested_domain: draft.student_type().map(|t| t.search_domain()),
    }))
}
