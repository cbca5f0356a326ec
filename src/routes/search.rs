use actix_web::{web, HttpResponse};

use crate::error::ApiError;
use crate::models::{FacetsResponse, SearchDomain, SearchRequest};
use crate::routes::AppState;

/// Configure all search-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/search/{domain}", web::post().to(search))
        .route("/search/{domain}/facets", web::get().to(facets));
}

fn parse_domain(raw: &str) -> Result<SearchDomain, ApiError> {
    raw.parse().map_err(ApiError::UnknownDomain)
}

/// List the tags that can be selected in a domain
///
/// GET /api/v1/search/{domain}/facets
async fn facets(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let domain = parse_domain(&path)?;

    Ok(HttpResponse::Ok().json(FacetsResponse {
        domain,
        facets: state.catalog.facets(domain).clone(),
    }))
}

/// Search one domain
///
/// POST /api/v1/search/{domain}
///
/// Request body:
/// ```json
/// {
///   "query": "string",
///   "selections": { "subjects": ["Python", "React"] }
/// }
/// ```
async fn search(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<SearchRequest>,
) -> Result<HttpResponse, ApiError> {
    let domain = parse_domain(&path)?;

    // An empty selection constrains nothing, whatever its category
    if let Some((category, _)) = req
        .selections
        .iter()
        .find(|(c, tags)| !tags.is_empty() && !domain.offers(**c))
    {
        return Err(ApiError::CategoryNotOffered {
            domain,
            category: *category,
        });
    }

    let results = state.catalog.search(domain, &req.query, &req.selections);

    tracing::info!(
        "Search in {} for {:?} returned {} of {}",
        domain,
        req.query,
        results.shown(),
        results.total()
    );

    Ok(HttpResponse::Ok().json(results))
}
