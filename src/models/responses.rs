use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::core::ProfileDraft;
use crate::models::domain::{FacetCategory, SearchDomain};
use crate::models::records::{Buddy, Partner, Tutor};

/// Response for the search endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse<T> {
    pub results: Vec<T>,
    pub shown: usize,
    pub total: usize,
}

/// Search results for whichever domain was queried
///
/// Serializes as the inner [`SearchResponse`], without a domain tag.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SearchResults<'a> {
    Tutors(SearchResponse<&'a Tutor>),
    Buddies(SearchResponse<&'a Buddy>),
    Partners(SearchResponse<&'a Partner>),
}

impl SearchResults<'_> {
    pub fn shown(&self) -> usize {
        match self {
            SearchResults::Tutors(r) => r.shown,
            SearchResults::Buddies(r) => r.shown,
            SearchResults::Partners(r) => r.shown,
        }
    }

    pub fn total(&self) -> usize {
        match self {
            SearchResults::Tutors(r) => r.total,
            SearchResults::Buddies(r) => r.total,
            SearchResults::Partners(r) => r.total,
        }
    }
}

/// Tags offered for selection in one domain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacetsResponse {
    pub domain: SearchDomain,
    pub facets: BTreeMap<FacetCategory, Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub profile: ProfileDraft,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteSearchResponse {
    pub domain: SearchDomain,
}

/// Which dashboard layout to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardView {
    Student,
    Tutor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub greeting_name: String,
    pub view: DashboardView,
    /// Search page matching the chosen student type, if any
    pub suggested_domain: Option<SearchDomain>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
