// Model exports
pub mod domain;
pub mod records;
pub mod requests;
pub mod responses;

pub use domain::{Interest, Role, StudentType, FacetCategory, SearchDomain};
pub use records::{Tutor, Buddy, Partner};
pub use requests::{SearchRequest, ProfileUpdate, RouteSearchRequest};
pub use responses::{SearchResponse, SearchResults, FacetsResponse, SessionResponse, RouteSearchResponse, DashboardView, DashboardResponse, HealthResponse, ErrorResponse};
