//! StudySync Match - faceted search and signup state for StudySync
//!
//! This library provides the search core used by the StudySync dashboard:
//! one generic filter shared by the tutor, study buddy and campus partner
//! collections, plus the in-progress signup record.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{faceted_filter, filter_records, route_search, Collection, Matchable, ProfileDraft, RecordFacets, Selections};
pub use models::{Interest, Role, StudentType, FacetCategory, SearchDomain, Tutor, Buddy, Partner};
pub use services::{Catalog, SessionStore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let catalog = Catalog::seed();
        let all = filter_records(&catalog.tutors.records, "", &Selections::new());
        assert_eq!(all.len(), catalog.tutors.records.len());
    }
}
