// Core logic exports
pub mod filters;
pub mod matcher;
pub mod profile;
pub mod router;

pub use filters::{matches_text, matches_selections};
pub use matcher::{faceted_filter, filter_records, Collection, Matchable, RecordFacets, SearchOutcome, Selections};
pub use profile::ProfileDraft;
pub use router::route_search;
