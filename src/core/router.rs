use crate::models::SearchDomain;

/// Pick the search domain for a dashboard query
///
/// Keywords are checked in order: `tutor`, then `buddy`/`study`, then
/// `partner`/`campus`. Anything else lands on tutors. Blank queries go
/// nowhere.
pub fn route_search(query: &str) -> Option<SearchDomain> {
    if query.trim().is_empty() {
        return None;
    }

    let query = query.to_lowercase();

    let domain = if query.contains("tutor") {
        SearchDomain::Tutors
    } else if query.contains("buddy") || query.contains("study") {
        SearchDomain::Buddies
    } else if query.contains("partner") || query.contains("campus") {
        SearchDomain::Partners
    } else {
        SearchDomain::Tutors
    };

    Some(domain)
}
