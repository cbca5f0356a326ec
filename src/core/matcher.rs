use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::core::filters::{matches_selections, matches_text};
use crate::models::{Buddy, FacetCategory, Partner, Tutor};

/// Selected tags per facet category
pub type Selections = BTreeMap<FacetCategory, BTreeSet<String>>;

/// Borrowed view of the parts of a record the filter looks at
#[derive(Debug, Clone)]
pub struct RecordFacets<'a> {
    pub name: &'a str,
    pub facets: Vec<(FacetCategory, &'a [String])>,
}

impl<'a> RecordFacets<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            facets: Vec::new(),
        }
    }

    pub fn with(mut self, category: FacetCategory, tags: &'a [String]) -> Self {
        self.facets.push((category, tags));
        self
    }

    /// Tags carried for `category`; empty if the record has none
    pub fn tags(&self, category: FacetCategory) -> &'a [String] {
        self.facets
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, tags)| *tags)
            .unwrap_or(&[])
    }

    pub fn all_tags(&self) -> impl Iterator<Item = &'a String> + '_ {
        self.facets.iter().flat_map(|&(_, tags)| tags.iter())
    }
}

/// Records that can be searched by name and facet tags
pub trait Matchable {
    fn facets(&self) -> RecordFacets<'_>;
}

impl Matchable for Tutor {
    fn facets(&self) -> RecordFacets<'_> {
        RecordFacets::new(&self.name).with(FacetCategory::Subjects, &self.subjects)
    }
}

impl Matchable for Buddy {
    fn facets(&self) -> RecordFacets<'_> {
        RecordFacets::new(&self.name)
            .with(FacetCategory::Subjects, &self.subjects)
            .with(FacetCategory::Interests, &self.interests)
    }
}

impl Matchable for Partner {
    fn facets(&self) -> RecordFacets<'_> {
        RecordFacets::new(&self.name)
            .with(FacetCategory::Activities, &self.activities)
            .with(FacetCategory::Interests, &self.interests)
    }
}

/// Filter `records` by free-text query and per-category tag selections
///
/// A record is kept when the query matches its name or any tag
/// (case-insensitive substring) and, for every category with a non-empty
/// selection, it carries at least one selected tag. The result keeps the
/// input order.
///
/// # Arguments
/// * `records` - Collection to filter
/// * `query` - Free-text query; empty matches everything
/// * `selections` - Selected tags per category
/// * `extract` - Produces the searchable view of a record
pub fn faceted_filter<'r, R, F>(
    records: &'r [R],
    query: &str,
    selections: &Selections,
    extract: F,
) -> Vec<&'r R>
where
    F: Fn(&'r R) -> RecordFacets<'r>,
{
    let needle = query.to_lowercase();

    records
        .iter()
        .filter(|record| {
            let facets = extract(*record);
            matches_text(&facets, &needle) && matches_selections(&facets, selections)
        })
        .collect()
}

/// [`faceted_filter`] using the record's own [`Matchable`] view
pub fn filter_records<'r, R: Matchable>(
    records: &'r [R],
    query: &str,
    selections: &Selections,
) -> Vec<&'r R> {
    faceted_filter(records, query, selections, R::facets)
}

/// Result of searching one collection
#[derive(Debug)]
pub struct SearchOutcome<'r, R> {
    pub matches: Vec<&'r R>,
    /// Size of the whole collection
    pub total: usize,
}

/// Read-only record collection plus the tags the UI offers for selection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "R: Deserialize<'de>"))]
pub struct Collection<R> {
    #[serde(default)]
    pub records: Vec<R>,
    #[serde(default)]
    pub facets: BTreeMap<FacetCategory, Vec<String>>,
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            facets: BTreeMap::new(),
        }
    }
}

impl<R: Matchable> Collection<R> {
    pub fn search(&self, query: &str, selections: &Selections) -> SearchOutcome<'_, R> {
        SearchOutcome {
            matches: filter_records(&self.records, query, selections),
            total: self.records.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tutor(id: u32, name: &str, subjects: &[&str]) -> Tutor {
        Tutor {
            id,
            name: name.to_string(),
            subjects: subjects.iter().map(|s| s.to_string()).collect(),
            rating: 4.5,
            experience: "3 years".to_string(),
            hourly_rate: "$40".to_string(),
            availability: "Flexible".to_string(),
            image: None,
        }
    }

    fn subjects(values: &[&str]) -> Selections {
        Selections::from([(
            FacetCategory::Subjects,
            values.iter().map(|v| v.to_string()).collect(),
        )])
    }

    fn ids(records: &[&Tutor]) -> Vec<u32> {
        records.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_query_matches_name_substring() {
        let tutors = vec![tutor(1, "Aneesh", &["Python"]), tutor(2, "Aryan", &["React"])];

        let result = filter_records(&tutors, "ryan", &Selections::new());

        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn test_selection_only() {
        let tutors = vec![tutor(1, "Aneesh", &["Python"]), tutor(2, "Aryan", &["React"])];

        let result = filter_records(&tutors, "", &subjects(&["Python"]));

        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn test_nonexistent_query_is_empty() {
        let tutors = vec![tutor(1, "Aneesh", &["Python"]), tutor(2, "Aryan", &["React"])];

        assert!(filter_records(&tutors, "nonexistent", &Selections::new()).is_empty());
        assert!(filter_records(&tutors, "nonexistent", &subjects(&["Python"])).is_empty());
    }

    #[test]
    fn test_empty_collection() {
        let tutors: Vec<Tutor> = vec![];
        assert!(filter_records(&tutors, "", &Selections::new()).is_empty());
    }

    #[test]
    fn test_custom_extractor_limits_search_surface() {
        let tutors = vec![tutor(1, "Aneesh", &["Python"]), tutor(2, "Aryan", &["React"])];

        // Name-only view: tag text no longer matches
        let result = faceted_filter(&tutors, "python", &Selections::new(), |t| {
            RecordFacets::new(&t.name)
        });

        assert!(result.is_empty());
    }

    #[test]
    fn test_collection_search_reports_total() {
        let collection = Collection {
            records: vec![
                tutor(1, "Aneesh", &["Python"]),
                tutor(2, "Aryan", &["React"]),
                tutor(3, "Om", &["Java"]),
            ],
            facets: BTreeMap::new(),
        };

        let outcome = collection.search("ar", &subjects(&["Java", "React"]));

        assert_eq!(outcome.total, 3);
        assert_eq!(ids(&outcome.matches), vec![2]);
    }

    #[test]
    fn test_collection_deserializes_without_record_default() {
        let collection: Collection<Tutor> = serde_json::from_str(
            r#"{"records": [{"id": 4, "name": "Emily", "rating": 4.6,
                "experience": "2 years", "hourlyRate": "$30", "availability": "Flexible"}]}"#,
        )
        .unwrap();

        assert_eq!(ids(&collection.records.iter().collect::<Vec<_>>()), vec![4]);
        assert!(collection.facets.is_empty());

        let empty: Collection<Tutor> = serde_json::from_str("{}").unwrap();
        assert!(empty.records.is_empty());
    }
}
