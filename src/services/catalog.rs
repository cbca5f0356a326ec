use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use thiserror::Error;

use crate::core::{Collection, Matchable, Selections};
use crate::models::{Buddy, FacetCategory, Partner, SearchDomain, SearchResponse, SearchResults, Tutor};

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Duplicate id {id} in {domain}")]
    DuplicateId { domain: SearchDomain, id: u32 },

    #[error("{domain} does not offer facet category '{category}'")]
    UnknownCategory {
        domain: SearchDomain,
        category: FacetCategory,
    },
}

/// All searchable collections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub tutors: Collection<Tutor>,
    #[serde(default)]
    pub buddies: Collection<Buddy>,
    #[serde(default)]
    pub partners: Collection<Partner>,
}

impl Catalog {
    /// Load a catalog from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml(&raw)?;

        tracing::info!(
            "Loaded catalog from {} ({} tutors, {} buddies, {} partners)",
            path.display(),
            catalog.tutors.records.len(),
            catalog.buddies.records.len(),
            catalog.partners.records.len()
        );

        Ok(catalog)
    }

    pub fn from_toml(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check id uniqueness and facet keys of every collection
    pub fn validate(&self) -> Result<(), CatalogError> {
        check_collection(SearchDomain::Tutors, &self.tutors, |t| t.id)?;
        check_collection(SearchDomain::Buddies, &self.buddies, |b| b.id)?;
        check_collection(SearchDomain::Partners, &self.partners, |p| p.id)?;
        Ok(())
    }

    /// Tag vocabulary offered by `domain`
    pub fn facets(&self, domain: SearchDomain) -> &BTreeMap<FacetCategory, Vec<String>> {
        match domain {
            SearchDomain::Tutors => &self.tutors.facets,
            SearchDomain::Buddies => &self.buddies.facets,
            SearchDomain::Partners => &self.partners.facets,
        }
    }

    /// Run a search against one domain
    pub fn search(
        &self,
        domain: SearchDomain,
        query: &str,
        selections: &Selections,
    ) -> SearchResults<'_> {
        match domain {
            SearchDomain::Tutors => SearchResults::Tutors(respond(&self.tutors, query, selections)),
            SearchDomain::Buddies => SearchResults::Buddies(respond(&self.buddies, query, selections)),
            SearchDomain::Partners => SearchResults::Partners(respond(&self.partners, query, selections)),
        }
    }

    /// Built-in demo data
    pub fn seed() -> Self {
        Self {
            tutors: Collection {
                records: seed_tutors(),
                facets: BTreeMap::from([(
                    FacetCategory::Subjects,
                    strings(&SUBJECTS),
                )]),
            },
            buddies: Collection {
                records: seed_buddies(),
                facets: BTreeMap::from([
                    (FacetCategory::Subjects, strings(&SUBJECTS)),
                    (FacetCategory::Interests, strings(&BUDDY_INTERESTS)),
                ]),
            },
            partners: Collection {
                records: seed_partners(),
                facets: BTreeMap::from([
                    (FacetCategory::Activities, strings(&ACTIVITIES)),
                    (FacetCategory::Interests, strings(&PARTNER_INTERESTS)),
                ]),
            },
        }
    }
}

fn check_collection<R>(
    domain: SearchDomain,
    collection: &Collection<R>,
    id: impl Fn(&R) -> u32,
) -> Result<(), CatalogError> {
    if let Some(category) = collection.facets.keys().find(|c| !domain.offers(**c)) {
        return Err(CatalogError::UnknownCategory {
            domain,
            category: *category,
        });
    }

    let mut seen = HashSet::with_capacity(collection.records.len());
    for record in &collection.records {
        let id = id(record);
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId { domain, id });
        }
    }

    Ok(())
}

fn respond<'c, R: Matchable>(
    collection: &'c Collection<R>,
    query: &str,
    selections: &Selections,
) -> SearchResponse<&'c R> {
    let outcome = collection.search(query, selections);
    SearchResponse {
        shown: outcome.matches.len(),
        total: outcome.total,
        results: outcome.matches,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

const SUBJECTS: [&str; 11] = [
    "Python",
    "React",
    "Java",
    "JavaScript",
    "TypeScript",
    "Machine Learning",
    "Data Science",
    "Web Development",
    "Spring Boot",
    "UI/UX Design",
    "Database Design",
];

const BUDDY_INTERESTS: [&str; 14] = [
    "AI Research",
    "Competitive Programming",
    "Hackathons",
    "Web Development",
    "UI/UX Design",
    "Open Source",
    "Backend Development",
    "System Design",
    "Cloud Computing",
    "Data Visualization",
    "Research",
    "Frontend Development",
    "Accessibility",
    "Performance Optimization",
];

const ACTIVITIES: [&str; 15] = [
    "Hiking",
    "Camping",
    "Cricket",
    "Football",
    "Basketball",
    "Swimming",
    "Rock Climbing",
    "Cycling",
    "Yoga",
    "Dancing",
    "Volleyball",
    "Tennis",
    "Golf",
    "Running",
    "Photography",
];

const PARTNER_INTERESTS: [&str; 12] = [
    "Outdoor Adventures",
    "Sports",
    "Nature",
    "Team Sports",
    "Fitness",
    "Competition",
    "Adventure Sports",
    "Outdoor Activities",
    "Exploration",
    "Wellness",
    "Team Activities",
    "Individual Sports",
];

fn avatar(n: u32) -> Option<String> {
    Some(format!("https://i.pravatar.cc/150?img={}", n))
}

fn seed_tutors() -> Vec<Tutor> {
    let rows: [(&str, [&str; 3], f32, &str, &str, &str, u32); 9] = [
        ("Aneesh Puranik", ["Python", "Machine Learning", "Data Science"], 4.9, "5 years", "$45", "Weekdays, Evenings", 1),
        ("Aryan Tambe", ["React", "JavaScript", "TypeScript"], 4.8, "3 years", "$40", "Weekends, Afternoons", 2),
        ("Om Kute", ["Java", "Spring Boot", "Web Development"], 4.7, "4 years", "$35", "Flexible", 3),
        ("Emily Rodriguez", ["Python", "Data Science", "Web Development"], 4.6, "2 years", "$30", "Evenings, Weekends", 4),
        ("David Wilson", ["React", "JavaScript", "UI/UX Design"], 4.9, "6 years", "$50", "Weekdays, Mornings", 5),
        ("Dr. Sarah Johnson", ["Python", "Machine Learning", "Data Science"], 4.9, "5 years", "$45", "Weekdays, Evenings", 1),
        ("Prof. Michael Chen", ["React", "JavaScript", "TypeScript"], 4.8, "3 years", "$40", "Weekends, Afternoons", 2),
        ("Lisa Blackwell", ["Java", "Spring Boot", "Web Development"], 4.7, "4 years", "$35", "Flexible", 3),
        ("James Taylor", ["Java", "Spring Boot", "Database Design"], 4.5, "3 years", "$38", "Flexible", 6),
    ];

    rows.iter()
        .zip(1..)
        .map(|(&(name, subjects, rating, experience, rate, availability, img), id)| Tutor {
            id,
            name: name.to_string(),
            subjects: strings(&subjects),
            rating,
            experience: experience.to_string(),
            hourly_rate: rate.to_string(),
            availability: availability.to_string(),
            image: avatar(img),
        })
        .collect()
}

fn seed_buddies() -> Vec<Buddy> {
    let rows: [(&str, [&str; 3], [&str; 3], &str, &str); 5] = [
        ("Aneesh Puranik", ["Python", "Machine Learning", "Data Science"], ["AI Research", "Competitive Programming", "Hackathons"], "Focused, Regular Sessions", "Weekdays, Evenings"),
        ("Aryan Tambe", ["React", "JavaScript", "TypeScript"], ["Web Development", "UI/UX Design", "Open Source"], "Collaborative, Project-based", "Weekends, Afternoons"),
        ("Om Kute", ["Java", "Spring Boot", "Web Development"], ["Backend Development", "System Design", "Cloud Computing"], "Structured, Goal-oriented", "Flexible"),
        ("Emily Rodriguez", ["Python", "Data Science", "Web Development"], ["Data Visualization", "Machine Learning", "Research"], "Analytical, Detail-oriented", "Evenings, Weekends"),
        ("David Wilson", ["React", "JavaScript", "UI/UX Design"], ["Frontend Development", "Accessibility", "Performance Optimization"], "Creative, Experiment-driven", "Weekdays, Mornings"),
    ];

    rows.iter()
        .zip(1..)
        .map(|(&(name, subjects, interests, style, availability), id)| Buddy {
            id,
            name: name.to_string(),
            subjects: strings(&subjects),
            interests: strings(&interests),
            study_style: style.to_string(),
            availability: availability.to_string(),
            image: avatar(id),
        })
        .collect()
}

fn seed_partners() -> Vec<Partner> {
    let rows: [(&str, [&str; 3], [&str; 3], &str, &str); 5] = [
        ("Aneesh Puranik", ["Hiking", "Cricket", "Photography"], ["Outdoor Adventures", "Sports", "Nature"], "Weekends, Afternoons", "Main Campus"),
        ("Aryan Tambe", ["Football", "Basketball", "Swimming"], ["Team Sports", "Fitness", "Competition"], "Evenings, Weekends", "Sports Complex"),
        ("Om Kute", ["Camping", "Rock Climbing", "Cycling"], ["Adventure Sports", "Outdoor Activities", "Exploration"], "Flexible", "Off-Campus"),
        ("Emily Rodriguez", ["Yoga", "Dancing", "Volleyball"], ["Fitness", "Wellness", "Team Activities"], "Mornings, Weekends", "Fitness Center"),
        ("David Wilson", ["Tennis", "Golf", "Running"], ["Individual Sports", "Outdoor Activities", "Fitness"], "Weekdays, Mornings", "Sports Complex"),
    ];

    rows.iter()
        .zip(1..)
        .map(|(&(name, activities, interests, availability, location), id)| Partner {
            id,
            name: name.to_string(),
            activities: strings(&activities),
            interests: strings(&interests),
            availability: availability.to_string(),
            location: location.to_string(),
            image: avatar(id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_seed_is_valid() {
        let catalog = Catalog::seed();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.tutors.records.len(), 9);
        assert_eq!(catalog.buddies.records.len(), 5);
        assert_eq!(catalog.partners.records.len(), 5);
    }

    #[test]
    fn test_seed_facets_follow_domains() {
        let catalog = Catalog::seed();
        for domain in [SearchDomain::Tutors, SearchDomain::Buddies, SearchDomain::Partners] {
            let keys: Vec<FacetCategory> = catalog.facets(domain).keys().copied().collect();
            let mut expected = domain.categories().to_vec();
            expected.sort();
            assert_eq!(keys, expected);
        }
    }

    #[test]
    fn test_from_toml() {
        let raw = r#"
            [tutors.facets]
            subjects = ["Rust"]

            [[tutors.records]]
            id = 1
            name = "Ferris"
            subjects = ["Rust"]
            rating = 5.0
            experience = "10 years"
            hourlyRate = "$0"
            availability = "Always"
        "#;

        let catalog = Catalog::from_toml(raw).unwrap();
        assert_eq!(catalog.tutors.records[0].name, "Ferris");
        assert_eq!(catalog.tutors.records[0].image, None);
        assert!(catalog.buddies.records.is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let raw = r#"
            [[partners.records]]
            id = 7
            name = "A"
            availability = "Flexible"
            location = "Main Campus"

            [[partners.records]]
            id = 7
            name = "B"
            availability = "Flexible"
            location = "Main Campus"
        "#;

        let err = Catalog::from_toml(raw).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateId { domain: SearchDomain::Partners, id: 7 }
        ));
    }

    #[test]
    fn test_foreign_category_rejected() {
        let raw = r#"
            [tutors.facets]
            activities = ["Hiking"]
        "#;

        let err = Catalog::from_toml(raw).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory { .. }));
    }

    #[test]
    fn test_search_reports_counts() {
        let catalog = Catalog::seed();
        let selections = Selections::from([(
            FacetCategory::Activities,
            BTreeSet::from(["Tennis".to_string(), "Yoga".to_string()]),
        )]);

        let results = catalog.search(SearchDomain::Partners, "", &selections);

        assert_eq!(results.shown(), 2);
        assert_eq!(results.total(), 5);
        match results {
            SearchResults::Partners(response) => {
                let names: Vec<&str> = response.results.iter().map(|p| p.name.as_str()).collect();
                assert_eq!(names, vec!["Emily Rodriguez", "David Wilson"]);
            }
            other => panic!("expected partner results, got {:?}", other),
        }
    }

    #[test]
    fn test_search_results_serialize_flat() {
        let catalog = Catalog::seed();

        let json = serde_json::to_value(catalog.search(SearchDomain::Tutors, "ryan", &Selections::new())).unwrap();

        assert_eq!(json["shown"], 1);
        assert_eq!(json["total"], 9);
        assert_eq!(json["results"][0]["hourlyRate"], "$40");
    }
}
