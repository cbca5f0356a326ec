use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subject and technology tags a student can pick during signup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Interest {
    Java,
    React,
    Python,
    SpringBoot,
    JavaScript,
    TypeScript,
    #[serde(rename = "MongoDB")]
    MongoDb,
    #[serde(rename = "PostgreSQL")]
    PostgreSql,
    #[serde(rename = "AI")]
    Ai,
    MachineLearning,
    WebDev,
    DataScience,
}

impl Interest {
    pub const ALL: [Interest; 12] = [
        Interest::Java,
        Interest::React,
        Interest::Python,
        Interest::SpringBoot,
        Interest::JavaScript,
        Interest::TypeScript,
        Interest::MongoDb,
        Interest::PostgreSql,
        Interest::Ai,
        Interest::MachineLearning,
        Interest::WebDev,
        Interest::DataScience,
    ];

    /// Wire name, identical to the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Interest::Java => "Java",
            Interest::React => "React",
            Interest::Python => "Python",
            Interest::SpringBoot => "SpringBoot",
            Interest::JavaScript => "JavaScript",
            Interest::TypeScript => "TypeScript",
            Interest::MongoDb => "MongoDB",
            Interest::PostgreSql => "PostgreSQL",
            Interest::Ai => "AI",
            Interest::MachineLearning => "MachineLearning",
            Interest::WebDev => "WebDev",
            Interest::DataScience => "DataScience",
        }
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interest {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interest::ALL
            .iter()
            .copied()
            .find(|interest| interest.as_str() == s)
            .ok_or_else(|| format!("unknown interest '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Student,
    Tutor,
}

/// What a student is looking for; selects the search domain they land on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StudentType {
    TutorSeeker,
    StudyBuddy,
    CampusPartner,
}

impl StudentType {
    pub fn search_domain(&self) -> SearchDomain {
        match self {
            StudentType::TutorSeeker => SearchDomain::Tutors,
            StudentType::StudyBuddy => SearchDomain::Buddies,
            StudentType::CampusPartner => SearchDomain::Partners,
        }
    }
}

/// Named grouping of tags a record can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum FacetCategory {
    Subjects,
    Interests,
    Activities,
}

impl fmt::Display for FacetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FacetCategory::Subjects => "subjects",
            FacetCategory::Interests => "interests",
            FacetCategory::Activities => "activities",
        };
        f.write_str(name)
    }
}

impl FromStr for FacetCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "subjects" => Ok(FacetCategory::Subjects),
            "interests" => Ok(FacetCategory::Interests),
            "activities" => Ok(FacetCategory::Activities),
            other => Err(format!("unknown facet category '{}'", other)),
        }
    }
}

// Map keys arrive as plain strings in both JSON and TOML
impl TryFrom<String> for FacetCategory {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One of the searchable record collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDomain {
    Tutors,
    Buddies,
    Partners,
}

impl SearchDomain {
    /// Facet categories the domain's records carry
    pub fn categories(&self) -> &'static [FacetCategory] {
        match self {
            SearchDomain::Tutors => &[FacetCategory::Subjects],
            SearchDomain::Buddies => &[FacetCategory::Subjects, FacetCategory::Interests],
            SearchDomain::Partners => &[FacetCategory::Activities, FacetCategory::Interests],
        }
    }

    pub fn offers(&self, category: FacetCategory) -> bool {
        self.categories().contains(&category)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchDomain::Tutors => "tutors",
            SearchDomain::Buddies => "buddies",
            SearchDomain::Partners => "partners",
        }
    }
}

impl fmt::Display for SearchDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchDomain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tutors" => Ok(SearchDomain::Tutors),
            "buddies" => Ok(SearchDomain::Buddies),
            "partners" => Ok(SearchDomain::Partners),
            other => Err(format!("unknown search domain '{}'", other)),
        }
    }
}
