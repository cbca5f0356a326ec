use serde::{Deserialize, Serialize};

/// Tutor offering sessions in one or more subjects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tutor {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub subjects: Vec<String>,
    pub rating: f32,
    pub experience: String,
    #[serde(rename = "hourlyRate")]
    pub hourly_rate: String,
    pub availability: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Fellow student looking for someone to study with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Buddy {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(rename = "studyStyle")]
    pub study_style: String,
    pub availability: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Student looking for company in campus activities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    pub availability: String,
    pub location: String,
    #[serde(default)]
    pub image: Option<String>,
}
