use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::core::Selections;
use crate::models::domain::{Role, StudentType};

/// Request to search one domain
///
/// Both fields are optional; an empty body returns the whole collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub selections: Selections,
}

/// Partial update of a signup draft
///
/// Absent fields are left alone. For `age`, `role` and `studentType` an
/// explicit `null` clears the value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub age: Option<Option<u32>>,
    pub gender: Option<String>,
    pub degree: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub role: Option<Option<Role>>,
    #[serde(default, deserialize_with = "present")]
    pub student_type: Option<Option<StudentType>>,
}

/// Distinguishes a field sent as `null` from a field left out
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Dashboard search box submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RouteSearchRequest {
    #[validate(length(min = 1))]
    pub query: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_update_null_vs_missing() {
        let update: ProfileUpdate =
            serde_json::from_str(r#"{"name": "Om", "age": null}"#).unwrap();
        assert_eq!(update.name.as_deref(), Some("Om"));
        assert_eq!(update.age, Some(None));
        assert_eq!(update.role, None);
        assert_eq!(update.student_type, None);
    }

    #[test]
    fn test_profile_update_values() {
        let update: ProfileUpdate = serde_json::from_str(
            r#"{"age": 21, "role": "Student", "studentType": "StudyBuddy"}"#,
        )
        .unwrap();
        assert_eq!(update.age, Some(Some(21)));
        assert_eq!(update.role, Some(Some(Role::Student)));
        assert_eq!(update.student_type, Some(Some(StudentType::StudyBuddy)));
    }

    #[test]
    fn test_search_request_defaults() {
        let req: SearchRequest = serde_json::from_str("{}").unwrap();
        assert!(req.query.is_empty());
        assert!(req.selections.is_empty());
    }
}
