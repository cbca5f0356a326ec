use serde::Serialize;

use crate::models::{Interest, Role, StudentType};

/// Signup record being filled in, one per session
///
/// Every setter accepts any value; nothing here can fail. `interests`
/// behaves as a set that remembers the order tags were picked in.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    name: String,
    age: Option<u32>,
    gender: String,
    degree: String,
    email: String,
    interests: Vec<Interest>,
    role: Option<Role>,
    student_type: Option<StudentType>,
}

impl ProfileDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn set_age(&mut self, age: Option<u32>) {
        self.age = age;
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn set_gender(&mut self, gender: impl Into<String>) {
        self.gender = gender.into();
    }

    pub fn degree(&self) -> &str {
        &self.degree
    }

    pub fn set_degree(&mut self, degree: impl Into<String>) {
        self.degree = degree.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn interests(&self) -> &[Interest] {
        &self.interests
    }

    pub fn has_interest(&self, interest: Interest) -> bool {
        self.interests.contains(&interest)
    }

    /// Remove `interest` if picked, otherwise add it
    ///
    /// Returns whether the interest is picked afterwards.
    pub fn toggle_interest(&mut self, interest: Interest) -> bool {
        if let Some(pos) = self.interests.iter().position(|i| *i == interest) {
            self.interests.remove(pos);
            false
        } else {
            self.interests.push(interest);
            true
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn set_role(&mut self, role: Option<Role>) {
        self.role = role;
    }

    pub fn student_type(&self) -> Option<StudentType> {
        self.student_type
    }

    pub fn set_student_type(&mut self, student_type: Option<StudentType>) {
        self.student_type = student_type;
    }

    /// Name to greet the user with on the dashboard
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "there"
        } else {
            &self.name
        }
    }
}
