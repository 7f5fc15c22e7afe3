use serde::{Deserialize, Serialize};

/// Academic title attached to a person record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonTitle {
    Student,
    #[serde(rename = "Dr.")]
    Dr,
    #[serde(rename = "Prof.")]
    Prof,
    #[serde(rename = "Assoc. Prof.")]
    AssocProf,
}

impl Default for PersonTitle {
    fn default() -> Self {
        PersonTitle::Student
    }
}

/// A person who may serve as a thesis author or supervisor (or both;
/// no role constraint is enforced).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub person_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub title: PersonTitle,
    pub email: String,
}

/// Create/update payload for a person.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPerson {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub title: PersonTitle,
    pub email: String,
}
