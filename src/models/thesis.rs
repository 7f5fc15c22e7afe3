use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalogued thesis record as stored, without joined reference names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thesis {
    pub thesis_no: i64,
    pub title: String,
    pub r#abstract: String,
    pub year: i32,
    pub page_num: i32,
    pub type_id: i64,
    pub institute_id: i64,
    pub author_id: i64,
    pub supervisor_id: i64,
    pub language_id: i64,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// Registration payload: all ten fields are required, there is no
/// partial or draft creation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewThesis {
    pub thesis_no: i64,
    pub title: String,
    pub r#abstract: String,
    pub year: i32,
    pub page_num: i32,
    pub type_id: i64,
    pub institute_id: i64,
    pub author_id: i64,
    pub supervisor_id: i64,
    pub language_id: i64,
}

/// A search hit: the thesis row augmented with the names of its joined
/// references (author, institute, university, language, type).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThesisSearchResult {
    pub thesis_no: i64,
    pub title: String,
    pub r#abstract: String,
    pub year: i32,
    pub page_num: i32,
    pub type_id: i64,
    pub institute_id: i64,
    pub author_id: i64,
    pub supervisor_id: i64,
    pub language_id: i64,
    pub created_at: DateTime<Utc>,

    pub author_first_name: String,
    pub author_last_name: String,
    pub institute_name: String,
    pub university_name: String,
    pub language_name: String,
    pub type_name: String,
}
