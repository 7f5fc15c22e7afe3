use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct University {
    pub university_id: i64,
    pub name: String,
}

/// An institute, always attached to one university. Reads carry the
/// joined university name for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Institute {
    pub institute_id: i64,
    pub name: String,
    pub university_id: i64,
    pub university_name: String,
}

/// Create/update payload for an institute.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInstitute {
    pub name: String,
    pub university_id: i64,
}

/// Row in one of the name-only lookup tables (language, type, topic, keyword).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupEntry {
    pub id: i64,
    pub name: String,
}
