//! Dynamic search-filter construction for thesis queries.
//!
//! The recognized filter keys live in one structured table; building a
//! predicate is a fold over that table, emitting a parameterized clause
//! for each supplied value. Filter values never reach the SQL text.

use rusqlite::types::ToSqlOutput;
use rusqlite::ToSql;
use serde::Deserialize;

use super::db::DatabaseError;

/// Raw query parameters for `GET /api/search`.
///
/// Everything arrives as an optional string; absent, empty, or
/// whitespace-only values count as "not specified".
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    pub title: Option<String>,
    pub r#abstract: Option<String>,
    pub thesis_no: Option<String>,
    pub year_start: Option<String>,
    pub year_end: Option<String>,
    pub author_id: Option<String>,
    pub supervisor_id: Option<String>,
    pub type_id: Option<String>,
    pub language_id: Option<String>,
    pub institute_id: Option<String>,
    pub university_id: Option<String>,
}

/// How a supplied value becomes a bind parameter.
#[derive(Debug, Clone, Copy)]
enum Transform {
    /// Case-insensitive substring match: lowercased and wrapped in `%`.
    Substring,
    /// Exact numeric match; non-numeric input fails the query.
    Number,
}

/// One recognized filter: its query key, predicate template, and value
/// transform.
struct FilterSpec {
    key: &'static str,
    clause: &'static str,
    transform: Transform,
}

const FILTER_SPECS: &[FilterSpec] = &[
    FilterSpec { key: "title", clause: "LOWER(t.title) LIKE ?", transform: Transform::Substring },
    FilterSpec { key: "abstract", clause: "LOWER(t.abstract) LIKE ?", transform: Transform::Substring },
    FilterSpec { key: "thesisNo", clause: "t.thesis_no = ?", transform: Transform::Number },
    FilterSpec { key: "yearStart", clause: "t.year >= ?", transform: Transform::Number },
    FilterSpec { key: "yearEnd", clause: "t.year <= ?", transform: Transform::Number },
    FilterSpec { key: "authorId", clause: "t.author_id = ?", transform: Transform::Number },
    FilterSpec { key: "supervisorId", clause: "t.supervisor_id = ?", transform: Transform::Number },
    FilterSpec { key: "typeId", clause: "t.type_id = ?", transform: Transform::Number },
    FilterSpec { key: "languageId", clause: "t.language_id = ?", transform: Transform::Number },
    FilterSpec { key: "instituteId", clause: "t.institute_id = ?", transform: Transform::Number },
    // The university filter applies to the joined university, via institute.
    FilterSpec { key: "universityId", clause: "u.university_id = ?", transform: Transform::Number },
];

/// A bind parameter produced by the builder.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    Int(i64),
}

impl ToSql for BindValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            BindValue::Text(s) => s.to_sql(),
            BindValue::Int(n) => n.to_sql(),
        }
    }
}

impl SearchFilters {
    fn value_for(&self, key: &str) -> Option<&str> {
        let raw = match key {
            "title" => &self.title,
            "abstract" => &self.r#abstract,
            "thesisNo" => &self.thesis_no,
            "yearStart" => &self.year_start,
            "yearEnd" => &self.year_end,
            "authorId" => &self.author_id,
            "supervisorId" => &self.supervisor_id,
            "typeId" => &self.type_id,
            "languageId" => &self.language_id,
            "instituteId" => &self.institute_id,
            "universityId" => &self.university_id,
            _ => return None,
        };
        raw.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    /// Fold the supplied filters into a WHERE fragment and its bind values.
    ///
    /// Supplying nothing yields an empty fragment: the conjunction of zero
    /// filters matches every record.
    pub fn where_clause(&self) -> Result<(String, Vec<BindValue>), DatabaseError> {
        let mut clauses = Vec::new();
        let mut values = Vec::new();

        for spec in FILTER_SPECS {
            if let Some(raw) = self.value_for(spec.key) {
                let value = match spec.transform {
                    Transform::Substring => BindValue::Text(format!("%{}%", raw.to_lowercase())),
                    Transform::Number => BindValue::Int(raw.parse().map_err(|_| {
                        DatabaseError::InvalidFilter(format!(
                            "{} must be numeric, got '{}'",
                            spec.key, raw
                        ))
                    })?),
                };
                clauses.push(spec.clause);
                values.push(value);
            }
        }

        if clauses.is_empty() {
            Ok((String::new(), values))
        } else {
            Ok((format!(" WHERE {}", clauses.join(" AND ")), values))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filters_builds_empty_clause() {
        let filters = SearchFilters::default();
        let (sql, values) = filters.where_clause().unwrap();
        assert_eq!(sql, "");
        assert!(values.is_empty());
    }

    #[test]
    fn test_empty_and_whitespace_values_are_not_specified() {
        let filters = SearchFilters {
            title: Some("".to_string()),
            author_id: Some("   ".to_string()),
            ..Default::default()
        };
        let (sql, values) = filters.where_clause().unwrap();
        assert_eq!(sql, "");
        assert!(values.is_empty());
    }

    #[test]
    fn test_title_builds_lowercased_substring_pattern() {
        let filters = SearchFilters {
            title: Some("Network".to_string()),
            ..Default::default()
        };
        let (sql, values) = filters.where_clause().unwrap();
        assert_eq!(sql, " WHERE LOWER(t.title) LIKE ?");
        assert_eq!(values, vec![BindValue::Text("%network%".to_string())]);
    }

    #[test]
    fn test_year_range_builds_inclusive_bounds() {
        let filters = SearchFilters {
            year_start: Some("2020".to_string()),
            year_end: Some("2022".to_string()),
            ..Default::default()
        };
        let (sql, values) = filters.where_clause().unwrap();
        assert_eq!(sql, " WHERE t.year >= ? AND t.year <= ?");
        assert_eq!(values, vec![BindValue::Int(2020), BindValue::Int(2022)]);
    }

    #[test]
    fn test_university_filter_targets_joined_table() {
        let filters = SearchFilters {
            university_id: Some("3".to_string()),
            ..Default::default()
        };
        let (sql, values) = filters.where_clause().unwrap();
        assert_eq!(sql, " WHERE u.university_id = ?");
        assert_eq!(values, vec![BindValue::Int(3)]);
    }

    #[test]
    fn test_supplied_filters_join_with_and() {
        let filters = SearchFilters {
            title: Some("security".to_string()),
            thesis_no: Some("42".to_string()),
            language_id: Some("1".to_string()),
            ..Default::default()
        };
        let (sql, values) = filters.where_clause().unwrap();
        assert_eq!(
            sql,
            " WHERE LOWER(t.title) LIKE ? AND t.thesis_no = ? AND t.language_id = ?"
        );
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn test_every_recognized_key_emits_one_clause() {
        let filters = SearchFilters {
            title: Some("a".to_string()),
            r#abstract: Some("b".to_string()),
            thesis_no: Some("1".to_string()),
            year_start: Some("2".to_string()),
            year_end: Some("3".to_string()),
            author_id: Some("4".to_string()),
            supervisor_id: Some("5".to_string()),
            type_id: Some("6".to_string()),
            language_id: Some("7".to_string()),
            institute_id: Some("8".to_string()),
            university_id: Some("9".to_string()),
        };
        let (sql, values) = filters.where_clause().unwrap();
        assert_eq!(values.len(), FILTER_SPECS.len());
        assert_eq!(sql.matches(" AND ").count(), FILTER_SPECS.len() - 1);
    }

    #[test]
    fn test_non_numeric_value_for_numeric_key_fails() {
        let filters = SearchFilters {
            author_id: Some("abc".to_string()),
            ..Default::default()
        };
        let err = filters.where_clause().unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidFilter(_)));
    }
}
