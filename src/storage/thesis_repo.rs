//! Thesis repository: registration, listing, deletion, and filtered search.

use chrono::{DateTime, Utc};
use rusqlite::{params, params_from_iter, Connection, Row};

use crate::models::thesis::{NewThesis, Thesis, ThesisSearchResult};
use super::db::DatabaseError;
use super::search::SearchFilters;

/// Repository for thesis operations.
pub struct ThesisRepo<'a> {
    conn: &'a Connection,
}

impl<'a> ThesisRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Register a new thesis. All references must already exist; a
    /// duplicate thesis number or a missing foreign key fails the insert.
    pub fn insert(&self, new: &NewThesis) -> Result<Thesis, DatabaseError> {
        let created_at = Utc::now();

        self.conn.execute(
            "INSERT INTO theses (
                thesis_no, title, abstract, year, page_num,
                type_id, institute_id, author_id, supervisor_id, language_id,
                created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                new.thesis_no,
                new.title,
                new.r#abstract,
                new.year,
                new.page_num,
                new.type_id,
                new.institute_id,
                new.author_id,
                new.supervisor_id,
                new.language_id,
                created_at.to_rfc3339(),
            ],
        )?;

        Ok(Thesis {
            thesis_no: new.thesis_no,
            title: new.title.clone(),
            r#abstract: new.r#abstract.clone(),
            year: new.year,
            page_num: new.page_num,
            type_id: new.type_id,
            institute_id: new.institute_id,
            author_id: new.author_id,
            supervisor_id: new.supervisor_id,
            language_id: new.language_id,
            created_at,
        })
    }

    /// List every thesis, newest year first. No reference names are
    /// joined here; that is the search surface's job.
    pub fn list(&self) -> Result<Vec<Thesis>, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT thesis_no, title, abstract, year, page_num,
                    type_id, institute_id, author_id, supervisor_id, language_id,
                    created_at
             FROM theses
             ORDER BY year DESC",
        )?;

        let rows = stmt.query_map([], |row| self.row_to_thesis(row))?;

        let mut theses = Vec::new();
        for row in rows {
            theses.push(row?);
        }
        Ok(theses)
    }

    /// Delete a thesis by its number. Returns whether a row was removed;
    /// the caller decides what a miss means.
    pub fn delete(&self, thesis_no: i64) -> Result<bool, DatabaseError> {
        let count = self
            .conn
            .execute("DELETE FROM theses WHERE thesis_no = ?", [thesis_no])?;
        Ok(count > 0)
    }

    /// Search theses with the supplied filters, joined with the names of
    /// every referenced entity, newest year first.
    pub fn search(&self, filters: &SearchFilters) -> Result<Vec<ThesisSearchResult>, DatabaseError> {
        let (where_sql, values) = filters.where_clause()?;

        let sql = format!(
            "SELECT t.thesis_no, t.title, t.abstract, t.year, t.page_num,
                    t.type_id, t.institute_id, t.author_id, t.supervisor_id, t.language_id,
                    t.created_at,
                    a.first_name, a.last_name,
                    i.name, u.name, l.name, ty.name
             FROM theses t
             JOIN people a ON a.person_id = t.author_id
             JOIN institutes i ON i.institute_id = t.institute_id
             JOIN universities u ON u.university_id = i.university_id
             JOIN languages l ON l.language_id = t.language_id
             JOIN types ty ON ty.type_id = t.type_id{}
             ORDER BY t.year DESC",
            where_sql
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(values.iter()), |row| {
            Ok(ThesisSearchResult {
                thesis_no: row.get(0)?,
                title: row.get(1)?,
                r#abstract: row.get(2)?,
                year: row.get(3)?,
                page_num: row.get(4)?,
                type_id: row.get(5)?,
                institute_id: row.get(6)?,
                author_id: row.get(7)?,
                supervisor_id: row.get(8)?,
                language_id: row.get(9)?,
                created_at: parse_timestamp(row.get::<_, String>(10)?),
                author_first_name: row.get(11)?,
                author_last_name: row.get(12)?,
                institute_name: row.get(13)?,
                university_name: row.get(14)?,
                language_name: row.get(15)?,
                type_name: row.get(16)?,
            })
        })?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    fn row_to_thesis(&self, row: &Row) -> rusqlite::Result<Thesis> {
        Ok(Thesis {
            thesis_no: row.get(0)?,
            title: row.get(1)?,
            r#abstract: row.get(2)?,
            year: row.get(3)?,
            page_num: row.get(4)?,
            type_id: row.get(5)?,
            institute_id: row.get(6)?,
            author_id: row.get(7)?,
            supervisor_id: row.get(8)?,
            language_id: row.get(9)?,
            created_at: parse_timestamp(row.get::<_, String>(10)?),
        })
    }
}

fn parse_timestamp(raw: String) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(&raw)
        .map(|d| d.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::person::{NewPerson, PersonTitle};
    use crate::models::reference::NewInstitute;
    use crate::storage::institute_repo::InstituteRepo;
    use crate::storage::lookup_repo::{LookupKind, LookupRepo};
    use crate::storage::person_repo::PersonRepo;
    use crate::storage::university_repo::UniversityRepo;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
        conn.execute_batch(include_str!("schema.sql")).unwrap();
        conn
    }

    /// University 1, institute 1, people 1 and 2, language 1, type 1.
    fn seed_references(conn: &Connection) {
        UniversityRepo::new(conn).create("Maltepe University").unwrap();
        InstituteRepo::new(conn)
            .create(&NewInstitute {
                name: "Institute of Science".to_string(),
                university_id: 1,
            })
            .unwrap();
        PersonRepo::new(conn)
            .create(&NewPerson {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                title: PersonTitle::Student,
                email: "ada@example.edu".to_string(),
            })
            .unwrap();
        PersonRepo::new(conn)
            .create(&NewPerson {
                first_name: "Grace".to_string(),
                last_name: "Hopper".to_string(),
                title: PersonTitle::Prof,
                email: "grace@example.edu".to_string(),
            })
            .unwrap();
        LookupRepo::new(conn, LookupKind::Language).create("English").unwrap();
        LookupRepo::new(conn, LookupKind::ThesisType).create("Masters").unwrap();
    }

    fn sample_thesis(thesis_no: i64, title: &str, year: i32) -> NewThesis {
        NewThesis {
            thesis_no,
            title: title.to_string(),
            r#abstract: "abc".to_string(),
            year,
            page_num: 80,
            type_id: 1,
            institute_id: 1,
            author_id: 1,
            supervisor_id: 2,
            language_id: 1,
        }
    }

    fn title_filter(title: &str) -> SearchFilters {
        SearchFilters {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_insert_and_list_orders_by_year_descending() {
        let conn = test_conn();
        seed_references(&conn);
        let repo = ThesisRepo::new(&conn);

        repo.insert(&sample_thesis(1, "First", 2021)).unwrap();
        repo.insert(&sample_thesis(2, "Second", 2023)).unwrap();
        repo.insert(&sample_thesis(3, "Third", 2022)).unwrap();

        let theses = repo.list().unwrap();
        let years: Vec<i32> = theses.iter().map(|t| t.year).collect();
        assert_eq!(years, vec![2023, 2022, 2021]);
    }

    #[test]
    fn test_duplicate_thesis_no_fails() {
        let conn = test_conn();
        seed_references(&conn);
        let repo = ThesisRepo::new(&conn);

        repo.insert(&sample_thesis(500, "Original", 2023)).unwrap();
        let err = repo.insert(&sample_thesis(500, "Duplicate", 2024));
        assert!(err.is_err());
        assert_eq!(repo.list().unwrap().len(), 1);
    }

    #[test]
    fn test_insert_with_missing_reference_fails() {
        let conn = test_conn();
        seed_references(&conn);
        let repo = ThesisRepo::new(&conn);

        let mut thesis = sample_thesis(1, "Orphan", 2023);
        thesis.language_id = 99;
        assert!(repo.insert(&thesis).is_err());
    }

    #[test]
    fn test_delete_removes_and_reports_miss() {
        let conn = test_conn();
        seed_references(&conn);
        let repo = ThesisRepo::new(&conn);

        repo.insert(&sample_thesis(7, "Gone soon", 2020)).unwrap();
        assert!(repo.delete(7).unwrap());
        assert!(repo.list().unwrap().is_empty());
        assert!(!repo.delete(7).unwrap());
    }

    #[test]
    fn test_search_without_filters_returns_everything() {
        let conn = test_conn();
        seed_references(&conn);
        let repo = ThesisRepo::new(&conn);

        repo.insert(&sample_thesis(1, "One", 2021)).unwrap();
        repo.insert(&sample_thesis(2, "Two", 2022)).unwrap();

        let results = repo.search(&SearchFilters::default()).unwrap();
        assert_eq!(results.len(), repo.list().unwrap().len());
    }

    #[test]
    fn test_search_joins_reference_names() {
        let conn = test_conn();
        seed_references(&conn);
        let repo = ThesisRepo::new(&conn);

        repo.insert(&sample_thesis(500, "Test", 2023)).unwrap();

        let results = repo.search(&SearchFilters {
            thesis_no: Some("500".to_string()),
            ..Default::default()
        }).unwrap();

        assert_eq!(results.len(), 1);
        let hit = &results[0];
        assert_eq!(hit.title, "Test");
        assert_eq!(hit.author_first_name, "Ada");
        assert_eq!(hit.author_last_name, "Lovelace");
        assert_eq!(hit.institute_name, "Institute of Science");
        assert_eq!(hit.university_name, "Maltepe University");
        assert_eq!(hit.language_name, "English");
        assert_eq!(hit.type_name, "Masters");
    }

    #[test]
    fn test_search_title_is_case_insensitive_substring() {
        let conn = test_conn();
        seed_references(&conn);
        let repo = ThesisRepo::new(&conn);

        repo.insert(&sample_thesis(1, "Network Security", 2021)).unwrap();
        repo.insert(&sample_thesis(2, "Wireless NETWORKS", 2022)).unwrap();
        repo.insert(&sample_thesis(3, "Net Work Analysis", 2023)).unwrap();

        let results = repo.search(&title_filter("network")).unwrap();
        let numbers: Vec<i64> = results.iter().map(|r| r.thesis_no).collect();
        assert_eq!(numbers, vec![2, 1]);
    }

    #[test]
    fn test_search_year_range_is_inclusive_and_descending() {
        let conn = test_conn();
        seed_references(&conn);
        let repo = ThesisRepo::new(&conn);

        for (no, year) in [(1, 2019), (2, 2020), (3, 2021), (4, 2022), (5, 2023)] {
            repo.insert(&sample_thesis(no, "Yearly", year)).unwrap();
        }

        let results = repo.search(&SearchFilters {
            year_start: Some("2020".to_string()),
            year_end: Some("2022".to_string()),
            ..Default::default()
        }).unwrap();

        let years: Vec<i32> = results.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2022, 2021, 2020]);
    }

    #[test]
    fn test_search_by_university_goes_through_institute() {
        let conn = test_conn();
        seed_references(&conn);

        // Second university with its own institute; thesis 2 lives there.
        UniversityRepo::new(&conn).create("Marmara University").unwrap();
        InstituteRepo::new(&conn)
            .create(&NewInstitute {
                name: "Institute of Social Sciences".to_string(),
                university_id: 2,
            })
            .unwrap();

        let repo = ThesisRepo::new(&conn);
        repo.insert(&sample_thesis(1, "Local", 2021)).unwrap();
        let mut elsewhere = sample_thesis(2, "Elsewhere", 2022);
        elsewhere.institute_id = 2;
        repo.insert(&elsewhere).unwrap();

        let results = repo.search(&SearchFilters {
            university_id: Some("2".to_string()),
            ..Default::default()
        }).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].thesis_no, 2);
        assert_eq!(results[0].university_name, "Marmara University");
    }

    #[test]
    fn test_search_results_are_subset_of_list() {
        let conn = test_conn();
        seed_references(&conn);
        let repo = ThesisRepo::new(&conn);

        repo.insert(&sample_thesis(1, "Graph Algorithms", 2020)).unwrap();
        repo.insert(&sample_thesis(2, "Network Protocols", 2021)).unwrap();

        let all: Vec<i64> = repo.list().unwrap().iter().map(|t| t.thesis_no).collect();
        let filtered = repo.search(&title_filter("network")).unwrap();
        assert!(filtered.iter().all(|r| all.contains(&r.thesis_no)));
    }

    #[test]
    fn test_search_rejects_non_numeric_id() {
        let conn = test_conn();
        seed_references(&conn);
        let repo = ThesisRepo::new(&conn);

        let err = repo.search(&SearchFilters {
            author_id: Some("abc".to_string()),
            ..Default::default()
        });
        assert!(matches!(err, Err(DatabaseError::InvalidFilter(_))));
    }
}
