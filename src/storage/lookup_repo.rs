//! Shared repository for the name-only lookup tables.
//!
//! Languages, types, topics, and keywords all carry a single display
//! name; one repository serves all four, with the table and id column
//! supplied as structured data by a closed enum rather than four
//! copy-pasted implementations.

use rusqlite::{params, Connection, OptionalExtension};

use crate::models::reference::LookupEntry;
use super::db::DatabaseError;

/// The four name-only entity families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Language,
    ThesisType,
    Topic,
    Keyword,
}

impl LookupKind {
    pub fn table(self) -> &'static str {
        match self {
            LookupKind::Language => "languages",
            LookupKind::ThesisType => "types",
            LookupKind::Topic => "topics",
            LookupKind::Keyword => "keywords",
        }
    }

    pub fn id_column(self) -> &'static str {
        match self {
            LookupKind::Language => "language_id",
            LookupKind::ThesisType => "type_id",
            LookupKind::Topic => "topic_id",
            LookupKind::Keyword => "keyword_id",
        }
    }

    /// Singular label for log and error messages.
    pub fn label(self) -> &'static str {
        match self {
            LookupKind::Language => "language",
            LookupKind::ThesisType => "type",
            LookupKind::Topic => "topic",
            LookupKind::Keyword => "keyword",
        }
    }
}

/// Repository over one lookup table.
pub struct LookupRepo<'a> {
    conn: &'a Connection,
    kind: LookupKind,
}

impl<'a> LookupRepo<'a> {
    pub fn new(conn: &'a Connection, kind: LookupKind) -> Self {
        Self { conn, kind }
    }

    pub fn list(&self) -> Result<Vec<LookupEntry>, DatabaseError> {
        let sql = format!(
            "SELECT {}, name FROM {} ORDER BY name",
            self.kind.id_column(),
            self.kind.table()
        );
        let mut stmt = self.conn.prepare(&sql)?;

        let rows = stmt.query_map([], |row| {
            Ok(LookupEntry {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }

    pub fn get(&self, id: i64) -> Result<Option<LookupEntry>, DatabaseError> {
        let sql = format!(
            "SELECT {}, name FROM {} WHERE {} = ?",
            self.kind.id_column(),
            self.kind.table(),
            self.kind.id_column()
        );
        let entry = self
            .conn
            .query_row(&sql, [id], |row| {
                Ok(LookupEntry {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })
            .optional()?;
        Ok(entry)
    }

    pub fn create(&self, name: &str) -> Result<LookupEntry, DatabaseError> {
        let sql = format!("INSERT INTO {} (name) VALUES (?)", self.kind.table());
        self.conn.execute(&sql, [name])?;

        Ok(LookupEntry {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
        })
    }

    pub fn update(&self, id: i64, name: &str) -> Result<Option<LookupEntry>, DatabaseError> {
        let sql = format!(
            "UPDATE {} SET name = ? WHERE {} = ?",
            self.kind.table(),
            self.kind.id_column()
        );
        let count = self.conn.execute(&sql, params![name, id])?;

        if count > 0 {
            self.get(id)
        } else {
            Ok(None)
        }
    }

    /// Delete an entry. A language or type still referenced by a thesis
    /// is left to the foreign-key constraint.
    pub fn delete(&self, id: i64) -> Result<bool, DatabaseError> {
        let sql = format!(
            "DELETE FROM {} WHERE {} = ?",
            self.kind.table(),
            self.kind.id_column()
        );
        let count = self.conn.execute(&sql, [id])?;
        Ok(count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [LookupKind; 4] = [
        LookupKind::Language,
        LookupKind::ThesisType,
        LookupKind::Topic,
        LookupKind::Keyword,
    ];

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
        conn.execute_batch(include_str!("schema.sql")).unwrap();
        conn
    }

    #[test]
    fn test_crud_round_trip_for_every_kind() {
        let conn = test_conn();

        for kind in ALL_KINDS {
            let repo = LookupRepo::new(&conn, kind);

            let created = repo.create("Original").unwrap();
            assert_eq!(repo.list().unwrap().len(), 1, "{}", kind.label());

            let updated = repo.update(created.id, "Renamed").unwrap().unwrap();
            assert_eq!(updated.name, "Renamed");

            assert!(repo.delete(created.id).unwrap());
            assert!(repo.list().unwrap().is_empty(), "{}", kind.label());
        }
    }

    #[test]
    fn test_kinds_do_not_share_rows() {
        let conn = test_conn();

        LookupRepo::new(&conn, LookupKind::Language).create("English").unwrap();
        assert!(LookupRepo::new(&conn, LookupKind::Topic).list().unwrap().is_empty());
    }

    #[test]
    fn test_list_orders_by_name() {
        let conn = test_conn();
        let repo = LookupRepo::new(&conn, LookupKind::Language);

        repo.create("Turkish").unwrap();
        repo.create("English").unwrap();
        repo.create("German").unwrap();

        let names: Vec<String> = repo.list().unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["English", "German", "Turkish"]);
    }

    #[test]
    fn test_update_and_delete_missing_are_misses() {
        let conn = test_conn();
        let repo = LookupRepo::new(&conn, LookupKind::Keyword);

        assert!(repo.update(1, "Ghost").unwrap().is_none());
        assert!(!repo.delete(1).unwrap());
    }
}
