//! University repository

use rusqlite::{params, Connection, OptionalExtension};

use crate::models::reference::University;
use super::db::DatabaseError;

/// Repository for University operations
pub struct UniversityRepo<'a> {
    conn: &'a Connection,
}

impl<'a> UniversityRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn list(&self) -> Result<Vec<University>, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT university_id, name FROM universities ORDER BY name",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(University {
                university_id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;

        let mut universities = Vec::new();
        for row in rows {
            universities.push(row?);
        }
        Ok(universities)
    }

    pub fn get(&self, university_id: i64) -> Result<Option<University>, DatabaseError> {
        let university = self
            .conn
            .query_row(
                "SELECT university_id, name FROM universities WHERE university_id = ?",
                [university_id],
                |row| {
                    Ok(University {
                        university_id: row.get(0)?,
                        name: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(university)
    }

    pub fn create(&self, name: &str) -> Result<University, DatabaseError> {
        self.conn
            .execute("INSERT INTO universities (name) VALUES (?)", [name])?;

        Ok(University {
            university_id: self.conn.last_insert_rowid(),
            name: name.to_string(),
        })
    }

    pub fn update(&self, university_id: i64, name: &str) -> Result<Option<University>, DatabaseError> {
        let count = self.conn.execute(
            "UPDATE universities SET name = ? WHERE university_id = ?",
            params![name, university_id],
        )?;

        if count > 0 {
            self.get(university_id)
        } else {
            Ok(None)
        }
    }

    /// Delete a university. Deleting one that an institute still
    /// references is left to the foreign-key constraint.
    pub fn delete(&self, university_id: i64) -> Result<bool, DatabaseError> {
        let count = self.conn.execute(
            "DELETE FROM universities WHERE university_id = ?",
            [university_id],
        )?;
        Ok(count > 0)
    }
}
