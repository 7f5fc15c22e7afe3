//! Institute repository

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::models::reference::{Institute, NewInstitute};
use super::db::DatabaseError;

/// Repository for Institute operations. Reads join the owning
/// university's name for display.
pub struct InstituteRepo<'a> {
    conn: &'a Connection,
}

impl<'a> InstituteRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn list(&self) -> Result<Vec<Institute>, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT i.institute_id, i.name, i.university_id, u.name
             FROM institutes i
             JOIN universities u ON u.university_id = i.university_id
             ORDER BY i.name",
        )?;

        let rows = stmt.query_map([], |row| row_to_institute(row))?;

        let mut institutes = Vec::new();
        for row in rows {
            institutes.push(row?);
        }
        Ok(institutes)
    }

    pub fn get(&self, institute_id: i64) -> Result<Option<Institute>, DatabaseError> {
        let institute = self
            .conn
            .query_row(
                "SELECT i.institute_id, i.name, i.university_id, u.name
                 FROM institutes i
                 JOIN universities u ON u.university_id = i.university_id
                 WHERE i.institute_id = ?",
                [institute_id],
                |row| row_to_institute(row),
            )
            .optional()?;
        Ok(institute)
    }

    pub fn create(&self, new: &NewInstitute) -> Result<Institute, DatabaseError> {
        self.conn.execute(
            "INSERT INTO institutes (name, university_id) VALUES (?, ?)",
            params![new.name, new.university_id],
        )?;

        let institute_id = self.conn.last_insert_rowid();
        self.get(institute_id)?.ok_or_else(|| {
            DatabaseError::QueryFailed(format!("Institute {} vanished after insert", institute_id))
        })
    }

    pub fn update(&self, institute_id: i64, new: &NewInstitute) -> Result<Option<Institute>, DatabaseError> {
        let count = self.conn.execute(
            "UPDATE institutes SET name = ?, university_id = ? WHERE institute_id = ?",
            params![new.name, new.university_id, institute_id],
        )?;

        if count > 0 {
            self.get(institute_id)
        } else {
            Ok(None)
        }
    }

    pub fn delete(&self, institute_id: i64) -> Result<bool, DatabaseError> {
        let count = self.conn.execute(
            "DELETE FROM institutes WHERE institute_id = ?",
            [institute_id],
        )?;
        Ok(count > 0)
    }
}

fn row_to_institute(row: &Row) -> rusqlite::Result<Institute> {
    Ok(Institute {
        institute_id: row.get(0)?,
        name: row.get(1)?,
        university_id: row.get(2)?,
        university_name: row.get(3)?,
    })
}
