//! Person repository for database operations on people

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::models::person::{NewPerson, Person, PersonTitle};
use super::db::DatabaseError;

/// Repository for Person operations
pub struct PersonRepo<'a> {
    conn: &'a Connection,
}

impl<'a> PersonRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn list(&self) -> Result<Vec<Person>, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT person_id, first_name, last_name, title, email
             FROM people
             ORDER BY last_name, first_name",
        )?;

        let rows = stmt.query_map([], |row| row_to_person(row))?;

        let mut people = Vec::new();
        for row in rows {
            people.push(row?);
        }
        Ok(people)
    }

    pub fn get(&self, person_id: i64) -> Result<Option<Person>, DatabaseError> {
        let person = self
            .conn
            .query_row(
                "SELECT person_id, first_name, last_name, title, email
                 FROM people
                 WHERE person_id = ?",
                [person_id],
                |row| row_to_person(row),
            )
            .optional()?;
        Ok(person)
    }

    pub fn create(&self, new: &NewPerson) -> Result<Person, DatabaseError> {
        self.conn.execute(
            "INSERT INTO people (first_name, last_name, title, email)
             VALUES (?, ?, ?, ?)",
            params![
                new.first_name,
                new.last_name,
                title_to_string(new.title),
                new.email,
            ],
        )?;

        Ok(Person {
            person_id: self.conn.last_insert_rowid(),
            first_name: new.first_name.clone(),
            last_name: new.last_name.clone(),
            title: new.title,
            email: new.email.clone(),
        })
    }

    /// Update a person. Returns the stored record, or None when the id
    /// does not exist.
    pub fn update(&self, person_id: i64, new: &NewPerson) -> Result<Option<Person>, DatabaseError> {
        let count = self.conn.execute(
            "UPDATE people SET first_name = ?, last_name = ?, title = ?, email = ?
             WHERE person_id = ?",
            params![
                new.first_name,
                new.last_name,
                title_to_string(new.title),
                new.email,
                person_id,
            ],
        )?;

        if count > 0 {
            self.get(person_id)
        } else {
            Ok(None)
        }
    }

    pub fn delete(&self, person_id: i64) -> Result<bool, DatabaseError> {
        let count = self
            .conn
            .execute("DELETE FROM people WHERE person_id = ?", [person_id])?;
        Ok(count > 0)
    }
}

fn row_to_person(row: &Row) -> rusqlite::Result<Person> {
    let title: String = row.get(3)?;
    Ok(Person {
        person_id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        title: string_to_title(&title),
        email: row.get(4)?,
    })
}

// Helper functions for title conversion

fn title_to_string(title: PersonTitle) -> &'static str {
    match title {
        PersonTitle::Student => "Student",
        PersonTitle::Dr => "Dr.",
        PersonTitle::Prof => "Prof.",
        PersonTitle::AssocProf => "Assoc. Prof.",
    }
}

fn string_to_title(s: &str) -> PersonTitle {
    match s {
        "Dr." => PersonTitle::Dr,
        "Prof." => PersonTitle::Prof,
        "Assoc. Prof." => PersonTitle::AssocProf,
        _ => PersonTitle::Student,
    }
}
