//! Implements a SQLite backed output store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, OptionalExtension, Row};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{Category, CategoryId, CategoryName, Output, OutputId, TransactionFields},
    stores::OutputStore,
};

use super::lock;

const SELECT_OUTPUT: &str = "SELECT o.id, o.amount, o.description, o.date, o.created_at, \
    o.category_id, c.id, c.name \
    FROM output o LEFT JOIN category c ON c.id = o.category_id";

/// Creates and retrieves outputs to/from a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteOutputStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteOutputStore {
    /// Create a new output store with a SQLite database.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

fn select_output(id: OutputId, connection: &Connection) -> Result<Option<Output>, Error> {
    connection
        .prepare(&format!("{SELECT_OUTPUT} WHERE o.id = :id;"))?
        .query_row(&[(":id", &id)], SQLiteOutputStore::map_row)
        .optional()
        .map_err(|error| error.into())
}

fn must_select_output(id: OutputId, connection: &Connection) -> Result<Output, Error> {
    select_output(id, connection)?
        .ok_or_else(|| Error::NotFound(format!("Output not found with id: {id}")))
}

impl OutputStore for SQLiteOutputStore {
    fn create(
        &self,
        fields: TransactionFields,
        category_id: Option<CategoryId>,
    ) -> Result<Output, Error> {
        let connection = lock(&self.connection)?;
        connection.execute(
            "INSERT INTO output (amount, description, date, created_at, category_id) \
            VALUES (?1, ?2, ?3, ?4, ?5);",
            (
                fields.amount,
                &fields.description,
                fields.date,
                fields.created_at,
                category_id,
            ),
        )?;

        let id = connection.last_insert_rowid();

        must_select_output(id, &connection)
    }

    fn get_all(&self) -> Result<Vec<Output>, Error> {
        lock(&self.connection)?
            .prepare(&format!("{SELECT_OUTPUT} ORDER BY o.id ASC;"))?
            .query_map([], SQLiteOutputStore::map_row)?
            .map(|maybe_output| maybe_output.map_err(|error| error.into()))
            .collect()
    }

    fn get(&self, id: OutputId) -> Result<Option<Output>, Error> {
        let connection = lock(&self.connection)?;

        select_output(id, &connection)
    }

    fn exists(&self, id: OutputId) -> Result<bool, Error> {
        lock(&self.connection)?
            .query_row(
                "SELECT EXISTS (SELECT 1 FROM output WHERE id = ?1);",
                (id,),
                |row| row.get(0),
            )
            .map_err(|error| error.into())
    }

    fn save(
        &self,
        id: OutputId,
        fields: TransactionFields,
        category_id: Option<CategoryId>,
    ) -> Result<Output, Error> {
        let connection = lock(&self.connection)?;
        let rows_affected = connection.execute(
            "UPDATE output SET amount = ?1, description = ?2, date = ?3, category_id = ?4 \
            WHERE id = ?5",
            (
                fields.amount,
                &fields.description,
                fields.date,
                category_id,
                id,
            ),
        )?;

        if rows_affected == 0 {
            return Err(Error::NotFound(format!("Output not found with id: {id}")));
        }

        must_select_output(id, &connection)
    }

    fn delete(&self, id: OutputId) -> Result<(), Error> {
        lock(&self.connection)?.execute("DELETE FROM output WHERE id = ?1", (id,))?;

        Ok(())
    }
}

impl CreateTable for SQLiteOutputStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        // category_id has no foreign key constraint, so deleting a category
        // leaves outputs pointing at it.
        connection.execute(
            "CREATE TABLE IF NOT EXISTS output (
                id INTEGER PRIMARY KEY,
                amount REAL NOT NULL,
                description TEXT NOT NULL,
                date TEXT NOT NULL,
                created_at TEXT NOT NULL,
                category_id INTEGER
            );",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteOutputStore {
    type ReturnType = Output;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        let category_id: Option<CategoryId> = row.get(offset + 5)?;
        let joined_id: Option<CategoryId> = row.get(offset + 6)?;
        let joined_name: Option<String> = row.get(offset + 7)?;

        let category = match (joined_id, joined_name) {
            (Some(id), Some(name)) => Some(Category {
                id,
                name: CategoryName::new_unchecked(&name),
            }),
            _ => None,
        };

        Ok(Output {
            id: row.get(offset)?,
            fields: TransactionFields {
                amount: row.get(offset + 1)?,
                description: row.get(offset + 2)?,
                date: row.get(offset + 3)?,
                created_at: row.get(offset + 4)?,
            },
            category_id,
            category,
        })
    }
}
