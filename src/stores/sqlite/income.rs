//! Implements a SQLite backed income store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, OptionalExtension, Row};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{Income, IncomeId, TransactionFields},
    stores::IncomeStore,
};

use super::lock;

/// Creates and retrieves incomes to/from a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteIncomeStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteIncomeStore {
    /// Create a new income store with a SQLite database.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl IncomeStore for SQLiteIncomeStore {
    fn create(&self, fields: TransactionFields) -> Result<Income, Error> {
        let connection = lock(&self.connection)?;
        connection.execute(
            "INSERT INTO income (amount, description, date, created_at) VALUES (?1, ?2, ?3, ?4);",
            (
                fields.amount,
                &fields.description,
                fields.date,
                fields.created_at,
            ),
        )?;

        let id = connection.last_insert_rowid();

        Ok(Income { id, fields })
    }

    fn get_all(&self) -> Result<Vec<Income>, Error> {
        lock(&self.connection)?
            .prepare(
                "SELECT id, amount, description, date, created_at FROM income ORDER BY id ASC;",
            )?
            .query_map([], SQLiteIncomeStore::map_row)?
            .map(|maybe_income| maybe_income.map_err(|error| error.into()))
            .collect()
    }

    fn get(&self, id: IncomeId) -> Result<Option<Income>, Error> {
        lock(&self.connection)?
            .prepare("SELECT id, amount, description, date, created_at FROM income WHERE id = :id;")?
            .query_row(&[(":id", &id)], SQLiteIncomeStore::map_row)
            .optional()
            .map_err(|error| error.into())
    }

    fn exists(&self, id: IncomeId) -> Result<bool, Error> {
        lock(&self.connection)?
            .query_row(
                "SELECT EXISTS (SELECT 1 FROM income WHERE id = ?1);",
                (id,),
                |row| row.get(0),
            )
            .map_err(|error| error.into())
    }

    fn delete(&self, id: IncomeId) -> Result<(), Error> {
        lock(&self.connection)?.execute("DELETE FROM income WHERE id = ?1", (id,))?;

        Ok(())
    }
}

impl CreateTable for SQLiteIncomeStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS income (
                id INTEGER PRIMARY KEY,
                amount REAL NOT NULL,
                description TEXT NOT NULL,
                date TEXT NOT NULL,
                created_at TEXT NOT NULL
            );",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteIncomeStore {
    type ReturnType = Income;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        Ok(Income {
            id: row.get(offset)?,
            fields: TransactionFields {
                amount: row.get(offset + 1)?,
                description: row.get(offset + 2)?,
                date: row.get(offset + 3)?,
                created_at: row.get(offset + 4)?,
            },
        })
    }
}
