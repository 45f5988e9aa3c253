/*! This module defines and implements traits for interacting with the application's database. */

use rusqlite::{Connection, Row, Transaction, TransactionBehavior};

use crate::stores::sqlite::{SQLiteCategoryStore, SQLiteIncomeStore, SQLiteOutputStore};

/// A trait for adding an object schema to a database.
pub trait CreateTable {
    /// Create the table for the model if it does not already exist.
    ///
    /// # Errors
    /// Returns an error if there is an SQL error.
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error>;
}

/// A trait for mapping from a `rusqlite::Row` from a SQLite database to a concrete rust type.
pub trait MapRow {
    type ReturnType;

    /// Convert a row into a concrete type.
    ///
    /// **Note:** This function expects that the row object contains all the table columns in the order they were defined.
    ///
    /// # Errors
    /// Returns an error if a row item cannot be converted into the corresponding rust type, or if an invalid column index was used.
    fn map_row(row: &Row) -> Result<Self::ReturnType, rusqlite::Error> {
        Self::map_row_with_offset(row, 0)
    }

    /// Convert a row into a concrete type.
    ///
    /// The `offset` indicates which column the row should be read from.
    /// This is useful in cases where tables have been joined and you want to construct two different types from the one query.
    ///
    /// # Errors
    /// Returns an error if a row item cannot be converted into the corresponding rust type, or if an invalid column index was used.
    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error>;
}

/// Create the category, income and output tables.
///
/// The tables are created in a single exclusive transaction, and existing
/// tables are left untouched, so this is safe to call on every start up.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &mut Connection) -> Result<(), rusqlite::Error> {
    let transaction = Transaction::new(connection, TransactionBehavior::Exclusive)?;

    SQLiteCategoryStore::create_table(&transaction)?;
    SQLiteIncomeStore::create_table(&transaction)?;
    SQLiteOutputStore::create_table(&transaction)?;

    transaction.commit()?;

    tracing::debug!("database tables initialized");

    Ok(())
}
