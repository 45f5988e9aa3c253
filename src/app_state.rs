//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::{
    Error,
    db::initialize,
    stores::{
        CategoryStore, IncomeStore, OutputStore,
        sqlite::{SQLiteCategoryStore, SQLiteIncomeStore, SQLiteOutputStore},
    },
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState<C, I, O>
where
    C: CategoryStore + Send + Sync,
    I: IncomeStore + Send + Sync,
    O: OutputStore + Send + Sync,
{
    /// The store for [categories](crate::models::Category).
    pub category_store: C,
    /// The store for [incomes](crate::models::Income).
    pub income_store: I,
    /// The store for [outputs](crate::models::Output).
    pub output_store: O,
}

impl<C, I, O> AppState<C, I, O>
where
    C: CategoryStore + Send + Sync,
    I: IncomeStore + Send + Sync,
    O: OutputStore + Send + Sync,
{
    /// Create a new [AppState].
    pub fn new(category_store: C, income_store: I, output_store: O) -> Self {
        Self {
            category_store,
            income_store,
            output_store,
        }
    }
}

/// An alias for an [AppState] that uses SQLite for the backend.
pub type SQLAppState = AppState<SQLiteCategoryStore, SQLiteIncomeStore, SQLiteOutputStore>;

/// Creates an [AppState] instance that uses SQLite for the backend.
///
/// This function will modify the database by adding the tables for the domain
/// models to the database.
///
/// # Errors
/// Returns an error if the database cannot be initialized.
pub fn create_app_state(mut db_connection: Connection) -> Result<SQLAppState, Error> {
    initialize(&mut db_connection)?;

    let connection = Arc::new(Mutex::new(db_connection));

    Ok(AppState::new(
        SQLiteCategoryStore::new(connection.clone()),
        SQLiteIncomeStore::new(connection.clone()),
        SQLiteOutputStore::new(connection),
    ))
}

/// The state needed by the category routes.
#[derive(Debug, Clone)]
pub struct CategoryState<C>
where
    C: CategoryStore + Send + Sync,
{
    /// The store for [categories](crate::models::Category).
    pub category_store: C,
}

impl<C, I, O> FromRef<AppState<C, I, O>> for CategoryState<C>
where
    C: CategoryStore + Clone + Send + Sync,
    I: IncomeStore + Send + Sync,
    O: OutputStore + Send + Sync,
{
    fn from_ref(state: &AppState<C, I, O>) -> Self {
        Self {
            category_store: state.category_store.clone(),
        }
    }
}

/// The state needed by the income routes.
#[derive(Debug, Clone)]
pub struct IncomeState<I>
where
    I: IncomeStore + Send + Sync,
{
    /// The store for [incomes](crate::models::Income).
    pub income_store: I,
}

impl<C, I, O> FromRef<AppState<C, I, O>> for IncomeState<I>
where
    C: CategoryStore + Send + Sync,
    I: IncomeStore + Clone + Send + Sync,
    O: OutputStore + Send + Sync,
{
    fn from_ref(state: &AppState<C, I, O>) -> Self {
        Self {
            income_store: state.income_store.clone(),
        }
    }
}

/// The state needed by the output routes.
///
/// Outputs need the category store to resolve category names.
#[derive(Debug, Clone)]
pub struct OutputState<C, O>
where
    C: CategoryStore + Send + Sync,
    O: OutputStore + Send + Sync,
{
    /// The store for [categories](crate::models::Category).
    pub category_store: C,
    /// The store for [outputs](crate::models::Output).
    pub output_store: O,
}

impl<C, I, O> FromRef<AppState<C, I, O>> for OutputState<C, O>
where
    C: CategoryStore + Clone + Send + Sync,
    I: IncomeStore + Send + Sync,
    O: OutputStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<C, I, O>) -> Self {
        Self {
            category_store: state.category_store.clone(),
            output_store: state.output_store.clone(),
        }
    }
}
