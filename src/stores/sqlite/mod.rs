//! SQLite backed implementations of the [stores](crate::stores).
//!
//! Every store holds a clone of the same shared connection.

mod category;
mod income;
mod output;

pub use category::SQLiteCategoryStore;
pub use income::SQLiteIncomeStore;
pub use output::SQLiteOutputStore;

use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;

use crate::Error;

fn lock(connection: &Mutex<Connection>) -> Result<MutexGuard<'_, Connection>, Error> {
    connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLock)
}

#[cfg(test)]
pub(crate) fn get_test_connection() -> std::sync::Arc<Mutex<Connection>> {
    let mut connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");
    crate::db::initialize(&mut connection).expect("Could not initialize database");

    std::sync::Arc::new(Mutex::new(connection))
}
