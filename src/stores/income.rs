//! Defines the income store trait.

use crate::{
    Error,
    models::{Income, IncomeId, TransactionFields},
};

/// Creates, retrieves and deletes incomes.
pub trait IncomeStore {
    /// Add a new income to the store, which assigns it an ID.
    fn create(&self, fields: TransactionFields) -> Result<Income, Error>;

    /// Get every income, in the order the store keeps them.
    fn get_all(&self) -> Result<Vec<Income>, Error>;

    /// Get an income by its ID.
    fn get(&self, id: IncomeId) -> Result<Option<Income>, Error>;

    /// Whether an income with `id` exists.
    fn exists(&self, id: IncomeId) -> Result<bool, Error>;

    /// Remove the income with `id`. Removing a missing income does nothing.
    fn delete(&self, id: IncomeId) -> Result<(), Error>;
}
