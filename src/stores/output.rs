//! Defines the output store trait.

use crate::{
    Error,
    models::{CategoryId, Output, OutputId, TransactionFields},
};

/// Creates, retrieves, replaces and deletes outputs.
///
/// Outputs returned by the store have their category resolved from
/// `category_id`.
pub trait OutputStore {
    /// Add a new output to the store, which assigns it an ID.
    fn create(
        &self,
        fields: TransactionFields,
        category_id: Option<CategoryId>,
    ) -> Result<Output, Error>;

    /// Get every output, in the order the store keeps them.
    fn get_all(&self) -> Result<Vec<Output>, Error>;

    /// Get an output by its ID.
    fn get(&self, id: OutputId) -> Result<Option<Output>, Error>;

    /// Whether an output with `id` exists.
    fn exists(&self, id: OutputId) -> Result<bool, Error>;

    /// Replace the amount, description, date and category reference of the
    /// output with `id`. The creation timestamp is kept.
    fn save(
        &self,
        id: OutputId,
        fields: TransactionFields,
        category_id: Option<CategoryId>,
    ) -> Result<Output, Error>;

    /// Remove the output with `id`. Removing a missing output does nothing.
    fn delete(&self, id: OutputId) -> Result<(), Error>;
}
