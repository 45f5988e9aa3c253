//! Defines the category store trait.

use crate::{
    Error,
    models::{Category, CategoryId, CategoryName},
};

/// Creates, retrieves, renames and deletes categories.
///
/// The store does not enforce unique names, callers check with
/// [CategoryStore::get_by_name] before writing.
pub trait CategoryStore {
    /// Create a new category and add it the store.
    fn create(&self, name: CategoryName) -> Result<Category, Error>;

    /// Get every category, in the order the store keeps them.
    fn get_all(&self) -> Result<Vec<Category>, Error>;

    /// Get a category by its ID.
    fn get(&self, id: CategoryId) -> Result<Option<Category>, Error>;

    /// Get a category by its exact (case-sensitive) name.
    fn get_by_name(&self, name: &str) -> Result<Option<Category>, Error>;

    /// Whether a category with the exact name `name` exists.
    fn exists_by_name(&self, name: &str) -> Result<bool, Error>;

    /// Whether a category with `id` exists.
    fn exists(&self, id: CategoryId) -> Result<bool, Error>;

    /// Overwrite the stored category that has the same ID as `category`.
    fn save(&self, category: &Category) -> Result<(), Error>;

    /// Remove the category with `id`. Removing a missing category does nothing.
    fn delete(&self, id: CategoryId) -> Result<(), Error>;
}
