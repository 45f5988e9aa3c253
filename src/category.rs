//! Category management: creating, listing, renaming and deleting categories.
//!
//! Category names are unique. Uniqueness is checked by reading the store
//! before writing, so two concurrent requests for the same name can both
//! succeed.

use crate::{
    Error,
    models::{Category, CategoryId, CategoryName},
    stores::CategoryStore,
};

fn duplicate_name_error(name: &CategoryName) -> Error {
    Error::Conflict(format!("Category with name '{name}' already exists"))
}

fn missing_category_error(id: CategoryId) -> Error {
    Error::NotFound(format!("Category not found with id: {id}"))
}

/// Create a category named `name`.
///
/// # Errors
///
/// Returns an [Error::Conflict] if a category with exactly the same name
/// already exists, or an error from the store.
pub fn create_category(name: CategoryName, store: &impl CategoryStore) -> Result<Category, Error> {
    if store.exists_by_name(name.as_ref())? {
        tracing::warn!("refusing to create duplicate category {name:?}");
        return Err(duplicate_name_error(&name));
    }

    let category = store.create(name)?;
    tracing::info!("created category {} with id {}", category.name, category.id);

    Ok(category)
}

/// Get every category.
pub fn get_all_categories(store: &impl CategoryStore) -> Result<Vec<Category>, Error> {
    store.get_all()
}

/// Get the category with `id`, or `None` if there is no such category.
pub fn get_category(id: CategoryId, store: &impl CategoryStore) -> Result<Option<Category>, Error> {
    store.get(id)
}

/// Get the category named exactly `name`, or `None` if there is no such category.
pub fn get_category_by_name(
    name: &str,
    store: &impl CategoryStore,
) -> Result<Option<Category>, Error> {
    store.get_by_name(name)
}

/// Rename the category with `id` to `name`.
///
/// Renaming a category to its current name is allowed.
///
/// # Errors
///
/// Returns an [Error::NotFound] if there is no category with `id`, an
/// [Error::Conflict] if a different category already uses `name`, or an
/// error from the store.
pub fn update_category(
    id: CategoryId,
    name: CategoryName,
    store: &impl CategoryStore,
) -> Result<Category, Error> {
    let mut category = store.get(id)?.ok_or_else(|| missing_category_error(id))?;

    if store
        .get_by_name(name.as_ref())?
        .is_some_and(|existing| existing.id != id)
    {
        tracing::warn!("refusing to rename category {id} to the existing name {name:?}");
        return Err(duplicate_name_error(&name));
    }

    category.name = name;
    store.save(&category)?;
    tracing::info!("renamed category {id} to {}", category.name);

    Ok(category)
}

/// Delete the category with `id`.
///
/// Outputs that reference the category keep their reference.
///
/// # Errors
///
/// Returns an [Error::NotFound] if there is no category with `id`, or an
/// error from the store.
pub fn delete_category(id: CategoryId, store: &impl CategoryStore) -> Result<(), Error> {
    if !store.exists(id)? {
        return Err(missing_category_error(id));
    }

    store.delete(id)?;
    tracing::info!("deleted category {id}");

    Ok(())
}
