//! This file defines the API routes for categories.

use axum::{Json, extract::State};

use crate::{
    Error,
    app_state::CategoryState,
    extract::{JsonBody, PathParam},
    category::{
        create_category, delete_category, get_all_categories, get_category, get_category_by_name,
        update_category,
    },
    models::{Category, CategoryForm, CategoryId, CategoryName},
    stores::CategoryStore,
};

/// A route handler for creating a new category.
pub async fn create_category_endpoint<C>(
    State(state): State<CategoryState<C>>,
    JsonBody(form): JsonBody<CategoryForm>,
) -> Result<&'static str, Error>
where
    C: CategoryStore + Send + Sync,
{
    let name = CategoryName::new(&form.name)?;
    create_category(name, &state.category_store)?;

    Ok("Category created successfully")
}

/// A route handler for listing every category.
pub async fn get_categories_endpoint<C>(
    State(state): State<CategoryState<C>>,
) -> Result<Json<Vec<Category>>, Error>
where
    C: CategoryStore + Send + Sync,
{
    get_all_categories(&state.category_store).map(Json)
}

/// A route handler for getting a category by its database ID.
///
/// Responds with JSON `null` if there is no such category.
pub async fn get_category_endpoint<C>(
    State(state): State<CategoryState<C>>,
    PathParam(category_id): PathParam<CategoryId>,
) -> Result<Json<Option<Category>>, Error>
where
    C: CategoryStore + Send + Sync,
{
    get_category(category_id, &state.category_store).map(Json)
}

/// A route handler for getting a category by its exact name.
///
/// Responds with JSON `null` if there is no such category.
pub async fn get_category_by_name_endpoint<C>(
    State(state): State<CategoryState<C>>,
    PathParam(name): PathParam<String>,
) -> Result<Json<Option<Category>>, Error>
where
    C: CategoryStore + Send + Sync,
{
    get_category_by_name(&name, &state.category_store).map(Json)
}

/// A route handler for renaming a category.
pub async fn update_category_endpoint<C>(
    State(state): State<CategoryState<C>>,
    PathParam(category_id): PathParam<CategoryId>,
    JsonBody(form): JsonBody<CategoryForm>,
) -> Result<&'static str, Error>
where
    C: CategoryStore + Send + Sync,
{
    let name = CategoryName::new(&form.name)?;
    update_category(category_id, name, &state.category_store)?;

    Ok("Category updated successfully")
}

/// A route handler for deleting a category.
pub async fn delete_category_endpoint<C>(
    State(state): State<CategoryState<C>>,
    PathParam(category_id): PathParam<CategoryId>,
) -> Result<&'static str, Error>
where
    C: CategoryStore + Send + Sync,
{
    delete_category(category_id, &state.category_store)?;

    Ok("Category deleted successfully")
}
