//! This file defines the API routes for incomes.

use axum::{Json, extract::State};

use crate::{
    Error,
    app_state::IncomeState,
    extract::{JsonBody, PathParam},
    income::{create_income, delete_income, get_all_incomes, get_income, update_income},
    models::{Income, IncomeForm, IncomeId},
    stores::IncomeStore,
};

/// A route handler for creating a new income.
pub async fn create_income_endpoint<I>(
    State(state): State<IncomeState<I>>,
    JsonBody(form): JsonBody<IncomeForm>,
) -> Result<&'static str, Error>
where
    I: IncomeStore + Send + Sync,
{
    create_income(&form, &state.income_store)?;

    Ok("Income created successfully")
}

/// A route handler for listing every income.
pub async fn get_incomes_endpoint<I>(
    State(state): State<IncomeState<I>>,
) -> Result<Json<Vec<Income>>, Error>
where
    I: IncomeStore + Send + Sync,
{
    get_all_incomes(&state.income_store).map(Json)
}

/// A route handler for getting an income by its database ID.
///
/// Responds with JSON `null` if there is no such income.
pub async fn get_income_endpoint<I>(
    State(state): State<IncomeState<I>>,
    PathParam(income_id): PathParam<IncomeId>,
) -> Result<Json<Option<Income>>, Error>
where
    I: IncomeStore + Send + Sync,
{
    get_income(income_id, &state.income_store).map(Json)
}

/// A route handler for replacing an income.
///
/// See [update_income] for how the replacement is stored.
pub async fn update_income_endpoint<I>(
    State(state): State<IncomeState<I>>,
    PathParam(income_id): PathParam<IncomeId>,
    JsonBody(form): JsonBody<IncomeForm>,
) -> Result<&'static str, Error>
where
    I: IncomeStore + Send + Sync,
{
    update_income(income_id, &form, &state.income_store)?;

    Ok("Income updated successfully")
}

/// A route handler for deleting an income.
pub async fn delete_income_endpoint<I>(
    State(state): State<IncomeState<I>>,
    PathParam(income_id): PathParam<IncomeId>,
) -> Result<&'static str, Error>
where
    I: IncomeStore + Send + Sync,
{
    delete_income(income_id, &state.income_store)?;

    Ok("Income deleted successfully")
}
