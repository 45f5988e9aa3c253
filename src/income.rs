//! Income management.
//!
//! Incomes carry no category reference: the `category` label in an
//! [IncomeForm] is accepted and dropped.

use crate::{
    Error,
    models::{Income, IncomeForm, IncomeId},
    stores::IncomeStore,
};

/// Validate `form` and store it as a new income.
///
/// # Errors
///
/// Returns an [Error::Validation] or [Error::DateParse] for an invalid form,
/// or an error from the store.
pub fn create_income(form: &IncomeForm, store: &impl IncomeStore) -> Result<Income, Error> {
    let fields = form.to_fields()?;
    let income = store.create(fields)?;
    tracing::info!("created income {}", income.id);

    Ok(income)
}

/// Get every income.
pub fn get_all_incomes(store: &impl IncomeStore) -> Result<Vec<Income>, Error> {
    store.get_all()
}

/// Get the income with `id`, or `None` if there is no such income.
pub fn get_income(id: IncomeId, store: &impl IncomeStore) -> Result<Option<Income>, Error> {
    store.get(id)
}

/// Replace the income with `id` with the income described by `form`.
///
/// The replacement is stored as a new record with its own ID and the record
/// with `id` is left as it was. Clients relying on the ID should use the one
/// returned here.
///
/// The form fields are checked before the income is looked up, and the
/// date is parsed after.
///
/// # Errors
///
/// Returns an [Error::Validation] or [Error::DateParse] for an invalid form,
/// an [Error::NotFound] if there is no income with `id`, or an error from the
/// store.
pub fn update_income(
    id: IncomeId,
    form: &IncomeForm,
    store: &impl IncomeStore,
) -> Result<Income, Error> {
    form.validate()?;

    if !store.exists(id)? {
        return Err(Error::NotFound(format!("Income not found with id: {id}")));
    }

    let fields = form.to_fields()?;
    let income = store.create(fields)?;
    tracing::info!("stored replacement for income {id} as income {}", income.id);

    Ok(income)
}

/// Delete the income with `id`. Deleting a missing income does nothing.
pub fn delete_income(id: IncomeId, store: &impl IncomeStore) -> Result<(), Error> {
    store.delete(id)?;
    tracing::info!("deleted income {id}");

    Ok(())
}
