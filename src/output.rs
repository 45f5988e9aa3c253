//! Output (expense) management.
//!
//! The `category` label in an [OutputForm] is resolved to a category by exact
//! name when the output is written. An unknown label is not an error, the
//! output is stored without a category.

use crate::{
    Error,
    models::{CategoryId, Output, OutputForm, OutputId},
    stores::{CategoryStore, OutputStore},
};

/// Find the ID of the category named exactly `label`.
fn resolve_category(
    label: Option<&str>,
    categories: &impl CategoryStore,
) -> Result<Option<CategoryId>, Error> {
    let Some(label) = label else {
        return Ok(None);
    };

    let category_id = categories.get_by_name(label)?.map(|category| category.id);

    if category_id.is_none() {
        tracing::debug!("no category named {label:?}, storing output without a category");
    }

    Ok(category_id)
}

/// Validate `form`, resolve its category and store it as a new output.
///
/// # Errors
///
/// Returns an [Error::Validation] or [Error::DateParse] for an invalid form,
/// or an error from either store.
pub fn create_output(
    form: &OutputForm,
    categories: &impl CategoryStore,
    outputs: &impl OutputStore,
) -> Result<Output, Error> {
    let fields = form.to_fields()?;
    let category_id = resolve_category(form.category.as_deref(), categories)?;

    let output = outputs.create(fields, category_id)?;
    tracing::info!("created output {}", output.id);

    Ok(output)
}

/// Get every output.
pub fn get_all_outputs(outputs: &impl OutputStore) -> Result<Vec<Output>, Error> {
    outputs.get_all()
}

/// Get the output with `id`, or `None` if there is no such output.
pub fn get_output(id: OutputId, outputs: &impl OutputStore) -> Result<Option<Output>, Error> {
    outputs.get(id)
}

/// Replace the output with `id` with the output described by `form`.
///
/// The ID and creation timestamp are kept, the category is resolved again
/// the same way as [create_output].
///
/// The form fields are checked before the output is looked up, and the
/// date is parsed after.
///
/// # Errors
///
/// Returns an [Error::Validation] or [Error::DateParse] for an invalid form,
/// an [Error::NotFound] if there is no output with `id`, or an error from
/// either store.
pub fn update_output(
    id: OutputId,
    form: &OutputForm,
    categories: &impl CategoryStore,
    outputs: &impl OutputStore,
) -> Result<Output, Error> {
    form.validate()?;

    if !outputs.exists(id)? {
        return Err(Error::NotFound(format!("Output not found with id: {id}")));
    }

    let fields = form.to_fields()?;
    let category_id = resolve_category(form.category.as_deref(), categories)?;

    let output = outputs.save(id, fields, category_id)?;
    tracing::info!("updated output {id}");

    Ok(output)
}

/// Delete the output with `id`. Deleting a missing output does nothing.
pub fn delete_output(id: OutputId, outputs: &impl OutputStore) -> Result<(), Error> {
    outputs.delete(id)?;
    tracing::info!("deleted output {id}");

    Ok(())
}
