//! Defines the `Output` type: money spent, optionally classified by a [Category].

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    database_id::DatabaseId,
    models::{
        Category, CategoryId,
        transaction::{TransactionFields, parse_date, require_fields},
    },
};

/// Database identifier for an output.
pub type OutputId = DatabaseId;

/// A record of money spent. A negative amount records a refund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    /// Assigned by the store on creation.
    pub id: OutputId,
    /// The amount, description and dates.
    #[serde(flatten)]
    pub fields: TransactionFields,
    /// The stored reference to a category, if one was resolved at write time.
    pub category_id: Option<CategoryId>,
    /// The referenced category. `None` when there is no reference or the
    /// category has since been deleted.
    pub category: Option<Category>,
}

/// The request body for creating or replacing an output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputForm {
    /// Must not be blank.
    #[serde(default)]
    pub description: String,
    /// The name of the category to attach, matched exactly.
    #[serde(default)]
    pub category: Option<String>,
    /// Must be present.
    #[serde(default)]
    pub amount: Option<f64>,
    /// A `YYYY-MM-DD` date.
    #[serde(default)]
    pub date: String,
}

impl OutputForm {
    /// Check that every field is present and return the amount. The date is
    /// not parsed.
    ///
    /// # Errors
    ///
    /// Returns an [Error::Validation] naming the first missing field.
    pub fn validate(&self) -> Result<f64, Error> {
        require_fields(&self.description, self.amount, &self.date)
    }

    /// Validate the form and turn it into the fields of a new output.
    ///
    /// The amount may be any sign.
    ///
    /// # Errors
    ///
    /// Returns an [Error::Validation] if a field is missing, or an
    /// [Error::DateParse] if the date is not in `YYYY-MM-DD` format.
    pub fn to_fields(&self) -> Result<TransactionFields, Error> {
        let amount = self.validate()?;
        let date = parse_date(&self.date)?;

        Ok(TransactionFields::new(amount, &self.description, date))
    }
}
