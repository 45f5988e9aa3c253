//! Defines the `Income` type: money received.

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    database_id::DatabaseId,
    models::transaction::{TransactionFields, parse_date, require_fields},
};

/// Database identifier for an income.
pub type IncomeId = DatabaseId;

/// A record of money received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    /// Assigned by the store on creation.
    pub id: IncomeId,
    /// The amount, description and dates.
    #[serde(flatten)]
    pub fields: TransactionFields,
}

/// The request body for creating or replacing an income.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncomeForm {
    /// Must not be blank.
    #[serde(default)]
    pub description: String,
    /// A free-text label. Accepted for compatibility with clients but not
    /// stored.
    #[serde(default)]
    pub category: Option<String>,
    /// Must be present.
    #[serde(default)]
    pub amount: Option<f64>,
    /// A `YYYY-MM-DD` date.
    #[serde(default)]
    pub date: String,
}

impl IncomeForm {
    /// Check that every field is present and the amount is strictly positive,
    /// and return the amount. The date is not parsed.
    ///
    /// # Errors
    ///
    /// Returns an [Error::Validation] naming the first invalid field.
    pub fn validate(&self) -> Result<f64, Error> {
        let amount = require_fields(&self.description, self.amount, &self.date)?;

        if amount <= 0.0 {
            return Err(Error::Validation(
                "Income amount must be positive".to_owned(),
            ));
        }

        Ok(amount)
    }

    /// Validate the form and turn it into the fields of a new income.
    ///
    /// # Errors
    ///
    /// Returns an [Error::Validation] if a field is missing or the amount is
    /// not strictly positive, or an [Error::DateParse] if the date is not in
    /// `YYYY-MM-DD` format.
    pub fn to_fields(&self) -> Result<TransactionFields, Error> {
        let amount = self.validate()?;
        let date = parse_date(&self.date)?;

        Ok(TransactionFields::new(amount, &self.description, date))
    }
}
