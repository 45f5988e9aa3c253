//! The fields shared by incomes and outputs, and the date format used for them.

use serde::{Deserialize, Serialize};
use time::{
    Date, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description,
};

use crate::Error;

/// The calendar date format used for transaction dates, e.g., "2025-08-12".
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Parse a `YYYY-MM-DD` date string.
///
/// # Errors
///
/// Returns an [Error::DateParse] if `text` is not a valid calendar date in the expected format.
pub fn parse_date(text: &str) -> Result<Date, Error> {
    Date::parse(text, DATE_FORMAT).map_err(|error| {
        tracing::debug!("could not parse date {text:?}: {error}");
        Error::DateParse(text.to_owned())
    })
}

/// Format `date` in the same `YYYY-MM-DD` format that [parse_date] accepts.
pub fn format_date(date: Date) -> String {
    date.to_string()
}

/// The attributes common to every income and output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFields {
    /// The amount of money. Negative values are allowed for outputs (refunds).
    pub amount: f64,
    /// A non-empty description of the transaction.
    pub description: String,
    /// The calendar date the transaction happened on.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// When the record was constructed. Never updated afterwards.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl TransactionFields {
    /// Create the fields for a new transaction, capturing the current time as
    /// the creation timestamp.
    pub fn new(amount: f64, description: &str, date: Date) -> Self {
        Self {
            amount,
            description: description.to_owned(),
            date,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}

/// Check the presence of the fields every transaction request needs and
/// return the amount.
///
/// # Errors
///
/// Returns an [Error::Validation] naming the first missing field.
pub(crate) fn require_fields(
    description: &str,
    amount: Option<f64>,
    date: &str,
) -> Result<f64, Error> {
    if description.trim().is_empty() {
        return Err(Error::Validation("Description cannot be blank".to_owned()));
    }

    let amount = amount.ok_or_else(|| Error::Validation("Amount cannot be null".to_owned()))?;

    if date.trim().is_empty() {
        return Err(Error::Validation("Date cannot be blank".to_owned()));
    }

    Ok(amount)
}



#[cfg(test)]
mod serde_tests {
    use time::macros::{date, datetime};

    use super::TransactionFields;

    #[test]
    fn serializes_with_camel_case_and_iso_date() {
        let fields = TransactionFields {
            amount: 125.5,
            description: "Groceries".to_owned(),
            date: date!(2025 - 08 - 12),
            created_at: datetime!(2025-08-12 10:30:00 UTC),
        };

        let json = serde_json::to_value(&fields).unwrap();

        assert_eq!(json["amount"], 125.5);
        assert_eq!(json["description"], "Groceries");
        assert_eq!(json["date"], "2025-08-12");
        assert_eq!(json["createdAt"], "2025-08-12T10:30:00Z");
    }
}
