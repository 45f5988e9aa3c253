//! This module defines the domain data types.

mod category;
mod income;
mod output;
mod transaction;

pub use category::{Category, CategoryForm, CategoryId, CategoryName};
pub use income::{Income, IncomeForm, IncomeId};
pub use output::{Output, OutputForm, OutputId};
pub use transaction::{TransactionFields, format_date, parse_date};
