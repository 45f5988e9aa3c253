//! Contains traits and implementations for objects that store the domain [models](crate::models).

mod category;
mod income;
mod output;

pub mod sqlite;

pub use category::CategoryStore;
pub use income::IncomeStore;
pub use output::OutputStore;
