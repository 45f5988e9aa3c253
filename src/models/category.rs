//! This file defines the `Category` type and the types needed to create a category.
//! A category classifies an output (expense), e.g., 'Food' or 'Rent'.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, database_id::DatabaseId};

/// Database identifier for a category.
pub type CategoryId = DatabaseId;

/// A validated, non-empty category name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name. The name is kept exactly as given.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::Validation] if `name` is empty or only whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        if name.trim().is_empty() {
            Err(Error::Validation("Category name cannot be blank".to_owned()))
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because if the non-empty invariant is violated it will cause incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CategoryName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryName::new(s)
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named classification for outputs, e.g., 'Groceries', 'Transport'.
///
/// Names are unique across all categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Category {
    /// Assigned by the store on creation.
    pub id: CategoryId,
    /// The unique name of the category.
    pub name: CategoryName,
}

/// The request body for creating and renaming a category.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryForm {
    /// The requested name, validated with [CategoryName::new].
    #[serde(default)]
    pub name: String,
}
