//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/categories/{category_id}', use [format_endpoint].

use std::fmt::Display;

/// The route for listing all categories.
pub const CATEGORIES: &str = "/categories";
/// The route to create a category.
pub const CREATE_CATEGORY: &str = "/categories/create";
/// The route to get, rename or delete a single category.
pub const CATEGORY: &str = "/categories/{category_id}";
/// The route to get a category by its name.
pub const CATEGORY_BY_NAME: &str = "/categories/name/{name}";

/// The route for listing all incomes.
pub const INCOMES: &str = "/incomes";
/// The route to create an income.
pub const CREATE_INCOME: &str = "/incomes/create";
/// The route to get, replace or delete a single income.
pub const INCOME: &str = "/incomes/{income_id}";

/// The route for listing all outputs.
pub const OUTPUTS: &str = "/outputs";
/// The route to create an output.
pub const CREATE_OUTPUT: &str = "/outputs/create";
/// The route to get, replace or delete a single output.
pub const OUTPUT: &str = "/outputs/{output_id}";

/// Replace the parameter in `endpoint_path` with `value`.
///
/// A parameter is a string that starts with a left brace and ends with a
/// right brace. For example, in the endpoint path '/categories/{category_id}',
/// '{category_id}' is the parameter.
///
/// This function assumes that an endpoint path contains at most one parameter.
/// The caller is responsible for percent-encoding `value` if needed.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, value: impl Display) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        value,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::CATEGORIES);
        assert_endpoint_is_valid_uri(endpoints::CREATE_CATEGORY);
        assert_endpoint_is_valid_uri(endpoints::CATEGORY);
        assert_endpoint_is_valid_uri(endpoints::CATEGORY_BY_NAME);
        assert_endpoint_is_valid_uri(endpoints::INCOMES);
        assert_endpoint_is_valid_uri(endpoints::CREATE_INCOME);
        assert_endpoint_is_valid_uri(endpoints::INCOME);
        assert_endpoint_is_valid_uri(endpoints::OUTPUTS);
        assert_endpoint_is_valid_uri(endpoints::CREATE_OUTPUT);
        assert_endpoint_is_valid_uri(endpoints::OUTPUT);
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint("/hello/{world_id}", 1);

        assert_eq!(formatted_path, "/hello/1");
        assert!(formatted_path.parse::<Uri>().is_ok());

        // Parameter with single word should also work.
        let formatted_path = format_endpoint("/hello/{world}", 1);

        assert_eq!(formatted_path, "/hello/1");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn accepts_text_values() {
        let formatted_path = format_endpoint(endpoints::CATEGORY_BY_NAME, "Food");

        assert_eq!(formatted_path, "/categories/name/Food");
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint("/hello/world", 1);

        assert_eq!(formatted_path, "/hello/world");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn parameter_in_middle() {
        let formatted_path = format_endpoint("/hello/{world}/bye", 1);

        assert_eq!(formatted_path, "/hello/1/bye");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }
}
