//! Defines the app level error type and its conversion to JSON error responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A required field was missing or malformed, e.g., a blank description
    /// or a non-positive income amount.
    #[error("{0}")]
    Validation(String),

    /// A date string did not match the `YYYY-MM-DD` format.
    #[error("could not parse \"{0}\" as a date, expected the format YYYY-MM-DD")]
    DateParse(String),

    /// A category name is already used by another category.
    #[error("{0}")]
    Conflict(String),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the ID is
    /// correct and that the resource has been created.
    #[error("{0}")]
    NotFound(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLock,

    /// The request could not be extracted, e.g., a malformed JSON body or a
    /// non-numeric ID in the path.
    #[error("{message}")]
    Rejected {
        /// The status code chosen by the rejected extractor.
        status: StatusCode,
        /// Why the request was rejected.
        message: String,
    },
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("rejected JSON body: {}", rejection.body_text());
        Error::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        tracing::warn!("rejected path parameters: {}", rejection.body_text());
        Error::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(error: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", error);
        Error::SqlError(error)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::DateParse(_) => StatusCode::BAD_REQUEST,
            Error::Conflict(_) => StatusCode::CONFLICT,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Rejected { status, .. } => *status,
            Error::SqlError(_) | Error::DatabaseLock => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            // Internal details are for the server logs, not the client.
            tracing::error!("An unexpected error occurred: {}", self);
            "Internal server error".to_owned()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::Error;

    #[test]
    fn maps_errors_to_status_codes() {
        let cases = [
            (
                Error::Validation("Description cannot be blank".to_owned()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                Error::DateParse("12/08/2025".to_owned()),
                StatusCode::BAD_REQUEST,
            ),
            (
                Error::Conflict("Category with name 'Food' already exists".to_owned()),
                StatusCode::CONFLICT,
            ),
            (
                Error::NotFound("Category not found with id: 1".to_owned()),
                StatusCode::NOT_FOUND,
            ),
            (Error::DatabaseLock, StatusCode::INTERNAL_SERVER_ERROR),
            (
                Error::Rejected {
                    status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    message: "Expected request with `Content-Type: application/json`".to_owned(),
                },
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ),
        ];

        for (error, want_status) in cases {
            let message = error.to_string();
            let response = error.into_response();

            assert_eq!(
                response.status(),
                want_status,
                "got status {} for error \"{message}\", want {want_status}",
                response.status()
            );
        }
    }

    #[test]
    fn date_parse_message_names_the_input() {
        let error = Error::DateParse("2025-13-01".to_owned());

        assert!(error.to_string().contains("\"2025-13-01\""));
    }
}
