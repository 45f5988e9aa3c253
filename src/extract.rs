//! Request extractors that reject with the app's JSON error body.

use axum::extract::{FromRequest, FromRequestParts};

use crate::Error;

/// A JSON request body. Rejections are converted into [Error::Rejected].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct JsonBody<T>(pub T);

/// A path parameter. Rejections are converted into [Error::Rejected].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct PathParam<T>(pub T);
