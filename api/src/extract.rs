//! Request extractors
//!
//! Wrappers around axum's `Json` and `Path` whose rejections become
//! `AppError::BadRequest`, so malformed input gets the same JSON error body
//! as every other failure.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameters
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
