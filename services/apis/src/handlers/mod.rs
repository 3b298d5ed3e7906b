use axum::Json;
use axum::extract::Path;
use axum_extra::extract::WithRejection;

use crate::error::ApiServiceError;

pub mod entity;
pub mod health;
pub mod resources;
pub mod user;

/// JSON body whose deserialization failures surface as `InvalidType`.
pub type JsonBody<T> = WithRejection<Json<T>, ApiServiceError>;

/// Single integer path segment; a non-integer segment surfaces as `InvalidType`.
pub type IdPath = WithRejection<Path<i32>, ApiServiceError>;
