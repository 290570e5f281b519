//! Result type aliases for japi.

use crate::JsonApiError;

/// A specialized `Result` type for JSON:API operations.
pub type JsonApiResult<T> = Result<T, JsonApiError>;
