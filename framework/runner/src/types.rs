use crate::error::CollectError;

/// Result type for everything that can go wrong while producing samples.
pub type CollectResult<T> = Result<T, CollectError>;
