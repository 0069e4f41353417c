use crate::error::IconError;

/// Common Result type alias
pub type IconResult<T> = Result<T, IconError>;
