//! Result type alias for Wellspring operations.

use super::wellspring_error::WellspringError;

/// Type alias for Results using [`WellspringError`].
pub type WellspringResult<T> = Result<T, WellspringError>;
