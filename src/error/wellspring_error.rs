//! Unified error type for the library.

use std::fmt;

use super::category::ErrorCategory;
use super::config::ConfigError;
use super::system::{classify_io_error, SystemError};
use super::ui::UiError;

/// Unified error type for Wellspring.
///
/// The binary converts this into `color_eyre::Report` at its edge; library
/// code returns it through [`super::WellspringResult`].
#[derive(Debug)]
pub enum WellspringError {
    /// Configuration loading/validation errors.
    Config(ConfigError),

    /// UI/terminal errors.
    Ui(UiError),

    /// System/filesystem errors.
    System(SystemError),
}

impl WellspringError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            WellspringError::Config(_) => ErrorCategory::Configuration,
            WellspringError::Ui(UiError::ChannelClosed) => ErrorCategory::Internal,
            WellspringError::Ui(_) => ErrorCategory::Terminal,
            WellspringError::System(_) => ErrorCategory::System,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            WellspringError::Config(err) => err.user_message(),
            WellspringError::Ui(err) => err.user_message(),
            WellspringError::System(err) => err.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            WellspringError::Config(err) => err.error_code(),
            WellspringError::Ui(err) => err.error_code(),
            WellspringError::System(err) => err.error_code(),
        }
    }
}

impl fmt::Display for WellspringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WellspringError::Config(err) => write!(f, "{}", err),
            WellspringError::Ui(err) => write!(f, "{}", err),
            WellspringError::System(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for WellspringError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WellspringError::Config(err) => Some(err),
            WellspringError::Ui(err) => Some(err),
            WellspringError::System(err) => Some(err),
        }
    }
}

impl From<ConfigError> for WellspringError {
    fn from(err: ConfigError) -> Self {
        WellspringError::Config(err)
    }
}

impl From<UiError> for WellspringError {
    fn from(err: UiError) -> Self {
        WellspringError::Ui(err)
    }
}

impl From<SystemError> for WellspringError {
    fn from(err: SystemError) -> Self {
        WellspringError::System(err)
    }
}

impl From<std::io::Error> for WellspringError {
    fn from(err: std::io::Error) -> Self {
        WellspringError::System(classify_io_error(&err, "perform I/O", None))
    }
}
