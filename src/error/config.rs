//! Configuration errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating [`crate::config::AppConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("Failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for `AppConfig`.
    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An environment override could not be parsed.
    #[error("Invalid value '{value}' for environment variable {var}")]
    InvalidEnv { var: String, value: String },

    /// A value parsed fine but is outside the accepted range.
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

impl ConfigError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::Read { path, .. } => {
                format!("Could not read the config file at '{}'.", path.display())
            }
            ConfigError::Parse { path, source } => format!(
                "The config file at '{}' is not valid (line {}, column {}).",
                path.display(),
                source.line(),
                source.column()
            ),
            ConfigError::InvalidEnv { var, value } => {
                format!("{} is set to '{}', which is not a number.", var, value)
            }
            ConfigError::InvalidValue { key, reason } => format!("'{}' {}.", key, reason),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Read { .. } => "E_CFG_READ",
            ConfigError::Parse { .. } => "E_CFG_PARSE",
            ConfigError::InvalidEnv { .. } => "E_CFG_ENV",
            ConfigError::InvalidValue { .. } => "E_CFG_VALUE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message() {
        let err = ConfigError::InvalidValue {
            key: "tick_ceiling",
            reason: "must be an even number of ticks".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for tick_ceiling: must be an even number of ticks"
        );
        assert_eq!(err.error_code(), "E_CFG_VALUE");
    }

    #[test]
    fn test_parse_error_reports_position() {
        let source = serde_json::from_str::<serde_json::Value>("{\n  oops").unwrap_err();
        let err = ConfigError::Parse {
            path: PathBuf::from("/tmp/config.json"),
            source,
        };
        assert!(err.user_message().contains("line 2"));
    }
}
