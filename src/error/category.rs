//! Error category classification.
//!
//! Categories give the app a single place to decide how an error is reported
//! (status line, stderr on exit, log only).

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Terminal or rendering problems. Usually fatal for the TUI.
    Terminal,

    /// User action required (bad key in the config file, bad env value).
    Configuration,

    /// System/OS errors (filesystem, permissions).
    System,

    /// Programming errors (invalid state transitions, closed channels).
    Internal,
}

impl ErrorCategory {
    /// Returns true if the TUI can keep running after an error of this category.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ErrorCategory::Configuration | ErrorCategory::System)
    }

    /// Short label for log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Terminal => "terminal",
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::System => "system",
            ErrorCategory::Internal => "internal",
        }
    }

    /// Suggested next step shown to the user.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Terminal => "Try resizing the window or running `reset`.",
            ErrorCategory::Configuration => "Fix the value in your config file or environment.",
            ErrorCategory::System => "Check file permissions and available disk space.",
            ErrorCategory::Internal => "Please report this issue.",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
