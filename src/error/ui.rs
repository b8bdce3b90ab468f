//! UI-related error types.

use std::fmt;

/// Errors from terminal setup, drawing and the event loop.
#[derive(Debug, Clone)]
pub enum UiError {
    /// Terminal initialization failed.
    TerminalInitFailed { message: String },

    /// Terminal restore failed.
    TerminalRestoreFailed { message: String },

    /// Drawing a frame failed.
    RenderFailed { component: String, message: String },

    /// The app message channel closed while the loop was running.
    ChannelClosed,
}

impl UiError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            UiError::TerminalInitFailed { .. } => {
                "Failed to initialize the terminal. Please check your terminal settings.".to_string()
            }
            UiError::TerminalRestoreFailed { .. } => {
                "Failed to restore terminal. You may need to run `reset`.".to_string()
            }
            UiError::RenderFailed { component, .. } => {
                format!("Failed to render {}.", component)
            }
            UiError::ChannelClosed => {
                "Internal communication error. Please restart the application.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            UiError::TerminalInitFailed { .. } => "E_UI_TERM_INIT",
            UiError::TerminalRestoreFailed { .. } => "E_UI_TERM_RESTORE",
            UiError::RenderFailed { .. } => "E_UI_RENDER",
            UiError::ChannelClosed => "E_UI_CHANNEL",
        }
    }
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::TerminalInitFailed { message } => {
                write!(f, "Terminal initialization failed: {}", message)
            }
            UiError::TerminalRestoreFailed { message } => {
                write!(f, "Terminal restore failed: {}", message)
            }
            UiError::RenderFailed { component, message } => {
                write!(f, "Render failed for {}: {}", component, message)
            }
            UiError::ChannelClosed => write!(f, "App message channel closed"),
        }
    }
}

impl std::error::Error for UiError {}
