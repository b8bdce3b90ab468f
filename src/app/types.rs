//! Type definitions for the application state.

use std::time::{Duration, Instant};

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    Toolkit,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Progress",
            Screen::Toolkit => "Toolkit",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Screen::Dashboard => 0,
            Screen::Toolkit => 1,
        }
    }
}

/// How long a status line stays visible.
pub const STATUS_TTL: Duration = Duration::from_secs(3);

/// Transient one-line message shown above the footer.
#[derive(Debug, Clone)]
pub struct StatusLine {
    pub text: String,
    pub shown_at: Instant,
}

impl StatusLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= STATUS_TTL
    }
}
