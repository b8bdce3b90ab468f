//! Prelude module for convenient imports.
//!
//! ```ignore
//! use wellspring::prelude::*;
//! ```

// Core application types
pub use crate::app::{App, AppMessage, Screen, StatusLine};

// Breathing exercise
pub use crate::breathing::{
    BreathTick, BreathingController, BreathingState, ManualTickScheduler, Phase, TickOutcome,
    TickScheduler, TokioTickScheduler,
};

// Configuration
pub use crate::config::{AppConfig, BreathingConfig};

// Error types
pub use crate::error::{ConfigError, ErrorCategory, WellspringError, WellspringResult};

// Model types
pub use crate::models::{DashboardData, Mood, QuickTool};

// State types
pub use crate::state::{MoodSelector, ToolActivation, ToolkitFocus, WellnessToolkit};

// UI
pub use crate::ui::{render, LayoutContext};
