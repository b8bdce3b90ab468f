//! AppMessage enum for async communication within the application.

use crate::breathing::BreathTick;

/// Messages posted into the event loop by timers and injected callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// The breathing ticker fired.
    BreathTick(BreathTick),
    /// Show or hide the personalization settings panel.
    ToggleSettingsPanel,
}

impl From<BreathTick> for AppMessage {
    fn from(tick: BreathTick) -> Self {
        AppMessage::BreathTick(tick)
    }
}
