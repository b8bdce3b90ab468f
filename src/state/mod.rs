//! UI-local state containers.
//!
//! Nothing here is persisted; every struct is rebuilt on launch.

mod mood;
mod toolkit;

pub use mood::MoodSelector;
pub use toolkit::{SettingsToggle, ToolActivation, ToolkitFocus, WellnessToolkit, TOOL_GRID_COLUMNS};
