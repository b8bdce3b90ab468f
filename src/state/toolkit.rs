//! Wellness toolkit state: mood selector, quick tools, reflection and the
//! breathing exercise.

use crate::breathing::{BreathTick, BreathingController, TickOutcome, TickScheduler};
use crate::config::BreathingConfig;
use crate::models::QuickTool;
use crate::state::MoodSelector;
use crate::widgets::ReflectionBox;

/// Callback that shows or hides the personalization settings panel.
pub type SettingsToggle = Box<dyn FnMut() + Send>;

/// Number of columns in the quick-tool grid.
pub const TOOL_GRID_COLUMNS: usize = 2;

/// Which toolkit section receives arrow keys and typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolkitFocus {
    #[default]
    Moods,
    Tools,
    Reflection,
}

impl ToolkitFocus {
    pub fn next(self) -> Self {
        match self {
            ToolkitFocus::Moods => ToolkitFocus::Tools,
            ToolkitFocus::Tools => ToolkitFocus::Reflection,
            ToolkitFocus::Reflection => ToolkitFocus::Moods,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ToolkitFocus::Moods => ToolkitFocus::Reflection,
            ToolkitFocus::Tools => ToolkitFocus::Moods,
            ToolkitFocus::Reflection => ToolkitFocus::Tools,
        }
    }
}

/// Result of activating a quick tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolActivation {
    BreathingStarted,
    /// Start requested while an exercise was already running.
    BreathingAlreadyRunning,
    SettingsToggled,
    /// Tool has no behavior beyond being acknowledged.
    Acknowledged(QuickTool),
}

/// State behind the toolkit screen.
pub struct WellnessToolkit<S: TickScheduler> {
    breathing: BreathingController<S>,
    moods: MoodSelector,
    reflection: ReflectionBox,
    tool_cursor: usize,
    focus: ToolkitFocus,
    toggle_settings: SettingsToggle,
}

impl<S: TickScheduler> WellnessToolkit<S> {
    pub fn new(config: BreathingConfig, scheduler: S, toggle_settings: SettingsToggle) -> Self {
        Self {
            breathing: BreathingController::new(config, scheduler),
            moods: MoodSelector::new(),
            reflection: ReflectionBox::new(),
            tool_cursor: 0,
            focus: ToolkitFocus::default(),
            toggle_settings,
        }
    }

    pub fn breathing(&self) -> &BreathingController<S> {
        &self.breathing
    }

    pub fn moods(&self) -> &MoodSelector {
        &self.moods
    }

    pub fn moods_mut(&mut self) -> &mut MoodSelector {
        &mut self.moods
    }

    pub fn reflection(&self) -> &ReflectionBox {
        &self.reflection
    }

    pub fn reflection_mut(&mut self) -> &mut ReflectionBox {
        &mut self.reflection
    }

    pub fn focus(&self) -> ToolkitFocus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: ToolkitFocus) {
        self.focus = focus;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    // ========================================================================
    // Quick tools
    // ========================================================================

    pub fn tool_cursor(&self) -> usize {
        self.tool_cursor
    }

    pub fn selected_tool(&self) -> QuickTool {
        QuickTool::ALL[self.tool_cursor]
    }

    pub fn tool_left(&mut self) {
        if self.tool_cursor % TOOL_GRID_COLUMNS > 0 {
            self.tool_cursor -= 1;
        }
    }

    pub fn tool_right(&mut self) {
        if self.tool_cursor % TOOL_GRID_COLUMNS + 1 < TOOL_GRID_COLUMNS
            && self.tool_cursor + 1 < QuickTool::ALL.len()
        {
            self.tool_cursor += 1;
        }
    }

    pub fn tool_up(&mut self) {
        if self.tool_cursor >= TOOL_GRID_COLUMNS {
            self.tool_cursor -= TOOL_GRID_COLUMNS;
        }
    }

    pub fn tool_down(&mut self) {
        if self.tool_cursor + TOOL_GRID_COLUMNS < QuickTool::ALL.len() {
            self.tool_cursor += TOOL_GRID_COLUMNS;
        }
    }

    pub fn activate_selected_tool(&mut self) -> ToolActivation {
        self.activate_tool(self.selected_tool())
    }

    pub fn activate_tool(&mut self, tool: QuickTool) -> ToolActivation {
        match tool {
            QuickTool::BreathingExercise => self.start_breathing(),
            QuickTool::PersonalizeDashboard => {
                tracing::info!("Personalize dashboard requested");
                (self.toggle_settings)();
                ToolActivation::SettingsToggled
            }
            QuickTool::SelfCompassion | QuickTool::ThoughtCheck | QuickTool::Grounding => {
                tracing::info!(tool = tool.title(), "Quick tool activated");
                ToolActivation::Acknowledged(tool)
            }
        }
    }

    // ========================================================================
    // Breathing exercise
    // ========================================================================

    pub fn start_breathing(&mut self) -> ToolActivation {
        if self.breathing.start() {
            ToolActivation::BreathingStarted
        } else {
            ToolActivation::BreathingAlreadyRunning
        }
    }

    /// End the exercise early. Returns `false` if none was running.
    pub fn end_breathing(&mut self) -> bool {
        self.breathing.cancel()
    }

    pub fn on_breath_tick(&mut self, tick: BreathTick) -> TickOutcome {
        self.breathing.on_tick(tick)
    }
}

impl<S: TickScheduler> std::fmt::Debug for WellnessToolkit<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WellnessToolkit")
            .field("breathing", &self.breathing)
            .field("moods", &self.moods)
            .field("tool_cursor", &self.tool_cursor)
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breathing::ManualTickScheduler;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn toolkit() -> (WellnessToolkit<ManualTickScheduler>, Arc<AtomicUsize>) {
        let toggles = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&toggles);
        let toolkit = WellnessToolkit::new(
            BreathingConfig::default(),
            ManualTickScheduler::new(),
            Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );
        (toolkit, toggles)
    }

    #[test]
    fn test_personalize_invokes_toggle() {
        let (mut toolkit, toggles) = toolkit();
        assert_eq!(
            toolkit.activate_tool(QuickTool::PersonalizeDashboard),
            ToolActivation::SettingsToggled
        );
        toolkit.activate_tool(QuickTool::PersonalizeDashboard);
        assert_eq!(toggles.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_breathing_tool_starts_once() {
        let (mut toolkit, _) = toolkit();
        assert_eq!(
            toolkit.activate_tool(QuickTool::BreathingExercise),
            ToolActivation::BreathingStarted
        );
        assert_eq!(
            toolkit.activate_tool(QuickTool::BreathingExercise),
            ToolActivation::BreathingAlreadyRunning
        );
        assert_eq!(toolkit.breathing().scheduler().live_tickers(), 1);
    }

    #[test]
    fn test_informational_tools_are_acknowledged() {
        let (mut toolkit, toggles) = toolkit();
        for tool in [QuickTool::SelfCompassion, QuickTool::ThoughtCheck, QuickTool::Grounding] {
            assert_eq!(toolkit.activate_tool(tool), ToolActivation::Acknowledged(tool));
        }
        assert!(!toolkit.breathing().is_active());
        assert_eq!(toggles.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_tool_grid_navigation() {
        let (mut toolkit, _) = toolkit();
        toolkit.tool_right();
        assert_eq!(toolkit.selected_tool(), QuickTool::SelfCompassion);
        toolkit.tool_right();
        assert_eq!(toolkit.tool_cursor(), 1);
        toolkit.tool_down();
        toolkit.tool_down();
        assert_eq!(toolkit.selected_tool(), QuickTool::Grounding);
        toolkit.tool_left();
        toolkit.tool_down();
        assert_eq!(toolkit.selected_tool(), QuickTool::PersonalizeDashboard);
        toolkit.tool_right();
        assert_eq!(toolkit.selected_tool(), QuickTool::PersonalizeDashboard);
        toolkit.tool_up();
        assert_eq!(toolkit.selected_tool(), QuickTool::ThoughtCheck);
    }

    #[test]
    fn test_focus_cycles() {
        let (mut toolkit, _) = toolkit();
        toolkit.focus_next();
        assert_eq!(toolkit.focus(), ToolkitFocus::Tools);
        toolkit.focus_prev();
        toolkit.focus_prev();
        assert_eq!(toolkit.focus(), ToolkitFocus::Reflection);
    }
}
