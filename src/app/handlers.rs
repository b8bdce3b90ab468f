//! Key and message handling.
//!
//! Precedence, highest first:
//! 1. Ctrl+C quits
//! 2. Breathing modal (only its own keys)
//! 3. Settings panel (Esc closes)
//! 4. Reflection editor while focused
//! 5. Global shortcuts, then the focused toolkit section

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::breathing::{TickOutcome, TickScheduler};
use crate::models::QuickTool;
use crate::state::{ToolActivation, ToolkitFocus};

use super::{App, AppMessage, Screen};

impl<S: TickScheduler> App<S> {
    /// Apply a message from a timer or callback.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::BreathTick(tick) => match self.toolkit.on_breath_tick(tick) {
                TickOutcome::Advanced { .. } => self.mark_dirty(),
                TickOutcome::Completed => {
                    self.set_status("Breathing exercise complete. Well done.");
                }
                TickOutcome::Ignored => {}
            },
            AppMessage::ToggleSettingsPanel => {
                self.settings_panel_open = !self.settings_panel_open;
                tracing::debug!(open = self.settings_panel_open, "Settings panel toggled");
                self.mark_dirty();
            }
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();
        tracing::trace!(code = ?key.code, mods = ?key.modifiers, "Key event");

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if self.toolkit.breathing().is_active() {
            self.handle_breathing_key(key);
            return;
        }

        if self.settings_panel_open && key.code == KeyCode::Esc {
            self.settings_panel_open = false;
            tracing::debug!("Settings panel closed");
            return;
        }

        if self.screen == Screen::Toolkit
            && self.toolkit.focus() == ToolkitFocus::Reflection
            && self.handle_reflection_key(key)
        {
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('1') => self.navigate_to(Screen::Dashboard),
            KeyCode::Char('2') => self.navigate_to(Screen::Toolkit),
            KeyCode::Char('b') => self.apply_activation(QuickTool::BreathingExercise),
            KeyCode::Char('s') => self.apply_activation(QuickTool::PersonalizeDashboard),
            KeyCode::Tab => match self.screen {
                Screen::Dashboard => self.navigate_to(Screen::Toolkit),
                Screen::Toolkit => self.toolkit.focus_next(),
            },
            KeyCode::BackTab => match self.screen {
                Screen::Dashboard => self.navigate_to(Screen::Toolkit),
                Screen::Toolkit => self.toolkit.focus_prev(),
            },
            _ if self.screen == Screen::Toolkit => self.handle_toolkit_key(key),
            _ => {}
        }
    }

    /// Handle a bracketed paste.
    pub fn handle_paste(&mut self, text: &str) {
        if self.screen == Screen::Toolkit
            && self.toolkit.focus() == ToolkitFocus::Reflection
            && !self.toolkit.breathing().is_active()
        {
            self.toolkit.reflection_mut().insert_str(text);
            self.mark_dirty();
        }
    }

    fn handle_breathing_key(&mut self, key: KeyEvent) {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('q')
        ) && self.toolkit.end_breathing()
        {
            self.set_status("Breathing exercise ended.");
        }
    }

    /// Returns `true` if the key was consumed by the editor.
    fn handle_reflection_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Esc {
            self.toolkit.set_focus(ToolkitFocus::Moods);
            return true;
        }

        let reflection = self.toolkit.reflection_mut();
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                reflection.insert_char(c)
            }
            KeyCode::Enter => reflection.insert_newline(),
            KeyCode::Backspace => reflection.backspace(),
            KeyCode::Delete => reflection.delete_char(),
            KeyCode::Left => reflection.move_cursor_left(),
            KeyCode::Right => reflection.move_cursor_right(),
            KeyCode::Home => reflection.move_cursor_home(),
            KeyCode::End => reflection.move_cursor_end(),
            _ => return false,
        }
        true
    }

    fn handle_toolkit_key(&mut self, key: KeyEvent) {
        match self.toolkit.focus() {
            ToolkitFocus::Moods => match key.code {
                KeyCode::Left => self.toolkit.moods_mut().move_left(),
                KeyCode::Right => self.toolkit.moods_mut().move_right(),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    let mood = self.toolkit.moods_mut().select_under_cursor();
                    tracing::info!(mood = mood.label(), "Mood recorded");
                }
                KeyCode::Down => self.toolkit.set_focus(ToolkitFocus::Tools),
                _ => {}
            },
            ToolkitFocus::Tools => match key.code {
                KeyCode::Left => self.toolkit.tool_left(),
                KeyCode::Right => self.toolkit.tool_right(),
                KeyCode::Up => self.toolkit.tool_up(),
                KeyCode::Down => self.toolkit.tool_down(),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    let tool = self.toolkit.selected_tool();
                    self.apply_activation(tool);
                }
                _ => {}
            },
            ToolkitFocus::Reflection => {}
        }
    }

    fn apply_activation(&mut self, tool: QuickTool) {
        match self.toolkit.activate_tool(tool) {
            ToolActivation::BreathingStarted => {
                self.status = None;
            }
            ToolActivation::BreathingAlreadyRunning => {}
            ToolActivation::SettingsToggled => {}
            ToolActivation::Acknowledged(tool) => {
                self.set_status(format!("{}: {}", tool.title(), tool.description()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breathing::{BreathTick, ManualTickScheduler};
    use crate::config::AppConfig;
    use crate::models::Mood;
    use crossterm::event::KeyEventKind;
    use tokio::sync::mpsc;

    fn test_app() -> App<ManualTickScheduler> {
        let (tx, rx) = mpsc::unbounded_channel();
        App::with_scheduler(AppConfig::default(), ManualTickScheduler::new(), tx, rx)
    }

    fn press(app: &mut App<ManualTickScheduler>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn current_tick(app: &App<ManualTickScheduler>) -> AppMessage {
        AppMessage::BreathTick(BreathTick {
            generation: app.toolkit.breathing().generation(),
        })
    }

    #[test]
    fn test_double_escape_keeps_settings_closed() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('s'));
        app.drain_messages();
        assert!(app.settings_panel_open);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Esc);
        app.drain_messages();
        assert!(!app.settings_panel_open);
    }

    #[test]
    fn test_ctrl_c_quits_even_while_breathing() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('b'));
        let mut key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        key.kind = KeyEventKind::Press;
        app.handle_key(key);
        assert!(app.should_quit);
    }

    #[test]
    fn test_modal_swallows_other_keys() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.screen, Screen::Dashboard);
        assert!(app.toolkit.breathing().is_active());
    }

    #[test]
    fn test_escape_ends_exercise() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('b'));
        app.handle_message(current_tick(&app));
        press(&mut app, KeyCode::Esc);
        assert!(!app.toolkit.breathing().is_active());
        assert_eq!(app.toolkit.breathing().breath_count(), 0);
        assert_eq!(app.toolkit.breathing().scheduler().live_tickers(), 0);
    }

    #[test]
    fn test_completion_sets_status() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('b'));
        for _ in 0..10 {
            app.handle_message(current_tick(&app));
        }
        assert!(!app.toolkit.breathing().is_active());
        assert!(app.status.as_ref().unwrap().text.contains("complete"));
    }

    #[test]
    fn test_settings_toggle_goes_through_channel() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('s'));
        assert!(!app.settings_panel_open);
        app.drain_messages();
        assert!(app.settings_panel_open);

        press(&mut app, KeyCode::Esc);
        app.drain_messages();
        assert!(!app.settings_panel_open);
    }

    #[test]
    fn test_mood_selection_by_keyboard() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.toolkit.moods().selected(), Some(Mood::Sad));
    }

    #[test]
    fn test_reflection_captures_shortcut_letters() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.toolkit.focus(), ToolkitFocus::Reflection);
        for c in "qbs1".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.toolkit.reflection().text(), "qbs1");
        assert!(!app.should_quit);
        assert!(!app.toolkit.breathing().is_active());
    }

    #[test]
    fn test_tool_activation_sets_status() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.status.as_ref().map(|s| s.text.as_str()),
            Some("Grounding: Connect with your senses")
        );
    }

    #[test]
    fn test_paste_only_into_focused_reflection() {
        let mut app = test_app();
        app.handle_paste("ignored");
        assert!(app.toolkit.reflection().is_empty());

        app.navigate_to(Screen::Toolkit);
        app.toolkit.set_focus(ToolkitFocus::Reflection);
        app.handle_paste("sunlight");
        assert_eq!(app.toolkit.reflection().text(), "sunlight");
    }
}
