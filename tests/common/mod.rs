//! Shared fixtures for integration tests.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use tokio::sync::mpsc;
use wellspring::app::{App, AppMessage};
use wellspring::breathing::{BreathTick, BreathingController, ManualTickScheduler};
use wellspring::config::{AppConfig, BreathingConfig};

/// App driven by a manual ticker.
pub fn test_app() -> App<ManualTickScheduler> {
    test_app_with(AppConfig::default())
}

pub fn test_app_with(config: AppConfig) -> App<ManualTickScheduler> {
    let (tx, rx) = mpsc::unbounded_channel();
    App::with_scheduler(config, ManualTickScheduler::new(), tx, rx)
}

/// Controller with default config plus a clone of its scheduler for
/// inspecting live ticker counts.
pub fn test_controller() -> (BreathingController<ManualTickScheduler>, ManualTickScheduler) {
    let scheduler = ManualTickScheduler::new();
    let controller = BreathingController::new(BreathingConfig::default(), scheduler.clone());
    (controller, scheduler)
}

/// A tick for the controller's current session.
pub fn tick_for(controller: &BreathingController<ManualTickScheduler>) -> BreathTick {
    BreathTick {
        generation: controller.generation(),
    }
}

/// A tick for the app's current breathing session, as the ticker would post it.
pub fn app_tick(app: &App<ManualTickScheduler>) -> AppMessage {
    AppMessage::BreathTick(tick_for(app.toolkit.breathing()))
}

pub fn press(app: &mut App<ManualTickScheduler>, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

pub fn type_text(app: &mut App<ManualTickScheduler>, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Render the full frame and return the buffer as one string.
pub fn render_to_string(app: &App<ManualTickScheduler>, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| wellspring::ui::render(f, app))
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}
