//! App-level flows driven through key handling and the message channel.

mod common;

use std::time::{Duration, Instant};

use common::{app_tick, press, test_app, type_text};
use crossterm::event::KeyCode;
use wellspring::app::{AppMessage, Screen, StatusLine};
use wellspring::models::{Mood, QuickTool};
use wellspring::state::{ToolActivation, ToolkitFocus};

#[test]
fn test_app_initializes_on_dashboard_and_dirty() {
    let app = test_app();
    assert_eq!(app.screen, Screen::Dashboard);
    assert!(app.needs_redraw);
    assert!(!app.settings_panel_open);
    assert!(!app.toolkit.breathing().is_active());
}

#[test]
fn test_mood_selection_is_last_write_wins() {
    let mut app = test_app();
    app.toolkit.moods_mut().select(Mood::Calm);
    app.toolkit.moods_mut().select(Mood::Sad);

    assert_eq!(app.toolkit.moods().selected(), Some(Mood::Sad));
    let highlighted: Vec<Mood> = Mood::ALL
        .into_iter()
        .filter(|m| app.toolkit.moods().is_selected(*m))
        .collect();
    assert_eq!(highlighted, vec![Mood::Sad]);
}

#[test]
fn test_breathing_from_tool_grid_runs_to_completion() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.toolkit.focus(), ToolkitFocus::Tools);
    assert_eq!(app.toolkit.selected_tool(), QuickTool::BreathingExercise);

    press(&mut app, KeyCode::Enter);
    assert!(app.toolkit.breathing().is_active());

    for expected in 1..10 {
        app.handle_message(app_tick(&app));
        assert_eq!(app.toolkit.breathing().breath_count(), expected);
    }
    app.handle_message(app_tick(&app));

    assert!(!app.toolkit.breathing().is_active());
    assert_eq!(app.toolkit.breathing().breath_count(), 0);
    assert_eq!(app.toolkit.breathing().scheduler().live_tickers(), 0);
}

#[test]
fn test_starting_twice_reports_already_running() {
    let mut app = test_app();
    assert_eq!(app.toolkit.start_breathing(), ToolActivation::BreathingStarted);
    assert_eq!(
        app.toolkit.start_breathing(),
        ToolActivation::BreathingAlreadyRunning
    );
    assert_eq!(app.toolkit.breathing().scheduler().scheduled_count(), 1);
}

#[test]
fn test_personalize_tool_posts_toggle_once() {
    let mut app = test_app();
    assert_eq!(
        app.toolkit.activate_tool(QuickTool::PersonalizeDashboard),
        ToolActivation::SettingsToggled
    );

    let rx = app.message_rx.as_mut().unwrap();
    assert_eq!(rx.try_recv().ok(), Some(AppMessage::ToggleSettingsPanel));
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_settings_panel_opens_and_closes() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('s'));
    app.drain_messages();
    assert!(app.settings_panel_open);

    press(&mut app, KeyCode::Esc);
    app.drain_messages();
    assert!(!app.settings_panel_open);
}

#[test]
fn test_escape_twice_before_drain_keeps_panel_closed() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('s'));
    app.drain_messages();

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Esc);
    app.drain_messages();
    assert!(!app.settings_panel_open);

    press(&mut app, KeyCode::Char('s'));
    app.drain_messages();
    assert!(app.settings_panel_open);
}

#[test]
fn test_reflection_editing_round_trip() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('2'));
    app.toolkit.set_focus(ToolkitFocus::Reflection);

    type_text(&mut app, "the sun");
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    type_text(&mut app, "rain");
    assert_eq!(app.toolkit.reflection().text(), "the rain");

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.toolkit.focus(), ToolkitFocus::Moods);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn test_status_line_expires_on_tick() {
    let mut app = test_app();
    app.status = Some(StatusLine {
        text: "Grounding: Connect with your senses".to_string(),
        shown_at: Instant::now() - Duration::from_secs(10),
    });
    app.needs_redraw = false;

    app.tick();

    assert!(app.status.is_none());
    assert!(app.needs_redraw);
}

#[test]
fn test_breathing_keeps_redrawing() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('b'));
    app.needs_redraw = false;
    app.tick();
    assert!(app.needs_redraw);
}

#[test]
fn test_tab_from_dashboard_opens_toolkit() {
    let mut app = test_app();
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.screen, Screen::Toolkit);
    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.screen, Screen::Dashboard);
}
