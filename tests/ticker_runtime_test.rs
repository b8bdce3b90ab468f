//! The tokio-backed ticker under paused time.
//!
//! With `start_paused = true` the runtime jumps the clock to the next timer
//! whenever every task is idle, so five-second breaths run instantly.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::time::{timeout, Instant};
use wellspring::app::{App, AppMessage};
use wellspring::config::AppConfig;

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

#[tokio::test(start_paused = true)]
async fn test_full_exercise_on_real_ticker() {
    let mut app = App::new(AppConfig::default());
    let mut rx = app.message_rx.take().unwrap();

    let started = Instant::now();
    press(&mut app, KeyCode::Char('b'));
    assert!(app.toolkit.breathing().is_active());

    for _ in 0..10 {
        let message = rx.recv().await.unwrap();
        assert!(matches!(message, AppMessage::BreathTick(_)));
        app.handle_message(message);
    }

    assert_eq!(started.elapsed(), Duration::from_millis(50_000));
    assert!(!app.toolkit.breathing().is_active());
    assert_eq!(app.toolkit.breathing().breath_count(), 0);

    // The ticker was aborted on completion; nothing else arrives.
    assert!(timeout(Duration::from_secs(60), rx.recv()).await.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_cancel_stops_real_ticker() {
    let mut app = App::new(AppConfig::default().with_tick_interval_ms(1000));
    let mut rx = app.message_rx.take().unwrap();

    press(&mut app, KeyCode::Char('b'));
    let message = rx.recv().await.unwrap();
    app.handle_message(message);
    assert_eq!(app.toolkit.breathing().breath_count(), 1);

    press(&mut app, KeyCode::Esc);
    assert!(!app.toolkit.breathing().is_active());
    assert!(timeout(Duration::from_secs(30), rx.recv()).await.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_settings_toggle_arrives_through_channel() {
    let mut app = App::new(AppConfig::default());
    let mut rx = app.message_rx.take().unwrap();

    press(&mut app, KeyCode::Char('s'));
    let message = rx.recv().await.unwrap();
    assert_eq!(message, AppMessage::ToggleSettingsPanel);
    app.handle_message(message);
    assert!(app.settings_panel_open);
}
