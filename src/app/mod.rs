//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - Which screen is currently displayed
//! - [`AppMessage`] - Messages from timers and injected callbacks
//! - [`StatusLine`] - Transient feedback line

mod handlers;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::{Screen, StatusLine, STATUS_TTL};

use std::time::Instant;

use tokio::sync::mpsc;

use crate::breathing::{TickScheduler, TokioTickScheduler};
use crate::config::AppConfig;
use crate::models::DashboardData;
use crate::state::{SettingsToggle, WellnessToolkit};

/// Scheduler used by the running binary.
pub type RuntimeScheduler = TokioTickScheduler<AppMessage>;

/// Main application state
pub struct App<S: TickScheduler = RuntimeScheduler> {
    /// Current screen being displayed
    pub screen: Screen,
    /// Toolkit screen state, including the breathing exercise
    pub toolkit: WellnessToolkit<S>,
    /// Content of the progress dashboard
    pub dashboard: DashboardData,
    /// Effective configuration
    pub config: AppConfig,
    /// Whether the personalization settings panel is visible
    pub settings_panel_open: bool,
    /// Transient feedback line
    pub status: Option<StatusLine>,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Set when state changed since the last draw
    pub needs_redraw: bool,
    /// Frame ticks since launch (drives animations)
    pub tick_count: u64,
    /// Sender cloned into timers and callbacks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App<RuntimeScheduler> {
    /// Build the app with a tokio-backed breathing ticker.
    pub fn new(config: AppConfig) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let scheduler = TokioTickScheduler::new(message_tx.clone());
        Self::with_scheduler(config, scheduler, message_tx, message_rx)
    }
}

impl<S: TickScheduler> App<S> {
    /// Build the app around an explicit scheduler and channel.
    pub fn with_scheduler(
        config: AppConfig,
        scheduler: S,
        message_tx: mpsc::UnboundedSender<AppMessage>,
        message_rx: mpsc::UnboundedReceiver<AppMessage>,
    ) -> Self {
        let toolkit = WellnessToolkit::new(
            config.breathing,
            scheduler,
            settings_toggle(message_tx.clone()),
        );

        Self {
            screen: Screen::default(),
            toolkit,
            dashboard: DashboardData::fixture(),
            config,
            settings_panel_open: false,
            status: None,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    /// Advance the frame counter and expire the status line.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if self
            .status
            .as_ref()
            .is_some_and(|status| status.is_expired(Instant::now()))
        {
            self.status = None;
            self.mark_dirty();
        }

        // The breathing circle pulses; keep redrawing while it is on screen.
        if self.toolkit.breathing().is_active() {
            self.mark_dirty();
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        tracing::info!("Quit requested");
        self.should_quit = true;
    }

    pub fn navigate_to(&mut self, screen: Screen) {
        if self.screen != screen {
            tracing::debug!(from = ?self.screen, to = ?screen, "Screen change");
            self.screen = screen;
            self.mark_dirty();
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusLine::new(text));
        self.mark_dirty();
    }

    /// Drain messages that are already queued. Used by tests and on startup.
    pub fn drain_messages(&mut self) {
        let mut pending = Vec::new();
        if let Some(rx) = self.message_rx.as_mut() {
            while let Ok(message) = rx.try_recv() {
                pending.push(message);
            }
        }
        for message in pending {
            self.handle_message(message);
        }
    }
}

/// Settings toggle that posts into the app channel instead of touching state.
fn settings_toggle(tx: mpsc::UnboundedSender<AppMessage>) -> SettingsToggle {
    Box::new(move || {
        if tx.send(AppMessage::ToggleSettingsPanel).is_err() {
            tracing::warn!("Message channel closed, settings toggle dropped");
        }
    })
}
