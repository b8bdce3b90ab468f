//! Breathing-cycle controller.
//!
//! ```text
//!   Idle ──start──▶ Running ──tick──▶ Running
//!    ▲                 │
//!    └──cancel / ceiling reached / drop
//! ```
//!
//! The controller owns the ticker handle for the current session. Leaving
//! `Running` by any path drops the handle, which stops the ticker.

use crate::config::{BreathingConfig, TICKS_PER_BREATH};

use super::ticker::{BreathTick, TickScheduler};

/// Inhale/exhale phase derived from the tick count parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Inhale,
    Exhale,
}

impl Phase {
    pub fn from_count(breath_count: u32) -> Self {
        if breath_count % 2 == 0 {
            Phase::Inhale
        } else {
            Phase::Exhale
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Phase::Inhale => "Inhale",
            Phase::Exhale => "Exhale",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreathingState {
    Idle,
    Running,
}

/// Plain session state. `breath_count` is zero whenever `active` is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct BreathingSession {
    active: bool,
    breath_count: u32,
}

/// What a tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Tick counted; the session continues.
    Advanced { breath_count: u32 },
    /// Tick reached the ceiling; the session ended and the ticker was released.
    Completed,
    /// Tick belonged to a finished session or arrived while idle.
    Ignored,
}

/// Drives the guided breathing exercise.
pub struct BreathingController<S: TickScheduler> {
    config: BreathingConfig,
    session: BreathingSession,
    scheduler: S,
    ticker: Option<S::Handle>,
    generation: u64,
}

impl<S: TickScheduler> BreathingController<S> {
    /// `config` must already have passed [`BreathingConfig::validate`].
    pub fn new(config: BreathingConfig, scheduler: S) -> Self {
        debug_assert!(
            config.validate().is_ok(),
            "breathing config must be validated before use: {:?}",
            config
        );
        Self {
            config,
            session: BreathingSession::default(),
            scheduler,
            ticker: None,
            generation: 0,
        }
    }

    /// Enter `Running` and schedule the ticker.
    ///
    /// Returns `false` without scheduling anything if already running.
    pub fn start(&mut self) -> bool {
        if self.session.active {
            tracing::debug!("Breathing exercise already running, start ignored");
            return false;
        }

        self.generation += 1;
        self.ticker = Some(
            self.scheduler
                .schedule(self.config.tick_interval(), self.generation),
        );
        self.session = BreathingSession {
            active: true,
            breath_count: 0,
        };
        tracing::info!(
            generation = self.generation,
            breaths = self.total_breaths(),
            "Breathing exercise started"
        );
        true
    }

    /// Leave `Running` immediately. Returns `false` if already idle.
    pub fn cancel(&mut self) -> bool {
        if !self.session.active {
            return false;
        }
        tracing::info!(
            breath_count = self.session.breath_count,
            "Breathing exercise ended by user"
        );
        self.finish();
        true
    }

    /// Apply one tick from the ticker of session `generation`.
    pub fn on_tick(&mut self, tick: BreathTick) -> TickOutcome {
        if !self.session.active || tick.generation != self.generation {
            tracing::debug!(
                tick_generation = tick.generation,
                current_generation = self.generation,
                active = self.session.active,
                "Ignoring stale breath tick"
            );
            return TickOutcome::Ignored;
        }

        self.session.breath_count += 1;
        if self.session.breath_count >= self.config.tick_ceiling {
            tracing::info!(
                breaths = self.total_breaths(),
                "Breathing exercise completed"
            );
            self.finish();
            return TickOutcome::Completed;
        }

        tracing::debug!(
            breath_count = self.session.breath_count,
            phase = self.phase().label(),
            "Breath tick"
        );
        TickOutcome::Advanced {
            breath_count: self.session.breath_count,
        }
    }

    /// Generation of the current (or most recent) session.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> BreathingState {
        if self.session.active {
            BreathingState::Running
        } else {
            BreathingState::Idle
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.active
    }

    pub fn breath_count(&self) -> u32 {
        self.session.breath_count
    }

    pub fn phase(&self) -> Phase {
        Phase::from_count(self.session.breath_count)
    }

    /// 1-based breath number shown to the user.
    pub fn breath_number(&self) -> u32 {
        self.session.breath_count / TICKS_PER_BREATH + 1
    }

    pub fn total_breaths(&self) -> u32 {
        self.config.total_breaths()
    }

    /// Fraction of the exercise completed, in `[0.0, 1.0)` while running.
    pub fn progress(&self) -> f64 {
        if self.config.tick_ceiling == 0 {
            return 0.0;
        }
        f64::from(self.session.breath_count) / f64::from(self.config.tick_ceiling)
    }

    pub fn config(&self) -> &BreathingConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn finish(&mut self) {
        self.ticker = None;
        self.session = BreathingSession::default();
    }
}

impl<S: TickScheduler> std::fmt::Debug for BreathingController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BreathingController")
            .field("config", &self.config)
            .field("session", &self.session)
            .field("generation", &self.generation)
            .field("ticker_scheduled", &self.ticker.is_some())
            .finish()
    }
}
