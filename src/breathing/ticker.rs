//! Recurring tick sources for the breathing exercise.
//!
//! A [`TickScheduler`] hands out a handle per scheduled ticker. Dropping the
//! handle stops the ticker, so whoever owns the handle owns the timer.
//!
//! - [`TokioTickScheduler`] spawns a tokio task that posts [`BreathTick`]
//!   messages into the app channel.
//! - [`ManualTickScheduler`] schedules nothing; tests drive ticks by hand and
//!   use its live-handle counter to prove no timer outlives its session.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// One tick of the breathing exercise, stamped with the session generation
/// that scheduled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreathTick {
    pub generation: u64,
}

/// Creates recurring tickers.
pub trait TickScheduler {
    /// Guard for a running ticker. Dropping it stops the ticker.
    type Handle;

    /// Start a ticker that fires every `every`, first firing one full
    /// interval after scheduling.
    fn schedule(&mut self, every: Duration, generation: u64) -> Self::Handle;
}

/// Ticker backed by a tokio task.
///
/// Messages go through `M: From<BreathTick>` so the scheduler does not need
/// to know the app's message type.
#[derive(Debug)]
pub struct TokioTickScheduler<M> {
    tx: mpsc::UnboundedSender<M>,
}

impl<M> TokioTickScheduler<M> {
    pub fn new(tx: mpsc::UnboundedSender<M>) -> Self {
        Self { tx }
    }
}

impl<M> TickScheduler for TokioTickScheduler<M>
where
    M: From<BreathTick> + Send + 'static,
{
    type Handle = TickerGuard;

    fn schedule(&mut self, every: Duration, generation: u64) -> TickerGuard {
        let tx = self.tx.clone();
        let start = Instant::now() + every;
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(start, every);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(BreathTick { generation }.into()).is_err() {
                    tracing::debug!("Message channel closed, stopping breath ticker");
                    break;
                }
            }
        });
        tracing::debug!(generation, ?every, "Breath ticker scheduled");
        TickerGuard { handle, generation }
    }
}

/// Owns the spawned ticker task and aborts it on drop.
#[derive(Debug)]
pub struct TickerGuard {
    handle: JoinHandle<()>,
    generation: u64,
}

impl Drop for TickerGuard {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!(generation = self.generation, "Breath ticker cancelled");
    }
}

/// Scheduler that never fires on its own.
#[derive(Debug, Clone, Default)]
pub struct ManualTickScheduler {
    live: Arc<AtomicUsize>,
    scheduled: Arc<AtomicUsize>,
}

impl ManualTickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles currently alive (tickers that would still be firing).
    pub fn live_tickers(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    /// Total tickers ever scheduled.
    pub fn scheduled_count(&self) -> usize {
        self.scheduled.load(Ordering::SeqCst)
    }
}

impl TickScheduler for ManualTickScheduler {
    type Handle = ManualTickHandle;

    fn schedule(&mut self, _every: Duration, generation: u64) -> ManualTickHandle {
        self.live.fetch_add(1, Ordering::SeqCst);
        self.scheduled.fetch_add(1, Ordering::SeqCst);
        ManualTickHandle {
            live: Arc::clone(&self.live),
            generation,
        }
    }
}

/// Handle from [`ManualTickScheduler`]; decrements the live count on drop.
#[derive(Debug)]
pub struct ManualTickHandle {
    live: Arc<AtomicUsize>,
    generation: u64,
}

impl ManualTickHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for ManualTickHandle {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}
