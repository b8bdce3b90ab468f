//! Guided breathing exercise.
//!
//! - [`BreathingController`] - the Idle/Running state machine
//! - [`TickScheduler`] - where recurring ticks come from
//! - [`TokioTickScheduler`] / [`ManualTickScheduler`] - runtime and test tickers

mod controller;
pub mod ticker;

pub use controller::{BreathingController, BreathingState, Phase, TickOutcome};
pub use ticker::{
    BreathTick, ManualTickHandle, ManualTickScheduler, TickScheduler, TickerGuard,
    TokioTickScheduler,
};
