//! Wellspring - a terminal wellness dashboard with a guided breathing exercise
//!
//! This library exposes modules for use in integration tests and benches.

pub mod app;
pub mod breathing;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod prelude;
pub mod state;
pub mod terminal;
pub mod ui;
pub mod widgets;
