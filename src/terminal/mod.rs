//! Terminal lifecycle with RAII cleanup.
//!
//! `TerminalManager` puts the terminal into TUI mode on creation and puts it
//! back on drop, whether the event loop returns normally or with an error.
//! Panics are covered separately by [`setup_panic_hook`].

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

use crate::error::{UiError, WellspringResult};

/// Backend type used by the binary.
pub type TuiTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Restores the terminal exactly once, on `cleanup()` or drop.
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    /// Subsequent calls are no-ops.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }

    pub fn is_cleaned_up(&self) -> bool {
        self.cleaned_up
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal and the guard that restores it.
pub struct TerminalManager {
    terminal: TuiTerminal,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enable raw mode, enter the alternate screen, enable bracketed paste and
    /// mouse capture, then clear.
    pub fn new() -> WellspringResult<Self> {
        enable_raw_mode().map_err(init_failed)?;

        // From here on the guard undoes partial setup if a later step fails.
        let guard = TerminalGuard::new();

        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout).map_err(init_failed)?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout)).map_err(init_failed)?;
        terminal.clear().map_err(init_failed)?;

        tracing::debug!("Terminal entered TUI mode");
        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut TuiTerminal {
        &mut self.terminal
    }

    /// Restore now instead of waiting for drop.
    pub fn restore(&mut self) -> WellspringResult<()> {
        self.guard.cleanup();
        self.terminal
            .show_cursor()
            .map_err(|e| UiError::TerminalRestoreFailed {
                message: e.to_string(),
            })?;
        tracing::debug!("Terminal restored");
        Ok(())
    }
}

fn init_failed(err: io::Error) -> UiError {
    UiError::TerminalInitFailed {
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_cleans_up_once() {
        let mut guard = TerminalGuard::new();
        assert!(!guard.is_cleaned_up());
        guard.cleanup();
        assert!(guard.is_cleaned_up());
        guard.cleanup();
        assert!(guard.is_cleaned_up());
    }

    #[test]
    fn test_init_failure_maps_to_terminal_error() {
        let err = init_failed(io::Error::new(io::ErrorKind::Other, "not a tty"));
        assert_eq!(err.error_code(), "E_UI_TERM_INIT");
        assert!(err.to_string().contains("not a tty"));
    }
}
