//! Panic hook that restores the terminal before the panic is reported.

use super::setup::emergency_restore;
use std::panic;

/// Install before creating the `TerminalManager`. Chains to the previous
/// hook (color-eyre's, when installed) after restoring.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!(%panic_info, "Panic");
        original_hook(panic_info);
    }));
}
