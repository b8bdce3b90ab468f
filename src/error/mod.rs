//! Error handling for Wellspring.
//!
//! - **Error Categories**: how an error should be surfaced
//! - **Domain-specific Errors**: Config, UI and System errors
//! - **Unified Error Type**: `WellspringError` consolidates them
//! - **Result Type Alias**: `WellspringResult<T>`
//!
//! The breathing exercise itself has no error path: timer release is
//! guaranteed by ownership, not by recovery code.
//!
//! | Category | Description | Recoverable |
//! |----------|-------------|-------------|
//! | Terminal | Setup, restore, drawing | No |
//! | Configuration | Bad config file or env value | Yes |
//! | System | Filesystem, permissions | Yes |
//! | Internal | Closed channels, invalid state | No |

mod category;
mod config;
mod result;
mod system;
mod ui;
mod wellspring_error;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use result::WellspringResult;
pub use system::{classify_io_error, SystemError};
pub use ui::UiError;
pub use wellspring_error::WellspringError;
