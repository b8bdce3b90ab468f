//! File logging.
//!
//! The terminal belongs to the TUI, so `tracing` output goes to
//! `<data dir>/wellspring/wellspring.log`. Filter directives come from
//! `WELLSPRING_LOG` (same syntax as `RUST_LOG`).

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{classify_io_error, SystemError, WellspringResult};

/// Environment variable holding the log filter.
pub const ENV_LOG_FILTER: &str = "WELLSPRING_LOG";

pub const DEFAULT_LOG_FILTER: &str = "wellspring=info";

pub const LOG_FILE_NAME: &str = "wellspring.log";

/// `<data_dir>/wellspring/wellspring.log`
pub fn log_path(data_dir: &Path) -> PathBuf {
    data_dir.join("wellspring").join(LOG_FILE_NAME)
}

/// Build the filter from a `WELLSPRING_LOG` value, falling back to the
/// default when unset or unparsable.
pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber writing to the log file.
///
/// Returns the log file path. Callers treat failure as non-fatal.
pub fn init_logging() -> WellspringResult<PathBuf> {
    let data_dir = dirs::data_dir().ok_or(SystemError::NoDataDirectory)?;
    let path = log_path(&data_dir);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| SystemError::DirectoryCreationFailed {
            path: parent.to_path_buf(),
            message: e.to_string(),
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| classify_io_error(&e, "open log file", Some(path.clone())))?;

    let filter = build_filter(std::env::var(ENV_LOG_FILTER).ok().as_deref());

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init();

    if installed.is_err() {
        // Another subscriber is already global (tests, embedding); keep it.
        tracing::debug!("Global subscriber already set");
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log = %path.display(),
        "Wellspring starting"
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_layout() {
        let path = log_path(Path::new("/data"));
        assert_eq!(path, PathBuf::from("/data/wellspring/wellspring.log"));
    }

    #[test]
    fn test_filter_default_when_unset() {
        assert_eq!(build_filter(None).to_string(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_filter_uses_directives() {
        assert_eq!(
            build_filter(Some("wellspring=debug")).to_string(),
            "wellspring=debug"
        );
    }

    #[test]
    fn test_filter_falls_back_on_garbage() {
        assert_eq!(
            build_filter(Some("wellspring=loud")).to_string(),
            DEFAULT_LOG_FILTER
        );
    }
}
