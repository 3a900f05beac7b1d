// src/log.rs
//
// Logging front door. Call sites use the short macros below; they expand to
// `tracing` events so the library never decides where output goes.
// Binaries pick a sink: the GUI appends to `.store/debug.log`, the CLI
// writes to stderr.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}

/// `RUST_LOG` wins; otherwise `default_directive`.
fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Append log lines to `path`, creating parent directories as needed.
/// Safe to call more than once; only the first subscriber is installed.
pub fn init_file_logging(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let _ = fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .try_init();
    Ok(())
}

/// Compact stderr logging for the CLI. `verbose` lowers the default to debug.
pub fn init_stderr(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let _ = fmt()
        .with_env_filter(env_filter(default_directive))
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .try_init();
}
