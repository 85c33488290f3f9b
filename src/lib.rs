#![forbid(unsafe_code)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! nano-imgui: the shell of a desktop wallet UI.
//!
//! The crate is organized into two modules:
//! - `config`: layered TOML configuration (defaults, file, `--config` overrides),
//!   documented template and JSON Schema export.
//! - `ui`: the navigation model of the wallet window (menus, unit scale).
//!
//! `nano_imgui::prelude` re-exports the resolver, the UI state and the logging macros.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;

/// Public module: configuration (models, resolver, template and schema export).
pub mod config;
/// Public module: navigation state of the wallet window.
pub mod ui;

/// Binary name and version, as reported by `--version` and the startup log line.
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log file written in the working directory.
pub const LOG_FILE_NAME: &str = "nano-imgui.log";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Initialize tracing (logging).
/// - Always appends to `log_dir/nano-imgui.log`.
/// - Also writes to stderr when `log_to_stderr` is set (`wallet.log_to_stderr`).
/// - Honors the `RUST_LOG` environment variable if set, falls back to `info`.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init_tracing(log_dir: &Path, log_to_stderr: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let path = log_dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let (file_writer, guard) = tracing_appender::non_blocking(file);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(file_writer)
        .with_target(true);
    let stderr_layer = log_to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
    });

    // Ignore the error if the global subscriber was already set.
    if tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .is_ok()
    {
        let _ = LOG_GUARD.set(guard);
    }
    Ok(())
}

/// Config resolution, UI state and the logging macros in one import:
/// `use nano_imgui::prelude::*;`
pub mod prelude {
    pub use anyhow::{Context, Result};
    pub use tracing::{debug, info, trace, warn};

    pub use crate::config::{Config, ConfigError, WalletConfig, export_documented, resolve};
    pub use crate::ui::{MenuItem, ScaleUnit, UiState};
}
