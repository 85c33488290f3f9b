use std::path::PathBuf;

use thiserror::Error;

/// Where a configuration document came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// The `--config` override at the given position.
    Override(usize),
    /// The TOML file at the given path.
    File(PathBuf),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Override(idx) => write!(f, "override #{}", idx + 1),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Errors that abort configuration resolution.
///
/// Missing files, missing keys and wrong-typed values are not errors; they
/// fall back to defaults.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TOML config error: {source_name}: {message}")]
    Parse {
        source_name: ConfigSource,
        message: String,
    },

    #[error("TOML config error: failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
