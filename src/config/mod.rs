//! Configuration module for nano-imgui.
//!
//! Values are resolved in layers: compiled-in defaults, then the optional TOML
//! file, then `--config` overrides. The result is read once at startup.
//!
//! Example:
//! use nano_imgui::config::resolve;
//!
//! let cfg = resolve(Some(Path::new("config-nano-imgui.toml")), &["wallet.scale=30"])?;

pub mod error;
pub mod loader;
pub mod models;
pub mod template;

/// Config file looked up when `--config_path` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "./config-nano-imgui.toml";

pub use error::{ConfigError, ConfigSource};
pub use models::{Config, DocumentedKey, DocumentedSection, ValueKind, WalletConfig};

pub use loader::{
    config_file_exists, generate_schema, parse_document, resolve, write_schema_to_writer,
};
pub use template::export_documented;
