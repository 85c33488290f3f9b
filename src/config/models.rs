use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Root configuration for the wallet shell.
///
/// Resolved once at startup from the optional TOML file and the `--config`
/// overrides, then treated as read-only for the rest of the process.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
pub struct Config {
    /// Wallet UI related settings.
    #[serde(default)]
    pub wallet: WalletConfig,
}

/// Settings of the `[wallet]` section.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
pub struct WalletConfig {
    /// Log to standard error in addition to the log file.
    #[serde(default)]
    pub log_to_stderr: bool,

    /// Power-of-ten exponent relating the display unit to raw
    /// (1x10^30 raw == 1 Mnano).
    #[serde(default)]
    pub scale: u64,
}

/// Declared type of a documented key, rendered as `type:<name>` in the template.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Uint64,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::Uint64 => "uint64",
        }
    }
}

/// A single key with its default value and human-readable description.
#[derive(Debug, Clone)]
pub struct DocumentedKey {
    pub key: &'static str,
    pub value: toml::Value,
    pub kind: ValueKind,
    pub doc: &'static str,
}

/// A section header plus the keys documented under it.
#[derive(Debug, Clone)]
pub struct DocumentedSection {
    pub name: &'static str,
    pub keys: Vec<DocumentedKey>,
}

impl Config {
    /// Every known section and key, carrying the values held by `self`.
    ///
    /// Used by the template export; adding a field means adding it here too.
    pub fn documented_sections(&self) -> Vec<DocumentedSection> {
        vec![DocumentedSection {
            name: "wallet",
            keys: vec![
                DocumentedKey {
                    key: "log_to_stderr",
                    value: toml::Value::Boolean(self.wallet.log_to_stderr),
                    kind: ValueKind::Bool,
                    doc: "Log to standard error in addition to file.",
                },
                DocumentedKey {
                    key: "scale",
                    // TOML integers are signed; clamp rather than wrap.
                    value: toml::Value::Integer(
                        i64::try_from(self.wallet.scale).unwrap_or(i64::MAX),
                    ),
                    kind: ValueKind::Uint64,
                    doc: "Scale in raw, as a power of ten: 1x10^30 raw == 1 Mnano.",
                },
            ],
        }]
    }
}
