use anyhow::{Context, Result};
use schemars::{Schema, schema_for};
use std::fs;
use std::io::Write;
use std::path::Path;
use toml::{Table, Value};
use tracing::{debug, trace};

use super::error::{ConfigError, ConfigSource};
use super::models::{Config, WalletConfig};

/// Resolve the configuration from an optional TOML file and `key = value` overrides.
///
/// Priority (highest to lowest):
/// 1. `overrides`, where a later entry beats an earlier one for the same key
/// 2. the file at `file_path`, if given and present
/// 3. compiled-in defaults
///
/// The overrides read as one document, one entry per line, so a `[section]`
/// entry scopes the entries after it just like dotted keys (`wallet.scale = 5`)
/// do. Any parse error aborts the whole resolution.
pub fn resolve<S: AsRef<str>>(
    file_path: Option<&Path>,
    overrides: &[S],
) -> Result<Config, ConfigError> {
    let override_doc = parse_overrides(overrides)?;
    let mut merged = load_base(file_path)?;
    merge_preferring_override(&mut merged, override_doc);
    Ok(populate(&merged))
}

/// Parse a TOML document, tagging any failure with where the text came from.
pub fn parse_document(text: &str, source: ConfigSource) -> Result<Table, ConfigError> {
    text.parse::<Table>().map_err(|err| {
        // Positions only mean something for a file; override text is rebuilt per statement.
        let message = match &source {
            ConfigSource::File(_) => err.to_string().trim_end().to_owned(),
            ConfigSource::Override(_) => err.message().to_owned(),
        };
        ConfigError::Parse {
            source_name: source,
            message,
        }
    })
}

/// Returns true if something exists at `path`. Used for startup diagnostics only.
pub fn config_file_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}

/// JSON Schema of the `[wallet]` document, the machine-readable sibling of
/// the documented template.
pub fn generate_schema() -> Schema {
    schema_for!(Config)
}

/// Pretty-print the configuration schema into `writer` (`--print_schema`).
pub fn write_schema_to_writer<W: Write>(mut writer: W) -> Result<()> {
    let schema = generate_schema();
    let json = serde_json::to_string_pretty(&schema).context("Failed to serialize schema")?;
    writer
        .write_all(json.as_bytes())
        .context("Failed to write schema to writer")?;
    Ok(())
}

/// Build the override document from the entries joined line by line.
///
/// Lines are grouped into statements, each parsed under the most recent
/// `[section]` header and merged in order, so a repeated key takes the value
/// of its last occurrence instead of tripping the duplicate-key check.
fn parse_overrides<S: AsRef<str>>(overrides: &[S]) -> Result<Table, ConfigError> {
    let mut merged = Table::new();
    let mut header: Option<String> = None;
    let mut pending = String::new();
    let mut pending_from = 0;

    for (idx, entry) in overrides.iter().enumerate() {
        for line in entry.as_ref().lines() {
            let trimmed = line.trim();
            if pending.is_empty() {
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    continue;
                }
                if trimmed.starts_with('[') {
                    parse_document(trimmed, ConfigSource::Override(idx))?;
                    trace!(target: "nano_imgui::config", index = idx, header = trimmed, "Override section");
                    header = Some(trimmed.to_owned());
                    continue;
                }
                pending_from = idx;
            }

            pending.push_str(line);
            pending.push('\n');
            // A value may span lines; keep reading until the statement parses.
            if let Ok(doc) = scoped(header.as_deref(), &pending).parse::<Table>() {
                trace!(target: "nano_imgui::config", index = pending_from, "Parsed override");
                merge_preferring_override(&mut merged, doc);
                pending.clear();
            }
        }
    }

    if !pending.is_empty() {
        let doc = parse_document(
            &scoped(header.as_deref(), &pending),
            ConfigSource::Override(pending_from),
        )?;
        merge_preferring_override(&mut merged, doc);
    }
    Ok(merged)
}

fn scoped(header: Option<&str>, body: &str) -> String {
    match header {
        Some(header) => format!("{header}\n{body}"),
        None => body.to_owned(),
    }
}

fn load_base(file_path: Option<&Path>) -> Result<Table, ConfigError> {
    let Some(path) = file_path.filter(|p| !p.as_os_str().is_empty()) else {
        trace!(target: "nano_imgui::config", "No config path given");
        return Ok(Table::new());
    };
    if !config_file_exists(path) {
        debug!(target: "nano_imgui::config", path = %path.display(), "Config file absent");
        return Ok(Table::new());
    }

    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = parse_document(&text, ConfigSource::File(path.to_path_buf()))?;
    debug!(target: "nano_imgui::config", path = %path.display(), "Loaded config file");
    Ok(doc)
}

/// Fold `overrides` into `base`. Tables merge key by key; anything else in
/// `overrides` replaces what `base` holds.
fn merge_preferring_override(base: &mut Table, overrides: Table) {
    for (key, value) in overrides {
        match value {
            Value::Table(incoming) => {
                if let Some(Value::Table(existing)) = base.get_mut(&key) {
                    merge_preferring_override(existing, incoming);
                } else {
                    base.insert(key, Value::Table(incoming));
                }
            }
            other => {
                base.insert(key, other);
            }
        }
    }
}

fn populate(doc: &Table) -> Config {
    let mut config = Config::default();
    let Some(wallet) = section(doc, "wallet") else {
        return config;
    };

    let defaults = WalletConfig::default();
    config.wallet = WalletConfig {
        log_to_stderr: read_key(wallet, "wallet", "log_to_stderr", Value::as_bool)
            .unwrap_or(defaults.log_to_stderr),
        scale: read_key(wallet, "wallet", "scale", |v| {
            v.as_integer().and_then(|i| u64::try_from(i).ok())
        })
        .unwrap_or(defaults.scale),
    };
    config
}

fn section<'a>(doc: &'a Table, name: &str) -> Option<&'a Table> {
    let value = doc.get(name)?;
    let table = value.as_table();
    if table.is_none() {
        debug!(target: "nano_imgui::config", section = name, "Ignoring non-table section");
    }
    table
}

/// Read `key` with `coerce`; a value of the wrong type counts as absent.
fn read_key<T>(
    table: &Table,
    section: &str,
    key: &str,
    coerce: impl Fn(&Value) -> Option<T>,
) -> Option<T> {
    let value = table.get(key)?;
    let out = coerce(value);
    if out.is_none() {
        debug!(
            target: "nano_imgui::config",
            section,
            key,
            found = value.type_str(),
            "Ignoring value of unexpected type"
        );
    }
    out
}
