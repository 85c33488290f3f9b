//! Documented template export (`--generate_config`).
//!
//! The output is a complete TOML document with every value commented out, so it
//! can be saved as a config file and edited key by key. Section headers stay
//! live so the structure is visible.

use super::models::Config;

/// Comment marker of the document format.
pub const COMMENT: char = '#';

/// Render the compiled-in defaults as a documented, disabled template.
pub fn export_documented() -> String {
    Config::default().to_documented_toml()
}

impl Config {
    /// Render `self` as a documented TOML template.
    ///
    /// Each key is preceded by its description and a `type:<name>` line; the
    /// key line itself is commented out without a space (`#scale = 0`) so that
    /// stripping the first character re-enables it.
    pub fn to_documented_toml(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        for (idx, section) in self.documented_sections().into_iter().enumerate() {
            if idx > 0 {
                lines.push(String::new());
            }
            lines.push(format!("[{}]", section.name));
            for entry in section.keys {
                lines.extend(entry.doc.lines().map(|doc| format!("{COMMENT} {doc}")));
                lines.push(format!("{COMMENT} type:{}", entry.kind.as_str()));
                lines.push(format!("{}{} = {}", COMMENT, entry.key, entry.value));
            }
        }
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}
