//! Environment File
//!
//! The configuration sink the wizard writes into: an insertion-ordered
//! key/value store persisted once, at the end of the run, as a `KEY=value`
//! env file with a comment header.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

/// Ordered key/value settings bound to an output path.
///
/// Keys are unique: a later `set` of an existing key overwrites the value
/// in place and keeps the key's original position, so the saved file stays
/// readable in the order the wizard asked its questions.
pub struct EnvFile {
    path: PathBuf,
    entries: Vec<(String, String)>,
}

impl EnvFile {
    /// Create an empty env file bound to `path`. Nothing is written until
    /// [`EnvFile::save`] is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Vec::new(),
        }
    }

    /// Set a key, overwriting in place if it already exists.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    /// Look up a key's current value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The path `save` will write to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render the file contents: each header line prefixed with `# `, one
    /// blank line, then `KEY=value` lines in insertion order.
    pub fn render(&self, header: &str) -> String {
        let mut out = String::new();
        for line in header.lines() {
            out.push_str("# ");
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
        for (key, value) in &self.entries {
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }
        out
    }

    /// Write all accumulated settings to disk, prefixed by `header`.
    /// Creates parent directories as needed.
    pub fn save(&self, header: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory {}", parent.display())
                })?;
            }
        }

        fs::write(&self.path, self.render(header))
            .with_context(|| format!("Failed to write env file {}", self.path.display()))?;

        info!(
            path = %self.path.display(),
            entries = self.entries.len(),
            "env file saved"
        );
        Ok(())
    }
}

/// Resolve a path that may start with `~` to an absolute path.
pub fn resolve_path(p: &str) -> PathBuf {
    if let Some(rest) = p.strip_prefix('~') {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/root"));
        let rest = rest.strip_prefix('/').unwrap_or(rest);
        home.join(rest)
    } else {
        PathBuf::from(p)
    }
}
