//! String resource table generation.
//!
//! The output format mirrors a `string.json` resource file: a single
//! `"string"` array of `{name, value}` objects, sorted by name.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One `{name, value}` resource pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceEntry {
    pub name: String,
    pub value: String,
}

impl ResourceEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The generated resource table.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResourceTable {
    pub string: Vec<ResourceEntry>,
}

impl ResourceTable {
    /// Build a table from entries, sorted by name.
    pub fn new(mut entries: Vec<ResourceEntry>) -> Self {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Self { string: entries }
    }

    pub fn len(&self) -> usize {
        self.string.len()
    }

    pub fn is_empty(&self) -> bool {
        self.string.is_empty()
    }

    /// Pretty JSON with 2-space indentation and a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize resource table")?;
        Ok(format!("{}\n", content))
    }

    /// Write the table, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(path, self.to_json()?)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        Ok(())
    }
}
