//! Resource key derivation.
//!
//! Keys are built from the translated text, namespaced with a prefix derived
//! from the source file stem. The generator memoizes per (file, text) so the
//! same Chinese string always maps to the same key within a file, and keeps a
//! global set of used names so every key in a run is unique, suffixing
//! collisions with 2, 3, ...

use std::{
    collections::{HashMap, HashSet},
    path::Path,
};

use super::translate::translate;

/// Derive the key prefix from a file stem.
///
/// `_` is inserted before each ASCII uppercase letter, the result is
/// lowercased, a single leading `_` is stripped, and dots become `_`.
///
/// # Examples
///
/// ```
/// use hanres::core::key_prefix;
///
/// assert_eq!(key_prefix("Index"), "index");
/// assert_eq!(key_prefix("ProductList"), "product_list");
/// assert_eq!(key_prefix("main.page"), "main_page");
/// ```
pub fn key_prefix(stem: &str) -> String {
    let mut out = String::new();
    for c in stem.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
        }
        out.extend(c.to_lowercase());
    }
    let out = out.strip_prefix('_').unwrap_or(&out);
    out.replace('.', "_")
}

/// Key prefix for a source file path, from its stem.
pub fn prefix_for_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    key_prefix(&stem)
}

/// Allocates unique resource keys across a whole run.
#[derive(Debug, Default)]
pub struct KeyGenerator {
    used: HashSet<String>,
    memo: HashMap<(String, String), String>,
}

impl KeyGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The key for `text` found in a file with the given prefix.
    ///
    /// Repeated calls with the same prefix and text return the same key.
    pub fn key_for(&mut self, prefix: &str, text: &str) -> String {
        let memo_key = (prefix.to_string(), text.to_string());
        if let Some(key) = self.memo.get(&memo_key) {
            return key.clone();
        }

        let translation = translate(text);
        // name_-prefixed translations stand alone; everything else is
        // namespaced by file unless the translation already carries the prefix
        let base = if translation.starts_with(prefix) || translation.starts_with("name_") {
            translation
        } else {
            format!("{}_{}", prefix, translation)
        };

        let mut key = base.clone();
        let mut counter = 2;
        while self.used.contains(&key) {
            key = format!("{}{}", base, counter);
            counter += 1;
        }

        self.used.insert(key.clone());
        self.memo.insert(memo_key, key.clone());
        key
    }
}
