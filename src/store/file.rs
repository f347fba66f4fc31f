//! TOML-file preference store.

use super::{MemoryStore, PreferenceEdit, PreferenceStore, PreferenceValue};
use anyhow::{Context, Result};
use indexmap::{IndexMap, IndexSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Preference store persisted as a flat TOML table.
///
/// ```toml
/// selected_keyboard_layout = "en"
/// use_custom_selected_keyboard_layout = false
/// selected_custom_keyboard_layout_history = ["file:///home/me/custom.yaml"]
/// ```
///
/// Every commit rewrites the file using a temp file + rename, so the file is
/// never left half-written. The in-memory copy is only updated once the write
/// succeeded.
#[derive(Debug, Clone)]
pub struct TomlPreferenceStore {
    path: PathBuf,
    values: MemoryStore,
}

impl TomlPreferenceStore {
    /// Opens the store at `path`.
    ///
    /// A missing file is an empty store; it is created on the first commit.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            return Ok(Self {
                path,
                values: MemoryStore::new(),
            });
        }

        let content = fs::read_to_string(&path).with_context(|| {
            format!("Failed to read preferences file: {}", path.display())
        })?;

        let values: IndexMap<String, PreferenceValue> = toml::from_str(&content)
            .with_context(|| format!("Failed to parse preferences file: {}", path.display()))?;

        Ok(Self {
            path,
            values: MemoryStore::from_values(values),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, values: &MemoryStore) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create preferences directory: {}", parent.display())
            })?;
        }

        let content =
            toml::to_string_pretty(values.values()).context("Failed to serialize preferences")?;

        let temp_path = self.path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp preferences file: {}", temp_path.display())
        })?;

        // Atomic rename
        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename temp preferences file to: {}",
                self.path.display()
            )
        })?;

        Ok(())
    }
}

impl PreferenceStore for TomlPreferenceStore {
    fn get_string(&self, key: &str, default: &str) -> String {
        self.values.get_string(key, default)
    }

    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.values.get_bool(key, default)
    }

    fn get_string_set(&self, key: &str, default: &IndexSet<String>) -> IndexSet<String> {
        self.values.get_string_set(key, default)
    }

    fn contains(&self, key: &str) -> bool {
        self.values.contains(key)
    }

    fn commit(&mut self, edit: PreferenceEdit) -> Result<()> {
        if edit.is_empty() {
            return Ok(());
        }

        let mut updated = self.values.clone();
        updated.apply(edit);
        self.write(&updated)?;
        self.values = updated;
        Ok(())
    }
}
