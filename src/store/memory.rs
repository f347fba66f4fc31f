//! In-memory preference store.

use super::{EditOp, PreferenceEdit, PreferenceStore, PreferenceValue};
use anyhow::Result;
use indexmap::{IndexMap, IndexSet};

/// Preference store backed by an ordered map.
///
/// Used directly in tests and as the working copy of [`super::TomlPreferenceStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: IndexMap<String, PreferenceValue>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `values`.
    pub fn from_values(values: IndexMap<String, PreferenceValue>) -> Self {
        Self { values }
    }

    /// Returns all stored values.
    pub fn values(&self) -> &IndexMap<String, PreferenceValue> {
        &self.values
    }

    /// Applies the operations of `edit` in order.
    pub(crate) fn apply(&mut self, edit: PreferenceEdit) {
        for op in edit.into_ops() {
            match op {
                EditOp::Put(key, value) => {
                    self.values.insert(key, value);
                }
                EditOp::Remove(key) => {
                    self.values.shift_remove(&key);
                }
            }
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get_string(&self, key: &str, default: &str) -> String {
        match self.values.get(key) {
            Some(PreferenceValue::String(value)) => value.clone(),
            _ => default.to_string(),
        }
    }

    fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.values.get(key) {
            Some(PreferenceValue::Bool(value)) => *value,
            _ => default,
        }
    }

    fn get_string_set(&self, key: &str, default: &IndexSet<String>) -> IndexSet<String> {
        match self.values.get(key) {
            Some(PreferenceValue::StringSet(value)) => value.clone(),
            _ => default.clone(),
        }
    }

    fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn commit(&mut self, edit: PreferenceEdit) -> Result<()> {
        self.apply(edit);
        Ok(())
    }
}
