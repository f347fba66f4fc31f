//! Persisted key-value preferences.
//!
//! The registry reads its selection and custom layout history through the
//! [`PreferenceStore`] trait and writes them back as batched
//! [`PreferenceEdit`]s. Each commit is applied atomically: either every
//! operation in the batch takes effect or none does.

pub mod file;
pub mod memory;

pub use file::TomlPreferenceStore;
pub use memory::MemoryStore;

use anyhow::Result;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// A single stored preference value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreferenceValue {
    /// Boolean flag
    Bool(bool),
    /// Plain string
    String(String),
    /// Ordered set of strings
    StringSet(IndexSet<String>),
}

/// One write in a [`PreferenceEdit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    /// Store `value` under `key`
    Put(String, PreferenceValue),
    /// Delete `key`
    Remove(String),
}

/// Batch of writes committed together.
///
/// # Examples
///
/// ```
/// use gesture_layouts::store::{MemoryStore, PreferenceEdit, PreferenceStore};
///
/// let mut store = MemoryStore::new();
/// store.commit(
///     PreferenceEdit::new()
///         .put_string("selected", "en")
///         .put_bool("custom", false),
/// )?;
/// assert_eq!(store.get_string("selected", ""), "en");
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceEdit {
    ops: Vec<EditOp>,
}

impl PreferenceEdit {
    /// Creates an empty edit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a string.
    pub fn put_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.ops
            .push(EditOp::Put(key.into(), PreferenceValue::String(value.into())));
        self
    }

    /// Stores a boolean.
    pub fn put_bool(mut self, key: impl Into<String>, value: bool) -> Self {
        self.ops
            .push(EditOp::Put(key.into(), PreferenceValue::Bool(value)));
        self
    }

    /// Stores an ordered string set.
    pub fn put_string_set(mut self, key: impl Into<String>, value: IndexSet<String>) -> Self {
        self.ops
            .push(EditOp::Put(key.into(), PreferenceValue::StringSet(value)));
        self
    }

    /// Deletes a key.
    pub fn remove(mut self, key: impl Into<String>) -> Self {
        self.ops.push(EditOp::Remove(key.into()));
        self
    }

    /// Returns true if the edit contains no operations.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Operations in the order they were added.
    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    /// Consumes the edit, returning its operations.
    pub fn into_ops(self) -> Vec<EditOp> {
        self.ops
    }
}

/// Key-value preference storage.
///
/// Getters never fail: a missing key or a value of another type yields the
/// supplied default.
pub trait PreferenceStore {
    /// Reads a string preference.
    fn get_string(&self, key: &str, default: &str) -> String;

    /// Reads a boolean preference.
    fn get_bool(&self, key: &str, default: bool) -> bool;

    /// Reads an ordered string set preference.
    fn get_string_set(&self, key: &str, default: &IndexSet<String>) -> IndexSet<String>;

    /// Returns true if `key` holds any value.
    fn contains(&self, key: &str) -> bool;

    /// Applies every operation in `edit` atomically.
    fn commit(&mut self, edit: PreferenceEdit) -> Result<()>;
}
