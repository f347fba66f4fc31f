//! The persisted layout selection.
//!
//! Storage keeps the selection as a flag plus two alternative keys. Inside the
//! crate it is always handled as a [`Selection`], so an inconsistent pair such
//! as "custom flag set, only an embedded id stored" resolves to exactly one
//! variant.

use crate::constants::{PREF_SELECTED_CUSTOM_URI, PREF_SELECTED_LAYOUT, PREF_USE_CUSTOM_LAYOUT};
use super::LayoutReference;
use crate::store::{PreferenceEdit, PreferenceStore};

/// Which layout the user last picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// Nothing has been selected yet
    #[default]
    None,
    /// A bundled layout, by id
    Embedded(String),
    /// A custom layout, by uri
    Custom(String),
}

impl Selection {
    /// Reads the selection from the preference store.
    ///
    /// The custom flag decides which key is consulted; an empty value for that
    /// key means nothing is selected.
    pub fn load<S: PreferenceStore + ?Sized>(store: &S) -> Self {
        if store.get_bool(PREF_USE_CUSTOM_LAYOUT, false) {
            let uri = store.get_string(PREF_SELECTED_CUSTOM_URI, "");
            if uri.is_empty() {
                Self::None
            } else {
                Self::Custom(uri)
            }
        } else {
            let id = store.get_string(PREF_SELECTED_LAYOUT, "");
            if id.is_empty() {
                Self::None
            } else {
                Self::Embedded(id)
            }
        }
    }

    /// Adds the writes that select `reference` to `edit`.
    ///
    /// Selecting an embedded layout clears the custom flag but keeps the last
    /// custom uri around, and vice versa.
    pub fn persist(reference: &LayoutReference, edit: PreferenceEdit) -> PreferenceEdit {
        match reference {
            LayoutReference::Embedded(id) => edit
                .put_string(PREF_SELECTED_LAYOUT, id.clone())
                .put_bool(PREF_USE_CUSTOM_LAYOUT, false),
            LayoutReference::External(uri) => edit
                .put_bool(PREF_USE_CUSTOM_LAYOUT, true)
                .put_string(PREF_SELECTED_CUSTOM_URI, uri.clone()),
        }
    }

    /// Adds the removals that clear this selection from storage to `edit`.
    ///
    /// Used when the selection turns out to be stale.
    pub fn clear_from(&self, edit: PreferenceEdit) -> PreferenceEdit {
        match self {
            Self::None => edit,
            Self::Embedded(_) => edit.remove(PREF_SELECTED_LAYOUT),
            Self::Custom(_) => edit
                .remove(PREF_SELECTED_CUSTOM_URI)
                .remove(PREF_USE_CUSTOM_LAYOUT),
        }
    }
}
