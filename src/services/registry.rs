//! The registry of selectable layouts.
//!
//! [`LayoutRegistry`] merges the bundled catalog and the custom layout history
//! into one list addressed by position: bundled layouts first, in catalog
//! order, then custom layouts in history order. It also owns the current
//! selection and keeps the persisted copy of it consistent with that list.
//!
//! # Stale selections
//!
//! The persisted selection may point at a layout that is gone, e.g. a bundled
//! layout removed by an update or a custom file pruned from history. Such a
//! selection is removed from the store during resolution and the registry
//! reports no selection. Callers treat `index() == None` as "ask the user to
//! pick a layout".
//!
//! # Concurrency
//!
//! The registry is a plain single-threaded value. Mutating operations take
//! `&mut self`; reads observe the state left by the last completed mutation.

use super::catalog::EmbeddedCatalog;
use super::diagnostics::Diagnostic;
use super::history::{custom_display_name, CustomLayoutHistory};
use super::validator::LayoutValidator;
use crate::constants::{DEFAULT_HISTORY_LIMIT, PREF_CUSTOM_HISTORY};
use crate::models::{LayoutReference, Selection};
use crate::sources::LayoutSources;
use crate::store::{PreferenceEdit, PreferenceStore};
use indexmap::IndexSet;
use tracing::{debug, info};

/// Bundled and custom layouts with the current selection.
///
/// # Examples
///
/// ```
/// use gesture_layouts::services::LayoutRegistry;
/// use gesture_layouts::sources::{MemoryBundle, MemoryResolver, LayoutSources};
/// use gesture_layouts::store::MemoryStore;
///
/// let bundle = MemoryBundle::new().with_layout("en", "English", "layers:\n  default: {a: 1}\n");
/// let sources = LayoutSources::new(bundle, MemoryResolver::new());
///
/// let mut registry = LayoutRegistry::new(MemoryStore::new(), sources);
/// assert_eq!(registry.index(), None);
///
/// registry.select_layout(0);
/// assert_eq!(registry.index(), Some(0));
/// ```
pub struct LayoutRegistry<S> {
    store: S,
    sources: LayoutSources,
    validator: LayoutValidator,
    catalog: EmbeddedCatalog,
    history: CustomLayoutHistory,
    display_names: IndexSet<String>,
    index: Option<usize>,
    history_limit: usize,
    diagnostics: Vec<Diagnostic>,
}

impl<S: PreferenceStore> LayoutRegistry<S> {
    /// Builds the registry with the default custom history limit.
    pub fn new(store: S, sources: LayoutSources) -> Self {
        Self::with_history_limit(store, sources, DEFAULT_HISTORY_LIMIT)
    }

    /// Builds the registry, keeping at most `history_limit` custom layouts
    /// when new ones are added.
    ///
    /// The bundled catalog is built here once and not rebuilt for the
    /// lifetime of the registry.
    pub fn with_history_limit(store: S, sources: LayoutSources, history_limit: usize) -> Self {
        let mut validator = LayoutValidator::new();
        let mut diagnostics = Vec::new();
        let catalog = EmbeddedCatalog::build(&sources, &mut validator, &mut diagnostics);

        let mut registry = Self {
            store,
            sources,
            validator,
            catalog,
            history: CustomLayoutHistory::default(),
            display_names: IndexSet::new(),
            index: None,
            history_limit: history_limit.max(1),
            diagnostics,
        };

        registry.refresh_custom_layouts();
        registry.log_diagnostics();
        registry
    }

    /// Reloads the custom layout history from the store.
    ///
    /// Custom layouts that no longer validate are dropped from the store, and
    /// the selection is resolved again.
    pub fn reload_custom_layouts(&mut self) {
        self.diagnostics.clear();
        self.refresh_custom_layouts();
        self.log_diagnostics();
    }

    /// Selects the layout at `position` and persists the choice.
    ///
    /// The layout is not validated again: `position` is expected to come from
    /// the list returned by [`Self::display_names`]. Positions past the end of
    /// the list are ignored.
    pub fn select_layout(&mut self, position: usize) {
        self.diagnostics.clear();

        let Some(reference) = self.reference_at(position) else {
            self.diagnostics.push(Diagnostic::SelectionOutOfRange {
                position,
                total: self.total_count(),
            });
            self.log_diagnostics();
            return;
        };

        info!(
            "Selecting layout \"{}\" at position {}",
            self.layout_name_at(position).unwrap_or("<unnamed>"),
            position
        );
        self.commit(Selection::persist(&reference, PreferenceEdit::new()));
        self.index = Some(position);
        self.log_diagnostics();
    }

    /// Validates the layout at `uri`, adds it to the custom history as the
    /// most recent entry, and selects it.
    ///
    /// When the history grows past its limit the oldest entries are dropped.
    /// Returns false, changing nothing, if the layout is invalid or its display
    /// name is already taken by a bundled layout (it could never be selected).
    pub fn add_custom_layout(&mut self, uri: &str) -> bool {
        self.diagnostics.clear();

        let reference = LayoutReference::external(uri);
        let descriptor = match self.validator.validate(&self.sources, &reference) {
            Ok(descriptor) => descriptor,
            Err(invalid) => {
                self.diagnostics.push(Diagnostic::CustomRejected {
                    uri: uri.to_string(),
                    reason: invalid.reason,
                });
                self.log_diagnostics();
                return false;
            }
        };

        let name = custom_display_name(&descriptor, &self.sources, uri);
        if self.catalog.contains_name(&name) {
            self.diagnostics.push(Diagnostic::CustomShadowed {
                uri: uri.to_string(),
                name,
            });
            self.log_diagnostics();
            return false;
        }

        let mut history = self
            .store
            .get_string_set(PREF_CUSTOM_HISTORY, &IndexSet::new());
        history.shift_remove(uri);
        history.insert(uri.to_string());

        let edit = PreferenceEdit::new().put_string_set(PREF_CUSTOM_HISTORY, history);
        self.commit(Selection::persist(&reference, edit));
        self.refresh_custom_layouts();
        self.log_diagnostics();

        self.selected_reference() == Some(reference)
    }

    /// Removes `uri` from the custom history.
    ///
    /// If it was the selected layout, the selection is cleared. Returns false
    /// if `uri` was not in the history.
    pub fn remove_custom_layout(&mut self, uri: &str) -> bool {
        self.diagnostics.clear();

        let mut history = self
            .store
            .get_string_set(PREF_CUSTOM_HISTORY, &IndexSet::new());
        if !history.shift_remove(uri) {
            return false;
        }

        debug!("Removing custom layout {} from history", uri);
        self.commit(PreferenceEdit::new().put_string_set(PREF_CUSTOM_HISTORY, history));
        self.refresh_custom_layouts();
        self.log_diagnostics();
        true
    }

    /// Display names of all selectable layouts, bundled first.
    ///
    /// A custom layout whose display name equals a bundled one does not get
    /// its own entry.
    pub fn display_names(&self) -> &IndexSet<String> {
        &self.display_names
    }

    /// Position of the selected layout, or `None` if nothing valid is selected.
    pub const fn index(&self) -> Option<usize> {
        self.index
    }

    /// Reference of the selected layout.
    pub fn selected_reference(&self) -> Option<LayoutReference> {
        self.index.and_then(|position| self.reference_at(position))
    }

    /// Reference of the layout at `position`.
    pub fn reference_at(&self, position: usize) -> Option<LayoutReference> {
        if let Some(id) = self.catalog.id_at(position) {
            return Some(LayoutReference::embedded(id));
        }
        position
            .checked_sub(self.catalog.len())
            .and_then(|offset| self.history.uri_at(offset))
            .map(LayoutReference::external)
    }

    /// Display name of the layout at `position`.
    ///
    /// Unlike [`Self::display_names`], this covers every position, including a
    /// custom layout whose name is shadowed by a bundled one.
    pub fn layout_name_at(&self, position: usize) -> Option<&str> {
        if let Some(name) = self.catalog.name_at(position) {
            return Some(name);
        }
        position
            .checked_sub(self.catalog.len())
            .and_then(|offset| self.history.name_at(offset))
    }

    /// Returns true if the layout at `position` is a custom layout whose
    /// display name is taken by a bundled layout.
    pub fn is_shadowed(&self, position: usize) -> bool {
        position >= self.catalog.len()
            && self
                .layout_name_at(position)
                .is_some_and(|name| self.catalog.contains_name(name))
    }

    /// Number of valid bundled layouts.
    pub fn embedded_count(&self) -> usize {
        self.catalog.len()
    }

    /// Number of valid custom layouts.
    pub fn custom_count(&self) -> usize {
        self.history.len()
    }

    /// Number of selectable positions.
    pub fn total_count(&self) -> usize {
        self.catalog.len() + self.history.len()
    }

    /// The bundled layout catalog.
    pub const fn catalog(&self) -> &EmbeddedCatalog {
        &self.catalog
    }

    /// The custom layout history.
    pub const fn history(&self) -> &CustomLayoutHistory {
        &self.history
    }

    /// What the most recent operation dropped, repaired, or ignored.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The preference store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the registry, returning the preference store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn refresh_custom_layouts(&mut self) {
        self.history.reload(
            &mut self.store,
            self.history_limit,
            &self.sources,
            &mut self.validator,
            &mut self.diagnostics,
        );
        self.update_display_names();
        self.resolve_index();
    }

    fn update_display_names(&mut self) {
        self.display_names = self
            .catalog
            .display_names()
            .chain(self.history.display_names())
            .map(ToString::to_string)
            .collect();
    }

    /// Maps the persisted selection to a position, clearing it from the store
    /// if it no longer resolves.
    fn resolve_index(&mut self) {
        let selection = Selection::load(&self.store);

        let resolved = match &selection {
            Selection::None => None,
            Selection::Embedded(id) => self.catalog.position_of(id),
            Selection::Custom(uri) => self
                .history
                .position_of(uri)
                .map(|offset| self.catalog.len() + offset),
        };

        if resolved.is_none() && selection != Selection::None {
            self.commit(selection.clear_from(PreferenceEdit::new()));
            self.diagnostics
                .push(Diagnostic::StaleSelectionCleared { selection });
        }

        // A custom display name shadowed by a bundled one can leave a custom
        // position past the end of the merged list
        self.index = resolved.filter(|&position| position < self.display_names.len());
    }

    fn commit(&mut self, edit: PreferenceEdit) {
        if let Err(e) = self.store.commit(edit) {
            self.diagnostics.push(Diagnostic::StoreWriteFailed {
                message: format!("{e:#}"),
            });
        }
    }

    fn log_diagnostics(&self) {
        for diagnostic in &self.diagnostics {
            diagnostic.log();
        }
    }
}
