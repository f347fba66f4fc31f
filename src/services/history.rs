//! History of custom layouts picked from external storage.

use super::diagnostics::Diagnostic;
use super::validator::LayoutValidator;
use crate::constants::PREF_CUSTOM_HISTORY;
use crate::models::{LayoutDescriptor, LayoutReference};
use crate::sources::LayoutSources;
use crate::store::{PreferenceEdit, PreferenceStore};
use indexmap::{IndexMap, IndexSet};
use tracing::debug;

/// Valid custom layouts, keyed by display name, in history order.
///
/// A display name shared by two uris keeps its first position and maps to
/// the later uri.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomLayoutHistory {
    entries: IndexMap<String, String>,
}

impl CustomLayoutHistory {
    /// Validates each uri of `persisted`, in order, keeping at most `limit`
    /// valid entries.
    ///
    /// Returns the history together with the uris it kept. Invalid uris and
    /// the oldest valid ones beyond `limit` are reported in `diagnostics` and
    /// left out of both.
    pub fn load(
        persisted: &IndexSet<String>,
        limit: usize,
        sources: &LayoutSources,
        validator: &mut LayoutValidator,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> (Self, IndexSet<String>) {
        let mut valid = Vec::new();

        // The persisted history is a set, so each uri is seen once
        for uri in persisted {
            match validator.validate(sources, &LayoutReference::external(uri.as_str())) {
                Ok(descriptor) => {
                    let display_name = custom_display_name(&descriptor, sources, uri);
                    debug!("Custom layout {} available as \"{}\"", uri, display_name);
                    valid.push((display_name, uri.clone()));
                }
                Err(invalid) => diagnostics.push(Diagnostic::CustomPruned {
                    uri: uri.clone(),
                    reason: invalid.reason,
                }),
            }
        }

        let excess = valid.len().saturating_sub(limit);
        let kept = valid.split_off(excess);
        diagnostics.extend(
            valid
                .into_iter()
                .map(|(_, uri)| Diagnostic::HistoryEvicted { uri }),
        );

        let retained = kept.iter().map(|(_, uri)| uri.clone()).collect();
        (
            Self {
                entries: kept.into_iter().collect(),
            },
            retained,
        )
    }

    /// Reads the persisted history, reloads from it, and writes back the
    /// uris that were kept.
    ///
    /// Dropped uris are gone for good: a layout that was only temporarily
    /// unreadable has to be added again.
    pub fn reload<S: PreferenceStore + ?Sized>(
        &mut self,
        store: &mut S,
        limit: usize,
        sources: &LayoutSources,
        validator: &mut LayoutValidator,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let persisted = store.get_string_set(PREF_CUSTOM_HISTORY, &IndexSet::new());
        let (history, retained) = Self::load(&persisted, limit, sources, validator, diagnostics);
        *self = history;

        if retained != persisted {
            let edit = PreferenceEdit::new().put_string_set(PREF_CUSTOM_HISTORY, retained);
            if let Err(e) = store.commit(edit) {
                diagnostics.push(Diagnostic::StoreWriteFailed {
                    message: format!("{e:#}"),
                });
            }
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the history has no valid entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display names in history order.
    pub fn display_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Uris in history order.
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }

    /// Position of `uri` in history order.
    pub fn position_of(&self, uri: &str) -> Option<usize> {
        self.references().position(|candidate| candidate == uri)
    }

    /// Uri at `position` in history order.
    pub fn uri_at(&self, position: usize) -> Option<&str> {
        self.entries
            .get_index(position)
            .map(|(_, uri)| uri.as_str())
    }

    /// Display name at `position` in history order.
    pub fn name_at(&self, position: usize) -> Option<&str> {
        self.entries
            .get_index(position)
            .map(|(name, _)| name.as_str())
    }
}

/// Display name of a valid custom layout: its declared name, or the file
/// name the resolver reports for `uri`.
pub(crate) fn custom_display_name(
    descriptor: &LayoutDescriptor,
    sources: &LayoutSources,
    uri: &str,
) -> String {
    let fallback = if descriptor.name.is_some() {
        String::new()
    } else {
        sources.external.display_name(uri)
    };
    descriptor.display_name_or(&fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{MemoryBundle, MemoryResolver};
    use crate::constants::DEFAULT_HISTORY_LIMIT;
    use crate::store::MemoryStore;

    const FOO: &str = "info:\n  name: Foo\nlayers:\n  default: {a: 1}\n  first: {b: 1}\n";
    const UNNAMED: &str = "layers:\n  default: {a: 1}\n";

    fn set(uris: &[&str]) -> IndexSet<String> {
        uris.iter().map(ToString::to_string).collect()
    }

    fn sources() -> LayoutSources {
        LayoutSources::new(
            MemoryBundle::new(),
            MemoryResolver::new()
                .with_file("mem://foo", "foo.yaml", FOO)
                .with_file("mem://unnamed", "unnamed.yaml", UNNAMED)
                .with_file("mem://nameless", "", UNNAMED)
                .with_file("mem://broken", "broken.yaml", "layers: [")
                .with_unreadable("mem://locked", "locked.yaml"),
        )
    }

    fn load(persisted: &[&str]) -> (CustomLayoutHistory, IndexSet<String>, Vec<Diagnostic>) {
        let mut diagnostics = Vec::new();
        let (history, retained) = CustomLayoutHistory::load(
            &set(persisted),
            DEFAULT_HISTORY_LIMIT,
            &sources(),
            &mut LayoutValidator::new(),
            &mut diagnostics,
        );
        (history, retained, diagnostics)
    }

    #[test]
    fn test_names_and_order() {
        let (history, retained, diagnostics) = load(&["mem://unnamed", "mem://foo"]);
        assert!(diagnostics.is_empty());
        assert_eq!(
            history.display_names().collect::<Vec<_>>(),
            vec!["unnamed.yaml", "Foo (2 layers)"]
        );
        assert_eq!(
            history.references().collect::<Vec<_>>(),
            vec!["mem://unnamed", "mem://foo"]
        );
        assert_eq!(retained, set(&["mem://unnamed", "mem://foo"]));
        assert_eq!(history.position_of("mem://foo"), Some(1));
        assert_eq!(history.uri_at(0), Some("mem://unnamed"));
        assert_eq!(history.uri_at(2), None);
    }

    #[test]
    fn test_invalid_entries_are_pruned() {
        let (history, retained, diagnostics) =
            load(&["mem://broken", "mem://foo", "mem://locked", "mem://missing"]);
        assert_eq!(history.len(), 1);
        assert_eq!(retained, set(&["mem://foo"]));
        assert_eq!(diagnostics.len(), 3);
    }

    #[test]
    fn test_empty_file_name_fallback() {
        let (history, _, _) = load(&["mem://nameless"]);
        assert_eq!(history.display_names().collect::<Vec<_>>(), vec![""]);
    }

    #[test]
    fn test_shared_display_name_keeps_first_position() {
        let sources = LayoutSources::new(
            MemoryBundle::new(),
            MemoryResolver::new()
                .with_file("mem://one", "one.yaml", FOO)
                .with_file("mem://other", "other.yaml", UNNAMED)
                .with_file("mem://two", "two.yaml", FOO),
        );
        let mut diagnostics = Vec::new();
        let (history, retained) = CustomLayoutHistory::load(
            &set(&["mem://one", "mem://other", "mem://two"]),
            DEFAULT_HISTORY_LIMIT,
            &sources,
            &mut LayoutValidator::new(),
            &mut diagnostics,
        );

        assert_eq!(
            history.references().collect::<Vec<_>>(),
            vec!["mem://two", "mem://other"]
        );
        // The shadowed uri is still a valid history entry
        assert_eq!(retained.len(), 3);
    }

    #[test]
    fn test_reload_writes_back_pruned_set() {
        let mut store = MemoryStore::new();
        store
            .commit(
                PreferenceEdit::new()
                    .put_string_set(PREF_CUSTOM_HISTORY, set(&["mem://broken", "mem://foo"])),
            )
            .unwrap();

        let mut history = CustomLayoutHistory::default();
        let mut diagnostics = Vec::new();
        history.reload(
            &mut store,
            DEFAULT_HISTORY_LIMIT,
            &sources(),
            &mut LayoutValidator::new(),
            &mut diagnostics,
        );

        assert_eq!(
            store.get_string_set(PREF_CUSTOM_HISTORY, &IndexSet::new()),
            set(&["mem://foo"])
        );
        assert_eq!(history.display_names().collect::<Vec<_>>(), vec!["Foo (2 layers)"]);
    }

    #[test]
    fn test_reload_without_changes_does_not_write() {
        let mut store = MemoryStore::new();
        let mut history = CustomLayoutHistory::default();
        history.reload(
            &mut store,
            DEFAULT_HISTORY_LIMIT,
            &sources(),
            &mut LayoutValidator::new(),
            &mut Vec::new(),
        );
        assert!(!store.contains(PREF_CUSTOM_HISTORY));
        assert!(history.is_empty());
    }

    #[test]
    fn test_limit_keeps_newest_valid_entries() {
        let mut diagnostics = Vec::new();
        let (history, retained) = CustomLayoutHistory::load(
            &set(&["mem://foo", "mem://broken", "mem://unnamed", "mem://nameless"]),
            2,
            &sources(),
            &mut LayoutValidator::new(),
            &mut diagnostics,
        );

        // The invalid entry does not count towards the limit
        assert_eq!(retained, set(&["mem://unnamed", "mem://nameless"]));
        assert_eq!(history.name_at(0), Some("unnamed.yaml"));
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(
            diagnostics[1],
            Diagnostic::HistoryEvicted {
                uri: "mem://foo".to_string()
            }
        );
    }
}
