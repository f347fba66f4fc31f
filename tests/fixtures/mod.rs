//! Shared test fixtures for registry integration tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use gesture_layouts::constants::{
    PREF_CUSTOM_HISTORY, PREF_SELECTED_CUSTOM_URI, PREF_SELECTED_LAYOUT, PREF_USE_CUSTOM_LAYOUT,
};
use gesture_layouts::sources::{LayoutSources, MemoryBundle, MemoryResolver};
use gesture_layouts::store::{MemoryStore, PreferenceEdit, PreferenceStore};
use indexmap::IndexSet;
use std::fmt::Write as _;

/// Builds a layout document with `layers` content layers.
///
/// # Arguments
/// * `name` - Declared `info.name`, or `None` for a layout without an info section
/// * `layers` - Number of layers to declare (0 produces an empty layout)
pub fn layout_yaml(name: Option<&str>, layers: usize) -> String {
    const LAYER_NAMES: [&str; 5] = ["default", "first", "second", "third", "fourth"];

    let mut yaml = String::new();
    if let Some(name) = name {
        writeln!(yaml, "info:\n  name: \"{name}\"").unwrap();
    }
    if layers == 0 {
        yaml.push_str("layers: {}\n");
        return yaml;
    }
    yaml.push_str("layers:\n  hidden:\n    characters: \"\\t\"\n");
    for layer in LAYER_NAMES.iter().take(layers) {
        writeln!(yaml, "  {layer}:\n    sectors:\n      right: \"abcd\"").unwrap();
    }
    yaml
}

/// Bundle with three single-layer layouts `a`, `b`, `c`.
pub fn bundle_abc() -> MemoryBundle {
    MemoryBundle::new()
        .with_layout("c", "Charlie", layout_yaml(None, 1))
        .with_layout("a", "Alpha", layout_yaml(None, 1))
        .with_layout("b", "Bravo", layout_yaml(None, 1))
}

/// Sources over a bundle and a resolver.
pub fn sources(bundle: MemoryBundle, resolver: MemoryResolver) -> LayoutSources {
    LayoutSources::new(bundle, resolver)
}

/// Ordered set of uris.
pub fn uri_set(uris: &[&str]) -> IndexSet<String> {
    uris.iter().map(ToString::to_string).collect()
}

/// Store holding a custom layout history.
pub fn store_with_history(uris: &[&str]) -> MemoryStore {
    let mut store = MemoryStore::new();
    store
        .commit(PreferenceEdit::new().put_string_set(PREF_CUSTOM_HISTORY, uri_set(uris)))
        .unwrap();
    store
}

/// Persists an embedded selection the way older versions stored it.
pub fn persist_embedded_selection(store: &mut MemoryStore, id: &str) {
    store
        .commit(
            PreferenceEdit::new()
                .put_string(PREF_SELECTED_LAYOUT, id)
                .put_bool(PREF_USE_CUSTOM_LAYOUT, false),
        )
        .unwrap();
}

/// Persists a custom selection.
pub fn persist_custom_selection(store: &mut MemoryStore, uri: &str) {
    store
        .commit(
            PreferenceEdit::new()
                .put_bool(PREF_USE_CUSTOM_LAYOUT, true)
                .put_string(PREF_SELECTED_CUSTOM_URI, uri),
        )
        .unwrap();
}

/// Persisted custom history.
pub fn persisted_history(store: &impl PreferenceStore) -> IndexSet<String> {
    store.get_string_set(PREF_CUSTOM_HISTORY, &IndexSet::new())
}
