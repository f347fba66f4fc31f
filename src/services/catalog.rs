//! Catalog of bundled layouts.

use super::diagnostics::Diagnostic;
use super::validator::LayoutValidator;
use crate::models::{compose_display_name, LayoutReference};
use crate::sources::LayoutSources;
use std::collections::BTreeMap;
use tracing::debug;

/// Valid bundled layouts, keyed and ordered by display name.
///
/// Ordering is by byte-wise string comparison, so it does not depend on the
/// locale. Two ids producing the same display name collapse into one entry,
/// the later id winning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbeddedCatalog {
    entries: BTreeMap<String, String>,
}

impl EmbeddedCatalog {
    /// Validates every bundled layout and collects the valid ones.
    ///
    /// Invalid layouts are left out and reported in `diagnostics`.
    pub fn build(
        sources: &LayoutSources,
        validator: &mut LayoutValidator,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Self {
        let mut entries = BTreeMap::new();

        for id in sources.bundled.layout_ids() {
            let reference = LayoutReference::embedded(id.as_str());
            match validator.validate(sources, &reference) {
                Ok(descriptor) => {
                    let base_name = sources.bundled.base_name(&id);
                    let display_name = compose_display_name(&base_name, descriptor.layer_count);
                    debug!("Bundled layout '{}' available as \"{}\"", id, display_name);
                    entries.insert(display_name, id);
                }
                Err(invalid) => diagnostics.push(Diagnostic::EmbeddedSkipped {
                    id,
                    reason: invalid.reason,
                }),
            }
        }

        Self { entries }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no bundled layout is available.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display names in catalog order.
    pub fn display_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Layout ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }

    /// Position of `id` in catalog order.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.ids().position(|candidate| candidate == id)
    }

    /// Id at `position` in catalog order.
    pub fn id_at(&self, position: usize) -> Option<&str> {
        self.ids().nth(position)
    }

    /// Display name at `position` in catalog order.
    pub fn name_at(&self, position: usize) -> Option<&str> {
        self.display_names().nth(position)
    }

    /// Returns true if a bundled layout is listed as `name`.
    pub fn contains_name(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}
