//! Access to layout data.
//!
//! Layout bytes come from two places: resources bundled with the application
//! ([`BundledResources`]) and files the user picked from external storage
//! ([`ExternalResolver`]). [`LayoutSources`] pairs one of each so a
//! [`LayoutReference`] can be opened without caring where it lives.

pub mod bundled;
pub mod external;

pub use bundled::{BundledLayouts, MemoryBundle};
pub use external::{FileResolver, MemoryResolver};

use crate::models::LayoutReference;
use anyhow::Result;
use std::io::Read;

/// Enumerates and opens the layouts shipped with the application.
pub trait BundledResources {
    /// Ids of all bundled layouts, in a fixed order.
    fn layout_ids(&self) -> Vec<String>;

    /// Opens the layout data for `id`.
    fn open(&self, id: &str) -> Result<Box<dyn Read + '_>>;

    /// Human-readable name for `id` (e.g. "English").
    fn base_name(&self, id: &str) -> String;
}

/// Opens layouts referenced by an external uri.
pub trait ExternalResolver {
    /// Opens the layout data behind `uri`.
    fn open(&self, uri: &str) -> Result<Box<dyn Read + '_>>;

    /// Best-effort file name for `uri`; empty when it cannot be determined.
    fn display_name(&self, uri: &str) -> String;
}

/// The pair of collaborators a registry reads layouts through.
pub struct LayoutSources {
    /// Bundled layouts
    pub bundled: Box<dyn BundledResources>,
    /// External layout files
    pub external: Box<dyn ExternalResolver>,
}

impl LayoutSources {
    /// Creates sources from the two collaborators.
    pub fn new(
        bundled: impl BundledResources + 'static,
        external: impl ExternalResolver + 'static,
    ) -> Self {
        Self {
            bundled: Box::new(bundled),
            external: Box::new(external),
        }
    }

    /// Sources used by the application: embedded assets and the local filesystem.
    pub fn system() -> Self {
        Self::new(BundledLayouts, FileResolver)
    }

    /// Opens the data behind `reference`.
    pub fn open(&self, reference: &LayoutReference) -> Result<Box<dyn Read + '_>> {
        match reference {
            LayoutReference::Embedded(id) => self.bundled.open(id),
            LayoutReference::External(uri) => self.external.open(uri),
        }
    }
}
