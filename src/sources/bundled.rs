//! Layouts shipped with the application.

use super::BundledResources;
use crate::constants::EMBEDDED_LAYOUTS;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use rust_embed::Embed;
use std::io::{Cursor, Read};

/// Layout files embedded at compile time from the `layouts/` directory.
#[derive(Embed)]
#[folder = "layouts/"]
struct LayoutAssets;

/// Bundled layouts listed in [`EMBEDDED_LAYOUTS`].
///
/// An id whose `<id>.yaml` asset is not part of the build fails to open, and
/// the catalog leaves it out.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledLayouts;

impl BundledLayouts {
    fn asset_path(id: &str) -> String {
        format!("{id}.yaml")
    }
}

impl BundledResources for BundledLayouts {
    fn layout_ids(&self) -> Vec<String> {
        EMBEDDED_LAYOUTS
            .iter()
            .map(|(id, _)| (*id).to_string())
            .collect()
    }

    fn open(&self, id: &str) -> Result<Box<dyn Read + '_>> {
        let file = LayoutAssets::get(&Self::asset_path(id))
            .with_context(|| format!("Bundled layout not found: {id}"))?;
        Ok(Box::new(Cursor::new(file.data)))
    }

    fn base_name(&self, id: &str) -> String {
        EMBEDDED_LAYOUTS
            .iter()
            .find(|(known, _)| *known == id)
            .map_or_else(|| id.to_string(), |(_, name)| (*name).to_string())
    }
}

/// Bundled layouts held in memory.
///
/// Useful for embedding applications that ship layouts some other way, and
/// for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryBundle {
    layouts: IndexMap<String, (String, Option<Vec<u8>>)>,
}

impl MemoryBundle {
    /// Creates an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a layout with its base name and content.
    pub fn with_layout(
        mut self,
        id: impl Into<String>,
        base_name: impl Into<String>,
        content: impl Into<Vec<u8>>,
    ) -> Self {
        self.layouts
            .insert(id.into(), (base_name.into(), Some(content.into())));
        self
    }

    /// Lists an id whose resource is missing, as in a build that left it out.
    pub fn with_missing(mut self, id: impl Into<String>, base_name: impl Into<String>) -> Self {
        self.layouts.insert(id.into(), (base_name.into(), None));
        self
    }
}

impl BundledResources for MemoryBundle {
    fn layout_ids(&self) -> Vec<String> {
        self.layouts.keys().cloned().collect()
    }

    fn open(&self, id: &str) -> Result<Box<dyn Read + '_>> {
        let content = self
            .layouts
            .get(id)
            .and_then(|(_, content)| content.as_deref())
            .with_context(|| format!("Bundled layout not found: {id}"))?;
        Ok(Box::new(content))
    }

    fn base_name(&self, id: &str) -> String {
        self.layouts
            .get(id)
            .map_or_else(|| id.to_string(), |(name, _)| name.clone())
    }
}
