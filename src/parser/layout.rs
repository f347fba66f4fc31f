//! YAML layout file parsing.
//!
//! Layout files are YAML documents with an optional `info` section and a
//! `layers` mapping. This module only decodes them; deciding whether a layout
//! is usable is up to [`crate::services::validator`].

use crate::models::LayoutDocument;
use anyhow::{Context, Result};
use std::io::Read;

/// Parses a layout document from raw bytes.
///
/// # Errors
///
/// Returns errors for:
/// - Content that is not valid UTF-8
/// - Invalid YAML, or YAML whose shape does not match [`LayoutDocument`]
pub fn parse_layout_document(bytes: &[u8]) -> Result<LayoutDocument> {
    let content = std::str::from_utf8(bytes).context("Layout file is not valid UTF-8")?;
    parse_layout_str(content)
}

/// Parses a layout document from a string.
pub fn parse_layout_str(content: &str) -> Result<LayoutDocument> {
    // An empty file deserializes to unit, which is not a document
    if content.trim().is_empty() {
        anyhow::bail!("Layout file is empty");
    }

    serde_yml::from_str(content).context("Failed to parse layout YAML")
}

/// Reads a whole stream into memory.
///
/// Layout files are small, and the validator fingerprints the full content
/// before parsing.
pub fn read_all(mut reader: impl Read) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .context("Failed to read layout data")?;
    Ok(bytes)
}
