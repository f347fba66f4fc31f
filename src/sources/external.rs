//! Layout files from external storage.

use super::ExternalResolver;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Splits `uri` into its scheme and the remainder.
///
/// A string without `scheme://` is treated as a bare filesystem path.
fn split_scheme(uri: &str) -> (Option<&str>, &str) {
    match uri.split_once("://") {
        Some((scheme, rest))
            if !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) =>
        {
            (Some(scheme), rest)
        }
        _ => (None, uri),
    }
}

/// Last non-empty `/`-separated segment of a path.
fn last_segment(path: &str) -> &str {
    path.trim_end_matches('/').rsplit('/').next().unwrap_or_default()
}

/// Resolver for `file://` uris and plain filesystem paths.
///
/// Other schemes cannot be opened and have no display name.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileResolver;

impl FileResolver {
    /// Maps a uri to a local path, if it names one.
    pub fn local_path(uri: &str) -> Option<PathBuf> {
        match split_scheme(uri) {
            (Some("file"), rest) | (None, rest) if !rest.is_empty() => Some(PathBuf::from(rest)),
            _ => None,
        }
    }
}

impl ExternalResolver for FileResolver {
    fn open(&self, uri: &str) -> Result<Box<dyn Read + '_>> {
        let path = Self::local_path(uri)
            .with_context(|| format!("Unsupported layout uri: {uri}"))?;
        let file = File::open(&path)
            .with_context(|| format!("Failed to open layout file: {}", path.display()))?;
        Ok(Box::new(file))
    }

    fn display_name(&self, uri: &str) -> String {
        Self::local_path(uri)
            .as_deref()
            .and_then(Path::to_str)
            .map(|path| last_segment(path).to_string())
            .unwrap_or_default()
    }
}

/// Resolver over an in-memory set of files.
///
/// Each uri carries the content it opens to (or nothing, if opening it
/// fails) and the display name a provider would report for it.
#[derive(Debug, Clone, Default)]
pub struct MemoryResolver {
    files: IndexMap<String, (Option<Vec<u8>>, String)>,
}

impl MemoryResolver {
    /// Creates an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a readable file.
    pub fn with_file(
        mut self,
        uri: impl Into<String>,
        display_name: impl Into<String>,
        content: impl Into<Vec<u8>>,
    ) -> Self {
        self.files
            .insert(uri.into(), (Some(content.into()), display_name.into()));
        self
    }

    /// Adds a uri that is known but cannot be opened.
    pub fn with_unreadable(mut self, uri: impl Into<String>, display_name: impl Into<String>) -> Self {
        self.files.insert(uri.into(), (None, display_name.into()));
        self
    }
}

impl ExternalResolver for MemoryResolver {
    fn open(&self, uri: &str) -> Result<Box<dyn Read + '_>> {
        let content = self
            .files
            .get(uri)
            .and_then(|(content, _)| content.as_deref())
            .with_context(|| format!("Failed to open layout file: {uri}"))?;
        Ok(Box::new(content))
    }

    fn display_name(&self, uri: &str) -> String {
        self.files
            .get(uri)
            .map(|(_, name)| name.clone())
            .unwrap_or_default()
    }
}
