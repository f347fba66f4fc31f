//! Layout validation.
//!
//! A layout is valid when its data can be read, parses as a layout document,
//! and declares at least one layer. Every failure is reported as an
//! [`InvalidLayout`] value; nothing here panics or propagates I/O errors.

use crate::models::{LayoutDescriptor, LayoutReference};
use crate::parser;
use crate::sources::LayoutSources;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Why a layout was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    /// The data could not be opened or read
    Unreadable(String),
    /// The data is not a layout document
    Unparseable(String),
    /// The document declares no layers
    Empty,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable(message) => write!(f, "unreadable: {message}"),
            Self::Unparseable(message) => write!(f, "unparseable: {message}"),
            Self::Empty => f.write_str("layout declares no layers"),
        }
    }
}

/// A rejected layout reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLayout {
    /// The reference that failed validation
    pub reference: LayoutReference,
    /// Why it failed
    pub reason: InvalidReason,
}

impl fmt::Display for InvalidLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid layout {}: {}", self.reference, self.reason)
    }
}

/// Content fingerprint used as the cache key.
type ContentHash = [u8; 32];

/// Validates layout references, memoizing results by content.
///
/// Each reference keeps one cache entry holding the SHA-256 of the content it
/// was last validated with. Unchanged content is not parsed again; changed
/// content replaces the entry. A reference that fails to read loses its entry,
/// and read failures themselves are never cached.
#[derive(Debug, Default)]
pub struct LayoutValidator {
    cache: HashMap<LayoutReference, CachedResult>,
}

#[derive(Debug)]
struct CachedResult {
    hash: ContentHash,
    result: Result<LayoutDescriptor, InvalidReason>,
}

impl LayoutValidator {
    /// Creates a validator with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the layout behind `reference`.
    pub fn validate(
        &mut self,
        sources: &LayoutSources,
        reference: &LayoutReference,
    ) -> Result<LayoutDescriptor, InvalidLayout> {
        let bytes = match sources.open(reference).and_then(parser::read_all) {
            Ok(bytes) => bytes,
            Err(e) => {
                self.cache.remove(reference);
                return Err(InvalidLayout {
                    reference: reference.clone(),
                    reason: InvalidReason::Unreadable(format!("{e:#}")),
                });
            }
        };

        let hash: ContentHash = Sha256::digest(&bytes).into();
        let cached = self
            .cache
            .get(reference)
            .filter(|cached| cached.hash == hash)
            .map(|cached| cached.result.clone());

        let result = match cached {
            Some(result) => {
                debug!("Layout validation cache hit for {}", reference);
                result
            }
            None => {
                let result = validate_bytes(&bytes);
                self.cache.insert(
                    reference.clone(),
                    CachedResult {
                        hash,
                        result: result.clone(),
                    },
                );
                result
            }
        };

        result.map_err(|reason| InvalidLayout {
            reference: reference.clone(),
            reason,
        })
    }

    /// Number of references with a cached result.
    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }
}

/// Validates raw layout content without caching.
pub fn validate_bytes(bytes: &[u8]) -> Result<LayoutDescriptor, InvalidReason> {
    let document = parser::parse_layout_document(bytes)
        .map_err(|e| InvalidReason::Unparseable(format!("{e:#}")))?;

    let layer_count = document.total_layers();
    if layer_count == 0 {
        return Err(InvalidReason::Empty);
    }

    Ok(LayoutDescriptor {
        name: document.name().map(ToString::to_string),
        layer_count,
    })
}
