//! Layout references.

use std::fmt;

/// Handle to a layout source.
///
/// Embedded layouts are addressed by their bundled id (e.g. `"en"`), custom
/// layouts by the uri the user picked them from (e.g. `"file:///sdcard/my.yaml"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LayoutReference {
    /// A layout bundled with the application
    Embedded(String),
    /// A layout supplied from external storage
    External(String),
}

impl LayoutReference {
    /// Creates a reference to a bundled layout.
    pub fn embedded(id: impl Into<String>) -> Self {
        Self::Embedded(id.into())
    }

    /// Creates a reference to an external layout file.
    pub fn external(uri: impl Into<String>) -> Self {
        Self::External(uri.into())
    }

    /// Returns the id or uri this reference points at.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Embedded(id) => id,
            Self::External(uri) => uri,
        }
    }

    /// Returns true for bundled layouts.
    pub const fn is_embedded(&self) -> bool {
        matches!(self, Self::Embedded(_))
    }
}

impl fmt::Display for LayoutReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded(id) => write!(f, "embedded:{id}"),
            Self::External(uri) => f.write_str(uri),
        }
    }
}
