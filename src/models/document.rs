//! Layout document structure.
//!
//! Only the parts of the layout file the registry needs are modeled here. The
//! content of each layer is kept as an opaque YAML value.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_yml::Value;

/// Name of the layer holding characters reachable without a gesture.
///
/// It is always present at runtime and is not counted as a layer.
pub const HIDDEN_LAYER: &str = "hidden";

/// Descriptive section of a layout file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LayoutInfo {
    /// Human-readable layout name
    #[serde(default)]
    pub name: String,
    /// Long description
    #[serde(default)]
    pub description: String,
    /// Creator name
    #[serde(default)]
    pub author: String,
}

/// A parsed layout file.
///
/// ```yaml
/// info:
///   name: English
/// layers:
///   hidden: { ... }
///   default: { ... }
///   first: { ... }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LayoutDocument {
    /// Optional descriptive section
    #[serde(default)]
    pub info: Option<LayoutInfo>,
    /// Layers by name, in file order
    #[serde(default)]
    pub layers: IndexMap<String, Value>,
}

impl LayoutDocument {
    /// Counts the layers that carry content, excluding the hidden layer.
    pub fn total_layers(&self) -> usize {
        self.layers
            .iter()
            .filter(|(name, value)| name.as_str() != HIDDEN_LAYER && !value.is_null())
            .count()
    }

    /// Returns the declared name when it is present and non-empty.
    pub fn name(&self) -> Option<&str> {
        self.info
            .as_ref()
            .map(|info| info.name.as_str())
            .filter(|name| !name.is_empty())
    }
}
