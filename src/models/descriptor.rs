//! Metadata derived from a successfully validated layout.

/// Result of validating a layout reference.
///
/// Only valid layouts produce a descriptor, so `layer_count` is always at
/// least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutDescriptor {
    /// Name declared in the layout's `info.name`, if present and non-empty
    pub name: Option<String>,
    /// Number of layers the layout declares
    pub layer_count: usize,
}

impl LayoutDescriptor {
    /// Returns the display name, preferring the declared name over `fallback`.
    ///
    /// The `" (N layers)"` suffix is applied in both cases.
    pub fn display_name_or(&self, fallback: &str) -> String {
        let base = self.name.as_deref().unwrap_or(fallback);
        compose_display_name(base, self.layer_count)
    }
}

/// Appends the layer count to a base name when the layout has more than one layer.
///
/// # Examples
///
/// ```
/// # use gesture_layouts::models::compose_display_name;
/// assert_eq!(compose_display_name("English", 1), "English");
/// assert_eq!(compose_display_name("Foo", 2), "Foo (2 layers)");
/// ```
pub fn compose_display_name(base: &str, layer_count: usize) -> String {
    if layer_count > 1 {
        format!("{base} ({layer_count} layers)")
    } else {
        base.to_string()
    }
}
