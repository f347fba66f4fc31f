//! Application-wide constants.
//!
//! This module defines the binary name, the preference keys shared with
//! the preference store, and the table of bundled layouts.

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "gesture-layouts";

/// Preference key holding the id of the selected embedded layout.
pub const PREF_SELECTED_LAYOUT: &str = "selected_keyboard_layout";

/// Preference key holding the "a custom layout is selected" flag.
pub const PREF_USE_CUSTOM_LAYOUT: &str = "use_custom_selected_keyboard_layout";

/// Preference key holding the uri of the selected custom layout.
pub const PREF_SELECTED_CUSTOM_URI: &str = "selected_custom_keyboard_layout_uri";

/// Preference key holding the ordered set of custom layout uris.
pub const PREF_CUSTOM_HISTORY: &str = "selected_custom_keyboard_layout_history";

/// Default bound on the number of remembered custom layouts.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Bundled layouts as `(id, base name)` pairs.
///
/// Each id maps to `layouts/<id>.yaml` in the embedded assets. Ids whose asset
/// is missing from a build are skipped when the catalog is built.
pub const EMBEDDED_LAYOUTS: &[(&str, &str)] = &[
    ("en", "English"),
    ("de", "German"),
    ("fr", "French"),
    ("es", "Spanish"),
    ("hi", "Hindi"),
];
