//! CLI command handlers.
//!
//! This module provides scriptable access to the layout registry: listing
//! layouts, selecting one, and curating the custom layout history.

pub mod custom;
pub mod list;
pub mod select;
pub mod validate;

// Re-export types used by main.rs and tests
pub use custom::{AddArgs, RemoveArgs};
pub use list::ListArgs;
pub use select::SelectArgs;
pub use validate::ValidateArgs;

use crate::config::Config;
use crate::services::LayoutRegistry;
use crate::sources::LayoutSources;
use crate::store::TomlPreferenceStore;
use anyhow::Result;

/// Opens the registry over the configured preferences file, the bundled
/// layouts, and the local filesystem.
pub fn open_registry(config: &Config) -> Result<LayoutRegistry<TomlPreferenceStore>> {
    let store = TomlPreferenceStore::open(config.preferences_path()?)?;
    Ok(LayoutRegistry::with_history_limit(
        store,
        LayoutSources::system(),
        config.history.max_entries,
    ))
}
