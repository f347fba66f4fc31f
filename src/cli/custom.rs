//! Commands curating the custom layout history.

use crate::config::Config;
use crate::constants::APP_BINARY_NAME;
use crate::services::Diagnostic;
use anyhow::Result;
use clap::Args;

/// Add a custom layout file and select it
#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    /// Layout file path or file:// uri
    #[arg(value_name = "URI")]
    pub uri: String,
}

impl AddArgs {
    /// Execute the add command
    pub fn execute(&self, config: &Config) -> Result<()> {
        let mut registry = super::open_registry(config)?;

        if !registry.add_custom_layout(&self.uri) {
            let reason = registry
                .diagnostics()
                .iter()
                .find_map(|diagnostic| match diagnostic {
                    Diagnostic::CustomRejected { reason, .. } => Some(reason.to_string()),
                    Diagnostic::CustomShadowed { name, .. } => {
                        Some(format!("a bundled layout is already named \"{name}\""))
                    }
                    _ => None,
                })
                .unwrap_or_else(|| "added to history but could not be selected".to_string());
            anyhow::bail!("Cannot add {}: {}", self.uri, reason);
        }

        for diagnostic in registry.diagnostics() {
            if let Diagnostic::HistoryEvicted { uri } = diagnostic {
                println!("⚠ History full, forgot {uri}");
            }
        }

        println!("✓ Added and selected {}", self.uri);
        Ok(())
    }
}

/// Remove a custom layout from the history
#[derive(Debug, Clone, Args)]
pub struct RemoveArgs {
    /// Uri as shown by `list`
    #[arg(value_name = "URI")]
    pub uri: String,
}

impl RemoveArgs {
    /// Execute the remove command
    pub fn execute(&self, config: &Config) -> Result<()> {
        let mut registry = super::open_registry(config)?;

        if !registry.remove_custom_layout(&self.uri) {
            anyhow::bail!("{} is not in the custom layout history", self.uri);
        }

        println!("✓ Removed {}", self.uri);
        if registry.index().is_none() {
            println!(
                "No layout selected. Pick one with: {APP_BINARY_NAME} select <POSITION>"
            );
        }
        Ok(())
    }
}
