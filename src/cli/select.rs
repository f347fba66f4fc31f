//! Select command.

use crate::config::Config;
use anyhow::Result;
use clap::Args;

/// Select the layout at a position shown by `list`
#[derive(Debug, Clone, Args)]
pub struct SelectArgs {
    /// Position of the layout
    #[arg(value_name = "POSITION")]
    pub position: usize,
}

impl SelectArgs {
    /// Execute the select command
    pub fn execute(&self, config: &Config) -> Result<()> {
        let mut registry = super::open_registry(config)?;

        if self.position >= registry.total_count() {
            anyhow::bail!(
                "No layout at position {} ({} layouts available)",
                self.position,
                registry.total_count()
            );
        }

        if registry.is_shadowed(self.position) {
            anyhow::bail!(
                "Layout at position {} is hidden by a bundled layout with the same name",
                self.position
            );
        }

        registry.select_layout(self.position);

        let name = registry.layout_name_at(self.position).unwrap_or("<unnamed>");
        println!("✓ Selected {name}");
        Ok(())
    }
}
