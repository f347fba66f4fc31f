//! List command.

use crate::config::Config;
use crate::constants::APP_BINARY_NAME;
use crate::models::LayoutReference;
use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

/// List selectable layouts, bundled first
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// One row of the listing.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutEntry {
    /// Position to pass to `select`
    pub position: usize,
    /// Display name
    pub name: String,
    /// "embedded" or "custom"
    pub kind: &'static str,
    /// Bundled id or custom uri
    pub reference: String,
    /// Whether this is the selected layout
    pub selected: bool,
    /// Whether a bundled layout with the same name hides this custom layout
    pub shadowed: bool,
}

/// JSON output of the list command.
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    /// All selectable layouts
    pub layouts: Vec<LayoutEntry>,
    /// Position of the selected layout
    pub selected: Option<usize>,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self, config: &Config) -> Result<()> {
        let registry = super::open_registry(config)?;

        // Rows follow registry positions, which also cover custom layouts
        // hidden from the merged display names
        let layouts = (0..registry.total_count())
            .filter_map(|position| {
                let reference = registry.reference_at(position)?;
                Some(LayoutEntry {
                    position,
                    name: registry.layout_name_at(position)?.to_string(),
                    kind: if reference.is_embedded() { "embedded" } else { "custom" },
                    reference: match reference {
                        LayoutReference::Embedded(id) => id,
                        LayoutReference::External(uri) => uri,
                    },
                    selected: registry.index() == Some(position),
                    shadowed: registry.is_shadowed(position),
                })
            })
            .collect();

        let response = ListResponse {
            layouts,
            selected: registry.index(),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response).context("Failed to serialize JSON")?
            );
            return Ok(());
        }

        if response.layouts.is_empty() {
            println!("No layouts available");
            return Ok(());
        }

        for entry in &response.layouts {
            let marker = if entry.selected { "*" } else { " " };
            let note = if entry.shadowed {
                "  (hidden: name taken by a bundled layout)"
            } else {
                ""
            };
            println!(
                "{} {:>2}  {:<32} {:<8} {}{}",
                marker, entry.position, entry.name, entry.kind, entry.reference, note
            );
        }

        if response.selected.is_none() {
            println!();
            println!(
                "No layout selected. Pick one with: {APP_BINARY_NAME} select <POSITION>"
            );
        }

        Ok(())
    }
}
