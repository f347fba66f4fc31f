//! Validation command for layout files.

use crate::models::LayoutReference;
use crate::services::LayoutValidator;
use crate::sources::LayoutSources;
use anyhow::Result;
use clap::Args;

/// Check whether a layout file would be accepted
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Layout file path or file:// uri
    #[arg(value_name = "URI")]
    pub uri: String,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let sources = LayoutSources::system();
        let reference = LayoutReference::external(self.uri.as_str());

        match LayoutValidator::new().validate(&sources, &reference) {
            Ok(descriptor) => {
                let fallback = sources.external.display_name(&self.uri);
                println!("✓ Validation passed");
                println!("  Name:   {}", descriptor.display_name_or(&fallback));
                println!("  Layers: {}", descriptor.layer_count);
                Ok(())
            }
            Err(invalid) => {
                println!("✗ Validation failed");
                anyhow::bail!("{}", invalid.reason)
            }
        }
    }
}
