//! Service layer for the layout registry.
//!
//! Leaf-first: [`validator`] checks individual layouts, [`catalog`] and
//! [`history`] build the bundled and custom collections, and [`registry`]
//! merges them and owns the selection.

pub mod catalog;
pub mod diagnostics;
pub mod history;
pub mod registry;
pub mod validator;

// Re-export commonly used types
pub use catalog::EmbeddedCatalog;
pub use diagnostics::Diagnostic;
pub use history::CustomLayoutHistory;
pub use registry::LayoutRegistry;
pub use validator::{validate_bytes, InvalidLayout, InvalidReason, LayoutValidator};
