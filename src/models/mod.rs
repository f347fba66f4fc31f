//! Data models for layout references, validation results, and selection state.
//!
//! Models are independent of storage and I/O; services combine them with the
//! collaborators in [`crate::sources`] and [`crate::store`].

pub mod descriptor;
pub mod document;
pub mod reference;
pub mod selection;

// Re-export all model types
pub use descriptor::{compose_display_name, LayoutDescriptor};
pub use document::{LayoutDocument, LayoutInfo};
pub use reference::LayoutReference;
pub use selection::Selection;
