//! Parsing for layout files.
//!
//! This module decodes the YAML layout format into [`crate::models::LayoutDocument`].

pub mod layout;

// Re-export commonly used functions
pub use layout::{parse_layout_document, parse_layout_str, read_all};
