//! Gesture Layouts Library
//!
//! This library keeps the registry of keyboard layouts available to a
//! gesture-input virtual keyboard: layouts bundled with the application, a
//! history of custom layout files picked by the user, and the currently
//! selected layout.
//!
//! The entry point is [`services::LayoutRegistry`]. Storage and layout data
//! are reached through the traits in [`store`] and [`sources`].

// Module declarations
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod parser;
pub mod services;
pub mod sources;
pub mod store;
