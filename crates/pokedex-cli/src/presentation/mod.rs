//! Rendering of looked-up records.
//!
//! This module is format-only: it turns a `PokedexEntry` into a string and
//! never touches a data source.

pub mod format;
pub mod pokemon_view;

// Re-export commonly used items
pub use format::OutputFormat;
pub use pokemon_view::render;
