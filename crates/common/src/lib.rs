//! `sc-common` — Shared types, configuration, and errors for the post sculpture editor.
//!
//! This crate is the foundation the state crate depends on:
//!
//! - **Types**: `GridPos` (lattice position + ring), `PostSize` (clamped length)
//! - **Color**: `HexColor` (validated `#RRGGBB`)
//! - **Config**: `GridConfig` (grid extent, size bounds, initial palette)
//! - **Errors**: `EditorError`, `EditorResult` (thiserror-based)

pub mod color;
pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used items at crate root
pub use color::HexColor;
pub use config::{GridConfig, MAX_RADIUS};
pub use error::{EditorError, EditorResult};
pub use types::{GridPos, PostSize};
