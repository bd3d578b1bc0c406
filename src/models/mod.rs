//! Data models for colors, asset categories, cables and run reports.
//!
//! These types carry no file system behaviour of their own; the generators
//! in [`crate::generator`] consume them.

pub mod asset_kind;
pub mod cable;
pub mod color;
pub mod report;

// Re-export all model types
pub use asset_kind::{AssetKind, ResourceTree};
pub use cable::{format_coordinate, CableSpec, CABLE_MODEL_PARTS};
pub use color::{DyeColor, PALETTE};
pub use report::{GenerationReport, UnresolvedPlaceholder};
