//! Kontrol asset generator library
//!
//! This library expands JSON resource templates into per-color variants for
//! the Kontrol mod: wire blockstates, models, recipes and loot tables, and
//! complete cable model sets.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod generator;
pub mod models;
pub mod workspace;
