//! Cable model description.

use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

/// Center of a block in model coordinates (models span 0..16).
const BLOCK_CENTER: f64 = 8.0;

/// File names of the two model parts every cable is built from.
pub const CABLE_MODEL_PARTS: [&str; 2] = ["middle.json", "connector.json"];

/// Input to the cable model assembler.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CableSpec {
    /// Identifier without namespace prefix (e.g. `basic_cable`)
    pub name: String,
    /// Directory holding `middle.json` and `connector.json`
    pub model_dir: PathBuf,
    /// Half of the cable width, in model units
    pub size: f64,
}

impl CableSpec {
    /// Creates a new cable spec.
    pub fn new(name: impl Into<String>, model_dir: impl Into<PathBuf>, size: f64) -> Self {
        Self {
            name: name.into(),
            model_dir: model_dir.into(),
            size,
        }
    }

    /// Validates the cable.
    ///
    /// The name must be non-empty and `size` must lie in `0..=8` so both
    /// bounds stay inside the 0..16 model space.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            anyhow::bail!("Cable name must not be empty");
        }

        if !self.size.is_finite() || self.size < 0.0 || self.size > BLOCK_CENTER {
            anyhow::bail!("Invalid size {}: must be between 0 and 8", self.size);
        }

        Ok(())
    }

    /// Lower and upper texture bounds, `(8 - size, 8 + size)`.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        (BLOCK_CENTER - self.size, BLOCK_CENTER + self.size)
    }

    /// Texture resource path, e.g. `kontrol:block/cables/basic_cable`.
    #[must_use]
    pub fn texture(&self, namespace: &str) -> String {
        format!("{namespace}:block/cables/{}", self.name)
    }
}

/// Formats a model coordinate as a plain decimal (`6.5`, `7`, `-0.25`).
#[must_use]
pub fn format_coordinate(value: f64) -> String {
    format!("{value}")
}
