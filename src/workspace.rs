//! Locating the dev directory and the output trees derived from it.

use crate::config::Config;
use crate::constants::{APP_BINARY_NAME, DEV_DIR_NAME};
use crate::models::{AssetKind, ResourceTree};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::error;

/// Finds the dev directory starting from `cwd`.
///
/// If `cwd` is itself named `dev` it is returned unchanged; otherwise
/// `cwd/dev` is used. A missing dev directory is logged with instructions
/// and returned as an error.
pub fn resolve_dev_dir(cwd: &Path) -> Result<PathBuf> {
    if cwd.file_name().is_some_and(|name| name == DEV_DIR_NAME) {
        return Ok(cwd.to_path_buf());
    }

    let candidate = cwd.join(DEV_DIR_NAME);
    if candidate.is_dir() {
        return Ok(candidate);
    }

    error!(
        "{} must be run either from the top of the Kontrol project or from Kontrol/{}",
        APP_BINARY_NAME, DEV_DIR_NAME
    );
    error!(
        "Change your working directory and check that {} exists",
        candidate.display()
    );
    Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        format!("dev directory not found: {}", candidate.display()),
    ))
    .context("Failed to locate the dev directory")
}

/// Input and output locations for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLayout {
    /// The dev directory holding all templates
    pub dev_dir: PathBuf,
    /// Mod namespace
    pub namespace: String,
    /// Root containing `assets/` and `data/`
    pub resources_root: PathBuf,
}

impl AssetLayout {
    /// Builds the layout for a dev directory using the given configuration.
    pub fn new(dev_dir: impl Into<PathBuf>, config: &Config) -> Self {
        let dev_dir = dev_dir.into();
        let resources_root = dev_dir.join(&config.resources_root);
        Self {
            dev_dir,
            namespace: config.namespace.clone(),
            resources_root,
        }
    }

    /// `assets/<namespace>`
    pub fn assets_root(&self) -> PathBuf {
        self.resources_root.join("assets").join(&self.namespace)
    }

    /// `data/<namespace>`
    pub fn data_root(&self) -> PathBuf {
        self.resources_root.join("data").join(&self.namespace)
    }

    /// Block state output directory.
    pub fn blockstates_dir(&self) -> PathBuf {
        self.output_dir(AssetKind::Blockstate)
    }

    /// Item model output directory.
    pub fn item_models_dir(&self) -> PathBuf {
        self.output_dir(AssetKind::ItemModel)
    }

    /// Directory receiving the model parts of one cable.
    pub fn cable_models_dir(&self, cable_name: &str) -> PathBuf {
        self.assets_root()
            .join("models")
            .join("block")
            .join("cables")
            .join(cable_name)
    }

    /// Output directory for an asset category.
    pub fn output_dir(&self, kind: AssetKind) -> PathBuf {
        let root = match kind.tree() {
            ResourceTree::Assets => self.assets_root(),
            ResourceTree::Data => self.data_root(),
        };
        root.join(kind.output_subdir())
    }

    /// Per-asset template, e.g. `dev/recipes/basic_wire.json`.
    pub fn asset_template(&self, kind: AssetKind, name: &str) -> PathBuf {
        self.dev_dir
            .join(kind.template_dir())
            .join(format!("{name}.json"))
    }

    /// Shared cable template for blockstates.
    pub fn cable_blockstate_template(&self) -> PathBuf {
        self.dev_dir
            .join("autogen-template")
            .join("blockstates")
            .join("cable_template.json")
    }

    /// Shared cable template for item models.
    pub fn cable_item_template(&self) -> PathBuf {
        self.dev_dir
            .join("autogen-template")
            .join("models")
            .join("item")
            .join("cable_template.json")
    }
}
