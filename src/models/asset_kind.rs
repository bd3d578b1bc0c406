//! Resource categories produced by the wire generator.

use serde::Serialize;
use std::fmt;

/// Category of a generated resource file.
///
/// Each kind has a template directory under `dev/` and a destination
/// relative to either the assets tree or the data tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    /// Block state definitions (`assets/<ns>/blockstates`)
    Blockstate,
    /// Item models (`assets/<ns>/models/item`)
    ItemModel,
    /// Crafting recipes (`data/<ns>/recipes`)
    Recipe,
    /// Block loot tables (`data/<ns>/loot_tables/blocks`)
    LootTable,
}

/// Which resource tree an asset kind is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceTree {
    /// Client assets (`assets/<ns>`)
    Assets,
    /// Server data (`data/<ns>`)
    Data,
}

impl AssetKind {
    /// All kinds, in the order the wire generator processes them.
    pub const ALL: [Self; 4] = [Self::Blockstate, Self::ItemModel, Self::Recipe, Self::LootTable];

    /// Template directory inside `dev/`.
    #[must_use]
    pub const fn template_dir(self) -> &'static str {
        match self {
            Self::Blockstate => "blockstates",
            Self::ItemModel => "model_item",
            Self::Recipe => "recipes",
            Self::LootTable => "loot_tables",
        }
    }

    /// Tree the generated files belong to.
    #[must_use]
    pub const fn tree(self) -> ResourceTree {
        match self {
            Self::Blockstate | Self::ItemModel => ResourceTree::Assets,
            Self::Recipe | Self::LootTable => ResourceTree::Data,
        }
    }

    /// Output directory relative to the namespace root of [`Self::tree`].
    #[must_use]
    pub const fn output_subdir(self) -> &'static str {
        match self {
            Self::Blockstate => "blockstates",
            Self::ItemModel => "models/item",
            Self::Recipe => "recipes",
            Self::LootTable => "loot_tables/blocks",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Blockstate => "blockstate",
            Self::ItemModel => "item model",
            Self::Recipe => "recipe",
            Self::LootTable => "loot table",
        };
        f.write_str(name)
    }
}
