//! On-disk record shapes, one per asset kind.
//!
//! Field names and casing follow the game's JSON conventions, which differ
//! between kinds (item and block types are PascalCase, crops and recipes are
//! camelCase). Every record deserializes leniently via `#[serde(default)]`.

/// Block types (`blocktypes/`).
pub mod block;
/// Crop block types with growth stages and drops.
pub mod crop;
/// Item types, optionally edible.
pub mod item;
/// The mod manifest.
pub mod modinfo;
/// Grid crafting recipes.
pub mod recipe;
/// World-generation patches.
pub mod worldgen;

use serde::{Deserialize, Serialize};

pub use block::{BlockSounds, BlockType};
pub use crop::{CropBlock, CropDrop, CropProps, DropQuantity, StageRef, VariantGroup};
pub use item::{ItemType, NutritionProps};
pub use modinfo::ModInfo;
pub use recipe::{GridRecipe, RecipeStack, StackType};
pub use worldgen::{WorldGenPatch, WorldGenQuantity};

/// Creative inventory tabs an item or block appears in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreativeInventory {
    /// Variant patterns listed in the general tab; `*` lists every variant.
    pub general: Vec<String>,
}

impl CreativeInventory {
    /// Every variant in the general tab.
    pub fn all_variants() -> Self {
        Self {
            general: vec!["*".to_string()],
        }
    }
}

/// A `{ "Base": "<category>/<name>" }` reference to a texture or shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BaseRef {
    /// Path of the resource relative to its `textures/` or `shapes/` root.
    pub base: String,
}

impl BaseRef {
    /// Reference `name` below `prefix`, unless `name` already carries it.
    pub fn with_prefix(prefix: &str, name: &str) -> Self {
        let base = if name.starts_with(prefix) {
            name.to_string()
        } else {
            format!("{prefix}{name}")
        };
        Self { base }
    }

    /// The referenced name with `prefix` stripped.
    pub fn name<'a>(&'a self, prefix: &str) -> &'a str {
        self.base.strip_prefix(prefix).unwrap_or(&self.base)
    }
}
