use serde::{Deserialize, Serialize};

use super::{BaseRef, CreativeInventory};

/// Draw type of every block created by the block form.
pub const DEFAULT_DRAW_TYPE: &str = "Cube";
/// Material of every block created by the block form.
pub const DEFAULT_MATERIAL: &str = "Stone";
/// Sound played when the block is placed.
pub const DEFAULT_PLACE_SOUND: &str = "game:block/dirt";
/// Sound played when walking on the block.
pub const DEFAULT_WALK_SOUND: &str = "game:walk/stone";

/// `blocktypes/<code>.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BlockType {
    /// Block code, unique within the mod.
    pub code: String,
    /// Creative inventory placement.
    pub creative_inventory: CreativeInventory,
    /// How the block is tessellated.
    pub draw_type: String,
    /// Block texture, `block/<name>`.
    pub texture: BaseRef,
    /// Material class.
    pub block_material: String,
    /// Mining resistance.
    pub resistance: f64,
    /// Place and walk sounds.
    pub sounds: BlockSounds,
}

/// Sound keys of a block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BlockSounds {
    /// Played on placement.
    pub place: String,
    /// Played on footsteps.
    pub walk: String,
}

impl BlockSounds {
    /// The fixed sound keys new blocks get.
    pub fn stone() -> Self {
        Self {
            place: DEFAULT_PLACE_SOUND.to_string(),
            walk: DEFAULT_WALK_SOUND.to_string(),
        }
    }
}
