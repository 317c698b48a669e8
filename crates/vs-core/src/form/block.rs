use crate::asset::block::{DEFAULT_DRAW_TYPE, DEFAULT_MATERIAL};
use crate::asset::{BaseRef, BlockSounds, BlockType, CreativeInventory};
use crate::editor::{AssetForm, Draft};
use crate::error::VsResult;
use crate::kind::{AssetKind, ResourceCategory};

use super::{number, required};

/// Fields of the block form. Every block is a stone cube.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockForm {
    /// Block code and file stem.
    pub code: String,
    /// Display name for the language table.
    pub name: String,
    /// Texture name below `textures/block/`.
    pub texture: String,
    /// Mining resistance.
    pub resistance: String,
}

impl BlockForm {
    /// A fully filled-in form.
    pub fn new(code: &str, name: &str, texture: &str, resistance: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            texture: texture.to_string(),
            resistance: resistance.to_string(),
        }
    }
}

impl AssetForm for BlockForm {
    type Record = BlockType;
    const KIND: AssetKind = AssetKind::Block;

    fn build(&self) -> VsResult<Draft<BlockType>> {
        let name = required("name", &self.name)?;
        let code = required("code", &self.code)?;
        let texture = required("texture", &self.texture)?;
        let resistance = number("resistance", &self.resistance)?;

        let record = BlockType {
            code: code.to_string(),
            creative_inventory: CreativeInventory::all_variants(),
            draw_type: DEFAULT_DRAW_TYPE.to_string(),
            texture: BaseRef::with_prefix(ResourceCategory::Block.ref_prefix(), texture),
            block_material: DEFAULT_MATERIAL.to_string(),
            resistance,
            sounds: BlockSounds::stone(),
        };
        Ok(Draft {
            stem: code.to_string(),
            record,
            display_name: Some(name.to_string()),
        })
    }

    fn from_record(stem: &str, record: BlockType, display_name: Option<String>) -> Self {
        let code = if record.code.is_empty() {
            stem.to_string()
        } else {
            record.code
        };
        Self {
            code,
            name: display_name.unwrap_or_default(),
            texture: record
                .texture
                .name(ResourceCategory::Block.ref_prefix())
                .to_string(),
            resistance: record.resistance.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::config::StoreConfig;
    use crate::editor::AssetEditor;
    use crate::error::VsError;
    use crate::store::ModStore;

    #[test]
    fn fixed_defaults() {
        let draft = BlockForm::new("granite", "Granite", "granite", "3.5").build().unwrap();
        let block = draft.record;
        assert_eq!(block.draw_type, "Cube");
        assert_eq!(block.block_material, "Stone");
        assert_eq!(block.texture.base, "block/granite");
        assert_eq!(block.sounds.place, "game:block/dirt");
        assert_eq!(block.sounds.walk, "game:walk/stone");
        assert_eq!(block.resistance, 3.5);
        assert_eq!(draft.display_name.as_deref(), Some("Granite"));
    }

    #[test]
    fn bad_resistance() {
        let form = BlockForm::new("granite", "Granite", "granite", "hard");
        assert!(matches!(
            form.build(),
            Err(VsError::InvalidNumber { field: "resistance", .. })
        ));
    }

    #[test]
    fn rename_scenario() {
        let dir = TempDir::new().unwrap();
        let ws = ModStore::new(StoreConfig::default().with_root(dir.path())).workspace("tinmod");
        let mut editor = AssetEditor::new(&ws);
        editor
            .create(&BlockForm::new("old", "Old", "granite", "2"))
            .unwrap();
        editor
            .update("old", &BlockForm::new("new", "New", "granite", "2"))
            .unwrap();

        assert_eq!(ws.list(AssetKind::Block).unwrap(), ["new"]);
        let lang = ws.lang();
        assert_eq!(lang.get("block-new"), Some("New"));
        assert!(!lang.contains_key("block-old"));

        let loaded: BlockForm = editor.load("new").unwrap();
        assert_eq!(loaded, BlockForm::new("new", "New", "granite", "2"));
    }
}
