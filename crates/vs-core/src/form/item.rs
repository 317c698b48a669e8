use crate::asset::item::FOOD_CATEGORIES;
use crate::asset::{BaseRef, CreativeInventory, ItemType, NutritionProps};
use crate::editor::{AssetForm, Draft};
use crate::error::{VsError, VsResult};
use crate::kind::{AssetKind, ResourceCategory};

use super::{number, optional, required};

/// Fields of the item form.
///
/// Leaving both `satiety` and `food_category` blank makes an inedible item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    /// Item code and file stem.
    pub code: String,
    /// Display name for the language table.
    pub name: String,
    /// Texture name below `textures/item/`.
    pub texture: String,
    /// Optional shape name below `shapes/item/`.
    pub shape: String,
    /// Satiety restored when eaten.
    pub satiety: String,
    /// One of the food categories.
    pub food_category: String,
}

impl ItemForm {
    /// A form with the three required fields filled in.
    pub fn new(code: &str, name: &str, texture: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            texture: texture.to_string(),
            ..Self::default()
        }
    }

    fn nutrition(&self) -> VsResult<Option<NutritionProps>> {
        if optional(&self.satiety).is_none() && optional(&self.food_category).is_none() {
            return Ok(None);
        }
        let satiety = number("satiety", &self.satiety)?;
        let category = required("food category", &self.food_category)?;
        if !FOOD_CATEGORIES.contains(&category) {
            return Err(VsError::Validation(format!(
                "unknown food category \"{category}\" (expected one of {})",
                FOOD_CATEGORIES.join(", ")
            )));
        }
        Ok(Some(NutritionProps {
            food_category: category.to_string(),
            satiety,
        }))
    }
}

impl AssetForm for ItemForm {
    type Record = ItemType;
    const KIND: AssetKind = AssetKind::Item;

    fn build(&self) -> VsResult<Draft<ItemType>> {
        let name = required("name", &self.name)?;
        let code = required("code", &self.code)?;
        let texture = required("texture", &self.texture)?;
        let prefix = ResourceCategory::Item.ref_prefix();

        let record = ItemType {
            code: code.to_string(),
            creative_inventory: CreativeInventory::all_variants(),
            texture: BaseRef::with_prefix(prefix, texture),
            shape: optional(&self.shape).map(|shape| BaseRef::with_prefix(prefix, shape)),
            nutrition_props: self.nutrition()?,
        };
        Ok(Draft {
            stem: code.to_string(),
            record,
            display_name: Some(name.to_string()),
        })
    }

    fn from_record(stem: &str, record: ItemType, display_name: Option<String>) -> Self {
        let prefix = ResourceCategory::Item.ref_prefix();
        let code = if record.code.is_empty() {
            stem.to_string()
        } else {
            record.code
        };
        let (satiety, food_category) = match record.nutrition_props {
            Some(props) => (props.satiety.to_string(), props.food_category),
            None => (String::new(), String::new()),
        };
        Self {
            code,
            name: display_name.unwrap_or_default(),
            texture: record.texture.name(prefix).to_string(),
            shape: record
                .shape
                .map(|s| s.name(prefix).to_string())
                .unwrap_or_default(),
            satiety,
            food_category,
        }
    }
}
