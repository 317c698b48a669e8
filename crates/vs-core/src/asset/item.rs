use serde::{Deserialize, Serialize};

use super::{BaseRef, CreativeInventory};

/// Food categories accepted in `NutritionProps`.
pub const FOOD_CATEGORIES: [&str; 6] = [
    "Fruit",
    "Vegetable",
    "Protein",
    "Grain",
    "Dairy",
    "NoNutrition",
];

/// `itemtypes/<code>.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ItemType {
    /// Item code, unique within the mod.
    pub code: String,
    /// Creative inventory placement.
    pub creative_inventory: CreativeInventory,
    /// Item texture, `item/<name>`.
    pub texture: BaseRef,
    /// Optional 3D shape, `item/<name>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<BaseRef>,
    /// Present when the item is edible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition_props: Option<NutritionProps>,
}

/// What eating an item gives the player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NutritionProps {
    /// One of [`FOOD_CATEGORIES`].
    pub food_category: String,
    /// Satiety restored.
    pub satiety: f64,
}
