use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::VsResult;
use crate::pattern::{self, IngredientGrid};

/// Whether a recipe stack refers to an item or a block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackType {
    /// An item type.
    #[default]
    Item,
    /// A block type.
    Block,
}

impl StackType {
    /// Parse `item` or `block`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "item" => Some(Self::Item),
            "block" => Some(Self::Block),
            _ => None,
        }
    }
}

impl fmt::Display for StackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item => write!(f, "item"),
            Self::Block => write!(f, "block"),
        }
    }
}

/// An ingredient or output stack: `{type, code, quantity}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeStack {
    /// Item or block.
    #[serde(rename = "type")]
    pub stack_type: StackType,
    /// Full code, e.g. `game:stick`.
    pub code: String,
    /// Stack size.
    pub quantity: u32,
}

impl Default for RecipeStack {
    fn default() -> Self {
        Self {
            stack_type: StackType::Item,
            code: String::new(),
            quantity: 1,
        }
    }
}

impl RecipeStack {
    /// A single item.
    pub fn item(code: impl Into<String>) -> Self {
        Self {
            stack_type: StackType::Item,
            code: code.into(),
            quantity: 1,
        }
    }

    /// A single block.
    pub fn block(code: impl Into<String>) -> Self {
        Self {
            stack_type: StackType::Block,
            code: code.into(),
            quantity: 1,
        }
    }

    /// The same stack with a different size.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }
}

/// `recipes/grid/<name>.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridRecipe {
    /// Whether the game loads the recipe.
    pub enabled: bool,
    /// Comma-separated rows of letters, `_` for empty cells.
    pub ingredient_pattern: String,
    /// Columns.
    pub width: usize,
    /// Rows.
    pub height: usize,
    /// Letter → ingredient dictionary.
    pub ingredients: IndexMap<String, RecipeStack>,
    /// What the recipe produces.
    pub output: RecipeStack,
}

impl Default for GridRecipe {
    fn default() -> Self {
        Self {
            enabled: true,
            ingredient_pattern: String::new(),
            width: 0,
            height: 0,
            ingredients: IndexMap::new(),
            output: RecipeStack::default(),
        }
    }
}

impl GridRecipe {
    /// Build an enabled recipe by encoding `grid`.
    pub fn new(grid: &IngredientGrid, output: RecipeStack) -> VsResult<Self> {
        let encoded = pattern::encode(grid)?;
        Ok(Self {
            enabled: true,
            ingredient_pattern: encoded.pattern,
            width: grid.width(),
            height: grid.height(),
            ingredients: encoded.ingredients,
            output,
        })
    }

    /// Decode the pattern back into a grid of `width × height`.
    pub fn grid(&self) -> IngredientGrid {
        pattern::decode(
            &self.ingredient_pattern,
            &self.ingredients,
            self.width,
            self.height,
        )
    }
}
