use crate::asset::{GridRecipe, RecipeStack};
use crate::editor::{AssetForm, Draft};
use crate::error::{VsError, VsResult};
use crate::kind::AssetKind;
use crate::pattern::{IngredientGrid, MAX_GRID_SIZE};

use super::{number, required};

/// Fields of the grid recipe form.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeForm {
    /// Recipe name and file stem.
    pub name: String,
    /// Ingredient cells.
    pub grid: IngredientGrid,
    /// What the recipe produces; required.
    pub output: Option<RecipeStack>,
    /// Output stack size.
    pub output_quantity: String,
}

impl Default for RecipeForm {
    fn default() -> Self {
        Self {
            name: "new_recipe".to_string(),
            grid: IngredientGrid::default(),
            output: None,
            output_quantity: "1".to_string(),
        }
    }
}

impl RecipeForm {
    /// An empty `size × size` recipe. Fails when `size` exceeds
    /// [`MAX_GRID_SIZE`].
    pub fn new(name: &str, size: usize) -> VsResult<Self> {
        Ok(Self {
            name: name.to_string(),
            grid: IngredientGrid::square(size)?,
            ..Self::default()
        })
    }

    /// Put `stack` into a cell, or clear it with `None`.
    pub fn place(&mut self, row: usize, col: usize, stack: Option<RecipeStack>) -> VsResult<()> {
        self.grid.set(row, col, stack)
    }

    /// Set the output, keeping the quantity field as entered.
    pub fn with_output(mut self, output: RecipeStack) -> Self {
        self.output = Some(output);
        self
    }
}

impl AssetForm for RecipeForm {
    type Record = GridRecipe;
    const KIND: AssetKind = AssetKind::Recipe;

    fn build(&self) -> VsResult<Draft<GridRecipe>> {
        let name = required("name", &self.name)?;
        let (width, height) = (self.grid.width(), self.grid.height());
        if !(1..=MAX_GRID_SIZE).contains(&width) || !(1..=MAX_GRID_SIZE).contains(&height) {
            return Err(VsError::Validation(format!(
                "grid must be between 1x1 and {MAX_GRID_SIZE}x{MAX_GRID_SIZE}, got {width}x{height}"
            )));
        }
        let output = self.output.as_ref().ok_or(VsError::MissingField("output"))?;
        if output.code.trim().is_empty() {
            return Err(VsError::MissingField("output"));
        }
        let quantity: u32 = number("output quantity", &self.output_quantity)?;
        if quantity == 0 {
            return Err(VsError::Validation("output quantity must be at least 1".into()));
        }

        let record = GridRecipe::new(&self.grid, output.clone().with_quantity(quantity))?;
        Ok(Draft {
            stem: name.to_string(),
            record,
            display_name: None,
        })
    }

    fn from_record(stem: &str, record: GridRecipe, _display_name: Option<String>) -> Self {
        let grid = record.grid();
        let has_output = !record.output.code.is_empty();
        Self {
            name: stem.to_string(),
            grid,
            output_quantity: record.output.quantity.to_string(),
            output: has_output.then_some(record.output),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::config::StoreConfig;
    use crate::editor::{AssetEditor, LangUpdate};
    use crate::store::ModStore;

    fn axe() -> RecipeForm {
        let mut form = RecipeForm::new("axe", 3)
            .unwrap()
            .with_output(RecipeStack::item("game:axe"));
        form.place(0, 0, Some(RecipeStack::item("game:stick"))).unwrap();
        form.place(1, 1, Some(RecipeStack::item("game:flint"))).unwrap();
        form.place(2, 2, Some(RecipeStack::item("game:stick"))).unwrap();
        form
    }

    #[test]
    fn axe_scenario() {
        let recipe = axe().build().unwrap().record;
        assert_eq!(recipe.ingredient_pattern, "X__,_A_,__X");
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients["X"].code, "game:stick");
        assert_eq!(recipe.ingredients["A"].code, "game:flint");
        assert!(recipe.enabled);
        assert_eq!(recipe.output.quantity, 1);
    }

    #[test]
    fn output_is_required() {
        let form = RecipeForm::new("axe", 3).unwrap();
        assert!(matches!(form.build(), Err(VsError::MissingField("output"))));
    }

    #[test]
    fn empty_grid_is_accepted() {
        let form = RecipeForm::new("nothing", 2)
            .unwrap()
            .with_output(RecipeStack::block("game:air"));
        let recipe = form.build().unwrap().record;
        assert_eq!(recipe.ingredient_pattern, "__,__");
        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn grid_size_is_bounded() {
        assert!(RecipeForm::new("huge", 6).unwrap_err().is_validation());
        assert!(RecipeForm::new("huge", usize::MAX).unwrap_err().is_validation());

        let form = RecipeForm::new("flat", 0)
            .unwrap()
            .with_output(RecipeStack::item("game:axe"));
        assert!(form.build().unwrap_err().is_validation());
    }

    #[test]
    fn oversized_stored_grid_loads_clamped() {
        let record: GridRecipe = crate::codec::parse(
            r#"{"ingredientPattern":"X","width":4294967296,"height":4294967296,"ingredients":{}}"#,
        )
        .unwrap();
        let form = RecipeForm::from_record("big", record, None);
        assert_eq!(form.grid.width(), MAX_GRID_SIZE);
        assert_eq!(form.grid.height(), MAX_GRID_SIZE);
        assert!(form.grid.is_empty());
    }

    #[test]
    fn output_quantity_is_applied() {
        let form = RecipeForm {
            output_quantity: "4".into(),
            ..axe()
        };
        assert_eq!(form.build().unwrap().record.output.quantity, 4);

        let form = RecipeForm {
            output_quantity: "0".into(),
            ..axe()
        };
        assert!(form.build().unwrap_err().is_validation());
    }

    #[test]
    fn rename_and_reload() {
        let dir = TempDir::new().unwrap();
        let ws = ModStore::new(StoreConfig::default().with_root(dir.path())).workspace("tinmod");
        let mut editor = AssetEditor::new(&ws);
        let outcome = editor.create(&axe()).unwrap();
        assert_eq!(outcome.lang, LangUpdate::NotApplicable);
        assert!(!ws.lang_path().exists());

        let renamed = RecipeForm {
            name: "flint_axe".into(),
            ..axe()
        };
        editor.update("axe", &renamed).unwrap();
        assert_eq!(ws.list(AssetKind::Recipe).unwrap(), ["flint_axe"]);

        let loaded: RecipeForm = editor.load("flint_axe").unwrap();
        assert_eq!(loaded, renamed);
    }
}
