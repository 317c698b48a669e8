//! Grid recipe pattern encoding.
//!
//! A grid of ingredient cells is stored as a compact pattern string plus a
//! letter → ingredient dictionary:
//!
//! ```text
//! stick .     .          "X__,_A_,__X"
//! .     flint .     =>   X: game:stick
//! .     .     stick      A: game:flint
//! ```
//!
//! Letters are handed out in row-major first-occurrence order starting at
//! `X`, then `A`, `B`, `C`, ... skipping `X`. Existing recipe files depend on
//! this order.

use indexmap::IndexMap;

use crate::asset::RecipeStack;
use crate::error::{VsError, VsResult};

/// Letters available to a pattern, in assignment order.
pub const PATTERN_LETTERS: [char; 26] = [
    'X', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q',
    'R', 'S', 'T', 'U', 'V', 'W', 'Y', 'Z',
];

/// Marks an empty cell in a pattern row.
pub const EMPTY_CELL: char = '_';

/// Separates pattern rows.
pub const ROW_SEPARATOR: &str = ",";

/// Largest crafting grid side.
pub const MAX_GRID_SIZE: usize = 5;

/// Grid side of a fresh recipe.
pub const DEFAULT_GRID_SIZE: usize = 3;

/// A `width × height` crafting grid. Each cell is empty or holds an ingredient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientGrid {
    width: usize,
    height: usize,
    cells: Vec<Option<RecipeStack>>,
}

impl Default for IngredientGrid {
    fn default() -> Self {
        Self::blank(DEFAULT_GRID_SIZE, DEFAULT_GRID_SIZE)
    }
}

impl IngredientGrid {
    /// An empty grid. Neither side may exceed [`MAX_GRID_SIZE`].
    pub fn new(width: usize, height: usize) -> VsResult<Self> {
        if width > MAX_GRID_SIZE || height > MAX_GRID_SIZE {
            return Err(VsError::Validation(format!(
                "grid must be at most {MAX_GRID_SIZE}x{MAX_GRID_SIZE}, got {width}x{height}"
            )));
        }
        Ok(Self::blank(width, height))
    }

    /// An empty `size × size` grid.
    pub fn square(size: usize) -> VsResult<Self> {
        Self::new(size, size)
    }

    fn blank(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The ingredient at `(row, col)`, if any.
    pub fn get(&self, row: usize, col: usize) -> Option<&RecipeStack> {
        self.index(row, col).and_then(|i| self.cells[i].as_ref())
    }

    /// Place or clear the ingredient at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, cell: Option<RecipeStack>) -> VsResult<()> {
        let i = self.index(row, col).ok_or_else(|| {
            VsError::Validation(format!(
                "cell ({row},{col}) is outside the {}x{} grid",
                self.width, self.height
            ))
        })?;
        self.cells[i] = cell;
        Ok(())
    }

    /// One row of cells, or `None` past the last row.
    pub fn row(&self, row: usize) -> Option<&[Option<RecipeStack>]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        self.cells.get(start..start + self.width)
    }

    /// Whether no cell holds an ingredient.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Distinct ingredients in row-major first-occurrence order, by code.
    ///
    /// The first cell holding a code decides its type and quantity.
    pub fn distinct(&self) -> Vec<&RecipeStack> {
        let mut seen: Vec<&RecipeStack> = Vec::new();
        for stack in self.cells.iter().flatten() {
            if !seen.iter().any(|s| s.code == stack.code) {
                seen.push(stack);
            }
        }
        seen
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then_some(row * self.width + col)
    }
}

/// A grid in its stored form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPattern {
    /// Comma-separated rows, e.g. `X__,_A_,__X`.
    pub pattern: String,
    /// Letter → ingredient, in letter assignment order.
    pub ingredients: IndexMap<String, RecipeStack>,
}

/// Encode a grid into a pattern string and ingredient dictionary.
///
/// Fails only when the grid holds more distinct ingredients than there are
/// letters, which a 5×5 grid cannot.
pub fn encode(grid: &IngredientGrid) -> VsResult<EncodedPattern> {
    let distinct = grid.distinct();
    if distinct.len() > PATTERN_LETTERS.len() {
        return Err(VsError::TooManyIngredients(distinct.len()));
    }

    let letters: IndexMap<&str, char> = distinct
        .iter()
        .zip(PATTERN_LETTERS)
        .map(|(stack, letter)| (stack.code.as_str(), letter))
        .collect();

    let ingredients = distinct
        .iter()
        .zip(PATTERN_LETTERS)
        .map(|(stack, letter)| (letter.to_string(), (*stack).clone()))
        .collect();

    let rows: Vec<String> = (0..grid.height())
        .map(|row| {
            grid.row(row)
                .unwrap_or_default()
                .iter()
                .map(|cell| match cell {
                    Some(stack) => letters
                        .get(stack.code.as_str())
                        .copied()
                        .unwrap_or(EMPTY_CELL),
                    None => EMPTY_CELL,
                })
                .collect()
        })
        .collect();

    Ok(EncodedPattern {
        pattern: rows.join(ROW_SEPARATOR),
        ingredients,
    })
}

/// Decode a stored pattern into a `width × height` grid.
///
/// Sides above [`MAX_GRID_SIZE`] are clamped. Rows or characters beyond the
/// grid are ignored, missing ones stay empty, and letters absent from the
/// dictionary decode to empty cells.
pub fn decode(
    pattern: &str,
    ingredients: &IndexMap<String, RecipeStack>,
    width: usize,
    height: usize,
) -> IngredientGrid {
    let (width, height) = (width.min(MAX_GRID_SIZE), height.min(MAX_GRID_SIZE));
    let mut grid = IngredientGrid::blank(width, height);
    if pattern.is_empty() {
        return grid;
    }
    for (row, line) in pattern.split(ROW_SEPARATOR).take(height).enumerate() {
        for (col, ch) in line.chars().take(width).enumerate() {
            if ch == EMPTY_CELL {
                continue;
            }
            let mut key = [0u8; 4];
            if let Some(stack) = ingredients.get(&*ch.encode_utf8(&mut key)) {
                grid.cells[row * width + col] = Some(stack.clone());
            }
        }
    }
    grid
}
