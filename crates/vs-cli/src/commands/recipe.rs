use std::path::Path;

use clap::Args;
use vs_core::IngredientGrid;
use vs_core::asset::{RecipeStack, StackType};
use vs_core::form::RecipeForm;
use vs_core::pattern::MAX_GRID_SIZE;

#[derive(Args)]
pub struct RecipeArgs {
    /// Mod id
    mod_id: String,

    /// Recipe name, also the file name
    name: String,

    /// Grid side, 1 to 5 (default: 3, or the stored size when editing)
    #[arg(short, long)]
    size: Option<usize>,

    /// Put an item into a cell: ROW,COL=CODE (repeatable, zero-based)
    #[arg(long = "cell", value_name = "ROW,COL=CODE")]
    cells: Vec<String>,

    /// Put a block into a cell: ROW,COL=CODE (repeatable, zero-based)
    #[arg(long = "block-cell", value_name = "ROW,COL=CODE")]
    block_cells: Vec<String>,

    /// Empty a cell: ROW,COL (repeatable)
    #[arg(long = "clear", value_name = "ROW,COL")]
    clear: Vec<String>,

    /// Output code, e.g. game:axe-flint
    #[arg(short, long)]
    output: Option<String>,

    /// Output type: item or block
    #[arg(long)]
    output_type: Option<String>,

    /// Output quantity
    #[arg(short, long)]
    quantity: Option<String>,

    /// Edit the recipe stored under this name instead of creating one
    #[arg(short, long, value_name = "OLD")]
    edit: Option<String>,
}

pub fn run(root: Option<&Path>, args: RecipeArgs) -> Result<(), String> {
    let ws = super::open(root, &args.mod_id)?;
    let edit = args.edit.as_deref();

    let mut form: RecipeForm = super::start_form(&ws, edit)?;
    form.name = args.name;
    if let Some(size) = args.size {
        form.grid = resize(&form.grid, size)?;
    }

    for arg in &args.clear {
        let (row, col) = parse_coords(arg)?;
        form.place(row, col, None).map_err(|e| e.to_string())?;
    }
    let placements = args
        .cells
        .iter()
        .map(|s| (s, StackType::Item))
        .chain(args.block_cells.iter().map(|s| (s, StackType::Block)));
    for (arg, stack_type) in placements {
        let (row, col, code) = parse_cell(arg)?;
        let stack = match stack_type {
            StackType::Item => RecipeStack::item(code),
            StackType::Block => RecipeStack::block(code),
        };
        form.place(row, col, Some(stack)).map_err(|e| e.to_string())?;
    }

    let output_type = args.output_type.as_deref().map(parse_stack_type).transpose()?;
    if let Some(code) = args.output {
        let stack_type = output_type
            .or_else(|| form.output.as_ref().map(|o| o.stack_type))
            .unwrap_or_default();
        form.output = Some(RecipeStack {
            stack_type,
            code,
            quantity: 1,
        });
    } else if let (Some(stack_type), Some(output)) = (output_type, form.output.as_mut()) {
        output.stack_type = stack_type;
    }
    super::set(&mut form.output_quantity, args.quantity);

    super::save(&ws, edit, &form)
}

/// A `size × size` grid keeping the cells of `grid` that still fit.
fn resize(grid: &IngredientGrid, size: usize) -> Result<IngredientGrid, String> {
    if !(1..=MAX_GRID_SIZE).contains(&size) {
        return Err(format!("grid size must be between 1 and {MAX_GRID_SIZE}, got {size}"));
    }
    let mut resized = IngredientGrid::square(size).map_err(|e| e.to_string())?;
    for row in 0..grid.height().min(size) {
        for col in 0..grid.width().min(size) {
            resized
                .set(row, col, grid.get(row, col).cloned())
                .map_err(|e| e.to_string())?;
        }
    }
    Ok(resized)
}

fn parse_stack_type(s: &str) -> Result<StackType, String> {
    StackType::parse(s)
        .ok_or_else(|| format!("unknown output type \"{s}\" (expected item or block)"))
}

/// `ROW,COL`
fn parse_coords(arg: &str) -> Result<(usize, usize), String> {
    let invalid = || format!("invalid cell \"{arg}\": expected ROW,COL");
    let (row, col) = arg.split_once(',').ok_or_else(invalid)?;
    let row = row.trim().parse().map_err(|_| invalid())?;
    let col = col.trim().parse().map_err(|_| invalid())?;
    Ok((row, col))
}

/// `ROW,COL=CODE`
fn parse_cell(arg: &str) -> Result<(usize, usize, String), String> {
    let (coords, code) = arg
        .split_once('=')
        .ok_or_else(|| format!("invalid cell \"{arg}\": expected ROW,COL=CODE"))?;
    let code = code.trim();
    if code.is_empty() {
        return Err(format!("invalid cell \"{arg}\": missing code"));
    }
    let (row, col) = parse_coords(coords)?;
    Ok((row, col, code.to_string()))
}
