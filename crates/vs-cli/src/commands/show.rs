use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use vs_core::AssetKind;
use vs_core::asset::GridRecipe;
use vs_core::codec;

pub fn run(root: Option<&Path>, mod_id: &str, kind: &str, code: &str) -> Result<(), String> {
    let ws = super::open(root, mod_id)?;
    let kind = super::parse_kind(kind)?;
    if !AssetKind::RECORDS.contains(&kind) {
        return Err(format!(
            "cannot show {kind} files (expected item, block, crop, recipe or worldgen)"
        ));
    }

    let record: serde_json::Value = ws.load(kind, code).map_err(|e| e.to_string())?;

    // Header
    match ws.display_name(kind, code) {
        Some(name) => println!("  {} [{}]", name.bold(), format!("{kind} {code}").dimmed()),
        None => println!("  {} [{}]", code.bold(), kind.to_string().dimmed()),
    }
    println!("  {}", ws.paths().file(kind, code).display().to_string().dimmed());
    println!();

    if kind == AssetKind::Recipe {
        let recipe: GridRecipe = ws.load(kind, code).map_err(|e| e.to_string())?;
        print_grid(&recipe);
    }

    let text = codec::to_json(&record).map_err(|e| e.to_string())?;
    println!("{text}");

    Ok(())
}

fn print_grid(recipe: &GridRecipe) {
    let grid = recipe.grid();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    for row in 0..grid.height() {
        let cells: Vec<String> = grid
            .row(row)
            .unwrap_or_default()
            .iter()
            .map(|cell| match cell {
                Some(stack) if stack.quantity > 1 => format!("{} x{}", stack.code, stack.quantity),
                Some(stack) => stack.code.clone(),
                None => "·".to_string(),
            })
            .collect();
        table.add_row(cells);
    }
    println!("{table}");
    println!(
        "  => {} x{} ({})",
        recipe.output.code.bold(),
        recipe.output.quantity,
        recipe.output.stack_type
    );
    println!();
}
