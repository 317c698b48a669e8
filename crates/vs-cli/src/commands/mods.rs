use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(root: Option<&Path>) -> Result<(), String> {
    let store = super::store(root);
    let mods = store.list_mods().map_err(|e| e.to_string())?;

    if mods.is_empty() {
        println!("  No mods found in {}", store.root().display());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Mod id", "Name", "Version", "Authors"]);

    for info in &mods {
        let authors = if info.authors.is_empty() {
            "-".to_string()
        } else {
            info.authors.join(", ")
        };
        table.add_row(vec![&info.mod_id, &info.name, &info.version, &authors]);
    }

    println!("{table}");
    println!();
    println!("  {} mods", mods.len());

    Ok(())
}
