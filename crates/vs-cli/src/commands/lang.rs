use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(root: Option<&Path>, mod_id: &str) -> Result<(), String> {
    let ws = super::open(root, mod_id)?;
    let table = ws.lang();

    if table.is_empty() {
        println!("  No language entries in {}", ws.lang_path().display());
        return Ok(());
    }

    let mut out = Table::new();
    out.set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(vec!["Key", "Text"]);
    for (key, text) in table.iter() {
        out.add_row(vec![key, text]);
    }

    println!("{out}");
    println!();
    println!(
        "  {} entr{} ({})",
        table.len(),
        if table.len() == 1 { "y" } else { "ies" },
        ws.locale()
    );

    Ok(())
}
