use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(root: Option<&Path>, mod_id: &str, kind: &str) -> Result<(), String> {
    let ws = super::open(root, mod_id)?;
    let kind = super::parse_kind(kind)?;
    let stems = ws.list(kind).map_err(|e| e.to_string())?;

    if stems.is_empty() {
        println!("  No {kind} files found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if kind.lang_prefix().is_some() {
        let lang = ws.lang();
        table.set_header(vec!["Code", "Name"]);
        for stem in &stems {
            let name = kind
                .lang_key(stem)
                .and_then(|key| lang.get(&key).map(str::to_string))
                .unwrap_or_else(|| "-".to_string());
            table.add_row(vec![stem, &name]);
        }
    } else {
        table.set_header(vec!["Name"]);
        for stem in &stems {
            table.add_row(vec![stem]);
        }
    }

    println!("{table}");
    println!();
    println!("  {} {kind} files", stems.len());

    Ok(())
}
