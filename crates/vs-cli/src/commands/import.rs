use std::path::Path;

use vs_core::{AssetKind, ResourceCategory};

pub fn run(
    root: Option<&Path>,
    mod_id: &str,
    what: &str,
    category: &str,
    file: &Path,
) -> Result<(), String> {
    let ws = super::open(root, mod_id)?;
    let category = ResourceCategory::parse(category)
        .ok_or_else(|| format!("unknown category \"{category}\" (expected item, block or crop)"))?;
    let kind = match what {
        "texture" => AssetKind::Texture(category),
        "shape" => AssetKind::Shape(category),
        other => return Err(format!("cannot import \"{other}\" (expected texture or shape)")),
    };

    let target = ws.import(kind, file).map_err(|e| e.to_string())?;
    println!("Imported {kind} {}", target.display());
    Ok(())
}
