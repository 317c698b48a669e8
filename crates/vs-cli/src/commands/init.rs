use std::path::Path;

use colored::Colorize;
use vs_core::form::ModForm;

pub fn run(
    root: Option<&Path>,
    mod_id: &str,
    name: &str,
    author: &str,
    description: &str,
    version: &str,
) -> Result<(), String> {
    let form = ModForm {
        mod_id: mod_id.to_string(),
        name: name.to_string(),
        author: author.to_string(),
        description: description.to_string(),
        version: version.to_string(),
    };
    let store = super::store(root);
    let ws = form.create(&store).map_err(|e| e.to_string())?;
    let info = ws.info();

    println!(
        "Created mod '{}' ({} {})",
        info.name,
        info.mod_id.bold(),
        info.version.dimmed()
    );
    println!("  {}", ws.paths().mod_dir().display());
    println!();
    println!("Get started:");
    println!("  vsc item {} <code> --name <name> --texture <texture>", info.mod_id);
    println!("  vsc list {} item", info.mod_id);

    Ok(())
}
