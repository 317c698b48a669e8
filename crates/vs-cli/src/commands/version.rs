use std::path::Path;

use colored::Colorize;
use vs_core::form::set_version;

pub fn run(root: Option<&Path>, mod_id: &str, version: &str) -> Result<(), String> {
    let ws = super::open(root, mod_id)?;
    let info = set_version(&ws, version).map_err(|e| e.to_string())?;
    println!("Mod '{}' is now at version {}", info.mod_id, info.version.bold());
    Ok(())
}
