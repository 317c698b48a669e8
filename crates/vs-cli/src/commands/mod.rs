pub mod block;
pub mod crop;
pub mod import;
pub mod init;
pub mod item;
pub mod lang;
pub mod list;
pub mod mods;
pub mod recipe;
pub mod show;
pub mod version;
pub mod worldgen;

use std::path::Path;

use colored::Colorize;
use tracing::debug;
use vs_core::{
    AssetEditor, AssetForm, AssetKind, LangUpdate, ModStore, ModWorkspace, SaveOutcome,
    StoreConfig,
};

/// The store under `root`, or under the default mods root.
pub fn store(root: Option<&Path>) -> ModStore {
    let config = match root {
        Some(root) => StoreConfig::default().with_root(root),
        None => StoreConfig::default(),
    };
    debug!(root = %config.mods_root.display(), "mods root");
    ModStore::new(config)
}

/// Open an existing mod.
pub fn open(root: Option<&Path>, mod_id: &str) -> Result<ModWorkspace, String> {
    store(root).open(mod_id).map_err(|e| e.to_string())
}

/// Parse a kind argument, listing the accepted names on failure.
pub fn parse_kind(kind: &str) -> Result<AssetKind, String> {
    AssetKind::parse(kind).ok_or_else(|| {
        format!(
            "unknown kind \"{kind}\" (expected item, block, crop, recipe, worldgen, lang, \
             or <item|block|crop>-texture / <item|block|crop>-shape)"
        )
    })
}

/// Pre-fill a form from the asset stored as `edit`, or start from `F::default()`.
pub fn start_form<F: AssetForm + Default>(
    ws: &ModWorkspace,
    edit: Option<&str>,
) -> Result<F, String> {
    match edit {
        Some(previous) => AssetEditor::new(ws).load(previous).map_err(|e| e.to_string()),
        None => Ok(F::default()),
    }
}

/// Save `form` as a new asset, or as an edit of `edit`, and print the result.
pub fn save<F: AssetForm>(ws: &ModWorkspace, edit: Option<&str>, form: &F) -> Result<(), String> {
    let mut editor = AssetEditor::new(ws).on_saved(print_outcome);
    let result = match edit {
        Some(previous) => editor.update(previous, form),
        None => editor.create(form),
    };
    result.map(|_| ()).map_err(|e| e.to_string())
}

fn print_outcome(outcome: &SaveOutcome) {
    println!(
        "{} {} '{}'",
        capitalize(&outcome.action.to_string()),
        outcome.kind,
        outcome.stem
    );
    println!("  file: {}", outcome.path.display());
    if let Some(old) = &outcome.replaced {
        println!("  {} {}", "removed".dimmed(), old.display());
    }
    match &outcome.lang {
        LangUpdate::Written { key } => println!("  lang: {key}"),
        LangUpdate::Failed(reason) => {
            eprintln!("{} language table not updated: {reason}", "warning:".yellow());
        }
        LangUpdate::NotApplicable => {}
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Overwrite `field` when a value was given on the command line.
pub fn set(field: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *field = value;
    }
}
