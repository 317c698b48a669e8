#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable
#![allow(missing_docs)] // integration test crate

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn vsc(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("vsc").unwrap();
    cmd.arg("--root").arg(root);
    cmd
}

/// A mods root holding one freshly created mod, `tinmod`.
fn test_mod() -> TempDir {
    let root = TempDir::new().unwrap();
    vsc(root.path())
        .args(["init", "tinmod", "--name", "Tin Mod", "--author", "Ana"])
        .assert()
        .success();
    root
}

fn assets(root: &TempDir) -> PathBuf {
    root.path().join("tinmod/assets/tinmod")
}

// ---------------------------------------------------------------------------
// init / mods / version
// ---------------------------------------------------------------------------

#[test]
fn init_creates_modinfo() {
    let root = TempDir::new().unwrap();
    vsc(root.path())
        .args(["init", "tinmod", "--name", "Tin Mod", "--author", "Ana"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created mod 'Tin Mod'"));

    let modinfo = fs::read_to_string(root.path().join("tinmod/modinfo.json")).unwrap();
    assert!(modinfo.contains("\"type\": \"content\""));
    assert!(modinfo.contains("\"modid\": \"tinmod\""));
    assert!(modinfo.contains("\"version\": \"1.0.0\""));
}

#[test]
fn init_fails_if_mod_exists() {
    let root = test_mod();
    vsc(root.path())
        .args(["init", "tinmod", "--name", "Again", "--author", "Ana"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("mod already exists"));
}

#[test]
fn init_requires_author() {
    let root = TempDir::new().unwrap();
    vsc(root.path())
        .args(["init", "tinmod", "--name", "Tin Mod", "--author", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required field: author"));
}

#[test]
fn mods_lists_created_mods() {
    let root = test_mod();
    vsc(root.path())
        .arg("mods")
        .assert()
        .success()
        .stdout(predicate::str::contains("tinmod").and(predicate::str::contains("Tin Mod")));
}

#[test]
fn mods_on_empty_root() {
    let root = TempDir::new().unwrap();
    vsc(root.path())
        .arg("mods")
        .assert()
        .success()
        .stdout(predicate::str::contains("No mods found"));
}

#[test]
fn version_updates_modinfo() {
    let root = test_mod();
    vsc(root.path())
        .args(["version", "tinmod", "1.2.3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.2.3"));

    let modinfo = fs::read_to_string(root.path().join("tinmod/modinfo.json")).unwrap();
    assert!(modinfo.contains("\"version\": \"1.2.3\""));
    assert!(modinfo.contains("\"name\": \"Tin Mod\""));
}

#[test]
fn version_rejects_bad_format() {
    let root = test_mod();
    vsc(root.path())
        .args(["version", "tinmod", "1.2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid version"));
}

#[test]
fn unknown_mod_fails() {
    let root = TempDir::new().unwrap();
    vsc(root.path())
        .args(["list", "ghost", "item"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("mod not found"));
}

// ---------------------------------------------------------------------------
// item / block
// ---------------------------------------------------------------------------

#[test]
fn item_writes_file_and_lang() {
    let root = test_mod();
    vsc(root.path())
        .args([
            "item",
            "tinmod",
            "copperingot",
            "--name",
            "Copper Ingot",
            "--texture",
            "copperingot",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created item 'copperingot'"));

    let item = fs::read_to_string(assets(&root).join("itemtypes/copperingot.json")).unwrap();
    assert!(item.contains("\"Code\": \"copperingot\""));
    let lang = fs::read_to_string(assets(&root).join("lang/en.json")).unwrap();
    assert!(lang.contains("\"item-copperingot\": \"Copper Ingot\""));
}

#[test]
fn item_without_texture_fails() {
    let root = test_mod();
    vsc(root.path())
        .args(["item", "tinmod", "copperingot", "--name", "Copper Ingot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("texture"));
    assert!(!assets(&root).join("itemtypes").exists());
}

#[test]
fn block_rename_moves_file_and_key() {
    let root = test_mod();
    vsc(root.path())
        .args([
            "block", "tinmod", "old", "--name", "Old", "--texture", "granite", "--resistance", "2",
        ])
        .assert()
        .success();
    vsc(root.path())
        .args(["block", "tinmod", "new", "--name", "New", "--edit", "old"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated block 'new'"));

    assert!(!assets(&root).join("blocktypes/old.json").exists());
    let block = fs::read_to_string(assets(&root).join("blocktypes/new.json")).unwrap();
    assert!(block.contains("\"Base\": \"block/granite\""));
    assert!(block.contains("\"Resistance\": 2.0"));

    let lang = fs::read_to_string(assets(&root).join("lang/en.json")).unwrap();
    assert!(lang.contains("\"block-new\": \"New\""));
    assert!(!lang.contains("block-old"));
}

#[test]
fn block_with_bad_resistance_fails() {
    let root = test_mod();
    vsc(root.path())
        .args([
            "block", "tinmod", "granite", "--name", "Granite", "--texture", "granite",
            "--resistance", "hard",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid number for resistance"));
}

// ---------------------------------------------------------------------------
// crop / recipe / worldgen
// ---------------------------------------------------------------------------

#[test]
fn crop_writes_stage_maps() {
    let root = test_mod();
    vsc(root.path())
        .args([
            "crop",
            "tinmod",
            "onion",
            "--name",
            "Onion",
            "--states",
            "1,2,3",
            "--seeds",
            "tinmod:seeds-onion",
            "--cold",
            "-10",
            "--multiple-harvests",
        ])
        .assert()
        .success();

    let crop =
        fs::read_to_string(assets(&root).join("blocktypes/plant/crop/onion.json")).unwrap();
    assert!(crop.contains("\"code\": \"crop-onion\""));
    assert!(crop.contains("\"*-3\""));
    assert!(crop.contains("\"coldDamageBelow\": -10"));
    assert!(crop.contains("\"multipleHarvests\": true"));
    let lang = fs::read_to_string(assets(&root).join("lang/en.json")).unwrap();
    assert!(lang.contains("\"block-crop-onion\": \"Onion\""));
}

#[test]
fn recipe_encodes_pattern() {
    let root = test_mod();
    vsc(root.path())
        .args([
            "recipe",
            "tinmod",
            "axe",
            "--cell",
            "0,0=game:stick",
            "--cell",
            "1,1=game:flint",
            "--cell",
            "2,2=game:stick",
            "--output",
            "game:axe",
        ])
        .assert()
        .success();

    let recipe = fs::read_to_string(assets(&root).join("recipes/grid/axe.json")).unwrap();
    assert!(recipe.contains("\"ingredientPattern\": \"X__,_A_,__X\""));
    assert!(!assets(&root).join("lang/en.json").exists());

    vsc(root.path())
        .args(["show", "tinmod", "recipe", "axe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("game:flint").and(predicate::str::contains("game:axe")));
}

#[test]
fn recipe_requires_output() {
    let root = test_mod();
    vsc(root.path())
        .args(["recipe", "tinmod", "axe", "--cell", "0,0=game:stick"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("output"));
}

#[test]
fn recipe_edit_keeps_grid() {
    let root = test_mod();
    vsc(root.path())
        .args([
            "recipe", "tinmod", "axe", "--cell", "0,0=game:stick", "--output", "game:axe",
        ])
        .assert()
        .success();
    vsc(root.path())
        .args([
            "recipe",
            "tinmod",
            "axe",
            "--edit",
            "axe",
            "--block-cell",
            "1,1=game:rock-granite",
            "--quantity",
            "2",
        ])
        .assert()
        .success();

    let recipe = fs::read_to_string(assets(&root).join("recipes/grid/axe.json")).unwrap();
    assert!(recipe.contains("\"ingredientPattern\": \"X__,_A_,___\""));
    assert!(recipe.contains("\"type\": \"block\""));
    assert!(recipe.contains("\"quantity\": 2"));
}

#[test]
fn recipe_rejects_oversized_grid() {
    let root = test_mod();
    for size in ["6", "100000", "4294967296"] {
        vsc(root.path())
            .args(["recipe", "tinmod", "axe", "--size", size, "--output", "game:axe"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("grid size must be between 1 and 5"));
    }
    assert!(!assets(&root).join("recipes").exists());
}

#[test]
fn show_clamps_oversized_stored_grid() {
    let root = test_mod();
    let dir = assets(&root).join("recipes/grid");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("big.json"),
        r#"{"ingredientPattern":"X","width":4294967296,"height":4294967296,
            "ingredients":{"X":{"type":"item","code":"game:stick","quantity":1}},
            "output":{"type":"item","code":"game:axe","quantity":1}}"#,
    )
    .unwrap();

    vsc(root.path())
        .args(["show", "tinmod", "recipe", "big"])
        .assert()
        .success()
        .stdout(predicate::str::contains("game:stick").and(predicate::str::contains("game:axe")));

    vsc(root.path())
        .args(["recipe", "tinmod", "big", "--edit", "big"])
        .assert()
        .success();
    let recipe = fs::read_to_string(dir.join("big.json")).unwrap();
    assert!(recipe.contains("\"width\": 5"));
    assert!(recipe.contains("\"ingredientPattern\": \"X____,_____,_____,_____,_____\""));
}

#[test]
fn worldgen_derives_file_name() {
    let root = test_mod();
    vsc(root.path())
        .args([
            "worldgen",
            "tinmod",
            "--blocks",
            "tinmod:ore-tin, game:rock",
            "--chance",
            "3",
            "--avg",
            "4",
            "--var",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("tinmod_ore_tin_worldgen"));

    let patch =
        fs::read_to_string(assets(&root).join("worldgen/tinmod_ore_tin_worldgen.json")).unwrap();
    assert!(patch.contains("\"Placement\": \"Underground\""));
}

// ---------------------------------------------------------------------------
// list / show / import / lang
// ---------------------------------------------------------------------------

#[test]
fn list_shows_display_names() {
    let root = test_mod();
    vsc(root.path())
        .args(["item", "tinmod", "tinbar", "--name", "Tin Bar", "--texture", "tinbar"])
        .assert()
        .success();
    vsc(root.path())
        .args(["list", "tinmod", "item"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tinbar").and(predicate::str::contains("Tin Bar")));
}

#[test]
fn list_unknown_kind_fails() {
    let root = test_mod();
    vsc(root.path())
        .args(["list", "tinmod", "sound"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown kind"));
}

#[test]
fn show_missing_asset_fails() {
    let root = test_mod();
    vsc(root.path())
        .args(["show", "tinmod", "block", "marble"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("block not found"));
}

#[test]
fn import_texture_then_list() {
    let root = test_mod();
    let source = root.path().join("tinbar.png");
    fs::write(&source, [0x89, b'P', b'N', b'G']).unwrap();

    vsc(root.path())
        .args(["import", "tinmod", "texture", "item"])
        .arg(&source)
        .assert()
        .success();
    assert!(assets(&root).join("textures/item/tinbar.png").exists());

    vsc(root.path())
        .args(["list", "tinmod", "item-texture"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tinbar"));
}

#[test]
fn import_rejects_wrong_extension() {
    let root = test_mod();
    let source = root.path().join("tinbar.jpg");
    fs::write(&source, "jpeg").unwrap();

    vsc(root.path())
        .args(["import", "tinmod", "texture", "item"])
        .arg(&source)
        .assert()
        .failure()
        .stderr(predicate::str::contains(".png"));
}

#[test]
fn lang_prints_entries() {
    let root = test_mod();
    vsc(root.path())
        .args(["item", "tinmod", "tinbar", "--name", "Tin Bar", "--texture", "tinbar"])
        .assert()
        .success();
    vsc(root.path())
        .args(["lang", "tinmod"])
        .assert()
        .success()
        .stdout(predicate::str::contains("item-tinbar").and(predicate::str::contains("1 entry")));
}
