use std::path::Path;

use clap::Args;
use vs_core::form::WorldGenForm;

#[derive(Args)]
pub struct WorldGenArgs {
    /// Mod id
    mod_id: String,

    /// Comma-separated block codes; the first one names the file
    #[arg(short, long)]
    blocks: Option<String>,

    /// Attempts per chunk
    #[arg(short, long)]
    chance: Option<String>,

    /// Average blocks per attempt
    #[arg(long)]
    avg: Option<String>,

    /// Variation of blocks per attempt
    #[arg(long)]
    var: Option<String>,

    /// Placement, e.g. Underground, OnSurface, NearWater
    #[arg(short, long)]
    placement: Option<String>,

    /// Free-form comment stored in the patch
    #[arg(long)]
    comment: Option<String>,

    /// Edit the patch stored under this file name instead of creating one
    #[arg(short, long, value_name = "OLD")]
    edit: Option<String>,
}

pub fn run(root: Option<&Path>, args: WorldGenArgs) -> Result<(), String> {
    let ws = super::open(root, &args.mod_id)?;
    let edit = args.edit.as_deref();

    let mut form: WorldGenForm = super::start_form(&ws, edit)?;
    super::set(&mut form.block_codes, args.blocks);
    super::set(&mut form.chance, args.chance);
    super::set(&mut form.quantity_avg, args.avg);
    super::set(&mut form.quantity_var, args.var);
    super::set(&mut form.placement, args.placement);
    super::set(&mut form.comment, args.comment);

    super::save(&ws, edit, &form)
}
