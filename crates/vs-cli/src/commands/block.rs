use std::path::Path;

use clap::Args;
use vs_core::form::BlockForm;

#[derive(Args)]
pub struct BlockArgs {
    /// Mod id
    mod_id: String,

    /// Block code, also the file name
    code: String,

    /// Display name
    #[arg(short, long)]
    name: Option<String>,

    /// Texture name below textures/block/
    #[arg(short, long)]
    texture: Option<String>,

    /// Mining resistance
    #[arg(short, long)]
    resistance: Option<String>,

    /// Edit the block stored under this code instead of creating one
    #[arg(short, long, value_name = "OLD")]
    edit: Option<String>,
}

pub fn run(root: Option<&Path>, args: BlockArgs) -> Result<(), String> {
    let ws = super::open(root, &args.mod_id)?;
    let edit = args.edit.as_deref();

    let mut form: BlockForm = super::start_form(&ws, edit)?;
    form.code = args.code;
    super::set(&mut form.name, args.name);
    super::set(&mut form.texture, args.texture);
    super::set(&mut form.resistance, args.resistance);

    super::save(&ws, edit, &form)
}
