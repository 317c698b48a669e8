use std::path::Path;

use clap::Args;
use vs_core::form::ItemForm;

#[derive(Args)]
pub struct ItemArgs {
    /// Mod id
    mod_id: String,

    /// Item code, also the file name
    code: String,

    /// Display name
    #[arg(short, long)]
    name: Option<String>,

    /// Texture name below textures/item/
    #[arg(short, long)]
    texture: Option<String>,

    /// Shape name below shapes/item/ (empty to remove)
    #[arg(long)]
    shape: Option<String>,

    /// Satiety when eaten (empty to make inedible)
    #[arg(long)]
    satiety: Option<String>,

    /// Food category: Fruit, Vegetable, Protein, Grain, Dairy, NoNutrition
    #[arg(long)]
    food_category: Option<String>,

    /// Edit the item stored under this code instead of creating one
    #[arg(short, long, value_name = "OLD")]
    edit: Option<String>,
}

pub fn run(root: Option<&Path>, args: ItemArgs) -> Result<(), String> {
    let ws = super::open(root, &args.mod_id)?;
    let edit = args.edit.as_deref();

    let mut form: ItemForm = super::start_form(&ws, edit)?;
    form.code = args.code;
    super::set(&mut form.name, args.name);
    super::set(&mut form.texture, args.texture);
    super::set(&mut form.shape, args.shape);
    super::set(&mut form.satiety, args.satiety);
    super::set(&mut form.food_category, args.food_category);

    super::save(&ws, edit, &form)
}
