use std::path::Path;

use clap::Args;
use vs_core::form::CropForm;

#[derive(Args)]
pub struct CropArgs {
    /// Mod id
    mod_id: String,

    /// Crop id; the block code becomes crop-<id>
    id: String,

    /// Display name
    #[arg(short, long)]
    name: Option<String>,

    /// Comma-separated growth stages, ripe stage last (e.g. 1,2,3,4,5)
    #[arg(short, long)]
    states: Option<String>,

    /// Shape per stage, in stage order (repeatable, at most five)
    #[arg(long = "shape", value_name = "SHAPE")]
    shapes: Vec<String>,

    /// Texture per stage, in stage order (repeatable, at most five)
    #[arg(long = "texture", value_name = "TEXTURE")]
    textures: Vec<String>,

    /// Seed item code
    #[arg(long)]
    seeds: Option<String>,

    /// Produce item code
    #[arg(long)]
    produce: Option<String>,

    /// Required soil nutrient: N, P or K
    #[arg(long)]
    nutrient: Option<String>,

    /// Nutrient consumption
    #[arg(long)]
    consumption: Option<String>,

    /// Total growth months
    #[arg(long)]
    months: Option<String>,

    /// Cold damage below this temperature
    #[arg(long, allow_hyphen_values = true)]
    cold: Option<String>,

    /// Heat damage above this temperature
    #[arg(long, allow_hyphen_values = true)]
    heat: Option<String>,

    /// Regrow after harvest (`--multiple-harvests false` to turn off)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    multiple_harvests: Option<bool>,

    /// Edit the crop stored under this id instead of creating one
    #[arg(short, long, value_name = "OLD")]
    edit: Option<String>,
}

pub fn run(root: Option<&Path>, args: CropArgs) -> Result<(), String> {
    let ws = super::open(root, &args.mod_id)?;
    let edit = args.edit.as_deref();

    let mut form: CropForm = super::start_form(&ws, edit)?;
    form.id = args.id;
    super::set(&mut form.name, args.name);
    super::set(&mut form.states, args.states);
    if !args.shapes.is_empty() {
        form.shapes = args.shapes;
    }
    if !args.textures.is_empty() {
        form.textures = args.textures;
    }
    super::set(&mut form.seeds, args.seeds);
    super::set(&mut form.produce, args.produce);
    super::set(&mut form.required_nutrient, args.nutrient);
    super::set(&mut form.nutrient_consumption, args.consumption);
    super::set(&mut form.growth_months, args.months);
    super::set(&mut form.cold_damage_below, args.cold);
    super::set(&mut form.heat_damage_above, args.heat);
    if let Some(multiple) = args.multiple_harvests {
        form.multiple_harvests = multiple;
    }

    super::save(&ws, edit, &form)
}
