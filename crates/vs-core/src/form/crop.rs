use indexmap::IndexMap;

use crate::asset::crop::{CROP_CODE_PREFIX, PLANT_TEXTURE, STAGE_GROUP};
use crate::asset::{CropBlock, CropDrop, CropProps, StageRef, VariantGroup};
use crate::editor::{AssetForm, Draft};
use crate::error::{VsError, VsResult};
use crate::kind::{AssetKind, ResourceCategory};

use super::{number, optional, required};

/// Soil nutrients a crop can consume.
pub const NUTRIENTS: [&str; 3] = ["N", "P", "K"];

/// Stages that get their own shape and texture entries.
pub const MAX_STAGE_RESOURCES: usize = 5;

const RIPE_SEED_DROP: f64 = 1.2;
const RIPE_PRODUCE_DROP: f64 = 6.0;
const RIPE_PRODUCE_VAR: f64 = 2.0;
const UNRIPE_SEED_DROP: f64 = 0.7;
const GROWTH_STUNT_MUL: f64 = 0.75;
const COLD_RIPE_MUL: f64 = 0.5;

/// Fields of the crop form.
#[derive(Debug, Clone, PartialEq)]
pub struct CropForm {
    /// Crop id; the block code is `crop-<id>`.
    pub id: String,
    /// Display name for the language table.
    pub name: String,
    /// Comma-separated growth stages, the last one ripe.
    pub states: String,
    /// Shape name per stage; blank entries fall back to `stage-<state>`.
    pub shapes: Vec<String>,
    /// Texture name per stage; blank entries fall back to `stage-<state>`.
    pub textures: Vec<String>,
    /// Seed item code, optional.
    pub seeds: String,
    /// Produce item code, optional.
    pub produce: String,
    /// One of [`NUTRIENTS`].
    pub required_nutrient: String,
    /// Nutrient consumed per harvest.
    pub nutrient_consumption: String,
    /// Months to ripeness.
    pub growth_months: String,
    /// Cold damage threshold.
    pub cold_damage_below: String,
    /// Heat damage threshold.
    pub heat_damage_above: String,
    /// Whether the plant regrows after harvest.
    pub multiple_harvests: bool,
}

impl Default for CropForm {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            states: String::new(),
            shapes: Vec::new(),
            textures: Vec::new(),
            seeds: String::new(),
            produce: String::new(),
            required_nutrient: "N".to_string(),
            nutrient_consumption: "40".to_string(),
            growth_months: "1.2".to_string(),
            cold_damage_below: "-5".to_string(),
            heat_damage_above: "40".to_string(),
            multiple_harvests: false,
        }
    }
}

impl CropForm {
    /// A form with id, name and stages filled in and default growth values.
    pub fn new(id: &str, name: &str, states: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            states: states.to_string(),
            ..Self::default()
        }
    }

    fn parse_states(&self) -> VsResult<Vec<String>> {
        let states: Vec<String> = required("states", &self.states)?
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();
        if states.iter().any(String::is_empty) {
            return Err(VsError::Validation("states cannot contain empty values".into()));
        }
        Ok(states)
    }

    fn props(&self, growth_stages: usize) -> VsResult<CropProps> {
        let nutrient = required("required nutrient", &self.required_nutrient)?;
        if !NUTRIENTS.contains(&nutrient) {
            return Err(VsError::Validation(format!(
                "required nutrient must be N, P or K, got \"{nutrient}\""
            )));
        }
        Ok(CropProps {
            required_nutrient: nutrient.to_string(),
            nutrient_consumption: number("nutrient consumption", &self.nutrient_consumption)?,
            growth_stages,
            total_growth_months: number("growth months", &self.growth_months)?,
            cold_damage_below: number("cold damage", &self.cold_damage_below)?,
            damage_growth_stunt_mul: GROWTH_STUNT_MUL,
            cold_damage_ripe_mul: COLD_RIPE_MUL,
            heat_damage_above: number("heat damage", &self.heat_damage_above)?,
            multiple_harvests: self.multiple_harvests,
        })
    }

    fn drops(&self, ripe: &str) -> IndexMap<String, Vec<CropDrop>> {
        let seeds = optional(&self.seeds);
        let produce = optional(&self.produce);
        let mut drops = IndexMap::new();

        let mut ripe_drops = Vec::new();
        if let Some(seeds) = seeds {
            ripe_drops.push(CropDrop::item(seeds, RIPE_SEED_DROP, 0.0));
        }
        if let Some(produce) = produce {
            ripe_drops.push(CropDrop::item(produce, RIPE_PRODUCE_DROP, RIPE_PRODUCE_VAR));
        }
        if !ripe_drops.is_empty() {
            drops.insert(CropBlock::state_key(ripe), ripe_drops);
        }
        if let Some(seeds) = seeds {
            drops.insert("*".to_string(), vec![CropDrop::item(seeds, UNRIPE_SEED_DROP, 0.0)]);
        }
        drops
    }
}

/// `block/plant/crop/<chosen>` for stage `i`, defaulting to `stage-<state>`.
fn stage_ref(chosen: &[String], i: usize, state: &str) -> StageRef {
    let name = chosen
        .get(i)
        .and_then(|c| optional(c))
        .map_or_else(|| format!("stage-{state}"), str::to_string);
    StageRef {
        base: format!("{}{name}", ResourceCategory::Crop.ref_prefix()),
    }
}

fn stage_name(r: &StageRef) -> String {
    r.base
        .strip_prefix(ResourceCategory::Crop.ref_prefix())
        .unwrap_or(&r.base)
        .to_string()
}

impl AssetForm for CropForm {
    type Record = CropBlock;
    const KIND: AssetKind = AssetKind::Crop;

    fn build(&self) -> VsResult<Draft<CropBlock>> {
        let name = required("name", &self.name)?;
        let id = required("id", &self.id)?;
        let states = self.parse_states()?;
        let crop_props = self.props(states.len())?;

        let mut shape_by_type = IndexMap::new();
        let mut textures_by_type = IndexMap::new();
        for (i, state) in states.iter().enumerate().take(MAX_STAGE_RESOURCES) {
            let key = CropBlock::state_key(state);
            shape_by_type.insert(key.clone(), stage_ref(&self.shapes, i, state));
            let mut slots = IndexMap::new();
            slots.insert(PLANT_TEXTURE.to_string(), stage_ref(&self.textures, i, state));
            textures_by_type.insert(key, slots);
        }
        // parse_states guarantees at least one state
        let ripe = states.last().map_or("", String::as_str);
        let drops_by_type = self.drops(ripe);

        let record = CropBlock {
            code: format!("{CROP_CODE_PREFIX}{id}"),
            variantgroups: vec![VariantGroup {
                code: STAGE_GROUP.to_string(),
                states,
            }],
            shape_by_type,
            textures_by_type,
            drops_by_type,
            crop_props: Some(crop_props),
        };
        Ok(Draft {
            stem: id.to_string(),
            record,
            display_name: Some(name.to_string()),
        })
    }

    fn from_record(stem: &str, record: CropBlock, display_name: Option<String>) -> Self {
        let id = if record.code.is_empty() {
            stem.to_string()
        } else {
            record.id().to_string()
        };
        let states = record.states().to_vec();

        let mut shapes = Vec::new();
        let mut textures = Vec::new();
        for state in states.iter().take(MAX_STAGE_RESOURCES) {
            let key = CropBlock::state_key(state);
            shapes.push(record.shape_by_type.get(&key).map(stage_name).unwrap_or_default());
            textures.push(
                record
                    .textures_by_type
                    .get(&key)
                    .and_then(|slots| slots.get(PLANT_TEXTURE))
                    .map(stage_name)
                    .unwrap_or_default(),
            );
        }

        let seeds = record
            .drops_by_type
            .get("*")
            .and_then(|d| d.first())
            .map(|d| d.code.clone())
            .unwrap_or_default();
        // Ripe drops list the seeds first when there are any.
        let produce = states
            .last()
            .and_then(|ripe| record.drops_by_type.get(&CropBlock::state_key(ripe)))
            .and_then(|d| d.get(usize::from(!seeds.is_empty())))
            .map(|d| d.code.clone())
            .unwrap_or_default();

        let mut form = Self {
            id,
            name: display_name.unwrap_or_default(),
            states: states.join(", "),
            shapes,
            textures,
            seeds,
            produce,
            ..Self::default()
        };
        if let Some(props) = record.crop_props {
            form.required_nutrient = props.required_nutrient;
            form.nutrient_consumption = props.nutrient_consumption.to_string();
            form.growth_months = props.total_growth_months.to_string();
            form.cold_damage_below = props.cold_damage_below.to_string();
            form.heat_damage_above = props.heat_damage_above.to_string();
            form.multiple_harvests = props.multiple_harvests;
        }
        form
    }
}
