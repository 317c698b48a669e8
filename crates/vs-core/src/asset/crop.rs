use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Prefix of every crop block code.
pub const CROP_CODE_PREFIX: &str = "crop-";

/// Name of the variant group holding the growth stages.
pub const STAGE_GROUP: &str = "stage";

/// Key of the texture slot used by crop shapes.
pub const PLANT_TEXTURE: &str = "plant";

/// `blocktypes/plant/crop/<id>.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CropBlock {
    /// Block code, `crop-<id>`.
    pub code: String,
    /// Variant groups; the first one lists the growth stages.
    pub variantgroups: Vec<VariantGroup>,
    /// Shape per stage, keyed `*-<stage>`.
    pub shape_by_type: IndexMap<String, StageRef>,
    /// Texture slots per stage, keyed `*-<stage>`.
    pub textures_by_type: IndexMap<String, IndexMap<String, StageRef>>,
    /// Drops per stage pattern (`*-<stage>` or `*`).
    pub drops_by_type: IndexMap<String, Vec<CropDrop>>,
    /// Growth properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_props: Option<CropProps>,
}

impl CropBlock {
    /// The crop id, i.e. the code without its `crop-` prefix.
    pub fn id(&self) -> &str {
        self.code.strip_prefix(CROP_CODE_PREFIX).unwrap_or(&self.code)
    }

    /// Growth stages in order, from the first variant group.
    pub fn states(&self) -> &[String] {
        self.variantgroups
            .first()
            .map(|g| g.states.as_slice())
            .unwrap_or(&[])
    }

    /// The `*-<state>` key used by the by-type maps.
    pub fn state_key(state: &str) -> String {
        format!("*-{state}")
    }
}

/// A named list of variant states.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantGroup {
    /// Group code, e.g. `stage`.
    pub code: String,
    /// Ordered state names.
    pub states: Vec<String>,
}

/// `{ "base": "block/plant/crop/<name>" }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageRef {
    /// Resource path relative to its root.
    pub base: String,
}

/// One drop table entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropDrop {
    /// `item` or `block`.
    #[serde(rename = "type")]
    pub drop_type: String,
    /// Code of the dropped stack.
    pub code: String,
    /// Average and variance of the dropped amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<DropQuantity>,
}

impl CropDrop {
    /// An item drop of `avg ± var`.
    pub fn item(code: impl Into<String>, avg: f64, var: f64) -> Self {
        Self {
            drop_type: "item".to_string(),
            code: code.into(),
            quantity: Some(DropQuantity { avg, var }),
        }
    }
}

/// A randomized quantity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropQuantity {
    /// Mean amount.
    pub avg: f64,
    /// Spread around the mean.
    pub var: f64,
}

/// Growth behaviour of a crop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CropProps {
    /// Soil nutrient consumed: `N`, `P` or `K`.
    pub required_nutrient: String,
    /// Nutrient consumed per harvest.
    pub nutrient_consumption: i32,
    /// Number of growth stages.
    pub growth_stages: usize,
    /// Months from planting to ripeness.
    pub total_growth_months: f64,
    /// Temperature below which the crop is damaged.
    pub cold_damage_below: i32,
    /// Growth multiplier once damaged.
    pub damage_growth_stunt_mul: f64,
    /// Yield multiplier for ripe crops hit by cold.
    pub cold_damage_ripe_mul: f64,
    /// Temperature above which the crop is damaged.
    pub heat_damage_above: i32,
    /// Whether the plant regrows after harvest.
    pub multiple_harvests: bool,
}
