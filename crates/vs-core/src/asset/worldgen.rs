use serde::{Deserialize, Serialize};

/// Placement values the world generator understands.
pub const PLACEMENTS: [&str; 11] = [
    "ReplaceSurface",
    "OnSurface",
    "NearWater",
    "Anywhere",
    "Underground",
    "UnderWater",
    "NearSeaWater",
    "UnderSeaWater",
    "UnderTrees",
    "OnTrees",
    "OnSurfacePlusUnderTree",
];

/// Placement used when none is chosen.
pub const DEFAULT_PLACEMENT: &str = "Underground";

/// `worldgen/<stem>.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WorldGenPatch {
    /// Free-form note.
    pub comment: String,
    /// Blocks this patch places.
    pub block_codes: Vec<String>,
    /// How many blocks per attempt.
    pub quantity: WorldGenQuantity,
    /// Attempts per chunk.
    pub chance: i32,
    /// One of [`PLACEMENTS`].
    pub placement: String,
}

impl Default for WorldGenPatch {
    fn default() -> Self {
        Self {
            comment: String::new(),
            block_codes: Vec::new(),
            quantity: WorldGenQuantity::default(),
            chance: 0,
            placement: DEFAULT_PLACEMENT.to_string(),
        }
    }
}

impl WorldGenPatch {
    /// File stem derived from the first block code.
    pub fn file_stem(&self) -> String {
        file_stem(&self.block_codes)
    }
}

/// `{Avg, Var}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WorldGenQuantity {
    /// Average.
    pub avg: f64,
    /// Variance.
    pub var: f64,
}

/// `<first code with ':' and '-' as '_'>_worldgen`, or `custom_worldgen`
/// when there are no codes.
pub fn file_stem(block_codes: &[String]) -> String {
    let first = block_codes
        .first()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .unwrap_or("custom");
    format!("{}_worldgen", first.replace([':', '-'], "_"))
}

/// Whether `placement` is a known placement value.
pub fn is_placement(placement: &str) -> bool {
    PLACEMENTS.contains(&placement)
}
