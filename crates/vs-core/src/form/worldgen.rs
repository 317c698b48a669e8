use crate::asset::worldgen::{self, DEFAULT_PLACEMENT};
use crate::asset::{WorldGenPatch, WorldGenQuantity};
use crate::editor::{AssetForm, Draft};
use crate::error::{VsError, VsResult};
use crate::kind::AssetKind;

use super::{number, required, split_list};

/// Fields of the world-generation form.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldGenForm {
    /// Free-form note stored in the patch.
    pub comment: String,
    /// Comma-separated block codes; the first one names the file.
    pub block_codes: String,
    /// Attempts per chunk.
    pub chance: String,
    /// Average blocks per attempt.
    pub quantity_avg: String,
    /// Variance of blocks per attempt.
    pub quantity_var: String,
    /// One of the known placements.
    pub placement: String,
}

impl Default for WorldGenForm {
    fn default() -> Self {
        Self {
            comment: String::new(),
            block_codes: String::new(),
            chance: String::new(),
            quantity_avg: String::new(),
            quantity_var: String::new(),
            placement: DEFAULT_PLACEMENT.to_string(),
        }
    }
}

impl AssetForm for WorldGenForm {
    type Record = WorldGenPatch;
    const KIND: AssetKind = AssetKind::WorldGen;

    fn build(&self) -> VsResult<Draft<WorldGenPatch>> {
        required("block codes", &self.block_codes)?;
        let chance = number("chance", &self.chance)?;
        let avg = number("quantity average", &self.quantity_avg)?;
        let var = number("quantity variation", &self.quantity_var)?;
        let placement = required("placement", &self.placement)?;
        if !worldgen::is_placement(placement) {
            return Err(VsError::Validation(format!("unknown placement \"{placement}\"")));
        }
        let block_codes = split_list(&self.block_codes);
        if block_codes.is_empty() {
            return Err(VsError::Validation("at least one block code is required".into()));
        }

        let record = WorldGenPatch {
            comment: self.comment.clone(),
            quantity: WorldGenQuantity { avg, var },
            chance,
            placement: placement.to_string(),
            block_codes,
        };
        Ok(Draft {
            stem: record.file_stem(),
            record,
            display_name: None,
        })
    }

    fn from_record(_stem: &str, record: WorldGenPatch, _display_name: Option<String>) -> Self {
        Self {
            comment: record.comment,
            block_codes: record.block_codes.join(", "),
            chance: record.chance.to_string(),
            quantity_avg: record.quantity.avg.to_string(),
            quantity_var: record.quantity.var.to_string(),
            placement: record.placement,
        }
    }
}
