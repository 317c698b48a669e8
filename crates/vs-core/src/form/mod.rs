//! Asset forms: the text fields a user fills in, and how they become records.
//!
//! Fields are kept as entered so that validation can report exactly which
//! one is wrong. Each form implements [`AssetForm`](crate::editor::AssetForm)
//! and is saved through [`AssetEditor`](crate::editor::AssetEditor), except
//! [`ModForm`] which creates a whole mod.

/// Block form.
pub mod block;
/// Crop form.
pub mod crop;
/// Item form.
pub mod item;
/// New-mod form and version edits.
pub mod modinfo;
/// Grid recipe form.
pub mod recipe;
/// World-generation form.
pub mod worldgen;

use std::str::FromStr;

use crate::error::{VsError, VsResult};

pub use block::BlockForm;
pub use crop::CropForm;
pub use item::ItemForm;
pub use modinfo::{ModForm, set_version};
pub use recipe::RecipeForm;
pub use worldgen::WorldGenForm;

/// The trimmed value of a required field.
pub(crate) fn required<'a>(field: &'static str, value: &'a str) -> VsResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(VsError::MissingField(field));
    }
    Ok(value)
}

/// Parse a required numeric field.
pub(crate) fn number<T: FromStr>(field: &'static str, value: &str) -> VsResult<T> {
    let text = required(field, value)?;
    text.parse().map_err(|_| VsError::InvalidNumber {
        field,
        value: text.to_string(),
    })
}

/// The trimmed value of an optional field, `None` when blank.
pub(crate) fn optional(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
pub(crate) fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
