//! Mod asset store for VScreator, a content-mod workbench for Vintage Story.
//!
//! A mod lives under `<mods root>/<modid>/` and keeps its assets as
//! pretty-printed JSON files below `assets/<modid>/`. This crate knows where
//! each kind of asset goes, what its JSON looks like, how grid recipes encode
//! their ingredient pattern, and how display names are merged into the mod's
//! language table. Forms validate user input and turn it into records; the
//! [`AssetEditor`] persists them.

/// On-disk record shapes.
pub mod asset;
/// Reading and writing JSON records.
pub mod codec;
/// Store configuration.
pub mod config;
/// The shared save pipeline: rename, write, language table, refresh.
pub mod editor;
/// Error types used throughout the crate.
pub mod error;
/// Asset forms and mod creation.
pub mod form;
/// Asset kinds and resource categories.
pub mod kind;
/// The per-mod language table.
pub mod lang;
/// Path convention for mod assets.
pub mod paths;
/// Grid recipe pattern encoding and decoding.
pub mod pattern;
/// File-system backed mod store.
pub mod store;

/// Re-export configuration.
pub use config::StoreConfig;
/// Re-export the save pipeline.
pub use editor::{AssetEditor, AssetForm, Draft, LangUpdate, SaveAction, SaveOutcome};
/// Re-export error types.
pub use error::{ParseError, VsError, VsResult};
/// Re-export asset kinds.
pub use kind::{AssetKind, ResourceCategory};
/// Re-export the language table.
pub use lang::LanguageTable;
/// Re-export the pattern grid.
pub use pattern::IngredientGrid;
/// Re-export the store types.
pub use store::{ModStore, ModWorkspace};
