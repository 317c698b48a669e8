//! The create / update pipeline shared by every asset form.
//!
//! A form validates its fields and builds a [`Draft`]; [`AssetEditor`] then
//! removes a renamed asset's old file, writes the new one, brings the
//! language table in line, and finally notifies the caller.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::error::VsResult;
use crate::kind::AssetKind;
use crate::store::ModWorkspace;

/// A validated record ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft<R> {
    /// File stem the record is stored under.
    pub stem: String,
    /// The record itself.
    pub record: R,
    /// Display name for the language table, for kinds that have one.
    pub display_name: Option<String>,
}

/// An editable asset form.
pub trait AssetForm: Sized {
    /// The record written to disk.
    type Record: Serialize + DeserializeOwned + Default;

    /// Kind of asset this form edits.
    const KIND: AssetKind;

    /// Validate the fields and build the record. Nothing is written when
    /// this fails.
    fn build(&self) -> VsResult<Draft<Self::Record>>;

    /// Pre-fill a form from a stored record.
    fn from_record(stem: &str, record: Self::Record, display_name: Option<String>) -> Self;
}

/// Whether a save created a new asset or rewrote an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveAction {
    /// No previous identity was given.
    Created,
    /// An existing asset was edited, possibly under a new name.
    Updated,
}

impl fmt::Display for SaveAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Updated => write!(f, "updated"),
        }
    }
}

/// What happened to the language table during a save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LangUpdate {
    /// The kind has no display name.
    NotApplicable,
    /// The key was written.
    Written {
        /// The key that now holds the display name.
        key: String,
    },
    /// The asset was saved but the language table could not be written.
    Failed(String),
}

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveOutcome {
    /// Kind of the saved asset.
    pub kind: AssetKind,
    /// File stem the asset was saved under.
    pub stem: String,
    /// Path of the written file.
    pub path: PathBuf,
    /// Created or updated.
    pub action: SaveAction,
    /// Old file removed because the identity changed.
    pub replaced: Option<PathBuf>,
    /// Language table result.
    pub lang: LangUpdate,
}

/// Runs asset saves against one mod workspace.
pub struct AssetEditor<'a> {
    workspace: &'a ModWorkspace,
    on_saved: Option<Box<dyn FnMut(&SaveOutcome) + 'a>>,
}

impl fmt::Debug for AssetEditor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetEditor")
            .field("workspace", self.workspace)
            .field("on_saved", &self.on_saved.is_some())
            .finish()
    }
}

impl<'a> AssetEditor<'a> {
    /// An editor for `workspace`.
    pub fn new(workspace: &'a ModWorkspace) -> Self {
        Self {
            workspace,
            on_saved: None,
        }
    }

    /// Call `f` once after every successful save.
    pub fn on_saved(mut self, f: impl FnMut(&SaveOutcome) + 'a) -> Self {
        self.on_saved = Some(Box::new(f));
        self
    }

    /// Save a new asset. An existing file with the same stem is overwritten.
    pub fn create<F: AssetForm>(&mut self, form: &F) -> VsResult<SaveOutcome> {
        self.save(None, form)
    }

    /// Save an edited asset previously stored as `previous`.
    pub fn update<F: AssetForm>(&mut self, previous: &str, form: &F) -> VsResult<SaveOutcome> {
        self.save(Some(previous), form)
    }

    /// Pre-fill a form from the record stored as `stem`.
    pub fn load<F: AssetForm>(&self, stem: &str) -> VsResult<F> {
        let record = self.workspace.load::<F::Record>(F::KIND, stem)?;
        let display_name = self.workspace.display_name(F::KIND, stem);
        Ok(F::from_record(stem, record, display_name))
    }

    fn save<F: AssetForm>(&mut self, previous: Option<&str>, form: &F) -> VsResult<SaveOutcome> {
        let kind = F::KIND;
        let draft = form.build()?;
        let ws = self.workspace;

        let renamed_from = previous
            .map(str::trim)
            .filter(|old| !old.is_empty() && *old != draft.stem);
        let replaced = renamed_from.and_then(|old| {
            let old_path = ws.paths().file(kind, old);
            ws.remove(kind, old).then_some(old_path)
        });

        let path = ws.write(kind, &draft.stem, &draft.record)?;
        let lang = self.sync_lang(kind, renamed_from, &draft);

        let outcome = SaveOutcome {
            kind,
            stem: draft.stem,
            path,
            action: if previous.is_some() {
                SaveAction::Updated
            } else {
                SaveAction::Created
            },
            replaced,
            lang,
        };
        info!(kind = %kind, stem = %outcome.stem, action = %outcome.action, "asset saved");

        if let Some(callback) = self.on_saved.as_mut() {
            callback(&outcome);
        }
        Ok(outcome)
    }

    fn sync_lang<R>(
        &self,
        kind: AssetKind,
        renamed_from: Option<&str>,
        draft: &Draft<R>,
    ) -> LangUpdate {
        let key = kind.lang_key(&draft.stem);
        let (Some(key), Some(name)) = (key, draft.display_name.as_deref()) else {
            return LangUpdate::NotApplicable;
        };
        let old_key = renamed_from.and_then(|old| kind.lang_key(old));

        let result = self.workspace.update_lang(|table| match &old_key {
            Some(old_key) => table.rename(old_key, key.clone(), name),
            None => {
                table.upsert(key.clone(), name);
            }
        });
        match result {
            Ok(_) => LangUpdate::Written { key },
            Err(e) => {
                warn!(key = %key, error = %e, "asset saved but language table was not updated");
                LangUpdate::Failed(e.to_string())
            }
        }
    }
}
