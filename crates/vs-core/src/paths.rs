//! The directory convention shared by every asset form.
//!
//! ```text
//! <mods root>/<modid>/modinfo.json
//! <mods root>/<modid>/assets/<modid>/itemtypes/<code>.json
//! <mods root>/<modid>/assets/<modid>/recipes/grid/<name>.json
//! ...
//! ```

use std::path::{Path, PathBuf};

use crate::kind::AssetKind;

/// Resolve the file path of an asset.
///
/// Pure function of its inputs; it does not check that `mod_id` or `code`
/// are non-empty.
pub fn resolve(mods_root: &Path, mod_id: &str, kind: AssetKind, code: &str) -> PathBuf {
    ModPaths::new(mods_root, mod_id).file(kind, code)
}

/// Paths of one mod below a mods root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModPaths {
    mods_root: PathBuf,
    mod_id: String,
}

impl ModPaths {
    /// Paths for `mod_id` under `mods_root`.
    pub fn new(mods_root: impl Into<PathBuf>, mod_id: impl Into<String>) -> Self {
        Self {
            mods_root: mods_root.into(),
            mod_id: mod_id.into(),
        }
    }

    /// The mod id these paths belong to.
    pub fn mod_id(&self) -> &str {
        &self.mod_id
    }

    /// `<root>/<modid>`
    pub fn mod_dir(&self) -> PathBuf {
        self.mods_root.join(&self.mod_id)
    }

    /// `<root>/<modid>/modinfo.json`
    pub fn modinfo(&self) -> PathBuf {
        self.mod_dir().join("modinfo.json")
    }

    /// `<root>/<modid>/assets/<modid>`
    pub fn assets_dir(&self) -> PathBuf {
        self.mod_dir().join("assets").join(&self.mod_id)
    }

    /// Directory holding assets of `kind`.
    pub fn dir(&self, kind: AssetKind) -> PathBuf {
        let mut dir = self.assets_dir();
        for segment in kind.dir_segments() {
            dir.push(segment);
        }
        dir
    }

    /// File holding the asset `code` of `kind`.
    pub fn file(&self, kind: AssetKind, code: &str) -> PathBuf {
        self.dir(kind).join(format!("{code}.{}", kind.extension()))
    }

    /// Language table for `locale`, e.g. `lang/en.json`.
    pub fn lang_file(&self, locale: &str) -> PathBuf {
        self.file(AssetKind::Lang, locale)
    }
}
