//! File-system backed store of mods and their assets.
//!
//! [`ModStore`] knows the mods root; [`ModWorkspace`] performs every read and
//! write for a single mod. Nothing is cached: listings re-scan directories
//! and records are re-read on demand.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::asset::ModInfo;
use crate::codec;
use crate::config::StoreConfig;
use crate::error::{VsError, VsResult};
use crate::kind::AssetKind;
use crate::lang::LanguageTable;
use crate::paths::ModPaths;

/// All mods under one root directory.
#[derive(Debug, Clone)]
pub struct ModStore {
    config: StoreConfig,
}

impl ModStore {
    /// A store over `config.mods_root`. The directory need not exist yet.
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// The mods root directory.
    pub fn root(&self) -> &Path {
        &self.config.mods_root
    }

    /// Whether a directory for `mod_id` exists.
    pub fn exists(&self, mod_id: &str) -> bool {
        self.workspace(mod_id).paths().mod_dir().is_dir()
    }

    /// Workspace for `mod_id`, without checking that it exists.
    pub fn workspace(&self, mod_id: &str) -> ModWorkspace {
        ModWorkspace {
            paths: ModPaths::new(&self.config.mods_root, mod_id),
            locale: self.config.locale.clone(),
        }
    }

    /// Workspace for an existing mod.
    pub fn open(&self, mod_id: &str) -> VsResult<ModWorkspace> {
        if mod_id.trim().is_empty() || !self.exists(mod_id) {
            return Err(VsError::ModNotFound(mod_id.to_string()));
        }
        Ok(self.workspace(mod_id))
    }

    /// Every mod directory that holds a `modinfo.json`, sorted by id.
    ///
    /// A missing root yields an empty list.
    pub fn list_mods(&self) -> VsResult<Vec<ModInfo>> {
        let root = self.root();
        if !root.is_dir() {
            return Ok(Vec::new());
        }
        let entries = fs::read_dir(root).map_err(|e| VsError::io(root, e))?;
        let mut mods: Vec<ModInfo> = entries
            .filter_map(|e| e.ok())
            .filter(|e| e.path().join("modinfo.json").is_file())
            .filter_map(|e| e.file_name().into_string().ok())
            .map(|dir_name| self.workspace(&dir_name).info())
            .collect();
        mods.sort_by(|a, b| a.mod_id.cmp(&b.mod_id));
        Ok(mods)
    }
}

/// Read and write access to the assets of one mod.
#[derive(Debug, Clone)]
pub struct ModWorkspace {
    paths: ModPaths,
    locale: String,
}

impl ModWorkspace {
    /// The mod id.
    pub fn mod_id(&self) -> &str {
        self.paths.mod_id()
    }

    /// The mod's path convention.
    pub fn paths(&self) -> &ModPaths {
        &self.paths
    }

    /// Locale of the language table this workspace writes.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    // -----------------------------------------------------------------------
    // modinfo.json
    // -----------------------------------------------------------------------

    /// The mod's `modinfo.json`. A missing or malformed file yields defaults
    /// with the directory name as mod id.
    pub fn info(&self) -> ModInfo {
        let mut info: ModInfo = codec::read_lenient(&self.paths.modinfo());
        if info.mod_id.is_empty() {
            info.mod_id = self.mod_id().to_string();
        }
        info
    }

    /// Overwrite `modinfo.json`.
    pub fn write_info(&self, info: &ModInfo) -> VsResult<PathBuf> {
        let path = self.paths.modinfo();
        codec::write_json(&path, info)?;
        Ok(path)
    }

    // -----------------------------------------------------------------------
    // Asset files
    // -----------------------------------------------------------------------

    /// Whether the file for `code` of `kind` exists.
    pub fn exists(&self, kind: AssetKind, code: &str) -> bool {
        self.paths.file(kind, code).is_file()
    }

    /// Sorted file stems of every `kind` file. A missing directory is empty.
    pub fn list(&self, kind: AssetKind) -> VsResult<Vec<String>> {
        let dir = self.paths.dir(kind);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let entries = fs::read_dir(&dir).map_err(|e| VsError::io(&dir, e))?;
        let mut stems: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file() && has_extension(p, kind.extension()))
            .filter_map(|p| p.file_stem().and_then(|s| s.to_str()).map(str::to_string))
            .collect();
        stems.sort();
        Ok(stems)
    }

    /// Read a record, or `None` when its file does not exist.
    ///
    /// A malformed file yields the default record.
    pub fn read<T: DeserializeOwned + Default>(&self, kind: AssetKind, code: &str) -> Option<T> {
        codec::read_existing(&self.paths.file(kind, code))
    }

    /// Read a record that must exist.
    pub fn load<T: DeserializeOwned + Default>(&self, kind: AssetKind, code: &str) -> VsResult<T> {
        self.read(kind, code).ok_or_else(|| VsError::AssetNotFound {
            kind,
            code: code.to_string(),
        })
    }

    /// Write a record, creating its directory. Returns the file path.
    pub fn write<T: Serialize>(
        &self,
        kind: AssetKind,
        code: &str,
        record: &T,
    ) -> VsResult<PathBuf> {
        let path = self.paths.file(kind, code);
        codec::write_json(&path, record)?;
        Ok(path)
    }

    /// Delete the file for `code`. Returns whether a file was removed;
    /// failures (including a missing file) are ignored.
    pub fn remove(&self, kind: AssetKind, code: &str) -> bool {
        let path = self.paths.file(kind, code);
        match fs::remove_file(&path) {
            Ok(()) => {
                info!(path = %path.display(), "removed stale {kind}");
                true
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "could not remove {kind}, ignoring");
                false
            }
        }
    }

    /// Copy a texture (`.png`) or shape (`.json`) into this mod, keeping its
    /// file name and overwriting any existing copy.
    pub fn import(&self, kind: AssetKind, source: &Path) -> VsResult<PathBuf> {
        if !matches!(kind, AssetKind::Texture(_) | AssetKind::Shape(_)) {
            return Err(VsError::Validation(format!("cannot import files of kind {kind}")));
        }
        if !has_extension(source, kind.extension()) {
            return Err(VsError::Validation(format!(
                "{kind} files must be .{}: {}",
                kind.extension(),
                source.display()
            )));
        }
        let file_name = source
            .file_name()
            .ok_or_else(|| VsError::Validation(format!("not a file: {}", source.display())))?;
        let dir = self.paths.dir(kind);
        fs::create_dir_all(&dir).map_err(|e| VsError::io(&dir, e))?;
        let target = dir.join(file_name);
        fs::copy(source, &target).map_err(|e| VsError::io(source, e))?;
        info!(from = %source.display(), to = %target.display(), "imported {kind}");
        Ok(target)
    }

    // -----------------------------------------------------------------------
    // Language table
    // -----------------------------------------------------------------------

    /// Path of this workspace's language table.
    pub fn lang_path(&self) -> PathBuf {
        self.paths.lang_file(&self.locale)
    }

    /// The current language table (empty when missing or malformed).
    pub fn lang(&self) -> LanguageTable {
        LanguageTable::load(&self.lang_path())
    }

    /// Read-modify-write the language table.
    pub fn update_lang<F>(&self, f: F) -> VsResult<LanguageTable>
    where
        F: FnOnce(&mut LanguageTable),
    {
        LanguageTable::update(&self.lang_path(), f)
    }

    /// Display name of an asset, if its kind has one and it is set.
    pub fn display_name(&self, kind: AssetKind, code: &str) -> Option<String> {
        let key = kind.lang_key(code)?;
        self.lang().get(&key).map(str::to_string)
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}
