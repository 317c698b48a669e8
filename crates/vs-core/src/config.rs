//! Configuration for a mod store.

use std::path::PathBuf;

use crate::lang::DEFAULT_LOCALE;

/// Where mods live and which language table the forms write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding one sub-directory per mod.
    pub mods_root: PathBuf,
    /// Locale of the language table (`lang/<locale>.json`).
    pub locale: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            mods_root: default_mods_root(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl StoreConfig {
    /// Set the mods root.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.mods_root = root.into();
        self
    }

    /// Set the locale. Blank input keeps the current locale.
    pub fn with_locale(mut self, locale: &str) -> Self {
        let locale = locale.trim();
        if !locale.is_empty() {
            self.locale = locale.to_string();
        }
        self
    }
}

/// `<directory of the running executable>/mods`, or `./mods` when the
/// executable path is unknown.
pub fn default_mods_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("mods")))
        .unwrap_or_else(|| PathBuf::from("mods"))
}
