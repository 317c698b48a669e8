use std::fs;

use tracing::info;

use crate::asset::ModInfo;
use crate::asset::modinfo::DEFAULT_VERSION;
use crate::error::{VsError, VsResult};
use crate::store::{ModStore, ModWorkspace};

use super::{optional, required};

/// Fields of the new-mod form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModForm {
    /// Mod id; also the directory name.
    pub mod_id: String,
    /// Display name.
    pub name: String,
    /// Single author name.
    pub author: String,
    /// Optional description.
    pub description: String,
    /// Optional version; blank means `1.0.0`.
    pub version: String,
}

impl ModForm {
    /// A form with the required fields filled in.
    pub fn new(mod_id: &str, name: &str, author: &str) -> Self {
        Self {
            mod_id: mod_id.to_string(),
            name: name.to_string(),
            author: author.to_string(),
            ..Self::default()
        }
    }

    /// Validate the fields and build the manifest.
    pub fn build(&self) -> VsResult<ModInfo> {
        let name = required("name", &self.name)?;
        let mod_id = required("mod id", &self.mod_id)?;
        let author = required("author", &self.author)?;
        if mod_id.contains(['/', '\\']) || mod_id == "." || mod_id == ".." {
            return Err(VsError::Validation(format!(
                "mod id \"{mod_id}\" cannot be used as a directory name"
            )));
        }
        let version = match optional(&self.version) {
            Some(v) => check_version(v)?,
            None => DEFAULT_VERSION.to_string(),
        };

        let mut info = ModInfo::new(mod_id, name);
        info.authors = vec![author.to_string()];
        info.description = self.description.trim().to_string();
        info.version = version;
        Ok(info)
    }

    /// Create the mod directory and its `modinfo.json`.
    ///
    /// Refuses when a directory for the mod id already exists.
    pub fn create(&self, store: &ModStore) -> VsResult<ModWorkspace> {
        let info = self.build()?;
        if store.exists(&info.mod_id) {
            return Err(VsError::ModExists(info.mod_id));
        }
        let ws = store.workspace(&info.mod_id);
        let dir = ws.paths().mod_dir();
        fs::create_dir_all(&dir).map_err(|e| VsError::io(&dir, e))?;
        ws.write_info(&info)?;
        info!(mod_id = %info.mod_id, path = %dir.display(), "mod created");
        Ok(ws)
    }
}

/// Change the version in `modinfo.json`, keeping every other field.
pub fn set_version(ws: &ModWorkspace, version: &str) -> VsResult<ModInfo> {
    let version = check_version(required("version", version)?)?;
    let mut info = ws.info();
    info.version = version;
    ws.write_info(&info)?;
    Ok(info)
}

/// `<digits>.<digits>.<digits>`
fn check_version(version: &str) -> VsResult<String> {
    let parts: Vec<&str> = version.split('.').collect();
    let valid = parts.len() == 3
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()));
    if !valid {
        return Err(VsError::InvalidVersion(version.to_string()));
    }
    Ok(version.to_string())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::config::StoreConfig;

    fn store(dir: &TempDir) -> ModStore {
        ModStore::new(StoreConfig::default().with_root(dir.path().join("mods")))
    }

    #[test]
    fn creates_content_mod() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let ws = ModForm::new("tinmod", "Tin Mod", "Ana").create(&store).unwrap();

        let info = ws.info();
        assert_eq!(info.mod_type, "content");
        assert_eq!(info.mod_id, "tinmod");
        assert_eq!(info.authors, ["Ana"]);
        assert_eq!(info.version, "1.0.0");
        assert_eq!(store.list_mods().unwrap().len(), 1);
    }

    #[test]
    fn refuses_existing_mod() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let form = ModForm::new("tinmod", "Tin Mod", "Ana");
        form.create(&store).unwrap();
        assert!(matches!(form.create(&store), Err(VsError::ModExists(_))));
    }

    #[test]
    fn required_fields() {
        assert!(matches!(
            ModForm::new("tinmod", "Tin Mod", "").build(),
            Err(VsError::MissingField("author"))
        ));
        assert!(ModForm::new("../x", "X", "Ana").build().unwrap_err().is_validation());
    }

    #[test]
    fn version_format() {
        assert!(check_version("1.0.0").is_ok());
        assert!(check_version("10.20.300").is_ok());
        for bad in ["1.0", "1.0.0.0", "v1.0.0", "1..0", "1.0.x"] {
            assert!(matches!(check_version(bad), Err(VsError::InvalidVersion(_))), "{bad}");
        }
        let form = ModForm {
            version: "2.1".into(),
            ..ModForm::new("tinmod", "Tin Mod", "Ana")
        };
        assert!(form.build().is_err());
    }

    #[test]
    fn set_version_preserves_other_fields() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let form = ModForm {
            description: "Adds tin".into(),
            ..ModForm::new("tinmod", "Tin Mod", "Ana")
        };
        let ws = form.create(&store).unwrap();

        let info = set_version(&ws, " 1.2.3 ").unwrap();
        assert_eq!(info.version, "1.2.3");
        let reread = ws.info();
        assert_eq!(reread.version, "1.2.3");
        assert_eq!(reread.description, "Adds tin");
        assert_eq!(reread.authors, ["Ana"]);

        assert!(set_version(&ws, "1.2").is_err());
        assert_eq!(ws.info().version, "1.2.3");
    }
}
