use serde::{Deserialize, Serialize};

/// The only mod type this tool produces.
pub const CONTENT_MOD: &str = "content";

/// Version written when the form leaves it blank.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// `modinfo.json` at the root of a mod directory.
///
/// Older files written with PascalCase keys (`ModId`, `Name`, ...) are
/// accepted on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModInfo {
    /// Mod type, always `content` for new mods.
    #[serde(rename = "type", alias = "Type")]
    pub mod_type: String,
    /// Unique mod id; also the name of the mod directory.
    #[serde(rename = "modid", alias = "ModId", alias = "modId")]
    pub mod_id: String,
    /// Human-readable mod name.
    #[serde(alias = "Name")]
    pub name: String,
    /// Author names.
    #[serde(alias = "Authors")]
    pub authors: Vec<String>,
    /// Free-form description.
    #[serde(alias = "Description")]
    pub description: String,
    /// Version string, `x.y.z`.
    #[serde(alias = "Version")]
    pub version: String,
    /// Where the mod runs (`Universal`, `Client`, `Server`).
    #[serde(alias = "Side", skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    /// Project homepage.
    #[serde(alias = "Website", skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl Default for ModInfo {
    fn default() -> Self {
        Self {
            mod_type: CONTENT_MOD.to_string(),
            mod_id: String::new(),
            name: String::new(),
            authors: Vec::new(),
            description: String::new(),
            version: DEFAULT_VERSION.to_string(),
            side: None,
            website: None,
        }
    }
}

impl ModInfo {
    /// A content mod with the given id and display name.
    pub fn new(mod_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            mod_id: mod_id.into(),
            name: name.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;

    #[test]
    fn serializes_lowercase_keys_in_order() {
        let mut info = ModInfo::new("tinmod", "Tin Mod");
        info.authors.push("Ana".into());
        let text = codec::to_json(&info).unwrap();
        let type_at = text.find("\"type\"").unwrap();
        let modid_at = text.find("\"modid\"").unwrap();
        let version_at = text.find("\"version\"").unwrap();
        assert!(type_at < modid_at && modid_at < version_at);
        assert!(!text.contains("side"));
    }

    #[test]
    fn reads_pascal_case_files() {
        let info: ModInfo = codec::parse(
            r#"{"Type":"content","ModId":"tinmod","Name":"Tin Mod","Authors":["Ana"],"Version":"2.0.0"}"#,
        )
        .unwrap();
        assert_eq!(info.mod_id, "tinmod");
        assert_eq!(info.authors, vec!["Ana".to_string()]);
        assert_eq!(info.version, "2.0.0");
    }

    #[test]
    fn missing_fields_default() {
        let info: ModInfo = codec::parse(r#"{"modid":"tinmod","side":"Universal"}"#).unwrap();
        assert_eq!(info.mod_type, "content");
        assert_eq!(info.version, "1.0.0");
        assert_eq!(info.side.as_deref(), Some("Universal"));
    }
}
