use std::fmt;

use serde::{Deserialize, Serialize};

/// Which family of textures or shapes a resource belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    /// Resources referenced by item types.
    Item,
    /// Resources referenced by block types.
    Block,
    /// Per-stage resources referenced by crops.
    Crop,
}

impl ResourceCategory {
    /// All categories, in directory listing order.
    pub const ALL: [ResourceCategory; 3] = [Self::Item, Self::Block, Self::Crop];

    /// Directory segments below `textures/` or `shapes/`.
    pub fn dir_segments(self) -> &'static [&'static str] {
        match self {
            Self::Item => &["item"],
            Self::Block => &["block"],
            Self::Crop => &["block", "plant", "crop"],
        }
    }

    /// Prefix used when an asset refers to a resource of this category,
    /// e.g. `block/plant/crop/` in `block/plant/crop/stage-1`.
    pub fn ref_prefix(self) -> &'static str {
        match self {
            Self::Item => "item/",
            Self::Block => "block/",
            Self::Crop => "block/plant/crop/",
        }
    }

    /// Parse a category name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "item" => Some(Self::Item),
            "block" => Some(Self::Block),
            "crop" => Some(Self::Crop),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item => write!(f, "item"),
            Self::Block => write!(f, "block"),
            Self::Crop => write!(f, "crop"),
        }
    }
}

/// The kind of a mod asset. Each kind has its own directory convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    /// An item type (`itemtypes/`).
    Item,
    /// A block type (`blocktypes/`).
    Block,
    /// A crop block type (`blocktypes/plant/crop/`).
    Crop,
    /// A grid crafting recipe (`recipes/grid/`).
    Recipe,
    /// A world-generation patch (`worldgen/`).
    WorldGen,
    /// A language table (`lang/`).
    Lang,
    /// A PNG texture (`textures/...`).
    Texture(ResourceCategory),
    /// A JSON shape model (`shapes/...`).
    Shape(ResourceCategory),
}

impl AssetKind {
    /// The kinds whose files are JSON records written by the asset forms.
    pub const RECORDS: [AssetKind; 5] = [
        Self::Item,
        Self::Block,
        Self::Crop,
        Self::Recipe,
        Self::WorldGen,
    ];

    /// Directory segments below `assets/<modid>/`.
    pub fn dir_segments(self) -> Vec<&'static str> {
        match self {
            Self::Item => vec!["itemtypes"],
            Self::Block => vec!["blocktypes"],
            Self::Crop => vec!["blocktypes", "plant", "crop"],
            Self::Recipe => vec!["recipes", "grid"],
            Self::WorldGen => vec!["worldgen"],
            Self::Lang => vec!["lang"],
            Self::Texture(category) => {
                let mut segments = vec!["textures"];
                segments.extend_from_slice(category.dir_segments());
                segments
            }
            Self::Shape(category) => {
                let mut segments = vec!["shapes"];
                segments.extend_from_slice(category.dir_segments());
                segments
            }
        }
    }

    /// File extension (without the dot) of files of this kind.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Texture(_) => "png",
            _ => "json",
        }
    }

    /// Prefix of this kind's language-table keys, if it has display names.
    pub fn lang_prefix(self) -> Option<&'static str> {
        match self {
            Self::Item => Some("item-"),
            Self::Block => Some("block-"),
            Self::Crop => Some("block-crop-"),
            _ => None,
        }
    }

    /// Language-table key for an asset of this kind, e.g. `item-copperingot`.
    pub fn lang_key(self, code: &str) -> Option<String> {
        self.lang_prefix().map(|prefix| format!("{prefix}{code}"))
    }

    /// Parse a kind name as typed on the command line.
    ///
    /// Textures and shapes take a category suffix: `item-texture`,
    /// `crop-shape`, and so on.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "item" | "items" => Some(Self::Item),
            "block" | "blocks" => Some(Self::Block),
            "crop" | "crops" => Some(Self::Crop),
            "recipe" | "recipes" => Some(Self::Recipe),
            "worldgen" => Some(Self::WorldGen),
            "lang" => Some(Self::Lang),
            other => {
                let (category, rest) = other.split_once('-')?;
                let category = ResourceCategory::parse(category)?;
                match rest {
                    "texture" | "textures" => Some(Self::Texture(category)),
                    "shape" | "shapes" => Some(Self::Shape(category)),
                    _ => None,
                }
            }
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item => write!(f, "item"),
            Self::Block => write!(f, "block"),
            Self::Crop => write!(f, "crop"),
            Self::Recipe => write!(f, "recipe"),
            Self::WorldGen => write!(f, "worldgen"),
            Self::Lang => write!(f, "lang"),
            Self::Texture(c) => write!(f, "{c}-texture"),
            Self::Shape(c) => write!(f, "{c}-shape"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_record_kinds() {
        assert_eq!(AssetKind::parse("item"), Some(AssetKind::Item));
        assert_eq!(AssetKind::parse("recipes"), Some(AssetKind::Recipe));
        assert_eq!(AssetKind::parse("worldgen"), Some(AssetKind::WorldGen));
        assert_eq!(AssetKind::parse("sound"), None);
    }

    #[test]
    fn parse_resource_kinds() {
        assert_eq!(
            AssetKind::parse("crop-texture"),
            Some(AssetKind::Texture(ResourceCategory::Crop))
        );
        assert_eq!(
            AssetKind::parse("item-shapes"),
            Some(AssetKind::Shape(ResourceCategory::Item))
        );
        assert_eq!(AssetKind::parse("fluid-texture"), None);
        assert_eq!(AssetKind::parse("item-sound"), None);
    }

    #[test]
    fn display_parses_back() {
        let kinds = [
            AssetKind::Item,
            AssetKind::Crop,
            AssetKind::WorldGen,
            AssetKind::Texture(ResourceCategory::Block),
            AssetKind::Shape(ResourceCategory::Crop),
        ];
        for kind in kinds {
            assert_eq!(AssetKind::parse(&kind.to_string()), Some(kind));
        }
    }

    #[test]
    fn lang_keys() {
        assert_eq!(
            AssetKind::Item.lang_key("copperingot").as_deref(),
            Some("item-copperingot")
        );
        assert_eq!(
            AssetKind::Crop.lang_key("onion").as_deref(),
            Some("block-crop-onion")
        );
        assert!(AssetKind::Recipe.lang_key("axe").is_none());
    }

    #[test]
    fn crop_resources_live_under_block_plant() {
        assert_eq!(
            AssetKind::Texture(ResourceCategory::Crop).dir_segments(),
            vec!["textures", "block", "plant", "crop"]
        );
        assert_eq!(AssetKind::Texture(ResourceCategory::Item).extension(), "png");
        assert_eq!(AssetKind::Shape(ResourceCategory::Item).extension(), "json");
    }
}
