use crate::record::{DimensionKey, Record};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::{ParseEnumError, normalize};

/// Brand-asset categories shown as top-level folders in the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetCategory {
    Logo,
    SocialTemplate,
    Document,
    Photo,
    Video,
}

impl AssetCategory {
    pub const ALL: [Self; 5] = [
        Self::Logo,
        Self::SocialTemplate,
        Self::Document,
        Self::Photo,
        Self::Video,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Logo => "logo",
            Self::SocialTemplate => "social-template",
            Self::Document => "document",
            Self::Photo => "photo",
            Self::Video => "video",
        }
    }

    /// Human-readable folder label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Logo => "Logos",
            Self::SocialTemplate => "Social templates",
            Self::Document => "Documents",
            Self::Photo => "Photos",
            Self::Video => "Videos",
        }
    }
}

/// Template formats, meaningful only within the social-template category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetType {
    Story,
    FeedPost,
    Banner,
    Thumbnail,
}

impl AssetType {
    pub const ALL: [Self; 4] = [Self::Story, Self::FeedPost, Self::Banner, Self::Thumbnail];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Story => "story",
            Self::FeedPost => "feed-post",
            Self::Banner => "banner",
            Self::Thumbnail => "thumbnail",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Story => "Stories",
            Self::FeedPost => "Feed posts",
            Self::Banner => "Banners",
            Self::Thumbnail => "Thumbnails",
        }
    }
}

/// A brand asset: one file-like record owned by a business entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Asset {
    pub id: String,
    pub name: String,
    /// Owning business entity id (enumerated in project config).
    pub entity: String,
    pub category: AssetCategory,
    /// Only set for categories that distinguish formats.
    pub asset_type: Option<AssetType>,
    pub tags: Vec<String>,
    pub url: String,
    pub created_at_us: i64,
}

impl Default for Asset {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            entity: String::new(),
            category: AssetCategory::Document,
            asset_type: None,
            tags: Vec::new(),
            url: String::new(),
            created_at_us: 0,
        }
    }
}

impl Record for Asset {
    fn id(&self) -> &str {
        &self.id
    }

    fn dimension(&self, key: DimensionKey) -> Option<&str> {
        match key {
            DimensionKey::Entity => Some(&self.entity),
            DimensionKey::Category => Some(self.category.as_str()),
            DimensionKey::AssetType => self.asset_type.map(AssetType::as_str),
            _ => None,
        }
    }

    fn sort_timestamp_us(&self) -> i64 {
        self.created_at_us
    }

    fn engagement(&self) -> u64 {
        0
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetCategory {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        match normalized.as_str() {
            "logo" => Ok(Self::Logo),
            "social-template" => Ok(Self::SocialTemplate),
            "document" => Ok(Self::Document),
            "photo" => Ok(Self::Photo),
            "video" => Ok(Self::Video),
            _ => Err(ParseEnumError {
                expected: "category",
                got: s.to_string(),
            }),
        }
    }
}

impl FromStr for AssetType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        match normalized.as_str() {
            "story" => Ok(Self::Story),
            "feed-post" => Ok(Self::FeedPost),
            "banner" => Ok(Self::Banner),
            "thumbnail" => Ok(Self::Thumbnail),
            _ => Err(ParseEnumError {
                expected: "asset type",
                got: s.to_string(),
            }),
        }
    }
}
