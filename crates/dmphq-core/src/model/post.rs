use crate::record::{DimensionKey, Record};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::{ParseEnumError, normalize};

/// Publishing destinations supported by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Facebook,
    Tiktok,
    Youtube,
    Linkedin,
}

impl Platform {
    pub const ALL: [Self; 5] = [
        Self::Instagram,
        Self::Facebook,
        Self::Tiktok,
        Self::Youtube,
        Self::Linkedin,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Facebook => "facebook",
            Self::Tiktok => "tiktok",
            Self::Youtube => "youtube",
            Self::Linkedin => "linkedin",
        }
    }
}

/// Lifecycle of a scheduled post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Scheduled,
    Published,
    Failed,
}

impl PostStatus {
    pub const ALL: [Self; 4] = [Self::Draft, Self::Scheduled, Self::Published, Self::Failed];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Scheduled => "scheduled",
            Self::Published => "published",
            Self::Failed => "failed",
        }
    }
}

/// Engagement counters reported back by a platform after publishing.
///
/// All counters default to zero so partial metric payloads deserialize
/// without error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metrics {
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub saves: u64,
}

impl Metrics {
    /// Scalar engagement score: the sum of all counters, saturating so
    /// that extreme snapshot values rank highest instead of panicking.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.likes
            .saturating_add(self.comments)
            .saturating_add(self.shares)
            .saturating_add(self.saves)
    }
}

/// A social-media post, draft through published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialPost {
    pub id: String,
    pub content: String,
    pub platform: Platform,
    pub status: PostStatus,
    /// Owning business entity id.
    pub entity: String,
    pub tags: Vec<String>,
    pub scheduled_at_us: Option<i64>,
    pub published_at_us: Option<i64>,
    pub created_at_us: i64,
    /// Absent until the platform reports engagement.
    pub metrics: Option<Metrics>,
}

impl Default for SocialPost {
    fn default() -> Self {
        Self {
            id: String::new(),
            content: String::new(),
            platform: Platform::Instagram,
            status: PostStatus::Draft,
            entity: String::new(),
            tags: Vec::new(),
            scheduled_at_us: None,
            published_at_us: None,
            created_at_us: 0,
            metrics: None,
        }
    }
}

impl Record for SocialPost {
    fn id(&self) -> &str {
        &self.id
    }

    fn dimension(&self, key: DimensionKey) -> Option<&str> {
        match key {
            DimensionKey::Entity => Some(&self.entity),
            DimensionKey::Platform => Some(self.platform.as_str()),
            DimensionKey::Status => Some(self.status.as_str()),
            _ => None,
        }
    }

    /// Date preference order: scheduled, then published, then created.
    fn sort_timestamp_us(&self) -> i64 {
        self.scheduled_at_us
            .or(self.published_at_us)
            .unwrap_or(self.created_at_us)
    }

    fn engagement(&self) -> u64 {
        self.metrics.as_ref().map_or(0, Metrics::total)
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.content.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        match normalized.as_str() {
            "instagram" => Ok(Self::Instagram),
            "facebook" => Ok(Self::Facebook),
            "tiktok" => Ok(Self::Tiktok),
            "youtube" => Ok(Self::Youtube),
            "linkedin" => Ok(Self::Linkedin),
            _ => Err(ParseEnumError {
                expected: "platform",
                got: s.to_string(),
            }),
        }
    }
}

impl FromStr for PostStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        match normalized.as_str() {
            "draft" => Ok(Self::Draft),
            "scheduled" => Ok(Self::Scheduled),
            "published" => Ok(Self::Published),
            "failed" => Ok(Self::Failed),
            _ => Err(ParseEnumError {
                expected: "status",
                got: s.to_string(),
            }),
        }
    }
}
