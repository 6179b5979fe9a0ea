//! The generic record seam shared by the pipeline and the hierarchy
//! builder.
//!
//! Each list view in the console operates on a different concrete type
//! (assets, posts, tasks) but filters, sorts, and groups them the same
//! way. [`Record`] exposes the handful of accessors those derivations
//! need; [`DimensionKey`] names the categorical fields so that adding a
//! filter dimension never requires a new branch in the pipeline itself.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::model::{ParseEnumError, normalize};

/// Names of the categorical fields used for filtering and grouping.
///
/// A key is meaningful only for record types that carry the field;
/// [`Record::dimension`] returns `None` for the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionKey {
    Entity,
    Category,
    #[serde(rename = "type")]
    AssetType,
    Platform,
    Status,
    Assignee,
}

impl DimensionKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Category => "category",
            Self::AssetType => "type",
            Self::Platform => "platform",
            Self::Status => "status",
            Self::Assignee => "assignee",
        }
    }
}

impl fmt::Display for DimensionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DimensionKey {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        match normalized.as_str() {
            "entity" => Ok(Self::Entity),
            "category" => Ok(Self::Category),
            "type" => Ok(Self::AssetType),
            "platform" => Ok(Self::Platform),
            "status" => Ok(Self::Status),
            "assignee" => Ok(Self::Assignee),
            _ => Err(ParseEnumError {
                expected: "dimension",
                got: s.to_string(),
            }),
        }
    }
}

/// Uniform access to the fields the derivations read.
///
/// Implementations degrade rather than fail: a record with no timestamp
/// reports 0, no metrics reports 0 engagement, and an unset categorical
/// field reports `None`.
pub trait Record {
    /// Stable identifier, unique within the record's collection.
    fn id(&self) -> &str;

    /// Current value of a categorical field, if the record carries it.
    fn dimension(&self, key: DimensionKey) -> Option<&str>;

    /// Epoch-microsecond timestamp used for date sorting, already
    /// resolved through the type's preference order.
    fn sort_timestamp_us(&self) -> i64;

    /// Derived engagement score; 0 when the record has no metrics.
    fn engagement(&self) -> u64;

    /// Text fields scanned by free-text search, in a fixed order.
    fn search_fields(&self) -> Vec<&str>;
}
