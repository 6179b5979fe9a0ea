//! Record types managed by the console: assets, social posts, tasks.
//!
//! Every categorical field is a closed enum with `Display`/`FromStr`
//! roundtrips and lowercase serde renames, so the same value spelling is
//! used in snapshots, config files, CLI flags, and JSON output.

mod asset;
mod post;
mod task;

pub use asset::{Asset, AssetCategory, AssetType};
pub use post::{Metrics, Platform, PostStatus, SocialPost};
pub use task::{Task, TaskStatus};

use std::fmt;

/// Error returned when parsing an enum value from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    pub expected: &'static str,
    pub got: String,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: '{}'", self.expected, self.got)
    }
}

impl std::error::Error for ParseEnumError {}

pub(crate) fn normalize(input: &str) -> String {
    input.trim().to_ascii_lowercase()
}
