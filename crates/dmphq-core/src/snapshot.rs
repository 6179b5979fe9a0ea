//! The data-fetch boundary: one JSON document holding every record
//! collection.
//!
//! The derivations never do I/O; they take slices from a [`Snapshot`]
//! that was loaded (or received) elsewhere. A missing snapshot file is
//! an empty workspace, not an error — only malformed JSON fails.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::DmphqError;
use crate::model::{Asset, SocialPost, Task};

/// Relative path of the snapshot within a workspace root.
pub const SNAPSHOT_FILE: &str = ".dmphq/data.json";

/// All record collections, keyed by collection name in the JSON form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub assets: Vec<Asset>,
    pub posts: Vec<SocialPost>,
    pub tasks: Vec<Task>,
}

impl Snapshot {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty() && self.posts.is_empty() && self.tasks.is_empty()
    }
}

/// Load the snapshot under `root`.
///
/// A missing file yields an empty snapshot so freshly-initialized
/// workspaces work without one.
///
/// # Errors
///
/// Returns [`DmphqError::Io`] if the file exists but cannot be read, or
/// [`DmphqError::SnapshotParse`] if it is not valid snapshot JSON.
pub fn load_snapshot(root: &Path) -> Result<Snapshot, DmphqError> {
    let path = root.join(SNAPSHOT_FILE);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no snapshot file, starting empty");
        return Ok(Snapshot::default());
    }

    let content = std::fs::read_to_string(&path).map_err(|source| DmphqError::Io {
        path: path.clone(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| DmphqError::SnapshotParse { path, source })
}

/// Serialize and write the snapshot under `root`.
///
/// # Errors
///
/// Returns [`DmphqError::Io`] if the file cannot be written.
pub fn save_snapshot(root: &Path, snapshot: &Snapshot) -> Result<(), DmphqError> {
    let path = root.join(SNAPSHOT_FILE);
    let json = serde_json::to_string_pretty(snapshot).map_err(|source| {
        DmphqError::SnapshotParse {
            path: path.clone(),
            source,
        }
    })?;
    std::fs::write(&path, json).map_err(|source| DmphqError::Io { path, source })
}
