//! Command handlers for the `dmp` binary.
//!
//! Each handler follows the same shape: parse args, load the workspace
//! context, run the pure derivations from `dmphq-core`, render.

pub mod assets;
pub mod browse;
pub mod entities;
pub mod init;
pub mod posts;
pub mod tasks;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use dmphq_core::config::{ProjectConfig, find_workspace_root, load_project_config};
use dmphq_core::error::DmphqError;
use dmphq_core::model::ParseEnumError;
use dmphq_core::snapshot::{Snapshot, load_snapshot};

/// Everything a read command needs: the discovered workspace root, its
/// config, and the current data snapshot.
pub struct Workspace {
    pub root: PathBuf,
    pub config: ProjectConfig,
    pub snapshot: Snapshot,
}

impl Workspace {
    /// Discover and load the workspace at or above `start`.
    ///
    /// # Errors
    ///
    /// Returns [`DmphqError::NotInitialized`] when no `.dmphq/` directory
    /// exists at or above `start`, or the underlying load error when the
    /// config or snapshot cannot be read.
    pub fn load(start: &Path) -> Result<Self, DmphqError> {
        let root = find_workspace_root(start).ok_or_else(|| DmphqError::NotInitialized {
            path: start.to_path_buf(),
        })?;
        let config = load_project_config(&root)?;
        let snapshot = load_snapshot(&root)?;
        let workspace = Self {
            root,
            config,
            snapshot,
        };
        tracing::debug!(
            root = %workspace.root.display(),
            assets = workspace.snapshot.assets.len(),
            posts = workspace.snapshot.posts.len(),
            tasks = workspace.snapshot.tasks.len(),
            "workspace loaded"
        );
        Ok(workspace)
    }
}

/// Validate a closed-domain filter flag against its enum, returning the
/// canonical spelling.
///
/// `"all"` and blank values pass through untouched: they deactivate the
/// filter rather than select from the domain. Free-form dimensions
/// (entity, assignee) skip this and go to the filter as-is.
///
/// # Errors
///
/// Returns [`DmphqError::InvalidEnumValue`] when the value is not in the
/// enum's domain.
pub fn canonical_flag<T>(value: Option<&str>) -> Result<Option<String>, DmphqError>
where
    T: FromStr<Err = ParseEnumError> + ToString,
{
    match value {
        None => Ok(None),
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
                return Ok(Some(raw.to_string()));
            }
            let parsed = raw.parse::<T>()?;
            Ok(Some(parsed.to_string()))
        }
    }
}

/// Format an epoch-microsecond timestamp for human output.
pub fn format_timestamp(us: i64) -> String {
    chrono::DateTime::from_timestamp_micros(us)
        .map_or_else(|| "-".to_string(), |dt| dt.format("%Y-%m-%d %H:%M").to_string())
}
