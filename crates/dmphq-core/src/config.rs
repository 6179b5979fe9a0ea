//! Workspace and user configuration.
//!
//! `.dmphq/config.toml` is the dimension-catalog boundary: it enumerates
//! the business entities and configures the browse gate. Category and
//! type domains are closed enums, so their catalog entries come from the
//! model rather than config. `~/.config/dmphq/config.toml` holds
//! per-user preferences (currently just the output mode).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::DmphqError;
use crate::hierarchy::{CatalogEntry, DimensionCatalog, DimensionDescriptor};
use crate::model::{AssetCategory, AssetType};
use crate::record::DimensionKey;

/// Relative path of the project config within a workspace root.
pub const CONFIG_FILE: &str = ".dmphq/config.toml";

/// One business entity managed by the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityConfig {
    pub value: String,
    pub label: String,
}

/// Settings for the asset browser's folder traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseConfig {
    /// The asset-type level only enumerates while the category dimension
    /// is pinned to this value. `None` disables the level entirely.
    #[serde(default = "default_type_gate")]
    pub asset_type_requires_category: Option<String>,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            asset_type_requires_category: default_type_gate(),
        }
    }
}

/// Per-workspace configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub entities: Vec<EntityConfig>,
    pub browse: BrowseConfig,
}

impl ProjectConfig {
    /// Ordered dimension descriptors for the asset browser:
    /// entity, category, then the (optionally gated) type level.
    #[must_use]
    pub fn descriptors(&self) -> Vec<DimensionDescriptor> {
        let mut descriptors = vec![
            DimensionDescriptor::open(DimensionKey::Entity),
            DimensionDescriptor::open(DimensionKey::Category),
        ];
        if let Some(ref category) = self.browse.asset_type_requires_category {
            descriptors.push(DimensionDescriptor::gated(
                DimensionKey::AssetType,
                DimensionKey::Category,
                category.clone(),
            ));
        }
        descriptors
    }

    /// Full dimension catalog: entities from config, categories and
    /// types from their closed enum domains.
    #[must_use]
    pub fn catalog(&self) -> DimensionCatalog {
        let mut catalog = DimensionCatalog::new();
        catalog.insert(
            DimensionKey::Entity,
            self.entities
                .iter()
                .map(|e| CatalogEntry::new(e.value.clone(), e.label.clone()))
                .collect(),
        );
        catalog.insert(
            DimensionKey::Category,
            AssetCategory::ALL
                .iter()
                .map(|c| CatalogEntry::new(c.as_str(), c.label()))
                .collect(),
        );
        catalog.insert(
            DimensionKey::AssetType,
            AssetType::ALL
                .iter()
                .map(|t| CatalogEntry::new(t.as_str(), t.label()))
                .collect(),
        );
        catalog
    }
}

/// Per-user configuration from the OS config directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Preferred output mode: `pretty`, `text`, or `json`.
    pub output: Option<String>,
}

/// Load the workspace config under `root`, defaulting when absent.
///
/// # Errors
///
/// Returns [`DmphqError::Io`] if the file exists but cannot be read, or
/// [`DmphqError::ConfigParse`] if it is not valid TOML.
pub fn load_project_config(root: &Path) -> Result<ProjectConfig, DmphqError> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(ProjectConfig::default());
    }

    let content = std::fs::read_to_string(&path).map_err(|source| DmphqError::Io {
        path: path.clone(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| DmphqError::ConfigParse { path, source })
}

/// Load per-user preferences; missing file or config dir is defaults.
///
/// # Errors
///
/// Returns [`DmphqError::Io`] on an unreadable file, or
/// [`DmphqError::ConfigParse`] on invalid TOML.
pub fn load_user_config() -> Result<UserConfig, DmphqError> {
    let Some(config_dir) = dirs::config_dir() else {
        return Ok(UserConfig::default());
    };

    let path = config_dir.join("dmphq/config.toml");
    if !path.exists() {
        return Ok(UserConfig::default());
    }

    let content = std::fs::read_to_string(&path).map_err(|source| DmphqError::Io {
        path: path.clone(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| DmphqError::ConfigParse { path, source })
}

/// Walk up from `start` looking for a directory containing `.dmphq/`.
#[must_use]
pub fn find_workspace_root(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start);
    while let Some(dir) = current {
        if dir.join(".dmphq").is_dir() {
            return Some(dir.to_path_buf());
        }
        current = dir.parent();
    }
    None
}

/// Write a starter config and empty snapshot under `root`.
///
/// # Errors
///
/// Returns an error if the `.dmphq/` directory or either file cannot be
/// written.
pub fn init_workspace(root: &Path) -> Result<()> {
    let dir = root.join(".dmphq");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;

    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        let starter = ProjectConfig {
            entities: vec![EntityConfig {
                value: "main".into(),
                label: "Main business".into(),
            }],
            browse: BrowseConfig::default(),
        };
        let toml = toml::to_string_pretty(&starter).context("failed to serialize config")?;
        std::fs::write(&config_path, toml)
            .with_context(|| format!("failed to write {}", config_path.display()))?;
    }

    let snapshot_path = root.join(crate::snapshot::SNAPSHOT_FILE);
    if !snapshot_path.exists() {
        crate::snapshot::save_snapshot(root, &crate::snapshot::Snapshot::default())
            .with_context(|| format!("failed to write {}", snapshot_path.display()))?;
    }

    tracing::info!(root = %root.display(), "initialized dmphq workspace");
    Ok(())
}

fn default_type_gate() -> Option<String> {
    Some(AssetCategory::SocialTemplate.as_str().to_string())
}
