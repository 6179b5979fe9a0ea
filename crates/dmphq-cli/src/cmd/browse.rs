//! `dmp browse` — the virtual asset browser.
//!
//! Flags map directly onto navigation pins: `--entity` enters an entity
//! folder, `--category` a category folder, `--type` an asset-type folder.
//! The listing shows folders until every applicable dimension is pinned,
//! then leaf assets.

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::cmd::Workspace;
use crate::output::{OutputMode, render};
use dmphq_core::hierarchy::{NavPath, build};
use dmphq_core::model::Asset;
use dmphq_core::record::DimensionKey;

#[derive(Args, Debug)]
pub struct BrowseArgs {
    /// Enter this entity folder.
    #[arg(short, long)]
    pub entity: Option<String>,

    /// Enter this category folder.
    #[arg(short, long)]
    pub category: Option<String>,

    /// Enter this asset-type folder.
    #[arg(short = 't', long = "type")]
    pub asset_type: Option<String>,
}

impl BrowseArgs {
    /// Pins applied in traversal order, exactly as entering folders would.
    fn path(&self) -> NavPath {
        let mut path = NavPath::new();
        if let Some(ref entity) = self.entity {
            path.enter(DimensionKey::Entity, entity.clone());
        }
        if let Some(ref category) = self.category {
            path.enter(DimensionKey::Category, category.clone());
        }
        if let Some(ref ty) = self.asset_type {
            path.enter(DimensionKey::AssetType, ty.clone());
        }
        path
    }
}

#[derive(serde::Serialize)]
struct BrowseView {
    folders: Vec<dmphq_core::hierarchy::Folder>,
    assets: Vec<Asset>,
}

pub fn run_browse(args: &BrowseArgs, output: OutputMode, project_root: &Path) -> Result<()> {
    let workspace = Workspace::load(project_root)?;

    let path = args.path();
    let listing = build(
        &workspace.snapshot.assets,
        &path,
        &workspace.config.descriptors(),
        &workspace.config.catalog(),
    );
    tracing::debug!(
        depth = path.depth(),
        folders = listing.folders.len(),
        leaves = listing.leaves.len(),
        "browse listing built"
    );

    let view = BrowseView {
        folders: listing.folders,
        assets: listing.leaves,
    };

    render(output, &view, |view, w| {
        if view.folders.is_empty() && view.assets.is_empty() {
            return writeln!(w, "(empty)");
        }
        for folder in &view.folders {
            writeln!(w, "{}/  {} ({})", folder.value, folder.label, folder.count)?;
        }
        for asset in &view.assets {
            writeln!(w, "{}  {}", asset.id, asset.name)?;
        }
        Ok(())
    })
}
