//! `dmp assets` — flat asset listing with the same pipeline as posts.

use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use std::path::Path;

use crate::cmd::{Workspace, canonical_flag, format_timestamp};
use crate::output::{OutputMode, Renderable, render_list};
use dmphq_core::error::DmphqError;
use dmphq_core::filter::FilterSpec;
use dmphq_core::model::{Asset, AssetCategory, AssetType};
use dmphq_core::record::DimensionKey;
use dmphq_core::sort::{SortDirection, SortSpec, apply};

#[derive(Args, Debug)]
pub struct AssetsArgs {
    /// Filter by business entity.
    #[arg(short, long)]
    pub entity: Option<String>,

    /// Filter by category: logo, social-template, document, photo, video.
    #[arg(short, long)]
    pub category: Option<String>,

    /// Filter by asset type: story, feed-post, banner, thumbnail.
    #[arg(short = 't', long = "type")]
    pub asset_type: Option<String>,

    /// Case-insensitive substring search over name and tags.
    #[arg(short = 'q', long)]
    pub search: Option<String>,

    /// Sort direction: asc, desc.
    #[arg(long, default_value = "desc")]
    pub direction: String,

    /// Maximum assets to show.
    #[arg(short = 'n', long, default_value = "50")]
    pub limit: usize,
}

struct AssetRow {
    asset: Asset,
}

impl Renderable for AssetRow {
    fn render_human(&self, w: &mut dyn Write) -> io::Result<()> {
        let ty = self
            .asset
            .asset_type
            .map_or("-", |t| t.as_str());
        writeln!(
            w,
            "{}  [{}/{}]  {}  {}",
            self.asset.id,
            self.asset.category,
            ty,
            format_timestamp(self.asset.created_at_us),
            self.asset.name,
        )
    }

    fn render_json(&self, w: &mut dyn Write) -> io::Result<()> {
        let value = serde_json::json!({
            "id": self.asset.id,
            "name": self.asset.name,
            "entity": self.asset.entity,
            "category": self.asset.category,
            "type": self.asset.asset_type,
            "created_at_us": self.asset.created_at_us,
        });
        serde_json::to_writer(w, &value).map_err(io::Error::other)
    }

    fn render_table(&self, w: &mut dyn Write) -> io::Result<()> {
        let ty = self
            .asset
            .asset_type
            .map_or("-", |t| t.as_str());
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}",
            self.asset.id, self.asset.entity, self.asset.category, ty, self.asset.name,
        )
    }

    fn table_headers() -> &'static [&'static str] {
        &["id", "entity", "category", "type", "name"]
    }
}

pub fn run_assets(args: &AssetsArgs, output: OutputMode, project_root: &Path) -> Result<()> {
    let workspace = Workspace::load(project_root)?;

    let category = canonical_flag::<AssetCategory>(args.category.as_deref())?;
    let asset_type = canonical_flag::<AssetType>(args.asset_type.as_deref())?;
    let filter = FilterSpec::new()
        .dimension_opt(DimensionKey::Entity, args.entity.as_deref())
        .dimension_opt(DimensionKey::Category, category.as_deref())
        .dimension_opt(DimensionKey::AssetType, asset_type.as_deref())
        .search(args.search.clone().unwrap_or_default());

    let spec = SortSpec {
        direction: args
            .direction
            .parse::<SortDirection>()
            .map_err(DmphqError::from)?,
        ..Default::default()
    };

    let mut assets = apply(&workspace.snapshot.assets, &filter, spec);
    assets.truncate(args.limit);
    tracing::debug!(shown = assets.len(), "assets listed");

    let rows: Vec<AssetRow> = assets.into_iter().map(|asset| AssetRow { asset }).collect();
    render_list(&rows, output)?;
    Ok(())
}
