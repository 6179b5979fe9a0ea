//! `dmp entities` — list the configured business entities.

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::cmd::Workspace;
use crate::output::{OutputMode, render};
use dmphq_core::record::{DimensionKey, Record};

#[derive(Args, Debug)]
pub struct EntitiesArgs {}

#[derive(serde::Serialize)]
struct EntityView {
    value: String,
    label: String,
    assets: usize,
    posts: usize,
    tasks: usize,
}

pub fn run_entities(_args: &EntitiesArgs, output: OutputMode, project_root: &Path) -> Result<()> {
    let workspace = Workspace::load(project_root)?;

    fn count<R: Record>(records: &[R], value: &str) -> usize {
        records
            .iter()
            .filter(|r| r.dimension(DimensionKey::Entity) == Some(value))
            .count()
    }

    let views: Vec<EntityView> = workspace
        .config
        .entities
        .iter()
        .map(|entity| EntityView {
            value: entity.value.clone(),
            label: entity.label.clone(),
            assets: count(&workspace.snapshot.assets, &entity.value),
            posts: count(&workspace.snapshot.posts, &entity.value),
            tasks: count(&workspace.snapshot.tasks, &entity.value),
        })
        .collect();

    render(output, &views, |views, w| {
        if views.is_empty() {
            return writeln!(w, "No entities configured. Edit .dmphq/config.toml.");
        }
        for view in views {
            writeln!(
                w,
                "{}  {}  (assets:{} posts:{} tasks:{})",
                view.value, view.label, view.assets, view.posts, view.tasks,
            )?;
        }
        Ok(())
    })
}
