//! `dmp posts` — the social calendar list: filter, then rank.

use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use std::path::Path;

use crate::cmd::{Workspace, canonical_flag, format_timestamp};
use crate::output::{OutputMode, Renderable, render_list};
use dmphq_core::error::DmphqError;
use dmphq_core::filter::FilterSpec;
use dmphq_core::model::{Platform, PostStatus, SocialPost};
use dmphq_core::record::{DimensionKey, Record};
use dmphq_core::sort::{SortDirection, SortKey, SortSpec, apply};

#[derive(Args, Debug)]
pub struct PostsArgs {
    /// Filter by platform: instagram, facebook, tiktok, youtube, linkedin.
    #[arg(short, long)]
    pub platform: Option<String>,

    /// Filter by status: draft, scheduled, published, failed.
    #[arg(short, long)]
    pub status: Option<String>,

    /// Filter by business entity.
    #[arg(short, long)]
    pub entity: Option<String>,

    /// Case-insensitive substring search over content and tags.
    #[arg(short = 'q', long)]
    pub search: Option<String>,

    /// Sort key: date, engagement.
    #[arg(long, default_value = "date")]
    pub sort: String,

    /// Sort direction: asc, desc.
    #[arg(long, default_value = "desc")]
    pub direction: String,

    /// Maximum posts to show.
    #[arg(short = 'n', long, default_value = "50")]
    pub limit: usize,
}

struct PostRow {
    post: SocialPost,
}

impl Renderable for PostRow {
    fn render_human(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(
            w,
            "{}  [{}/{}]  {}  eng:{}  {}",
            self.post.id,
            self.post.platform,
            self.post.status,
            format_timestamp(self.post.sort_timestamp_us()),
            self.post.engagement(),
            self.post.content,
        )
    }

    fn render_json(&self, w: &mut dyn Write) -> io::Result<()> {
        let value = serde_json::json!({
            "id": self.post.id,
            "platform": self.post.platform,
            "status": self.post.status,
            "entity": self.post.entity,
            "content": self.post.content,
            "timestamp_us": self.post.sort_timestamp_us(),
            "engagement": self.post.engagement(),
        });
        serde_json::to_writer(w, &value).map_err(io::Error::other)
    }

    fn render_table(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}",
            self.post.id,
            self.post.platform,
            self.post.status,
            self.post.engagement(),
            self.post.content,
        )
    }

    fn table_headers() -> &'static [&'static str] {
        &["id", "platform", "status", "engagement", "content"]
    }
}

pub fn run_posts(args: &PostsArgs, output: OutputMode, project_root: &Path) -> Result<()> {
    let workspace = Workspace::load(project_root)?;

    let platform = canonical_flag::<Platform>(args.platform.as_deref())?;
    let status = canonical_flag::<PostStatus>(args.status.as_deref())?;
    let filter = FilterSpec::new()
        .dimension_opt(DimensionKey::Platform, platform.as_deref())
        .dimension_opt(DimensionKey::Status, status.as_deref())
        .dimension_opt(DimensionKey::Entity, args.entity.as_deref())
        .search(args.search.clone().unwrap_or_default());

    let spec = SortSpec::new(
        args.sort.parse::<SortKey>().map_err(DmphqError::from)?,
        args.direction
            .parse::<SortDirection>()
            .map_err(DmphqError::from)?,
    );

    let mut posts = apply(&workspace.snapshot.posts, &filter, spec);
    posts.truncate(args.limit);
    tracing::debug!(shown = posts.len(), "posts listed");

    let rows: Vec<PostRow> = posts.into_iter().map(|post| PostRow { post }).collect();
    render_list(&rows, output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::PostsArgs;

    #[test]
    fn posts_args_defaults() {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            args: PostsArgs,
        }
        let w = Wrapper::parse_from(["test"]);
        assert!(w.args.platform.is_none());
        assert_eq!(w.args.sort, "date");
        assert_eq!(w.args.direction, "desc");
        assert_eq!(w.args.limit, 50);
    }
}
