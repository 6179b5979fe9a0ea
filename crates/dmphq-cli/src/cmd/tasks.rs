//! `dmp tasks` — task listing with due-date bucketing.

use anyhow::Result;
use chrono::Utc;
use clap::Args;
use std::io::{self, Write};
use std::path::Path;

use crate::cmd::{Workspace, canonical_flag, format_timestamp};
use crate::output::{OutputMode, Renderable, render_list};
use dmphq_core::due::{DueStatus, TodayWindow};
use dmphq_core::error::DmphqError;
use dmphq_core::filter::FilterSpec;
use dmphq_core::model::{Task, TaskStatus};
use dmphq_core::record::DimensionKey;
use dmphq_core::sort::{SortDirection, SortKey, SortSpec, apply};

#[derive(Args, Debug)]
pub struct TasksArgs {
    /// Filter by status: todo, in-progress, done.
    #[arg(short, long)]
    pub status: Option<String>,

    /// Filter by assignee.
    #[arg(short, long)]
    pub assignee: Option<String>,

    /// Filter by business entity.
    #[arg(short, long)]
    pub entity: Option<String>,

    /// Filter by due bucket: overdue, today, upcoming, none.
    #[arg(long)]
    pub due: Option<String>,

    /// Case-insensitive substring search over title, notes, and tags.
    #[arg(short = 'q', long)]
    pub search: Option<String>,

    /// Sort direction: asc, desc. Ascending puts the nearest due date first.
    #[arg(long, default_value = "asc")]
    pub direction: String,

    /// Maximum tasks to show.
    #[arg(short = 'n', long, default_value = "50")]
    pub limit: usize,
}

struct TaskRow {
    task: Task,
    due: DueStatus,
}

impl Renderable for TaskRow {
    fn render_human(&self, w: &mut dyn Write) -> io::Result<()> {
        let due_at = self
            .task
            .due_at_us
            .map_or_else(|| "-".to_string(), format_timestamp);
        writeln!(
            w,
            "{}  [{}]  due:{} ({})  {}",
            self.task.id, self.task.status, due_at, self.due, self.task.title,
        )
    }

    fn render_json(&self, w: &mut dyn Write) -> io::Result<()> {
        let value = serde_json::json!({
            "id": self.task.id,
            "title": self.task.title,
            "status": self.task.status,
            "assignee": self.task.assignee,
            "entity": self.task.entity,
            "due_at_us": self.task.due_at_us,
            "due": self.due.to_string(),
        });
        serde_json::to_writer(w, &value).map_err(io::Error::other)
    }

    fn render_table(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(
            w,
            "{}\t{}\t{}\t{}",
            self.task.id, self.task.status, self.due, self.task.title,
        )
    }

    fn table_headers() -> &'static [&'static str] {
        &["id", "status", "due", "title"]
    }
}

pub fn run_tasks(args: &TasksArgs, output: OutputMode, project_root: &Path) -> Result<()> {
    let workspace = Workspace::load(project_root)?;

    let status = canonical_flag::<TaskStatus>(args.status.as_deref())?;
    let filter = FilterSpec::new()
        .dimension_opt(DimensionKey::Status, status.as_deref())
        .dimension_opt(DimensionKey::Assignee, args.assignee.as_deref())
        .dimension_opt(DimensionKey::Entity, args.entity.as_deref())
        .search(args.search.clone().unwrap_or_default());

    let spec = SortSpec::new(
        SortKey::Date,
        args.direction
            .parse::<SortDirection>()
            .map_err(DmphqError::from)?,
    );

    let due_filter = args
        .due
        .as_deref()
        .map(str::parse::<DueStatus>)
        .transpose()
        .map_err(DmphqError::from)?;

    let window = TodayWindow::for_date(Utc::now().date_naive());
    let mut tasks = apply(&workspace.snapshot.tasks, &filter, spec);
    if let Some(bucket) = due_filter {
        tasks.retain(|t| DueStatus::classify(t.due_at_us, window) == bucket);
    }
    tasks.truncate(args.limit);
    tracing::debug!(shown = tasks.len(), "tasks listed");

    let rows: Vec<TaskRow> = tasks
        .into_iter()
        .map(|task| TaskRow {
            due: DueStatus::classify(task.due_at_us, window),
            task,
        })
        .collect();
    render_list(&rows, output)?;
    Ok(())
}
