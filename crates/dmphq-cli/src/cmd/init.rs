//! `dmp init` — set up a workspace in the current directory.

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::output::{OutputMode, render};
use dmphq_core::config::{CONFIG_FILE, init_workspace};

#[derive(Args, Debug)]
pub struct InitArgs {}

pub fn run_init(_args: &InitArgs, output: OutputMode, project_root: &Path) -> Result<()> {
    let already = project_root.join(".dmphq").exists();
    init_workspace(project_root)?;

    let payload = serde_json::json!({
        "root": project_root.display().to_string(),
        "created": !already,
    });
    render(output, &payload, |_, w| {
        if already {
            writeln!(w, "Workspace already initialized.")
        } else {
            writeln!(w, "Initialized dmphq workspace.")?;
            writeln!(w, "Edit {CONFIG_FILE} to add your entities.")
        }
    })
}
