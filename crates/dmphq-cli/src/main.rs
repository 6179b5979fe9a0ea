#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{Parser, Subcommand};
use dmphq_core::config::load_user_config;
use dmphq_core::error::DmphqError;
use output::{CliError, OutputMode, render_error, resolve_output_mode};
use std::env;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "dmp: business operations console",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Output format.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Emit JSON output (alias for --format json).
    #[arg(long, global = true, hide = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Initialize a dmphq workspace",
        after_help = "EXAMPLES:\n    # Set up the current directory\n    dmp init"
    )]
    Init(cmd::init::InitArgs),

    #[command(
        about = "List social posts",
        long_about = "List social posts with optional filters, ranked by date or engagement.",
        after_help = "EXAMPLES:\n    # Instagram posts by engagement\n    dmp posts --platform instagram --sort engagement\n\n    # Machine-readable output\n    dmp posts --json"
    )]
    Posts(cmd::posts::PostsArgs),

    #[command(
        about = "List assets",
        after_help = "EXAMPLES:\n    # Social templates for one entity\n    dmp assets --entity acme --category social-template"
    )]
    Assets(cmd::assets::AssetsArgs),

    #[command(
        about = "Browse assets as folders",
        long_about = "Browse the asset library as a virtual folder tree, one level per dimension.",
        after_help = "EXAMPLES:\n    # Entity folders at the root\n    dmp browse\n\n    # Inside one entity's social templates\n    dmp browse --entity acme --category social-template"
    )]
    Browse(cmd::browse::BrowseArgs),

    #[command(
        about = "List tasks",
        after_help = "EXAMPLES:\n    # Everything overdue\n    dmp tasks --due overdue\n\n    # One assignee's open work\n    dmp tasks --assignee sam --status todo"
    )]
    Tasks(cmd::tasks::TasksArgs),

    #[command(about = "List configured entities with record counts")]
    Entities(cmd::entities::EntitiesArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("DMPHQ_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "dmphq=debug,info"
        } else {
            "dmphq=info,warn"
        })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    if cli.verbose {
        tracing::info!("verbose mode enabled");
    }

    let config_pref = load_user_config()
        .ok()
        .and_then(|config| config.output);
    let output = resolve_output_mode(cli.format, cli.json, config_pref.as_deref());

    let project_root = std::env::current_dir()?;

    let result = match cli.command {
        Commands::Init(ref args) => cmd::init::run_init(args, output, &project_root),
        Commands::Posts(ref args) => cmd::posts::run_posts(args, output, &project_root),
        Commands::Assets(ref args) => cmd::assets::run_assets(args, output, &project_root),
        Commands::Browse(ref args) => cmd::browse::run_browse(args, output, &project_root),
        Commands::Tasks(ref args) => cmd::tasks::run_tasks(args, output, &project_root),
        Commands::Entities(ref args) => cmd::entities::run_entities(args, output, &project_root),
    };

    match result {
        Ok(()) => Ok(()),
        Err(err) => {
            let cli_error = match err.downcast_ref::<DmphqError>() {
                Some(typed) => CliError::from_dmphq(typed),
                None => CliError::new(format!("{err:#}")),
            };
            render_error(output, &cli_error)?;
            std::process::exit(1);
        }
    }
}
