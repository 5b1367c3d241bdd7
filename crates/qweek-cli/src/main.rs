use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use qweek_core::config::StoreBackend;

mod bootstrap;
mod commands;
mod logging;
mod ui;

use bootstrap::StoreOverrides;

#[derive(Parser)]
#[command(name = "qweek")]
#[command(about = "QWeek - two-round matching quiz", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Keep config, data and logs under this directory
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    /// Participant store backend: file, document or memory
    #[arg(long, global = true)]
    store: Option<StoreBackend>,

    /// Results file for the file backend
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Mirror logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game (default)
    Play {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
    },
    /// Manage saved results
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Show all results, newest first
    List,
    /// Delete one result by id
    Delete { id: String },
    /// Export results as CSV
    Export {
        /// Output file
        #[arg(short, long, default_value = qweek_application::csv_export::CSV_FILE_NAME)]
        output: PathBuf,
        /// Print to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = bootstrap::resolve_paths(cli.home.as_deref());
    let _log_guard = logging::init(&paths, cli.verbose)?;

    let overrides = StoreOverrides {
        backend: cli.store,
        data_file: cli.data_file,
    };
    let context = bootstrap::bootstrap(paths, cli.config, overrides)?;

    match cli.command.unwrap_or(Commands::Play {
        first_name: None,
        last_name: None,
    }) {
        Commands::Play {
            first_name,
            last_name,
        } => commands::play::run(&context, first_name, last_name).await?,
        Commands::Admin { action } => match action {
            AdminAction::List => commands::admin::list(&context).await?,
            AdminAction::Delete { id } => commands::admin::delete(&context, &id).await?,
            AdminAction::Export { output, stdout } => {
                commands::admin::export(&context, &output, stdout).await?
            }
        },
    }

    Ok(())
}
