//! # demokit-cli
//!
//! Command-line interface for demokit test workspaces.
//!
//! - `demokit path` — print the workspace directory a test file would get
//! - `demokit encode` — show how a workspace name is encoded on disk
//! - `demokit tree` — write a JSON manifest of fixture files into a workspace

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// demokit — scratch workspaces for tests.
#[derive(Parser)]
#[command(name = "demokit", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the workspace directory for a caller file without creating it.
    Path {
        /// Source file the workspace belongs to.
        #[arg(long)]
        caller: PathBuf,
        /// Workspace name (defaults to ".").
        #[arg(long)]
        name: Option<String>,
    },
    /// Print the filesystem-safe encoding of a workspace name.
    Encode {
        /// Raw workspace name.
        name: String,
    },
    /// Write the files described by a JSON manifest into a workspace.
    Tree {
        /// Source file the workspace belongs to.
        #[arg(long)]
        caller: PathBuf,
        /// Workspace name (overrides the options file).
        #[arg(long)]
        name: Option<String>,
        /// Don't write a `.gitignore` placeholder.
        #[arg(long)]
        no_gitignore: bool,
        /// TOML file with workspace options.
        #[arg(long)]
        config: Option<PathBuf>,
        /// JSON object mapping relative paths to content.
        manifest: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they don't interfere with output on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("demokit=info".parse()?)
                .add_directive("demokit_workspace=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Path { caller, name } => commands::path::execute(caller, name.as_deref()),
        Commands::Encode { name } => commands::encode::execute(name),
        Commands::Tree {
            caller,
            name,
            no_gitignore,
            config,
            manifest,
        } => commands::tree::execute(
            caller,
            name.as_deref(),
            *no_gitignore,
            config.as_deref(),
            manifest,
        ),
    }
}
