use clap::{Parser, Subcommand};
use git_overlay::commands::*;
use git_overlay::core::{
    config::OverlayConfig,
    error::{OverlayError, Result},
    print_error,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "git-overlay")]
#[command(about = "Git status indicators for directory listings")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the repository root enclosing a directory
    Root {
        /// Directory to start from (defaults to the current directory)
        path: Option<PathBuf>,
    },
    /// Print the status code of every changed path in the repository
    Status {
        /// Any directory inside the repository (defaults to the current directory)
        path: Option<PathBuf>,
    },
    /// List a directory with git status highlights and symbols
    List {
        /// Directory to list (defaults to the current directory)
        path: Option<PathBuf>,
    },
    /// Print the effective configuration
    Config,
}

fn run(command: Commands) -> Result<()> {
    let config = OverlayConfig::load_or_default()?;

    match command {
        Commands::Root { path } => execute_root(path),
        Commands::Status { path } => execute_status(path, &config),
        Commands::List { path } => execute_list(path, &config),
        Commands::Config => execute_config(&config),
    }
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    let level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli.command) {
        if let OverlayError::NotInGitRepo = e {
            print_error("Not in a git repository");
        } else {
            print_error(&e.to_string());
        }
        std::process::exit(1);
    }
}
