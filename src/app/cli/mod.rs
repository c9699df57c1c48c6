//! CLI Adapter.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::adapters::TerminalPrompt;
use crate::domain::AppError;
use crate::ports::{ExitPrompt, NoopPrompt};
use crate::{BuildOptions, ProjectOptions};

#[derive(Parser)]
#[command(name = "freeze-build")]
#[command(version)]
#[command(
    about = "Package the Interactive Chess Board game into a single-file executable",
    long_about = None
)]
struct Cli {
    /// Project directory containing the entry file and assets
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,
    /// Build config file (defaults to freeze-build.toml in the root, if present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Exit without waiting for Enter after a build
    #[arg(long, global = true)]
    no_pause: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean previous output and build the executable (default)
    #[clap(visible_alias = "b")]
    Build {
        /// Show the packaging tool's output live instead of capturing it
        #[arg(long)]
        stream: bool,
    },
    /// Remove build/, dist/ and the generated .spec file
    #[clap(visible_alias = "c")]
    Clean,
    /// Print the packaging command and expected artifact without running anything
    #[clap(visible_alias = "p")]
    Plan,
}

/// Entry point for the CLI.
pub fn run() {
    crate::app::logging::init_tracing();
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Build { stream: false });
    let pause = should_pause(&command, cli.no_pause, std::io::stdin().is_terminal());

    let result = dispatch(command, cli.root, cli.config);

    let exit_code = if pause {
        conclude(result, &TerminalPrompt)
    } else {
        conclude(result, &NoopPrompt)
    };
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

/// Only a build waits for Enter, and only on an interactive stdin.
fn should_pause(command: &Commands, no_pause: bool, interactive: bool) -> bool {
    matches!(command, Commands::Build { .. }) && !no_pause && interactive
}

fn dispatch(
    command: Commands,
    root: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<(), AppError> {
    let root = match root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    let project = ProjectOptions { root, config };

    match command {
        Commands::Build { stream } => {
            crate::build(&BuildOptions { project, stream_output: stream }).map(|_| ())
        }
        Commands::Clean => crate::clean(&project).map(|_| ()),
        Commands::Plan => crate::plan(&project).map(|_| ()),
    }
}

/// Report the result, wait for acknowledgment, and pick the exit code.
fn conclude(result: Result<(), AppError>, prompt: &impl ExitPrompt) -> i32 {
    let exit_code = match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };

    if let Err(e) = prompt.acknowledge() {
        eprintln!("Error: {}", e);
    }

    exit_code
}
