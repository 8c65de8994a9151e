//! kgen CLI
//!
//! Generates Kubernetes manifests for an application deployment.

mod cli;
mod commands;
mod error;
mod interactive;
mod logging;
mod output;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} Kubernetes manifest generator", "kgen".green().bold());
            println!();
            println!("Run {} for available commands.", "kgen --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Generate(args) => {
            let cwd = std::env::current_dir()?;
            commands::run_generate(&cwd, &args)
        }
        Commands::Completions { shell } => {
            commands::run_completions(shell, &mut std::io::stdout())
        }
    }
}
