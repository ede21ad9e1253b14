// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! clarity: command-line host for the documentation generator.

mod commands;
mod exit_error;

use clap::{Parser, Subcommand};
use exit_error::ExitError;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "clarity", version, about = "Generate project documentation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate documentation for a project
    Generate(commands::GenerateArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CLARITY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate(args) => commands::generate(args).await,
    };

    if let Err(err) = result {
        match err.downcast::<ExitError>() {
            Ok(exit) => {
                // Outcomes were already rendered through the editor surface
                if let Some(message) = exit.message() {
                    eprintln!("{message}");
                }
                std::process::exit(exit.code());
            }
            Err(err) => {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        }
    }
}
