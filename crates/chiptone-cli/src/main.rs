//! chiptone CLI - Command-line interface for retro procedural audio
//!
//! This binary renders the built-in cue catalog (or JSON cue files) to WAV,
//! lists the catalog, and validates cue files.

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use chiptone_cli::commands;

mod cli_args;

use cli_args::{Cli, Commands};

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            cues,
            variant,
            spec,
            out_dir,
            json,
        } => commands::render::run(&cues, variant.as_deref(), spec.as_deref(), &out_dir, json),
        Commands::List { json } => commands::list::run(json),
        Commands::Validate { spec, json } => commands::validate::run(&spec, json),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::from(commands::EXIT_CONFIG_ERROR)
        }
    }
}
