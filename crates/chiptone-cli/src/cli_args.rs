//! CLI argument definitions for the chiptone command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

/// chiptone - Retro procedural audio renderer
#[derive(Parser)]
#[command(name = "chiptone")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render cues to WAV files
    Render {
        /// Catalog cue to render (repeatable; default: every catalog cue)
        #[arg(short, long = "cue")]
        cues: Vec<String>,

        /// Variant to render (default: each cue's first variant)
        #[arg(long)]
        variant: Option<String>,

        /// Render a JSON cue file instead of the catalog
        #[arg(short, long, conflicts_with_all = ["cues", "variant"])]
        spec: Option<String>,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        out_dir: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List catalog cues, their variants, and timbre presets
    List {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a JSON cue file
    Validate {
        /// Path to the cue file
        #[arg(short, long)]
        spec: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}
