//! List command implementation
//!
//! Prints the built-in catalog with each cue's variants, and the timbre presets.

use anyhow::Result;
use chiptone_spec::{catalog, CatalogCue, TIMBRE_PRESETS};
use colored::Colorize;
use std::process::ExitCode;

use super::json_output::{ListOutput, ListedCue, ListedVariant};

/// Run the list command
///
/// # Arguments
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(json_output: bool) -> Result<ExitCode> {
    let entries = catalog();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&list_output(&entries))?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Cues".cyan().bold());
    for entry in &entries {
        println!("  {}", entry.name.bold());
        for (i, variant) in entry.variants.iter().enumerate() {
            let marker = if i == 0 { " (default)" } else { "" };
            println!(
                "    {}{} - {} {}",
                variant.name.green(),
                marker.dimmed(),
                variant.description,
                format!("[{}-bit]", variant.cue.sample_format.bits()).dimmed()
            );
        }
    }

    println!();
    println!("{} {}", "Timbre presets:".cyan().bold(), TIMBRE_PRESETS.join(", "));

    Ok(ExitCode::SUCCESS)
}

/// Builds the JSON listing for `entries`.
pub fn list_output(entries: &[CatalogCue]) -> ListOutput {
    ListOutput {
        cues: entries
            .iter()
            .map(|entry| ListedCue {
                name: entry.name.to_string(),
                variants: entry
                    .variants
                    .iter()
                    .map(|v| ListedVariant {
                        name: v.name.to_string(),
                        description: v.description.to_string(),
                        bits_per_sample: v.cue.sample_format.bits(),
                        layers: v.cue.layers.len(),
                    })
                    .collect(),
            })
            .collect(),
        timbre_presets: TIMBRE_PRESETS.iter().map(|p| p.to_string()).collect(),
    }
}
