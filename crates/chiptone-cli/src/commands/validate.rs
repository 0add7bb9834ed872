//! Validate command implementation
//!
//! Parses a JSON cue file and reports every validation error with its code
//! and field path.

use anyhow::Result;
use chiptone_spec::validation::validate_cue;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{error_codes, JsonError, ValidateOutput};
use super::EXIT_CONFIG_ERROR;
use crate::input::load_cue;

/// Run the validate command
///
/// # Arguments
/// * `spec_path` - Path to the JSON cue file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid or unreadable
pub fn run(spec_path: &str, json_output: bool) -> Result<ExitCode> {
    let output = check(spec_path);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{} {}", "Validating:".cyan().bold(), spec_path);
        if let Some(cue) = &output.cue {
            println!("{} {}", "Cue:".dimmed(), cue);
        }
        for error in &output.errors {
            let location = error
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "x".red(),
                error.code,
                location.dimmed(),
                error.message
            );
        }
        if output.success {
            println!("{}", "Valid".green().bold());
        } else {
            println!(
                "{} {} error(s)",
                "Invalid:".red().bold(),
                output.errors.len()
            );
        }
    }

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_CONFIG_ERROR)
    })
}

/// Loads and validates a cue file.
pub fn check(spec_path: &str) -> ValidateOutput {
    let cue = match load_cue(Path::new(spec_path)) {
        Ok(cue) => cue,
        Err(err) => {
            return ValidateOutput {
                success: false,
                cue: None,
                errors: vec![JsonError::new(error_codes::FILE_READ, format!("{:#}", err))],
            };
        }
    };

    let result = validate_cue(&cue);
    ValidateOutput {
        success: result.is_ok(),
        cue: Some(cue.name.clone()),
        errors: result.errors.iter().map(JsonError::from).collect(),
    }
}
