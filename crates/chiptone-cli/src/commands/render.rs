//! Render command implementation
//!
//! Renders catalog cues (or a single JSON cue file) to WAV files. Cues share
//! no state, so they render in parallel; output order follows the request.

use anyhow::{Context, Result};
use chiptone_backend_audio::{generate, AudioError};
use chiptone_spec::{catalog, find_cue, BackendError, CueSpec};
use colored::Colorize;
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use tracing::warn;

use super::json_output::{error_codes, JsonError, RenderOutput, RenderedCue};
use super::{EXIT_CONFIG_ERROR, EXIT_RENDER_ERROR};
use crate::input::load_cue;

/// A cue queued for rendering.
#[derive(Debug, Clone)]
pub struct RenderJob {
    /// The cue recipe.
    pub cue: CueSpec,
    /// Catalog variant name, if any.
    pub variant: Option<String>,
}

/// How a single cue failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Failure {
    Config,
    Render,
}

struct Outcome {
    record: RenderedCue,
    failure: Option<Failure>,
}

/// Run the render command
///
/// # Arguments
/// * `cues` - Catalog cue names (empty = whole catalog)
/// * `variant` - Variant to render instead of each cue's default
/// * `spec_path` - JSON cue file to render instead of the catalog
/// * `out_dir` - Output directory
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 if any cue is invalid, 2 if any render or write failed
pub fn run(
    cues: &[String],
    variant: Option<&str>,
    spec_path: Option<&str>,
    out_dir: &str,
    json_output: bool,
) -> Result<ExitCode> {
    let start = Instant::now();
    let jobs = resolve_jobs(cues, variant, spec_path)?;

    let out_path = Path::new(out_dir);
    fs::create_dir_all(out_path)
        .with_context(|| format!("Failed to create output directory: {}", out_dir))?;

    if !json_output {
        println!(
            "{} {} cue(s) to {}",
            "Rendering".cyan().bold(),
            jobs.len(),
            out_dir
        );
    }

    let outcomes: Vec<Outcome> = jobs.par_iter().map(|job| render_job(job, out_path)).collect();

    let code = exit_code(&outcomes);
    let records: Vec<RenderedCue> = outcomes.into_iter().map(|o| o.record).collect();

    if json_output {
        let output = RenderOutput {
            success: records.iter().all(|r| r.success),
            out_dir: out_dir.to_string(),
            cues: records,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_human(&records, start.elapsed().as_millis());
    }

    Ok(code)
}

/// Builds the job list from the command-line selection.
pub fn resolve_jobs(
    cues: &[String],
    variant: Option<&str>,
    spec_path: Option<&str>,
) -> Result<Vec<RenderJob>> {
    if let Some(path) = spec_path {
        let cue = load_cue(Path::new(path))?;
        return Ok(vec![RenderJob { cue, variant: None }]);
    }

    if cues.is_empty() {
        // Whole catalog: cues without the requested variant fall back to their default.
        return Ok(catalog()
            .into_iter()
            .map(|entry| {
                let chosen = match variant.and_then(|v| entry.variant(Some(v))) {
                    Some(found) => found,
                    None => {
                        if let Some(v) = variant {
                            warn!(cue = entry.name, variant = v, "variant not available, using default");
                        }
                        entry.default_variant()
                    }
                };
                RenderJob {
                    cue: chosen.cue.clone(),
                    variant: Some(chosen.name.to_string()),
                }
            })
            .collect());
    }

    cues.iter()
        .map(|name| {
            let entry = find_cue(name).with_context(|| {
                format!(
                    "Unknown cue '{}' (run `chiptone list` to see the catalog)",
                    name
                )
            })?;
            let chosen = entry.variant(variant).with_context(|| {
                format!(
                    "Cue '{}' has no variant '{}' (available: {})",
                    name,
                    variant.unwrap_or_default(),
                    entry.variant_names().join(", ")
                )
            })?;
            Ok(RenderJob {
                cue: chosen.cue.clone(),
                variant: Some(chosen.name.to_string()),
            })
        })
        .collect()
}

fn render_job(job: &RenderJob, out_dir: &Path) -> Outcome {
    let mut record = RenderedCue {
        cue: job.cue.name.clone(),
        variant: job.variant.clone(),
        success: false,
        path: None,
        pcm_hash: None,
        num_samples: None,
        duration_seconds: None,
        bits_per_sample: None,
        errors: Vec::new(),
    };

    let result = match generate(&job.cue) {
        Ok(result) => result,
        Err(err) => {
            let failure = if err.is_config_error() {
                Failure::Config
            } else {
                Failure::Render
            };
            record.errors = audio_error_to_json(&err);
            return Outcome {
                record,
                failure: Some(failure),
            };
        }
    };

    let path = out_dir.join(result.file_name());
    if let Err(err) = result.wav.write_to(&path) {
        record.errors.push(JsonError::new(
            error_codes::FILE_WRITE,
            format!("Failed to write {}: {}", path.display(), err),
        ));
        return Outcome {
            record,
            failure: Some(Failure::Render),
        };
    }

    record.success = true;
    record.path = Some(path.display().to_string());
    record.num_samples = Some(result.wav.num_samples);
    record.duration_seconds = Some(result.wav.duration_seconds());
    record.bits_per_sample = Some(result.wav.sample_format.bits());
    record.pcm_hash = Some(result.wav.pcm_hash);
    Outcome {
        record,
        failure: None,
    }
}

fn audio_error_to_json(err: &AudioError) -> Vec<JsonError> {
    match err {
        AudioError::InvalidSpec { errors, .. } => errors.iter().map(JsonError::from).collect(),
        other => vec![JsonError::new(other.code(), other.to_string())],
    }
}

fn exit_code(outcomes: &[Outcome]) -> ExitCode {
    let failures: Vec<Failure> = outcomes.iter().filter_map(|o| o.failure).collect();
    if failures.contains(&Failure::Render) {
        ExitCode::from(EXIT_RENDER_ERROR)
    } else if failures.contains(&Failure::Config) {
        ExitCode::from(EXIT_CONFIG_ERROR)
    } else {
        ExitCode::SUCCESS
    }
}

fn print_human(records: &[RenderedCue], elapsed_ms: u128) {
    let mut failed = 0;
    for record in records {
        let label = match &record.variant {
            Some(variant) => format!("{} ({})", record.cue, variant),
            None => record.cue.clone(),
        };
        if record.success {
            println!(
                "  {} {} {:.2}s {}-bit {}",
                "OK".green().bold(),
                label,
                record.duration_seconds.unwrap_or_default(),
                record.bits_per_sample.unwrap_or_default(),
                record
                    .pcm_hash
                    .as_deref()
                    .map(|h| &h[..16])
                    .unwrap_or_default()
                    .dimmed()
            );
        } else {
            failed += 1;
            println!("  {} {}", "FAILED".red().bold(), label);
            for error in &record.errors {
                let location = error
                    .path
                    .as_ref()
                    .map(|p| format!(" at {}", p))
                    .unwrap_or_default();
                println!(
                    "    {} [{}]{}: {}",
                    "x".red(),
                    error.code,
                    location.dimmed(),
                    error.message
                );
            }
        }
    }

    println!();
    if failed == 0 {
        println!(
            "{} {} cue(s) in {}ms",
            "Rendered".green().bold(),
            records.len(),
            elapsed_ms
        );
    } else {
        println!(
            "{} {} of {} cue(s) failed",
            "Done with errors:".red().bold(),
            failed,
            records.len()
        );
    }
}
