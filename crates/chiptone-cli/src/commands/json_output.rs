//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag on `render`, `list`, and `validate`.

use chiptone_spec::ValidationError;
use serde::{Deserialize, Serialize};

/// A structured error with a stable code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonError {
    /// Error code (`E0xx` for validation, `AUDIO_0xx` for the backend,
    /// `CLI_0xx` for the CLI itself).
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// JSON path to the offending field, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonError {
    /// Creates an error without a path.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }
}

impl From<&ValidationError> for JsonError {
    fn from(error: &ValidationError) -> Self {
        Self {
            code: error.code.code().to_string(),
            message: error.message.clone(),
            path: error.path.clone(),
        }
    }
}

/// Error codes raised by the CLI itself.
pub mod error_codes {
    /// Cue file could not be read or parsed
    pub const FILE_READ: &str = "CLI_001";
    /// Output file could not be written
    pub const FILE_WRITE: &str = "CLI_002";
}

/// One rendered (or failed) cue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedCue {
    /// Cue name.
    pub cue: String,
    /// Catalog variant, if rendered from the catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    /// Whether the WAV file was written.
    pub success: bool,
    /// Output path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// BLAKE3 hash of the PCM data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
    /// Number of samples written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_samples: Option<usize>,
    /// Duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    /// Bits per sample.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bits_per_sample: Option<u16>,
    /// Errors, when the cue failed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}

/// Output of `render --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOutput {
    /// Whether every cue rendered.
    pub success: bool,
    /// Output directory.
    pub out_dir: String,
    /// Per-cue results in request order.
    pub cues: Vec<RenderedCue>,
}

/// One catalog variant in `list --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListedVariant {
    /// Variant name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Bits per sample of the exported file.
    pub bits_per_sample: u16,
    /// Number of layers.
    pub layers: usize,
}

/// One catalog cue in `list --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListedCue {
    /// Cue name.
    pub name: String,
    /// Variants, default first.
    pub variants: Vec<ListedVariant>,
}

/// Output of `list --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListOutput {
    /// Catalog cues in export order.
    pub cues: Vec<ListedCue>,
    /// Named timbre presets.
    pub timbre_presets: Vec<String>,
}

/// Output of `validate --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    /// Whether the cue is valid.
    pub success: bool,
    /// Cue name, when the file parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cue: Option<String>,
    /// Validation or load errors.
    pub errors: Vec<JsonError>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chiptone_spec::ErrorCode;

    #[test]
    fn test_validation_error_conversion() {
        let error = ValidationError::with_path(ErrorCode::InvalidTempo, "tempo must be positive", "layers[0].sequence.tempo_bpm");
        let json = JsonError::from(&error);
        assert_eq!(json.code, "E004");
        assert_eq!(json.path.as_deref(), Some("layers[0].sequence.tempo_bpm"));
    }

    #[test]
    fn test_rendered_cue_omits_empty_fields() {
        let cue = RenderedCue {
            cue: "move".to_string(),
            variant: None,
            success: false,
            path: None,
            pcm_hash: None,
            num_samples: None,
            duration_seconds: None,
            bits_per_sample: None,
            errors: vec![JsonError::new("AUDIO_006", "disk full")],
        };
        let value = serde_json::to_value(&cue).unwrap();
        assert!(value.get("pcm_hash").is_none());
        assert!(value.get("variant").is_none());
        assert_eq!(value["errors"][0]["code"], "AUDIO_006");
    }
}
