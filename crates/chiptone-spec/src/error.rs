//! Error types for cue validation and parsing.

use thiserror::Error;

/// Error codes for cue validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Cue name is empty or not a safe file stem
    InvalidCueName,
    /// E002: Sample rate is zero
    InvalidSampleRate,
    /// E003: Cue has no layers
    NoLayers,
    /// E004: Tempo is not a positive, finite number
    InvalidTempo,
    /// E005: Note or slot duration is not positive
    InvalidDuration,
    /// E006: Frequency is negative or not finite
    InvalidFrequency,
    /// E007: Envelope parameter out of range
    InvalidEnvelope,
    /// E008: Volume outside (0, 1]
    InvalidVolume,
    /// E009: Timbre preset unknown or weights invalid
    InvalidTimbre,
    /// E010: Chord is empty or nested
    InvalidChord,
    /// E011: Loop or repeat count is zero
    InvalidRepeat,
    /// E012: Layer offset is negative
    InvalidOffset,
    /// E013: Percussion pattern is empty
    EmptyPattern,
    /// E014: Rendered cue would exceed the length limit
    CueTooLong,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidCueName => "E001",
            ErrorCode::InvalidSampleRate => "E002",
            ErrorCode::NoLayers => "E003",
            ErrorCode::InvalidTempo => "E004",
            ErrorCode::InvalidDuration => "E005",
            ErrorCode::InvalidFrequency => "E006",
            ErrorCode::InvalidEnvelope => "E007",
            ErrorCode::InvalidVolume => "E008",
            ErrorCode::InvalidTimbre => "E009",
            ErrorCode::InvalidChord => "E010",
            ErrorCode::InvalidRepeat => "E011",
            ErrorCode::InvalidOffset => "E012",
            ErrorCode::EmptyPattern => "E013",
            ErrorCode::CueTooLong => "E014",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// JSON path to the problematic field (e.g., "layers\[0\].voice.volume").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a JSON path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// Result of validating a cue.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
        }
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.ok = false;
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Converts to a Result, returning Err if there are errors.
    pub fn into_result(self) -> Result<(), Vec<ValidationError>> {
        if self.ok {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

/// Errors raised while loading or checking a cue.
#[derive(Debug, Error)]
pub enum SpecError {
    /// JSON parsing failed.
    #[error("failed to parse cue JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The cue failed validation.
    #[error("cue '{cue}' failed validation with {} error(s): {}", errors.len(), join_errors(errors))]
    Invalid {
        /// Name of the offending cue.
        cue: String,
        /// All collected validation errors.
        errors: Vec<ValidationError>,
    },
}

/// Common interface for errors raised by rendering backends.
pub trait BackendError: std::error::Error {
    /// Stable error code (e.g., "AUDIO_003").
    fn code(&self) -> &'static str;

    /// Backend category (e.g., "audio").
    fn category(&self) -> &'static str;
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_unique() {
        let codes = [
            ErrorCode::InvalidCueName,
            ErrorCode::InvalidSampleRate,
            ErrorCode::NoLayers,
            ErrorCode::InvalidTempo,
            ErrorCode::InvalidDuration,
            ErrorCode::InvalidFrequency,
            ErrorCode::InvalidEnvelope,
            ErrorCode::InvalidVolume,
            ErrorCode::InvalidTimbre,
            ErrorCode::InvalidChord,
            ErrorCode::InvalidRepeat,
            ErrorCode::InvalidOffset,
            ErrorCode::EmptyPattern,
            ErrorCode::CueTooLong,
        ];
        let mut seen = std::collections::HashSet::new();
        for code in codes {
            assert!(seen.insert(code.code()), "duplicate code {}", code);
        }
    }

    #[test]
    fn test_validation_error_display_with_path() {
        let err = ValidationError::with_path(
            ErrorCode::InvalidTempo,
            "tempo_bpm must be positive, got 0",
            "layers[1].sequence.tempo_bpm",
        );
        assert_eq!(
            err.to_string(),
            "E004: tempo_bpm must be positive, got 0 (at layers[1].sequence.tempo_bpm)"
        );
    }

    #[test]
    fn test_validation_result_tracks_failure() {
        let mut result = ValidationResult::default();
        assert!(result.is_ok());

        result.add_error(ValidationError::new(ErrorCode::NoLayers, "no layers"));
        assert!(!result.is_ok());
        assert_eq!(result.into_result().unwrap_err().len(), 1);
    }

    #[test]
    fn test_invalid_spec_error_lists_every_error() {
        let err = SpecError::Invalid {
            cue: "bgm_cave".to_string(),
            errors: vec![
                ValidationError::new(ErrorCode::NoLayers, "no layers"),
                ValidationError::new(ErrorCode::InvalidSampleRate, "sample_rate is 0"),
            ],
        };
        let message = err.to_string();
        assert!(message.contains("bgm_cave"));
        assert!(message.contains("2 error(s)"));
        assert!(message.contains("E002"));
    }
}
