//! Error types for the audio backend.

use chiptone_spec::{BackendError, ValidationError};
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur while rendering or exporting a cue.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Sample rate is zero, negative, or not finite.
    #[error("invalid sample rate: {rate} Hz")]
    InvalidSampleRate {
        /// The rejected sample rate.
        rate: f64,
    },

    /// Duration is zero, negative, or not finite.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The rejected duration.
        duration: f64,
    },

    /// Tempo is zero, negative, or not finite.
    #[error("invalid tempo: {tempo} BPM")]
    InvalidTempo {
        /// The rejected tempo.
        tempo: f64,
    },

    /// Any other out-of-range parameter.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// The cue failed validation before rendering.
    #[error("cue '{cue}' is invalid: {}", first_error(errors))]
    InvalidSpec {
        /// Cue name.
        cue: String,
        /// Validation errors.
        errors: Vec<ValidationError>,
    },

    /// I/O error while exporting.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn first_error(errors: &[ValidationError]) -> String {
    match errors {
        [] => "no details".to_string(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{} (and {} more)", first, rest.len()),
    }
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Returns true for errors caused by the cue configuration rather than I/O.
    pub fn is_config_error(&self) -> bool {
        !matches!(self, AudioError::Io(_))
    }
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidSampleRate { .. } => "AUDIO_001",
            AudioError::InvalidDuration { .. } => "AUDIO_002",
            AudioError::InvalidTempo { .. } => "AUDIO_003",
            AudioError::InvalidParameter { .. } => "AUDIO_004",
            AudioError::InvalidSpec { .. } => "AUDIO_005",
            AudioError::Io(_) => "AUDIO_006",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}

/// Fails unless `rate` is a positive, finite sample rate.
pub(crate) fn check_sample_rate(rate: f64) -> AudioResult<()> {
    if rate.is_finite() && rate > 0.0 {
        Ok(())
    } else {
        Err(AudioError::InvalidSampleRate { rate })
    }
}

/// Fails unless `duration` is a positive, finite number of seconds.
pub(crate) fn check_duration(duration: f64) -> AudioResult<()> {
    if duration.is_finite() && duration > 0.0 {
        Ok(())
    } else {
        Err(AudioError::InvalidDuration { duration })
    }
}

/// Fails unless `tempo` is a positive, finite BPM value.
pub(crate) fn check_tempo(tempo: f64) -> AudioResult<()> {
    if tempo.is_finite() && tempo > 0.0 {
        Ok(())
    } else {
        Err(AudioError::InvalidTempo { tempo })
    }
}
