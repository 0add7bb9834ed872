//! Cue validation logic.

pub mod common;


use std::sync::OnceLock;

use regex::Regex;

use crate::cue::{CueSpec, LayerSpec};
use crate::error::{ErrorCode, ValidationError, ValidationResult};
use crate::note::{Pitch, Sequence};
use crate::synthesis::{Envelope, Timbre, TimbreSpec, Voice};

pub use common::{
    validate_non_negative, validate_positive, validate_unit_interval, validate_volume,
    CommonValidationError,
};

/// Cue names double as file stems: lowercase letter first, then up to 63
/// lowercase letters, digits, underscores, or hyphens.
const CUE_NAME_PATTERN: &str = r"^[a-z][a-z0-9_-]{0,63}$";

/// Highest sample rate accepted for export.
pub const MAX_SAMPLE_RATE: u32 = 192_000;

/// Longest start offset a layer may have, in seconds.
pub const MAX_OFFSET_SECONDS: f64 = 60.0;

/// Longest rendered cue, loops included, in seconds.
pub const MAX_CUE_SECONDS: f64 = 600.0;

static CUE_NAME_REGEX: OnceLock<Regex> = OnceLock::new();

fn cue_name_regex() -> &'static Regex {
    CUE_NAME_REGEX.get_or_init(|| Regex::new(CUE_NAME_PATTERN).expect("invalid regex pattern"))
}

/// Validates a cue and collects every error found.
///
/// Unknown pitch labels are not errors; they render as silence.
///
/// # Example
/// ```
/// use chiptone_spec::{CueSpec, LayerSpec, Voice, Waveform};
/// use chiptone_spec::validation::validate_cue;
///
/// let cue = CueSpec::builder("attack")
///     .layer(LayerSpec::tone(800.0, 0.2, Voice::new(Waveform::Square, 1.0)))
///     .build();
/// assert!(validate_cue(&cue).is_ok());
/// ```
pub fn validate_cue(cue: &CueSpec) -> ValidationResult {
    let mut result = ValidationResult::default();

    validate_name(cue, &mut result);
    validate_sample_rate(cue, &mut result);

    if cue.loop_count == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidRepeat,
            "loop_count must be at least 1",
            "loop_count",
        ));
    }

    if cue.layers.is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::NoLayers,
            "cue must have at least one layer",
            "layers",
        ));
    }

    for (i, layer) in cue.layers.iter().enumerate() {
        validate_layer(layer, &format!("layers[{}]", i), &mut result);
    }

    // Lengths are only meaningful once every timing field is valid.
    if result.is_ok() {
        validate_length(cue, &mut result);
    }

    result
}

/// Nominal rendered length of a cue in seconds: the latest layer end,
/// tiled `loop_count` times.
pub fn cue_length_seconds(cue: &CueSpec) -> f64 {
    let pass = cue
        .layers
        .iter()
        .map(|layer| layer.offset_seconds() + layer.duration_seconds())
        .fold(0.0_f64, f64::max);
    pass * cue.loop_count as f64
}

fn validate_length(cue: &CueSpec, result: &mut ValidationResult) {
    let length = cue_length_seconds(cue);
    if !length.is_finite() || length > MAX_CUE_SECONDS {
        let path = if cue.loop_count > 1 { "loop_count" } else { "layers" };
        result.add_error(ValidationError::with_path(
            ErrorCode::CueTooLong,
            format!(
                "cue renders {:.1} seconds, limit is {} seconds",
                length, MAX_CUE_SECONDS
            ),
            path,
        ));
    }
}

fn validate_name(cue: &CueSpec, result: &mut ValidationResult) {
    if !cue_name_regex().is_match(&cue.name) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidCueName,
            format!(
                "name must match pattern '{}', got '{}'",
                CUE_NAME_PATTERN, cue.name
            ),
            "name",
        ));
    }
}

fn validate_sample_rate(cue: &CueSpec, result: &mut ValidationResult) {
    if cue.sample_rate == 0 || cue.sample_rate > MAX_SAMPLE_RATE {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidSampleRate,
            format!(
                "sample_rate must be in 1..={}, got {}",
                MAX_SAMPLE_RATE, cue.sample_rate
            ),
            "sample_rate",
        ));
    }
}

/// Pushes a common check failure into the result under `code` and `path`.
fn check(
    outcome: Result<(), CommonValidationError>,
    code: ErrorCode,
    path: String,
    result: &mut ValidationResult,
) {
    if let Err(err) = outcome {
        result.add_error(ValidationError::with_path(code, err.message, path));
    }
}

fn validate_layer(layer: &LayerSpec, path: &str, result: &mut ValidationResult) {
    let offset = layer.offset_seconds();
    check(
        validate_non_negative("offset_seconds", offset),
        ErrorCode::InvalidOffset,
        format!("{}.offset_seconds", path),
        result,
    );
    if offset.is_finite() && offset > MAX_OFFSET_SECONDS {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidOffset,
            format!(
                "offset_seconds must be at most {}, got {}",
                MAX_OFFSET_SECONDS, offset
            ),
            format!("{}.offset_seconds", path),
        ));
    }

    match layer {
        LayerSpec::Sequence {
            sequence, voice, ..
        } => {
            validate_sequence(sequence, &format!("{}.sequence", path), result);
            validate_voice(voice, &format!("{}.voice", path), result);
        }
        LayerSpec::Tone {
            frequency,
            duration_seconds,
            voice,
            ..
        } => {
            check(
                validate_non_negative("frequency", *frequency),
                ErrorCode::InvalidFrequency,
                format!("{}.frequency", path),
                result,
            );
            check(
                validate_positive("duration_seconds", *duration_seconds),
                ErrorCode::InvalidDuration,
                format!("{}.duration_seconds", path),
                result,
            );
            validate_voice(voice, &format!("{}.voice", path), result);
        }
        LayerSpec::Percussion {
            pattern,
            slot_beats,
            tempo_bpm,
            volume,
            ..
        } => {
            if pattern.is_empty() {
                result.add_error(ValidationError::with_path(
                    ErrorCode::EmptyPattern,
                    "percussion pattern must have at least one slot",
                    format!("{}.pattern", path),
                ));
            }
            check(
                validate_positive("slot_beats", *slot_beats),
                ErrorCode::InvalidDuration,
                format!("{}.slot_beats", path),
                result,
            );
            check(
                validate_positive("tempo_bpm", *tempo_bpm),
                ErrorCode::InvalidTempo,
                format!("{}.tempo_bpm", path),
                result,
            );
            check(
                validate_volume("volume", *volume),
                ErrorCode::InvalidVolume,
                format!("{}.volume", path),
                result,
            );
        }
    }
}

fn validate_sequence(sequence: &Sequence, path: &str, result: &mut ValidationResult) {
    check(
        validate_positive("tempo_bpm", sequence.tempo_bpm),
        ErrorCode::InvalidTempo,
        format!("{}.tempo_bpm", path),
        result,
    );

    if sequence.repeat == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidRepeat,
            "repeat must be at least 1",
            format!("{}.repeat", path),
        ));
    }

    for (i, note) in sequence.notes.iter().enumerate() {
        let note_path = format!("{}.notes[{}]", path, i);
        check(
            validate_positive("beats", note.beats),
            ErrorCode::InvalidDuration,
            format!("{}.beats", note_path),
            result,
        );
        validate_pitch(&note.pitch, &note_path, false, result);
    }
}

fn validate_pitch(pitch: &Pitch, path: &str, in_chord: bool, result: &mut ValidationResult) {
    match pitch {
        Pitch::Hz(freq) => check(
            validate_non_negative("frequency", *freq),
            ErrorCode::InvalidFrequency,
            path.to_string(),
            result,
        ),
        Pitch::Label(_) => {}
        Pitch::Chord(_) if in_chord => {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidChord,
                "chords cannot be nested",
                path,
            ));
        }
        Pitch::Chord(voices) => {
            if voices.is_empty() {
                result.add_error(ValidationError::with_path(
                    ErrorCode::InvalidChord,
                    "chord must have at least one voice",
                    path,
                ));
            }
            for (i, voice) in voices.iter().enumerate() {
                validate_pitch(voice, &format!("{}[{}]", path, i), true, result);
            }
        }
    }
}

fn validate_voice(voice: &Voice, path: &str, result: &mut ValidationResult) {
    check(
        validate_volume("volume", voice.volume),
        ErrorCode::InvalidVolume,
        format!("{}.volume", path),
        result,
    );

    if let Some(envelope) = &voice.envelope {
        validate_envelope(envelope, &format!("{}.envelope", path), result);
    }

    let timbre_path = format!("{}.timbre", path);
    match &voice.timbre {
        TimbreSpec::Preset(name) => {
            if Timbre::preset(name).is_none() {
                result.add_error(ValidationError::with_path(
                    ErrorCode::InvalidTimbre,
                    format!("unknown timbre preset '{}'", name),
                    timbre_path,
                ));
            }
        }
        TimbreSpec::Custom(timbre) => validate_timbre(timbre, &timbre_path, result),
    }
}

fn validate_envelope(envelope: &Envelope, path: &str, result: &mut ValidationResult) {
    for (name, value) in [
        ("attack", envelope.attack),
        ("decay", envelope.decay),
        ("release", envelope.release),
    ] {
        check(
            validate_non_negative(name, value),
            ErrorCode::InvalidEnvelope,
            format!("{}.{}", path, name),
            result,
        );
    }
    check(
        validate_unit_interval("sustain", envelope.sustain),
        ErrorCode::InvalidEnvelope,
        format!("{}.sustain", path),
        result,
    );
}

fn validate_timbre(timbre: &Timbre, path: &str, result: &mut ValidationResult) {
    check(
        validate_non_negative("fundamental", timbre.fundamental),
        ErrorCode::InvalidTimbre,
        format!("{}.fundamental", path),
        result,
    );
    for (i, weight) in timbre.overtones.iter().enumerate() {
        check(
            validate_non_negative("overtone weight", *weight),
            ErrorCode::InvalidTimbre,
            format!("{}.overtones[{}]", path, i),
            result,
        );
    }
    check(
        validate_positive("divisor", timbre.divisor),
        ErrorCode::InvalidTimbre,
        format!("{}.divisor", path),
        result,
    );
}
