//! chiptone Cue Spec Library
//!
//! This crate provides the configuration types, named presets, and validation
//! for chiptone cues. A cue is a declarative description of one exported sound
//! (a short stinger or a loopable background track): one or more layers of
//! sequenced notes, single tones, or percussion, mixed into a mono buffer.
//!
//! # Example
//!
//! ```
//! use chiptone_spec::{CueSpec, LayerSpec, MixMode, Sequence, Voice, Waveform};
//! use chiptone_spec::validation::validate_cue;
//!
//! let melody = Sequence::from_pairs(120.0, &[("A4", 0.25), ("C5", 0.25), ("E5", 0.25)]);
//! let cue = CueSpec::builder("arpeggio")
//!     .mix_mode(MixMode::Normalize)
//!     .layer(LayerSpec::sequence(melody, Voice::new(Waveform::Square, 0.25)))
//!     .build();
//!
//! assert!(validate_cue(&cue).is_ok());
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error codes and validation result types
//! - [`note`]: Pitches, notes, and tempo-bound sequences
//! - [`synthesis`]: Waveforms, envelopes, timbres, and voices
//! - [`cue`]: Cue recipes, layers, mix modes, and sample formats
//! - [`catalog`]: Built-in cue catalog with named variants
//! - [`validation`]: Cue validation

pub mod catalog;
pub mod cue;
pub mod error;
pub mod note;
pub mod synthesis;
pub mod validation;

// Re-export commonly used types at the crate root
pub use catalog::{catalog, find_cue, CatalogCue, CueVariant};
pub use cue::{CueBuilder, CueSpec, LayerSpec, MixMode, RhythmPattern, SampleFormat};
pub use error::{BackendError, ErrorCode, SpecError, ValidationError, ValidationResult};
pub use note::{Note, Pitch, Sequence, REST_LABEL};
pub use synthesis::{
    Envelope, OvertoneShape, Timbre, TimbreSpec, Voice, Waveform, TIMBRE_PRESETS,
};
