//! chiptone Audio Backend
//!
//! This crate renders chiptone cues into deterministic mono WAV files.
//!
//! # Overview
//!
//! A cue is a set of layers sounding together. Each layer becomes one track:
//!
//! - **Sequence** - notes at a tempo, rendered by [`sequencer::NoteSequencer`]
//! - **Tone** - a single held frequency
//! - **Percussion** - noise bursts on a rhythm grid, rendered by
//!   [`percussion::PercussionGenerator`]
//!
//! Tones are produced by [`waveform::WaveformGenerator`] (sine, square,
//! triangle, sawtooth, or noise, with weighted overtones) and shaped by
//! [`envelope::EnvelopeShaper`]. Tracks are combined by
//! [`mixer::TrackMixer`] with either hard clipping or peak normalization, and
//! quantized to 8-bit or 16-bit PCM by [`wav`].
//!
//! # Determinism
//!
//! Given the same cue and seed, the output is byte-identical across runs.
//! All noise comes from PCG32 generators, one per layer, with seeds derived
//! via BLAKE3 hashing.
//!
//! # Example
//!
//! ```
//! use chiptone_backend_audio::generate;
//! use chiptone_spec::find_cue;
//!
//! let cue = find_cue("move").unwrap().default_variant().cue.clone();
//! let result = generate(&cue).unwrap();
//!
//! assert_eq!(result.file_name(), "move.wav");
//! assert_eq!(result.wav.pcm_hash.len(), 64);
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - Main entry point for cue generation
//! - [`pitch`] - Note label to frequency table
//! - [`oscillator`] - Waveform formulas
//! - [`synthesis`] - Tone and noise synthesizers
//! - [`waveform`] - Unshaped tone rendering
//! - [`envelope`] - ADSR envelope shaping
//! - [`sequencer`] - Note sequence rendering
//! - [`percussion`] - Rhythm-grid noise bursts
//! - [`mixer`] - Track mixing, clipping, and normalization
//! - [`rng`] - Deterministic RNG with seed derivation
//! - [`wav`] - Deterministic WAV file writer

pub mod envelope;
pub mod error;
pub mod generate;
pub mod mixer;
pub mod oscillator;
pub mod percussion;
pub mod pitch;
pub mod rng;
pub mod sequencer;
pub mod synthesis;
pub mod waveform;
pub mod wav;

// Re-export main types at crate root
pub use envelope::EnvelopeShaper;
pub use error::{AudioError, AudioResult};
pub use generate::{generate, generate_with_pitches, render_cue, GenerateResult};
pub use mixer::{Track, TrackMixer};
pub use percussion::PercussionGenerator;
pub use pitch::PitchTable;
pub use sequencer::NoteSequencer;
pub use waveform::WaveformGenerator;
pub use wav::{WavResult, WavWriter};
