//! Synthesizers that fill a buffer of a given length.
//!
//! - `tone` - periodic waveform with weighted overtones
//! - `noise` - uniform white noise

pub mod noise;
pub mod tone;

use rand_pcg::Pcg32;

pub use noise::NoiseSynth;
pub use tone::ToneSynth;

/// Common trait for all synthesizers.
pub trait Synthesizer {
    /// Generates `num_samples` samples at `sample_rate`.
    ///
    /// Deterministic synthesizers ignore `rng`.
    fn synthesize(&self, num_samples: usize, sample_rate: f64, rng: &mut Pcg32) -> Vec<f64>;
}
