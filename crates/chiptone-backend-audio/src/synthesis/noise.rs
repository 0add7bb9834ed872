//! White noise synthesis.

use rand_pcg::Pcg32;

use crate::oscillator;

use super::Synthesizer;

/// Uniform white noise in [-1, 1].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoiseSynth;

impl NoiseSynth {
    /// Creates a white noise synthesizer.
    pub fn white() -> Self {
        NoiseSynth
    }
}

impl Synthesizer for NoiseSynth {
    fn synthesize(&self, num_samples: usize, _sample_rate: f64, rng: &mut Pcg32) -> Vec<f64> {
        oscillator::white_noise(rng, num_samples)
    }
}
