//! Periodic tone with harmonic enrichment.
//!
//! The fundamental uses the voice's waveform formula. Overtone `i` (0-based)
//! sounds at `(i + 2) * f` with weight `timbre.overtones[i]`, using either the
//! same formula or a pure sine depending on the timbre's overtone shape. The
//! sum is divided by the timbre's divisor.

use chiptone_spec::{OvertoneShape, Timbre};
use rand_pcg::Pcg32;

use crate::oscillator::Shape;

use super::Synthesizer;

/// A single pitched voice.
#[derive(Debug, Clone)]
pub struct ToneSynth {
    /// Fundamental frequency in Hz; 0 renders silence.
    pub frequency: f64,
    /// Waveform of the fundamental.
    pub shape: Shape,
    /// Harmonic weights.
    pub timbre: Timbre,
}

impl ToneSynth {
    /// Creates a tone with the given timbre.
    pub fn new(frequency: f64, shape: Shape, timbre: Timbre) -> Self {
        Self {
            frequency,
            shape,
            timbre,
        }
    }

    /// Creates a bare tone with no overtones.
    pub fn pure(frequency: f64, shape: Shape) -> Self {
        Self::new(frequency, shape, Timbre::pure())
    }

    fn overtone_shape(&self) -> Shape {
        match self.timbre.shape {
            OvertoneShape::Base => self.shape,
            OvertoneShape::Sine => Shape::Sine,
        }
    }
}

impl Synthesizer for ToneSynth {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, _rng: &mut Pcg32) -> Vec<f64> {
        if self.frequency == 0.0 {
            return vec![0.0; num_samples];
        }

        let overtone_shape = self.overtone_shape();
        let gain = 1.0 / self.timbre.divisor;

        (0..num_samples)
            .map(|n| {
                let t = n as f64 / sample_rate;
                let mut sample = self.timbre.fundamental * self.shape.at(self.frequency, t);
                for (i, &weight) in self.timbre.overtones.iter().enumerate() {
                    if weight != 0.0 {
                        let harmonic = (i + 2) as f64 * self.frequency;
                        sample += weight * overtone_shape.at(harmonic, t);
                    }
                }
                sample * gain
            })
            .collect()
    }
}
