//! ADSR envelope shaping.
//!
//! The envelope is computed per buffer, not as a running state machine: the
//! four phase lengths are derived from the buffer length up front and each
//! phase is a straight line between its end points.
//!
//! - attack: 0 → 1
//! - decay: 1 → sustain
//! - sustain: flat at the sustain level
//! - release: last level reached → 0

use chiptone_spec::Envelope;

use crate::error::{check_sample_rate, AudioResult};

/// Sample counts of the four envelope phases. They always sum to the
/// buffer length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseLengths {
    /// Attack samples.
    pub attack: usize,
    /// Decay samples.
    pub decay: usize,
    /// Sustain samples.
    pub sustain: usize,
    /// Release samples.
    pub release: usize,
}

impl PhaseLengths {
    /// Total samples across all phases.
    pub fn total(&self) -> usize {
        self.attack + self.decay + self.sustain + self.release
    }
}

/// Applies an ADSR envelope to rendered buffers.
#[derive(Debug, Clone, Copy)]
pub struct EnvelopeShaper {
    envelope: Envelope,
    sample_rate: f64,
}

impl EnvelopeShaper {
    /// Creates a shaper for `envelope` at `sample_rate`.
    pub fn new(envelope: Envelope, sample_rate: f64) -> AudioResult<Self> {
        check_sample_rate(sample_rate)?;
        Ok(Self {
            envelope,
            sample_rate,
        })
    }

    /// The fixed envelope used for percussion hits.
    pub fn percussive(sample_rate: f64) -> AudioResult<Self> {
        Self::new(Envelope::percussive(), sample_rate)
    }

    /// Phase sample counts for a buffer of `num_samples`.
    ///
    /// The envelope is first fitted to the buffer duration, then each timed
    /// phase is rounded to whole samples. Rounding overshoot is taken from
    /// the later phases so the total never exceeds the buffer. A non-zero
    /// release keeps at least one sample so the buffer still ends silent.
    pub fn phase_lengths(&self, num_samples: usize) -> PhaseLengths {
        let duration = num_samples as f64 / self.sample_rate;
        let fitted = self.envelope.fitted(duration);
        let to_samples = |seconds: f64| (seconds * self.sample_rate).round().max(0.0) as usize;

        let attack = to_samples(fitted.attack).min(num_samples);
        let decay = to_samples(fitted.decay).min(num_samples - attack);
        let release = to_samples(fitted.release)
            .max(usize::from(fitted.release > 0.0))
            .min(num_samples - attack - decay);
        let sustain = num_samples - attack - decay - release;

        PhaseLengths {
            attack,
            decay,
            sustain,
            release,
        }
    }

    /// The per-sample gain curve for a buffer of `num_samples`.
    pub fn curve(&self, num_samples: usize) -> Vec<f64> {
        let phases = self.phase_lengths(num_samples);
        let sustain_level = self.envelope.sustain;
        let mut curve = Vec::with_capacity(num_samples);

        ramp(&mut curve, 0.0, 1.0, phases.attack);
        ramp(&mut curve, 1.0, sustain_level, phases.decay);
        curve.resize(curve.len() + phases.sustain, sustain_level);

        let release_from = curve.last().copied().unwrap_or(sustain_level);
        match phases.release {
            // A single release sample is the final zero.
            1 => curve.push(0.0),
            n => ramp(&mut curve, release_from, 0.0, n),
        }

        curve
    }

    /// Multiplies `samples` by the envelope curve in place.
    pub fn apply(&self, samples: &mut [f64]) {
        let curve = self.curve(samples.len());
        for (sample, gain) in samples.iter_mut().zip(curve) {
            *sample *= gain;
        }
    }
}

/// Appends `count` evenly spaced values from `start` to `end` inclusive.
fn ramp(out: &mut Vec<f64>, start: f64, end: f64, count: usize) {
    match count {
        0 => {}
        1 => out.push(start),
        _ => {
            let step = (end - start) / (count - 1) as f64;
            out.extend((0..count).map(|i| start + step * i as f64));
        }
    }
}
