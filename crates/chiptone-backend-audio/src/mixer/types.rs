//! Core types for track mixing.

/// A mono sample buffer at a known sample rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Audio samples.
    pub samples: Vec<f64>,
    /// Sample rate in Hz.
    pub sample_rate: f64,
    /// Samples of silence before this track starts in a mix.
    pub delay_samples: usize,
}

impl Track {
    /// Creates a track starting at the beginning of the mix.
    pub fn new(samples: Vec<f64>, sample_rate: f64) -> Self {
        Self {
            samples,
            sample_rate,
            delay_samples: 0,
        }
    }

    /// Creates a silent track of `num_samples`.
    pub fn silent(num_samples: usize, sample_rate: f64) -> Self {
        Self::new(vec![0.0; num_samples], sample_rate)
    }

    /// Sets a delay for the track.
    pub fn with_delay(mut self, delay_samples: usize) -> Self {
        self.delay_samples = delay_samples;
        self
    }

    /// Sets a delay in seconds. Out-of-range delays saturate.
    pub fn with_delay_seconds(mut self, delay_seconds: f64) -> Self {
        self.delay_samples = (delay_seconds * self.sample_rate).round().max(0.0) as usize;
        self
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Index one past the last sample once the delay is applied, or None
    /// if it does not fit in `usize`.
    pub fn end(&self) -> Option<usize> {
        self.delay_samples.checked_add(self.samples.len())
    }

    /// Duration in seconds, excluding the delay.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate
    }
}
