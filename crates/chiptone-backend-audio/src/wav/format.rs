//! WAV file format parameters.

use chiptone_spec::SampleFormat;

/// WAV file format parameters. Output is always mono.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (8 or 16).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a mono format with the given sample width.
    pub fn mono(sample_rate: u32, sample_format: SampleFormat) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: sample_format.bits(),
        }
    }

    /// Calculates bytes per sample (per channel).
    pub(crate) fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Calculates block align (bytes per sample frame).
    pub(crate) fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Calculates byte rate (bytes per second).
    pub(crate) fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}
