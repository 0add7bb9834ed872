//! WAV file generation result type.

use std::path::Path;

use chiptone_spec::SampleFormat;

use super::builder::WavWriter;
use super::pcm::pcm_hash;
use super::writer::write_wav_to_vec;

/// Result of WAV file generation.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of PCM data only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Sample width.
    pub sample_format: SampleFormat,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Quantizes and serializes mono samples.
    pub fn from_samples(samples: &[f64], sample_rate: u32, sample_format: SampleFormat) -> Self {
        let writer = WavWriter::mono(sample_rate, sample_format);
        let pcm = writer.encode(samples);
        let pcm_hash = pcm_hash(&pcm);
        let wav_data = write_wav_to_vec(&writer.format(), &pcm);

        Self {
            wav_data,
            pcm_hash,
            sample_rate,
            sample_format,
            num_samples: samples.len(),
        }
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }

    /// Writes the WAV bytes to `path`.
    pub fn write_to(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, &self.wav_data)
    }
}
