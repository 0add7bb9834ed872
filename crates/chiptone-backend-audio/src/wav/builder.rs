//! WAV file writer builder pattern.

use chiptone_spec::SampleFormat;

use super::format::WavFormat;
use super::pcm::pcm_hash;
use super::writer::{encode_pcm, write_wav_to_vec};

/// Mono WAV writer for a fixed sample rate and width.
#[derive(Debug, Clone, Copy)]
pub struct WavWriter {
    format: WavFormat,
    sample_format: SampleFormat,
}

impl WavWriter {
    /// Creates a mono writer.
    pub fn mono(sample_rate: u32, sample_format: SampleFormat) -> Self {
        Self {
            format: WavFormat::mono(sample_rate, sample_format),
            sample_format,
        }
    }

    /// Creates a mono 16-bit writer.
    pub fn pcm16(sample_rate: u32) -> Self {
        Self::mono(sample_rate, SampleFormat::Pcm16)
    }

    /// Creates a mono 8-bit writer.
    pub fn pcm8(sample_rate: u32) -> Self {
        Self::mono(sample_rate, SampleFormat::Pcm8)
    }

    /// The header parameters this writer emits.
    pub fn format(&self) -> WavFormat {
        self.format
    }

    /// Quantizes samples to this writer's PCM width.
    pub fn encode(&self, samples: &[f64]) -> Vec<u8> {
        encode_pcm(samples, self.sample_format)
    }

    /// Writes samples to a complete WAV byte vector.
    pub fn write(&self, samples: &[f64]) -> Vec<u8> {
        write_wav_to_vec(&self.format, &self.encode(samples))
    }

    /// BLAKE3 hash of the PCM data (not the full WAV file).
    pub fn pcm_hash(&self, samples: &[f64]) -> String {
        pcm_hash(&self.encode(samples))
    }
}
