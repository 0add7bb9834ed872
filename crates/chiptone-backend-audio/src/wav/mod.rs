//! Deterministic WAV file writer.
//!
//! Writes mono 8-bit or 16-bit PCM WAV files with no timestamps or variable
//! metadata, so identical buffers always produce identical files. The BLAKE3
//! hash of the PCM data identifies a render independently of the header.

mod builder;
mod format;
mod pcm;
mod result;
mod writer;

#[cfg(test)]
mod tests;

// Re-export public API
pub use builder::WavWriter;
pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, extract_pcm_data, pcm_hash};
pub use result::WavResult;
pub use writer::{encode_pcm, samples_to_pcm16, samples_to_pcm8, write_wav, write_wav_to_vec};
