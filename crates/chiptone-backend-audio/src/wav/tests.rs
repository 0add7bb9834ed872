//! Tests for the WAV writer module.

use chiptone_spec::SampleFormat;

use super::builder::WavWriter;
use super::format::WavFormat;
use super::pcm::{compute_pcm_hash, extract_pcm_data};
use super::result::WavResult;
use super::writer::{encode_pcm, samples_to_pcm16, samples_to_pcm8, write_wav_to_vec};

fn u16_at(wav: &[u8], pos: usize) -> u16 {
    u16::from_le_bytes([wav[pos], wav[pos + 1]])
}

fn u32_at(wav: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes([wav[pos], wav[pos + 1], wav[pos + 2], wav[pos + 3]])
}

// =========================================================================
// WavFormat tests
// =========================================================================

#[test]
fn test_wav_format_pcm16() {
    let format = WavFormat::mono(44100, SampleFormat::Pcm16);
    assert_eq!(format.channels, 1);
    assert_eq!(format.bits_per_sample, 16);
    assert_eq!(format.block_align(), 2);
    assert_eq!(format.byte_rate(), 88200);
}

#[test]
fn test_wav_format_pcm8() {
    let format = WavFormat::mono(44100, SampleFormat::Pcm8);
    assert_eq!(format.bits_per_sample, 8);
    assert_eq!(format.bytes_per_sample(), 1);
    assert_eq!(format.block_align(), 1);
    assert_eq!(format.byte_rate(), 44100);
}

// =========================================================================
// PCM conversion tests
// =========================================================================

#[test]
fn test_samples_to_pcm16_values() {
    let pcm = samples_to_pcm16(&[0.0, 0.5, -0.5, 1.0, -1.0]);
    assert_eq!(pcm.len(), 10);
    let values: Vec<i16> = pcm
        .chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]))
        .collect();
    assert_eq!(values, vec![0, 16384, -16384, 32767, -32767]);
}

#[test]
fn test_samples_to_pcm16_clipping() {
    let pcm = samples_to_pcm16(&[1.5, -10.0, f64::MAX, f64::MIN]);
    let values: Vec<i16> = pcm
        .chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]))
        .collect();
    assert_eq!(values, vec![32767, -32767, 32767, -32767]);
}

#[test]
fn test_samples_to_pcm8_offset_binary() {
    let pcm = samples_to_pcm8(&[0.0, 1.0, -1.0, 0.5, -0.5, 2.0, -2.0]);
    // 0.5 * 127 = 63.5 rounds away from zero
    assert_eq!(pcm, vec![128, 255, 1, 192, 64, 255, 1]);
}

#[test]
fn test_encode_pcm_dispatches_on_width() {
    let samples = [0.25, -0.25];
    assert_eq!(encode_pcm(&samples, SampleFormat::Pcm8), samples_to_pcm8(&samples));
    assert_eq!(encode_pcm(&samples, SampleFormat::Pcm16), samples_to_pcm16(&samples));
}

// =========================================================================
// WAV header correctness tests
// =========================================================================

#[test]
fn test_wav_header_pcm16() {
    let format = WavFormat::mono(44100, SampleFormat::Pcm16);
    let wav = write_wav_to_vec(&format, &samples_to_pcm16(&[0.0; 10]));

    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(&wav[8..12], b"WAVE");
    assert_eq!(&wav[12..16], b"fmt ");
    assert_eq!(u32_at(&wav, 16), 16);
    assert_eq!(u16_at(&wav, 20), 1);
    assert_eq!(u16_at(&wav, 22), 1);
    assert_eq!(u32_at(&wav, 24), 44100);
    assert_eq!(u32_at(&wav, 28), 88200);
    assert_eq!(u16_at(&wav, 32), 2);
    assert_eq!(u16_at(&wav, 34), 16);
    assert_eq!(&wav[36..40], b"data");
    assert_eq!(u32_at(&wav, 40), 20);
    assert_eq!(u32_at(&wav, 4), wav.len() as u32 - 8);
    assert_eq!(wav.len(), 64);
}

#[test]
fn test_wav_header_pcm8_odd_length_is_padded() {
    let format = WavFormat::mono(22050, SampleFormat::Pcm8);
    let wav = write_wav_to_vec(&format, &samples_to_pcm8(&[0.0; 5]));

    assert_eq!(u32_at(&wav, 24), 22050);
    assert_eq!(u32_at(&wav, 28), 22050);
    assert_eq!(u16_at(&wav, 32), 1);
    assert_eq!(u16_at(&wav, 34), 8);
    assert_eq!(u32_at(&wav, 40), 5);
    assert_eq!(wav.len(), 44 + 5 + 1);
    assert_eq!(u32_at(&wav, 4), wav.len() as u32 - 8);
    assert_eq!(extract_pcm_data(&wav), Some(&[128u8; 5][..]));
}

#[test]
fn test_empty_audio() {
    let format = WavFormat::mono(44100, SampleFormat::Pcm16);
    let wav = write_wav_to_vec(&format, &[]);
    assert_eq!(wav.len(), 44);
    assert_eq!(u32_at(&wav, 40), 0);
    assert_eq!(extract_pcm_data(&wav), Some(&[][..]));
}

// =========================================================================
// PCM extraction and hashing tests
// =========================================================================

#[test]
fn test_extract_pcm_rejects_garbage() {
    assert_eq!(extract_pcm_data(b"not a wav file"), None);
    assert_eq!(extract_pcm_data(&[0u8; 64]), None);
}

#[test]
fn test_extract_pcm_rejects_truncated_data() {
    let mut wav = WavWriter::pcm16(44100).write(&[0.5; 8]);
    wav.truncate(50);
    assert_eq!(extract_pcm_data(&wav), None);
}

#[test]
fn test_compute_pcm_hash_matches_writer_hash() {
    let writer = WavWriter::pcm16(44100);
    let samples = vec![0.5, -0.5, 0.3, -0.3, 0.0];
    let wav = writer.write(&samples);

    assert_eq!(compute_pcm_hash(&wav), Some(writer.pcm_hash(&samples)));
    assert_eq!(writer.pcm_hash(&samples).len(), 64);
}

#[test]
fn test_pcm_hash_depends_on_width() {
    let samples = vec![0.5, -0.5, 0.3];
    assert_ne!(
        WavWriter::pcm8(44100).pcm_hash(&samples),
        WavWriter::pcm16(44100).pcm_hash(&samples)
    );
}

#[test]
fn test_pcm_hash_different_for_different_samples() {
    let writer = WavWriter::pcm16(44100);
    assert_ne!(
        writer.pcm_hash(&[0.5, -0.5, 0.3]),
        writer.pcm_hash(&[0.5, -0.5, 0.31])
    );
}

// =========================================================================
// WavResult tests
// =========================================================================

#[test]
fn test_wav_result_from_samples() {
    let samples = vec![0.25; 4410];
    let result = WavResult::from_samples(&samples, 44100, SampleFormat::Pcm8);

    assert_eq!(result.num_samples, 4410);
    assert_eq!(result.sample_format, SampleFormat::Pcm8);
    assert!((result.duration_seconds() - 0.1).abs() < 1e-12);
    assert_eq!(result.wav_data.len(), 44 + 4410);
    assert_eq!(compute_pcm_hash(&result.wav_data), Some(result.pcm_hash.clone()));
}

#[test]
fn test_wav_result_is_deterministic() {
    let samples: Vec<f64> = (0..1000).map(|i| (i as f64 * 0.05).sin()).collect();
    let a = WavResult::from_samples(&samples, 44100, SampleFormat::Pcm16);
    let b = WavResult::from_samples(&samples, 44100, SampleFormat::Pcm16);
    assert_eq!(a.wav_data, b.wav_data);
    assert_eq!(a.pcm_hash, b.pcm_hash);
}

#[test]
fn test_wav_result_write_to() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cue.wav");
    let result = WavResult::from_samples(&[0.1, 0.2], 44100, SampleFormat::Pcm16);
    result.write_to(&path).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), result.wav_data);
}
