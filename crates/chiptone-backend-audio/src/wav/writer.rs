//! Core WAV writing and PCM conversion functions.

use std::io::{self, Write};

use chiptone_spec::SampleFormat;

use super::format::WavFormat;

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    // RIFF payload: "WAVE", the 24-byte fmt chunk, the data chunk header, and
    // the samples plus a pad byte when the sample data has odd length.
    let pad = data_size % 2;
    let riff_size = 36 + data_size + pad;

    writer.write_all(b"RIFF")?;
    writer.write_all(&riff_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?;
    writer.write_all(&1u16.to_le_bytes())?; // PCM
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;
    if pad == 1 {
        writer.write_all(&[0])?;
    }

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(45 + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data).expect("writing to Vec should not fail");
    buffer
}

/// Converts f64 samples to 16-bit PCM bytes.
///
/// Samples are clamped to [-1.0, 1.0] and scaled by 32767.
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);

    for &sample in samples {
        let clipped = sample.clamp(-1.0, 1.0);
        let pcm_value = (clipped * 32767.0).round() as i16;
        pcm.extend_from_slice(&pcm_value.to_le_bytes());
    }

    pcm
}

/// Converts f64 samples to 8-bit PCM bytes.
///
/// Samples are clamped to [-1.0, 1.0], scaled by 127 to a signed value, and
/// stored offset by 128 as WAV requires for 8-bit data. Silence is 128.
pub fn samples_to_pcm8(samples: &[f64]) -> Vec<u8> {
    samples
        .iter()
        .map(|&sample| {
            let signed = (sample.clamp(-1.0, 1.0) * 127.0).round() as i16;
            (signed + 128) as u8
        })
        .collect()
}

/// Converts samples to PCM bytes of the given width.
pub fn encode_pcm(samples: &[f64], sample_format: SampleFormat) -> Vec<u8> {
    match sample_format {
        SampleFormat::Pcm8 => samples_to_pcm8(samples),
        SampleFormat::Pcm16 => samples_to_pcm16(samples),
    }
}
