//! PCM data extraction and hashing utilities.

/// BLAKE3 hex digest of raw PCM bytes.
pub fn pcm_hash(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}

/// Extracts PCM data from a WAV file buffer.
///
/// Returns None if the buffer is not a RIFF/WAVE file or has no complete
/// data chunk.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.get(0..4)? != b"RIFF" || wav_data.get(8..12)? != b"WAVE" {
        return None;
    }

    let mut rest = &wav_data[12..];
    while let Some(header) = rest.get(..8) {
        let size = u32::from_le_bytes(header[4..8].try_into().ok()?) as usize;
        let body = &rest[8..];
        if &header[..4] == b"data" {
            return body.get(..size);
        }
        // Chunks are word aligned
        rest = body.get(size + size % 2..)?;
    }

    None
}

/// Computes the PCM hash of a WAV file, or None if the format is invalid.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(pcm_hash)
}
