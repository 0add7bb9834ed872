//! Buffer-level processing: summing, clipping, normalization, tiling.

use chiptone_spec::MixMode;

/// Maximum absolute sample value, or 0 for an empty buffer.
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().map(|s| s.abs()).fold(0.0_f64, f64::max)
}

/// Hard-limits every sample to [-1, 1].
pub fn clip(samples: &mut [f64]) {
    for sample in samples.iter_mut() {
        *sample = sample.clamp(-1.0, 1.0);
    }
}

/// Divides every sample by the buffer peak so the loudest sample reaches
/// full scale. Silent buffers are left untouched.
pub fn normalize(samples: &mut [f64]) {
    let current_peak = peak(samples);
    if current_peak > 0.0 {
        for sample in samples.iter_mut() {
            *sample /= current_peak;
        }
    }
}

/// Applies the limiting step for `mode`.
pub fn apply_mix_mode(samples: &mut [f64], mode: MixMode) {
    match mode {
        MixMode::Clip => clip(samples),
        MixMode::Normalize => normalize(samples),
    }
}

/// Sums buffers placed at start offsets into one buffer long enough to
/// hold the latest end. Gaps and trailing space are silence.
///
/// Returns None if an end does not fit in `usize`.
pub fn sum_padded<'a, I>(parts: I) -> Option<Vec<f64>>
where
    I: IntoIterator<Item = (usize, &'a [f64])> + Clone,
{
    let mut len = 0;
    for (start, samples) in parts.clone() {
        len = len.max(start.checked_add(samples.len())?);
    }

    let mut output = vec![0.0; len];
    for (start, samples) in parts {
        for (out, &sample) in output[start..].iter_mut().zip(samples) {
            *out += sample;
        }
    }
    Some(output)
}

/// Repeats a buffer `times` times back to back.
pub fn tile(samples: &[f64], times: usize) -> Vec<f64> {
    samples.repeat(times)
}
