//! Periodic waveform formulas.
//!
//! Every formula is evaluated directly at time `t = n / sample_rate`, so a
//! buffer is a pure function of its frequency, length, and sample rate.

use std::f64::consts::{FRAC_2_PI, TAU};

use chiptone_spec::Waveform;
use rand::Rng;
use rand_pcg::Pcg32;

/// A waveform with a closed-form periodic formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// sin(2πft)
    Sine,
    /// sign(sin(2πft))
    Square,
    /// (2/π)·asin(sin(2πft))
    Triangle,
    /// 2·(ft − floor(0.5 + ft))
    Sawtooth,
}

impl Shape {
    /// The periodic shape of a waveform kind, or None for noise.
    pub fn from_waveform(waveform: Waveform) -> Option<Self> {
        match waveform {
            Waveform::Sine => Some(Shape::Sine),
            Waveform::Square => Some(Shape::Square),
            Waveform::Triangle => Some(Shape::Triangle),
            Waveform::Sawtooth => Some(Shape::Sawtooth),
            Waveform::Noise => None,
        }
    }

    /// Evaluates the shape at frequency `freq` and time `t` (seconds).
    #[inline]
    pub fn at(self, freq: f64, t: f64) -> f64 {
        match self {
            Shape::Sine => sine(freq, t),
            Shape::Square => square(freq, t),
            Shape::Triangle => triangle(freq, t),
            Shape::Sawtooth => sawtooth(freq, t),
        }
    }
}

/// Sine wave.
#[inline]
pub fn sine(freq: f64, t: f64) -> f64 {
    (TAU * freq * t).sin()
}

/// Square wave as the sign of a sine; exactly 0 at the zero crossings.
#[inline]
pub fn square(freq: f64, t: f64) -> f64 {
    let s = sine(freq, t);
    if s > 0.0 {
        1.0
    } else if s < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Triangle wave.
#[inline]
pub fn triangle(freq: f64, t: f64) -> f64 {
    FRAC_2_PI * sine(freq, t).asin()
}

/// Sawtooth wave rising from -1 to 1 once per period.
#[inline]
pub fn sawtooth(freq: f64, t: f64) -> f64 {
    let x = t * freq;
    2.0 * (x - (0.5 + x).floor())
}

/// Uniform white noise in [-1, 1].
pub fn white_noise(rng: &mut Pcg32, num_samples: usize) -> Vec<f64> {
    (0..num_samples).map(|_| rng.gen_range(-1.0..=1.0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_square_is_zero_at_origin() {
        assert_eq!(square(440.0, 0.0), 0.0);
        assert_eq!(square(1.0, 0.25), 1.0);
        assert_eq!(square(1.0, 0.75), -1.0);
    }

    #[test]
    fn test_triangle_peaks() {
        assert!((triangle(1.0, 0.25) - 1.0).abs() < 1e-12);
        assert!((triangle(1.0, 0.75) + 1.0).abs() < 1e-12);
        assert!((triangle(1.0, 0.125) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_sawtooth_ramp() {
        assert_eq!(sawtooth(1.0, 0.0), 0.0);
        assert!((sawtooth(1.0, 0.25) - 0.5).abs() < 1e-12);
        assert!((sawtooth(1.0, 0.75) + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_noise_has_no_shape() {
        assert_eq!(Shape::from_waveform(Waveform::Noise), None);
        assert_eq!(Shape::from_waveform(Waveform::Sawtooth), Some(Shape::Sawtooth));
    }

    #[test]
    fn test_white_noise_range() {
        let noise = white_noise(&mut create_rng(3), 4096);
        assert_eq!(noise.len(), 4096);
        assert!(noise.iter().all(|s| (-1.0..=1.0).contains(s)));
        assert!(noise.iter().any(|&s| s > 0.5));
        assert!(noise.iter().any(|&s| s < -0.5));
    }
}
