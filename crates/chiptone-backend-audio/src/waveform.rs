//! Raw tone rendering.
//!
//! A [`WaveformGenerator`] turns (frequency, duration, waveform, timbre,
//! volume) into a sample buffer. It does not shape the result; envelopes are
//! applied afterwards by [`crate::envelope::EnvelopeShaper`].

use chiptone_spec::{Timbre, TimbreSpec, Waveform};
use rand_pcg::Pcg32;

use crate::error::{check_duration, check_sample_rate, AudioError, AudioResult};
use crate::oscillator::Shape;
use crate::synthesis::{NoiseSynth, Synthesizer, ToneSynth};

/// Number of samples covering `duration` seconds at `sample_rate`.
pub fn sample_count(sample_rate: f64, duration: f64) -> usize {
    (sample_rate * duration).round().max(0.0) as usize
}

/// Resolves a timbre spec, failing on unknown preset names.
pub fn resolve_timbre(spec: &TimbreSpec) -> AudioResult<Timbre> {
    spec.resolve().ok_or_else(|| match spec {
        TimbreSpec::Preset(name) => {
            AudioError::invalid_param("timbre", format!("unknown preset '{}'", name))
        }
        TimbreSpec::Custom(_) => AudioError::invalid_param("timbre", "unresolvable timbre"),
    })
}

/// Fails unless `volume` is in (0, 1].
pub(crate) fn check_volume(volume: f64) -> AudioResult<()> {
    if volume > 0.0 && volume <= 1.0 {
        Ok(())
    } else {
        Err(AudioError::invalid_param(
            "volume",
            format!("must be in (0, 1], got {}", volume),
        ))
    }
}

/// Renders unshaped tones at a fixed sample rate.
#[derive(Debug, Clone, Copy)]
pub struct WaveformGenerator {
    sample_rate: f64,
}

impl WaveformGenerator {
    /// Creates a generator for `sample_rate` Hz.
    pub fn new(sample_rate: f64) -> AudioResult<Self> {
        check_sample_rate(sample_rate)?;
        Ok(Self { sample_rate })
    }

    /// The generator's sample rate.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Renders `duration` seconds of `waveform` at `frequency`.
    ///
    /// Output length is `round(sample_rate * duration)`. A frequency of 0 is
    /// silence for every waveform, noise included. Noise ignores `timbre`.
    pub fn render(
        &self,
        frequency: f64,
        duration: f64,
        waveform: Waveform,
        timbre: &Timbre,
        volume: f64,
        rng: &mut Pcg32,
    ) -> AudioResult<Vec<f64>> {
        check_duration(duration)?;
        self.render_samples(
            frequency,
            sample_count(self.sample_rate, duration),
            waveform,
            timbre,
            volume,
            rng,
        )
    }

    /// Renders exactly `num_samples` samples.
    pub fn render_samples(
        &self,
        frequency: f64,
        num_samples: usize,
        waveform: Waveform,
        timbre: &Timbre,
        volume: f64,
        rng: &mut Pcg32,
    ) -> AudioResult<Vec<f64>> {
        if !frequency.is_finite() || frequency < 0.0 {
            return Err(AudioError::invalid_param(
                "frequency",
                format!("must be a finite value >= 0, got {}", frequency),
            ));
        }
        check_volume(volume)?;

        if frequency == 0.0 {
            return Ok(vec![0.0; num_samples]);
        }

        let mut samples = match Shape::from_waveform(waveform) {
            Some(shape) => ToneSynth::new(frequency, shape, timbre.clone()).synthesize(
                num_samples,
                self.sample_rate,
                rng,
            ),
            None => NoiseSynth::white().synthesize(num_samples, self.sample_rate, rng),
        };

        if volume != 1.0 {
            for sample in &mut samples {
                *sample *= volume;
            }
        }
        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oscillator;
    use crate::rng::create_rng;

    const SR: f64 = 44100.0;

    fn generator() -> WaveformGenerator {
        WaveformGenerator::new(SR).unwrap()
    }

    #[test]
    fn test_sample_count_rounds() {
        assert_eq!(sample_count(SR, 1.0), 44100);
        assert_eq!(sample_count(SR, 0.125), 5513);
        assert_eq!(sample_count(SR, 0.1), 4410);
        assert_eq!(sample_count(22050.0, 0.3), 6615);
        assert_eq!(sample_count(8000.0, 0.00001), 0);
    }

    #[test]
    fn test_length_matches_duration() {
        let gen = generator();
        let mut rng = create_rng(0);
        for duration in [0.01, 0.15, 0.3, 1.0, 2.5] {
            let out = gen
                .render(440.0, duration, Waveform::Square, &Timbre::pure(), 1.0, &mut rng)
                .unwrap();
            assert_eq!(out.len(), sample_count(SR, duration));
        }
    }

    #[test]
    fn test_zero_frequency_is_silent_for_every_kind() {
        let gen = generator();
        let mut rng = create_rng(5);
        for waveform in [
            Waveform::Sine,
            Waveform::Square,
            Waveform::Triangle,
            Waveform::Sawtooth,
            Waveform::Noise,
        ] {
            let out = gen
                .render(0.0, 0.2, waveform, &Timbre::rich(), 0.8, &mut rng)
                .unwrap();
            assert_eq!(out.len(), 8820);
            assert!(out.iter().all(|&s| s == 0.0), "{} not silent", waveform);
        }
    }

    #[test]
    fn test_volume_scales_output() {
        let gen = generator();
        let mut rng = create_rng(0);
        let out = gen
            .render(440.0, 0.01, Waveform::Sine, &Timbre::pure(), 0.25, &mut rng)
            .unwrap();
        for (n, &s) in out.iter().enumerate() {
            let expected = 0.25 * oscillator::sine(440.0, n as f64 / SR);
            assert!((s - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_noise_is_seeded_and_bounded() {
        let gen = generator();
        let a = gen
            .render(1.0, 0.05, Waveform::Noise, &Timbre::pure(), 0.5, &mut create_rng(9))
            .unwrap();
        let b = gen
            .render(1.0, 0.05, Waveform::Noise, &Timbre::pure(), 0.5, &mut create_rng(9))
            .unwrap();
        assert_eq!(a, b);
        assert!(a.iter().all(|s| s.abs() <= 0.5));
    }

    #[test]
    fn test_invalid_inputs() {
        let gen = generator();
        let mut rng = create_rng(0);
        let timbre = Timbre::pure();

        assert!(matches!(
            gen.render(440.0, 0.0, Waveform::Sine, &timbre, 1.0, &mut rng),
            Err(AudioError::InvalidDuration { .. })
        ));
        assert!(matches!(
            gen.render(-1.0, 1.0, Waveform::Sine, &timbre, 1.0, &mut rng),
            Err(AudioError::InvalidParameter { .. })
        ));
        assert!(matches!(
            gen.render(440.0, 1.0, Waveform::Sine, &timbre, 0.0, &mut rng),
            Err(AudioError::InvalidParameter { .. })
        ));
        assert!(matches!(
            gen.render(440.0, 1.0, Waveform::Sine, &timbre, 1.5, &mut rng),
            Err(AudioError::InvalidParameter { .. })
        ));
        assert!(matches!(
            WaveformGenerator::new(-44100.0),
            Err(AudioError::InvalidSampleRate { .. })
        ));
    }

    #[test]
    fn test_resolve_timbre() {
        assert_eq!(
            resolve_timbre(&TimbreSpec::from("classic")).unwrap(),
            Timbre::classic()
        );
        let err = resolve_timbre(&TimbreSpec::from("vintage")).unwrap_err();
        assert!(err.to_string().contains("vintage"));
    }
}
