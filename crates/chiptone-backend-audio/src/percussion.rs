//! Noise-burst percussion on a rhythm grid.

use chiptone_spec::RhythmPattern;
use rand_pcg::Pcg32;
use tracing::debug;

use crate::envelope::EnvelopeShaper;
use crate::error::{check_duration, check_tempo, AudioResult};
use crate::synthesis::{NoiseSynth, Synthesizer};
use crate::waveform::{check_volume, sample_count};

/// Renders hit/rest patterns as shaped white-noise bursts.
#[derive(Debug, Clone, Copy)]
pub struct PercussionGenerator {
    sample_rate: f64,
    shaper: EnvelopeShaper,
}

impl PercussionGenerator {
    /// Creates a generator using the fixed percussive envelope.
    pub fn new(sample_rate: f64) -> AudioResult<Self> {
        Ok(Self {
            sample_rate,
            shaper: EnvelopeShaper::percussive(sample_rate)?,
        })
    }

    /// Renders `pattern` with each slot lasting `slot_seconds`.
    ///
    /// Every slot has the same length; hits are noise, rests are silence.
    pub fn render(
        &self,
        pattern: &RhythmPattern,
        slot_seconds: f64,
        volume: f64,
        rng: &mut Pcg32,
    ) -> AudioResult<Vec<f64>> {
        check_duration(slot_seconds)?;
        check_volume(volume)?;

        let slot_len = sample_count(self.sample_rate, slot_seconds);
        let noise = NoiseSynth::white();
        let mut track = Vec::with_capacity(slot_len * pattern.len());

        for &hit in &pattern.slots {
            if hit {
                let mut burst = noise.synthesize(slot_len, self.sample_rate, rng);
                for sample in &mut burst {
                    *sample *= volume;
                }
                self.shaper.apply(&mut burst);
                track.extend_from_slice(&burst);
            } else {
                track.resize(track.len() + slot_len, 0.0);
            }
        }

        debug!(
            slots = pattern.len(),
            hits = pattern.hits(),
            samples = track.len(),
            "rendered percussion"
        );
        Ok(track)
    }

    /// Renders `pattern` with slots of `slot_beats` beats at `tempo_bpm`.
    pub fn render_at_tempo(
        &self,
        pattern: &RhythmPattern,
        slot_beats: f64,
        tempo_bpm: f64,
        volume: f64,
        rng: &mut Pcg32,
    ) -> AudioResult<Vec<f64>> {
        check_tempo(tempo_bpm)?;
        self.render(pattern, slot_beats * 60.0 / tempo_bpm, volume, rng)
    }
}
