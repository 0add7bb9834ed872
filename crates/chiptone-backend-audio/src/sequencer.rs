//! Note sequence rendering.
//!
//! Each note is rendered to its own buffer, shaped by the voice envelope
//! (fitted to that note), and appended. Tempo is always passed in with the
//! notes; the sequencer holds no tempo of its own.

use chiptone_spec::{Note, Sequence, Timbre, Voice};
use rand_pcg::Pcg32;
use tracing::debug;

use crate::envelope::EnvelopeShaper;
use crate::error::{check_duration, check_tempo, AudioResult};
use crate::mixer::tile;
use crate::pitch::PitchTable;
use crate::waveform::{resolve_timbre, sample_count, WaveformGenerator};

/// Renders note sequences into a single track.
#[derive(Debug, Clone, Copy)]
pub struct NoteSequencer<'a> {
    pitches: &'a PitchTable,
    generator: WaveformGenerator,
}

impl<'a> NoteSequencer<'a> {
    /// Creates a sequencer resolving labels through `pitches`.
    pub fn new(pitches: &'a PitchTable, sample_rate: f64) -> AudioResult<Self> {
        Ok(Self {
            pitches,
            generator: WaveformGenerator::new(sample_rate)?,
        })
    }

    /// Renders a sequence, tiled `sequence.repeat` times.
    pub fn render(&self, sequence: &Sequence, voice: &Voice, rng: &mut Pcg32) -> AudioResult<Vec<f64>> {
        let once = self.render_notes(&sequence.notes, sequence.tempo_bpm, voice, rng)?;
        Ok(tile(&once, sequence.repeat as usize))
    }

    /// Renders `notes` back to back at `tempo_bpm`.
    ///
    /// The output length is the sum of each note's rendered length. An empty
    /// slice renders an empty track.
    pub fn render_notes(
        &self,
        notes: &[Note],
        tempo_bpm: f64,
        voice: &Voice,
        rng: &mut Pcg32,
    ) -> AudioResult<Vec<f64>> {
        check_tempo(tempo_bpm)?;
        let timbre = resolve_timbre(&voice.timbre)?;

        let total: usize = notes
            .iter()
            .map(|n| sample_count(self.generator.sample_rate(), n.duration_seconds(tempo_bpm)))
            .sum();
        let mut track = Vec::with_capacity(total);

        for note in notes {
            let seconds = note.duration_seconds(tempo_bpm);
            let frequencies = self.pitches.resolve_voices(&note.pitch);
            let buffer = self.render_voices(&frequencies, seconds, voice, &timbre, rng)?;
            track.extend_from_slice(&buffer);
        }

        debug!(
            notes = notes.len(),
            tempo_bpm,
            samples = track.len(),
            "rendered note sequence"
        );
        Ok(track)
    }

    /// Renders one held frequency for `seconds`, shaped by the voice envelope.
    pub fn render_tone(
        &self,
        frequency: f64,
        seconds: f64,
        voice: &Voice,
        rng: &mut Pcg32,
    ) -> AudioResult<Vec<f64>> {
        let timbre = resolve_timbre(&voice.timbre)?;
        self.render_voices(&[frequency], seconds, voice, &timbre, rng)
    }

    /// Renders one note. Several frequencies form a chord: each is rendered
    /// separately and the mean is shaped as a single note.
    fn render_voices(
        &self,
        frequencies: &[f64],
        seconds: f64,
        voice: &Voice,
        timbre: &Timbre,
        rng: &mut Pcg32,
    ) -> AudioResult<Vec<f64>> {
        check_duration(seconds)?;
        let num_samples = sample_count(self.generator.sample_rate(), seconds);
        let mut buffer = vec![0.0; num_samples];

        for &frequency in frequencies {
            let part = self.generator.render_samples(
                frequency,
                num_samples,
                voice.waveform,
                timbre,
                voice.volume,
                rng,
            )?;
            for (out, sample) in buffer.iter_mut().zip(part) {
                *out += sample;
            }
        }

        if frequencies.len() > 1 {
            let scale = 1.0 / frequencies.len() as f64;
            for sample in &mut buffer {
                *sample *= scale;
            }
        }

        if let Some(envelope) = voice.envelope {
            EnvelopeShaper::new(envelope, self.generator.sample_rate())?.apply(&mut buffer);
        }
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AudioError;
    use crate::oscillator;
    use crate::rng::create_rng;
    use chiptone_spec::{Envelope, Pitch, Waveform};

    const SR: f64 = 44100.0;

    fn render(sequence: &Sequence, voice: &Voice) -> Vec<f64> {
        let pitches = PitchTable::standard();
        NoteSequencer::new(&pitches, SR)
            .unwrap()
            .render(sequence, voice, &mut create_rng(0))
            .unwrap()
    }

    #[test]
    fn test_note_lengths_follow_tempo() {
        let sequence = Sequence::from_pairs(120.0, &[("A4", 0.25), ("C5", 0.25), ("E5", 0.25), ("A5", 0.25)]);
        let out = render(&sequence, &Voice::new(Waveform::Sine, 1.0));
        assert_eq!(out.len(), 4 * 5513);

        for n in 0..5513 {
            let expected = oscillator::sine(440.0, n as f64 / SR);
            assert!((out[n] - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_rest_and_unknown_labels_are_silent() {
        let sequence = Sequence::from_pairs(60.0, &[("REST", 0.1), ("Q7", 0.1), ("A4", 0.1)]);
        let out = render(&sequence, &Voice::new(Waveform::Square, 0.5));
        assert_eq!(out.len(), 3 * 4410);
        assert!(out[..8820].iter().all(|&s| s == 0.0));
        assert!(out[8820..].iter().any(|&s| s != 0.0));
    }

    #[test]
    fn test_empty_sequence_is_empty_track() {
        let out = render(&Sequence::new(90.0, Vec::new()), &Voice::new(Waveform::Sine, 1.0));
        assert!(out.is_empty());
    }

    #[test]
    fn test_repeat_tiles_without_resynthesis() {
        let once = Sequence::from_pairs(240.0, &[("C4", 0.5), ("G4", 0.5)]);
        let twice = once.clone().repeated(3);
        let voice = Voice::new(Waveform::Triangle, 0.7).with_default_envelope();
        let a = render(&once, &voice);
        let b = render(&twice, &voice);
        assert_eq!(b.len(), a.len() * 3);
        assert_eq!(&b[..a.len()], &a[..]);
        assert_eq!(&b[2 * a.len()..], &a[..]);
    }

    #[test]
    fn test_envelope_is_fitted_per_note() {
        let sequence = Sequence::from_pairs(60.0, &[("A4", 0.05), ("A4", 0.05)]);
        let voice = Voice::new(Waveform::Square, 1.0).with_envelope(Envelope::new(0.1, 0.1, 0.5, 0.1));
        let out = render(&sequence, &voice);
        let note = out.len() / 2;
        assert_eq!(out[0], 0.0);
        assert_eq!(out[note], 0.0);
        assert_eq!(out[note - 1], 0.0);
        assert!(out.iter().all(|s| s.abs() <= 1.0));
    }

    #[test]
    fn test_chord_is_averaged() {
        let chord = Pitch::Chord(vec![Pitch::Hz(220.0), Pitch::Hz(330.0)]);
        let sequence = Sequence::new(60.0, vec![Note::new(chord, 0.01)]);
        let out = render(&sequence, &Voice::new(Waveform::Sine, 1.0));
        assert_eq!(out.len(), 441);
        for (n, &s) in out.iter().enumerate() {
            let t = n as f64 / SR;
            let expected = (oscillator::sine(220.0, t) + oscillator::sine(330.0, t)) / 2.0;
            assert!((s - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_tone_uses_voice_envelope() {
        let pitches = PitchTable::standard();
        let seq = NoteSequencer::new(&pitches, SR).unwrap();
        let voice = Voice::new(Waveform::Sawtooth, 0.5).with_default_envelope();
        let out = seq.render_tone(300.0, 0.5, &voice, &mut create_rng(0)).unwrap();
        assert_eq!(out.len(), 22050);
        assert_eq!(*out.last().unwrap(), 0.0);
    }

    #[test]
    fn test_invalid_tempo_fails_fast() {
        let pitches = PitchTable::standard();
        let seq = NoteSequencer::new(&pitches, SR).unwrap();
        let notes = vec![Note::new("A4", 1.0)];
        let result = seq.render_notes(&notes, 0.0, &Voice::new(Waveform::Sine, 1.0), &mut create_rng(0));
        assert!(matches!(result, Err(AudioError::InvalidTempo { .. })));
    }

    #[test]
    fn test_unknown_timbre_preset() {
        let pitches = PitchTable::standard();
        let seq = NoteSequencer::new(&pitches, SR).unwrap();
        let voice = Voice::new(Waveform::Square, 0.5).with_timbre("vintage");
        let result = seq.render_tone(440.0, 0.1, &voice, &mut create_rng(0));
        assert!(matches!(result, Err(AudioError::InvalidParameter { .. })));
    }
}
