//! End-to-end sequencing and mixing scenarios.

use chiptone_backend_audio::pitch::PitchTable;
use chiptone_backend_audio::rng::create_rng;
use chiptone_backend_audio::{render_cue, AudioError, NoteSequencer, WaveformGenerator};
use chiptone_spec::{CueSpec, LayerSpec, MixMode, Sequence, Timbre, Voice, Waveform};

const SR: f64 = 44100.0;

/// Counts negative-to-positive transitions.
fn rising_crossings(samples: &[f64]) -> usize {
    samples
        .windows(2)
        .filter(|w| w[0] < 0.0 && w[1] >= 0.0)
        .count()
}

// ============================================================================
// Sequencer scenarios
// ============================================================================

#[test]
fn test_arpeggio_at_120_bpm() {
    let pitches = PitchTable::standard();
    let sequencer = NoteSequencer::new(&pitches, SR).unwrap();
    let sequence = Sequence::from_pairs(
        120.0,
        &[("A4", 0.25), ("C5", 0.25), ("E5", 0.25), ("A5", 0.25)],
    );

    let track = sequencer
        .render(&sequence, &Voice::new(Waveform::Sine, 1.0), &mut create_rng(0))
        .unwrap();

    // 0.125 s per note
    assert!((22048..=22052).contains(&track.len()));
    let note_len = track.len() / 4;
    assert!(note_len == 5512 || note_len == 5513);

    // 440 Hz over 0.125 s is 55 cycles
    let cycles = rising_crossings(&track[..note_len]);
    assert!((54..=56).contains(&cycles), "got {} cycles", cycles);

    // A5 segment has twice as many
    let cycles = rising_crossings(&track[3 * note_len..]);
    assert!((109..=111).contains(&cycles), "got {} cycles", cycles);
}

#[test]
fn test_sample_count_law() {
    for &(sr, duration) in &[(44100.0, 0.3), (22050.0, 0.15), (8000.0, 1.0), (48000.0, 0.0123)] {
        let generator = WaveformGenerator::new(sr).unwrap();
        let out = generator
            .render(330.0, duration, Waveform::Sawtooth, &Timbre::bright(), 0.5, &mut create_rng(0))
            .unwrap();
        let expected = sr * duration;
        assert!((out.len() as f64 - expected).abs() <= 1.0, "sr={} d={}", sr, duration);
    }
}

#[test]
fn test_tempo_is_per_call() {
    let pitches = PitchTable::standard();
    let sequencer = NoteSequencer::new(&pitches, SR).unwrap();
    let voice = Voice::new(Waveform::Square, 0.5);
    let notes = Sequence::from_pairs(60.0, &[("C4", 1.0)]).notes;

    let slow = sequencer.render_notes(&notes, 60.0, &voice, &mut create_rng(0)).unwrap();
    let fast = sequencer.render_notes(&notes, 240.0, &voice, &mut create_rng(0)).unwrap();
    let slow_again = sequencer.render_notes(&notes, 60.0, &voice, &mut create_rng(0)).unwrap();

    assert_eq!(slow.len(), 44100);
    assert_eq!(fast.len(), 11025);
    assert_eq!(slow, slow_again);
}

// ============================================================================
// Mixing scenarios
// ============================================================================

fn melody() -> LayerSpec {
    LayerSpec::sequence(
        Sequence::from_pairs(120.0, &[("C4", 0.5), ("E4", 0.5), ("G4", 0.5), ("C5", 0.5)]),
        Voice::new(Waveform::Square, 0.5).with_default_envelope(),
    )
}

fn harmony() -> LayerSpec {
    LayerSpec::sequence(
        Sequence::from_pairs(120.0, &[("E3", 1.0)]),
        Voice::new(Waveform::Triangle, 0.6),
    )
}

#[test]
fn test_melody_and_harmony_in_clip_mode() {
    let pitches = PitchTable::standard();
    let both = CueSpec::builder("duet")
        .mix_mode(MixMode::Clip)
        .layer(melody())
        .layer(harmony())
        .build();
    let alone = CueSpec::builder("solo")
        .mix_mode(MixMode::Clip)
        .layer(melody())
        .build();

    let mixed = render_cue(&both, &pitches).unwrap();
    let solo = render_cue(&alone, &pitches).unwrap();

    assert_eq!(mixed.len(), 44100);
    assert_eq!(solo.len(), 44100);
    assert_eq!(&mixed.samples[22050..], &solo.samples[22050..]);
    assert!(mixed.samples.iter().all(|s| s.abs() <= 1.0));
}

#[test]
fn test_normalize_mode_scales_whole_mix() {
    let pitches = PitchTable::standard();
    let cue = CueSpec::builder("duet")
        .mix_mode(MixMode::Normalize)
        .layer(melody())
        .layer(harmony())
        .build();
    let mixed = render_cue(&cue, &pitches).unwrap();
    let peak = mixed.samples.iter().fold(0.0_f64, |m, s| m.max(s.abs()));
    assert!((peak - 1.0).abs() < 1e-12);
}

#[test]
fn test_invalid_cue_fails_atomically() {
    let pitches = PitchTable::standard();
    let mut cue = CueSpec::builder("broken").layer(melody()).layer(harmony()).build();
    if let LayerSpec::Sequence { sequence, .. } = &mut cue.layers[1] {
        sequence.tempo_bpm = -10.0;
    }
    let err = render_cue(&cue, &pitches).unwrap_err();
    assert!(matches!(err, AudioError::InvalidSpec { .. }));
    assert!(err.to_string().contains("E004"));
}
