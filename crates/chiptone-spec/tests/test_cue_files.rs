//! Cue file parsing against the built-in catalog.

use chiptone_spec::{
    catalog, CueSpec, ErrorCode, LayerSpec, MixMode, Pitch, SampleFormat, SpecError, Waveform,
};
use pretty_assertions::assert_eq;

const HAND_WRITTEN: &str = r#"{
    "name": "door_open",
    "sample_format": "pcm16",
    "mix_mode": "normalize",
    "layers": [
        {
            "type": "sequence",
            "sequence": {
                "tempo_bpm": 150.0,
                "notes": [["C5", 0.5], {"pitch": 0.0, "beats": 0.25}, [["E5", "G5"], 1.0]]
            },
            "voice": {
                "waveform": "square",
                "timbre": "bright",
                "envelope": {"attack": 0.01, "decay": 0.05, "sustain": 0.6, "release": 0.1},
                "volume": 0.5
            }
        },
        {
            "type": "percussion",
            "pattern": [1, 0, 1, 1],
            "slot_beats": 0.25,
            "tempo_bpm": 150.0,
            "volume": 0.3,
            "offset_seconds": 0.2
        }
    ]
}"#;

#[test]
fn test_catalog_survives_json() {
    for entry in catalog() {
        for variant in &entry.variants {
            let json = variant.cue.to_json_pretty().unwrap();
            let parsed = CueSpec::from_json(&json)
                .unwrap_or_else(|e| panic!("{}/{}: {}", entry.name, variant.name, e));
            assert_eq!(parsed, variant.cue);
        }
    }
}

#[test]
fn test_hand_written_cue() {
    let cue = CueSpec::from_json(HAND_WRITTEN).unwrap();
    assert_eq!(cue.name, "door_open");
    assert_eq!(cue.sample_rate, 44100);
    assert_eq!(cue.sample_format, SampleFormat::Pcm16);
    assert_eq!(cue.mix_mode, MixMode::Normalize);
    assert_eq!(cue.loop_count, 1);
    assert_eq!(cue.layers.len(), 2);

    match &cue.layers[0] {
        LayerSpec::Sequence {
            sequence, voice, ..
        } => {
            assert_eq!(sequence.notes.len(), 3);
            assert!(sequence.notes[1].pitch.is_rest());
            assert_eq!(
                sequence.notes[2].pitch,
                Pitch::Chord(vec![Pitch::label("E5"), Pitch::label("G5")])
            );
            assert_eq!(voice.waveform, Waveform::Square);
        }
        other => panic!("expected a sequence layer, got {}", other.kind()),
    }

    assert_eq!(cue.layers[1].kind(), "percussion");
    assert_eq!(cue.layers[1].offset_seconds(), 0.2);
}

#[test]
fn test_semantic_errors_are_collected() {
    let json = HAND_WRITTEN
        .replacen("\"tempo_bpm\": 150.0", "\"tempo_bpm\": 0.0", 1)
        .replace("\"volume\": 0.3", "\"volume\": 3.0");

    match CueSpec::from_json(&json) {
        Err(SpecError::Invalid { cue, errors }) => {
            assert_eq!(cue, "door_open");
            assert!(errors.len() >= 2);
            assert!(errors.iter().any(|e| e.code == ErrorCode::InvalidTempo));
            assert!(errors.iter().any(|e| e.path.as_deref() == Some("layers[1].volume")));
        }
        other => panic!("expected validation errors, got {:?}", other),
    }
}
