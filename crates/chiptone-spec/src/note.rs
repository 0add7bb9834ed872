//! Pitches, notes, and tempo-bound sequences.
//!
//! A [`Sequence`] is the musical content of one track: an ordered list of
//! [`Note`]s played back at an explicit tempo. Notes are written in JSON either
//! as `["A4", 0.25]` pairs or as `{"pitch": "A4", "beats": 0.25}` objects.

use serde::{Deserialize, Serialize};

/// Reserved pitch label that always resolves to silence.
pub const REST_LABEL: &str = "REST";

/// The pitch of a note.
///
/// Deserialized untagged: a number is a raw frequency in Hz, a string is a
/// note label (`"C#5"`, `"Bb3"`, `"REST"`), and an array is a chord.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Pitch {
    /// Raw frequency in Hz (0 = silence).
    Hz(f64),
    /// Note label resolved through the pitch table.
    Label(String),
    /// Several pitches sounding together for the note duration.
    Chord(Vec<Pitch>),
}

impl Pitch {
    /// Creates a labeled pitch.
    pub fn label(name: impl Into<String>) -> Self {
        Pitch::Label(name.into())
    }

    /// Creates the rest pitch.
    pub fn rest() -> Self {
        Pitch::Label(REST_LABEL.to_string())
    }

    /// Creates a chord from note labels.
    pub fn chord<S: AsRef<str>>(labels: &[S]) -> Self {
        Pitch::Chord(labels.iter().map(|l| Pitch::label(l.as_ref())).collect())
    }

    /// Returns true if this pitch is the reserved rest label or 0 Hz.
    pub fn is_rest(&self) -> bool {
        match self {
            Pitch::Hz(freq) => *freq == 0.0,
            Pitch::Label(label) => label.eq_ignore_ascii_case(REST_LABEL),
            Pitch::Chord(_) => false,
        }
    }

    /// Returns the individual voices of this pitch (a single voice unless a chord).
    pub fn voices(&self) -> &[Pitch] {
        match self {
            Pitch::Chord(voices) => voices,
            other => std::slice::from_ref(other),
        }
    }
}

impl From<&str> for Pitch {
    fn from(label: &str) -> Self {
        Pitch::label(label)
    }
}

impl From<f64> for Pitch {
    fn from(freq: f64) -> Self {
        Pitch::Hz(freq)
    }
}

/// A single note: a pitch held for a number of beats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "NoteRepr", into = "NoteRepr")]
pub struct Note {
    /// Pitch of the note.
    pub pitch: Pitch,
    /// Duration in beats.
    pub beats: f64,
}

impl Note {
    /// Creates a new note.
    pub fn new(pitch: impl Into<Pitch>, beats: f64) -> Self {
        Self {
            pitch: pitch.into(),
            beats,
        }
    }

    /// Creates a rest lasting `beats`.
    pub fn rest(beats: f64) -> Self {
        Self {
            pitch: Pitch::rest(),
            beats,
        }
    }

    /// Returns the note duration in seconds at the given tempo.
    pub fn duration_seconds(&self, tempo_bpm: f64) -> f64 {
        self.beats * 60.0 / tempo_bpm
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum NoteRepr {
    Pair(Pitch, f64),
    Object { pitch: Pitch, beats: f64 },
}

impl From<NoteRepr> for Note {
    fn from(repr: NoteRepr) -> Self {
        match repr {
            NoteRepr::Pair(pitch, beats) | NoteRepr::Object { pitch, beats } => {
                Note { pitch, beats }
            }
        }
    }
}

impl From<Note> for NoteRepr {
    fn from(note: Note) -> Self {
        NoteRepr::Pair(note.pitch, note.beats)
    }
}

/// An ordered list of notes played at a tempo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Sequence {
    /// Tempo in beats per minute.
    pub tempo_bpm: f64,
    /// Notes in playback order.
    pub notes: Vec<Note>,
    /// Number of times the rendered sequence is tiled (default: 1).
    #[serde(default = "default_repeat", skip_serializing_if = "is_single")]
    pub repeat: u32,
}

fn default_repeat() -> u32 {
    1
}

fn is_single(repeat: &u32) -> bool {
    *repeat == 1
}

impl Sequence {
    /// Creates a sequence from notes.
    pub fn new(tempo_bpm: f64, notes: Vec<Note>) -> Self {
        Self {
            tempo_bpm,
            notes,
            repeat: 1,
        }
    }

    /// Creates a sequence from `(label, beats)` pairs.
    pub fn from_pairs(tempo_bpm: f64, pairs: &[(&str, f64)]) -> Self {
        let notes = pairs
            .iter()
            .map(|&(label, beats)| Note::new(label, beats))
            .collect();
        Self::new(tempo_bpm, notes)
    }

    /// Creates a sequence from raw frequencies, each lasting `seconds`.
    ///
    /// Uses a tempo of 60 BPM so that one beat is one second.
    pub fn from_frequencies(frequencies: &[f64], seconds: f64) -> Self {
        let notes = frequencies
            .iter()
            .map(|&freq| Note::new(freq, seconds))
            .collect();
        Self::new(60.0, notes)
    }

    /// Sets how many times the rendered sequence is tiled.
    pub fn repeated(mut self, repeat: u32) -> Self {
        self.repeat = repeat;
        self
    }

    /// Duration of one beat in seconds.
    pub fn beat_seconds(&self) -> f64 {
        60.0 / self.tempo_bpm
    }

    /// Total beats in one pass of the sequence.
    pub fn total_beats(&self) -> f64 {
        self.notes.iter().map(|n| n.beats).sum()
    }

    /// Nominal duration in seconds including repeats.
    pub fn duration_seconds(&self) -> f64 {
        self.total_beats() * self.beat_seconds() * self.repeat as f64
    }
}
