//! Note-name to frequency lookup.
//!
//! Equal temperament anchored at A4 = 440 Hz, covering C2 through B7.
//! Labels are a letter `A`-`G`, an optional accidental (`#` or `s` for sharp,
//! `b` for flat), and an octave number. The reserved label `REST` maps to
//! 0 Hz. Anything else is unresolved and renders as silence.

use chiptone_spec::{Pitch, REST_LABEL};
use tracing::debug;

/// MIDI number of C2, the lowest note in the table.
pub const LOWEST_MIDI: i32 = 36;
/// MIDI number of B7, the highest note in the table.
pub const HIGHEST_MIDI: i32 = 107;

const A4_MIDI: i32 = 69;

/// Equal-tempered pitch table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchTable {
    a4_hz: f64,
}

impl Default for PitchTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl PitchTable {
    /// The standard table with A4 = 440 Hz.
    pub fn standard() -> Self {
        Self { a4_hz: 440.0 }
    }

    /// A table tuned to a different A4 reference.
    pub fn with_reference(a4_hz: f64) -> Self {
        Self { a4_hz }
    }

    /// Frequency of a MIDI note number.
    pub fn midi_frequency(&self, midi: i32) -> f64 {
        self.a4_hz * 2.0_f64.powf((midi - A4_MIDI) as f64 / 12.0)
    }

    /// Looks up a label. Returns `Some(0.0)` for `REST` and `None` for
    /// labels outside the table.
    pub fn frequency(&self, label: &str) -> Option<f64> {
        if label.trim().eq_ignore_ascii_case(REST_LABEL) {
            return Some(0.0);
        }
        parse_label(label)
            .filter(|midi| (LOWEST_MIDI..=HIGHEST_MIDI).contains(midi))
            .map(|midi| self.midi_frequency(midi))
    }

    /// Resolves every voice of a pitch to Hz, one entry unless it is a
    /// chord. Unresolved labels become 0 Hz.
    pub fn resolve_voices(&self, pitch: &Pitch) -> Vec<f64> {
        pitch.voices().iter().map(|v| self.resolve_voice(v)).collect()
    }

    fn resolve_voice(&self, voice: &Pitch) -> f64 {
        match voice {
            Pitch::Hz(freq) => *freq,
            Pitch::Label(label) => self.frequency(label).unwrap_or_else(|| {
                debug!(label = %label, "unresolved pitch label, rendering silence");
                0.0
            }),
            // Nested chords never pass validation.
            Pitch::Chord(_) => {
                debug!("nested chord, rendering silence");
                0.0
            }
        }
    }
}

/// Parses a label like "C#5" or "Bb3" into a MIDI note number.
fn parse_label(label: &str) -> Option<i32> {
    let label = label.trim();
    let mut chars = label.chars();
    let semitone = match chars.next()?.to_ascii_uppercase() {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    };

    let rest = chars.as_str();
    let (accidental, octave) = if let Some(stripped) = rest.strip_prefix(['#', 's']) {
        (1, stripped)
    } else if let Some(stripped) = rest.strip_prefix('b') {
        (-1, stripped)
    } else {
        (0, rest)
    };

    if octave.is_empty() || !octave.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let octave: i32 = octave.parse().ok()?;
    Some((octave + 1) * 12 + semitone + accidental)
}
