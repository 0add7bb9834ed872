//! Built-in cue catalog.
//!
//! Every game sound is a [`CatalogCue`] with one or more named variants. The
//! `classic` variants are 16-bit enveloped chiptune renders; the `ff*`
//! variants are 8-bit renders with harmonic-rich timbres, and `missing`
//! variants are the plain 8-bit sine stand-ins. The first variant listed for
//! a cue is its default.

use crate::cue::{CueBuilder, CueSpec, LayerSpec, MixMode, RhythmPattern, SampleFormat};
use crate::note::{Note, Pitch, Sequence};
use crate::synthesis::{Envelope, Voice, Waveform};

/// One concrete rendering of a catalog cue.
#[derive(Debug, Clone, PartialEq)]
pub struct CueVariant {
    /// Variant name (e.g. "classic", "ff_exact").
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// The cue recipe.
    pub cue: CueSpec,
}

/// A named game sound with its variants.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogCue {
    /// Cue name; also the exported file stem.
    pub name: &'static str,
    /// Variants, default first.
    pub variants: Vec<CueVariant>,
}

impl CatalogCue {
    /// The default variant.
    pub fn default_variant(&self) -> &CueVariant {
        &self.variants[0]
    }

    /// Finds a variant by name, or the default when `name` is None.
    pub fn variant(&self, name: Option<&str>) -> Option<&CueVariant> {
        match name {
            None => Some(self.default_variant()),
            Some(name) => self.variants.iter().find(|v| v.name == name),
        }
    }

    /// Names of all variants, default first.
    pub fn variant_names(&self) -> Vec<&'static str> {
        self.variants.iter().map(|v| v.name).collect()
    }
}

/// Returns every built-in cue in export order.
pub fn catalog() -> Vec<CatalogCue> {
    vec![
        cue(
            "move",
            vec![
                move_classic(),
                move_ff(),
                move_ff_authentic(),
                move_ff_exact(),
            ],
        ),
        cue(
            "battle_start",
            vec![
                battle_start_classic(),
                battle_start_ff(),
                battle_start_ff_authentic(),
                battle_start_ff_exact(),
            ],
        ),
        cue(
            "attack",
            vec![
                attack_classic(),
                attack_ff(),
                attack_ff_authentic(),
                attack_ff_exact(),
            ],
        ),
        cue(
            "defend",
            vec![defend_ff_exact(), defend_ff(), defend_ff_authentic()],
        ),
        cue(
            "victory",
            vec![
                victory_classic(),
                victory_ff(),
                victory_ff_authentic(),
                victory_ff_exact(),
            ],
        ),
        cue(
            "defeat",
            vec![
                defeat_classic(),
                defeat_ff(),
                defeat_ff_authentic(),
                defeat_ff_exact(),
            ],
        ),
        cue(
            "game_over",
            vec![
                game_over_classic(),
                game_over_ff(),
                game_over_ff_authentic(),
                game_over_ff_exact(),
                game_over_missing(),
            ],
        ),
        cue(
            "title",
            vec![
                title_classic(),
                title_ff(),
                title_ff_authentic(),
                title_ff_exact(),
                title_missing(),
            ],
        ),
        cue("bgm_field", vec![bgm_field()]),
        cue("bgm_castle", vec![bgm_castle()]),
        cue("bgm_cave", vec![bgm_cave()]),
        cue(
            "bgm_battle",
            vec![bgm_battle_classic(), bgm_battle_march(), bgm_battle_score()],
        ),
        cue("bgm_town", vec![bgm_town_classic(), bgm_town_calm()]),
        cue(
            "victory_music",
            vec![
                victory_music_classic(),
                victory_music_ff(),
                victory_music_ff_authentic(),
                victory_music_ff_exact(),
                victory_music_missing(),
            ],
        ),
    ]
}

/// Looks up a catalog cue by name.
pub fn find_cue(name: &str) -> Option<CatalogCue> {
    catalog().into_iter().find(|c| c.name == name)
}

fn cue(name: &'static str, variants: Vec<CueVariant>) -> CatalogCue {
    CatalogCue { name, variants }
}

fn variant(name: &'static str, description: &'static str, cue: CueSpec) -> CueVariant {
    CueVariant {
        name,
        description,
        cue,
    }
}

// ============================================================================
// Shared material
// ============================================================================

const VOLUME: f64 = 0.25;

/// Victory fanfare melody, one label per 0.15 s note.
const FANFARE: &[&str] = &[
    "B4", "B4", "B4", "B4", //
    "G4", "A4", "B4", "A4", "B4", //
    "C5", "A#4", "C5", "A#4", "A#4", //
    "D#5", "D#5", "D5", "D#5", "D5", "D5", //
    "C5", "A#4", "G#4", "A#4", "G4", //
    "C5", "A#4", "C5", "A#4", "A#4", //
    "D#5", "D#5", "D5", "D#5", "D5", "D5", //
    "C5", "A#4", "C5", "D#5", "F5",
];

const FANFARE_TAIL: &[&str] = &["C5", "A#4", "D#5", "F5", "C5", "A#4", "D#5", "F5"];

const FANFARE_NOTE_SECONDS: f64 = 0.15;

const FANFARE_CHORD: &[&str] = &["C5", "A#4", "D#5", "F5"];

const BATTLE_CHORDS: &[[f64; 3]] = &[
    [220.0, 277.0, 329.0],
    [277.0, 329.0, 415.0],
    [329.0, 415.0, 494.0],
    [415.0, 494.0, 587.0],
    [494.0, 587.0, 698.0],
];

const TITLE_PROGRESSION: &[[f64; 3]] = &[
    [220.0, 277.0, 329.0],
    [277.0, 329.0, 415.0],
    [329.0, 415.0, 494.0],
    [415.0, 494.0, 587.0],
    [494.0, 587.0, 698.0],
    [523.0, 659.0, 784.0],
    [587.0, 698.0, 880.0],
    [659.0, 784.0, 988.0],
];

const TITLE_MELODY: &[f64] = &[
    440.0, 494.0, 523.0, 587.0, 659.0, 587.0, 523.0, 494.0, 440.0, 494.0, 523.0, 587.0, 659.0,
    698.0, 659.0, 587.0,
];

/// C major arpeggio up to E6 and back, one note per slot.
const RISING_FANFARE: &[f64] = &[
    523.0, 659.0, 784.0, 1047.0, 1319.0, 1047.0, 784.0, 659.0, //
    523.0, 659.0, 784.0, 1047.0, 1319.0, 1047.0, 784.0, 659.0, //
    523.0, 659.0, 784.0, 1047.0, 1319.0, 1568.0, 1319.0, 1047.0,
];

const RISING_FANFARE_TAIL: &[f64] = &[784.0, 659.0, 523.0, 659.0, 784.0, 1047.0, 1319.0, 1568.0];

const MINOR_DESCENT: &[f64] = &[440.0, 415.0, 392.0, 370.0, 349.0, 330.0, 311.0, 294.0];

const GAME_OVER_LINE: &[f64] = &[440.0, 392.0, 349.0, 330.0, 294.0, 262.0, 247.0, 220.0, 196.0];

fn classic_square(volume: f64) -> Voice {
    Voice::new(Waveform::Square, volume).with_timbre("classic")
}

fn enveloped(waveform: Waveform, volume: f64) -> Voice {
    Voice::new(waveform, volume).with_default_envelope()
}

fn chords(frequencies: &[[f64; 3]], seconds: f64) -> Sequence {
    let notes = frequencies
        .iter()
        .map(|voices| {
            let chord = Pitch::Chord(voices.iter().map(|&f| Pitch::Hz(f)).collect());
            Note::new(chord, seconds)
        })
        .collect();
    Sequence::new(60.0, notes)
}

fn labels_at(labels: &[&str], seconds: f64) -> Sequence {
    let notes = labels.iter().map(|&label| Note::new(label, seconds)).collect();
    Sequence::new(60.0, notes)
}

/// One chord of raw frequencies held for `seconds`.
fn held_chord(frequencies: &[f64], seconds: f64) -> Sequence {
    let chord = Pitch::Chord(frequencies.iter().map(|&f| Pitch::Hz(f)).collect());
    Sequence::new(60.0, vec![Note::new(chord, seconds)])
}

/// A melody with a chord entering as the last note ends.
fn melody_then_chord(
    builder: CueBuilder,
    melody: Sequence,
    melody_voice: Voice,
    chord: Sequence,
    chord_voice: Voice,
) -> CueSpec {
    let chord_at = melody.duration_seconds();
    builder
        .layer(LayerSpec::sequence(melody, melody_voice))
        .layer(LayerSpec::sequence(chord, chord_voice).delayed(chord_at))
        .build()
}

/// A sine voice with the `bright` overtone stack.
fn bright_sine(volume: f64) -> Voice {
    Voice::new(Waveform::Sine, volume).with_timbre("bright")
}

/// A single-layer 8-bit cue playing `frequencies` back to back.
fn ff_line(name: &str, frequencies: &[f64], seconds: f64, voice: Voice) -> CueSpec {
    ff_cue(name)
        .layer(LayerSpec::sequence(
            Sequence::from_frequencies(frequencies, seconds),
            voice,
        ))
        .build()
}

/// An 8-bit cue that hard-clips its layers.
fn ff_cue(name: &str) -> CueBuilder {
    CueSpec::builder(name)
        .sample_format(SampleFormat::Pcm8)
        .mix_mode(MixMode::Clip)
}

// ============================================================================
// Sound effects
// ============================================================================

fn move_classic() -> CueVariant {
    let voice =
        Voice::new(Waveform::Triangle, 1.0).with_envelope(Envelope::new(0.01, 0.01, 0.5, 0.02));
    variant(
        "classic",
        "rising triangle blips",
        CueSpec::builder("move")
            .mix_mode(MixMode::Clip)
            .layer(LayerSpec::sequence(
                Sequence::from_frequencies(&[440.0, 550.0, 660.0, 880.0], 0.05),
                voice,
            ))
            .build(),
    )
}

fn move_ff() -> CueVariant {
    variant(
        "ff",
        "major arpeggio, bright sine",
        ff_line("move", &[440.0, 550.0, 660.0, 880.0], 0.075, bright_sine(0.4)),
    )
}

fn move_ff_authentic() -> CueVariant {
    variant(
        "ff_authentic",
        "major arpeggio, triangle with sine overtones",
        ff_cue("move")
            .layer(LayerSpec::sequence(
                Sequence::from_frequencies(&[440.0, 550.0, 660.0, 880.0], 0.08),
                Voice::new(Waveform::Triangle, 0.4).with_timbre("authentic"),
            ))
            .build(),
    )
}

fn move_ff_exact() -> CueVariant {
    variant(
        "ff_exact",
        "short major arpeggio, soft triangle",
        ff_cue("move")
            .layer(LayerSpec::sequence(
                Sequence::from_frequencies(&[440.0, 550.0, 660.0, 880.0], 0.06),
                Voice::new(Waveform::Triangle, 0.4).with_timbre("exact_soft"),
            ))
            .build(),
    )
}

fn battle_start_classic() -> CueVariant {
    let voice =
        Voice::new(Waveform::Sawtooth, 0.9).with_envelope(Envelope::new(0.01, 0.3, 0.1, 0.1));
    variant(
        "classic",
        "A minor sawtooth stab",
        CueSpec::builder("battle_start")
            .mix_mode(MixMode::Clip)
            .layer(LayerSpec::sequence(chords(&BATTLE_CHORDS[..1], 0.5), voice))
            .build(),
    )
}

fn battle_start_ff() -> CueVariant {
    variant(
        "ff",
        "four rising sine chords",
        ff_cue("battle_start")
            .layer(LayerSpec::sequence(
                chords(&BATTLE_CHORDS[..4], 0.4),
                Voice::new(Waveform::Sine, 0.5).with_timbre("chord"),
            ))
            .build(),
    )
}

fn battle_start_ff_authentic() -> CueVariant {
    variant(
        "ff_authentic",
        "five rising sine chords with full overtones",
        ff_cue("battle_start")
            .layer(LayerSpec::sequence(
                chords(BATTLE_CHORDS, 0.3),
                Voice::new(Waveform::Sine, 0.5).with_timbre("chord_full"),
            ))
            .build(),
    )
}

fn battle_start_ff_exact() -> CueVariant {
    variant(
        "ff_exact",
        "rising five-chord square progression",
        ff_cue("battle_start")
            .layer(LayerSpec::sequence(
                chords(BATTLE_CHORDS, 0.25),
                Voice::new(Waveform::Square, 0.5).with_timbre("chord_square"),
            ))
            .build(),
    )
}

fn attack_classic() -> CueVariant {
    variant(
        "classic",
        "800 Hz square hit with fast decay",
        CueSpec::builder("attack")
            .mix_mode(MixMode::Clip)
            .layer(LayerSpec::tone(
                800.0,
                0.2,
                classic_square(1.0).with_envelope(Envelope::new(0.001, 0.1, 0.0, 0.099)),
            ))
            .build(),
    )
}

/// Square impact whose tail is replaced by a low sweep note.
fn impact_with_sweep(
    impact_seconds: f64,
    sweep_seconds: f64,
    sweep: Waveform,
    impact_timbre: &str,
    sweep_timbre: &str,
) -> CueSpec {
    ff_cue("attack")
        .layer(LayerSpec::tone(
            800.0,
            impact_seconds,
            Voice::new(Waveform::Square, 0.6).with_timbre(impact_timbre),
        ))
        .layer(
            LayerSpec::tone(
                200.0,
                sweep_seconds,
                Voice::new(sweep, 0.3).with_timbre(sweep_timbre),
            )
            .delayed(impact_seconds),
        )
        .build()
}

fn attack_ff() -> CueVariant {
    variant(
        "ff",
        "square impact, sawtooth sweep",
        impact_with_sweep(0.15, 0.05, Waveform::Sawtooth, "rich", "rich"),
    )
}

fn attack_ff_authentic() -> CueVariant {
    variant(
        "ff_authentic",
        "square impact, triangle sweep",
        impact_with_sweep(0.17, 0.08, Waveform::Triangle, "authentic", "authentic"),
    )
}

fn attack_ff_exact() -> CueVariant {
    variant(
        "ff_exact",
        "bright square impact, sawtooth sweep",
        impact_with_sweep(0.14, 0.06, Waveform::Sawtooth, "exact", "exact_soft"),
    )
}

/// A 300 Hz base tone plus one quieter layer per resonance.
fn resonant_block(waveform: Waveform, timbre: &str, seconds: f64, resonances: &[f64]) -> CueSpec {
    let mut builder = ff_cue("defend").layer(LayerSpec::tone(
        300.0,
        seconds,
        Voice::new(waveform, 0.4).with_timbre(timbre),
    ));
    for &freq in resonances {
        builder = builder.layer(LayerSpec::tone(
            freq,
            seconds,
            Voice::new(waveform, 0.2).with_timbre(timbre),
        ));
    }
    builder.build()
}

fn defend_ff_exact() -> CueVariant {
    variant(
        "ff_exact",
        "triangle block with resonances",
        resonant_block(
            Waveform::Triangle,
            "exact_soft",
            0.35,
            &[600.0, 900.0, 1200.0],
        ),
    )
}

fn defend_ff() -> CueVariant {
    variant(
        "ff",
        "bright sine block, two resonances",
        resonant_block(Waveform::Sine, "bright", 0.4, &[600.0, 900.0]),
    )
}

fn defend_ff_authentic() -> CueVariant {
    variant(
        "ff_authentic",
        "sine block with resonances",
        resonant_block(
            Waveform::Sine,
            "authentic_sine",
            0.4,
            &[600.0, 900.0, 1200.0],
        ),
    )
}

fn victory_classic() -> CueVariant {
    variant(
        "classic",
        "four quick B4 pulses",
        CueSpec::builder("victory")
            .mix_mode(MixMode::Clip)
            .layer(LayerSpec::sequence(
                Sequence::from_pairs(120.0, &[("B4", 0.1), ("B4", 0.1), ("B4", 0.1), ("B4", 0.1)]),
                classic_square(VOLUME).with_default_envelope(),
            ))
            .build(),
    )
}

/// Square fanfare followed by a held chord.
fn fanfare(name: &str, melody: Vec<&str>, chord_seconds: f64) -> CueSpec {
    let chord = Sequence::new(60.0, vec![Note::new(Pitch::chord(FANFARE_CHORD), chord_seconds)]);
    melody_then_chord(
        ff_cue(name),
        labels_at(&melody, FANFARE_NOTE_SECONDS),
        Voice::new(Waveform::Square, 0.5).with_timbre("exact"),
        chord,
        Voice::new(Waveform::Square, 0.6).with_timbre("chord_square"),
    )
}

/// Square arpeggio fanfare with authentic overtones and a full closing chord.
fn rising_fanfare(name: &str, melody: &[f64], seconds: f64, chord: Sequence) -> CueSpec {
    melody_then_chord(
        ff_cue(name),
        Sequence::from_frequencies(melody, seconds),
        Voice::new(Waveform::Square, 0.5).with_timbre("authentic"),
        chord,
        Voice::new(Waveform::Sine, 0.6).with_timbre("chord_full"),
    )
}

fn victory_ff() -> CueVariant {
    variant(
        "ff",
        "C major run into a held chord, bright sine",
        melody_then_chord(
            ff_cue("victory"),
            Sequence::from_frequencies(
                &[262.0, 330.0, 392.0, 440.0, 523.0, 659.0, 784.0, 1047.0],
                0.2,
            ),
            bright_sine(0.5),
            held_chord(&[523.0, 659.0, 784.0, 1047.0], 0.5),
            Voice::new(Waveform::Sine, 0.6).with_timbre("chord"),
        ),
    )
}

fn victory_ff_authentic() -> CueVariant {
    variant(
        "ff_authentic",
        "square arpeggio fanfare with closing chord",
        rising_fanfare(
            "victory",
            RISING_FANFARE,
            0.15,
            held_chord(&[523.0, 659.0, 784.0, 1047.0, 1319.0], 0.8),
        ),
    )
}

fn victory_ff_exact() -> CueVariant {
    variant(
        "ff_exact",
        "full fanfare with closing chord",
        fanfare("victory", FANFARE.to_vec(), 0.8),
    )
}

fn defeat_classic() -> CueVariant {
    variant(
        "classic",
        "chromatic sawtooth descent",
        CueSpec::builder("defeat")
            .mix_mode(MixMode::Clip)
            .layer(LayerSpec::sequence(
                Sequence::from_pairs(
                    120.0,
                    &[("A4", 0.25), ("G#4", 0.25), ("G4", 0.25), ("F#4", 0.5)],
                ),
                enveloped(Waveform::Sawtooth, VOLUME),
            ))
            .build(),
    )
}

fn defeat_ff() -> CueVariant {
    variant(
        "ff",
        "descending minor scale, bright sine",
        ff_line("defeat", MINOR_DESCENT, 0.25, bright_sine(0.4)),
    )
}

fn defeat_ff_authentic() -> CueVariant {
    variant(
        "ff_authentic",
        "slow minor descent, authentic sine",
        ff_line(
            "defeat",
            MINOR_DESCENT,
            0.3,
            Voice::new(Waveform::Sine, 0.4).with_timbre("authentic_sine"),
        ),
    )
}

fn defeat_ff_exact() -> CueVariant {
    variant(
        "ff_exact",
        "descending minor scale, soft triangle",
        ff_line(
            "defeat",
            MINOR_DESCENT,
            0.25,
            Voice::new(Waveform::Triangle, 0.4).with_timbre("exact_soft"),
        ),
    )
}

fn game_over_classic() -> CueVariant {
    variant(
        "classic",
        "falling octave in sawtooth",
        CueSpec::builder("game_over")
            .mix_mode(MixMode::Clip)
            .layer(LayerSpec::sequence(
                Sequence::from_pairs(120.0, &[("C4", 0.4), ("G3", 0.4), ("C3", 0.8)]),
                enveloped(Waveform::Sawtooth, VOLUME),
            ))
            .build(),
    )
}

fn game_over_ff() -> CueVariant {
    variant(
        "ff",
        "descending line down to A3, bright sine",
        ff_line("game_over", &GAME_OVER_LINE[..8], 0.3, bright_sine(0.4)),
    )
}

fn game_over_ff_authentic() -> CueVariant {
    variant(
        "ff_authentic",
        "long descending line, authentic sine",
        ff_line(
            "game_over",
            GAME_OVER_LINE,
            0.35,
            Voice::new(Waveform::Sine, 0.4).with_timbre("authentic_sine"),
        ),
    )
}

fn game_over_ff_exact() -> CueVariant {
    variant(
        "ff_exact",
        "long descending line, soft triangle",
        ff_line(
            "game_over",
            GAME_OVER_LINE,
            0.3,
            Voice::new(Waveform::Triangle, 0.4).with_timbre("exact_soft"),
        ),
    )
}

fn game_over_missing() -> CueVariant {
    variant(
        "missing",
        "six falling plain sine notes",
        ff_line(
            "game_over",
            &GAME_OVER_LINE[..6],
            0.3,
            Voice::new(Waveform::Sine, 0.4),
        ),
    )
}

// ============================================================================
// Music
// ============================================================================

fn title_classic() -> CueVariant {
    let arpeggio = Sequence::from_pairs(
        100.0,
        &[
            ("C4", 0.25),
            ("E4", 0.25),
            ("G4", 0.25),
            ("C5", 0.25),
            ("E5", 0.25),
            ("G5", 0.25),
            ("C6", 0.25),
            ("G5", 0.25),
            ("E5", 0.25),
            ("C5", 0.25),
            ("G4", 0.25),
            ("E4", 0.25),
        ],
    )
    .repeated(4);
    variant(
        "classic",
        "C major prelude arpeggio",
        CueSpec::builder("title")
            .loop_count(2)
            .layer(LayerSpec::sequence(
                arpeggio,
                enveloped(Waveform::Triangle, VOLUME),
            ))
            .build(),
    )
}

/// Chords under a melody, both spread evenly over `seconds`.
fn chords_under_melody(
    chord_voicings: &[[f64; 3]],
    chord_voice: Voice,
    melody: &[f64],
    melody_voice: Voice,
    seconds: f64,
) -> CueSpec {
    ff_cue("title")
        .layer(LayerSpec::sequence(
            chords(chord_voicings, seconds / chord_voicings.len() as f64),
            chord_voice,
        ))
        .layer(LayerSpec::sequence(
            Sequence::from_frequencies(melody, seconds / melody.len() as f64),
            melody_voice,
        ))
        .build()
}

fn title_ff() -> CueVariant {
    variant(
        "ff",
        "four slow sine chords under a bright melody",
        chords_under_melody(
            &BATTLE_CHORDS[..4],
            Voice::new(Waveform::Sine, 0.3).with_timbre("chord"),
            &TITLE_MELODY[..8],
            bright_sine(0.2),
            6.0,
        ),
    )
}

fn title_ff_authentic() -> CueVariant {
    variant(
        "ff_authentic",
        "eight-chord progression under a triangle melody",
        chords_under_melody(
            TITLE_PROGRESSION,
            Voice::new(Waveform::Sine, 0.3).with_timbre("chord_full"),
            TITLE_MELODY,
            Voice::new(Waveform::Triangle, 0.2).with_timbre("authentic"),
            8.0,
        ),
    )
}

fn title_ff_exact() -> CueVariant {
    variant(
        "ff_exact",
        "chord progression under a triangle melody",
        chords_under_melody(
            TITLE_PROGRESSION,
            Voice::new(Waveform::Square, 0.3).with_timbre("chord_square"),
            TITLE_MELODY,
            Voice::new(Waveform::Triangle, 0.2).with_timbre("exact_soft"),
            6.0,
        ),
    )
}

fn title_missing() -> CueVariant {
    let drone =
        |freq: f64, volume: f64| LayerSpec::tone(freq, 4.0, Voice::new(Waveform::Sine, volume));
    variant(
        "missing",
        "ambient A drone with octave and fifth",
        ff_cue("title")
            .layer(drone(220.0, 0.2))
            .layer(drone(440.0, 0.15))
            .layer(drone(330.0, 0.1))
            .build(),
    )
}

fn bgm_field() -> CueVariant {
    let melody = Sequence::from_pairs(
        140.0,
        &[
            ("G4", 0.5),
            ("A4", 0.5),
            ("B4", 1.0),
            ("G4", 0.5),
            ("A4", 0.5),
            ("B4", 1.0),
            ("C5", 0.5),
            ("B4", 0.5),
            ("A4", 1.0),
            ("G4", 0.5),
            ("A4", 0.5),
            ("G4", 1.0),
        ],
    )
    .repeated(2);
    let harmony =
        Sequence::from_pairs(140.0, &[("C4", 2.0), ("G4", 2.0), ("D4", 2.0), ("G4", 2.0)])
            .repeated(2);
    variant(
        "classic",
        "overworld theme",
        CueSpec::builder("bgm_field")
            .loop_count(2)
            .layer(LayerSpec::sequence(
                melody,
                classic_square(VOLUME).with_default_envelope(),
            ))
            .layer(LayerSpec::sequence(
                harmony,
                enveloped(Waveform::Sawtooth, VOLUME * 0.6),
            ))
            .build(),
    )
}

fn bgm_castle() -> CueVariant {
    let melody = Sequence::from_pairs(
        110.0,
        &[
            ("C4", 1.0),
            ("G4", 1.0),
            ("E4", 1.0),
            ("G4", 1.0),
            ("F4", 0.5),
            ("E4", 0.5),
            ("D4", 1.0),
            ("C4", 1.0),
        ],
    )
    .repeated(2);
    let harmony =
        Sequence::from_pairs(110.0, &[("C3", 2.0), ("G3", 2.0), ("F3", 2.0), ("C3", 2.0)])
            .repeated(2);
    variant(
        "classic",
        "stately castle theme",
        CueSpec::builder("bgm_castle")
            .layer(LayerSpec::sequence(
                melody,
                classic_square(VOLUME).with_envelope(Envelope::new(0.01, 0.3, 0.5, 0.2)),
            ))
            .layer(LayerSpec::sequence(
                harmony,
                enveloped(Waveform::Triangle, VOLUME * 0.7),
            ))
            .build(),
    )
}

fn bgm_cave() -> CueVariant {
    let melody = Sequence::from_pairs(
        80.0,
        &[
            ("C3", 2.0),
            ("D3", 1.0),
            ("Eb3", 1.0),
            ("C3", 2.0),
            ("REST", 2.0),
        ],
    )
    .repeated(4);
    let harmony = Sequence::from_pairs(80.0, &[("C2", 4.0), ("G2", 4.0)]).repeated(2);
    variant(
        "classic",
        "slow minor drone",
        CueSpec::builder("bgm_cave")
            .layer(LayerSpec::sequence(
                melody,
                Voice::new(Waveform::Sawtooth, VOLUME)
                    .with_envelope(Envelope::new(0.1, 0.5, 0.2, 0.5)),
            ))
            .layer(LayerSpec::sequence(
                harmony,
                Voice::new(Waveform::Sawtooth, VOLUME * 0.6)
                    .with_envelope(Envelope::new(0.2, 0.8, 0.1, 0.5)),
            ))
            .build(),
    )
}

fn bgm_battle_classic() -> CueVariant {
    let melody = Sequence::from_pairs(
        150.0,
        &[
            ("G4", 0.25),
            ("A4", 0.25),
            ("Bb4", 0.25),
            ("C5", 0.25),
            ("D5", 0.25),
            ("Eb5", 0.25),
            ("F5", 0.25),
            ("G5", 0.25),
            ("F5", 0.5),
            ("Eb5", 0.5),
            ("D5", 0.5),
            ("C5", 0.5),
        ],
    )
    .repeated(2);
    let harmony = Sequence::from_pairs(
        150.0,
        &[
            ("G3", 0.5),
            ("D4", 0.5),
            ("G4", 0.5),
            ("B4", 0.5),
            ("E4", 0.5),
            ("B4", 0.5),
            ("E5", 0.5),
            ("G5", 0.5),
        ],
    )
    .repeated(2);
    variant(
        "classic",
        "driving battle loop with noise snare",
        CueSpec::builder("bgm_battle")
            .mix_mode(MixMode::Clip)
            .loop_count(2)
            .normalize_after_loop()
            .layer(LayerSpec::sequence(
                melody,
                classic_square(VOLUME).with_default_envelope(),
            ))
            .layer(LayerSpec::sequence(
                harmony,
                enveloped(Waveform::Sawtooth, VOLUME * 0.7),
            ))
            .layer(LayerSpec::percussion(
                RhythmPattern::from_steps("x.x.").repeated(8),
                0.25,
                150.0,
                VOLUME * 0.5,
            ))
            .build(),
    )
}

fn bgm_battle_march() -> CueVariant {
    const MELODY: &[&str] = &[
        "G4", "Bb4", "G4", "Bb4", "G4", "Bb4", "G4", "Bb4", //
        "F4", "G4", "F4", "G4", "F4", "G4", "F4", "G4", //
        "Eb4", "F4", "Eb4", "F4", "Eb4", "F4", "Eb4", "F4", //
        "D4", "Eb4", "D4", "Eb4", "D4", "Eb4", "D4", "Eb4",
    ];
    const BASS: &[&str] = &[
        "Eb3", "Bb3", "G4", "Bb3", "Eb4", "Bb3", "G4", "Bb3", //
        "F3", "C4", "A4", "C4", "F4", "C4", "A4", "C4", //
        "Ab3", "Eb4", "C4", "Eb4", "Ab4", "Eb4", "C4", "Eb4", //
        "Bb3", "F4", "D4", "F4", "Bb4", "F4", "D4", "F4",
    ];
    let eighths = |labels: &[&str]| {
        let notes = labels.iter().map(|&label| Note::new(label, 0.5)).collect();
        Sequence::new(140.0, notes).repeated(4)
    };
    variant(
        "march",
        "eighth-note square march, no envelope",
        CueSpec::builder("bgm_battle")
            .mix_mode(MixMode::Clip)
            .normalize_after_loop()
            .layer(LayerSpec::sequence(eighths(MELODY), classic_square(VOLUME)))
            .layer(LayerSpec::sequence(eighths(BASS), classic_square(VOLUME * 0.7)))
            .build(),
    )
}

fn bgm_battle_score() -> CueVariant {
    const OPENING_RUN: &[&str] = &["G4", "A4", "Bb4", "C5", "D5", "Eb5", "F5", "G5"];
    const MELODY: &[&str] = &[
        "F5", "Eb5", "D5", "C5", //
        "Bb4", "C5", "D5", "Eb5", "F5", "G5", "A5", "Bb5", //
        "G5", "F5", "Eb5", "D5", "C5", "Bb4", "A4", "G4", //
        "F4", "G4", "A4", "Bb4", "C5", "D5", "Eb5", "F5", //
        "D5", "C5", "Bb4", "A4", "G4", "F4", "E4", "D4", //
        "C4", "D4", "E4", "F4", "G4", "A4", "Bb4", "C5", //
        "A4", "G4", "F4", "E4", "D4", "C4", "Bb3", "A3", //
        "G3", "A3", "Bb3", "C4", "D4", "E4", "F4", "G4",
    ];
    const HARMONY: &[&str] = &[
        "G3", "D4", "G4", "B4", "E4", "B4", "E5", "G5", //
        "C4", "G4", "C5", "E5", "G4", "D5", "G5", "B5", //
        "F4", "C5", "F5", "A5", "Bb3", "F4", "Bb4", "D5", //
        "Eb4", "Bb4", "Eb5", "G5", "Ab3", "Eb4", "Ab4", "C5", //
        "Bb3", "F4", "Bb4", "D5", "C4", "G4", "C5", "E5", //
        "F3", "C4", "F4", "A4", "G3", "D4", "G4", "B4", //
        "E3", "B3", "E4", "G4", "A3", "E4", "A4", "C5", //
        "D3", "A3", "D4", "F4", "G3", "D4", "G4", "B4",
    ];
    let timed = |labels: &'static [&'static str], beats: f64| {
        labels.iter().map(move |&label| Note::new(label, beats))
    };
    let melody = timed(OPENING_RUN, 0.25).chain(timed(MELODY, 0.5)).collect();
    let harmony = timed(HARMONY, 0.5).collect();
    let layered = |volume: f64| Voice::new(Waveform::Square, volume).with_timbre("layered_square");
    variant(
        "score",
        "full sixteen-bar score in layered squares",
        CueSpec::builder("bgm_battle")
            .mix_mode(MixMode::Normalize)
            .layer(LayerSpec::sequence(
                Sequence::new(150.0, melody),
                layered(0.22),
            ))
            .layer(LayerSpec::sequence(
                Sequence::new(150.0, harmony),
                layered(0.22 * 0.7),
            ))
            .build(),
    )
}

fn bgm_town_classic() -> CueVariant {
    let melody = Sequence::from_pairs(
        120.0,
        &[
            ("A4", 0.5),
            ("C5", 0.5),
            ("E5", 0.5),
            ("G5", 0.5),
            ("F#5", 0.5),
            ("D5", 0.5),
            ("E5", 1.0),
            ("REST", 0.5),
            ("D5", 0.5),
            ("C5", 0.5),
            ("A4", 1.0),
        ],
    )
    .repeated(2);
    let arpeggio = Sequence::from_pairs(
        120.0,
        &[
            ("A3", 0.25),
            ("E4", 0.25),
            ("A4", 0.25),
            ("G3", 0.25),
            ("D4", 0.25),
            ("G4", 0.25),
            ("D3", 0.25),
            ("A3", 0.25),
            ("D4", 0.25),
            ("E3", 0.25),
            ("G3", 0.25),
            ("E4", 0.25),
        ],
    )
    .repeated(3);
    variant(
        "classic",
        "triangle melody over a sine arpeggio",
        CueSpec::builder("bgm_town")
            .mix_mode(MixMode::Clip)
            .loop_count(2)
            .normalize_after_loop()
            .layer(LayerSpec::sequence(
                melody,
                enveloped(Waveform::Triangle, VOLUME),
            ))
            .layer(LayerSpec::sequence(
                arpeggio,
                enveloped(Waveform::Sine, VOLUME * 0.7),
            ))
            .build(),
    )
}

fn bgm_town_calm() -> CueVariant {
    let soft_sine = |volume: f64| Voice::new(Waveform::Sine, volume).with_timbre("classic");
    variant(
        "calm",
        "plain sine melody and bass",
        CueSpec::builder("bgm_town")
            .layer(LayerSpec::sequence(
                Sequence::from_pairs(
                    120.0,
                    &[
                        ("C4", 1.0),
                        ("E4", 1.0),
                        ("G4", 1.0),
                        ("C5", 1.0),
                        ("G4", 1.0),
                        ("E4", 1.0),
                        ("C4", 2.0),
                    ],
                ),
                soft_sine(VOLUME),
            ))
            .layer(LayerSpec::sequence(
                Sequence::from_pairs(120.0, &[("C3", 2.0), ("G3", 2.0), ("F3", 2.0), ("C3", 2.0)]),
                soft_sine(VOLUME * 0.6),
            ))
            .build(),
    )
}

fn victory_music_classic() -> CueVariant {
    variant(
        "classic",
        "victory theme",
        CueSpec::builder("victory_music")
            .layer(LayerSpec::sequence(
                Sequence::from_pairs(
                    120.0,
                    &[
                        ("B4", 0.5),
                        ("B4", 0.5),
                        ("B4", 0.5),
                        ("B4", 0.5),
                        ("G4", 0.5),
                        ("A4", 0.5),
                        ("B4", 0.5),
                        ("A4", 0.5),
                        ("B4", 1.0),
                        ("C5", 0.5),
                        ("Bb4", 0.5),
                        ("C5", 0.5),
                        ("Bb4", 0.5),
                        ("Bb4", 1.0),
                    ],
                ),
                classic_square(VOLUME).with_default_envelope(),
            ))
            .build(),
    )
}

fn victory_music_ff() -> CueVariant {
    variant(
        "ff",
        "C major arpeggio and chord, bright sine",
        melody_then_chord(
            ff_cue("victory_music"),
            Sequence::from_frequencies(&RISING_FANFARE[..9], 0.3),
            bright_sine(0.5),
            held_chord(&[523.0, 659.0, 784.0, 1047.0, 1319.0], 1.0),
            Voice::new(Waveform::Sine, 0.6).with_timbre("chord"),
        ),
    )
}

fn victory_music_ff_authentic() -> CueVariant {
    let melody: Vec<f64> = RISING_FANFARE
        .iter()
        .chain(RISING_FANFARE_TAIL)
        .copied()
        .collect();
    variant(
        "ff_authentic",
        "extended square arpeggio fanfare with closing chord",
        rising_fanfare(
            "victory_music",
            &melody,
            0.2,
            held_chord(&[523.0, 659.0, 784.0, 1047.0, 1319.0, 1568.0], 1.2),
        ),
    )
}

fn victory_music_ff_exact() -> CueVariant {
    let melody: Vec<&str> = FANFARE.iter().chain(FANFARE_TAIL).copied().collect();
    variant(
        "ff_exact",
        "extended fanfare with closing chord",
        fanfare("victory_music", melody, 1.0),
    )
}

fn victory_music_missing() -> CueVariant {
    variant(
        "missing",
        "plain sine ascent into a held chord",
        melody_then_chord(
            ff_cue("victory_music"),
            Sequence::from_frequencies(&[262.0, 330.0, 392.0, 440.0, 523.0, 659.0, 784.0], 0.25),
            Voice::new(Waveform::Sine, 0.5),
            held_chord(&[523.0, 659.0, 784.0, 1047.0], 1.0),
            Voice::new(Waveform::Sine, 0.6),
        ),
    )
}
