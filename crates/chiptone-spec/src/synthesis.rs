//! Waveforms, envelopes, timbres, and voices.

use serde::{Deserialize, Serialize};

/// Oscillator waveform kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    /// Sine wave.
    Sine,
    /// Square wave (sign of a sine).
    Square,
    /// Triangle wave.
    Triangle,
    /// Sawtooth wave.
    #[serde(alias = "saw")]
    Sawtooth,
    /// Uniform white noise (used by percussion).
    Noise,
}

impl Waveform {
    /// Returns the lowercase name used in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Triangle => "triangle",
            Waveform::Sawtooth => "sawtooth",
            Waveform::Noise => "noise",
        }
    }
}

impl std::fmt::Display for Waveform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ADSR envelope parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Envelope {
    /// Attack time in seconds.
    pub attack: f64,
    /// Decay time in seconds.
    pub decay: f64,
    /// Sustain level (0.0 to 1.0).
    pub sustain: f64,
    /// Release time in seconds.
    pub release: f64,
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            attack: 0.01,
            decay: 0.1,
            sustain: 0.7,
            release: 0.2,
        }
    }
}

impl Envelope {
    /// Creates new envelope parameters.
    pub fn new(attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        Self {
            attack,
            decay,
            sustain,
            release,
        }
    }

    /// The fixed short envelope used for percussion hits.
    pub fn percussive() -> Self {
        Self {
            attack: 0.001,
            decay: 0.1,
            sustain: 0.0,
            release: 0.1,
        }
    }

    /// Sum of the timed phases (attack + decay + release).
    pub fn total_time(&self) -> f64 {
        self.attack + self.decay + self.release
    }

    /// Returns a copy whose timed phases fit inside `duration` seconds.
    ///
    /// When attack + decay + release exceeds the duration, all three are
    /// scaled by the same factor so that their sum equals the duration.
    pub fn fitted(&self, duration: f64) -> Self {
        let total = self.total_time();
        if total <= duration || total <= 0.0 {
            return *self;
        }
        let factor = duration / total;
        Self {
            attack: self.attack * factor,
            decay: self.decay * factor,
            sustain: self.sustain,
            release: self.release * factor,
        }
    }
}

/// Shape of the overtones added on top of the fundamental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OvertoneShape {
    /// Overtones use the same formula as the fundamental.
    Base,
    /// Overtones are pure sines regardless of the fundamental's waveform.
    #[default]
    Sine,
}

/// Harmonic weight table describing a timbre.
///
/// `overtones[0]` weights the 2nd harmonic (2f), `overtones[1]` the 3rd (3f),
/// and so on. The summed signal is divided by `divisor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Timbre {
    /// Weight of the fundamental.
    #[serde(default = "default_unit")]
    pub fundamental: f64,
    /// Weights of the 2nd, 3rd, 4th, ... harmonics.
    #[serde(default)]
    pub overtones: Vec<f64>,
    /// Formula used for the overtones.
    #[serde(default)]
    pub shape: OvertoneShape,
    /// Output divisor applied after summing.
    #[serde(default = "default_unit")]
    pub divisor: f64,
}

fn default_unit() -> f64 {
    1.0
}

/// Names of the built-in timbre presets, in display order.
pub const TIMBRE_PRESETS: &[&str] = &[
    "pure",
    "classic",
    "bright",
    "rich",
    "authentic",
    "authentic_sine",
    "exact",
    "exact_soft",
    "chord",
    "chord_full",
    "chord_square",
    "layered_square",
];

impl Default for Timbre {
    fn default() -> Self {
        Self::pure()
    }
}

impl Timbre {
    /// Creates a timbre from explicit weights.
    pub fn new(fundamental: f64, overtones: Vec<f64>, shape: OvertoneShape) -> Self {
        Self {
            fundamental,
            overtones,
            shape,
            divisor: 1.0,
        }
    }

    /// Overtone weights falling off as `scale / (i + 1)` for `count` harmonics.
    pub fn decaying(scale: f64, count: usize, shape: OvertoneShape) -> Self {
        let overtones = (0..count).map(|i| scale / (i as f64 + 1.0)).collect();
        Self::new(1.0, overtones, shape)
    }

    /// Sets the output divisor.
    pub fn with_divisor(mut self, divisor: f64) -> Self {
        self.divisor = divisor;
        self
    }

    /// The bare waveform with no overtones.
    pub fn pure() -> Self {
        Self::new(1.0, Vec::new(), OvertoneShape::Sine)
    }

    /// Half-amplitude fundamental, the classic square voice.
    pub fn classic() -> Self {
        Self::new(0.5, Vec::new(), OvertoneShape::Sine)
    }

    /// Sine overtones at 0.3 / (i + 1) on harmonics 2-4.
    pub fn bright() -> Self {
        Self::decaying(0.3, 3, OvertoneShape::Sine)
    }

    /// Sine overtones at 0.2 / (i + 1) on harmonics 2-4.
    pub fn rich() -> Self {
        Self::decaying(0.2, 3, OvertoneShape::Sine)
    }

    /// Sine overtones at 0.15 / (i + 1) on harmonics 2-5.
    pub fn authentic() -> Self {
        Self::decaying(0.15, 4, OvertoneShape::Sine)
    }

    /// Sine overtones at 0.25 / (i + 1) on harmonics 2-5.
    pub fn authentic_sine() -> Self {
        Self::decaying(0.25, 4, OvertoneShape::Sine)
    }

    /// Same-shape overtones at 0.2 / (i + 1) on harmonics 2-4.
    pub fn exact() -> Self {
        Self::decaying(0.2, 3, OvertoneShape::Base)
    }

    /// Sine overtones at 0.15 / (i + 1) on harmonics 2-4.
    pub fn exact_soft() -> Self {
        Self::decaying(0.15, 3, OvertoneShape::Sine)
    }

    /// Chord voicing with sine overtones 0.3 and 0.2.
    pub fn chord() -> Self {
        Self::new(1.0, vec![0.3, 0.2], OvertoneShape::Sine)
    }

    /// Chord voicing with sine overtones 0.3, 0.2 and 0.1.
    pub fn chord_full() -> Self {
        Self::new(1.0, vec![0.3, 0.2, 0.1], OvertoneShape::Sine)
    }

    /// Chord voicing with square overtones 0.3 and 0.2.
    pub fn chord_square() -> Self {
        Self::new(1.0, vec![0.3, 0.2], OvertoneShape::Base)
    }

    /// Half-amplitude square with square overtones, scaled back by 1.3.
    pub fn layered_square() -> Self {
        Self::new(0.5, vec![0.2, 0.1], OvertoneShape::Base).with_divisor(1.3)
    }

    /// Looks up a preset by name.
    pub fn preset(name: &str) -> Option<Self> {
        let timbre = match name {
            "pure" => Self::pure(),
            "classic" => Self::classic(),
            "bright" => Self::bright(),
            "rich" => Self::rich(),
            "authentic" => Self::authentic(),
            "authentic_sine" => Self::authentic_sine(),
            "exact" => Self::exact(),
            "exact_soft" => Self::exact_soft(),
            "chord" => Self::chord(),
            "chord_full" => Self::chord_full(),
            "chord_square" => Self::chord_square(),
            "layered_square" => Self::layered_square(),
            _ => return None,
        };
        Some(timbre)
    }

    /// Sum of absolute weights divided by the divisor.
    ///
    /// This bounds the peak amplitude of one voice before volume scaling.
    pub fn peak_gain(&self) -> f64 {
        let sum: f64 =
            self.fundamental.abs() + self.overtones.iter().map(|w| w.abs()).sum::<f64>();
        sum / self.divisor
    }
}

/// A timbre given either by preset name or by explicit weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimbreSpec {
    /// Named preset (see [`TIMBRE_PRESETS`]).
    Preset(String),
    /// Explicit weight table.
    Custom(Timbre),
}

impl Default for TimbreSpec {
    fn default() -> Self {
        TimbreSpec::Preset("pure".to_string())
    }
}

impl TimbreSpec {
    /// Resolves to a concrete timbre, or None for an unknown preset.
    pub fn resolve(&self) -> Option<Timbre> {
        match self {
            TimbreSpec::Preset(name) => Timbre::preset(name),
            TimbreSpec::Custom(timbre) => Some(timbre.clone()),
        }
    }
}

impl From<&str> for TimbreSpec {
    fn from(name: &str) -> Self {
        TimbreSpec::Preset(name.to_string())
    }
}

impl From<Timbre> for TimbreSpec {
    fn from(timbre: Timbre) -> Self {
        TimbreSpec::Custom(timbre)
    }
}

/// How a melodic layer sounds: waveform, timbre, envelope, and volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Voice {
    /// Oscillator waveform.
    pub waveform: Waveform,
    /// Harmonic weighting.
    #[serde(default)]
    pub timbre: TimbreSpec,
    /// Optional ADSR envelope applied per note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub envelope: Option<Envelope>,
    /// Volume scale (0.0 exclusive to 1.0).
    pub volume: f64,
}

impl Voice {
    /// Creates a voice with the pure timbre and no envelope.
    pub fn new(waveform: Waveform, volume: f64) -> Self {
        Self {
            waveform,
            timbre: TimbreSpec::default(),
            envelope: None,
            volume,
        }
    }

    /// Sets the timbre.
    pub fn with_timbre(mut self, timbre: impl Into<TimbreSpec>) -> Self {
        self.timbre = timbre.into();
        self
    }

    /// Sets the envelope.
    pub fn with_envelope(mut self, envelope: Envelope) -> Self {
        self.envelope = Some(envelope);
        self
    }

    /// Uses the default envelope.
    pub fn with_default_envelope(self) -> Self {
        self.with_envelope(Envelope::default())
    }
}
