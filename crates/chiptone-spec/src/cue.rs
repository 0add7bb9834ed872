//! Cue recipes: layers, mix modes, and export formats.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::note::Sequence;
use crate::synthesis::Voice;
use crate::validation::validate_cue;

/// Default export sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// How simultaneous layers are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MixMode {
    /// Hard-limit the sum to [-1, 1].
    Clip,
    /// Divide the sum by its peak so it reaches full scale.
    #[default]
    Normalize,
}

/// PCM sample width of the exported file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SampleFormat {
    /// 8-bit PCM.
    Pcm8,
    /// 16-bit signed PCM.
    #[default]
    Pcm16,
}

impl SampleFormat {
    /// Bits per sample.
    pub fn bits(&self) -> u16 {
        match self {
            SampleFormat::Pcm8 => 8,
            SampleFormat::Pcm16 => 16,
        }
    }
}

/// A hit/rest rhythm grid.
///
/// Deserialized from either a step string (`"x.x."`, where `x` or `X` is a
/// hit and anything else a rest) or an array of 0/1 values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PatternRepr", into = "PatternRepr")]
pub struct RhythmPattern {
    /// One entry per slot; true = hit.
    pub slots: Vec<bool>,
}

impl RhythmPattern {
    /// Creates a pattern from a step string.
    pub fn from_steps(steps: &str) -> Self {
        Self {
            slots: steps.chars().map(|c| c == 'x' || c == 'X').collect(),
        }
    }

    /// Repeats the pattern `times` times.
    pub fn repeated(&self, times: usize) -> Self {
        Self {
            slots: self.slots.repeat(times),
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the pattern has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of hit slots.
    pub fn hits(&self) -> usize {
        self.slots.iter().filter(|&&hit| hit).count()
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum PatternRepr {
    Steps(String),
    Bits(Vec<u8>),
}

impl From<PatternRepr> for RhythmPattern {
    fn from(repr: PatternRepr) -> Self {
        match repr {
            PatternRepr::Steps(steps) => RhythmPattern::from_steps(&steps),
            PatternRepr::Bits(bits) => RhythmPattern {
                slots: bits.into_iter().map(|b| b != 0).collect(),
            },
        }
    }
}

impl From<RhythmPattern> for PatternRepr {
    fn from(pattern: RhythmPattern) -> Self {
        PatternRepr::Steps(
            pattern
                .slots
                .iter()
                .map(|&hit| if hit { 'x' } else { '.' })
                .collect(),
        )
    }
}

/// One layer of a cue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum LayerSpec {
    /// A note sequence rendered with one voice.
    Sequence {
        /// Notes and tempo.
        sequence: Sequence,
        /// Waveform, timbre, envelope, volume.
        voice: Voice,
        /// Start offset in seconds.
        #[serde(default, skip_serializing_if = "is_zero")]
        offset_seconds: f64,
    },
    /// A single held frequency.
    Tone {
        /// Frequency in Hz (0 = silence).
        frequency: f64,
        /// Duration in seconds.
        duration_seconds: f64,
        /// Waveform, timbre, envelope, volume.
        voice: Voice,
        /// Start offset in seconds.
        #[serde(default, skip_serializing_if = "is_zero")]
        offset_seconds: f64,
    },
    /// Noise bursts on a rhythm grid.
    Percussion {
        /// Hit/rest slots.
        pattern: RhythmPattern,
        /// Slot length in beats.
        slot_beats: f64,
        /// Tempo in beats per minute.
        tempo_bpm: f64,
        /// Volume scale.
        volume: f64,
        /// Start offset in seconds.
        #[serde(default, skip_serializing_if = "is_zero")]
        offset_seconds: f64,
    },
}

fn is_zero(value: &f64) -> bool {
    *value == 0.0
}

impl LayerSpec {
    /// Creates a sequence layer.
    pub fn sequence(sequence: Sequence, voice: Voice) -> Self {
        LayerSpec::Sequence {
            sequence,
            voice,
            offset_seconds: 0.0,
        }
    }

    /// Creates a single-tone layer.
    pub fn tone(frequency: f64, duration_seconds: f64, voice: Voice) -> Self {
        LayerSpec::Tone {
            frequency,
            duration_seconds,
            voice,
            offset_seconds: 0.0,
        }
    }

    /// Creates a percussion layer.
    pub fn percussion(pattern: RhythmPattern, slot_beats: f64, tempo_bpm: f64, volume: f64) -> Self {
        LayerSpec::Percussion {
            pattern,
            slot_beats,
            tempo_bpm,
            volume,
            offset_seconds: 0.0,
        }
    }

    /// Returns a copy that starts `seconds` into the cue.
    pub fn delayed(mut self, seconds: f64) -> Self {
        match &mut self {
            LayerSpec::Sequence { offset_seconds, .. }
            | LayerSpec::Tone { offset_seconds, .. }
            | LayerSpec::Percussion { offset_seconds, .. } => *offset_seconds = seconds,
        }
        self
    }

    /// Start offset in seconds.
    pub fn offset_seconds(&self) -> f64 {
        match self {
            LayerSpec::Sequence { offset_seconds, .. }
            | LayerSpec::Tone { offset_seconds, .. }
            | LayerSpec::Percussion { offset_seconds, .. } => *offset_seconds,
        }
    }

    /// Nominal rendered length in seconds, excluding the offset.
    pub fn duration_seconds(&self) -> f64 {
        match self {
            LayerSpec::Sequence { sequence, .. } => sequence.duration_seconds(),
            LayerSpec::Tone {
                duration_seconds, ..
            } => *duration_seconds,
            LayerSpec::Percussion {
                pattern,
                slot_beats,
                tempo_bpm,
                ..
            } => pattern.len() as f64 * slot_beats * 60.0 / tempo_bpm,
        }
    }

    /// Short kind name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            LayerSpec::Sequence { .. } => "sequence",
            LayerSpec::Tone { .. } => "tone",
            LayerSpec::Percussion { .. } => "percussion",
        }
    }
}

/// A complete cue: everything needed to render one exported file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CueSpec {
    /// Cue name; also the output file stem.
    pub name: String,
    /// Sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Export sample width.
    #[serde(default)]
    pub sample_format: SampleFormat,
    /// Seed for noise layers.
    #[serde(default)]
    pub seed: u32,
    /// How layers are combined.
    #[serde(default)]
    pub mix_mode: MixMode,
    /// Number of times the mixed buffer is tiled.
    #[serde(default = "default_loop_count")]
    pub loop_count: u32,
    /// Peak-normalize once more after tiling.
    #[serde(default)]
    pub normalize_after_loop: bool,
    /// Layers sounding simultaneously.
    pub layers: Vec<LayerSpec>,
}

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

fn default_loop_count() -> u32 {
    1
}

impl CueSpec {
    /// Creates a builder for a cue.
    pub fn builder(name: impl Into<String>) -> CueBuilder {
        CueBuilder::new(name)
    }

    /// Parses and validates a cue from JSON.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        let cue: CueSpec = serde_json::from_str(json)?;
        validate_cue(&cue)
            .into_result()
            .map_err(|errors| SpecError::Invalid {
                cue: cue.name.clone(),
                errors,
            })?;
        Ok(cue)
    }

    /// Serializes the cue to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// File name the cue is exported to.
    pub fn file_name(&self) -> String {
        format!("{}.wav", self.name)
    }
}

/// Builder for [`CueSpec`].
#[derive(Debug, Clone)]
pub struct CueBuilder {
    cue: CueSpec,
}

impl CueBuilder {
    /// Creates a builder with default settings.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            cue: CueSpec {
                name: name.into(),
                sample_rate: DEFAULT_SAMPLE_RATE,
                sample_format: SampleFormat::default(),
                seed: 0,
                mix_mode: MixMode::default(),
                loop_count: 1,
                normalize_after_loop: false,
                layers: Vec::new(),
            },
        }
    }

    /// Sets the sample rate.
    pub fn sample_rate(mut self, sample_rate: u32) -> Self {
        self.cue.sample_rate = sample_rate;
        self
    }

    /// Sets the export sample width.
    pub fn sample_format(mut self, format: SampleFormat) -> Self {
        self.cue.sample_format = format;
        self
    }

    /// Sets the noise seed.
    pub fn seed(mut self, seed: u32) -> Self {
        self.cue.seed = seed;
        self
    }

    /// Sets the mix mode.
    pub fn mix_mode(mut self, mode: MixMode) -> Self {
        self.cue.mix_mode = mode;
        self
    }

    /// Tiles the mixed buffer `count` times.
    pub fn loop_count(mut self, count: u32) -> Self {
        self.cue.loop_count = count;
        self
    }

    /// Normalizes again after tiling.
    pub fn normalize_after_loop(mut self) -> Self {
        self.cue.normalize_after_loop = true;
        self
    }

    /// Adds a layer.
    pub fn layer(mut self, layer: LayerSpec) -> Self {
        self.cue.layers.push(layer);
        self
    }

    /// Builds the cue.
    pub fn build(self) -> CueSpec {
        self.cue
    }
}
