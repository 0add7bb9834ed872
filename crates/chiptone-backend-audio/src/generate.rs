//! Main entry point for cue generation.
//!
//! A cue is validated, each layer is rendered with its own RNG stream, the
//! layers are mixed, the mix is tiled `loop_count` times, and the result is
//! quantized into a WAV file. Nothing is returned unless every step succeeds.

use chiptone_spec::validation::validate_cue;
use chiptone_spec::{CueSpec, LayerSpec};
use rand_pcg::Pcg32;
use tracing::{debug, info};

use crate::error::{AudioError, AudioResult};
use crate::mixer::{normalize, peak, tile, Track, TrackMixer};
use crate::percussion::PercussionGenerator;
use crate::pitch::PitchTable;
use crate::rng::create_layer_rng;
use crate::sequencer::NoteSequencer;
use crate::wav::WavResult;

/// Result of cue generation.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Cue name.
    pub cue: String,
    /// WAV file data.
    pub wav: WavResult,
    /// Number of layers mixed.
    pub num_layers: usize,
    /// Peak absolute sample before quantization.
    pub peak: f64,
}

impl GenerateResult {
    /// Output file name (`<cue>.wav`).
    pub fn file_name(&self) -> String {
        format!("{}.wav", self.cue)
    }
}

/// Generates a cue with the standard pitch table.
///
/// # Arguments
/// * `spec` - The cue to render
///
/// # Returns
/// Generated WAV file and metadata
pub fn generate(spec: &CueSpec) -> AudioResult<GenerateResult> {
    generate_with_pitches(spec, &PitchTable::standard())
}

/// Generates a cue, resolving note labels through `pitches`.
pub fn generate_with_pitches(spec: &CueSpec, pitches: &PitchTable) -> AudioResult<GenerateResult> {
    let mix = render_cue(spec, pitches)?;
    let wav = WavResult::from_samples(&mix.samples, spec.sample_rate, spec.sample_format);

    info!(
        cue = %spec.name,
        samples = wav.num_samples,
        bits = spec.sample_format.bits(),
        pcm_hash = %wav.pcm_hash,
        "generated cue"
    );

    Ok(GenerateResult {
        cue: spec.name.clone(),
        wav,
        num_layers: spec.layers.len(),
        peak: peak(&mix.samples),
    })
}

/// Renders a cue to a float track without quantizing it.
pub fn render_cue(spec: &CueSpec, pitches: &PitchTable) -> AudioResult<Track> {
    let validation = validate_cue(spec);
    if !validation.is_ok() {
        return Err(AudioError::InvalidSpec {
            cue: spec.name.clone(),
            errors: validation.errors,
        });
    }

    let sample_rate = spec.sample_rate as f64;
    let mut mixer = TrackMixer::new(sample_rate, spec.mix_mode)?;

    for (layer_idx, layer) in spec.layers.iter().enumerate() {
        let mut rng = create_layer_rng(spec.seed, layer_idx as u32);
        let samples = render_layer(layer, sample_rate, pitches, &mut rng)?;
        debug!(
            cue = %spec.name,
            layer = layer_idx,
            kind = layer.kind(),
            samples = samples.len(),
            offset_seconds = layer.offset_seconds(),
            "rendered layer"
        );
        mixer.add_track(Track::new(samples, sample_rate).with_delay_seconds(layer.offset_seconds()))?;
    }

    let mixed = mixer.mix()?;
    let mut samples = tile(&mixed.samples, spec.loop_count as usize);
    if spec.normalize_after_loop {
        normalize(&mut samples);
    }

    Ok(Track::new(samples, sample_rate))
}

/// Renders one layer to an unplaced buffer.
pub fn render_layer(
    layer: &LayerSpec,
    sample_rate: f64,
    pitches: &PitchTable,
    rng: &mut Pcg32,
) -> AudioResult<Vec<f64>> {
    match layer {
        LayerSpec::Sequence {
            sequence, voice, ..
        } => NoteSequencer::new(pitches, sample_rate)?.render(sequence, voice, rng),
        LayerSpec::Tone {
            frequency,
            duration_seconds,
            voice,
            ..
        } => NoteSequencer::new(pitches, sample_rate)?.render_tone(
            *frequency,
            *duration_seconds,
            voice,
            rng,
        ),
        LayerSpec::Percussion {
            pattern,
            slot_beats,
            tempo_bpm,
            volume,
            ..
        } => PercussionGenerator::new(sample_rate)?.render_at_tempo(
            pattern,
            *slot_beats,
            *tempo_bpm,
            *volume,
            rng,
        ),
    }
}
