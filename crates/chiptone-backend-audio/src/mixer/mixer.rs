//! Track mixer for combining simultaneous tracks.

use chiptone_spec::validation::MAX_CUE_SECONDS;
use chiptone_spec::MixMode;
use tracing::debug;

use crate::error::{check_sample_rate, AudioError, AudioResult};

use super::processing::{apply_mix_mode, sum_padded};
use super::types::Track;

/// Combines tracks that sound at the same time.
#[derive(Debug)]
pub struct TrackMixer {
    /// Sample rate every track must share.
    sample_rate: f64,
    /// Limiting applied after summing.
    mode: MixMode,
    /// Accumulated tracks.
    tracks: Vec<Track>,
}

impl TrackMixer {
    /// Creates an empty mixer.
    pub fn new(sample_rate: f64, mode: MixMode) -> AudioResult<Self> {
        check_sample_rate(sample_rate)?;
        Ok(Self {
            sample_rate,
            mode,
            tracks: Vec::new(),
        })
    }

    /// Most samples a mix may span.
    pub fn max_len(&self) -> usize {
        (MAX_CUE_SECONDS * self.sample_rate).round() as usize
    }

    /// Adds a track to the mix.
    ///
    /// Fails if the track's sample rate differs from the mixer's, or if its
    /// delayed end lies beyond [`max_len`](Self::max_len).
    pub fn add_track(&mut self, track: Track) -> AudioResult<()> {
        if track.sample_rate != self.sample_rate {
            return Err(AudioError::invalid_param(
                "sample_rate",
                format!(
                    "track at {} Hz cannot be mixed at {} Hz",
                    track.sample_rate, self.sample_rate
                ),
            ));
        }
        match track.end() {
            Some(end) if end <= self.max_len() => {}
            _ => {
                return Err(AudioError::invalid_param(
                    "delay_samples",
                    format!(
                        "track of {} samples delayed by {} ends past the {}-sample limit",
                        track.len(),
                        track.delay_samples,
                        self.max_len()
                    ),
                ))
            }
        }
        self.tracks.push(track);
        Ok(())
    }

    /// Adds samples starting at the beginning of the mix.
    pub fn add_samples(&mut self, samples: Vec<f64>) -> AudioResult<()> {
        self.add_track(Track::new(samples, self.sample_rate))
    }

    /// Number of tracks added so far.
    pub fn num_tracks(&self) -> usize {
        self.tracks.len()
    }

    /// Length of the mixed output: the latest track end.
    pub fn output_len(&self) -> usize {
        self.tracks
            .iter()
            .filter_map(Track::end)
            .max()
            .unwrap_or(0)
    }

    /// Sums all tracks and applies the mix mode.
    pub fn mix(&self) -> AudioResult<Track> {
        let mut samples = sum_padded(
            self.tracks
                .iter()
                .map(|t| (t.delay_samples, t.samples.as_slice())),
        )
        .ok_or_else(|| AudioError::invalid_param("delay_samples", "mixed length overflows"))?;
        apply_mix_mode(&mut samples, self.mode);

        debug!(
            tracks = self.tracks.len(),
            samples = samples.len(),
            mode = ?self.mode,
            "mixed tracks"
        );
        Ok(Track::new(samples, self.sample_rate))
    }
}
