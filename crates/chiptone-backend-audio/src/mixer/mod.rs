//! Track mixing with clip or peak normalization.
//!
//! Tracks of unequal length are placed at their start offsets, zero-padded
//! to the longest end, summed, and then limited according to the cue's
//! [`MixMode`](chiptone_spec::MixMode).

#[allow(clippy::module_inception)]
mod mixer;
mod processing;
mod types;

#[cfg(test)]
mod tests_mixing;
#[cfg(test)]
mod tests_processing;

// Re-export public API
pub use mixer::TrackMixer;
pub use processing::{apply_mix_mode, clip, normalize, peak, sum_padded, tile};
pub use types::Track;
