//! Tests for mixing tracks of unequal length.

use chiptone_spec::MixMode;

use super::*;
use crate::error::AudioError;

const SR: f64 = 44100.0;

fn mixer(mode: MixMode) -> TrackMixer {
    TrackMixer::new(SR, mode).unwrap()
}

// =========================================================================
// Length law
// =========================================================================

#[test]
fn test_output_length_is_longest_track() {
    let mut m = mixer(MixMode::Clip);
    m.add_samples(vec![0.1; 300]).unwrap();
    m.add_samples(vec![0.2; 1000]).unwrap();
    m.add_samples(vec![0.3; 10]).unwrap();
    assert_eq!(m.output_len(), 1000);
    assert_eq!(m.mix().unwrap().len(), 1000);
}

#[test]
fn test_shorter_track_is_zero_padded() {
    let long: Vec<f64> = (0..1000).map(|i| (i as f64 / 1000.0) * 0.4).collect();
    let short: Vec<f64> = (0..400).map(|i| -(i as f64) / 2000.0).collect();

    let mut m = mixer(MixMode::Clip);
    m.add_samples(short.clone()).unwrap();
    m.add_samples(long.clone()).unwrap();
    let out = m.mix().unwrap();

    for i in 0..400 {
        assert_eq!(out.samples[i], long[i] + short[i]);
    }
    assert_eq!(&out.samples[400..], &long[400..]);
}

#[test]
fn test_delay_extends_output() {
    let mut m = mixer(MixMode::Clip);
    m.add_samples(vec![0.5; 100]).unwrap();
    m.add_track(Track::new(vec![0.25; 100], SR).with_delay(150))
        .unwrap();
    let out = m.mix().unwrap();

    assert_eq!(out.len(), 250);
    assert!(out.samples[100..150].iter().all(|&s| s == 0.0));
    assert!(out.samples[150..].iter().all(|&s| s == 0.25));
}

#[test]
fn test_delay_seconds_rounds_to_samples() {
    let track = Track::new(vec![0.0; 10], SR).with_delay_seconds(6.15);
    assert_eq!(track.delay_samples, 271_215);
    assert_eq!(track.end(), Some(271_225));
}

// =========================================================================
// Mix modes
// =========================================================================

#[test]
fn test_clip_mode_limits_sum() {
    let mut m = mixer(MixMode::Clip);
    m.add_samples(vec![0.8, -0.8, 0.3]).unwrap();
    m.add_samples(vec![0.8, -0.8, 0.3]).unwrap();
    assert_eq!(m.mix().unwrap().samples, vec![1.0, -1.0, 0.6]);
}

#[test]
fn test_clip_mode_leaves_in_range_tail_alone() {
    let melody: Vec<f64> = (0..44100).map(|i| 0.5 * (i as f64 * 0.01).sin()).collect();
    let harmony = vec![0.7; 22050];

    let mut m = mixer(MixMode::Clip);
    m.add_samples(melody.clone()).unwrap();
    m.add_samples(harmony).unwrap();
    let out = m.mix().unwrap();

    assert_eq!(out.len(), 44100);
    assert_eq!(&out.samples[22050..], &melody[22050..]);
}

#[test]
fn test_normalize_mode_reaches_full_scale() {
    let mut m = mixer(MixMode::Normalize);
    m.add_samples(vec![0.1, 0.2, -0.3]).unwrap();
    m.add_samples(vec![0.1, 0.0]).unwrap();
    let out = m.mix().unwrap();
    assert!((peak(&out.samples) - 1.0).abs() < 1e-12);
    assert!((out.samples[0] - 0.2 / 0.3).abs() < 1e-12);
    assert_eq!(out.samples[2], -1.0);
}

#[test]
fn test_normalize_silence_stays_silent() {
    let mut m = mixer(MixMode::Normalize);
    m.add_samples(vec![0.0; 64]).unwrap();
    let out = m.mix().unwrap();
    assert!(out.samples.iter().all(|&s| s == 0.0));
}

// =========================================================================
// Edge cases
// =========================================================================

#[test]
fn test_empty_mixer() {
    let m = mixer(MixMode::Normalize);
    assert_eq!(m.num_tracks(), 0);
    assert!(m.mix().unwrap().is_empty());
}

#[test]
fn test_sample_rate_mismatch() {
    let mut m = mixer(MixMode::Clip);
    let err = m.add_track(Track::silent(10, 22050.0)).unwrap_err();
    assert!(err.to_string().contains("22050"));
}

#[test]
fn test_invalid_mixer_sample_rate() {
    assert!(TrackMixer::new(0.0, MixMode::Clip).is_err());
}

#[test]
fn test_huge_delay_is_rejected() {
    let mut m = mixer(MixMode::Clip);
    let track = Track::new(vec![0.5; 10], SR).with_delay_seconds(1e300);
    assert_eq!(track.delay_samples, usize::MAX);
    assert_eq!(track.end(), None);

    let err = m.add_track(track).unwrap_err();
    assert!(matches!(err, AudioError::InvalidParameter { .. }));
    assert_eq!(m.num_tracks(), 0);
}

#[test]
fn test_delay_past_mix_limit_is_rejected() {
    let mut m = mixer(MixMode::Clip);
    let limit = m.max_len();
    assert_eq!(limit, 26_460_000);

    m.add_track(Track::silent(10, SR).with_delay(limit - 10)).unwrap();
    assert!(m
        .add_track(Track::silent(10, SR).with_delay(limit - 9))
        .is_err());
    assert_eq!(m.output_len(), limit);
}
