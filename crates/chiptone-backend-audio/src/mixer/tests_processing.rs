//! Tests for buffer processing helpers.

use chiptone_spec::MixMode;

use super::*;

#[test]
fn test_peak() {
    assert_eq!(peak(&[]), 0.0);
    assert_eq!(peak(&[0.1, -0.9, 0.5]), 0.9);
}

#[test]
fn test_clip_pins_to_boundary() {
    let mut samples = vec![1.5, -2.0, 0.25, 1.0, -1.0];
    clip(&mut samples);
    assert_eq!(samples, vec![1.0, -1.0, 0.25, 1.0, -1.0]);
}

#[test]
fn test_normalize_is_idempotent_at_full_scale() {
    let original = vec![0.2, -1.0, 0.7, 0.0];
    let mut samples = original.clone();
    normalize(&mut samples);
    assert_eq!(samples, original);
}

#[test]
fn test_normalize_scales_up_quiet_buffer() {
    let mut samples = vec![0.25, -0.125];
    normalize(&mut samples);
    assert_eq!(samples, vec![1.0, -0.5]);
}

#[test]
fn test_normalize_guard_on_silence() {
    let mut samples = vec![0.0; 8];
    normalize(&mut samples);
    assert!(samples.iter().all(|s| *s == 0.0 && !s.is_nan()));
}

#[test]
fn test_apply_mix_mode() {
    let mut clipped = vec![2.0, 0.5];
    apply_mix_mode(&mut clipped, MixMode::Clip);
    assert_eq!(clipped, vec![1.0, 0.5]);

    let mut normalized = vec![2.0, 0.5];
    apply_mix_mode(&mut normalized, MixMode::Normalize);
    assert_eq!(normalized, vec![1.0, 0.25]);
}

#[test]
fn test_sum_padded_with_offsets() {
    let a = [1.0, 1.0];
    let b = [0.5, 0.5, 0.5];
    let out = sum_padded(vec![(0, &a[..]), (3, &b[..])]).unwrap();
    assert_eq!(out, vec![1.0, 1.0, 0.0, 0.5, 0.5, 0.5]);

    let overlap = sum_padded(vec![(0, &a[..]), (1, &b[..])]).unwrap();
    assert_eq!(overlap, vec![1.0, 1.5, 0.5, 0.5]);
}

#[test]
fn test_sum_padded_overflowing_end() {
    let a = [0.5, 0.5];
    assert_eq!(sum_padded(vec![(usize::MAX, &a[..])]), None);
}

#[test]
fn test_sum_padded_empty() {
    let parts: Vec<(usize, &[f64])> = Vec::new();
    assert_eq!(sum_padded(parts), Some(Vec::new()));
}

#[test]
fn test_tile() {
    assert_eq!(tile(&[1.0, 2.0], 3), vec![1.0, 2.0, 1.0, 2.0, 1.0, 2.0]);
    assert_eq!(tile(&[1.0, 2.0], 1), vec![1.0, 2.0]);
    assert!(tile(&[1.0], 0).is_empty());
    assert!(tile(&[], 4).is_empty());
}
