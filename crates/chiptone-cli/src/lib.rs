//! chiptone CLI library.
//!
//! This crate provides the command implementations behind the `chiptone`
//! binary: rendering catalog or file-based cues to WAV, listing the catalog,
//! and validating cue files.

pub mod commands;
pub mod input;
