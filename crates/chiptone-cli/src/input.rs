//! Cue file loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chiptone_spec::CueSpec;

/// Reads and parses a JSON cue file without validating it.
pub fn load_cue(path: &Path) -> Result<CueSpec> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read cue file: {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse cue file: {}", path.display()))
}
