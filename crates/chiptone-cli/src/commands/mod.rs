//! CLI command implementations

pub mod json_output;
pub mod list;
pub mod render;
pub mod validate;

/// Exit code for invalid cues, unknown names, and unreadable input.
pub const EXIT_CONFIG_ERROR: u8 = 1;

/// Exit code for failures while rendering or writing output.
pub const EXIT_RENDER_ERROR: u8 = 2;
