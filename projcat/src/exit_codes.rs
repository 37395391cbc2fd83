//! Stable exit codes for projcat CLI commands.

/// Run completed (per-file read failures do not affect the exit code).
pub const OK: i32 = 0;
/// Structural failure: unreadable root, unwritable output, or invalid config.
pub const INVALID: i32 = 1;
