//! Stable exit codes for the augmentation binaries.

/// Columns were added and the fixture rewritten.
pub const OK: i32 = 0;
/// The run failed: config invalid, literal missing, or read/write error.
pub const FAILED: i32 = 1;
