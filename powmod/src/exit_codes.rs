//! Stable exit codes for powmod CLI commands.

/// Command succeeded; for `powmod eval`, the power was computed.
pub const OK: i32 = 0;
/// Command failed due to invalid arguments, config, or I/O errors.
pub const INVALID: i32 = 1;
/// `powmod eval` ran, but at least one parameter was invalid.
pub const UNAVAILABLE: i32 = 2;
