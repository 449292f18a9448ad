//! Exit code constants for the CLI application.
//!
//! This module centralizes all exit codes used by the CLI, making them
//! easier to maintain and ensuring consistency across commands.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code: bad arguments, invalid input or configuration.
pub const ERROR: i32 = 2;
