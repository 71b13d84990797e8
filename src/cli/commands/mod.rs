//! CLI command implementations
//!
//! Each command returns a process exit code:
//! 0 success, 2 configuration error, 3 input data error, 5 fatal error.

pub mod analyze;
pub mod generate;
pub mod init;
pub mod input;
pub mod summarize;
pub mod validate;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CONFIG_ERROR: i32 = 2;
pub const EXIT_DATA_ERROR: i32 = 3;
pub const EXIT_FATAL: i32 = 5;
