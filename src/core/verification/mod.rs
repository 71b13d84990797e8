//! Report verification
//!
//! Checksums for analysis reports and record collections, used to confirm
//! that repeated analyses of the same input are identical.

pub mod checksum;

pub use checksum::{calculate_checksum, records_checksum, report_checksum};
