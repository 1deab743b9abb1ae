//! Library half of the `yardwork` binaries.
//!
//! This crate focuses on:
//! - Interactive prompt loops
//! - Human-friendly report formatting
//!
//! The `mulch` and `weather` binaries are thin wrappers over the `run`
//! functions here.

pub mod mulch;
pub mod report;
pub mod weather;
