//! Core library for the `yardwork` command-line tools.
//!
//! This crate defines:
//! - Shape, volume and pricing model for the mulch calculator
//! - The persisted mulch record store
//! - Temperature statistics for the weather tracker
//! - Unit conversion and rounding helpers
//!
//! It is used by `yardwork-cli` and carries no terminal interaction itself.

pub mod error;
pub mod mulch;
pub mod store;
pub mod units;
pub mod weather;

pub use error::StoreError;
pub use mulch::{MulchRecord, ShapeData, ShapeKind};
pub use store::MulchStore;
pub use weather::{CityRecord, SessionAverage, TempStats};
