//! Time base for the clock: one wall-clock sample per frame, turned into
//! three continuously sweeping hand angles.
//!
//! # Invariants
//! - A sample is captured atomically once per frame and never persisted.
//! - Angle derivation is continuous: fractional carry flows sub-second →
//!   second → minute → hour, so no hand ever jumps.

mod angles;
mod sample;

pub use angles::SweepAngles;
pub use sample::{ClockError, ClockSample};
