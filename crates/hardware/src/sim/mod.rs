//! Simulation utilities and program loading.
//!
//! Provides the image loader and the cycle-driving simulator that owns the
//! architectural state between cycles.

/// Instruction and data image loading.
pub mod loader;

/// The cycle-driving simulator.
pub mod simulator;

pub use loader::LoaderError;
pub use simulator::{Simulator, StopReason};
