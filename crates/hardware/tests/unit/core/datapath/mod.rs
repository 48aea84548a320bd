//! Datapath stage and full-cycle tests.

/// Full single-cycle integration tests.
pub mod cycle;

/// Instruction fetch tests.
pub mod fetch;
