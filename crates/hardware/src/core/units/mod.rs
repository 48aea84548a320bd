//! Execution units.
//!
//! This module contains the computational units driven by the control
//! signals. The single-cycle model needs only one:
//! 1. **ALU:** Arithmetic, logic, shift, and set-less-than operations.

/// Arithmetic Logic Unit implementation.
pub mod alu;

pub use alu::{Alu, AluResult};
