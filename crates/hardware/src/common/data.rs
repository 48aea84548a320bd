//! Memory Access Types.
//!
//! This module defines the classification of memory accesses used throughout
//! the simulator. These types are used for the following:
//! 1. **Fault Generation:** Determining the correct access fault trap type.
//! 2. **Statistics Tracking:** Categorizing memory operations.

/// Type of memory access operation.
///
/// Used to distinguish between instruction fetches, data loads, and data
/// stores when reporting out-of-range accesses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Instruction fetch access.
    ///
    /// Occurs when resolving the program counter against instruction memory.
    Fetch,

    /// Data read access.
    ///
    /// Occurs during `lw` when reading data memory into a register.
    Read,

    /// Data write access.
    ///
    /// Occurs during `sw` when writing a register value to data memory.
    Write,
}
