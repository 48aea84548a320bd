//! Single-cycle MIPS datapath simulator library.
//!
//! This crate models one clock cycle of a reduced MIPS-I processor with the following:
//! 1. **Core:** Control unit, operand selection, ALU, and the single-cycle datapath
//!    (fetch, decode, execute, memory, writeback, PC update).
//! 2. **ISA:** Field extraction, opcode/function constants, ABI register names, and
//!    a disassembler for the recognised instruction subset.
//! 3. **State:** Register file and word-addressed instruction/data memories.
//! 4. **Simulation:** Image loader, configuration, and statistics collection.

/// Common types and constants (words, traps, register file, word memory).
pub mod common;
/// Simulator configuration (defaults and hierarchical config structures).
pub mod config;
/// CPU core (control unit, datapath stages, ALU).
pub mod core;
/// Instruction set (field extraction, opcodes, function codes, ABI, disassembly).
pub mod isa;
/// Image loader and cycle-driving simulator.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Top-level simulator; owns the PC, register file, and both memories.
pub use crate::sim::Simulator;
