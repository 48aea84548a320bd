//! Trap definitions.
//!
//! This module defines the error handling for the datapath. It provides:
//! 1. **Trap Representation:** The conditions that abort a cycle before any
//!    architectural state is modified.
//! 2. **Error Handling:** Integration with standard Rust error traits via
//!    `thiserror` for driver-level reporting.
//!
//! A cycle either completes in full or traps with no partial effects; there
//! are no recoverable or partial states.

use thiserror::Error;

use crate::common::word::Word;

/// Conditions that abort a datapath cycle.
///
/// The control unit raises `IllegalInstruction` for any (opcode, function
/// code) pair outside the recognised set. The remaining variants are the
/// fail-fast address checks: a PC or computed data address that leaves its
/// image is rejected rather than left undefined.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Trap {
    /// The (opcode, function code) pair is not a recognised instruction.
    #[error("illegal instruction: opcode {opcode:#04x}, funct {funct:#04x}")]
    IllegalInstruction {
        /// The 6-bit primary opcode field of the offending instruction.
        opcode: Word,
        /// The 6-bit function code field of the offending instruction.
        funct: Word,
    },

    /// The program counter is not a multiple of the word size.
    #[error("instruction address misaligned: pc {0:#010x}")]
    InstructionAddressMisaligned(Word),

    /// The program counter resolves outside the instruction memory image.
    #[error("instruction access fault: pc {0:#010x}")]
    InstructionAccessFault(Word),

    /// A load address resolves outside the data memory image.
    #[error("load access fault: address {0:#010x}")]
    LoadAccessFault(Word),

    /// A store address resolves outside the data memory image.
    #[error("store access fault: address {0:#010x}")]
    StoreAccessFault(Word),
}
