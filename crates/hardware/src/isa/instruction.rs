//! Decoded instruction fields.
//!
//! Provides the read-only view of one fetched instruction word. Every field
//! is a pure bit-slice of the same word; nothing is mutated after decode.

use crate::common::word::Word;

/// The constituent fields of one 32-bit MIPS instruction.
///
/// The 16-bit immediate is carried in both its raw form (`imm16`, for
/// zero-extension) and sign-extended to a full word (`imm32`), because the
/// recognised instructions disagree on the extension policy: `andi` masks
/// against the raw immediate while the arithmetic and memory instructions
/// use the sign-extended form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstructionFields {
    /// 6-bit primary opcode (bits 31-26).
    pub opcode: Word,
    /// 5-bit first source register index (bits 25-21).
    pub rs: usize,
    /// 5-bit second source / destination register index (bits 20-16).
    pub rt: usize,
    /// 5-bit R-type destination register index (bits 15-11).
    pub rd: usize,
    /// 5-bit shift amount (bits 10-6).
    pub shamt: Word,
    /// 6-bit function code (bits 5-0).
    pub funct: Word,
    /// Raw 16-bit immediate (bits 15-0).
    pub imm16: u16,
    /// The immediate sign-extended to 32 bits.
    pub imm32: Word,
    /// 26-bit jump target field (bits 25-0).
    pub target: Word,
}
