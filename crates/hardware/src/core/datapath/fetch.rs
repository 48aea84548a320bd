//! Instruction Fetch.
//!
//! Resolves the current program counter to an instruction word. The PC is
//! a byte address and must be word-aligned; the word slot is `pc / 4`.

use crate::common::constants::WORD_BYTES;
use crate::common::data::AccessType;
use crate::common::error::Trap;
use crate::common::mem::WordMemory;
use crate::common::word::Word;

/// Fetches the instruction word addressed by `cur_pc`.
///
/// # Errors
///
/// Returns [`Trap::InstructionAddressMisaligned`] when the PC is not a
/// multiple of 4, and [`Trap::InstructionAccessFault`] when it resolves
/// outside the instruction image.
pub fn fetch(cur_pc: Word, imem: &WordMemory) -> Result<Word, Trap> {
    if cur_pc % WORD_BYTES != 0 {
        return Err(Trap::InstructionAddressMisaligned(cur_pc));
    }
    imem.read(cur_pc, AccessType::Fetch)
}
