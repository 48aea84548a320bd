//! Instruction field extraction.
//!
//! This module slices a raw 32-bit instruction word into its constituent
//! fields. Extraction is a pure function of the word: decoding the same
//! word twice yields identical fields, and no field is derived from any
//! state outside the instruction itself.

use crate::common::constants::{
    FUNCT_MASK, IMM16_MASK, OPCODE_MASK, OPCODE_SHIFT, RD_SHIFT, REG_MASK, RS_SHIFT, RT_SHIFT,
    SHAMT_SHIFT, TARGET_MASK,
};
use crate::common::word::{Word, sign_extend_16};
use crate::isa::instruction::InstructionFields;

/// Extracts all instruction fields from a fetched word.
///
/// Every field is a fixed bit-slice; the 16-bit immediate is additionally
/// sign-extended into `imm32`.
pub fn decode(inst: Word) -> InstructionFields {
    let imm16 = (inst & IMM16_MASK) as u16;
    InstructionFields {
        opcode: (inst >> OPCODE_SHIFT) & OPCODE_MASK,
        rs: ((inst >> RS_SHIFT) & REG_MASK) as usize,
        rt: ((inst >> RT_SHIFT) & REG_MASK) as usize,
        rd: ((inst >> RD_SHIFT) & REG_MASK) as usize,
        shamt: (inst >> SHAMT_SHIFT) & REG_MASK,
        funct: inst & FUNCT_MASK,
        imm16,
        imm32: sign_extend_16(imm16),
        target: inst & TARGET_MASK,
    }
}
