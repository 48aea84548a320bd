//! Program counter update.
//!
//! Computes the next program counter from the branch/jump control signals
//! and the ALU zero flag. All address arithmetic starts from the *old* PC:
//! the branch formula bakes in the fixed +4, and the jump splices the
//! shifted target into the old PC's 256 MiB region.

use crate::common::constants::{PC_REGION_MASK, WORD_BYTES};
use crate::common::word::Word;
use crate::core::signals::ControlSignals;
use crate::isa::instruction::InstructionFields;
use crate::isa::opcodes;

/// Computes the program counter for the next cycle.
///
/// A branch is taken when `beq` sees the zero flag set or `bne` sees it
/// clear; the target is `old_pc + 4 + (sign-extended immediate << 2)`.
/// A jump produces `(old_pc & 0xF000_0000) | (target << 2)`. Everything
/// else falls through to `old_pc + 4`.
pub fn next_pc(
    fields: &InstructionFields,
    ctrl: &ControlSignals,
    alu_zero: bool,
    old_pc: Word,
) -> Word {
    let taken = ctrl.branch
        && ((fields.opcode == opcodes::OP_BEQ && alu_zero)
            || (fields.opcode == opcodes::OP_BNE && !alu_zero));

    if taken {
        return old_pc
            .wrapping_add(WORD_BYTES)
            .wrapping_add(fields.imm32 << 2);
    }
    if ctrl.jump {
        return (old_pc & PC_REGION_MASK) | (fields.target << 2);
    }
    old_pc.wrapping_add(WORD_BYTES)
}
