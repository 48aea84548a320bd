//! ALU operand selection.
//!
//! Chooses the two ALU input values from the control vector, the decoded
//! fields, and the two source register values. The second input follows a
//! strict priority chain; in particular `andi` takes the zero-extended
//! immediate where every other immediate instruction takes the
//! sign-extended form.

use crate::common::word::{Word, zero_extend_16};
use crate::core::signals::ControlSignals;
use crate::isa::instruction::InstructionFields;
use crate::isa::opcodes;

/// Selects the first ALU input.
///
/// Shift instructions operate on `rt`; everything else on `rs`.
pub fn alu_input_1(ctrl: &ControlSignals, rs_val: Word, rt_val: Word) -> Word {
    if ctrl.shift { rt_val } else { rs_val }
}

/// Selects the second ALU input.
///
/// Priority order: the shift amount for shifts; the `rt` value for R-type,
/// branch, and jump instructions; the literal zero for the remaining
/// no-write instructions other than `sw` (a don't-care side path); the
/// zero-extended immediate for `andi`; the sign-extended immediate for
/// every other immediate-using instruction.
pub fn alu_input_2(ctrl: &ControlSignals, fields: &InstructionFields, rt_val: Word) -> Word {
    if ctrl.shift {
        fields.shamt
    } else if ctrl.reg_dst || ctrl.branch || ctrl.jump {
        rt_val
    } else if !ctrl.reg_write && fields.opcode != opcodes::OP_SW {
        0
    } else if fields.opcode == opcodes::OP_ANDI {
        zero_extend_16(fields.imm16)
    } else {
        fields.imm32
    }
}
