//! Control Unit.
//!
//! This module implements the combinational mapping from (opcode, function
//! code) to the full control signal vector. It performs:
//! 1. **Legality Checking:** Any pair outside the recognised set yields an
//!    illegal-instruction trap and the cycle must not proceed.
//! 2. **Signal Derivation:** One immutable signal record per recognised
//!    instruction; adding or removing an instruction is a table change, not
//!    a control-flow change.
//!
//! The mapping is state-machine free and consults nothing but the two code
//! fields — never register values.

use crate::common::error::Trap;
use crate::core::signals::{AluOp, ControlSignals};
use crate::isa::instruction::InstructionFields;
use crate::isa::{funct, opcodes};

/// Signal record shared by the arithmetic/logic R-type instructions.
///
/// The destination is `rd` and the register write is unconditional.
const fn r_type(alu_op: AluOp, b_negate: bool) -> ControlSignals {
    ControlSignals {
        alu_src: false,
        alu_op,
        b_negate,
        branch: false,
        jump: false,
        mem_read: false,
        mem_write: false,
        mem_to_reg: false,
        reg_dst: true,
        reg_write: true,
        shift: false,
    }
}

/// Signal record shared by the immediate arithmetic/logic instructions.
///
/// Operand 2 comes from the immediate and the destination stays `rt`.
const fn i_type(alu_op: AluOp, b_negate: bool) -> ControlSignals {
    ControlSignals {
        alu_src: true,
        alu_op,
        b_negate,
        branch: false,
        jump: false,
        mem_read: false,
        mem_write: false,
        mem_to_reg: false,
        reg_dst: false,
        reg_write: true,
        shift: false,
    }
}

/// Derives the control signal vector for one decoded instruction.
///
/// Returns the unique signal record for a recognised (opcode, function
/// code) pair. An opcode outside the recognised set, or an R-type function
/// code that is neither the shift code nor in the arithmetic/logic set,
/// raises [`Trap::IllegalInstruction`]; no downstream stage may run for
/// that cycle.
pub fn derive(fields: &InstructionFields) -> Result<ControlSignals, Trap> {
    match (fields.opcode, fields.funct) {
        // sll: operand 1 is rt, operand 2 the shamt field; routed through
        // the AND operation code with the shift flag set.
        (opcodes::OP_RTYPE, funct::SLL) => Ok(ControlSignals {
            shift: true,
            ..r_type(AluOp::And, false)
        }),
        (opcodes::OP_RTYPE, funct::ADD | funct::ADDU) => Ok(r_type(AluOp::Add, false)),
        (opcodes::OP_RTYPE, funct::SUB | funct::SUBU) => Ok(r_type(AluOp::Add, true)),
        (opcodes::OP_RTYPE, funct::AND) => Ok(r_type(AluOp::And, false)),
        (opcodes::OP_RTYPE, funct::OR) => Ok(r_type(AluOp::Or, false)),
        (opcodes::OP_RTYPE, funct::XOR) => Ok(r_type(AluOp::Xor, false)),
        (opcodes::OP_RTYPE, funct::SLT) => Ok(r_type(AluOp::Slt, true)),

        // j: the ALU sees the AND code but its output is unused; the PC
        // unit performs the region splice itself.
        (opcodes::OP_J, _) => Ok(ControlSignals {
            jump: true,
            alu_op: AluOp::And,
            ..ControlSignals::default()
        }),

        // beq/bne: the subtractor feeds the zero flag; no register write.
        (opcodes::OP_BEQ | opcodes::OP_BNE, _) => Ok(ControlSignals {
            alu_op: AluOp::Add,
            b_negate: true,
            branch: true,
            ..ControlSignals::default()
        }),

        (opcodes::OP_ADDI | opcodes::OP_ADDIU, _) => Ok(i_type(AluOp::Add, false)),
        (opcodes::OP_SLTI, _) => Ok(i_type(AluOp::Slt, true)),
        (opcodes::OP_ANDI, _) => Ok(i_type(AluOp::And, false)),

        (opcodes::OP_LW, _) => Ok(ControlSignals {
            mem_read: true,
            mem_to_reg: true,
            ..i_type(AluOp::Add, false)
        }),
        (opcodes::OP_SW, _) => Ok(ControlSignals {
            mem_write: true,
            reg_write: false,
            ..i_type(AluOp::Add, false)
        }),

        (opcode, funct) => Err(Trap::IllegalInstruction { opcode, funct }),
    }
}
