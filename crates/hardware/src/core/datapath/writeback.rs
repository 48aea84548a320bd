//! Writeback.
//!
//! Commits at most one register update per cycle. The destination and the
//! committed value follow a strict priority chain: loads write the memory
//! read value to `rt`; jumps and branches write nothing; immediate
//! instructions write the ALU result to `rt`; R-type instructions write it
//! to `rd`. Register 0 suppression lives in the register file itself, not
//! here.

use crate::common::reg::RegisterFile;
use crate::core::datapath::memory::MemResult;
use crate::core::signals::ControlSignals;
use crate::core::units::alu::AluResult;
use crate::isa::instruction::InstructionFields;
use crate::isa::opcodes;

/// Commits the cycle's register update, if any.
pub fn commit(
    fields: &InstructionFields,
    ctrl: &ControlSignals,
    alu: &AluResult,
    mem: &MemResult,
    regs: &mut RegisterFile,
) {
    if ctrl.mem_to_reg {
        regs.write(fields.rt, mem.read_val);
    } else if matches!(
        fields.opcode,
        opcodes::OP_J | opcodes::OP_BEQ | opcodes::OP_BNE
    ) {
        // Jumps and branches never touch the register file.
    } else if !ctrl.reg_dst && ctrl.reg_write {
        regs.write(fields.rt, alu.value);
    } else if ctrl.reg_write {
        regs.write(fields.rd, alu.value);
    }
}
