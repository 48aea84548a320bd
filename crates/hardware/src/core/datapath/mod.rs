//! Single-cycle datapath.
//!
//! This module contains the stage implementations for one clock cycle and
//! the orchestrator that composes them. It includes:
//! 1. **Fetch:** Resolves the PC against instruction memory.
//! 2. **Operand Selection:** Chooses the two ALU inputs.
//! 3. **Memory:** Performs the conditional load or store.
//! 4. **PC Update:** Computes the next program counter.
//! 5. **Writeback:** Commits at most one register update.
//!
//! One cycle is one complete pass with no suspension points: the next
//! cycle's fetch must not begin until the current cycle's PC, register, and
//! memory updates are committed. A trap aborts the cycle before any state
//! is mutated.

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// ALU operand selection implementation.
pub mod operands;

/// Program counter update implementation.
pub mod pc;

/// Writeback stage implementation.
pub mod writeback;

use crate::common::error::Trap;
use crate::common::mem::WordMemory;
use crate::common::reg::RegisterFile;
use crate::common::word::Word;
use crate::core::control;
use crate::core::signals::ControlSignals;
use crate::core::units::alu::{Alu, AluResult};
use crate::isa::decode::decode;
use crate::isa::instruction::InstructionFields;

use self::memory::MemResult;

/// Everything one committed cycle produced.
///
/// All per-cycle values are created fresh inside [`step`] and handed back
/// for the driver's tracing and statistics; only the register file, data
/// memory, and (via `next_pc`) the program counter persist across cycles.
#[derive(Clone, Copy, Debug)]
pub struct Retired {
    /// The raw instruction word that was executed.
    pub inst: Word,
    /// The decoded instruction fields.
    pub fields: InstructionFields,
    /// The control vector the cycle ran under.
    pub ctrl: ControlSignals,
    /// The ALU output.
    pub alu: AluResult,
    /// The memory unit output.
    pub mem: MemResult,
    /// The program counter for the next cycle.
    pub next_pc: Word,
}

/// Executes one full datapath cycle.
///
/// Runs fetch, decode, control derivation, operand selection, the ALU, the
/// memory unit, the PC unit, and writeback in order, mutating `dmem` and
/// `regs` in place. On any trap the cycle has no architectural effect.
///
/// # Arguments
///
/// * `cur_pc` - Current program counter (byte address, multiple of 4).
/// * `imem`   - Instruction memory image.
/// * `dmem`   - Data memory, mutated by `sw`.
/// * `regs`   - Register file, mutated by writeback.
///
/// # Errors
///
/// Propagates [`Trap::IllegalInstruction`] from control derivation and the
/// fetch/load/store access faults.
pub fn step(
    cur_pc: Word,
    imem: &WordMemory,
    dmem: &mut WordMemory,
    regs: &mut RegisterFile,
) -> Result<Retired, Trap> {
    let inst = fetch::fetch(cur_pc, imem)?;
    let fields = decode(inst);
    let ctrl = control::derive(&fields)?;

    let rs_val = regs.read(fields.rs);
    let rt_val = regs.read(fields.rt);

    let input1 = operands::alu_input_1(&ctrl, rs_val, rt_val);
    let input2 = operands::alu_input_2(&ctrl, &fields, rt_val);
    let alu = Alu::execute(&ctrl, input1, input2);

    let mem = memory::access(&ctrl, &alu, rt_val, dmem)?;
    let next_pc = pc::next_pc(&fields, &ctrl, alu.zero, cur_pc);
    writeback::commit(&fields, &ctrl, &alu, &mem, regs);

    Ok(Retired {
        inst,
        fields,
        ctrl,
        alu,
        mem,
        next_pc,
    })
}
