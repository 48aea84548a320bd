//! Memory Access.
//!
//! Performs the conditional load or store against data memory, using the
//! ALU result as the byte address. The control unit guarantees that at
//! most one of read/write is set in any cycle.

use crate::common::data::AccessType;
use crate::common::error::Trap;
use crate::common::mem::WordMemory;
use crate::common::word::Word;
use crate::core::signals::ControlSignals;
use crate::core::units::alu::AluResult;

/// Output of the memory unit for one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemResult {
    /// The word read from data memory, or zero when no read occurred.
    pub read_val: Word,
}

/// Performs the cycle's memory access, if any.
///
/// A load reads the slot at `alu.value / 4`; a store writes the `rt` value
/// there and reports a read value of zero; otherwise memory is untouched.
///
/// # Errors
///
/// Returns [`Trap::LoadAccessFault`] or [`Trap::StoreAccessFault`] when the
/// computed address resolves outside the data image.
pub fn access(
    ctrl: &ControlSignals,
    alu: &AluResult,
    rt_val: Word,
    dmem: &mut WordMemory,
) -> Result<MemResult, Trap> {
    if ctrl.mem_read {
        let read_val = dmem.read(alu.value, AccessType::Read)?;
        Ok(MemResult { read_val })
    } else if ctrl.mem_write {
        dmem.write(alu.value, rt_val)?;
        Ok(MemResult { read_val: 0 })
    } else {
        Ok(MemResult { read_val: 0 })
    }
}
