//! Register File.
//!
//! This module provides the `RegisterFile` struct holding the 32
//! general-purpose registers. It provides:
//! 1. **Storage:** 32 word-sized slots, persistent across cycles.
//! 2. **Zero Register:** Register `$zero` is hard-wired; writes to index 0
//!    are ignored here, at the register-file boundary, so the writeback
//!    unit itself never needs to special-case it.
//! 3. **Observability:** A dump utility for driver-level state reporting.

use crate::common::constants::NUM_REGISTERS;
use crate::common::word::Word;
use crate::isa::abi;

/// The 32-entry general-purpose register file.
///
/// The writeback unit is the only datapath writer, and writes at most one
/// register per cycle. The outer driver owns initialization.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    regs: [Word; NUM_REGISTERS],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
        }
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Field widths guarantee the range.
    #[inline]
    pub fn read(&self, idx: usize) -> Word {
        self.regs[idx]
    }

    /// Writes a register value.
    ///
    /// Writes to `$zero` (index 0) are ignored.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The word to write.
    #[inline]
    pub fn write(&mut self, idx: usize, val: Word) {
        if idx != abi::REG_ZERO {
            self.regs[idx] = val;
        }
    }

    /// Formats the contents of all registers, four per line, with ABI names.
    ///
    /// Useful for final-state reporting and test diagnostics.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for (idx, val) in self.regs.iter().enumerate() {
            let sep = if idx % 4 == 3 { '\n' } else { ' ' };
            out.push_str(&format!("{:>5}={:#010x}{}", abi::name(idx), val, sep));
        }
        out
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
