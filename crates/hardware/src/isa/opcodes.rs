//! MIPS Primary Opcodes.
//!
//! Defines the major opcodes (bits 31-26) for the recognised subset.

use crate::common::word::Word;

/// R-type instructions, dispatched further by function code.
pub const OP_RTYPE: Word = 0;

/// Jump (J).
pub const OP_J: Word = 2;

/// Branch on equal (BEQ).
pub const OP_BEQ: Word = 4;

/// Branch on not equal (BNE).
pub const OP_BNE: Word = 5;

/// Add immediate (ADDI).
pub const OP_ADDI: Word = 8;

/// Add immediate unsigned (ADDIU).
pub const OP_ADDIU: Word = 9;

/// Set on less than immediate (SLTI).
pub const OP_SLTI: Word = 10;

/// AND immediate, zero-extended (ANDI).
pub const OP_ANDI: Word = 12;

/// Load word (LW).
pub const OP_LW: Word = 35;

/// Store word (SW).
pub const OP_SW: Word = 43;
