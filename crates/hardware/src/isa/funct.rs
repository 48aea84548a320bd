//! MIPS R-Type Function Codes.
//!
//! Defines the function codes (bits 5-0) that select the operation when the
//! primary opcode is zero.

use crate::common::word::Word;

/// Shift left logical (SLL).
pub const SLL: Word = 0;

/// Add, trapping variant in full MIPS (ADD).
pub const ADD: Word = 32;

/// Add unsigned (ADDU).
pub const ADDU: Word = 33;

/// Subtract (SUB).
pub const SUB: Word = 34;

/// Subtract unsigned (SUBU).
pub const SUBU: Word = 35;

/// Bitwise AND (AND).
pub const AND: Word = 36;

/// Bitwise OR (OR).
pub const OR: Word = 37;

/// Bitwise XOR (XOR).
pub const XOR: Word = 38;

/// Set on less than, signed (SLT).
pub const SLT: Word = 42;
