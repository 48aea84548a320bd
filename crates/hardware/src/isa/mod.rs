//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, field extraction, and
//! disassembly for the reduced MIPS-I subset this simulator executes.
//!
//! # Recognised instructions
//!
//! * R-type (opcode 0): `sll`, `add`, `addu`, `sub`, `subu`, `and`, `or`,
//!   `xor`, `slt`, dispatched by function code.
//! * I-type: `addi`, `addiu`, `slti`, `andi`, `lw`, `sw`, `beq`, `bne`.
//! * J-type: `j`.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Instruction field extraction.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Function code constants for R-type dispatch.
pub mod funct;

/// Decoded instruction field structure.
pub mod instruction;

/// Primary opcode constants.
pub mod opcodes;
