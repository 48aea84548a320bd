//! Instruction Disassembler.
//!
//! Converts decoded instruction fields into a human-readable mnemonic
//! string for debug tracing and test diagnostics. Covers exactly the
//! recognised instruction subset; anything else renders as `"unknown"`.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::decode::decode;
//! use mipsim_core::isa::disasm::disassemble;
//!
//! // add $t0, $t1, $t2
//! let fields = decode(0x012A_4020);
//! assert_eq!(disassemble(&fields), "add t0, t1, t2");
//! ```

use crate::isa::abi::name as reg;
use crate::isa::instruction::InstructionFields;
use crate::isa::{funct, opcodes};

/// Disassembles decoded instruction fields into a mnemonic string.
///
/// Immediates are rendered signed, matching assembler conventions; the
/// jump target is rendered as the already-shifted byte offset.
pub fn disassemble(f: &InstructionFields) -> String {
    match f.opcode {
        opcodes::OP_RTYPE => disassemble_rtype(f),
        opcodes::OP_J => format!("j {:#x}", f.target << 2),
        opcodes::OP_BEQ => format!("beq {}, {}, {}", reg(f.rs), reg(f.rt), f.imm16 as i16),
        opcodes::OP_BNE => format!("bne {}, {}, {}", reg(f.rs), reg(f.rt), f.imm16 as i16),
        opcodes::OP_ADDI => format!("addi {}, {}, {}", reg(f.rt), reg(f.rs), f.imm16 as i16),
        opcodes::OP_ADDIU => format!("addiu {}, {}, {}", reg(f.rt), reg(f.rs), f.imm16 as i16),
        opcodes::OP_SLTI => format!("slti {}, {}, {}", reg(f.rt), reg(f.rs), f.imm16 as i16),
        opcodes::OP_ANDI => format!("andi {}, {}, {:#x}", reg(f.rt), reg(f.rs), f.imm16),
        opcodes::OP_LW => format!("lw {}, {}({})", reg(f.rt), f.imm16 as i16, reg(f.rs)),
        opcodes::OP_SW => format!("sw {}, {}({})", reg(f.rt), f.imm16 as i16, reg(f.rs)),
        _ => "unknown".to_string(),
    }
}

/// Disassembles an R-type instruction by function code.
fn disassemble_rtype(f: &InstructionFields) -> String {
    let mnemonic = match f.funct {
        funct::SLL => return format!("sll {}, {}, {}", reg(f.rd), reg(f.rt), f.shamt),
        funct::ADD => "add",
        funct::ADDU => "addu",
        funct::SUB => "sub",
        funct::SUBU => "subu",
        funct::AND => "and",
        funct::OR => "or",
        funct::XOR => "xor",
        funct::SLT => "slt",
        _ => return "unknown".to_string(),
    };
    format!("{} {}, {}, {}", mnemonic, reg(f.rd), reg(f.rs), reg(f.rt))
}
