//! Control unit signal derivation tests.
//!
//! One case per recognised instruction checks the complete signal vector
//! against the expected record, and the illegal paths verify that
//! unrecognised (opcode, function code) pairs are rejected.

use pretty_assertions::assert_eq;
use rstest::rstest;

use mipsim_core::common::error::Trap;
use mipsim_core::core::control::derive;
use mipsim_core::core::signals::{AluOp, ControlSignals};
use mipsim_core::isa::decode::decode;
use mipsim_core::isa::funct;

use crate::common::builder;

/// Expected vector for the arithmetic/logic R-type instructions.
fn r_type(alu_op: AluOp, b_negate: bool) -> ControlSignals {
    ControlSignals {
        alu_op,
        b_negate,
        reg_dst: true,
        reg_write: true,
        ..Default::default()
    }
}

/// Expected vector for the immediate arithmetic/logic instructions.
fn i_type(alu_op: AluOp, b_negate: bool) -> ControlSignals {
    ControlSignals {
        alu_src: true,
        alu_op,
        b_negate,
        reg_write: true,
        ..Default::default()
    }
}

#[rstest]
#[case::add(builder::add(1, 2, 3), r_type(AluOp::Add, false))]
#[case::addu(builder::addu(1, 2, 3), r_type(AluOp::Add, false))]
#[case::sub(builder::sub(1, 2, 3), r_type(AluOp::Add, true))]
#[case::subu(builder::r_type(2, 3, 1, 0, funct::SUBU), r_type(AluOp::Add, true))]
#[case::and(builder::and(1, 2, 3), r_type(AluOp::And, false))]
#[case::or(builder::or(1, 2, 3), r_type(AluOp::Or, false))]
#[case::xor(builder::xor(1, 2, 3), r_type(AluOp::Xor, false))]
#[case::slt(builder::slt(1, 2, 3), r_type(AluOp::Slt, true))]
#[case::sll(builder::sll(1, 2, 4), ControlSignals { shift: true, ..r_type(AluOp::And, false) })]
#[case::addi(builder::addi(1, 2, 5), i_type(AluOp::Add, false))]
#[case::addiu(builder::addiu(1, 2, 5), i_type(AluOp::Add, false))]
#[case::slti(builder::slti(1, 2, 5), i_type(AluOp::Slt, true))]
#[case::andi(builder::andi(1, 2, 5), i_type(AluOp::And, false))]
#[case::lw(builder::lw(1, 0, 2), ControlSignals { mem_read: true, mem_to_reg: true, ..i_type(AluOp::Add, false) })]
#[case::sw(builder::sw(1, 0, 2), ControlSignals { mem_write: true, reg_write: false, ..i_type(AluOp::Add, false) })]
#[case::beq(builder::beq(1, 2, 5), ControlSignals { b_negate: true, branch: true, ..Default::default() })]
#[case::bne(builder::bne(1, 2, 5), ControlSignals { b_negate: true, branch: true, ..Default::default() })]
#[case::j(builder::j(0x100), ControlSignals { jump: true, alu_op: AluOp::And, ..Default::default() })]
fn recognised_instructions_derive_expected_vector(
    #[case] word: u32,
    #[case] expected: ControlSignals,
) {
    let fields = decode(word);
    assert_eq!(derive(&fields), Ok(expected));
}

#[rstest]
#[case::opcode_1(1)]
#[case::opcode_3(3)]
#[case::opcode_11(11)]
#[case::opcode_34(34)]
#[case::opcode_63(63)]
fn unrecognised_opcodes_are_illegal(#[case] opcode: u32) {
    let fields = decode(builder::i_type(opcode, 1, 2, 0));
    assert_eq!(
        derive(&fields),
        Err(Trap::IllegalInstruction {
            opcode,
            funct: fields.funct
        })
    );
}

#[rstest]
#[case::funct_1(1)]
#[case::funct_31(31)]
#[case::funct_39(39)]
#[case::funct_41(41)]
#[case::funct_43(43)]
#[case::funct_63(63)]
fn unrecognised_r_type_functions_are_illegal(#[case] fc: u32) {
    let fields = decode(builder::r_type(1, 2, 3, 0, fc));
    assert_eq!(
        derive(&fields),
        Err(Trap::IllegalInstruction {
            opcode: 0,
            funct: fc
        })
    );
}

/// The jump vector ignores the function-code bits of the target field.
#[test]
fn jump_target_bits_never_reject() {
    // Low 6 bits of the target alias the funct field; all values legal.
    for low_bits in [0u32, 1, 32, 42, 63] {
        let fields = decode(builder::j(low_bits));
        assert!(derive(&fields).is_ok(), "target low bits {low_bits}");
    }
}

/// The derivation never consults register values: two decodes of the same
/// word always derive the same vector.
#[test]
fn derivation_is_deterministic() {
    let fields = decode(builder::lw(7, 16, 3));
    assert_eq!(derive(&fields), derive(&fields));
}
