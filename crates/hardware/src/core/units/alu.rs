//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU at the centre of the datapath.
//! It handles addition/subtraction, the bitwise operations, the logical
//! left shift, and the signed set-less-than comparison.
//!
//! The operation is selected by the control vector: the AND code serves
//! three instructions (plain `and`, the jump-address mask path, and — with
//! the shift flag — `sll`), and the add path subtracts when the negate
//! flag is set.

use crate::common::word::Word;
use crate::core::signals::{AluOp, ControlSignals};

/// Output of one ALU evaluation.
///
/// Valid only after the ALU runs with the operands chosen by operand
/// selection for the same cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AluResult {
    /// The computed value.
    pub value: Word,
    /// Set when the comparison or result indicates zero; consumed by the
    /// PC unit to resolve `beq`/`bne`.
    pub zero: bool,
    /// Auxiliary output lane; always zero for the implemented operation set.
    pub extra: Word,
}

/// Arithmetic Logic Unit for the single-cycle datapath.
///
/// Stateless; every evaluation is a pure function of the control vector
/// and the two operands.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Evaluates the ALU for one cycle.
    ///
    /// For set-less-than the zero flag is the inverted comparison outcome
    /// and the generic result-is-zero test is skipped entirely. Every
    /// other operation derives the zero flag from the computed value.
    ///
    /// # Arguments
    ///
    /// * `ctrl`   - Control vector selecting the operation.
    /// * `input1` - First operand.
    /// * `input2` - Second operand (shift amount when the shift flag is set).
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::signals::{AluOp, ControlSignals};
    /// use mipsim_core::core::units::alu::Alu;
    ///
    /// let add = ControlSignals { alu_op: AluOp::Add, ..Default::default() };
    /// assert_eq!(Alu::execute(&add, 5, 7).value, 12);
    ///
    /// let sub = ControlSignals { b_negate: true, ..add };
    /// let r = Alu::execute(&sub, 9, 9);
    /// assert_eq!(r.value, 0);
    /// assert!(r.zero);
    /// ```
    pub fn execute(ctrl: &ControlSignals, input1: Word, input2: Word) -> AluResult {
        let value = match ctrl.alu_op {
            AluOp::And => {
                if ctrl.shift {
                    // sll rides the AND operation code; input2 is the
                    // 5-bit shamt field, so the mod-32 shift is exact.
                    input1.wrapping_shl(input2)
                } else {
                    input1 & input2
                }
            }
            AluOp::Or => input1 | input2,
            AluOp::Xor => input1 ^ input2,
            AluOp::Add => {
                if ctrl.b_negate {
                    input1.wrapping_sub(input2)
                } else {
                    input1.wrapping_add(input2)
                }
            }
            AluOp::Slt => {
                // Signed comparison via the subtractor's sign bit. The
                // zero flag reports the comparison outcome directly and
                // does not fall through to the result-is-zero test.
                let negative = (input1.wrapping_sub(input2) as i32) < 0;
                return AluResult {
                    value: Word::from(negative),
                    zero: !negative,
                    extra: 0,
                };
            }
        };

        AluResult {
            value,
            zero: value == 0,
            extra: 0,
        }
    }
}
