//! Datapath control signals and operation types.
//!
//! This module defines the signals that steer instruction execution. It performs:
//! 1. **Operation Classification:** Categorizes the ALU operations.
//! 2. **Operand Selection:** Flags the sources for the two ALU inputs.
//! 3. **Memory Control:** Enables the conditional load or store.
//! 4. **Writeback Control:** Selects the destination register and write enable.
//!
//! Exactly one signal vector is valid per instruction. The control unit
//! produces it once per cycle from (opcode, function code) alone, and every
//! downstream component consumes it without re-deriving instruction
//! semantics.

/// ALU operation selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Bitwise AND; doubles as the jump-address mask path and, when the
    /// shift flag is set, a logical left shift.
    And,

    /// Bitwise OR.
    Or,

    /// Addition, or subtraction when the negate flag is set.
    #[default]
    Add,

    /// Set less than (signed).
    Slt,

    /// Bitwise XOR.
    Xor,
}

/// Control signals for one datapath cycle.
///
/// Produced by the control unit from (opcode, function code) and fanned out
/// to operand selection, the ALU, the memory unit, the PC unit, and
/// writeback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// ALU operand 2 comes from the immediate field rather than `rt`.
    pub alu_src: bool,
    /// ALU operation to perform.
    pub alu_op: AluOp,
    /// ALU computes `a - b` instead of `a + b` on the add path.
    pub b_negate: bool,
    /// Instruction is a conditional branch (`beq`/`bne`).
    pub branch: bool,
    /// Instruction is an unconditional jump (`j`).
    pub jump: bool,
    /// Enable memory read operation (load).
    pub mem_read: bool,
    /// Enable memory write operation (store).
    pub mem_write: bool,
    /// Writeback commits the memory read value instead of the ALU result.
    pub mem_to_reg: bool,
    /// Destination register is `rd` (R-type) rather than `rt`.
    pub reg_dst: bool,
    /// Enable write to the destination register.
    pub reg_write: bool,
    /// Instruction is a shift; operand 1 is `rt` and operand 2 the shift amount.
    pub shift: bool,
}
