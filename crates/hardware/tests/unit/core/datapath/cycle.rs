//! Full single-cycle integration tests.
//!
//! Each test drives a complete cycle (fetch through writeback) through the
//! simulator and checks the architectural effects: register commits, memory
//! traffic, and the next PC.

use pretty_assertions::assert_eq;

use mipsim_core::common::error::Trap;

use crate::common::TestContext;
use crate::common::builder;

#[test]
fn add_commits_sum_to_rd_and_advances_pc() {
    let mut ctx = TestContext::new().load_program(&[builder::add(8, 9, 10)]);
    ctx.set_reg(9, 5);
    ctx.set_reg(10, 7);

    ctx.run(1);

    assert_eq!(ctx.get_reg(8), 12);
    assert_eq!(ctx.sim.pc, 4);
}

#[test]
fn sub_commits_difference() {
    let mut ctx = TestContext::new().load_program(&[builder::sub(8, 9, 10)]);
    ctx.set_reg(9, 5);
    ctx.set_reg(10, 7);

    ctx.run(1);

    assert_eq!(ctx.get_reg(8), (-2i32) as u32);
}

#[test]
fn sll_shifts_rt_by_shamt() {
    let mut ctx = TestContext::new().load_program(&[builder::sll(8, 9, 3)]);
    ctx.set_reg(9, 0b101);

    ctx.run(1);

    assert_eq!(ctx.get_reg(8), 0b101_000);
}

#[test]
fn beq_equal_takes_branch() {
    let mut ctx = TestContext::new().load_program(&[builder::beq(1, 2, 3)]);
    ctx.set_reg(1, 99);
    ctx.set_reg(2, 99);

    ctx.run(1);

    assert_eq!(ctx.sim.pc, 16); // 0 + 4 + (3 << 2)
}

#[test]
fn beq_unequal_falls_through() {
    let mut ctx = TestContext::new().load_program(&[builder::beq(1, 2, 3)]);
    ctx.set_reg(1, 99);
    ctx.set_reg(2, 98);

    ctx.run(1);

    assert_eq!(ctx.sim.pc, 4);
}

#[test]
fn bne_unequal_takes_branch() {
    let mut ctx = TestContext::new().load_program(&[builder::bne(1, 2, 3)]);
    ctx.set_reg(1, 1);
    ctx.set_reg(2, 2);

    ctx.run(1);

    assert_eq!(ctx.sim.pc, 16); // 0 + 4 + (3 << 2)
}

#[test]
fn bne_equal_falls_through() {
    let mut ctx = TestContext::new().load_program(&[builder::bne(1, 2, 3)]);
    ctx.set_reg(1, 1);
    ctx.set_reg(2, 1);

    ctx.run(1);

    assert_eq!(ctx.sim.pc, 4);
}

/// The jump target is independent of register contents.
#[test]
fn jump_sets_pc_from_target_field() {
    let mut ctx = TestContext::new().load_program(&[builder::j(0x20)]);
    ctx.set_reg(1, 0xDEAD_BEEF);
    ctx.set_reg(31, 0xDEAD_BEEF);

    ctx.run(1);

    assert_eq!(ctx.sim.pc, 0x20 << 2);
}

#[test]
fn lw_reads_at_base_plus_offset_into_rt() {
    let mut ctx = TestContext::new().load_program(&[builder::lw(7, 8, 2)]);
    ctx.set_reg(2, 32);
    ctx.set_mem(40, 0xCAFE_F00D);

    ctx.run(1);

    assert_eq!(ctx.get_reg(7), 0xCAFE_F00D);
    assert_eq!(ctx.sim.pc, 4);
}

/// A negative offset subtracts from the base register.
#[test]
fn lw_negative_offset() {
    let mut ctx = TestContext::new().load_program(&[builder::lw(7, -4, 2)]);
    ctx.set_reg(2, 32);
    ctx.set_mem(28, 0x0BAD_CAFE);

    ctx.run(1);

    assert_eq!(ctx.get_reg(7), 0x0BAD_CAFE);
}

#[test]
fn sw_writes_rt_at_base_plus_offset() {
    let mut ctx = TestContext::new().load_program(&[builder::sw(7, 8, 2)]);
    ctx.set_reg(2, 32);
    ctx.set_reg(7, 0x1357_9BDF);

    ctx.run(1);

    assert_eq!(ctx.get_mem(40), 0x1357_9BDF);
    // No register write for stores.
    assert_eq!(ctx.get_reg(7), 0x1357_9BDF);
    assert_eq!(ctx.get_reg(2), 32);
}

/// andi masks against the zero-extended immediate; addi with the same bit
/// pattern sign-extends and lands on a different result.
#[test]
fn andi_and_addi_disagree_on_extension() {
    let neg = (-16i32) as u32;

    let mut ctx = TestContext::new().load_program(&[builder::andi(8, 9, 0xFFFF)]);
    ctx.set_reg(9, neg);
    ctx.run(1);
    assert_eq!(ctx.get_reg(8), neg & 0x0000_FFFF);

    let mut ctx = TestContext::new().load_program(&[builder::addi(8, 9, -1)]);
    ctx.set_reg(9, neg);
    ctx.run(1);
    assert_eq!(ctx.get_reg(8), neg.wrapping_sub(1));
}

#[test]
fn slti_commits_signed_comparison() {
    let mut ctx = TestContext::new().load_program(&[builder::slti(8, 9, 5)]);
    ctx.set_reg(9, (-3i32) as u32);
    ctx.run(1);
    assert_eq!(ctx.get_reg(8), 1);
}

/// An illegal instruction traps and leaves all architectural state as it
/// was: no register write, no memory write, no PC advance.
#[test]
fn illegal_instruction_has_no_architectural_effect() {
    // Opcode 1 is unmapped.
    let mut ctx = TestContext::new().load_program(&[builder::i_type(1, 9, 8, 0x123)]);
    ctx.set_reg(9, 77);
    ctx.set_mem(0, 0x5555_5555);

    let result = ctx.step();

    assert_eq!(
        result,
        Err(Trap::IllegalInstruction { opcode: 1, funct: 0x23 })
    );
    assert_eq!(ctx.sim.pc, 0);
    assert_eq!(ctx.get_reg(8), 0);
    assert_eq!(ctx.get_reg(9), 77);
    assert_eq!(ctx.get_mem(0), 0x5555_5555);
    assert_eq!(ctx.sim.stats.cycles, 0);
}

/// A small loop: sum 1..=3 with bne driving the backedge.
#[test]
fn loop_program_runs_to_completion() {
    // $t0 counter = 3, $t1 accumulator = 0
    // loop: add $t1, $t1, $t0
    //       addi $t0, $t0, -1
    //       bne $t0, $zero, loop
    let program = [
        builder::add(9, 9, 8),
        builder::addi(8, 8, -1),
        builder::bne(8, 0, -3),
    ];
    let mut ctx = TestContext::new().load_program(&program);
    ctx.set_reg(8, 3);

    let reason = ctx.run_to_end(100);

    assert_eq!(reason, mipsim_core::sim::StopReason::ProgramEnd);
    assert_eq!(ctx.get_reg(9), 6);
    assert_eq!(ctx.get_reg(8), 0);
    assert_eq!(ctx.sim.stats.cycles, 9);
    assert_eq!(ctx.sim.stats.branches_taken, 2);
}
