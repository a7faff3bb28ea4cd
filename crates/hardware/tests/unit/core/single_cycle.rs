//! # Single-Cycle Executor Tests
//!
//! One instruction completes per cycle. Covers ALU results, memory access,
//! HI/LO, branch and jump targets, links, and the syscall sentinel.

use crate::common::builder::instruction::InstructionBuilder as B;
use crate::common::harness::{DATA_BASE, TEXT_BASE, TestContext};
use mips_core::common::constants::SYSCALL_SENTINEL;
use mips_core::isa::abi::{REG_A0, REG_RA, REG_V0};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn step(prog: &[u32]) -> TestContext {
    let mut ctx = TestContext::single_cycle().load_program(prog);
    let _ = ctx.run(1);
    ctx
}

#[test]
fn addiu_writes_rt_and_advances_pc() {
    let ctx = step(&[0x2404_0005]);
    let snap = ctx.sim.snapshot();

    assert_eq!(ctx.get_reg(REG_A0), 5);
    assert_eq!(snap.state.pc, TEXT_BASE + 4);
    assert_eq!(snap.instruction_count, 1);
    assert_eq!(snap.cycle_count, 1);
}

#[test]
fn register_zero_can_be_written() {
    let ctx = step(&[B::new().addiu(0, 0, 9).build()]);
    assert_eq!(ctx.get_reg(0), 9);
}

#[test]
fn immediate_is_zero_extended() {
    let ctx = step(&[B::new().addiu(8, 0, -1).build()]);
    assert_eq!(ctx.get_reg(8), 0xFFFF);
}

#[test]
fn sequence_of_alu_ops() {
    let prog = [
        B::new().lui(8, 0x1234).build(),
        B::new().ori(9, 0, 0x0F).build(),
        B::new().sll(10, 9, 4).build(),
        B::new().sub(11, 10, 9).build(),
        B::new().slt(12, 9, 10).build(),
        B::new().sra(13, 8, 8).build(),
    ];
    let mut ctx = TestContext::single_cycle().load_program(&prog);
    let _ = ctx.run(prog.len() as u64);

    assert_eq!(ctx.get_reg(8), 0x1234_0000);
    assert_eq!(ctx.get_reg(9), 1);
    assert_eq!(ctx.get_reg(10), 0x10);
    assert_eq!(ctx.get_reg(11), 0xF);
    assert_eq!(ctx.get_reg(12), 1);
    assert_eq!(ctx.get_reg(13), 0x0012_3400);
    assert_eq!(ctx.pc(), TEXT_BASE + 24);
}

#[test]
fn slt_and_sra_treat_registers_as_unsigned() {
    let prog = [
        B::new().slt(10, 8, 9).build(),
        B::new().slt(11, 9, 8).build(),
        B::new().sra(12, 13, 4).build(),
    ];
    let mut ctx = TestContext::single_cycle().load_program(&prog);
    ctx.set_reg(8, 0xFFFF_FFFF);
    ctx.set_reg(9, 1);
    ctx.set_reg(13, 0x8000_0000);
    let _ = ctx.run(3);

    assert_eq!(ctx.get_reg(10), 0);
    assert_eq!(ctx.get_reg(11), 1);
    assert_eq!(ctx.get_reg(12), 0x0800_0000);
}

#[test]
fn and_or_are_logical() {
    let prog = [
        B::new().and(10, 8, 9).build(),
        B::new().or(11, 8, 0).build(),
    ];
    let mut ctx = TestContext::single_cycle().load_program(&prog);
    ctx.set_reg(8, 0b1010);
    ctx.set_reg(9, 0b0101);
    let _ = ctx.run(2);

    assert_eq!(ctx.get_reg(10), 1);
    assert_eq!(ctx.get_reg(11), 1);
}

#[test]
fn store_then_load_word() {
    let prog = [
        B::new().sw(9, 8, 8).build(),
        B::new().lw(10, 8, 8).build(),
    ];
    let mut ctx = TestContext::single_cycle().load_program(&prog);
    ctx.set_reg(8, DATA_BASE);
    ctx.set_reg(9, 0xDEAD_BEEF);
    let _ = ctx.run(2);

    assert_eq!(ctx.sim.read_word(DATA_BASE + 8), 0xDEAD_BEEF);
    assert_eq!(ctx.get_reg(10), 0xDEAD_BEEF);
}

#[test]
fn half_store_and_load_move_a_full_word() {
    // Known deviation: sh/lh neither truncate nor sign-extend.
    let prog = [
        B::new().sh(9, 8, 0).build(),
        B::new().lh(10, 8, 0).build(),
    ];
    let mut ctx = TestContext::single_cycle().load_program(&prog);
    ctx.set_reg(8, DATA_BASE);
    ctx.set_reg(9, 0x1234_8765);
    let _ = ctx.run(2);

    assert_eq!(ctx.sim.read_word(DATA_BASE), 0x1234_8765);
    assert_eq!(ctx.get_reg(10), 0x1234_8765);
}

#[test]
fn load_from_unmapped_reads_zero() {
    let mut ctx = TestContext::single_cycle().load_program(&[B::new().lw(10, 8, 0).build()]);
    ctx.set_reg(8, 0x2000_0000);
    ctx.set_reg(10, 55);
    let _ = ctx.run(1);
    assert_eq!(ctx.get_reg(10), 0);
}

#[test]
fn mult_and_moves_through_hi_lo() {
    let prog = [
        B::new().mult(8, 9).build(),
        B::new().mfhi(10).build(),
        B::new().mflo(11).build(),
        B::new().mthi(12).build(),
        B::new().mtlo(13).build(),
    ];
    let mut ctx = TestContext::single_cycle().load_program(&prog);
    ctx.set_reg(8, -3i32 as u32);
    ctx.set_reg(9, 4);
    ctx.set_reg(12, 0x77);
    ctx.set_reg(13, 0x88);
    let _ = ctx.run(4);

    assert_eq!(ctx.get_reg(10), 0xFFFF_FFFF);
    assert_eq!(ctx.get_reg(11), -12i32 as u32);
    assert_eq!(ctx.state().hi, 0x77);
    assert_eq!(ctx.state().lo, -12i32 as u32);

    let _ = ctx.run(1);
    assert_eq!(ctx.state().lo, 0x88);
}

#[test]
fn div_by_zero_leaves_hi_lo_unchanged() {
    let mut ctx = TestContext::single_cycle().load_program(&[B::new().div(8, 0).build()]);
    ctx.set_reg(8, 100);
    ctx.sim.set_hi(7);
    ctx.sim.set_lo(9);
    let _ = ctx.run(1);

    assert_eq!((ctx.state().hi, ctx.state().lo), (7, 9));
    assert_eq!(ctx.sim.snapshot().instruction_count, 1);
    assert_eq!(ctx.pc(), TEXT_BASE + 4);
}

#[test]
fn multu_and_divu_are_unsigned() {
    let prog = [B::new().multu(8, 9).build(), B::new().divu(8, 9).build()];
    let mut ctx = TestContext::single_cycle().load_program(&prog);
    ctx.set_reg(8, 0xFFFF_FFFF);
    ctx.set_reg(9, 2);

    let _ = ctx.run(1);
    assert_eq!((ctx.state().hi, ctx.state().lo), (1, 0xFFFF_FFFE));

    let _ = ctx.run(1);
    assert_eq!((ctx.state().hi, ctx.state().lo), (1, 0x7FFF_FFFF));
}

#[rstest]
#[case::beq_taken(B::new().beq(8, 9, 2).build(), 3, 3, TEXT_BASE + 12)]
#[case::beq_not_taken(B::new().beq(8, 9, 2).build(), 3, 4, TEXT_BASE + 4)]
#[case::bne_taken(B::new().bne(8, 9, 4).build(), 1, 2, TEXT_BASE + 20)]
#[case::bne_backward(B::new().bne(8, 9, -1).build(), 1, 2, TEXT_BASE)]
#[case::blez_zero(B::new().blez(8, 1).build(), 0, 0, TEXT_BASE + 8)]
#[case::blez_positive(B::new().blez(8, 1).build(), 5, 0, TEXT_BASE + 4)]
#[case::bgtz_positive(B::new().bgtz(8, 1).build(), 5, 0, TEXT_BASE + 8)]
#[case::bgtz_negative(B::new().bgtz(8, 1).build(), 0xFFFF_FFFF, 0, TEXT_BASE + 4)]
#[case::bltz_negative(B::new().bltz(8, 3).build(), 0x8000_0000, 0, TEXT_BASE + 16)]
#[case::bltz_zero(B::new().bltz(8, 3).build(), 0, 0, TEXT_BASE + 4)]
#[case::bgez_zero(B::new().bgez(8, 3).build(), 0, 0, TEXT_BASE + 16)]
fn branch_targets(
    #[case] word: u32,
    #[case] rs: u32,
    #[case] rt: u32,
    #[case] expected_pc: u32,
) {
    let mut ctx = TestContext::single_cycle().load_program(&[word]);
    ctx.set_reg(8, rs);
    ctx.set_reg(9, rt);
    let _ = ctx.run(1);

    assert_eq!(ctx.pc(), expected_pc);
    assert_eq!(ctx.sim.stats().inst_control, 1);
}

#[test]
fn j_splices_target_into_region() {
    let ctx = step(&[B::new().j(0x0010_0004).build()]);
    assert_eq!(ctx.pc(), 0x0040_0010);
}

#[test]
fn jal_links_next_instruction() {
    let ctx = step(&[B::new().jal(0x0010_0008).build()]);
    assert_eq!(ctx.pc(), 0x0040_0020);
    assert_eq!(ctx.get_reg(REG_RA), TEXT_BASE + 4);
}

#[test]
fn jr_jumps_to_register() {
    let mut ctx = TestContext::single_cycle().load_program(&[B::new().jr(8).build()]);
    ctx.set_reg(8, TEXT_BASE + 0x100);
    let _ = ctx.run(1);
    assert_eq!(ctx.pc(), TEXT_BASE + 0x100);
}

#[test]
fn jalr_links_into_rd() {
    let mut ctx = TestContext::single_cycle().load_program(&[B::new().jalr(9, 8).build()]);
    ctx.set_reg(8, TEXT_BASE + 0x40);
    let _ = ctx.run(1);
    assert_eq!(ctx.pc(), TEXT_BASE + 0x40);
    assert_eq!(ctx.get_reg(9), TEXT_BASE + 4);
}

#[test]
fn loop_with_backward_branch() {
    // t0 counts up to 3; bne loops back to the addiu.
    let prog = [
        B::new().addiu(8, 8, 1).build(),
        B::new().bne(8, 9, -2).build(),
        B::new().addiu(10, 0, 0x55).build(),
    ];
    let mut ctx = TestContext::single_cycle().load_program(&prog);
    ctx.set_reg(9, 3);
    let _ = ctx.run(7);

    assert_eq!(ctx.get_reg(8), 3);
    assert_eq!(ctx.get_reg(10), 0x55);
    assert_eq!(ctx.pc(), TEXT_BASE + 12);
}

#[test]
fn syscall_writes_sentinel_and_keeps_running() {
    let ctx = step(&[B::new().syscall().build()]);
    assert_eq!(ctx.get_reg(REG_V0), SYSCALL_SENTINEL);
    assert!(ctx.sim.is_running());
    assert_eq!(ctx.pc(), TEXT_BASE + 4);
}

#[test]
fn unsupported_word_is_skipped() {
    let ctx = step(&[0xFC00_0000]);
    let snap = ctx.sim.snapshot();
    assert_eq!(snap.state.pc, TEXT_BASE + 4);
    assert!(snap.state.regs.as_array().iter().all(|&r| r == 0));
    assert_eq!(ctx.sim.stats().inst_unsupported, 1);
}
