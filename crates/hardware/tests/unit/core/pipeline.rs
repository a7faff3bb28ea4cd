//! # Pipelined Execution Tests
//!
//! Verifies stage overlap and latch flow through the five-stage pipeline:
//! fill latency, per-stage latch contents, memory access in MEM, and the
//! modeled machine's lack of forwarding and branch resolution.

use crate::common::builder::instruction::InstructionBuilder as B;
use crate::common::harness::{DATA_BASE, TEXT_BASE, TestContext};
use mips_core::common::constants::PIPELINE_DEPTH;
use mips_core::core::pipeline::signals::{AluOp, MemWidth};
use mips_core::isa::Mnemonic;
use pretty_assertions::assert_eq;

const NOP: u32 = 0;

#[test]
fn first_retirement_after_pipeline_depth_cycles() {
    let lui = B::new().lui(8, 0x1234).build();
    assert_eq!(lui, 0x3c08_1234);
    let mut ctx = TestContext::pipelined().load_program(&[lui]);

    let _ = ctx.run(PIPELINE_DEPTH - 1);
    assert_eq!(ctx.sim.snapshot().instruction_count, 0);
    assert_eq!(ctx.get_reg(8), 0);

    let _ = ctx.run(1);
    let snap = ctx.sim.snapshot();
    assert_eq!(snap.instruction_count, 1);
    assert_eq!(snap.cycle_count, PIPELINE_DEPTH);
    assert_eq!(snap.state.pc, TEXT_BASE + 20);
    assert_eq!(ctx.get_reg(8), 0x1234_0000);
}

#[test]
fn fetch_fills_if_id_and_advances_pc() {
    let word = B::new().addiu(4, 0, 5).build();
    let mut ctx = TestContext::pipelined().load_program(&[word]);
    let _ = ctx.run(1);

    let l = ctx.sim.latches();
    assert!(l.if_id.valid);
    assert_eq!(l.if_id.inst, word);
    assert_eq!(l.if_id.fetch_pc, TEXT_BASE);
    assert!(!l.id_ex.valid);
    assert_eq!(l.occupancy(), 1);
    assert_eq!(ctx.pc(), TEXT_BASE + 4);
}

#[test]
fn latches_carry_operands_and_results() {
    let word = B::new().add(10, 8, 9).build();
    let mut ctx = TestContext::pipelined().load_program(&[word]);
    ctx.set_reg(8, 30);
    ctx.set_reg(9, 12);

    let _ = ctx.run(2);
    let id_ex = ctx.sim.latches().id_ex;
    assert!(id_ex.valid);
    assert_eq!(id_ex.decoded.mnemonic, Mnemonic::Add);
    assert_eq!(id_ex.ctrl.alu, AluOp::Add);
    assert_eq!((id_ex.operand_a, id_ex.operand_b), (30, 12));

    let _ = ctx.run(1);
    let ex_mem = ctx.sim.latches().ex_mem;
    assert_eq!(ex_mem.alu_output, 42);
    assert_eq!(ex_mem.fetch_pc, TEXT_BASE);

    let _ = ctx.run(1);
    assert_eq!(ctx.sim.latches().mem_wb.alu_output, 42);
    assert_eq!(ctx.get_reg(10), 0);

    let _ = ctx.run(1);
    assert_eq!(ctx.get_reg(10), 42);
    assert_eq!(ctx.sim.latches().occupancy(), 4);
}

#[test]
fn steady_state_retires_one_per_cycle() {
    let prog: Vec<u32> = (1..=6).map(|i| B::new().addiu(i, 0, i as i32).build()).collect();
    let mut ctx = TestContext::pipelined().load_program(&prog);
    let _ = ctx.run(PIPELINE_DEPTH + 5);

    assert_eq!(ctx.sim.snapshot().instruction_count, 6);
    for i in 1..=6 {
        assert_eq!(ctx.get_reg(i), i as u32);
    }
}

#[test]
fn store_then_load_through_mem_stage() {
    let prog = [
        B::new().sw(9, 8, 4).build(),
        B::new().lw(10, 8, 4).build(),
    ];
    let mut ctx = TestContext::pipelined().load_program(&prog);
    ctx.set_reg(8, DATA_BASE);
    ctx.set_reg(9, 0xCAFE_BABE);

    let _ = ctx.run(4);
    assert_eq!(ctx.sim.read_word(DATA_BASE + 4), 0xCAFE_BABE);

    let _ = ctx.run(1);
    assert_eq!(ctx.sim.latches().mem_wb.loaded_word, 0xCAFE_BABE);
    assert_eq!(ctx.get_reg(10), 0);

    let _ = ctx.run(1);
    assert_eq!(ctx.get_reg(10), 0xCAFE_BABE);
}

#[test]
fn byte_store_and_load_move_a_full_word() {
    // Known deviation: sb/lb carry a width but access the whole word.
    let prog = [
        B::new().sb(9, 8, 0).build(),
        B::new().lb(10, 8, 0).build(),
    ];
    let mut ctx = TestContext::pipelined().load_program(&prog);
    ctx.set_reg(8, DATA_BASE);
    ctx.set_reg(9, 0xCAFE_BABE);

    let _ = ctx.run(3);
    let l = ctx.sim.latches();
    assert_eq!(l.ex_mem.decoded.mnemonic, Mnemonic::Sb);
    assert_eq!(l.ex_mem.ctrl.width, MemWidth::Byte);
    assert_eq!(l.id_ex.decoded.mnemonic, Mnemonic::Lb);
    assert_eq!(l.id_ex.ctrl.width, MemWidth::Byte);

    let _ = ctx.run(3);
    assert_eq!(ctx.sim.read_word(DATA_BASE), 0xCAFE_BABE);
    assert_eq!(ctx.get_reg(10), 0xCAFE_BABE);
    assert_eq!(ctx.sim.stats().inst_load, 1);
    assert_eq!(ctx.sim.stats().inst_store, 1);
}

#[test]
fn dependent_instruction_reads_stale_register() {
    let prog = [
        B::new().addiu(8, 0, 5).build(),
        B::new().addu(9, 8, 8).build(),
    ];
    let mut ctx = TestContext::pipelined().load_program(&prog);
    let _ = ctx.run(6);

    assert_eq!(ctx.get_reg(8), 5);
    assert_eq!(ctx.get_reg(9), 0);
}

#[test]
fn dependent_instruction_after_three_nops_sees_result() {
    let prog = [
        B::new().addiu(8, 0, 5).build(),
        NOP,
        NOP,
        NOP,
        B::new().addu(9, 8, 8).build(),
    ];
    let mut ctx = TestContext::pipelined().load_program(&prog);
    let _ = ctx.run(9);

    assert_eq!(ctx.get_reg(9), 10);
}

#[test]
fn branches_and_jumps_do_not_redirect() {
    let prog = [
        B::new().beq(0, 0, 16).build(),
        B::new().j(0x0010_0040).build(),
        B::new().jal(0x0010_0040).build(),
        B::new().addiu(4, 0, 7).build(),
    ];
    let mut ctx = TestContext::pipelined().load_program(&prog);
    let _ = ctx.run(8);

    assert_eq!(ctx.pc(), TEXT_BASE + 32);
    assert_eq!(ctx.get_reg(4), 7);
    assert_eq!(ctx.get_reg(31), 0);
    assert_eq!(ctx.sim.stats().inst_control, 3);
}

#[test]
fn mult_then_mfhi_mflo() {
    let prog = [
        B::new().mult(8, 9).build(),
        NOP,
        NOP,
        NOP,
        NOP,
        B::new().mfhi(10).build(),
        B::new().mflo(11).build(),
    ];
    let mut ctx = TestContext::pipelined().load_program(&prog);
    ctx.set_reg(8, 0x1_0000);
    ctx.set_reg(9, 0x1_0003);

    let _ = ctx.run(11);
    let state = ctx.state();
    assert_eq!((state.hi, state.lo), (1, 0x3_0000));
    assert_eq!(ctx.get_reg(10), 1);
    assert_eq!(ctx.get_reg(11), 0x3_0000);
}

#[test]
fn mthi_mtlo_write_in_writeback() {
    let prog = [B::new().mthi(8).build(), B::new().mtlo(9).build()];
    let mut ctx = TestContext::pipelined().load_program(&prog);
    ctx.set_reg(8, 0x11);
    ctx.set_reg(9, 0x22);

    let _ = ctx.run(4);
    assert_eq!((ctx.state().hi, ctx.state().lo), (0, 0));

    let _ = ctx.run(1);
    assert_eq!((ctx.state().hi, ctx.state().lo), (0x11, 0));

    let _ = ctx.run(1);
    assert_eq!((ctx.state().hi, ctx.state().lo), (0x11, 0x22));
    assert_eq!(ctx.sim.snapshot().instruction_count, 2);
}

#[test]
fn divu_by_zero_keeps_hi_lo() {
    let prog = [B::new().divu(8, 0).build(), B::new().divu(8, 9).build()];
    let mut ctx = TestContext::pipelined().load_program(&prog);
    ctx.set_reg(8, 100);
    ctx.set_reg(9, 7);
    ctx.sim.set_hi(7);
    ctx.sim.set_lo(9);

    let _ = ctx.run(3);
    assert_eq!((ctx.state().hi, ctx.state().lo), (7, 9));

    let _ = ctx.run(3);
    assert_eq!((ctx.state().hi, ctx.state().lo), (2, 14));
    assert_eq!(ctx.sim.snapshot().instruction_count, 2);
}

#[test]
fn slti_compares_unsigned() {
    let prog = [
        B::new().slti(10, 8, 1).build(),
        B::new().slti(11, 9, -1).build(),
    ];
    let mut ctx = TestContext::pipelined().load_program(&prog);
    ctx.set_reg(8, 0xFFFF_FFFF);
    ctx.set_reg(9, 5);
    ctx.set_reg(10, 0x55);

    let _ = ctx.run(5);
    assert_eq!(ctx.get_reg(10), 0);

    let _ = ctx.run(1);
    assert_eq!(ctx.get_reg(11), 1);
}

#[test]
fn unsupported_word_retires_as_no_op() {
    let prog = [0xFC00_0000, B::new().addiu(4, 0, 1).build()];
    let mut ctx = TestContext::pipelined().load_program(&prog);
    let before = ctx.state();
    let _ = ctx.run(6);

    let stats = ctx.sim.stats();
    assert_eq!(stats.inst_unsupported, 1);
    assert_eq!(stats.instructions_retired, 2);
    assert_eq!(ctx.get_reg(4), 1);
    assert_eq!(ctx.state().hi, before.hi);
}
