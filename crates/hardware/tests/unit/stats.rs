//! # Statistics Tests
//!
//! Counters advance with cycles and retirements, and the report lists the
//! instruction mix.

use crate::common::builder::instruction::InstructionBuilder as B;
use crate::common::harness::TestContext;
use mips_core::isa::InstClass;
use mips_core::stats::SimStats;

#[test]
fn retire_counts_by_class() {
    let mut stats = SimStats::default();
    stats.retire(InstClass::Alu);
    stats.retire(InstClass::Alu);
    stats.retire(InstClass::Load);
    stats.retire(InstClass::Unsupported);

    assert_eq!(stats.instructions_retired, 4);
    assert_eq!(stats.inst_alu, 2);
    assert_eq!(stats.inst_load, 1);
    assert_eq!(stats.inst_unsupported, 1);
    assert_eq!(stats.inst_store, 0);
}

#[test]
fn cpi_undefined_before_first_retirement() {
    let stats = SimStats::default();
    assert_eq!(stats.cpi(), None);
}

#[test]
fn pipelined_fill_cpi() {
    let prog = [B::new().addiu(4, 0, 1).build(); 4];
    let mut ctx = TestContext::pipelined().load_program(&prog);
    let _ = ctx.run(8);

    let stats = ctx.sim.stats();
    assert_eq!(stats.cycles, 8);
    assert_eq!(stats.instructions_retired, 4);
    assert_eq!(stats.cpi(), Some(2.0));
}

#[test]
fn single_cycle_counts_mix() {
    let prog = [
        B::new().addiu(8, 0, 4).build(),
        B::new().mult(8, 8).build(),
        B::new().sw(8, 8, 0).build(),
        B::new().beq(0, 0, 0).build(),
        B::new().syscall().build(),
    ];
    let mut ctx = TestContext::single_cycle().load_program(&prog);
    let _ = ctx.run(5);

    let stats = ctx.sim.stats();
    assert_eq!(stats.cpi(), Some(1.0));
    assert_eq!(
        (
            stats.inst_alu,
            stats.inst_muldiv,
            stats.inst_store,
            stats.inst_control,
            stats.inst_system
        ),
        (1, 1, 1, 1, 1)
    );
}

#[test]
fn report_lists_mix() {
    let mut stats = SimStats::default();
    stats.cycles = 10;
    stats.retire(InstClass::Control);

    let mut out = Vec::new();
    stats.print(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("MIPS SIMULATION STATISTICS"));
    assert!(text.contains("sim_cycles               10"));
    assert!(text.contains("sim_cpi                  10.0000"));
    assert!(text.contains("op.control"));
}
