//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the instruction pipeline. Loads read
//! the word at the effective address; stores write `rt` there. Every other
//! instruction passes its ALU output through unchanged.
//!
//! `lb`/`lh`/`sb`/`sh` access a full word at the computed address. No byte or
//! halfword isolation and no sign extension is performed.

use crate::core::Cpu;
use crate::core::pipeline::latches::MemWbEntry;

/// Executes the memory stage of the pipeline.
///
/// Consumes the EX/MEM latch written by Execute in the previous cycle and
/// overwrites the MEM/WB latch.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
pub fn mem_stage(cpu: &mut Cpu) {
    let ex = cpu.ex_mem;
    if !ex.valid {
        cpu.mem_wb = MemWbEntry::default();
        return;
    }

    let mut loaded_word = 0;
    if ex.ctrl.mem_read {
        loaded_word = cpu.memory.read_word(ex.alu_output);
        if cpu.trace {
            tracing::debug!(
                "MEM pc={:#010x} load.{} [{:#010x}] -> {loaded_word:#010x}",
                ex.fetch_pc,
                ex.ctrl.width.name(),
                ex.alu_output
            );
        }
    } else if ex.ctrl.mem_write {
        cpu.memory.write_word(ex.alu_output, ex.store_operand);
        if cpu.trace {
            tracing::debug!(
                "MEM pc={:#010x} store.{} [{:#010x}] <- {:#010x}",
                ex.fetch_pc,
                ex.ctrl.width.name(),
                ex.alu_output,
                ex.store_operand
            );
        }
    }

    cpu.mem_wb = MemWbEntry {
        valid: true,
        inst: ex.inst,
        fetch_pc: ex.fetch_pc,
        decoded: ex.decoded,
        ctrl: ex.ctrl,
        alu_output: ex.alu_output,
        loaded_word,
    };
}
