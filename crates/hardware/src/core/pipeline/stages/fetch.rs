//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline. It reads
//! the word at the CURRENT program counter into the IF/ID latch and advances
//! the NEXT program counter sequentially. No branch prediction or redirection
//! takes place: control flow is not resolved in the pipelined core.

use crate::common::constants::WORD_SIZE;
use crate::core::Cpu;
use crate::core::pipeline::latches::IfIdEntry;
use crate::isa::disasm::disassemble;

/// Executes the instruction fetch stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Behavior
///
/// - `IF/ID.inst <= Mem[CURRENT.pc]` (unmapped addresses fetch `0x00000000`)
/// - `NEXT.pc <= CURRENT.pc + 4`
pub fn fetch_stage(cpu: &mut Cpu) {
    let pc = cpu.current.pc;
    let inst = cpu.memory.read_word(pc);

    if cpu.trace {
        tracing::debug!("IF  pc={pc:#010x} inst={inst:#010x} {}", disassemble(inst));
    }

    cpu.if_id = IfIdEntry {
        valid: true,
        inst,
        fetch_pc: pc,
    };
    cpu.next.pc = pc.wrapping_add(WORD_SIZE);
}
