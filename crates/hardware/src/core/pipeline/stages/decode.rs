//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the instruction pipeline. It performs:
//! 1. **Decoding:** Turns the fetched word into a `Decoded` mnemonic and fields.
//! 2. **Control Generation:** Derives the `ControlSignals` for the later stages.
//! 3. **Operand Read:** Reads `rs` and `rt` from the CURRENT register file.
//!
//! There is no forwarding or interlock. An operand written by an instruction still
//! in flight is read stale, which is the modeled machine's documented behavior.

use crate::core::Cpu;
use crate::core::pipeline::latches::IdExEntry;
use crate::core::pipeline::signals::ControlSignals;
use crate::isa::decode::decode;

/// Executes the instruction decode stage of the pipeline.
///
/// Consumes the IF/ID latch written by Fetch in the previous cycle and
/// overwrites the ID/EX latch. A bubble in IF/ID yields a bubble in ID/EX.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
pub fn decode_stage(cpu: &mut Cpu) {
    let entry = cpu.if_id;
    if !entry.valid {
        cpu.id_ex = IdExEntry::default();
        return;
    }

    let decoded = decode(entry.inst);
    let f = decoded.fields;

    if cpu.trace {
        tracing::debug!(
            "ID  pc={:#010x} {} rs=${}({:#x}) rt=${}({:#x}) imm={:#x}",
            entry.fetch_pc,
            decoded.mnemonic.name(),
            f.rs,
            cpu.current.regs.read(f.rs),
            f.rt,
            cpu.current.regs.read(f.rt),
            f.immediate
        );
    }

    cpu.id_ex = IdExEntry {
        valid: true,
        inst: entry.inst,
        fetch_pc: entry.fetch_pc,
        decoded,
        ctrl: ControlSignals::for_mnemonic(decoded.mnemonic),
        operand_a: cpu.current.regs.read(f.rs),
        operand_b: cpu.current.regs.read(f.rt),
        immediate: f.immediate,
    };
}
