//! Execute (EX) Stage.
//!
//! This module implements the third stage of the instruction pipeline. It performs:
//! 1. **ALU Operations:** Computes arithmetic, logic, shift, and comparison results.
//! 2. **Address Generation:** `rs + immediate` for loads and stores, with `rt` forwarded as store data.
//! 3. **HI/LO Producers:** Multiply and divide write NEXT HI/LO directly, bypassing the ALU output.
//!
//! Branches, jumps, and `syscall` pass through with no effect. An encoding outside the
//! modeled table is reported on the diagnostic channel and likewise has no effect.

use crate::core::Cpu;
use crate::core::pipeline::latches::ExMemEntry;
use crate::core::pipeline::signals::{AluOp, OpBSrc};
use crate::core::units::alu::Alu;

/// Executes the execute stage of the pipeline.
///
/// Consumes the ID/EX latch written by Decode in the previous cycle and
/// overwrites the EX/MEM latch.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
pub fn execute_stage(cpu: &mut Cpu) {
    let id = cpu.id_ex;
    if !id.valid {
        cpu.ex_mem = ExMemEntry::default();
        return;
    }

    let ctrl = id.ctrl;
    let a = id.operand_a;
    let b = match ctrl.b_src {
        OpBSrc::Reg => id.operand_b,
        OpBSrc::Imm => id.immediate,
    };

    if ctrl.unsupported {
        tracing::warn!(
            stage = "EX",
            "unsupported instruction {:#010x} at {:#010x} treated as no-op",
            id.inst,
            id.fetch_pc
        );
    }

    let alu_output = if ctrl.alu.writes_hilo() {
        apply_hilo(cpu, ctrl.alu, a, b, id.fetch_pc);
        0
    } else {
        Alu::execute(ctrl.alu, a, b, id.decoded.fields.shamt)
    };

    if cpu.trace {
        tracing::debug!(
            "EX  pc={:#010x} {} alu={alu_output:#010x}",
            id.fetch_pc,
            id.decoded.mnemonic.name()
        );
    }

    cpu.ex_mem = ExMemEntry {
        valid: true,
        inst: id.inst,
        fetch_pc: id.fetch_pc,
        decoded: id.decoded,
        ctrl,
        alu_output,
        store_operand: id.operand_b,
    };
}

/// Writes a multiply/divide result into NEXT HI/LO.
///
/// A division by zero leaves HI and LO unchanged and emits a warning.
pub(crate) fn apply_hilo(cpu: &mut Cpu, op: AluOp, a: u32, b: u32, pc: u32) {
    if let Some(result) = Alu::hilo(op, a, b) {
        cpu.next.hi = result.hi;
        cpu.next.lo = result.lo;
    } else {
        tracing::warn!("division by zero at {pc:#010x}; HI/LO left unchanged");
    }
}
