//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction pipeline. It commits
//! the instruction's result to the NEXT architectural state and counts the
//! instruction as retired.
//!
//! Exactly one destination is written: register `rd`, register `rt`, HI, or LO.
//! Stores, branches, jumps, `syscall`, and multiply/divide write nothing here.
//! `mfhi`/`mflo` read HI/LO from CURRENT.

use crate::core::Cpu;
use crate::core::arch::ArchState;
use crate::core::pipeline::signals::{ControlSignals, WbDest, WbSrc};
use crate::isa::instruction::Fields;

/// Executes the writeback stage of the pipeline.
///
/// Consumes the MEM/WB latch written by Memory in the previous cycle. Bubbles
/// neither write nor retire.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
pub fn wb_stage(cpu: &mut Cpu) {
    let wb = cpu.mem_wb;
    if !wb.valid {
        return;
    }

    let written = write_destination(
        &cpu.current,
        &mut cpu.next,
        &wb.ctrl,
        &wb.decoded.fields,
        wb.alu_output,
        wb.loaded_word,
    );

    if cpu.trace {
        match written {
            Some((dest, value)) => tracing::debug!(
                "WB  pc={:#010x} {} {dest} <= {value:#010x}",
                wb.fetch_pc,
                wb.decoded.mnemonic.name()
            ),
            None => tracing::debug!(
                "WB  pc={:#010x} {}",
                wb.fetch_pc,
                wb.decoded.mnemonic.name()
            ),
        }
    }

    cpu.stats.retire(wb.decoded.class());
}

/// Writes an instruction's result into `next`.
///
/// Shared by the pipelined Writeback stage and the single-cycle executor.
///
/// # Returns
///
/// The destination name and value written, or `None` when the instruction has
/// no destination.
pub(crate) fn write_destination(
    current: &ArchState,
    next: &mut ArchState,
    ctrl: &ControlSignals,
    fields: &Fields,
    alu_output: u32,
    loaded_word: u32,
) -> Option<(String, u32)> {
    let value = match ctrl.wb_src {
        WbSrc::Alu => alu_output,
        WbSrc::Mem => loaded_word,
        WbSrc::Hi => current.hi,
        WbSrc::Lo => current.lo,
    };

    match ctrl.wb_dest {
        WbDest::None => None,
        WbDest::Rd => {
            next.regs.write(fields.rd, value);
            Some((format!("${}", fields.rd), value))
        }
        WbDest::Rt => {
            next.regs.write(fields.rt, value);
            Some((format!("${}", fields.rt), value))
        }
        WbDest::Hi => {
            next.hi = value;
            Some(("HI".to_string(), value))
        }
        WbDest::Lo => {
            next.lo = value;
            Some(("LO".to_string(), value))
        }
    }
}
