//! Report Formatter.
//!
//! This module renders every textual view of the simulator. It provides:
//! 1. **Register dump:** Counters, PC, `R0`-`R31`, HI and LO (`rdump`).
//! 2. **Memory dump:** Word-by-word listing of an address range (`mdump`).
//! 3. **Program listing:** Address and disassembly of each loaded word (`print`, `file`).
//! 4. **Pipeline view:** Every latch field with its disassembly (`show`).
//! 5. **Statistics:** The `SimStats` summary.
//!
//! Each function writes to an abstract sink, so the caller chooses the console or a file.

use std::io::{self, Write};

use crate::common::constants::WORD_SIZE;
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::disasm::disassemble_at;
use crate::sim::simulator::Simulator;

const RULE: &str = "-------------------------------------";
const WIDE_RULE: &str = "-------------------------------------------------------------";

/// Writes the register dump.
///
/// # Errors
///
/// Propagates any write failure from `out`.
pub fn write_registers(sim: &Simulator, out: &mut dyn Write) -> io::Result<()> {
    let snap = sim.snapshot();
    writeln!(out, "{RULE}")?;
    writeln!(out, "Dumping Register Content")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "# Instructions Executed\t: {}", snap.instruction_count)?;
    writeln!(out, "# Cycles Executed\t: {}", snap.cycle_count)?;
    writeln!(out, "PC\t: {:#010x}", snap.state.pc)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "[Register]\t[Value]")?;
    writeln!(out, "{RULE}")?;
    for (i, value) in snap.state.regs.as_array().iter().enumerate() {
        writeln!(out, "[R{i}]\t: {value:#010x}")?;
    }
    writeln!(out, "{RULE}")?;
    writeln!(out, "[HI]\t: {:#010x}", snap.state.hi)?;
    writeln!(out, "[LO]\t: {:#010x}", snap.state.lo)?;
    writeln!(out, "{RULE}")
}

/// Writes the words from `start` to `stop` inclusive, stepping by one word.
///
/// The listing stops at the last word that does not pass `stop`; a range that would
/// run past the top of the address space ends there.
///
/// # Errors
///
/// Propagates any write failure from `out`.
pub fn write_memory(sim: &Simulator, start: u32, stop: u32, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{WIDE_RULE}")?;
    writeln!(out, "Memory content [{start:#010x}..{stop:#010x}] :")?;
    writeln!(out, "{WIDE_RULE}")?;
    writeln!(out, "\t[Address in Hex (Dec) ]\t[Value]")?;
    let mut addr = start;
    while addr <= stop {
        writeln!(out, "\t{addr:#010x} ({addr}) :\t{:#010x}", sim.read_word(addr))?;
        match addr.checked_add(WORD_SIZE) {
            Some(next) => addr = next,
            None => break,
        }
    }
    writeln!(out)
}

/// Writes the loaded program as an address and disassembly listing.
///
/// # Errors
///
/// Propagates any write failure from `out`.
pub fn write_program(sim: &Simulator, out: &mut dyn Write) -> io::Result<()> {
    let mut addr = sim.text_base();
    for &word in sim.program() {
        writeln!(out, "{addr:#010x}:\t{word:#010x}\t{}", disassemble_at(word, addr))?;
        addr = addr.wrapping_add(WORD_SIZE);
    }
    Ok(())
}

/// Writes the CURRENT PC and the contents of all four pipeline latches.
///
/// # Errors
///
/// Propagates any write failure from `out`.
pub fn write_pipeline(sim: &Simulator, out: &mut dyn Write) -> io::Result<()> {
    let l = sim.latches();
    let snap = sim.snapshot();
    let inst = |valid: bool, word: u32, pc: u32| {
        if valid {
            format!("{word:#010x}  {}", disassemble_at(word, pc))
        } else {
            "(bubble)".to_string()
        }
    };

    writeln!(out, "Current PC\t\t{:#010x}", snap.state.pc)?;
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "IF/ID.IR\t\t{}",
        inst(!l.if_id.is_empty(), l.if_id.inst, l.if_id.fetch_pc)
    )?;
    writeln!(out, "IF/ID.PC\t\t{:#010x}", l.if_id.fetch_pc)?;
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "ID/EX.IR\t\t{}",
        inst(!l.id_ex.is_empty(), l.id_ex.inst, l.id_ex.fetch_pc)
    )?;
    writeln!(out, "ID/EX.A\t\t\t{:#010x}", l.id_ex.operand_a)?;
    writeln!(out, "ID/EX.B\t\t\t{:#010x}", l.id_ex.operand_b)?;
    writeln!(out, "ID/EX.imm\t\t{:#010x}", l.id_ex.immediate)?;
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "EX/MEM.IR\t\t{}",
        inst(!l.ex_mem.is_empty(), l.ex_mem.inst, l.ex_mem.fetch_pc)
    )?;
    writeln!(out, "EX/MEM.ALUOutput\t{:#010x}", l.ex_mem.alu_output)?;
    writeln!(out, "EX/MEM.B\t\t{:#010x}", l.ex_mem.store_operand)?;
    writeln!(out, "EX/MEM.width\t\t{}", l.ex_mem.ctrl.width.name())?;
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "MEM/WB.IR\t\t{}",
        inst(!l.mem_wb.is_empty(), l.mem_wb.inst, l.mem_wb.fetch_pc)
    )?;
    writeln!(out, "MEM/WB.ALUOutput\t{:#010x}", l.mem_wb.alu_output)?;
    writeln!(out, "MEM/WB.LMD\t\t{:#010x}", l.mem_wb.loaded_word)?;
    writeln!(out, "{RULE}")
}

/// Writes the statistics summary.
///
/// # Errors
///
/// Propagates any write failure from `out`.
pub fn write_stats(sim: &Simulator, out: &mut dyn Write) -> io::Result<()> {
    sim.stats().print(out)
}
