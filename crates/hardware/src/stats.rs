//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the MIPS simulator. It provides:
//! 1. **Cycle and CPI:** Total cycles, retired instructions, and derived ratios.
//! 2. **Instruction mix:** Retired counts by category (ALU, mul/div, load, store, control, system).
//! 3. **Diagnostics:** Retired instructions that were outside the modeled table.

use std::io::{self, Write};
use std::time::Instant;

use serde::Serialize;

use crate::isa::decode::InstClass;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug, Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions retired (reached writeback).
    pub instructions_retired: u64,

    /// Count of integer ALU instructions retired.
    pub inst_alu: u64,
    /// Count of multiply, divide, and HI/LO move instructions retired.
    pub inst_muldiv: u64,
    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of branch/jump instructions retired.
    pub inst_control: u64,
    /// Count of `syscall` instructions retired.
    pub inst_system: u64,
    /// Count of unsupported encodings retired as no-ops.
    pub inst_unsupported: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_muldiv: 0,
            inst_load: 0,
            inst_store: 0,
            inst_control: 0,
            inst_system: 0,
            inst_unsupported: 0,
        }
    }
}

impl SimStats {
    /// Records one retired instruction of the given category.
    pub const fn retire(&mut self, class: InstClass) {
        self.instructions_retired += 1;
        match class {
            InstClass::Alu => self.inst_alu += 1,
            InstClass::MulDiv => self.inst_muldiv += 1,
            InstClass::Load => self.inst_load += 1,
            InstClass::Store => self.inst_store += 1,
            InstClass::Control => self.inst_control += 1,
            InstClass::System => self.inst_system += 1,
            InstClass::Unsupported => self.inst_unsupported += 1,
        }
    }

    /// Cycles per retired instruction, or `None` before the first retirement.
    pub fn cpi(&self) -> Option<f64> {
        (self.instructions_retired > 0)
            .then(|| self.cycles as f64 / self.instructions_retired as f64)
    }

    /// Writes the statistics report.
    ///
    /// # Arguments
    ///
    /// * `out` - Destination sink (console or file).
    ///
    /// # Errors
    ///
    /// Propagates any write failure from `out`.
    pub fn print(&self, out: &mut dyn Write) -> io::Result<()> {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / instr) * 100.0;

        writeln!(out, "==========================================================")?;
        writeln!(out, "MIPS SIMULATION STATISTICS")?;
        writeln!(out, "==========================================================")?;
        writeln!(out, "host_seconds             {seconds:.4} s")?;
        writeln!(out, "sim_cycles               {}", self.cycles)?;
        writeln!(out, "sim_insts                {}", self.instructions_retired)?;
        match self.cpi() {
            Some(cpi) => writeln!(out, "sim_cpi                  {cpi:.4}")?,
            None => writeln!(out, "sim_cpi                  n/a")?,
        }
        writeln!(out, "----------------------------------------------------------")?;
        writeln!(out, "INSTRUCTION MIX")?;
        for (name, count) in [
            ("op.alu", self.inst_alu),
            ("op.muldiv", self.inst_muldiv),
            ("op.load", self.inst_load),
            ("op.store", self.inst_store),
            ("op.control", self.inst_control),
            ("op.system", self.inst_system),
            ("op.unsupported", self.inst_unsupported),
        ] {
            writeln!(out, "  {name:<22} {count} ({:.2}%)", pct(count))?;
        }
        writeln!(out, "==========================================================")
    }
}
