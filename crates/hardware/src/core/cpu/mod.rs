//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Maintains the CURRENT and NEXT architectural state copies.
//! 2. **Pipeline Control:** Owns the four inter-stage latches.
//! 3. **Memory:** Owns the segmented memory shared by fetch and the memory stage.
//! 4. **Run Control:** Tracks the run flag, execution mode, and statistics.

/// Cycle driver for both execution modes.
pub mod execution;

/// Single-cycle executor (`handle_machine_instruction`).
pub mod single_cycle;

use crate::config::{Config, ExecutionMode};
use crate::core::arch::ArchState;
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry, IfIdEntry, Latches, MemWbEntry};
use crate::core::pipeline::traits::PipelineLatch;
use crate::soc::Memory;
use crate::stats::SimStats;

/// Main CPU structure containing all processor state and components.
///
/// Every stage reads `current` and writes `next`; the cycle driver copies
/// `next` over `current` once all stages have run.
#[derive(Debug)]
pub struct Cpu {
    /// Architectural state frozen for the duration of a cycle.
    pub current: ArchState,
    /// Architectural state accumulating this cycle's writes.
    pub next: ArchState,

    /// Segmented memory.
    pub memory: Memory,

    /// IF/ID Latch.
    pub if_id: IfIdEntry,
    /// ID/EX Latch.
    pub id_ex: IdExEntry,
    /// EX/MEM Latch.
    pub ex_mem: ExMemEntry,
    /// MEM/WB Latch.
    pub mem_wb: MemWbEntry,

    /// Executor selection.
    pub mode: ExecutionMode,
    /// Address the PC is reset to.
    pub text_base: u32,
    /// Run flag. Checked before each cycle by the run loops; no instruction clears it.
    pub running: bool,
    /// Enable per-stage instruction tracing.
    pub trace: bool,
    /// Performance statistics, including the cycle and retired-instruction counters.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a new CPU with zeroed state and memory, PC at the text base.
    ///
    /// # Arguments
    ///
    /// * `config` - The simulator configuration parameters.
    pub fn new(config: &Config) -> Self {
        let text_base = config.memory.text_base;
        Self {
            current: ArchState::at(text_base),
            next: ArchState::at(text_base),
            memory: Memory::from_config(&config.memory),
            if_id: IfIdEntry::default(),
            id_ex: IdExEntry::default(),
            ex_mem: ExMemEntry::default(),
            mem_wb: MemWbEntry::default(),
            mode: config.general.mode,
            text_base,
            running: true,
            trace: config.general.trace_instructions,
            stats: SimStats::default(),
        }
    }

    /// Returns the CPU to its initialized state.
    ///
    /// Registers, HI/LO, memory, latches, and counters are zeroed, the PC is set to
    /// the text base, NEXT is made equal to CURRENT, and the run flag is raised.
    /// Reloading a program is the caller's job.
    pub fn reset(&mut self) {
        self.current = ArchState::at(self.text_base);
        self.next = self.current;
        self.memory.clear();
        self.if_id.flush();
        self.id_ex.flush();
        self.ex_mem.flush();
        self.mem_wb.flush();
        self.running = true;
        self.stats = SimStats::default();
    }

    /// Number of instructions retired so far.
    pub const fn instruction_count(&self) -> u64 {
        self.stats.instructions_retired
    }

    /// Number of cycles executed so far.
    pub const fn cycle_count(&self) -> u64 {
        self.stats.cycles
    }

    /// Returns a copy of the four pipeline latches.
    pub const fn latches(&self) -> Latches {
        Latches {
            if_id: self.if_id,
            id_ex: self.id_ex,
            ex_mem: self.ex_mem,
            mem_wb: self.mem_wb,
        }
    }

    /// Logs the architectural state at debug level.
    pub fn dump_state(&self) {
        tracing::debug!(
            "PC={:#010x} HI={:#010x} LO={:#010x} cycles={} retired={}",
            self.current.pc,
            self.current.hi,
            self.current.lo,
            self.stats.cycles,
            self.stats.instructions_retired
        );
        for (i, chunk) in self.current.regs.as_array().chunks(4).enumerate() {
            tracing::debug!(
                "R{:<2} {:#010x} {:#010x} {:#010x} {:#010x}",
                i * 4,
                chunk[0],
                chunk[1],
                chunk[2],
                chunk[3]
            );
        }
    }
}
