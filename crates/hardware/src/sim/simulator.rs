//! Simulator: the top-level context handed to collaborators.
//!
//! `Simulator` owns the CPU, the configuration it was built from, and the loaded
//! program (kept so `reset` can reload it). Every operation the command shell,
//! the loader, and the report formatter need goes through it; there is no
//! process-wide state.

use std::path::Path;

use serde::Serialize;

use crate::common::{SimError, SimResult};
use crate::config::{Config, ExecutionMode};
use crate::core::Cpu;
use crate::core::arch::ArchState;
use crate::core::pipeline::latches::Latches;
use crate::sim::loader;
use crate::stats::SimStats;

/// Read-only view of the architectural state and counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// CURRENT architectural state (PC, registers, HI/LO).
    pub state: ArchState,
    /// Instructions retired.
    pub instruction_count: u64,
    /// Cycles executed.
    pub cycle_count: u64,
    /// Run flag.
    pub running: bool,
}

/// Top-level simulator context.
#[derive(Debug)]
pub struct Simulator {
    cpu: Cpu,
    config: Config,
    program: Vec<u32>,
}

impl Simulator {
    /// Creates an initialized simulator: zeroed state and memory, PC at the text base.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the configured memory map is unusable.
    pub fn new(config: Config) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            cpu: Cpu::new(&config),
            config,
            program: Vec::new(),
        })
    }

    /// Writes `words` sequentially from the text base and remembers them for `reset`.
    ///
    /// Memory beyond the new program is left untouched.
    ///
    /// # Returns
    ///
    /// The number of words written.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ProgramTooLarge`] if the words do not fit between the text
    /// base and the end of its region. Nothing is written in that case.
    pub fn load_program(&mut self, words: &[u32]) -> SimResult<usize> {
        let capacity = self.text_capacity();
        if words.len() > capacity {
            return Err(SimError::ProgramTooLarge {
                words: words.len(),
                capacity,
            });
        }
        self.program = words.to_vec();
        self.write_program();
        tracing::debug!(
            "loaded {} words at {:#010x}",
            words.len(),
            self.cpu.text_base
        );
        Ok(words.len())
    }

    /// Reads a program image from disk and loads it.
    ///
    /// # Errors
    ///
    /// Propagates loader errors and [`SimError::ProgramTooLarge`].
    pub fn load_program_file(&mut self, path: impl AsRef<Path>) -> SimResult<usize> {
        let words = loader::read_program(path)?;
        self.load_program(&words)
    }

    /// Advances exactly one clock, regardless of the run flag.
    pub fn step_cycle(&mut self) {
        self.cpu.tick();
    }

    /// Runs up to `cycles` clocks, stopping early if the run flag is cleared.
    ///
    /// # Returns
    ///
    /// The number of cycles executed.
    pub fn run(&mut self, cycles: u64) -> u64 {
        let mut executed = 0;
        while executed < cycles && self.cpu.running {
            self.cpu.tick();
            executed += 1;
        }
        executed
    }

    /// Runs while the run flag is set, bounded by `general.max_cycles` when configured.
    ///
    /// No instruction clears the run flag, so without a bound this returns only
    /// after an external [`Simulator::halt`].
    ///
    /// # Returns
    ///
    /// The number of cycles executed.
    pub fn run_all(&mut self) -> u64 {
        match self.config.general.max_cycles {
            Some(limit) => self.run(limit),
            None => {
                let mut executed = 0;
                while self.cpu.running {
                    self.cpu.tick();
                    executed += 1;
                }
                executed
            }
        }
    }

    /// Clears the run flag.
    pub const fn halt(&mut self) {
        self.cpu.running = false;
    }

    /// Returns the run flag.
    pub const fn is_running(&self) -> bool {
        self.cpu.running
    }

    /// Zeroes registers, memory, latches, and counters, then reloads the program.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.write_program();
    }

    /// Reads a word for inspection tooling. Unmapped addresses read as zero.
    pub fn read_word(&self, addr: u32) -> u32 {
        self.cpu.memory.read_word(addr)
    }

    /// Writes a word for inspection tooling. Unmapped writes are dropped.
    pub fn write_word(&mut self, addr: u32, value: u32) {
        self.cpu.memory.write_word(addr, value);
    }

    /// Returns the CURRENT state and counters.
    pub const fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.cpu.current,
            instruction_count: self.cpu.instruction_count(),
            cycle_count: self.cpu.cycle_count(),
            running: self.cpu.running,
        }
    }

    /// Sets a general-purpose register in both CURRENT and NEXT.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidRegister`] if `idx` is not below 32.
    pub fn set_register(&mut self, idx: usize, value: u32) -> SimResult<()> {
        self.cpu.current.regs.write_checked(idx, value)?;
        self.cpu.next.regs.write_checked(idx, value)
    }

    /// Sets HI in both CURRENT and NEXT.
    pub const fn set_hi(&mut self, value: u32) {
        self.cpu.current.hi = value;
        self.cpu.next.hi = value;
    }

    /// Sets LO in both CURRENT and NEXT.
    pub const fn set_lo(&mut self, value: u32) {
        self.cpu.current.lo = value;
        self.cpu.next.lo = value;
    }

    /// Returns a copy of the four pipeline latches.
    pub const fn latches(&self) -> Latches {
        self.cpu.latches()
    }

    /// Returns the loaded program words.
    pub fn program(&self) -> &[u32] {
        &self.program
    }

    /// Returns the address the program is loaded at.
    pub const fn text_base(&self) -> u32 {
        self.cpu.text_base
    }

    /// Returns the active execution mode.
    pub const fn mode(&self) -> ExecutionMode {
        self.cpu.mode
    }

    /// Returns the statistics collected so far.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }

    /// Returns the configuration the simulator was built from.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the CPU for read-only inspection.
    pub const fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    fn text_capacity(&self) -> usize {
        let base = self.cpu.text_base;
        self.cpu.memory.region_for(base).map_or(0, |region| {
            ((region.end() - base) / crate::common::constants::WORD_SIZE) as usize + 1
        })
    }

    fn write_program(&mut self) {
        let mut addr = self.cpu.text_base;
        for &word in &self.program {
            self.cpu.memory.write_word(addr, word);
            addr = addr.wrapping_add(crate::common::constants::WORD_SIZE);
        }
    }
}
