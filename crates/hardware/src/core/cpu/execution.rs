//! Main Execution Loop.
//!
//! This module implements the cycle driver. It performs the following:
//! 1. **Pipeline Coordination:** Runs the five stages in the fixed order WB, MEM, EX, ID, IF.
//! 2. **Commit:** Copies NEXT over CURRENT once every stage has run.
//! 3. **Timing Management:** Advances the cycle counter.
//!
//! The reverse order is what makes single-buffered latches behave like pipeline
//! registers: a stage always runs before its upstream neighbour overwrites the
//! latch between them, so it sees the value produced in the previous cycle.

use super::Cpu;
use super::single_cycle::handle_machine_instruction;
use crate::config::ExecutionMode;
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
};

impl Cpu {
    /// Advances the machine by exactly one clock.
    ///
    /// In pipelined mode the five stages run in reverse order; in single-cycle mode one
    /// instruction is executed to completion. Either way NEXT is then committed and
    /// the cycle counter increments. The run flag is not consulted here.
    pub fn tick(&mut self) {
        match self.mode {
            ExecutionMode::Pipelined => self.pipeline_tick(),
            ExecutionMode::SingleCycle => handle_machine_instruction(self),
        }
        self.commit();
    }

    fn pipeline_tick(&mut self) {
        wb_stage(self);
        mem_stage(self);
        execute_stage(self);
        decode_stage(self);
        fetch_stage(self);
    }

    fn commit(&mut self) {
        self.current = self.next;
        self.stats.cycles += 1;
        if self.trace {
            self.dump_state();
        }
    }
}
