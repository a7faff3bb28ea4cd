//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the entry types carried between the five stages:
//! Fetch → Decode → Execute → Memory → Writeback.
//!
//! 1. **Instruction Flow:** Each latch carries the raw word plus that stage's outputs.
//! 2. **Bubbles:** `valid == false` marks an empty slot (after initialize or reset).
//!    A bubble flows through the stages like a zero word but never retires.
//!
//! Latches are single-buffered. The reverse stage order in the cycle driver is what
//! lets each stage read the value its upstream neighbour wrote in the previous cycle.

use serde::Serialize;

use crate::core::pipeline::signals::ControlSignals;
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::decode::Decoded;

/// Entry in the IF/ID pipeline latch (Fetch to Decode stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Serialize)]
pub struct IfIdEntry {
    /// Slot holds a fetched instruction rather than a bubble.
    pub valid: bool,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Address the instruction was fetched from.
    pub fetch_pc: u32,
}

/// Entry in the ID/EX pipeline latch (Decode to Execute stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Serialize)]
pub struct IdExEntry {
    /// Slot holds an instruction rather than a bubble.
    pub valid: bool,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Address the instruction was fetched from.
    pub fetch_pc: u32,
    /// Decoded form of `inst`.
    pub decoded: Decoded,
    /// Control signals for downstream stages.
    pub ctrl: ControlSignals,
    /// Value of register `rs`.
    pub operand_a: u32,
    /// Value of register `rt`.
    pub operand_b: u32,
    /// Zero-extended 16-bit immediate.
    pub immediate: u32,
}

/// Entry in the EX/MEM pipeline latch (Execute to Memory stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Serialize)]
pub struct ExMemEntry {
    /// Slot holds an instruction rather than a bubble.
    pub valid: bool,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Address the instruction was fetched from.
    pub fetch_pc: u32,
    /// Decoded form of `inst`.
    pub decoded: Decoded,
    /// Control signals for downstream stages.
    pub ctrl: ControlSignals,
    /// ALU result, or effective address for loads and stores.
    pub alu_output: u32,
    /// Value of `rt` forwarded for stores.
    pub store_operand: u32,
}

/// Entry in the MEM/WB pipeline latch (Memory to Writeback stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Serialize)]
pub struct MemWbEntry {
    /// Slot holds an instruction rather than a bubble.
    pub valid: bool,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Address the instruction was fetched from.
    pub fetch_pc: u32,
    /// Decoded form of `inst`.
    pub decoded: Decoded,
    /// Control signals for the writeback stage.
    pub ctrl: ControlSignals,
    /// ALU result passed through the Memory stage.
    pub alu_output: u32,
    /// Word read from memory (loads only).
    pub loaded_word: u32,
}

macro_rules! impl_latch {
    ($($ty:ty),+) => {
        $(
            impl PipelineLatch for $ty {
                fn flush(&mut self) {
                    *self = Self::default();
                }

                fn is_empty(&self) -> bool {
                    !self.valid
                }
            }
        )+
    };
}

impl_latch!(IfIdEntry, IdExEntry, ExMemEntry, MemWbEntry);

/// The four inter-stage latches of the pipeline.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Serialize)]
pub struct Latches {
    /// Fetch → Decode.
    pub if_id: IfIdEntry,
    /// Decode → Execute.
    pub id_ex: IdExEntry,
    /// Execute → Memory.
    pub ex_mem: ExMemEntry,
    /// Memory → Writeback.
    pub mem_wb: MemWbEntry,
}

impl Latches {
    /// Number of latches holding an instruction.
    pub fn occupancy(&self) -> usize {
        [
            self.if_id.is_empty(),
            self.id_ex.is_empty(),
            self.ex_mem.is_empty(),
            self.mem_wb.is_empty(),
        ]
        .into_iter()
        .filter(|empty| !empty)
        .count()
    }
}

impl PipelineLatch for Latches {
    fn flush(&mut self) {
        self.if_id.flush();
        self.id_ex.flush();
        self.ex_mem.flush();
        self.mem_wb.flush();
    }

    fn is_empty(&self) -> bool {
        self.occupancy() == 0
    }
}
