//! Core processor implementation.
//!
//! This module contains the CPU container and cycle driver, the five-stage
//! pipeline, the architectural state, and the ALU.

/// Architectural state (PC, general-purpose registers, HI/LO).
pub mod arch;

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Instruction pipeline implementation (stages, latches, signals).
pub mod pipeline;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
