//! MIPS simulator library.
//!
//! This crate implements a cycle-level simulator for a MIPS32 integer subset with the following:
//! 1. **Core:** A five-stage pipeline (fetch, decode, execute, memory, writeback) driven in
//!    reverse stage order, and a single-cycle executor that also resolves branches and jumps.
//! 2. **State:** CURRENT/NEXT architectural state copies, four pipeline latches, and HI/LO.
//! 3. **Memory:** Segmented, little-endian, byte-addressable store where unmapped reads return zero.
//! 4. **ISA:** Field extraction, decoding to a closed mnemonic type, and disassembly.
//! 5. **Simulation:** Program loading, configuration, statistics, and report formatting.
//!
//! # Example
//!
//! ```
//! use mips_core::{Config, Simulator};
//!
//! let mut sim = Simulator::new(Config::default()).unwrap();
//! sim.load_program(&[0x3c081234]).unwrap(); // lui $t0, 0x1234
//! sim.run(5);
//! assert_eq!(sim.snapshot().state.regs.read(8), 0x1234_0000);
//! ```

/// Common types and constants (errors, register file, word size).
pub mod common;
/// Simulator configuration (defaults, execution mode, memory map).
pub mod config;
/// CPU core (pipeline, architectural state, ALU, cycle driver).
pub mod core;
/// Instruction set (field extraction, decode, ABI names, disassembly).
pub mod isa;
/// Simulator facade, program loader, and report formatter.
pub mod sim;
/// System-on-chip components (segmented memory).
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Error type returned by fallible operations.
pub use crate::common::{SimError, SimResult};
/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::{Config, ExecutionMode};
/// CPU type; holds architectural state, latches, memory, and stats.
pub use crate::core::Cpu;
/// Top-level simulator context.
pub use crate::sim::{Simulator, Snapshot};
