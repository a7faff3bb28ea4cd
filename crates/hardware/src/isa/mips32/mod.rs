//! MIPS32 Integer Instruction Set.
//!
//! Encoding constants for the subset of MIPS32 that the simulator models.
//!
//! # Structure
//!
//! - `opcodes`: Primary opcodes (bits 31-26).
//! - `funct`: Function codes (bits 5-0) distinguishing R-format instructions.
//! - `regimm`: `rt` selectors (bits 20-16) for the REGIMM branch group.

/// Function codes for opcode `SPECIAL` (R-format).
pub mod funct;

/// Primary opcodes.
pub mod opcodes;

/// `rt` selectors for opcode `REGIMM`.
pub mod regimm;
