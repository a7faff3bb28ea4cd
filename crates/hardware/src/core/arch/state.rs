//! Architectural State.
//!
//! `ArchState` is one complete copy of the programmer-visible registers. The cycle
//! driver keeps two of them:
//! 1. **CURRENT:** Frozen for the duration of a cycle. Every stage reads from it.
//! 2. **NEXT:** Accumulates the writes made during the cycle and becomes CURRENT at commit.

use serde::Serialize;

use crate::common::RegisterFile;

/// Program counter, general-purpose registers, and HI/LO.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ArchState {
    /// Program counter.
    pub pc: u32,
    /// General-purpose registers `$0`-`$31`.
    pub regs: RegisterFile,
    /// High half of a product, or remainder of a division.
    pub hi: u32,
    /// Low half of a product, or quotient of a division.
    pub lo: u32,
}

impl ArchState {
    /// Creates a zeroed state with the PC at `pc`.
    pub const fn at(pc: u32) -> Self {
        Self {
            pc,
            regs: RegisterFile::new(),
            hi: 0,
            lo: 0,
        }
    }
}
