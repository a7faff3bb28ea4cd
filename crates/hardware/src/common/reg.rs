//! General-Purpose Register File.
//!
//! This module provides the `RegisterFile` struct holding the 32 MIPS integer registers.
//! It performs the following:
//! 1. **Storage:** Maintains 32 32-bit registers (`$0`-`$31`).
//! 2. **Validation:** Offers a checked write for indices supplied from outside the core.
//!
//! Register `$0` is not hardwired to zero in this machine model. Writes to it stick,
//! and callers must not rely on it reading as zero.

use serde::Serialize;

use super::constants::NUM_REGS;
use super::error::{SimError, SimResult};

/// The 32 general-purpose registers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegisterFile {
    regs: [u32; NUM_REGS],
}

impl RegisterFile {
    /// Creates a register file with every register set to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a register.
    ///
    /// Indices come from 5-bit instruction fields, so they are always in range.
    /// An index of 32 or more wraps into the low five bits.
    #[inline]
    pub const fn read(&self, idx: usize) -> u32 {
        self.regs[idx % NUM_REGS]
    }

    /// Writes a register.
    ///
    /// The index is reduced to five bits the same way [`Self::read`] does.
    #[inline]
    pub const fn write(&mut self, idx: usize, val: u32) {
        self.regs[idx % NUM_REGS] = val;
    }

    /// Writes a register whose index came from outside the core.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidRegister`] if `idx` is not below 32.
    pub fn write_checked(&mut self, idx: usize, val: u32) -> SimResult<()> {
        let slot = self.regs.get_mut(idx).ok_or(SimError::InvalidRegister(idx))?;
        *slot = val;
        Ok(())
    }

    /// Returns all registers in index order.
    pub const fn as_array(&self) -> &[u32; NUM_REGS] {
        &self.regs
    }
}
