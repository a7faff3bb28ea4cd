//! MIPS architectural state.
//!
//! This module holds the programmer-visible machine state: the program counter,
//! the general-purpose register file, and the HI/LO pair. The CPU keeps two
//! copies, CURRENT and NEXT (see [`state::ArchState`]).

/// Program counter, registers, and HI/LO.
pub mod state;

pub use state::ArchState;
