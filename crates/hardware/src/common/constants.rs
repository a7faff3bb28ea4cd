//! Global System Constants.
//!
//! This module defines machine-wide constants used across the simulator. It includes:
//! 1. **Word Constants:** Instruction and data word sizes.
//! 2. **Register Constants:** Register file dimensions.
//! 3. **Syscall Constants:** The sentinel written by the single-cycle `syscall`.

/// Size of a MIPS instruction or data word in bytes.
pub const WORD_SIZE: u32 = 4;

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 32;

/// Value the single-cycle `syscall` places in `$v0`.
pub const SYSCALL_SENTINEL: u32 = 0xA;

/// Number of pipeline stages an instruction passes through before it retires.
pub const PIPELINE_DEPTH: u64 = 5;
