//! System-on-Chip (SoC) Components.
//!
//! The MIPS machine modeled here has no devices: the only system component is
//! the segmented memory that instruction fetch and the memory stage share.

/// Segmented memory (regions and word access).
pub mod memory;

pub use memory::{Memory, MemoryRegion};
