//! Common utilities and types used throughout the MIPS simulator.
//!
//! This module provides the building blocks shared by every component. It includes:
//! 1. **Constants:** Word size, register count, and pipeline depth.
//! 2. **Error Handling:** The `SimError` enum and `SimResult` alias.
//! 3. **Register Management:** The 32-entry general-purpose register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use error::{SimError, SimResult};
pub use reg::RegisterFile;
