//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the five-stage instruction pipeline.
//! It includes the following components:
//! 1. **Latches:** Inter-stage buffers for communication between pipeline stages.
//! 2. **Signals:** Control signals generated during instruction decoding.
//! 3. **Stages:** Implementation of Fetch, Decode, Execute, Memory, and Writeback stages.
//! 4. **Traits:** Common interface for pipeline latches.
//!
//! There is no hazard detection, forwarding, or control-flow resolution.

/// Inter-stage pipeline latches (IF/ID, ID/EX, EX/MEM, MEM/WB).
pub mod latches;

/// Control signals generated during instruction decode.
pub mod signals;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;

/// Traits for pipeline latch components.
pub mod traits;
