//! Execution units and functional components.
//!
//! The modeled core has a single functional unit, the integer ALU, shared by the
//! pipelined Execute stage and the single-cycle executor.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;
