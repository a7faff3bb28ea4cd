//! MIPS32 REGIMM Selectors.
//!
//! Values of the `rt` field (bits 20-16) for opcode `REGIMM`.

/// Branch on Less Than Zero.
pub const BLTZ: usize = 0x00;

/// Branch on Greater Than or Equal to Zero.
pub const BGEZ: usize = 0x01;
