//! MIPS32 SPECIAL Function Codes.
//!
//! Defines the `funct` field values (bits 5-0) for opcode `SPECIAL`.

/// Shift Left Logical.
pub const SLL: u32 = 0x00;
/// Shift Right Logical.
pub const SRL: u32 = 0x02;
/// Shift Right Arithmetic.
pub const SRA: u32 = 0x03;
/// Jump Register.
pub const JR: u32 = 0x08;
/// Jump and Link Register.
pub const JALR: u32 = 0x09;
/// System Call.
pub const SYSCALL: u32 = 0x0C;
/// Move From HI.
pub const MFHI: u32 = 0x10;
/// Move To HI.
pub const MTHI: u32 = 0x11;
/// Move From LO.
pub const MFLO: u32 = 0x12;
/// Move To LO.
pub const MTLO: u32 = 0x13;
/// Multiply (signed).
pub const MULT: u32 = 0x18;
/// Multiply Unsigned.
pub const MULTU: u32 = 0x19;
/// Divide (signed).
pub const DIV: u32 = 0x1A;
/// Divide Unsigned.
pub const DIVU: u32 = 0x1B;
/// Add.
pub const ADD: u32 = 0x20;
/// Add Unsigned.
pub const ADDU: u32 = 0x21;
/// Subtract.
pub const SUB: u32 = 0x22;
/// Subtract Unsigned.
pub const SUBU: u32 = 0x23;
/// AND.
pub const AND: u32 = 0x24;
/// OR.
pub const OR: u32 = 0x25;
/// Exclusive OR.
pub const XOR: u32 = 0x26;
/// NOR.
pub const NOR: u32 = 0x27;
/// Set on Less Than.
pub const SLT: u32 = 0x2A;
