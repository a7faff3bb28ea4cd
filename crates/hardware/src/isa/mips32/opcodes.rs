//! MIPS32 Primary Opcodes.
//!
//! Defines the major opcodes (bits 31-26) of the modeled instruction subset.

/// R-format instructions; the operation is selected by `funct`.
pub const OP_SPECIAL: u32 = 0x00;

/// Sign-test branches (BLTZ, BGEZ); the operation is selected by `rt`.
pub const OP_REGIMM: u32 = 0x01;

/// Jump (J).
pub const OP_J: u32 = 0x02;

/// Jump and Link (JAL).
pub const OP_JAL: u32 = 0x03;

/// Branch on Equal (BEQ).
pub const OP_BEQ: u32 = 0x04;

/// Branch on Not Equal (BNE).
pub const OP_BNE: u32 = 0x05;

/// Branch on Less Than or Equal to Zero (BLEZ).
pub const OP_BLEZ: u32 = 0x06;

/// Branch on Greater Than Zero (BGTZ).
pub const OP_BGTZ: u32 = 0x07;

/// Add Immediate (ADDI).
pub const OP_ADDI: u32 = 0x08;

/// Add Immediate Unsigned (ADDIU).
pub const OP_ADDIU: u32 = 0x09;

/// Set on Less Than Immediate (SLTI).
pub const OP_SLTI: u32 = 0x0A;

/// OR Immediate (ORI).
pub const OP_ORI: u32 = 0x0D;

/// XOR Immediate (XORI).
pub const OP_XORI: u32 = 0x0E;

/// Load Upper Immediate (LUI).
pub const OP_LUI: u32 = 0x0F;

/// Load Word (LW).
pub const OP_LW: u32 = 0x23;

/// Store Byte (SB).
pub const OP_SB: u32 = 0x28;

/// Store Halfword (SH).
pub const OP_SH: u32 = 0x29;

/// Store Word (SW).
pub const OP_SW: u32 = 0x2B;

/// Load Byte (LB).
///
/// The MU-MIPS toolchain assigns 0x32 rather than the architectural 0x20.
pub const OP_LB: u32 = 0x32;

/// Load Halfword (LH).
///
/// The MU-MIPS toolchain assigns 0x36 rather than the architectural 0x21.
pub const OP_LH: u32 = 0x36;
