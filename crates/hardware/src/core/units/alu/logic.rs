//! ALU logical and comparison operations.
//!
//! `LogicalAnd` and `LogicalOr` combine the *truthiness* of their operands and
//! yield 0 or 1. This is the modeled machine's behavior for `and`, `or` and `ori`
//! and differs from real MIPS, where these are bitwise. `Xor` and `Nor` are bitwise.
//!
//! `Slt` compares the raw register words unsigned, so `slt`/`slti` order
//! `0xFFFF_FFFF` above `1`.

use crate::core::pipeline::signals::AluOp;

/// Bit position of the upper halfword, for `Lui`.
const UPPER_HALF_SHIFT: u32 = 16;

/// Executes a logical or comparison operation.
///
/// # Returns
///
/// The 32-bit result. Returns `0` for non-logic opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::LogicalAnd => (a != 0 && b != 0) as u32,
        AluOp::LogicalOr => (a != 0 || b != 0) as u32,
        AluOp::Xor => a ^ b,
        AluOp::Nor => !(a | b),
        AluOp::Slt => (a < b) as u32,
        AluOp::Lui => b << UPPER_HALF_SHIFT,
        _ => 0,
    }
}
