//! ALU shift operations.
//!
//! Implements SLL, SRL, and SRA. The shifted value is operand B (register `rt`)
//! and the amount is the 5-bit `shamt` field.
//!
//! `Sra` does not replicate the sign bit; it shifts in zeros exactly like `Srl`.

use crate::core::pipeline::signals::AluOp;

/// Bit mask for the shift amount (5 bits: 0-31).
const SHAMT_MASK: u32 = 0x1f;

/// Executes a shift operation.
pub const fn execute(op: AluOp, value: u32, shamt: u32) -> u32 {
    let sh = shamt & SHAMT_MASK;
    match op {
        AluOp::Sll => value << sh,
        AluOp::Srl => value >> sh,
        AluOp::Sra => value >> sh,
        _ => 0,
    }
}
