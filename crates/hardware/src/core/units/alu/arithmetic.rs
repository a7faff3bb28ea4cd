//! ALU arithmetic operations.
//!
//! Implements wrapping addition and subtraction, and the multiply/divide family
//! that writes the HI/LO register pair instead of a general-purpose register.

use crate::core::pipeline::signals::AluOp;

/// Number of bits in a word (used to split a 64-bit product).
const WORD_BITS: u32 = 32;

/// Result of a multiply or divide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HiLo {
    /// High product half, or remainder.
    pub hi: u32,
    /// Low product half, or quotient.
    pub lo: u32,
}

/// Executes an integer add or subtract. Overflow wraps; no trap is raised.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        _ => 0,
    }
}

/// Executes a multiply or divide.
///
/// `Mult` and `Div` treat both operands as two's-complement; `Multu` and `Divu`
/// treat them as unsigned. `i32::MIN / -1` wraps to `i32::MIN` with remainder 0.
///
/// # Returns
///
/// `None` when the divisor is zero, or when `op` is not a HI/LO producer.
pub const fn hilo(op: AluOp, a: u32, b: u32) -> Option<HiLo> {
    match op {
        AluOp::Mult => Some(split(((a as i32 as i64) * (b as i32 as i64)) as u64)),
        AluOp::Multu => Some(split((a as u64) * (b as u64))),
        AluOp::Div => {
            if b == 0 {
                return None;
            }
            let (n, d) = (a as i32, b as i32);
            Some(HiLo {
                hi: n.wrapping_rem(d) as u32,
                lo: n.wrapping_div(d) as u32,
            })
        }
        AluOp::Divu => {
            if b == 0 {
                return None;
            }
            Some(HiLo {
                hi: a % b,
                lo: a / b,
            })
        }
        _ => None,
    }
}

const fn split(product: u64) -> HiLo {
    HiLo {
        hi: (product >> WORD_BITS) as u32,
        lo: product as u32,
    }
}
