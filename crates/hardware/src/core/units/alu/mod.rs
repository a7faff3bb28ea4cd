//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used by the Execute stage and by the
//! single-cycle executor.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, and the HI/LO producers Mult, Multu, Div, Divu
//! - [`logic`]:      LogicalAnd, LogicalOr, Xor, Nor, Slt, Lui
//! - [`shifts`]:     Sll, Srl, Sra

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Logical and comparison operations.
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

pub use arithmetic::HiLo;

use crate::core::pipeline::signals::AluOp;

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation that produces a single 32-bit result.
    ///
    /// # Arguments
    ///
    /// * `op`    - The ALU operation to perform
    /// * `a`     - Operand A (register `rs`)
    /// * `b`     - Operand B (register `rt` or the zero-extended immediate)
    /// * `shamt` - Shift amount field, used by the shift operations
    ///
    /// # Returns
    ///
    /// The result. HI/LO producers and `Nop` return 0; use [`Alu::hilo`] for those.
    ///
    /// # Examples
    ///
    /// ```
    /// use mips_core::core::pipeline::signals::AluOp;
    /// use mips_core::core::units::alu::Alu;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, u32::MAX, 2, 0), 1);
    /// // Truthiness, not bitwise: 2 AND 1 is true.
    /// assert_eq!(Alu::execute(AluOp::LogicalAnd, 2, 1, 0), 1);
    /// // Register words are unsigned: sra shifts in zeros, slt compares unsigned.
/// assert_eq!(Alu::execute(AluOp::Sra, 0, 0x8000_0000, 4), 0x0800_0000);
/// assert_eq!(Alu::execute(AluOp::Slt, u32::MAX, 1, 0), 0);
    /// ```
    pub fn execute(op: AluOp, a: u32, b: u32, shamt: u32) -> u32 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::LogicalAnd
            | AluOp::LogicalOr
            | AluOp::Xor
            | AluOp::Nor
            | AluOp::Slt
            | AluOp::Lui => logic::execute(op, a, b),
            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, b, shamt),
            AluOp::PassA => a,
            AluOp::Nop | AluOp::Mult | AluOp::Multu | AluOp::Div | AluOp::Divu => 0,
        }
    }

    /// Executes a multiply or divide, producing a HI/LO pair.
    ///
    /// # Returns
    ///
    /// `None` for a division by zero (HI/LO must be left unchanged) and for
    /// operations that do not target HI/LO.
    pub fn hilo(op: AluOp, a: u32, b: u32) -> Option<HiLo> {
        arithmetic::hilo(op, a, b)
    }
}
