//! Instruction encoding and field extraction.
//!
//! Provides bit extraction for the three MIPS formats. Every field is pulled out
//! independently by shifting and masking; nothing here checks opcode legality.
//!
//! ```text
//! R: [ opcode:6 | rs:5 | rt:5 | rd:5 | shamt:5 | funct:6 ]
//! I: [ opcode:6 | rs:5 | rt:5 |      immediate:16       ]
//! J: [ opcode:6 |            address:26                 ]
//! ```

use serde::Serialize;

/// Bit mask for a 5-bit register field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for the 6-bit opcode and funct fields.
pub const SIX_BIT_MASK: u32 = 0x3F;
/// Bit mask for the 16-bit immediate field.
pub const IMM_MASK: u32 = 0xFFFF;
/// Bit mask for the 26-bit jump address field.
pub const ADDR_MASK: u32 = 0x03FF_FFFF;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 31-26).
    fn opcode(&self) -> u32;

    /// Extracts the first source register field (bits 25-21).
    fn rs(&self) -> usize;

    /// Extracts the second source / I-format destination register field (bits 20-16).
    fn rt(&self) -> usize;

    /// Extracts the R-format destination register field (bits 15-11).
    fn rd(&self) -> usize;

    /// Extracts the shift amount field (bits 10-6).
    fn shamt(&self) -> u32;

    /// Extracts the function code field (bits 5-0).
    fn funct(&self) -> u32;

    /// Extracts the 16-bit immediate (bits 15-0).
    ///
    /// The value is zero-extended. Callers needing a signed offset (branches)
    /// must sign-extend it themselves.
    fn immediate(&self) -> u32;

    /// Extracts the 26-bit jump target field (bits 25-0).
    fn address(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> 26) & SIX_BIT_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> 21) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> 16) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 11) & REG_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> 6) & REG_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & SIX_BIT_MASK
    }

    #[inline(always)]
    fn immediate(&self) -> u32 {
        self & IMM_MASK
    }

    #[inline(always)]
    fn address(&self) -> u32 {
        self & ADDR_MASK
    }
}

/// Every field view of one instruction word.
///
/// The same bits are exposed under each format's interpretation; which fields
/// are meaningful depends on the opcode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Fields {
    /// Primary opcode.
    pub opcode: u32,
    /// First source register.
    pub rs: usize,
    /// Second source register, or I-format destination.
    pub rt: usize,
    /// R-format destination register.
    pub rd: usize,
    /// Shift amount.
    pub shamt: u32,
    /// R-format function code.
    pub funct: u32,
    /// Zero-extended 16-bit immediate.
    pub immediate: u32,
    /// 26-bit jump target.
    pub address: u32,
}

impl Fields {
    /// Extracts all fields from `word`.
    pub fn from_word(word: u32) -> Self {
        Self {
            opcode: word.opcode(),
            rs: word.rs(),
            rt: word.rt(),
            rd: word.rd(),
            shamt: word.shamt(),
            funct: word.funct(),
            immediate: word.immediate(),
            address: word.address(),
        }
    }

    /// Returns the immediate sign-extended to 32 bits.
    #[inline]
    pub const fn signed_immediate(&self) -> i32 {
        self.immediate as u16 as i16 as i32
    }
}

impl From<u32> for Fields {
    fn from(word: u32) -> Self {
        Self::from_word(word)
    }
}
