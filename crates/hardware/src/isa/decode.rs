//! MIPS Instruction Decoder.
//!
//! This module turns a raw 32-bit word into a `Decoded` instruction: a closed
//! `Mnemonic` tag plus the extracted `Fields`. Decoding happens once; every
//! later consumer dispatches on the tag instead of re-deriving opcode and funct.
//!
//! Words outside the modeled table decode to `Mnemonic::Unsupported`. That is
//! not an error here; the consuming stage reports it and treats it as a no-op.

use serde::Serialize;

use crate::isa::instruction::Fields;
use crate::isa::mips32::{funct, opcodes, regimm};

/// One case per modeled mnemonic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum Mnemonic {
    // R-format arithmetic and logic
    Add,
    Addu,
    Sub,
    Subu,
    And,
    Or,
    Xor,
    Nor,
    Slt,
    Sll,
    Srl,
    Sra,
    // HI/LO
    Mult,
    Multu,
    Div,
    Divu,
    Mfhi,
    Mflo,
    Mthi,
    Mtlo,
    // Register jumps and system
    Jr,
    Jalr,
    Syscall,
    // J-format
    J,
    Jal,
    // I-format arithmetic and logic
    Addi,
    Addiu,
    Slti,
    Ori,
    Xori,
    Lui,
    // Memory
    Lw,
    Lb,
    Lh,
    Sw,
    Sb,
    Sh,
    // Branches
    Bltz,
    Bgez,
    Beq,
    Bne,
    Blez,
    Bgtz,
    /// Opcode/funct combination outside the modeled table.
    #[default]
    Unsupported,
}

/// Coarse instruction category, used for statistics and stage dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum InstClass {
    /// Integer ALU operation writing a general-purpose register.
    Alu,
    /// Multiply, divide, or HI/LO move.
    MulDiv,
    /// Memory read.
    Load,
    /// Memory write.
    Store,
    /// Branch or jump.
    Control,
    /// `syscall`.
    System,
    /// Not in the modeled table.
    Unsupported,
}

impl Mnemonic {
    /// Returns the assembler name, e.g. `"addiu"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Addu => "addu",
            Self::Sub => "sub",
            Self::Subu => "subu",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Nor => "nor",
            Self::Slt => "slt",
            Self::Sll => "sll",
            Self::Srl => "srl",
            Self::Sra => "sra",
            Self::Mult => "mult",
            Self::Multu => "multu",
            Self::Div => "div",
            Self::Divu => "divu",
            Self::Mfhi => "mfhi",
            Self::Mflo => "mflo",
            Self::Mthi => "mthi",
            Self::Mtlo => "mtlo",
            Self::Jr => "jr",
            Self::Jalr => "jalr",
            Self::Syscall => "syscall",
            Self::J => "j",
            Self::Jal => "jal",
            Self::Addi => "addi",
            Self::Addiu => "addiu",
            Self::Slti => "slti",
            Self::Ori => "ori",
            Self::Xori => "xori",
            Self::Lui => "lui",
            Self::Lw => "lw",
            Self::Lb => "lb",
            Self::Lh => "lh",
            Self::Sw => "sw",
            Self::Sb => "sb",
            Self::Sh => "sh",
            Self::Bltz => "bltz",
            Self::Bgez => "bgez",
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::Blez => "blez",
            Self::Bgtz => "bgtz",
            Self::Unsupported => "unsupported",
        }
    }

    /// Returns the instruction category.
    pub const fn class(self) -> InstClass {
        match self {
            Self::Add
            | Self::Addu
            | Self::Sub
            | Self::Subu
            | Self::And
            | Self::Or
            | Self::Xor
            | Self::Nor
            | Self::Slt
            | Self::Sll
            | Self::Srl
            | Self::Sra
            | Self::Addi
            | Self::Addiu
            | Self::Slti
            | Self::Ori
            | Self::Xori
            | Self::Lui => InstClass::Alu,
            Self::Mult
            | Self::Multu
            | Self::Div
            | Self::Divu
            | Self::Mfhi
            | Self::Mflo
            | Self::Mthi
            | Self::Mtlo => InstClass::MulDiv,
            Self::Lw | Self::Lb | Self::Lh => InstClass::Load,
            Self::Sw | Self::Sb | Self::Sh => InstClass::Store,
            Self::Jr
            | Self::Jalr
            | Self::J
            | Self::Jal
            | Self::Bltz
            | Self::Bgez
            | Self::Beq
            | Self::Bne
            | Self::Blez
            | Self::Bgtz => InstClass::Control,
            Self::Syscall => InstClass::System,
            Self::Unsupported => InstClass::Unsupported,
        }
    }
}

/// A decoded instruction: the raw word, its mnemonic, and its field views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Operation selected by opcode (and funct / rt where applicable).
    pub mnemonic: Mnemonic,
    /// Extracted fields.
    pub fields: Fields,
}

impl Decoded {
    /// Shorthand for `self.mnemonic.class()`.
    pub const fn class(&self) -> InstClass {
        self.mnemonic.class()
    }

    /// Returns `true` if the word is outside the modeled table.
    pub const fn is_unsupported(&self) -> bool {
        matches!(self.mnemonic, Mnemonic::Unsupported)
    }
}

/// Decodes a 32-bit MIPS instruction.
///
/// # Arguments
///
/// * `word` - The raw instruction encoding.
///
/// # Returns
///
/// The decoded instruction. Unknown encodings yield `Mnemonic::Unsupported`.
pub fn decode(word: u32) -> Decoded {
    let fields = Fields::from_word(word);
    Decoded {
        raw: word,
        mnemonic: mnemonic_for(&fields),
        fields,
    }
}

fn mnemonic_for(f: &Fields) -> Mnemonic {
    match f.opcode {
        opcodes::OP_SPECIAL => special(f.funct),
        opcodes::OP_REGIMM => match f.rt {
            regimm::BLTZ => Mnemonic::Bltz,
            regimm::BGEZ => Mnemonic::Bgez,
            _ => Mnemonic::Unsupported,
        },
        opcodes::OP_J => Mnemonic::J,
        opcodes::OP_JAL => Mnemonic::Jal,
        opcodes::OP_BEQ => Mnemonic::Beq,
        opcodes::OP_BNE => Mnemonic::Bne,
        opcodes::OP_BLEZ => Mnemonic::Blez,
        opcodes::OP_BGTZ => Mnemonic::Bgtz,
        opcodes::OP_ADDI => Mnemonic::Addi,
        opcodes::OP_ADDIU => Mnemonic::Addiu,
        opcodes::OP_SLTI => Mnemonic::Slti,
        opcodes::OP_ORI => Mnemonic::Ori,
        opcodes::OP_XORI => Mnemonic::Xori,
        opcodes::OP_LUI => Mnemonic::Lui,
        opcodes::OP_LW => Mnemonic::Lw,
        opcodes::OP_LB => Mnemonic::Lb,
        opcodes::OP_LH => Mnemonic::Lh,
        opcodes::OP_SW => Mnemonic::Sw,
        opcodes::OP_SB => Mnemonic::Sb,
        opcodes::OP_SH => Mnemonic::Sh,
        _ => Mnemonic::Unsupported,
    }
}

const fn special(code: u32) -> Mnemonic {
    match code {
        funct::ADD => Mnemonic::Add,
        funct::ADDU => Mnemonic::Addu,
        funct::SUB => Mnemonic::Sub,
        funct::SUBU => Mnemonic::Subu,
        funct::AND => Mnemonic::And,
        funct::OR => Mnemonic::Or,
        funct::XOR => Mnemonic::Xor,
        funct::NOR => Mnemonic::Nor,
        funct::MULT => Mnemonic::Mult,
        funct::MULTU => Mnemonic::Multu,
        funct::DIV => Mnemonic::Div,
        funct::DIVU => Mnemonic::Divu,
        funct::SLT => Mnemonic::Slt,
        funct::SLL => Mnemonic::Sll,
        funct::SRL => Mnemonic::Srl,
        funct::SRA => Mnemonic::Sra,
        funct::JR => Mnemonic::Jr,
        funct::JALR => Mnemonic::Jalr,
        funct::SYSCALL => Mnemonic::Syscall,
        funct::MFHI => Mnemonic::Mfhi,
        funct::MTHI => Mnemonic::Mthi,
        funct::MFLO => Mnemonic::Mflo,
        funct::MTLO => Mnemonic::Mtlo,
        _ => Mnemonic::Unsupported,
    }
}
