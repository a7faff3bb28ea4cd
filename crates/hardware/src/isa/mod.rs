//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the encoding tables, field extraction, and decoding logic for the
//! modeled MIPS32 integer subset, plus register naming and disassembly.
//!
//! # Modules
//!
//! * `instruction`: Bit-field extraction (`InstructionBits`, `Fields`).
//! * `mips32`: Opcode, funct, and REGIMM constants.
//! * `decode`: Word to `Decoded { mnemonic, fields }`.
//! * `abi`: Register names.
//! * `disasm`: Assembler-syntax rendering.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Instruction decoding into a closed mnemonic type.
pub mod decode;

/// Instruction disassembler for listings, the pipeline view, and tracing.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// MIPS32 integer encoding constants.
pub mod mips32;

pub use decode::{Decoded, InstClass, Mnemonic, decode};
pub use instruction::{Fields, InstructionBits};
