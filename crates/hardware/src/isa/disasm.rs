//! Instruction Disassembler for MIPS32.
//!
//! Converts a 32-bit instruction encoding into assembler syntax with ABI
//! register names, for the program listing, the pipeline view, and debug traces.
//!
//! # Usage
//!
//! ```
//! use mips_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x24040005), "addiu $a0, $zero, 0x5");
//! ```

use crate::isa::abi::reg_name;
use crate::isa::decode::{Decoded, Mnemonic, decode};

/// How branch and jump targets are rendered.
#[derive(Clone, Copy)]
enum Target {
    /// Word address unknown: branches show a signed byte offset.
    Relative,
    /// Word lives at this address: targets are resolved to absolute addresses.
    At(u32),
}

/// Disassembles a 32-bit MIPS instruction without knowing its address.
///
/// Branch targets render as a signed byte offset from the following instruction
/// (`beq $t0, $t1, -0x8`). Jump targets render as the 28-bit region offset.
/// Unsupported encodings render as `.word 0x????????`.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn disassemble(inst: u32) -> String {
    render(&decode(inst), Target::Relative)
}

/// Disassembles an instruction located at `pc`, resolving branch and jump targets.
pub fn disassemble_at(inst: u32, pc: u32) -> String {
    render(&decode(inst), Target::At(pc))
}

fn render(d: &Decoded, target: Target) -> String {
    let f = &d.fields;
    let name = d.mnemonic.name();
    let (rs, rt, rd) = (reg_name(f.rs), reg_name(f.rt), reg_name(f.rd));

    match d.mnemonic {
        Mnemonic::Add
        | Mnemonic::Addu
        | Mnemonic::Sub
        | Mnemonic::Subu
        | Mnemonic::And
        | Mnemonic::Or
        | Mnemonic::Xor
        | Mnemonic::Nor
        | Mnemonic::Slt => format!("{name} {rd}, {rs}, {rt}"),
        Mnemonic::Sll | Mnemonic::Srl | Mnemonic::Sra => {
            format!("{name} {rd}, {rt}, {}", f.shamt)
        }
        Mnemonic::Mult | Mnemonic::Multu | Mnemonic::Div | Mnemonic::Divu => {
            format!("{name} {rs}, {rt}")
        }
        Mnemonic::Mfhi | Mnemonic::Mflo => format!("{name} {rd}"),
        Mnemonic::Mthi | Mnemonic::Mtlo | Mnemonic::Jr => format!("{name} {rs}"),
        Mnemonic::Jalr if f.rd == crate::isa::abi::REG_RA => format!("jalr {rs}"),
        Mnemonic::Jalr => format!("jalr {rd}, {rs}"),
        Mnemonic::Syscall => "syscall".to_string(),
        Mnemonic::J | Mnemonic::Jal => {
            let region = match target {
                Target::Relative => 0,
                Target::At(pc) => pc.wrapping_add(4) & 0xF000_0000,
            };
            format!("{name} {:#010x}", region | (f.address << 2))
        }
        Mnemonic::Addi
        | Mnemonic::Addiu
        | Mnemonic::Slti
        | Mnemonic::Ori
        | Mnemonic::Xori => format!("{name} {rt}, {rs}, {:#x}", f.immediate),
        Mnemonic::Lui => format!("lui {rt}, {:#x}", f.immediate),
        Mnemonic::Lw
        | Mnemonic::Lb
        | Mnemonic::Lh
        | Mnemonic::Sw
        | Mnemonic::Sb
        | Mnemonic::Sh => format!("{name} {rt}, {:#x}({rs})", f.immediate),
        Mnemonic::Beq | Mnemonic::Bne => {
            format!("{name} {rs}, {rt}, {}", branch_target(d, target))
        }
        Mnemonic::Bltz | Mnemonic::Bgez | Mnemonic::Blez | Mnemonic::Bgtz => {
            format!("{name} {rs}, {}", branch_target(d, target))
        }
        Mnemonic::Unsupported => format!(".word {:#010x}", d.raw),
    }
}

fn branch_target(d: &Decoded, target: Target) -> String {
    let offset = d.fields.signed_immediate() << 2;
    match target {
        Target::Relative if offset < 0 => format!("-{:#x}", offset.unsigned_abs()),
        Target::Relative => format!("+{offset:#x}"),
        Target::At(pc) => format!(
            "{:#010x}",
            pc.wrapping_add(4).wrapping_add_signed(offset)
        ),
    }
}
