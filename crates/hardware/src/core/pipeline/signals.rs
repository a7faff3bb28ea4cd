//! Pipeline control signals and operation types.
//!
//! This module defines the signals that steer an instruction through the stages. It performs:
//! 1. **Operation Classification:** Selects the ALU operation for the Execute stage.
//! 2. **Operand Selection:** Chooses register `rt` or the immediate as ALU operand B.
//! 3. **Memory Control:** Marks loads and stores and records their nominal width.
//! 4. **Writeback Control:** Names the destination (`rd`, `rt`, HI, LO) and its source.
//!
//! Signals are derived once from the decoded mnemonic; stages never look at
//! opcode or funct bits directly.

use serde::Serialize;

use crate::isa::decode::Mnemonic;

/// ALU operation types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum AluOp {
    /// No operation; the ALU output is zero.
    #[default]
    Nop,

    /// Wrapping addition.
    Add,

    /// Wrapping subtraction.
    Sub,

    /// Logical AND of operand truthiness (`a != 0 && b != 0`), not bitwise.
    LogicalAnd,

    /// Logical OR of operand truthiness (`a != 0 || b != 0`), not bitwise.
    LogicalOr,

    /// Bitwise XOR.
    Xor,

    /// Bitwise NOR.
    Nor,

    /// Set less than, comparing unsigned words.
    Slt,

    /// Shift left logical by `shamt`.
    Sll,

    /// Shift right logical by `shamt`.
    Srl,

    /// Shift right by `shamt`. Zero-filled, the same as `Srl`.
    Sra,

    /// Immediate shifted into the upper halfword.
    Lui,

    /// Operand A passed through unchanged (`mthi`, `mtlo`).
    PassA,

    /// Signed 64-bit product into HI/LO.
    Mult,

    /// Unsigned 64-bit product into HI/LO.
    Multu,

    /// Signed quotient into LO and remainder into HI.
    Div,

    /// Unsigned quotient into LO and remainder into HI.
    Divu,
}

impl AluOp {
    /// Returns `true` for operations that produce a HI/LO pair instead of an ALU output.
    pub const fn writes_hilo(self) -> bool {
        matches!(self, Self::Mult | Self::Multu | Self::Div | Self::Divu)
    }
}

/// Source for ALU operand B.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum OpBSrc {
    /// Use the `rt` register value.
    #[default]
    Reg,

    /// Use the zero-extended 16-bit immediate.
    Imm,
}

/// Nominal memory access width.
///
/// Every access is performed as a full word; the width is only reported in the
/// MEM trace and the pipeline view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum MemWidth {
    /// No memory operation.
    #[default]
    Nop,

    /// 8-bit byte access.
    Byte,

    /// 16-bit half-word access.
    Half,

    /// 32-bit word access.
    Word,
}

impl MemWidth {
    /// Short name used in traces and reports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nop => "-",
            Self::Byte => "byte",
            Self::Half => "half",
            Self::Word => "word",
        }
    }
}

/// Architectural destination written in Writeback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum WbDest {
    /// Nothing is written.
    #[default]
    None,

    /// General-purpose register `rd` (R-format).
    Rd,

    /// General-purpose register `rt` (I-format).
    Rt,

    /// The HI register.
    Hi,

    /// The LO register.
    Lo,
}

/// Value written to the destination in Writeback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum WbSrc {
    /// The ALU output carried through the Memory stage.
    #[default]
    Alu,

    /// The word read by the Memory stage.
    Mem,

    /// The current HI register (`mfhi`).
    Hi,

    /// The current LO register (`mflo`).
    Lo,
}

/// Control signals for pipeline stage execution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ControlSignals {
    /// ALU operation to perform.
    pub alu: AluOp,
    /// Source selection for ALU operand B.
    pub b_src: OpBSrc,
    /// Enable memory read operation (load).
    pub mem_read: bool,
    /// Enable memory write operation (store).
    pub mem_write: bool,
    /// Nominal width of the memory access.
    pub width: MemWidth,
    /// Writeback destination.
    pub wb_dest: WbDest,
    /// Writeback value source.
    pub wb_src: WbSrc,
    /// Instruction is a conditional branch.
    pub branch: bool,
    /// Instruction is an unconditional jump.
    pub jump: bool,
    /// Instruction is `syscall`.
    pub is_system: bool,
    /// Instruction is not in the modeled table.
    pub unsupported: bool,
}

impl ControlSignals {
    /// Derives the control signals for a decoded mnemonic.
    pub fn for_mnemonic(m: Mnemonic) -> Self {
        const NONE: ControlSignals = ControlSignals {
            alu: AluOp::Nop,
            b_src: OpBSrc::Reg,
            mem_read: false,
            mem_write: false,
            width: MemWidth::Nop,
            wb_dest: WbDest::None,
            wb_src: WbSrc::Alu,
            branch: false,
            jump: false,
            is_system: false,
            unsupported: false,
        };
        let r_type = |alu| Self {
            alu,
            wb_dest: WbDest::Rd,
            ..NONE
        };
        let i_type = |alu| Self {
            alu,
            b_src: OpBSrc::Imm,
            wb_dest: WbDest::Rt,
            ..NONE
        };
        let load = |width| Self {
            alu: AluOp::Add,
            b_src: OpBSrc::Imm,
            mem_read: true,
            width,
            wb_dest: WbDest::Rt,
            wb_src: WbSrc::Mem,
            ..NONE
        };
        let store = |width| Self {
            alu: AluOp::Add,
            b_src: OpBSrc::Imm,
            mem_write: true,
            width,
            ..NONE
        };
        let hilo = |alu| Self { alu, ..NONE };

        match m {
            Mnemonic::Add | Mnemonic::Addu => r_type(AluOp::Add),
            Mnemonic::Sub | Mnemonic::Subu => r_type(AluOp::Sub),
            Mnemonic::And => r_type(AluOp::LogicalAnd),
            Mnemonic::Or => r_type(AluOp::LogicalOr),
            Mnemonic::Xor => r_type(AluOp::Xor),
            Mnemonic::Nor => r_type(AluOp::Nor),
            Mnemonic::Slt => r_type(AluOp::Slt),
            Mnemonic::Sll => r_type(AluOp::Sll),
            Mnemonic::Srl => r_type(AluOp::Srl),
            Mnemonic::Sra => r_type(AluOp::Sra),
            Mnemonic::Mult => hilo(AluOp::Mult),
            Mnemonic::Multu => hilo(AluOp::Multu),
            Mnemonic::Div => hilo(AluOp::Div),
            Mnemonic::Divu => hilo(AluOp::Divu),
            Mnemonic::Mfhi => Self {
                wb_dest: WbDest::Rd,
                wb_src: WbSrc::Hi,
                ..NONE
            },
            Mnemonic::Mflo => Self {
                wb_dest: WbDest::Rd,
                wb_src: WbSrc::Lo,
                ..NONE
            },
            Mnemonic::Mthi => Self {
                alu: AluOp::PassA,
                wb_dest: WbDest::Hi,
                ..NONE
            },
            Mnemonic::Mtlo => Self {
                alu: AluOp::PassA,
                wb_dest: WbDest::Lo,
                ..NONE
            },
            Mnemonic::Addi | Mnemonic::Addiu => i_type(AluOp::Add),
            Mnemonic::Slti => i_type(AluOp::Slt),
            Mnemonic::Ori => i_type(AluOp::LogicalOr),
            Mnemonic::Xori => i_type(AluOp::Xor),
            Mnemonic::Lui => i_type(AluOp::Lui),
            Mnemonic::Lw => load(MemWidth::Word),
            Mnemonic::Lh => load(MemWidth::Half),
            Mnemonic::Lb => load(MemWidth::Byte),
            Mnemonic::Sw => store(MemWidth::Word),
            Mnemonic::Sh => store(MemWidth::Half),
            Mnemonic::Sb => store(MemWidth::Byte),
            Mnemonic::J | Mnemonic::Jal | Mnemonic::Jr | Mnemonic::Jalr => Self {
                jump: true,
                ..NONE
            },
            Mnemonic::Beq
            | Mnemonic::Bne
            | Mnemonic::Blez
            | Mnemonic::Bgtz
            | Mnemonic::Bltz
            | Mnemonic::Bgez => Self {
                branch: true,
                ..NONE
            },
            Mnemonic::Syscall => Self {
                is_system: true,
                ..NONE
            },
            Mnemonic::Unsupported => Self {
                unsupported: true,
                ..NONE
            },
        }
    }
}
