//! Single-Cycle Executor.
//!
//! `handle_machine_instruction` fetches, decodes, executes, accesses memory, and
//! writes back one instruction atomically. It uses the same decoder, control
//! signals, and ALU as the pipeline, and additionally resolves control flow:
//! 1. **Branches:** `PC + 4 + (sign_extend(imm) << 2)` when the condition holds.
//! 2. **Jumps:** `j`/`jal` splice the 26-bit target into the upper PC bits; `jr`/`jalr` use `rs`.
//! 3. **Links:** `jal`/`jalr` store `PC + 4`. There is no delay slot.
//! 4. **System:** `syscall` writes the sentinel `0xA` into `$v0`.

use crate::common::constants::{SYSCALL_SENTINEL, WORD_SIZE};
use crate::core::Cpu;
use crate::core::pipeline::signals::{ControlSignals, OpBSrc};
use crate::core::pipeline::stages::execute::apply_hilo;
use crate::core::pipeline::stages::writeback::write_destination;
use crate::core::units::alu::Alu;
use crate::isa::abi::{REG_RA, REG_V0};
use crate::isa::decode::{Decoded, Mnemonic, decode};
use crate::isa::disasm::disassemble_at;

/// Mask of the PC bits preserved by `j`/`jal`.
const JUMP_REGION_MASK: u32 = 0xF000_0000;

/// Executes one instruction to completion against CURRENT, writing NEXT.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Behavior
///
/// - Reads the instruction at `CURRENT.pc` and sets `NEXT.pc` to the sequential
///   successor unless a taken branch or jump overrides it
/// - Loads and stores access a full word at `rs + imm` (zero-extended)
/// - Unsupported encodings are reported and skipped
/// - Exactly one instruction retires
pub fn handle_machine_instruction(cpu: &mut Cpu) {
    let pc = cpu.current.pc;
    let inst = cpu.memory.read_word(pc);
    let d = decode(inst);
    let f = d.fields;
    let ctrl = ControlSignals::for_mnemonic(d.mnemonic);
    let rs_val = cpu.current.regs.read(f.rs);
    let rt_val = cpu.current.regs.read(f.rt);
    let seq = pc.wrapping_add(WORD_SIZE);

    if cpu.trace {
        tracing::debug!("SC  pc={pc:#010x} inst={inst:#010x} {}", disassemble_at(inst, pc));
    }

    cpu.next.pc = seq;

    if ctrl.branch || ctrl.jump {
        resolve_control_flow(cpu, &d, rs_val, rt_val, seq);
    } else if ctrl.is_system {
        cpu.next.regs.write(REG_V0, SYSCALL_SENTINEL);
    } else if ctrl.unsupported {
        tracing::warn!(
            stage = "single-cycle",
            "unsupported instruction {inst:#010x} at {pc:#010x} treated as no-op"
        );
    } else {
        let b = match ctrl.b_src {
            OpBSrc::Reg => rt_val,
            OpBSrc::Imm => f.immediate,
        };
        let alu_output = if ctrl.alu.writes_hilo() {
            apply_hilo(cpu, ctrl.alu, rs_val, b, pc);
            0
        } else {
            Alu::execute(ctrl.alu, rs_val, b, f.shamt)
        };

        let mut loaded_word = 0;
        if ctrl.mem_read {
            loaded_word = cpu.memory.read_word(alu_output);
        } else if ctrl.mem_write {
            cpu.memory.write_word(alu_output, rt_val);
        }

        let written =
            write_destination(&cpu.current, &mut cpu.next, &ctrl, &f, alu_output, loaded_word);
        if cpu.trace
            && let Some((dest, value)) = written
        {
            tracing::debug!(
                "SC  pc={pc:#010x} {} {dest} <= {value:#010x}",
                d.mnemonic.name()
            );
        }
    }

    cpu.stats.retire(d.class());
}

fn resolve_control_flow(cpu: &mut Cpu, d: &Decoded, rs_val: u32, rt_val: u32, seq: u32) {
    let f = &d.fields;
    let branch_target = seq.wrapping_add_signed(f.signed_immediate() << 2);
    let jump_target = (seq & JUMP_REGION_MASK) | (f.address << 2);
    let (a, b) = (rs_val as i32, rt_val as i32);

    let taken = match d.mnemonic {
        Mnemonic::Beq => a == b,
        Mnemonic::Bne => a != b,
        Mnemonic::Blez => a <= 0,
        Mnemonic::Bgtz => a > 0,
        Mnemonic::Bltz => a < 0,
        Mnemonic::Bgez => a >= 0,
        _ => false,
    };

    match d.mnemonic {
        Mnemonic::J => cpu.next.pc = jump_target,
        Mnemonic::Jal => {
            cpu.next.regs.write(REG_RA, seq);
            cpu.next.pc = jump_target;
        }
        Mnemonic::Jr => cpu.next.pc = rs_val,
        Mnemonic::Jalr => {
            cpu.next.regs.write(f.rd, seq);
            cpu.next.pc = rs_val;
        }
        _ if taken => cpu.next.pc = branch_target,
        _ => {}
    }
}
