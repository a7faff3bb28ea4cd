//! MIPS Application Binary Interface (ABI) register names.
//!
//! Defines the conventional register names and the indices the simulator
//! treats specially (syscall result, link register).

/// Register `$v0` (syscall code / return value).
pub const REG_V0: usize = 2;
/// Register `$a0` (first argument).
pub const REG_A0: usize = 4;
/// Register `$ra` (return address, written by `jal`).
pub const REG_RA: usize = 31;

/// Conventional names for `$0`-`$31`, including the leading `$`.
pub const REG_NAMES: [&str; 32] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", "$t0", "$t1", "$t2", "$t3", "$t4",
    "$t5", "$t6", "$t7", "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", "$t8", "$t9",
    "$k0", "$k1", "$gp", "$sp", "$fp", "$ra",
];

/// Returns the ABI name for a register index, or `"$??"` if out of range.
#[inline]
pub fn reg_name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("$??")
}

/// Looks up a register by ABI name (`"$t0"`, `"t0"`) or number (`"$8"`, `"8"`).
pub fn parse_reg(text: &str) -> Option<usize> {
    let bare = text.trim().trim_start_matches('$');
    if let Ok(idx) = bare.parse::<usize>() {
        return (idx < REG_NAMES.len()).then_some(idx);
    }
    REG_NAMES.iter().position(|name| name[1..] == *bare)
}
