//! ALU Operation Tests.
//!
//! Deterministic vectors for the single-result operations and the HI/LO
//! producers, plus a wrapping property for addition.

use mips_core::core::pipeline::signals::AluOp;
use mips_core::core::units::alu::{Alu, HiLo};
use proptest::prelude::*;
use rstest::rstest;

const NEG1: u32 = -1i32 as u32;
const I32_MIN: u32 = i32::MIN as u32;

fn alu(op: AluOp, a: u32, b: u32) -> u32 {
    Alu::execute(op, a, b, 0)
}

#[rstest]
#[case(AluOp::Add, 2, 3, 5)]
#[case(AluOp::Add, u32::MAX, 1, 0)]
#[case(AluOp::Sub, 0, 1, NEG1)]
#[case(AluOp::Sub, 10, 3, 7)]
#[case(AluOp::Xor, 0b1100, 0b1010, 0b0110)]
#[case(AluOp::Nor, 0, 0, u32::MAX)]
#[case(AluOp::Nor, 0xF0F0_F0F0, 0x0F0F_0000, 0x0000_0F0F)]
#[case(AluOp::Lui, 0, 0x1234, 0x1234_0000)]
#[case(AluOp::PassA, 42, 7, 42)]
#[case(AluOp::Nop, 42, 7, 0)]
fn single_result_ops(#[case] op: AluOp, #[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(alu(op, a, b), expected);
}

#[rstest]
#[case(0, 0, 0)]
#[case(2, 1, 1)]
#[case(0x8000_0000, 0x4000_0000, 1)]
#[case(5, 0, 0)]
fn and_is_logical(#[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(alu(AluOp::LogicalAnd, a, b), expected);
}

#[rstest]
#[case(0, 0, 0)]
#[case(0, 9, 1)]
#[case(0x10, 0x20, 1)]
fn or_is_logical(#[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(alu(AluOp::LogicalOr, a, b), expected);
}

#[rstest]
#[case(NEG1, 1, 0)]
#[case(0, NEG1, 1)]
#[case(I32_MIN, i32::MAX as u32, 0)]
#[case(2, 3, 1)]
#[case(3, 3, 0)]
fn slt_compares_unsigned(#[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(alu(AluOp::Slt, a, b), expected);
}

#[test]
fn shifts_use_rt_and_shamt() {
    assert_eq!(Alu::execute(AluOp::Sll, 0xFFFF, 1, 4), 0x10);
    assert_eq!(Alu::execute(AluOp::Srl, 0, 0x8000_0000, 31), 1);
    assert_eq!(Alu::execute(AluOp::Sra, 0, 0x4000_0000, 30), 1);
}

#[test]
fn sra_shifts_in_zeros() {
    assert_eq!(Alu::execute(AluOp::Sra, 0, 0x8000_0000, 4), 0x0800_0000);
    assert_eq!(Alu::execute(AluOp::Sra, 0, 0x8000_0000, 31), 1);
}

proptest! {
    #[test]
    fn sra_matches_srl(value in any::<u32>(), shamt in 0u32..32) {
        prop_assert_eq!(
            Alu::execute(AluOp::Sra, 0, value, shamt),
            Alu::execute(AluOp::Srl, 0, value, shamt)
        );
    }
}

#[test]
fn mult_signed_splits_product() {
    let r = Alu::hilo(AluOp::Mult, -3i32 as u32, 4).unwrap();
    assert_eq!(r, HiLo { hi: NEG1, lo: -12i32 as u32 });
}

#[test]
fn multu_unsigned_splits_product() {
    let r = Alu::hilo(AluOp::Multu, u32::MAX, 2).unwrap();
    assert_eq!(r, HiLo { hi: 1, lo: 0xFFFF_FFFE });
}

#[test]
fn div_signed_quotient_and_remainder() {
    let r = Alu::hilo(AluOp::Div, 7, -2i32 as u32).unwrap();
    assert_eq!(r, HiLo { hi: 1, lo: -3i32 as u32 });
}

#[test]
fn div_overflow_wraps() {
    let r = Alu::hilo(AluOp::Div, I32_MIN, NEG1).unwrap();
    assert_eq!(r, HiLo { hi: 0, lo: I32_MIN });
}

#[test]
fn divu_unsigned() {
    let r = Alu::hilo(AluOp::Divu, NEG1, 2).unwrap();
    assert_eq!(r, HiLo { hi: 1, lo: 0x7FFF_FFFF });
}

#[rstest]
#[case(AluOp::Div)]
#[case(AluOp::Divu)]
fn division_by_zero_yields_nothing(#[case] op: AluOp) {
    assert_eq!(Alu::hilo(op, 100, 0), None);
}

#[test]
fn hilo_ignores_other_ops() {
    assert_eq!(Alu::hilo(AluOp::Add, 1, 2), None);
    assert!(AluOp::Mult.writes_hilo());
    assert!(!AluOp::PassA.writes_hilo());
}

proptest! {
    #[test]
    fn add_wraps_mod_2_32(a in any::<u32>(), b in any::<u32>()) {
        let expected = ((u64::from(a) + u64::from(b)) % (1u64 << 32)) as u32;
        prop_assert_eq!(alu(AluOp::Add, a, b), expected);
    }

    #[test]
    fn sub_inverts_add(a in any::<u32>(), b in any::<u32>()) {
        prop_assert_eq!(alu(AluOp::Sub, alu(AluOp::Add, a, b), b), a);
    }
}
