//! Exhaustive flag semantics for the 8-bit arithmetic group, plus the
//! corner cases around DAA, rotates and the SP-relative adds.

mod common;

use common::{disable_lcd, gameboy_with, PROGRAM_START};
use dotboy::GameBoy;

const FLAG_Z: u8 = 0x80;
const FLAG_N: u8 = 0x40;
const FLAG_C: u8 = 0x10;

fn flags(z: bool, n: bool, h: bool, c: bool) -> u8 {
    (z as u8) << 7 | (n as u8) << 6 | (h as u8) << 5 | (c as u8) << 4
}

/// Machine looping on a single `<op> A,B` instruction.
fn alu_harness(opcode: u8) -> GameBoy {
    let mut gb = gameboy_with(&[opcode]);
    disable_lcd(&mut gb);
    gb
}

/// Runs `<op> A,B` once with the given inputs and returns (A, F).
fn run_alu(gb: &mut GameBoy, a: u8, b: u8, carry_in: bool) -> (u8, u8) {
    gb.cpu.registers.pc = PROGRAM_START;
    gb.cpu.registers.a = a;
    gb.cpu.registers.b = b;
    gb.cpu.registers.f =
        dotboy::lr35902::registers::Flags::from_bits_truncate(if carry_in { FLAG_C } else { 0 });
    gb.step().expect("ALU instruction failed");
    (gb.cpu.registers.a, gb.cpu.registers.f.bits())
}

#[test]
fn add_flag_rules_hold_for_all_inputs() {
    let mut gb = alu_harness(0x80); // ADD A,B
    for a in 0..=255u8 {
        for b in 0..=255u8 {
            let (result, f) = run_alu(&mut gb, a, b, false);
            let sum = a as u16 + b as u16;
            assert_eq!(result, sum as u8);
            assert_eq!(
                f,
                flags(sum as u8 == 0, false, (a & 0xf) + (b & 0xf) > 0xf, sum > 0xff),
                "ADD {:02x},{:02x}",
                a,
                b
            );
        }
    }
}

#[test]
fn adc_includes_carry_in_both_flag_positions() {
    let mut gb = alu_harness(0x88); // ADC A,B
    for a in 0..=255u8 {
        for b in 0..=255u8 {
            for carry in [false, true] {
                let (result, f) = run_alu(&mut gb, a, b, carry);
                let sum = a as u16 + b as u16 + carry as u16;
                assert_eq!(result, sum as u8);
                assert_eq!(
                    f,
                    flags(
                        sum as u8 == 0,
                        false,
                        (a & 0xf) + (b & 0xf) + carry as u8 > 0xf,
                        sum > 0xff
                    ),
                    "ADC {:02x},{:02x},{}",
                    a,
                    b,
                    carry
                );
            }
        }
    }
}

#[test]
fn sub_flag_rules_hold_for_all_inputs() {
    let mut gb = alu_harness(0x90); // SUB A,B
    for a in 0..=255u8 {
        for b in 0..=255u8 {
            let (result, f) = run_alu(&mut gb, a, b, false);
            assert_eq!(result, a.wrapping_sub(b));
            assert_eq!(
                f,
                flags(a == b, true, (a & 0xf) < (b & 0xf), a < b),
                "SUB {:02x},{:02x}",
                a,
                b
            );
        }
    }
}

#[test]
fn sbc_includes_carry_in_both_flag_positions() {
    let mut gb = alu_harness(0x98); // SBC A,B
    for a in 0..=255u8 {
        for b in 0..=255u8 {
            for carry in [false, true] {
                let (result, f) = run_alu(&mut gb, a, b, carry);
                let diff = a as i16 - b as i16 - carry as i16;
                assert_eq!(result, diff as u8);
                assert_eq!(
                    f,
                    flags(
                        diff as u8 == 0,
                        true,
                        (((a & 0xf) as i16 - (b & 0xf) as i16 - carry as i16) < 0),
                        diff < 0
                    ),
                    "SBC {:02x},{:02x},{}",
                    a,
                    b,
                    carry
                );
            }
        }
    }
}

#[test]
fn logical_ops_fix_their_flag_columns() {
    let mut and = alu_harness(0xa0);
    let mut xor = alu_harness(0xa8);
    let mut or = alu_harness(0xb0);

    for a in [0x00u8, 0x0f, 0xf0, 0xff, 0x5a] {
        for b in [0x00u8, 0x0f, 0xa5, 0xff] {
            let (result, f) = run_alu(&mut and, a, b, true);
            assert_eq!(result, a & b);
            assert_eq!(f, flags(a & b == 0, false, true, false));

            let (result, f) = run_alu(&mut xor, a, b, true);
            assert_eq!(result, a ^ b);
            assert_eq!(f, flags(a ^ b == 0, false, false, false));

            let (result, f) = run_alu(&mut or, a, b, true);
            assert_eq!(result, a | b);
            assert_eq!(f, flags(a | b == 0, false, false, false));
        }
    }
}

#[test]
fn cp_sets_sub_flags_but_preserves_a() {
    let mut gb = alu_harness(0xb8); // CP A,B
    for (a, b) in [(0x00u8, 0x00u8), (0x10, 0x01), (0x01, 0x10), (0x42, 0x42)] {
        let (result, f) = run_alu(&mut gb, a, b, false);
        assert_eq!(result, a, "CP must leave A untouched");
        assert_eq!(f, flags(a == b, true, (a & 0xf) < (b & 0xf), a < b));
    }
}

#[test]
fn inc_dec_preserve_carry() {
    // INC B; DEC B
    let mut gb = gameboy_with(&[0x04, 0x05]);
    disable_lcd(&mut gb);

    gb.cpu.registers.b = 0x0f;
    gb.cpu.registers.f = dotboy::lr35902::registers::Flags::from_bits_truncate(FLAG_C);
    gb.step().unwrap();
    assert_eq!(gb.cpu.registers.b, 0x10);
    assert_eq!(gb.cpu.registers.f.bits(), flags(false, false, true, true));

    gb.step().unwrap();
    assert_eq!(gb.cpu.registers.b, 0x0f);
    assert_eq!(gb.cpu.registers.f.bits(), flags(false, true, true, true));
}

#[test]
fn daa_corrects_bcd_addition_and_subtraction() {
    // LD A,0x45 ; ADD A,0x38 ; DAA
    let mut gb = gameboy_with(&[0x3e, 0x45, 0xc6, 0x38, 0x27]);
    disable_lcd(&mut gb);
    gb.step().unwrap();
    gb.step().unwrap();
    assert_eq!(gb.cpu.registers.a, 0x7d);
    gb.step().unwrap();
    assert_eq!(gb.cpu.registers.a, 0x83, "0x45 + 0x38 = 0x83 in BCD");
    assert_eq!(gb.cpu.registers.f.bits() & FLAG_C, 0);

    // LD A,0x83 ; SUB A,0x38 ; DAA
    let mut gb = gameboy_with(&[0x3e, 0x83, 0xd6, 0x38, 0x27]);
    disable_lcd(&mut gb);
    gb.step().unwrap();
    gb.step().unwrap();
    gb.step().unwrap();
    assert_eq!(gb.cpu.registers.a, 0x45, "0x83 - 0x38 = 0x45 in BCD");
}

#[test]
fn rotate_a_forms_always_clear_z() {
    // LD A,0x80 ; RLCA
    let mut gb = gameboy_with(&[0x3e, 0x80, 0x07]);
    disable_lcd(&mut gb);
    gb.step().unwrap();
    gb.step().unwrap();
    assert_eq!(gb.cpu.registers.a, 0x01);
    assert_eq!(gb.cpu.registers.f.bits(), flags(false, false, false, true));

    // LD A,0x01 ; RRA with carry clear shifts to zero, Z stays clear
    let mut gb = gameboy_with(&[0x3e, 0x01, 0x1f]);
    disable_lcd(&mut gb);
    gb.cpu.registers.f = dotboy::lr35902::registers::Flags::empty();
    gb.step().unwrap();
    gb.step().unwrap();
    assert_eq!(gb.cpu.registers.a, 0x00);
    assert_eq!(gb.cpu.registers.f.bits(), flags(false, false, false, true));
}

#[test]
fn cb_shifts_take_z_from_the_result() {
    // LD A,0x01 ; SRL A
    let mut gb = gameboy_with(&[0x3e, 0x01, 0xcb, 0x3f]);
    disable_lcd(&mut gb);
    gb.step().unwrap();
    gb.step().unwrap();
    assert_eq!(gb.cpu.registers.a, 0x00);
    assert_eq!(gb.cpu.registers.f.bits(), flags(true, false, false, true));
}

#[test]
fn swap_exchanges_nibbles() {
    // LD A,0xf1 ; SWAP A
    let mut gb = gameboy_with(&[0x3e, 0xf1, 0xcb, 0x37]);
    disable_lcd(&mut gb);
    gb.step().unwrap();
    gb.step().unwrap();
    assert_eq!(gb.cpu.registers.a, 0x1f);
    assert_eq!(gb.cpu.registers.f.bits(), 0);
}

#[test]
fn bit_test_preserves_carry() {
    // LD A,0x00 ; SCF ; BIT 7,A
    let mut gb = gameboy_with(&[0x3e, 0x00, 0x37, 0xcb, 0x7f]);
    disable_lcd(&mut gb);
    gb.step().unwrap();
    gb.step().unwrap();
    gb.step().unwrap();
    assert_eq!(gb.cpu.registers.f.bits(), flags(true, false, true, true));
}

#[test]
fn add_hl_rr_leaves_z_untouched() {
    // LD HL,0x8fff ; LD BC,0x7001 ; ADD HL,BC
    let mut gb = gameboy_with(&[0x21, 0xff, 0x8f, 0x01, 0x01, 0x70, 0x09]);
    disable_lcd(&mut gb);
    gb.cpu.registers.f = dotboy::lr35902::registers::Flags::from_bits_truncate(FLAG_Z | FLAG_N);
    gb.step().unwrap();
    gb.step().unwrap();
    gb.step().unwrap();

    assert_eq!(gb.cpu.registers.read16(dotboy::lr35902::registers::R16::HL), 0x0000);
    // Z survives, N cleared, both carries set
    assert_eq!(gb.cpu.registers.f.bits(), flags(true, false, true, true));
}

#[test]
fn add_sp_e8_flags_come_from_the_low_byte() {
    // LD SP,0x00ff ; ADD SP,0x01
    let mut gb = gameboy_with(&[0x31, 0xff, 0x00, 0xe8, 0x01]);
    disable_lcd(&mut gb);
    gb.step().unwrap();
    gb.step().unwrap();
    assert_eq!(gb.cpu.registers.sp, 0x0100);
    assert_eq!(gb.cpu.registers.f.bits(), flags(false, false, true, true));

    // LD SP,0x0001 ; ADD SP,-1 lands back on 0x0000
    let mut gb = gameboy_with(&[0x31, 0x01, 0x00, 0xe8, 0xff]);
    disable_lcd(&mut gb);
    gb.step().unwrap();
    gb.step().unwrap();
    assert_eq!(gb.cpu.registers.sp, 0x0000);
    assert_eq!(gb.cpu.registers.f.bits(), flags(false, false, true, true));
}

#[test]
fn pop_af_masks_the_low_flag_bits() {
    // LD BC,0x12ff ; PUSH BC ; POP AF
    let mut gb = gameboy_with(&[0x01, 0xff, 0x12, 0xc5, 0xf1]);
    disable_lcd(&mut gb);
    gb.cpu.registers.sp = 0xd000;
    gb.step().unwrap();
    gb.step().unwrap();
    gb.step().unwrap();

    assert_eq!(gb.cpu.registers.a, 0x12);
    assert_eq!(gb.cpu.registers.f.bits(), 0xf0);
}
