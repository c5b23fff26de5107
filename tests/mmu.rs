//! Bus dispatch, cycle accounting and the odd corners of the memory map.

mod common;

use common::{disable_lcd, gameboy_with};

#[test]
fn reads_and_writes_cost_one_m_cycle_each() {
    let mut gb = gameboy_with(&[0x00; 0x10]);
    disable_lcd(&mut gb);

    let start = gb.dots();
    gb.mmu.read(0xc000);
    assert_eq!(gb.dots() - start, 4);

    let start = gb.dots();
    gb.mmu.write(0xc000, 0x42);
    assert_eq!(gb.dots() - start, 4);

    let start = gb.dots();
    gb.mmu.read16(0xc000);
    assert_eq!(gb.dots() - start, 8);

    let start = gb.dots();
    gb.mmu.write16(0xc000, 0x1234);
    assert_eq!(gb.dots() - start, 8);
}

#[test]
fn peek_and_poke_never_move_the_clock() {
    let mut gb = gameboy_with(&[0x00; 0x10]);
    let start = gb.dots();

    gb.mmu.poke(0xc000, 0x99);
    assert_eq!(gb.mmu.peek(0xc000), 0x99);
    assert_eq!(gb.mmu.peek16(0xc000), 0x0099);
    assert_eq!(gb.dots(), start);
}

#[test]
fn sixteen_bit_accesses_are_little_endian() {
    let mut gb = gameboy_with(&[0x00; 0x10]);
    disable_lcd(&mut gb);

    gb.mmu.write16(0xc100, 0xbeef);
    assert_eq!(gb.mmu.peek(0xc100), 0xef);
    assert_eq!(gb.mmu.peek(0xc101), 0xbe);
    assert_eq!(gb.mmu.read16(0xc100), 0xbeef);
}

#[test]
fn echo_region_reads_zero_and_drops_writes() {
    let mut gb = gameboy_with(&[0x00; 0x10]);
    disable_lcd(&mut gb);

    gb.mmu.poke(0xc000, 0x55);
    assert_eq!(gb.mmu.peek(0xe000), 0x00);

    gb.mmu.poke(0xe000, 0xaa);
    assert_eq!(gb.mmu.peek(0xc000), 0x55);
}

#[test]
fn reserved_and_unmapped_addresses() {
    let mut gb = gameboy_with(&[0x00; 0x10]);

    assert_eq!(gb.mmu.peek(0xfea0), 0x00, "reserved block reads zero");
    assert_eq!(gb.mmu.peek(0xfeff), 0x00);
    assert_eq!(gb.mmu.peek(0xff03), 0xff, "unmapped I/O reads 0xff");
    assert_eq!(gb.mmu.peek(0xff4d), 0xff, "CGB registers are holes");

    gb.mmu.poke(0xff03, 0x12);
    assert_eq!(gb.mmu.peek(0xff03), 0xff);
}

#[test]
fn high_ram_round_trips() {
    let mut gb = gameboy_with(&[0x00; 0x10]);

    for addr in 0xff80..0xffffu16 {
        gb.mmu.poke(addr, addr as u8);
    }
    for addr in 0xff80..0xffffu16 {
        assert_eq!(gb.mmu.peek(addr), addr as u8);
    }
}

#[test]
fn wram_banking_through_ff70() {
    let mut gb = gameboy_with(&[0x00; 0x10]);

    gb.mmu.poke(0xff70, 2);
    gb.mmu.poke(0xd000, 0x22);

    gb.mmu.poke(0xff70, 3);
    assert_eq!(gb.mmu.peek(0xd000), 0x00);
    gb.mmu.poke(0xd000, 0x33);

    gb.mmu.poke(0xff70, 2);
    assert_eq!(gb.mmu.peek(0xd000), 0x22);

    // Bank 0 can never be mapped; it aliases bank 1
    gb.mmu.poke(0xff70, 1);
    gb.mmu.poke(0xd000, 0x11);
    gb.mmu.poke(0xff70, 0);
    assert_eq!(gb.mmu.peek(0xd000), 0x11);

    // The fixed plane is unaffected by banking
    gb.mmu.poke(0xc123, 0x77);
    gb.mmu.poke(0xff70, 5);
    assert_eq!(gb.mmu.peek(0xc123), 0x77);
}

#[test]
fn interrupt_registers_are_visible_on_the_bus() {
    let mut gb = gameboy_with(&[0x00; 0x10]);

    gb.mmu.poke(0xffff, 0x15);
    assert_eq!(gb.mmu.peek(0xffff), 0x15);

    gb.mmu.poke(0xff0f, 0x03);
    assert_eq!(gb.mmu.peek(0xff0f), 0xe0 | 0x03, "IF upper bits read as 1");

    // Only five bits exist
    gb.mmu.poke(0xff0f, 0xff);
    assert_eq!(gb.mmu.peek(0xff0f), 0xff);
    gb.mmu.poke(0xffff, 0xff);
    assert_eq!(gb.mmu.peek(0xffff), 0x1f);
}

#[test]
fn apu_stub_registers_hold_their_bytes() {
    let mut gb = gameboy_with(&[0x00; 0x10]);

    gb.mmu.poke(0xff10, 0x80);
    gb.mmu.poke(0xff26, 0x8f);
    gb.mmu.poke(0xff30, 0x12);
    gb.mmu.poke(0xff3f, 0x34);

    assert_eq!(gb.mmu.peek(0xff10), 0x80);
    assert_eq!(gb.mmu.peek(0xff26), 0x8f);
    assert_eq!(gb.mmu.peek(0xff30), 0x12);
    assert_eq!(gb.mmu.peek(0xff3f), 0x34);
}

#[test]
fn rom_writes_do_not_modify_rom() {
    let mut gb = gameboy_with(&[0x3c; 0x10]); // INC A at 0x0150
    disable_lcd(&mut gb);

    gb.mmu.write(0x0150, 0x00);
    assert_eq!(gb.mmu.peek(0x0150), 0x3c);
}
