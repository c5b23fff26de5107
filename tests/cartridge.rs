//! Header parsing and the mapper family, driven through the ROM/RAM
//! windows like a program would.

mod common;

use common::{boot, build_rom, build_rom_with, disable_lcd};
use dotboy::{Cartridge, DotboyError, GameBoy};

fn banked_gameboy(cartridge_type: u8, rom_size_code: u8, ram_size_code: u8) -> GameBoy {
    let mut rom = build_rom_with(cartridge_type, rom_size_code, ram_size_code, &[]);
    // Stamp every bank with its index so bank switches are observable
    for bank in 0..(2usize << rom_size_code) {
        rom[bank * 0x4000 + 0x3ffe] = (bank >> 8) as u8;
        rom[bank * 0x4000 + 0x3fff] = bank as u8;
    }
    let mut gb = GameBoy::new(rom).expect("banked ROM failed to load");
    boot(&mut gb);
    disable_lcd(&mut gb);
    gb
}

#[test]
fn header_fields_parse() {
    let rom = build_rom_with(0x13, 0x02, 0x03, &[]);
    let cartridge = Cartridge::new(rom).unwrap();

    assert_eq!(cartridge.header.title, "TEST");
    assert_eq!(cartridge.header.cartridge_type, 0x13);
    assert_eq!(cartridge.header.rom_banks(), 8);
    assert_eq!(cartridge.header.ram_size(), 32 * 1024);
    assert_eq!(cartridge.mapper_name(), "MBC3");
}

#[test]
fn undersized_images_are_rejected() {
    match Cartridge::new(vec![0u8; 0x100]) {
        Err(DotboyError::CartridgeTooSmall { size }) => assert_eq!(size, 0x100),
        other => panic!("expected CartridgeTooSmall, got {:?}", other.is_ok()),
    }
}

#[test]
fn recognized_but_unimplemented_mappers_are_rejected() {
    for code in [0x05, 0x06, 0x0b, 0x20, 0x22, 0xfc, 0xfe, 0xff] {
        let rom = build_rom_with(code, 0, 0, &[]);
        assert!(
            matches!(
                Cartridge::new(rom),
                Err(DotboyError::UnsupportedCartridgeType { code: c }) if c == code
            ),
            "type ${:02x} must be rejected",
            code
        );
    }
}

#[test]
fn mapper_selection_by_type_byte() {
    for (code, name) in [(0x00, "ROM"), (0x01, "MBC1"), (0x0f, "MBC3"), (0x1e, "MBC5")] {
        let cartridge = Cartridge::new(build_rom_with(code, 0x02, 0x02, &[])).unwrap();
        assert_eq!(cartridge.mapper_name(), name);
    }
}

#[test]
fn plain_rom_ignores_bank_switches() {
    let mut gb = banked_gameboy(0x00, 0x00, 0x00);

    gb.mmu.write(0x2000, 0x02);
    assert_eq!(gb.mmu.peek(0x7fff), 0x01, "window stays on bank 1");
}

#[test]
fn mbc1_selects_banks_and_masks_to_the_cart_size() {
    // 8 banks
    let mut gb = banked_gameboy(0x01, 0x02, 0x00);

    assert_eq!(gb.mmu.peek(0x3fff), 0x00, "fixed window is bank 0");
    assert_eq!(gb.mmu.peek(0x7fff), 0x01, "switchable window starts at 1");

    gb.mmu.write(0x2000, 0x05);
    assert_eq!(gb.mmu.peek(0x7fff), 0x05);

    // Writing 0 behaves as if 1 was written
    gb.mmu.write(0x2000, 0x00);
    assert_eq!(gb.mmu.peek(0x7fff), 0x01);

    // Bits above the cart size are discarded: 0x1d & 0x07 = 5
    gb.mmu.write(0x2000, 0x1d);
    assert_eq!(gb.mmu.peek(0x7fff), 0x05);
}

#[test]
fn mbc1_ram_is_gated_by_the_enable_latch() {
    let mut gb = banked_gameboy(0x03, 0x02, 0x03);

    assert_eq!(gb.mmu.peek(0xa000), 0xff, "disabled RAM reads 0xff");
    gb.mmu.write(0xa000, 0x42);

    gb.mmu.write(0x0000, 0x0a);
    assert_eq!(gb.mmu.peek(0xa000), 0x00, "dropped write left no trace");

    gb.mmu.write(0xa000, 0x42);
    assert_eq!(gb.mmu.peek(0xa000), 0x42);

    // Any low nibble other than 0xa disables again
    gb.mmu.write(0x0000, 0x00);
    assert_eq!(gb.mmu.peek(0xa000), 0xff);

    gb.mmu.write(0x0000, 0x1a);
    assert_eq!(gb.mmu.peek(0xa000), 0x42, "contents survive the gate");
}

#[test]
fn mbc1_ram_banking() {
    let mut gb = banked_gameboy(0x03, 0x02, 0x03); // 32 KiB RAM
    gb.mmu.write(0x0000, 0x0a);

    gb.mmu.write(0x4000, 0x00);
    gb.mmu.write(0xa000, 0x10);
    gb.mmu.write(0x4000, 0x03);
    gb.mmu.write(0xa000, 0x13);

    gb.mmu.write(0x4000, 0x00);
    assert_eq!(gb.mmu.peek(0xa000), 0x10);
    gb.mmu.write(0x4000, 0x03);
    assert_eq!(gb.mmu.peek(0xa000), 0x13);
}

#[test]
fn mbc3_seven_bit_banking() {
    // 64 banks
    let mut gb = banked_gameboy(0x11, 0x05, 0x00);

    gb.mmu.write(0x2000, 0x3f);
    assert_eq!(gb.mmu.peek(0x7fff), 0x3f);

    gb.mmu.write(0x2000, 0x00);
    assert_eq!(gb.mmu.peek(0x7fff), 0x01);
}

#[test]
fn mbc3_rtc_latch_presents_plausible_values() {
    let mut gb = banked_gameboy(0x10, 0x02, 0x03);
    gb.mmu.write(0x0000, 0x0a);

    // Latch: write 0x00 then 0x01
    gb.mmu.write(0x6000, 0x00);
    gb.mmu.write(0x6000, 0x01);

    gb.mmu.write(0x4000, 0x08); // seconds register
    assert!(gb.mmu.peek(0xa000) < 60);
    gb.mmu.write(0x4000, 0x09); // minutes
    assert!(gb.mmu.peek(0xa000) < 60);
    gb.mmu.write(0x4000, 0x0a); // hours
    assert!(gb.mmu.peek(0xa000) < 24);

    // RTC register writes are dropped, RAM banks still work
    gb.mmu.write(0xa000, 0x99);
    gb.mmu.write(0x4000, 0x00);
    gb.mmu.write(0xa000, 0x55);
    assert_eq!(gb.mmu.peek(0xa000), 0x55);
}

#[test]
fn mbc5_nine_bit_banking_keeps_bank_zero() {
    // 512 banks so bit 8 is addressable
    let mut gb = banked_gameboy(0x19, 0x08, 0x00);

    gb.mmu.write(0x2000, 0x06);
    assert_eq!(gb.mmu.peek(0x7fff), 0x06);

    // MBC5 does not remap bank 0
    gb.mmu.write(0x2000, 0x00);
    assert_eq!(gb.mmu.peek(0x7fff), 0x00);
    assert_eq!(gb.mmu.peek(0x7ffe), 0x00);

    // Bit 8 register leaves the low byte alone
    gb.mmu.write(0x2000, 0x03);
    gb.mmu.write(0x3000, 0x01);
    assert_eq!(gb.mmu.peek(0x7fff), 0x03);
    assert_eq!(gb.mmu.peek(0x7ffe), 0x01, "bank 0x103 selected");

    gb.mmu.write(0x3000, 0x00);
    assert_eq!(gb.mmu.peek(0x7ffe), 0x00);
    assert_eq!(gb.mmu.peek(0x7fff), 0x03);
}

#[test]
fn mbc5_ram_banks_up_to_sixteen() {
    let mut gb = banked_gameboy(0x1a, 0x02, 0x05); // 64 KiB RAM
    gb.mmu.write(0x0000, 0x0a);

    for bank in 0..8u8 {
        gb.mmu.write(0x4000, bank);
        gb.mmu.write(0xa000, 0x40 + bank);
    }
    for bank in 0..8u8 {
        gb.mmu.write(0x4000, bank);
        assert_eq!(gb.mmu.peek(0xa000), 0x40 + bank);
    }
}

#[test]
fn carts_without_ram_read_open_bus() {
    let mut gb = banked_gameboy(0x01, 0x02, 0x00);
    gb.mmu.write(0x0000, 0x0a);
    gb.mmu.write(0xa000, 0x77);
    assert_eq!(gb.mmu.peek(0xa000), 0xff);
}

#[test]
fn program_execution_comes_from_the_selected_bank() {
    // Put INC A at the top of bank 2 and jump there
    let mut rom = build_rom_with(0x01, 0x02, 0x00, &[]);
    rom[2 * 0x4000] = 0x3c; // INC A at bank 2, offset 0
    rom[2 * 0x4000 + 1] = 0x3c;

    let mut gb = GameBoy::new(rom).expect("ROM failed to load");
    boot(&mut gb);
    disable_lcd(&mut gb);

    gb.mmu.write(0x2000, 0x02);
    gb.cpu.registers.pc = 0x4000;
    let a = gb.cpu.registers.a;
    gb.step().unwrap();
    gb.step().unwrap();
    assert_eq!(gb.cpu.registers.a, a.wrapping_add(2));
}

#[test]
fn checksum_helper_matches_the_builder() {
    let rom = build_rom(&[]);
    assert_eq!(
        dotboy::cartridge::CartridgeHeader::computed_checksum(&rom),
        rom[0x014d]
    );
}
