use crate::memory::mapper::{BankedState, Mapper};
use crate::state::Archive;
use log::debug;

const RAM_ENABLE_RANGE: std::ops::RangeInclusive<u16> = 0x0000..=0x1fff;
const ROM_BANK_RANGE: std::ops::RangeInclusive<u16> = 0x2000..=0x3fff;
const RAM_BANK_RANGE: std::ops::RangeInclusive<u16> = 0x4000..=0x5fff;
const BANKING_MODE_RANGE: std::ops::RangeInclusive<u16> = 0x6000..=0x7fff;

/// MBC1 in its common small-cart wiring: up to 512 KiB ROM and 32 KiB RAM,
/// so the secondary register always selects a RAM bank.
pub struct Mbc1 {
    state: BankedState,
}

impl Mbc1 {
    pub fn new(rom: Vec<u8>, ram_size: usize) -> Mbc1 {
        Mbc1 {
            state: BankedState::new(rom, ram_size),
        }
    }
}

impl Mapper for Mbc1 {
    #[inline]
    fn read_rom(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x3fff => self.state.rom[addr as usize],
            _ => self.state.read_rom_banked(addr),
        }
    }

    fn write_rom(&mut self, addr: u16, value: u8) {
        match addr {
            addr if RAM_ENABLE_RANGE.contains(&addr) => {
                self.state.ram_enabled = value & 0x0f == 0x0a;
                debug!("MBC1: RAM enabled: {}", self.state.ram_enabled);
            }
            addr if ROM_BANK_RANGE.contains(&addr) => {
                // 5-bit register; higher bits are discarded and writing 0
                // behaves as if 1 was written
                let mut selection = value & 0b0001_1111;
                if selection == 0 {
                    selection = 1;
                }
                // Mask to the bits the cart actually has, e.g. a 256 KiB
                // cart only decodes 4 bits
                selection &= (self.state.rom_banks() - 1) as u8;
                self.state.rom_bank = selection as u16;
                debug!("MBC1: Switched to ROM bank {}", self.state.rom_bank);
            }
            addr if RAM_BANK_RANGE.contains(&addr) => {
                self.state.ram_bank = value & 0b11;
                debug!("MBC1: Switched to RAM bank {}", self.state.ram_bank);
            }
            addr if BANKING_MODE_RANGE.contains(&addr) => {
                // Mode select has no observable effect on carts this small
            }
            _ => {}
        }
    }

    fn read_ram(&self, addr: u16) -> u8 {
        self.state.read_ram_banked(addr)
    }

    fn write_ram(&mut self, addr: u16, value: u8) {
        self.state.write_ram_banked(addr, value);
    }

    #[inline]
    fn rom_bank(&self) -> u16 {
        self.state.rom_bank
    }

    #[inline]
    fn name(&self) -> &'static str {
        "MBC1"
    }

    fn serialize(&mut self, ar: &mut Archive) {
        self.state.serialize(ar);
    }
}
