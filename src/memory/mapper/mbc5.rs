use crate::memory::mapper::{BankedState, Mapper};
use crate::state::Archive;
use log::debug;

/// MBC5: 9-bit ROM banking up to 8 MiB. Unlike the earlier controllers,
/// writing 0 to the bank register really does map bank 0 at 0x4000.
pub struct Mbc5 {
    state: BankedState,
}

impl Mbc5 {
    pub fn new(rom: Vec<u8>, ram_size: usize) -> Mbc5 {
        Mbc5 {
            state: BankedState::new(rom, ram_size),
        }
    }
}

impl Mapper for Mbc5 {
    #[inline]
    fn read_rom(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x3fff => self.state.rom[addr as usize],
            _ => self.state.read_rom_banked(addr),
        }
    }

    fn write_rom(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1fff => {
                self.state.ram_enabled = value & 0x0f == 0x0a;
                debug!("MBC5: RAM enabled: {}", self.state.ram_enabled);
            }
            0x2000..=0x2fff => {
                self.state.rom_bank = self.state.rom_bank & 0x100 | value as u16;
                debug!("MBC5: Switched to ROM bank {}", self.state.rom_bank);
            }
            0x3000..=0x3fff => {
                self.state.rom_bank = self.state.rom_bank & 0xff | (value as u16 & 0x01) << 8;
                debug!("MBC5: Switched to ROM bank {}", self.state.rom_bank);
            }
            0x4000..=0x5fff => {
                // Bit 3 drives the rumble motor on carts that have one
                self.state.ram_bank = value & 0x0f;
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
        "MBC5"
    }

    fn serialize(&mut self, ar: &mut Archive) {
        self.state.serialize(ar);
    }
}
