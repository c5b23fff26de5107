use crate::memory::mapper::{BankedState, Mapper};
use crate::state::Archive;

/// Plain 32 KiB cartridge without banking hardware. Some of these still carry
/// a single 8 KiB RAM plane behind the usual enable latch.
pub struct Rom {
    state: BankedState,
}

impl Rom {
    pub fn new(rom: Vec<u8>, ram_size: usize) -> Rom {
        Rom {
            state: BankedState::new(rom, ram_size),
        }
    }
}

impl Mapper for Rom {
    fn read_rom(&self, addr: u16) -> u8 {
        self.state.rom[addr as usize % self.state.rom.len()]
    }

    fn write_rom(&mut self, addr: u16, value: u8) {
        if addr <= 0x1fff {
            self.state.ram_enabled = value & 0x0f == 0x0a;
        }
    }

    fn read_ram(&self, addr: u16) -> u8 {
        self.state.read_ram_banked(addr)
    }

    fn write_ram(&mut self, addr: u16, value: u8) {
        self.state.write_ram_banked(addr, value);
    }

    fn rom_bank(&self) -> u16 {
        1
    }

    fn name(&self) -> &'static str {
        "ROM"
    }

    fn serialize(&mut self, ar: &mut Archive) {
        self.state.serialize(ar);
    }
}
