use crate::error::DotboyError;
use crate::memory::mapper::{mbc1::Mbc1, mbc3::Mbc3, mbc5::Mbc5, rom::Rom, Mapper};
use crate::state::Archive;
use log::{info, warn};

const HEADER_END: usize = 0x0150;

/// Parsed view of the header block at 0x0100-0x014f.
pub struct CartridgeHeader {
    pub title: String,
    pub cartridge_type: u8,
    pub rom_size_code: u8,
    pub ram_size_code: u8,
    pub destination: u8,
    pub version: u8,
    pub checksum: u8,
    pub global_checksum: u16,
}

impl CartridgeHeader {
    pub fn parse(rom: &[u8]) -> Result<CartridgeHeader, DotboyError> {
        if rom.len() < HEADER_END {
            return Err(DotboyError::CartridgeTooSmall { size: rom.len() });
        }

        let title = rom[0x0134..0x0144]
            .iter()
            .take_while(|&&byte| byte != 0x00)
            .map(|&byte| byte as char)
            .collect();

        Ok(CartridgeHeader {
            title,
            cartridge_type: rom[0x0147],
            rom_size_code: rom[0x0148],
            ram_size_code: rom[0x0149],
            destination: rom[0x014a],
            version: rom[0x014c],
            checksum: rom[0x014d],
            global_checksum: (rom[0x014e] as u16) << 8 | rom[0x014f] as u16,
        })
    }

    /// Number of 16 KiB ROM banks the header claims.
    pub fn rom_banks(&self) -> u16 {
        2 << self.rom_size_code
    }

    pub fn ram_size(&self) -> usize {
        match self.ram_size_code {
            0x02 => 8 * 1024,
            0x03 => 32 * 1024,
            0x04 => 128 * 1024,
            0x05 => 64 * 1024,
            _ => 0,
        }
    }

    /// Boot ROM checksum over 0x0134-0x014c.
    pub fn computed_checksum(rom: &[u8]) -> u8 {
        let mut checksum = 0u8;
        for byte in &rom[0x0134..=0x014c] {
            checksum = checksum.wrapping_sub(*byte).wrapping_sub(1);
        }
        checksum
    }
}

pub struct Cartridge {
    pub header: CartridgeHeader,
    mapper: Box<dyn Mapper>,
}

impl Cartridge {
    pub fn new(mut rom: Vec<u8>) -> Result<Cartridge, DotboyError> {
        let header = CartridgeHeader::parse(&rom)?;

        // Images are nominally a power-of-two multiple of 32 KiB; pad short
        // or ragged files to a whole number of banks so banked reads stay
        // in bounds
        let padded = rom.len().next_multiple_of(0x4000).max(0x8000);
        if padded != rom.len() {
            warn!("Padding {} byte image to {} bytes", rom.len(), padded);
            rom.resize(padded, 0xff);
        }

        let computed = CartridgeHeader::computed_checksum(&rom);
        if computed != header.checksum {
            warn!(
                "Header checksum mismatch: computed ${:02x}, header says ${:02x}",
                computed, header.checksum
            );
        }

        let ram_size = header.ram_size();
        let mapper: Box<dyn Mapper> = match header.cartridge_type {
            0x00 => Box::new(Rom::new(rom, ram_size)),
            0x01..=0x03 => Box::new(Mbc1::new(rom, ram_size)),
            0x0f..=0x13 => Box::new(Mbc3::new(rom, ram_size)),
            0x19..=0x1e => Box::new(Mbc5::new(rom, ram_size)),
            code => return Err(DotboyError::UnsupportedCartridgeType { code }),
        };

        info!(
            "Loaded \"{}\" ({}, {} ROM banks, {} KiB RAM)",
            header.title,
            mapper.name(),
            header.rom_banks(),
            ram_size / 1024
        );

        Ok(Cartridge { header, mapper })
    }

    #[inline]
    pub fn read_rom(&self, addr: u16) -> u8 {
        self.mapper.read_rom(addr)
    }

    #[inline]
    pub fn write_rom(&mut self, addr: u16, value: u8) {
        self.mapper.write_rom(addr, value);
    }

    #[inline]
    pub fn read_ram(&self, addr: u16) -> u8 {
        self.mapper.read_ram(addr)
    }

    #[inline]
    pub fn write_ram(&mut self, addr: u16, value: u8) {
        self.mapper.write_ram(addr, value);
    }

    pub fn rom_bank(&self) -> u16 {
        self.mapper.rom_bank()
    }

    pub fn mapper_name(&self) -> &'static str {
        self.mapper.name()
    }

    pub fn serialize(&mut self, ar: &mut Archive) {
        self.mapper.serialize(ar);
    }
}
