use crate::bits::{combine_bytes, split_bytes};
use crate::cartridge::Cartridge;
use crate::joypad::Joypad;
use crate::lr35902::irq::Interrupts;
use crate::lr35902::timer::Timer;
use crate::memory::wram::WorkRam;
use crate::memory::{
    DIV_REGISTER, EXTERNAL_RAM_END, EXTERNAL_RAM_START, INTERRUPT_ENABLE_REGISTER,
    INTERRUPT_FLAGS_REGISTER, JOYPAD_REGISTER, OAM_DMA_REGISTER, SERIAL_CONTROL_REGISTER,
    SERIAL_DATA_REGISTER, TAC_REGISTER, WRAM_BANK_REGISTER,
};
use crate::serial::Serial;
use crate::state::Archive;
use crate::video::lcd::Lcd;
use crate::video::ppu::Ppu;

const HRAM_SIZE: usize = 0x7f;
const AUDIO_SIZE: usize = 0x17;
const WAVE_SIZE: usize = 0x10;

/// The memory bus. Owns every addressable component and the shared clock.
///
/// `read`/`write` account one M-cycle each; `peek`/`poke` are the timeless
/// paths used by debugging, OAM DMA and anything else that must not move
/// the clock.
pub struct Mmu {
    pub cartridge: Cartridge,
    pub wram: WorkRam,
    pub ppu: Ppu,
    pub lcd: Lcd,
    pub timer: Timer,
    pub joypad: Joypad,
    pub serial: Serial,
    pub interrupts: Interrupts,
    hram: Vec<u8>,
    /// APU register and wave RAM stubs; storage only, no sound
    audio: Vec<u8>,
    wave_pattern: Vec<u8>,
    /// Dots elapsed since power-on
    ticks: u64,
}

impl Mmu {
    pub fn new(cartridge: Cartridge) -> Mmu {
        Mmu {
            cartridge,
            wram: WorkRam::new(),
            ppu: Ppu::new(),
            lcd: Lcd::new(),
            timer: Timer::new(),
            joypad: Joypad::new(),
            serial: Serial::new(),
            interrupts: Interrupts::new(),
            hram: vec![0; HRAM_SIZE],
            audio: vec![0; AUDIO_SIZE],
            wave_pattern: vec![0; WAVE_SIZE],
            ticks: 0,
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advances one M-cycle: four dots for the PPU and timer, then the
    /// per-M-cycle work (OAM DMA byte, joypad edges).
    pub fn tick(&mut self) {
        for _ in 0..4 {
            self.ticks += 1;
            self.ppu.dot_tick(&mut self.lcd, &mut self.interrupts);
            self.timer.dot_tick(&mut self.interrupts);
        }

        if let Some((source, offset)) = self.ppu.dma.step() {
            let value = self.peek(source);
            self.ppu.dma_write_oam(offset, value);
        }

        self.joypad.tick(&mut self.interrupts);
    }

    pub fn read(&mut self, addr: u16) -> u8 {
        let value = self.peek(addr);
        self.tick();
        value
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        self.poke(addr, value);
        self.tick();
    }

    pub fn read16(&mut self, addr: u16) -> u16 {
        let lo = self.read(addr);
        let hi = self.read(addr.wrapping_add(1));
        combine_bytes(hi, lo)
    }

    pub fn write16(&mut self, addr: u16, value: u16) {
        let (hi, lo) = split_bytes(value);
        self.write(addr, lo);
        self.write(addr.wrapping_add(1), hi);
    }

    pub fn peek16(&self, addr: u16) -> u16 {
        combine_bytes(self.peek(addr.wrapping_add(1)), self.peek(addr))
    }

    /// Region dispatch without clock movement. The first matching region
    /// owns the address; holes read as 0xff.
    pub fn peek(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x7fff => self.cartridge.read_rom(addr),
            0x8000..=0x9fff => self.ppu.read_vram(&self.lcd, addr),
            EXTERNAL_RAM_START..=EXTERNAL_RAM_END => self.cartridge.read_ram(addr),
            0xc000..=0xdfff => self.wram.read(addr),
            // Echo RAM is reserved and reads back nothing
            0xe000..=0xfdff => 0x00,
            0xfe00..=0xfe9f => self.ppu.read_oam(&self.lcd, addr),
            0xfea0..=0xfeff => 0x00,
            JOYPAD_REGISTER => self.joypad.read(),
            SERIAL_DATA_REGISTER..=SERIAL_CONTROL_REGISTER => self.serial.read(addr),
            DIV_REGISTER..=TAC_REGISTER => self.timer.read(addr),
            INTERRUPT_FLAGS_REGISTER => self.interrupts.read_flags(),
            0xff10..=0xff26 => self.audio[addr as usize - 0xff10],
            0xff30..=0xff3f => self.wave_pattern[addr as usize - 0xff30],
            0xff40..=0xff4b => self.lcd.read(addr),
            WRAM_BANK_REGISTER => self.wram.read_bank_select(),
            0xff80..=0xfffe => self.hram[addr as usize - 0xff80],
            INTERRUPT_ENABLE_REGISTER => self.interrupts.read_enable(),
            _ => 0xff,
        }
    }

    pub fn poke(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x7fff => self.cartridge.write_rom(addr, value),
            0x8000..=0x9fff => self.ppu.write_vram(&self.lcd, addr, value),
            EXTERNAL_RAM_START..=EXTERNAL_RAM_END => self.cartridge.write_ram(addr, value),
            0xc000..=0xdfff => self.wram.write(addr, value),
            0xe000..=0xfdff => {}
            0xfe00..=0xfe9f => self.ppu.write_oam(&self.lcd, addr, value),
            0xfea0..=0xfeff => {}
            JOYPAD_REGISTER => self.joypad.write(value),
            SERIAL_DATA_REGISTER..=SERIAL_CONTROL_REGISTER => self.serial.write(addr, value),
            DIV_REGISTER..=TAC_REGISTER => self.timer.write(addr, value),
            INTERRUPT_FLAGS_REGISTER => self.interrupts.write_flags(value),
            0xff10..=0xff26 => self.audio[addr as usize - 0xff10] = value,
            0xff30..=0xff3f => self.wave_pattern[addr as usize - 0xff30] = value,
            0xff40..=0xff4b => {
                let was_enabled = self.lcd.is_enabled();
                self.lcd.write(addr, value);

                if addr == OAM_DMA_REGISTER {
                    self.ppu.dma.start(value);
                }
                if was_enabled && !self.lcd.is_enabled() {
                    self.ppu.lcd_disabled(&mut self.lcd);
                } else if !was_enabled && self.lcd.is_enabled() {
                    self.ppu.lcd_enabled(&mut self.lcd);
                }
            }
            WRAM_BANK_REGISTER => self.wram.write_bank_select(value),
            0xff80..=0xfffe => self.hram[addr as usize - 0xff80] = value,
            INTERRUPT_ENABLE_REGISTER => self.interrupts.write_enable(value),
            _ => {}
        }
    }

    pub fn serialize(&mut self, ar: &mut Archive) {
        self.cartridge.serialize(ar);
        self.wram.serialize(ar);
        self.ppu.serialize(ar);
        self.lcd.serialize(ar);
        self.timer.serialize(ar);
        self.joypad.serialize(ar);
        self.serial.serialize(ar);
        self.interrupts.serialize(ar);
        ar.span(&mut self.hram);
        ar.span(&mut self.audio);
        ar.span(&mut self.wave_pattern);
        ar.u64(&mut self.ticks);
    }
}
