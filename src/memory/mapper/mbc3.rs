use crate::memory::mapper::{BankedState, Mapper};
use crate::state::Archive;
use log::debug;
use std::time::{SystemTime, UNIX_EPOCH};

/// Latched snapshot of the real-time clock registers.
///
/// The MBC3 keeps ticking while latched; reads always come from the snapshot
/// taken by the last 0x00 -> 0x01 write sequence.
#[derive(Default)]
struct RtcSnapshot {
    seconds: u8,
    minutes: u8,
    hours: u8,
    days_low: u8,
    days_high: u8,
}

impl RtcSnapshot {
    fn capture() -> RtcSnapshot {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let days = now / 86_400;

        RtcSnapshot {
            seconds: (now % 60) as u8,
            minutes: (now / 60 % 60) as u8,
            hours: (now / 3_600 % 24) as u8,
            days_low: days as u8,
            days_high: (days >> 8 & 0x01) as u8,
        }
    }

    fn read(&self, register: u8) -> u8 {
        match register {
            0x08 => self.seconds,
            0x09 => self.minutes,
            0x0a => self.hours,
            0x0b => self.days_low,
            0x0c => self.days_high,
            _ => 0xff,
        }
    }

    fn serialize(&mut self, ar: &mut Archive) {
        ar.u8(&mut self.seconds);
        ar.u8(&mut self.minutes);
        ar.u8(&mut self.hours);
        ar.u8(&mut self.days_low);
        ar.u8(&mut self.days_high);
    }
}

/// MBC3: up to 2 MiB ROM, 32 KiB RAM and a battery-backed RTC.
pub struct Mbc3 {
    state: BankedState,
    rtc: RtcSnapshot,
    last_latch_write: u8,
}

impl Mbc3 {
    pub fn new(rom: Vec<u8>, ram_size: usize) -> Mbc3 {
        Mbc3 {
            state: BankedState::new(rom, ram_size),
            rtc: RtcSnapshot::default(),
            last_latch_write: 0xff,
        }
    }
}

impl Mapper for Mbc3 {
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
                debug!("MBC3: RAM and RTC enabled: {}", self.state.ram_enabled);
            }
            0x2000..=0x3fff => {
                // The whole 7 bits land in the bank register; 0 reads as 1
                let mut selection = value & 0b0111_1111;
                if selection == 0 {
                    selection = 1;
                }
                selection &= (self.state.rom_banks() - 1) as u8;
                self.state.rom_bank = selection as u16;
                debug!("MBC3: Switched to ROM bank {}", self.state.rom_bank);
            }
            0x4000..=0x5fff => {
                // 0-7 select a RAM bank, 0x08-0x0c an RTC register
                self.state.ram_bank = value & 0x0f;
            }
            0x6000..=0x7fff => {
                if self.last_latch_write == 0x00 && value == 0x01 {
                    self.rtc = RtcSnapshot::capture();
                    debug!("MBC3: Latched RTC");
                }
                self.last_latch_write = value;
            }
            _ => {}
        }
    }

    fn read_ram(&self, addr: u16) -> u8 {
        if !self.state.ram_enabled {
            return 0xff;
        }
        if self.state.ram_bank > 0x07 {
            return self.rtc.read(self.state.ram_bank);
        }
        self.state.read_ram_banked(addr)
    }

    fn write_ram(&mut self, addr: u16, value: u8) {
        if self.state.ram_bank > 0x07 {
            // RTC registers are not writable through this model
            return;
        }
        self.state.write_ram_banked(addr, value);
    }

    #[inline]
    fn rom_bank(&self) -> u16 {
        self.state.rom_bank
    }

    #[inline]
    fn name(&self) -> &'static str {
        "MBC3"
    }

    fn serialize(&mut self, ar: &mut Archive) {
        self.state.serialize(ar);
        self.rtc.serialize(ar);
        ar.u8(&mut self.last_latch_write);
    }
}
