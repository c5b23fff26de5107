use crate::cartridge::Cartridge;
use crate::error::DotboyError;
use crate::joypad::Button;
use crate::lr35902::cpu::Cpu;
use crate::memory::mmu::Mmu;
use crate::state::{Archive, SliceSource, VecSink};
use crate::video::{Screen, DOTS_PER_FRAME, DOTS_PER_SCANLINE};
use log::error;

pub struct GameBoy {
    pub cpu: Cpu,
    pub mmu: Mmu,
}

impl GameBoy {
    pub fn new(rom: Vec<u8>) -> Result<GameBoy, DotboyError> {
        let cartridge = Cartridge::new(rom)?;
        Ok(GameBoy {
            cpu: Cpu::new(),
            mmu: Mmu::new(cartridge),
        })
    }

    /// Runs one CPU step. Fatal errors (STOP, unknown opcode) leave the
    /// machine in its last consistent state.
    pub fn step(&mut self) -> Result<(), DotboyError> {
        self.cpu.step(&mut self.mmu)
    }

    /// Steps until `predicate` holds or `max_dots` have elapsed. Returns
    /// whether the predicate was satisfied; fatal step errors are logged
    /// and reported as `false`.
    pub fn run_until<F>(&mut self, predicate: F, max_dots: u64) -> bool
    where
        F: Fn(&GameBoy) -> bool,
    {
        let start = self.mmu.ticks();

        while self.mmu.ticks() - start < max_dots {
            if let Err(e) = self.step() {
                error!("CPU stopped: {}", e);
                return false;
            }
            if predicate(self) {
                return true;
            }
        }

        false
    }

    pub fn run_to_next_frame(&mut self) -> bool {
        let frame = self.frame_number();
        self.run_until(
            |gb| gb.frame_number() != frame,
            DOTS_PER_FRAME as u64 * 2,
        )
    }

    pub fn run_to_next_scanline(&mut self) -> bool {
        let line = self.mmu.lcd.ly;
        self.run_until(
            |gb| gb.mmu.lcd.ly != line,
            DOTS_PER_SCANLINE as u64 * 2,
        )
    }

    /// Dots elapsed since power-on.
    pub fn dots(&self) -> u64 {
        self.mmu.ticks()
    }

    pub fn frame_number(&self) -> u64 {
        self.mmu.ppu.frame_number()
    }

    pub fn screen(&self) -> &Screen {
        &self.mmu.ppu.screen
    }

    /// Bytes captured from the serial port so far.
    pub fn serial_output(&self) -> &[u8] {
        self.mmu.serial.captured()
    }

    pub fn set_button(&mut self, button: Button, pressed: bool) {
        self.mmu.joypad.set_button(button, pressed);
    }

    /// Walks the whole machine through the archive, both directions.
    pub fn serialize(&mut self, ar: &mut Archive) {
        self.cpu.serialize(ar);
        self.mmu.serialize(ar);
    }

    /// Serialized machine state with no framing.
    pub fn save_state(&mut self) -> Vec<u8> {
        let mut sink = VecSink::new();
        self.serialize(&mut Archive::Save(&mut sink));
        sink.buffer
    }

    /// Restores a stream produced by [`save_state`](GameBoy::save_state).
    /// Streams from a different structural layout are undefined.
    pub fn load_state(&mut self, bytes: &[u8]) {
        let mut source = SliceSource::new(bytes);
        self.serialize(&mut Archive::Load(&mut source));
    }
}
