use crate::error::DotboyError;
use crate::lr35902::opcodes::{self, OPCODES};
use crate::memory::mmu::Mmu;
use crate::state::Archive;
use log::{debug, trace};

pub struct Cpu {
    pub registers: crate::lr35902::registers::Registers,
    pub ime: bool,
    /// EI takes effect after the instruction that follows it.
    pub ime_scheduled: bool,
    pub halted: bool,
}

impl Cpu {
    pub fn new() -> Cpu {
        Cpu {
            registers: crate::lr35902::registers::Registers::post_boot(),
            ime: false,
            ime_scheduled: false,
            halted: false,
        }
    }

    /// Runs one instruction, one halted idle cycle, or one interrupt
    /// dispatch. All elapsed time is accounted through the bus.
    pub fn step(&mut self, mmu: &mut Mmu) -> Result<(), DotboyError> {
        if self.halted {
            mmu.tick();
            // Wakes on any unmasked request, with or without IME
            if mmu.interrupts.pending() {
                self.halted = false;
            }
            return Ok(());
        }

        if self.ime && mmu.interrupts.pending() {
            self.dispatch_interrupt(mmu);
            return Ok(());
        }

        let enable_ime_after = self.ime_scheduled;

        let pc = self.registers.pc;
        let opcode = self.fetch_u8(mmu);

        trace!(
            "[{:04x}] {:<16} [{}]",
            pc,
            opcodes::OPCODE_INFO[opcode as usize].mnemonic,
            self.registers
        );

        OPCODES[opcode as usize](self, mmu)?;

        // DI in the shadowed instruction cancels the pending enable
        if enable_ime_after && self.ime_scheduled {
            self.ime = true;
            self.ime_scheduled = false;
        }

        Ok(())
    }

    fn dispatch_interrupt(&mut self, mmu: &mut Mmu) {
        let vector = match mmu.interrupts.take_pending() {
            Some(vector) => vector,
            None => return,
        };

        debug!("Dispatching {} interrupt to ${:04x}", vector, vector.address());

        self.ime = false;

        // Two idle cycles, the PC push, then the vector load
        mmu.tick();
        mmu.tick();
        self.push_stack(mmu, self.registers.pc);
        self.registers.pc = vector.address();
        mmu.tick();
    }

    pub fn fetch_u8(&mut self, mmu: &mut Mmu) -> u8 {
        let value = mmu.read(self.registers.pc);
        self.registers.pc = self.registers.pc.wrapping_add(1);
        value
    }

    pub fn fetch_u16(&mut self, mmu: &mut Mmu) -> u16 {
        let lo = self.fetch_u8(mmu);
        let hi = self.fetch_u8(mmu);
        crate::bits::combine_bytes(hi, lo)
    }

    pub fn push_stack(&mut self, mmu: &mut Mmu, value: u16) {
        self.registers.sp = self.registers.sp.wrapping_sub(2);
        mmu.write16(self.registers.sp, value);
    }

    pub fn pop_stack(&mut self, mmu: &mut Mmu) -> u16 {
        let value = mmu.read16(self.registers.sp);
        self.registers.sp = self.registers.sp.wrapping_add(2);
        value
    }

    pub fn serialize(&mut self, ar: &mut Archive) {
        self.registers.serialize(ar);
        ar.bool(&mut self.ime);
        ar.bool(&mut self.ime_scheduled);
        ar.bool(&mut self.halted);
    }
}

impl Default for Cpu {
    fn default() -> Cpu {
        Cpu::new()
    }
}

impl std::fmt::Display for Cpu {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.registers)
    }
}
