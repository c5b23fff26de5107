use crate::state::Archive;
use bitflags::bitflags;

bitflags! {
    #[derive(Copy, Clone, PartialEq, Eq, Debug)]
    pub struct InterruptFlags: u8 {
        const VBLANK = 0b00001;
        const STAT   = 0b00010;
        const TIMER  = 0b00100;
        const SERIAL = 0b01000;
        const JOYPAD = 0b10000;
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Vector {
    VBlank,
    Stat,
    Timer,
    Serial,
    Joypad,
}

impl Vector {
    pub fn flag(self) -> InterruptFlags {
        match self {
            Vector::VBlank => InterruptFlags::VBLANK,
            Vector::Stat => InterruptFlags::STAT,
            Vector::Timer => InterruptFlags::TIMER,
            Vector::Serial => InterruptFlags::SERIAL,
            Vector::Joypad => InterruptFlags::JOYPAD,
        }
    }

    pub fn address(self) -> u16 {
        match self {
            Vector::VBlank => 0x0040,
            Vector::Stat => 0x0048,
            Vector::Timer => 0x0050,
            Vector::Serial => 0x0058,
            Vector::Joypad => 0x0060,
        }
    }
}

impl std::fmt::Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Vector::VBlank => write!(f, "VBLANK"),
            Vector::Stat => write!(f, "STAT"),
            Vector::Timer => write!(f, "TIMER"),
            Vector::Serial => write!(f, "SERIAL"),
            Vector::Joypad => write!(f, "JOYPAD"),
        }
    }
}

/// IF/IE register pair.
///
/// Every interrupt producer (PPU, timer, joypad, serial) gets a `&mut
/// Interrupts` during its tick instead of a back-reference to the CPU.
pub struct Interrupts {
    pub flags: InterruptFlags,
    pub enable: InterruptFlags,
}

impl Interrupts {
    pub fn new() -> Interrupts {
        Interrupts {
            flags: InterruptFlags::empty(),
            enable: InterruptFlags::empty(),
        }
    }

    pub fn request(&mut self, vector: Vector) {
        self.flags |= vector.flag();
    }

    pub fn pending(&self) -> bool {
        !(self.flags & self.enable).is_empty()
    }

    /// Pops the lowest-numbered pending interrupt, clearing its IF bit.
    pub fn take_pending(&mut self) -> Option<Vector> {
        let pending = self.flags & self.enable;
        let vector = [
            Vector::VBlank,
            Vector::Stat,
            Vector::Timer,
            Vector::Serial,
            Vector::Joypad,
        ]
        .into_iter()
        .find(|vector| pending.contains(vector.flag()))?;

        self.flags &= !vector.flag();
        Some(vector)
    }

    /// CPU-visible IF byte. The top three bits are unwired and read as 1.
    pub fn read_flags(&self) -> u8 {
        0xe0 | self.flags.bits()
    }

    pub fn write_flags(&mut self, value: u8) {
        self.flags = InterruptFlags::from_bits_truncate(value);
    }

    pub fn read_enable(&self) -> u8 {
        self.enable.bits()
    }

    pub fn write_enable(&mut self, value: u8) {
        self.enable = InterruptFlags::from_bits_truncate(value);
    }

    pub fn serialize(&mut self, ar: &mut Archive) {
        let mut flags = self.flags.bits();
        let mut enable = self.enable.bits();
        ar.u8(&mut flags);
        ar.u8(&mut enable);
        self.flags = InterruptFlags::from_bits_truncate(flags);
        self.enable = InterruptFlags::from_bits_truncate(enable);
    }
}

impl Default for Interrupts {
    fn default() -> Interrupts {
        Interrupts::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowest_numbered_interrupt_wins() {
        let mut irq = Interrupts::new();
        irq.write_enable(0x1f);
        irq.request(Vector::Timer);
        irq.request(Vector::VBlank);

        assert_eq!(irq.take_pending(), Some(Vector::VBlank));
        assert_eq!(irq.take_pending(), Some(Vector::Timer));
        assert_eq!(irq.take_pending(), None);
    }

    #[test]
    fn masked_interrupts_stay_pending_in_flags() {
        let mut irq = Interrupts::new();
        irq.request(Vector::Joypad);

        assert!(!irq.pending());
        assert_eq!(irq.take_pending(), None);
        assert_eq!(irq.read_flags() & 0x1f, InterruptFlags::JOYPAD.bits());
    }
}
