use crate::state::Archive;
use bitflags::bitflags;

bitflags! {
    #[derive(Copy, Clone, PartialEq, Eq, Debug)]
    pub struct Flags: u8 {
        const ZERO       = 0b1000_0000;
        const SUBTRACT   = 0b0100_0000;
        const HALF_CARRY = 0b0010_0000;
        const CARRY      = 0b0001_0000;
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum R8 {
    A,
    B,
    C,
    D,
    E,
    H,
    L,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum R16 {
    AF,
    BC,
    DE,
    HL,
    SP,
}

#[derive(Clone)]
pub struct Registers {
    pub a: u8,
    pub f: Flags,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    /// Register file right after the boot ROM has handed control to the
    /// cartridge entry point.
    pub fn post_boot() -> Registers {
        Registers {
            a: 0x01,
            f: Flags::from_bits_truncate(0xb0),
            b: 0x00,
            c: 0x13,
            d: 0x00,
            e: 0xd8,
            h: 0x01,
            l: 0x4d,
            sp: 0xfffe,
            pc: 0x0100,
        }
    }

    pub fn read(&self, register: R8) -> u8 {
        match register {
            R8::A => self.a,
            R8::B => self.b,
            R8::C => self.c,
            R8::D => self.d,
            R8::E => self.e,
            R8::H => self.h,
            R8::L => self.l,
        }
    }

    pub fn write(&mut self, register: R8, value: u8) {
        match register {
            R8::A => self.a = value,
            R8::B => self.b = value,
            R8::C => self.c = value,
            R8::D => self.d = value,
            R8::E => self.e = value,
            R8::H => self.h = value,
            R8::L => self.l = value,
        }
    }

    pub fn read16(&self, register: R16) -> u16 {
        match register {
            R16::AF => (self.a as u16) << 8 | self.f.bits() as u16,
            R16::BC => (self.b as u16) << 8 | self.c as u16,
            R16::DE => (self.d as u16) << 8 | self.e as u16,
            R16::HL => (self.h as u16) << 8 | self.l as u16,
            R16::SP => self.sp,
        }
    }

    pub fn write16(&mut self, register: R16, value: u16) {
        let hi = (value >> 8) as u8;
        let lo = value as u8;

        match register {
            R16::AF => {
                self.a = hi;
                // Bits 3..0 of F do not exist on the silicon
                self.f = Flags::from_bits_truncate(lo);
            }
            R16::BC => {
                self.b = hi;
                self.c = lo;
            }
            R16::DE => {
                self.d = hi;
                self.e = lo;
            }
            R16::HL => {
                self.h = hi;
                self.l = lo;
            }
            R16::SP => self.sp = value,
        }
    }

    pub fn flag(&self, flag: Flags) -> bool {
        self.f.contains(flag)
    }

    pub fn set_flag(&mut self, flag: Flags, value: bool) {
        self.f.set(flag, value);
    }

    pub fn set_flags(&mut self, z: bool, n: bool, h: bool, c: bool) {
        let mut flags = Flags::empty();
        flags.set(Flags::ZERO, z);
        flags.set(Flags::SUBTRACT, n);
        flags.set(Flags::HALF_CARRY, h);
        flags.set(Flags::CARRY, c);
        self.f = flags;
    }

    pub fn serialize(&mut self, ar: &mut Archive) {
        ar.u8(&mut self.a);
        let mut f = self.f.bits();
        ar.u8(&mut f);
        self.f = Flags::from_bits_truncate(f);
        ar.u8(&mut self.b);
        ar.u8(&mut self.c);
        ar.u8(&mut self.d);
        ar.u8(&mut self.e);
        ar.u8(&mut self.h);
        ar.u8(&mut self.l);
        ar.u16(&mut self.sp);
        ar.u16(&mut self.pc);
    }
}

impl std::fmt::Display for Registers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "A: ${:02x}  F: ${:02x}  B: ${:02x}  C: ${:02x}  D: ${:02x}  E: ${:02x}  H: ${:02x}  L: ${:02x}  SP: ${:04x}  PC: ${:04x}",
            self.a,
            self.f.bits(),
            self.b,
            self.c,
            self.d,
            self.e,
            self.h,
            self.l,
            self.sp,
            self.pc
        )
    }
}
