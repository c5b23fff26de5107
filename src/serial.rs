use crate::bits::get_bit;
use crate::memory::{SERIAL_CONTROL_REGISTER, SERIAL_DATA_REGISTER};
use crate::state::Archive;
use log::trace;

/// Serial port stub at $FF01/$FF02.
///
/// There is no link cable on the other end; a transfer request simply
/// captures the outgoing byte. Test ROMs print their results this way.
pub struct Serial {
    data: u8,
    control: u8,
    captured: Vec<u8>,
}

impl Serial {
    pub fn new() -> Serial {
        Serial {
            data: 0,
            control: 0,
            captured: Vec::new(),
        }
    }

    pub fn read(&self, addr: u16) -> u8 {
        match addr {
            SERIAL_DATA_REGISTER => self.data,
            SERIAL_CONTROL_REGISTER => self.control,
            _ => 0xff,
        }
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        match addr {
            SERIAL_DATA_REGISTER => self.data = value,
            SERIAL_CONTROL_REGISTER => {
                self.control = value;
                if get_bit(value, 7) {
                    trace!("Serial transfer: ${:02x}", self.data);
                    self.captured.push(self.data);
                }
            }
            _ => {}
        }
    }

    /// Everything sent so far, in order.
    pub fn captured(&self) -> &[u8] {
        &self.captured
    }

    pub fn serialize(&mut self, ar: &mut Archive) {
        ar.u8(&mut self.data);
        ar.u8(&mut self.control);
        ar.byte_vec(&mut self.captured);
    }
}

impl Default for Serial {
    fn default() -> Serial {
        Serial::new()
    }
}
