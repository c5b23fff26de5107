use snafu::prelude::*;

#[derive(Debug, Snafu)]
pub enum DotboyError {
    #[snafu(display("Cartridge image is {} bytes, smaller than the 0x0150 byte header", size))]
    CartridgeTooSmall { size: usize },
    #[snafu(display("Unsupported cartridge type: ${:02x}", code))]
    UnsupportedCartridgeType { code: u8 },
    #[snafu(display("Unknown opcode ${:02x} at ${:04x} [{}]", opcode, pc, cpu))]
    UnknownOpcode { opcode: u8, pc: u16, cpu: String },
    #[snafu(display("STOP executed at ${:04x}", pc))]
    StopExecuted { pc: u16 },
    #[snafu(display("Rewind diff does not match the base snapshot"))]
    InconsistentStateDiff,
}
