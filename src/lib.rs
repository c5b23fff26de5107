pub mod bits;
pub mod cartridge;
pub mod error;
pub mod gameboy;
pub mod joypad;
pub mod lr35902;
pub mod memory;
pub mod rewind;
pub mod serial;
pub mod state;
pub mod video;

pub use crate::cartridge::Cartridge;
pub use crate::error::DotboyError;
pub use crate::gameboy::GameBoy;
pub use crate::joypad::Button;
pub use crate::rewind::Rewind;
pub use crate::video::{Screen, SCREEN_HEIGHT, SCREEN_WIDTH};
