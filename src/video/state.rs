/// PPU mode as exposed through STAT bits 0..1.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Mode {
    HBlank,
    VBlank,
    OamScan,
    Drawing,
}

impl Mode {
    pub fn as_u8(self) -> u8 {
        match self {
            Mode::HBlank => 0,
            Mode::VBlank => 1,
            Mode::OamScan => 2,
            Mode::Drawing => 3,
        }
    }
}
