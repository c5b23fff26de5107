use bitflags::bitflags;

bitflags! {
    #[derive(Copy, Clone, PartialEq, Eq, Debug)]
    pub struct SpriteAttributes: u8 {
        /// OBP0 (clear) or OBP1 (set)
        const DMG_PALETTE = 0b0001_0000;
        const FLIP_X      = 0b0010_0000;
        const FLIP_Y      = 0b0100_0000;
        /// BG and window colors 1-3 are drawn over this object
        const PRIORITY    = 0b1000_0000;
    }
}

/// One OAM entry. Y is stored as screen position + 16, X as position + 8.
#[derive(Copy, Clone)]
pub struct Sprite {
    pub y: u8,
    pub x: u8,
    pub tile_index: u8,
    pub attributes: SpriteAttributes,
}

impl Sprite {
    pub fn from_oam(oam: &[u8], index: usize) -> Sprite {
        let base = index * 4;
        Sprite {
            y: oam[base],
            x: oam[base + 1],
            tile_index: oam[base + 2],
            attributes: SpriteAttributes::from_bits_truncate(oam[base + 3]),
        }
    }

    /// True when this sprite covers scanline `line` at the given height.
    pub fn covers_line(&self, line: u8, height: u8) -> bool {
        let top = self.y as i16 - 16;
        let line = line as i16;
        line >= top && line < top + height as i16
    }
}
