use crate::lr35902::irq::{Interrupts, Vector};
use crate::memory::registers::{LcdControl, LcdStatus};
use crate::state::Archive;
use crate::video::lcd::Lcd;
use crate::video::palette;
use crate::video::sprite::{Sprite, SpriteAttributes};
use crate::video::state::Mode;
use crate::video::tile;
use crate::video::{
    Screen, DOTS_PER_FRAME, DOTS_PER_SCANLINE, DRAWING_DOTS, OAM_ADDRESS, OAM_SCAN_DOTS,
    SCREEN_HEIGHT, SCREEN_WIDTH, TILESET_0_ADDRESS,
};
use log::trace;

const VRAM_SIZE: usize = 0x2000;
const OAM_SIZE: usize = 0xa0;
const OAM_ENTRIES: usize = 40;
const SPRITES_PER_LINE: usize = 10;

/// OAM DMA engine. A write to $FF46 arms it; after a two M-cycle delay it
/// copies one byte per M-cycle from page $XX00 into OAM.
pub struct DmaState {
    active: bool,
    start_delay: u8,
    source_page: u8,
    current_byte: u8,
}

impl DmaState {
    fn new() -> DmaState {
        DmaState {
            active: false,
            start_delay: 0,
            source_page: 0,
            current_byte: 0,
        }
    }

    pub fn start(&mut self, source_page: u8) {
        self.active = true;
        self.source_page = source_page;
        self.current_byte = 0;
        self.start_delay = 2;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advances one M-cycle; returns the (source address, OAM offset) of the
    /// byte to copy this cycle, if any.
    pub fn step(&mut self) -> Option<(u16, usize)> {
        if !self.active {
            return None;
        }

        if self.start_delay > 0 {
            self.start_delay -= 1;
            return None;
        }

        let source = (self.source_page as u16) << 8 | self.current_byte as u16;
        let offset = self.current_byte as usize;

        self.current_byte += 1;
        if self.current_byte as usize >= OAM_SIZE {
            self.active = false;
        }

        Some((source, offset))
    }

    pub fn serialize(&mut self, ar: &mut Archive) {
        ar.bool(&mut self.active);
        ar.u8(&mut self.start_delay);
        ar.u8(&mut self.source_page);
        ar.u8(&mut self.current_byte);
    }
}

pub struct Ppu {
    vram: Vec<u8>,
    oam: Vec<u8>,
    pub screen: Screen,
    pub dma: DmaState,
    /// Dot position within the current frame, in [0, 70224)
    frame_dot: u32,
    frame_number: u64,
}

impl Ppu {
    pub fn new() -> Ppu {
        Ppu {
            vram: vec![0; VRAM_SIZE],
            oam: vec![0; OAM_SIZE],
            screen: Screen::new(),
            dma: DmaState::new(),
            frame_dot: 0,
            frame_number: 0,
        }
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    pub fn frame_dot(&self) -> u32 {
        self.frame_dot
    }

    fn mode_at(frame_dot: u32) -> Mode {
        let line = frame_dot / DOTS_PER_SCANLINE;
        if line >= SCREEN_HEIGHT as u32 {
            return Mode::VBlank;
        }

        match frame_dot % DOTS_PER_SCANLINE {
            dot if dot < OAM_SCAN_DOTS => Mode::OamScan,
            dot if dot < OAM_SCAN_DOTS + DRAWING_DOTS => Mode::Drawing,
            _ => Mode::HBlank,
        }
    }

    /// Advances one dot. Mode transitions raise their interrupts here; the
    /// scanline is rendered in one go when Drawing begins.
    pub fn dot_tick(&mut self, lcd: &mut Lcd, irq: &mut Interrupts) {
        if !lcd.is_enabled() {
            return;
        }

        let old_mode = Ppu::mode_at(self.frame_dot);

        self.frame_dot += 1;
        if self.frame_dot == DOTS_PER_FRAME {
            self.frame_dot = 0;
            self.frame_number += 1;
        }

        let new_mode = Ppu::mode_at(self.frame_dot);
        let line = (self.frame_dot / DOTS_PER_SCANLINE) as u8;
        lcd.ly = line;

        if new_mode != old_mode {
            lcd.set_mode(new_mode);

            match new_mode {
                Mode::VBlank => {
                    trace!("Entering VBlank, frame {}", self.frame_number);
                    irq.request(Vector::VBlank);
                    if lcd.stat_condition(LcdStatus::MODE_1_CONDITION) {
                        irq.request(Vector::Stat);
                    }
                }
                Mode::HBlank => {
                    if lcd.stat_condition(LcdStatus::MODE_0_CONDITION) {
                        irq.request(Vector::Stat);
                    }
                }
                Mode::OamScan => {
                    if lcd.stat_condition(LcdStatus::MODE_2_CONDITION) {
                        irq.request(Vector::Stat);
                    }
                }
                Mode::Drawing => self.render_scanline(lcd, line),
            }
        }

        // LY compare fires once per new scanline
        if self.frame_dot % DOTS_PER_SCANLINE == 0 {
            let equal = lcd.ly == lcd.ly_compare;
            lcd.set_lyc_flag(equal);
            if equal && lcd.stat_condition(LcdStatus::LYC_EQ_LY_CONDITION) {
                irq.request(Vector::Stat);
            }
        }
    }

    /// Called when LCDC bit 7 is cleared. The PPU idles at the top of the
    /// frame with every memory region open.
    pub fn lcd_disabled(&mut self, lcd: &mut Lcd) {
        self.frame_dot = 0;
        lcd.ly = 0;
        lcd.set_mode(Mode::HBlank);
    }

    /// Called when LCDC bit 7 is set again; resumes from the top of the
    /// frame with the mode bits live.
    pub fn lcd_enabled(&mut self, lcd: &mut Lcd) {
        lcd.set_mode(Ppu::mode_at(self.frame_dot));
    }

    pub fn read_vram(&self, lcd: &Lcd, addr: u16) -> u8 {
        if lcd.is_enabled() && lcd.mode() == Mode::Drawing {
            return 0xff;
        }
        self.vram[addr as usize - 0x8000]
    }

    pub fn write_vram(&mut self, lcd: &Lcd, addr: u16, value: u8) {
        if lcd.is_enabled() && lcd.mode() == Mode::Drawing {
            return;
        }
        self.vram[addr as usize - 0x8000] = value;
    }

    pub fn read_oam(&self, lcd: &Lcd, addr: u16) -> u8 {
        if lcd.is_enabled() && matches!(lcd.mode(), Mode::OamScan | Mode::Drawing) {
            return 0xff;
        }
        self.oam[(addr - OAM_ADDRESS) as usize]
    }

    pub fn write_oam(&mut self, lcd: &Lcd, addr: u16, value: u8) {
        if lcd.is_enabled() && matches!(lcd.mode(), Mode::OamScan | Mode::Drawing) {
            return;
        }
        self.oam[(addr - OAM_ADDRESS) as usize] = value;
    }

    /// DMA lands in OAM regardless of the current mode.
    pub fn dma_write_oam(&mut self, offset: usize, value: u8) {
        self.oam[offset] = value;
    }

    fn vram_at(&self, addr: u16) -> u8 {
        self.vram[addr as usize - 0x8000]
    }

    fn bg_pixel(&self, lcd: &Lcd, map: u16, map_x: u8, map_y: u8) -> u8 {
        let map_index = map + map_y as u16 / 8 * 32 + map_x as u16 / 8;
        let tile_addr = lcd.tile_address(self.vram_at(map_index));

        let row = (map_y & 7) as u16;
        let lsb = self.vram_at(tile_addr + row * 2);
        let msb = self.vram_at(tile_addr + row * 2 + 1);
        tile::decode_pixel(lsb, msb, map_x & 7)
    }

    fn render_scanline(&mut self, lcd: &Lcd, line: u8) {
        let y = line as usize;
        if y >= SCREEN_HEIGHT {
            return;
        }

        // Color indices before palette translation; object priority needs
        // to know where the BG left color 0
        let mut bg_indices = [0u8; SCREEN_WIDTH];

        for x in 0..SCREEN_WIDTH {
            self.screen.set_pixel(x, y, 0);
        }

        if lcd.control.contains(LcdControl::BG_DISPLAY) {
            let map = lcd.bg_tile_map();
            let map_y = line.wrapping_add(lcd.scroll_y);

            for x in 0..SCREEN_WIDTH {
                let map_x = (x as u8).wrapping_add(lcd.scroll_x);
                let color = self.bg_pixel(lcd, map, map_x, map_y);
                bg_indices[x] = color;
                self.screen
                    .set_pixel(x, y, palette::translate(lcd.bg_palette, color));
            }

            if lcd.control.contains(LcdControl::WINDOW_DISPLAY) && line >= lcd.window_y {
                let map = lcd.window_tile_map();
                let origin = lcd.window_x as i16 - 7;
                let map_y = line - lcd.window_y;

                for x in 0..SCREEN_WIDTH {
                    let window_x = x as i16 - origin;
                    if window_x < 0 {
                        continue;
                    }
                    let color = self.bg_pixel(lcd, map, window_x as u8, map_y);
                    bg_indices[x] = color;
                    self.screen
                        .set_pixel(x, y, palette::translate(lcd.bg_palette, color));
                }
            }
        }

        if lcd.control.contains(LcdControl::OBJ_DISPLAY) {
            self.render_scanline_objects(lcd, line, &bg_indices);
        }
    }

    fn render_scanline_objects(&mut self, lcd: &Lcd, line: u8, bg_indices: &[u8; SCREEN_WIDTH]) {
        let height = lcd.object_height();
        let y = line as usize;

        // Hardware scans OAM in order and keeps the first ten hits
        let mut selected: Vec<Sprite> = (0..OAM_ENTRIES)
            .map(|index| Sprite::from_oam(&self.oam, index))
            .filter(|sprite| sprite.covers_line(line, height))
            .take(SPRITES_PER_LINE)
            .collect();

        // Lower X wins; draw back to front so it ends up on top
        selected.sort_by_key(|sprite| sprite.x);

        for sprite in selected.iter().rev() {
            let mut row = (line as i16 - (sprite.y as i16 - 16)) as u8;
            if sprite.attributes.contains(SpriteAttributes::FLIP_Y) {
                row = height - 1 - row;
            }

            let mut tile_index = sprite.tile_index;
            if height == 16 {
                tile_index &= 0xfe;
            }
            if row >= 8 {
                tile_index |= 0x01;
                row -= 8;
            }

            // Objects always use the $8000 tile addressing
            let tile_addr = TILESET_0_ADDRESS + tile_index as u16 * 16;
            let lsb = self.vram_at(tile_addr + row as u16 * 2);
            let msb = self.vram_at(tile_addr + row as u16 * 2 + 1);
            let row_pixels = tile::decode_row(lsb, msb);

            let obj_palette = if sprite.attributes.contains(SpriteAttributes::DMG_PALETTE) {
                lcd.obj_palette[1]
            } else {
                lcd.obj_palette[0]
            };

            for px in 0..8i16 {
                let screen_x = sprite.x as i16 - 8 + px;
                if !(0..SCREEN_WIDTH as i16).contains(&screen_x) {
                    continue;
                }

                let tile_x = if sprite.attributes.contains(SpriteAttributes::FLIP_X) {
                    7 - px
                } else {
                    px
                };

                let color = row_pixels[tile_x as usize];
                if color == 0 {
                    // Color 0 is transparent for objects
                    continue;
                }
                if sprite.attributes.contains(SpriteAttributes::PRIORITY)
                    && bg_indices[screen_x as usize] != 0
                {
                    continue;
                }

                self.screen
                    .set_pixel(screen_x as usize, y, palette::translate(obj_palette, color));
            }
        }
    }

    pub fn serialize(&mut self, ar: &mut Archive) {
        ar.span(&mut self.vram);
        ar.span(&mut self.oam);
        self.screen.serialize(ar);
        self.dma.serialize(ar);
        ar.u32(&mut self.frame_dot);
        ar.u64(&mut self.frame_number);
    }
}

impl Default for Ppu {
    fn default() -> Ppu {
        Ppu::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_partition_of_a_scanline() {
        assert_eq!(Ppu::mode_at(0), Mode::OamScan);
        assert_eq!(Ppu::mode_at(79), Mode::OamScan);
        assert_eq!(Ppu::mode_at(80), Mode::Drawing);
        assert_eq!(Ppu::mode_at(80 + 288), Mode::Drawing);
        assert_eq!(Ppu::mode_at(80 + 289), Mode::HBlank);
        assert_eq!(Ppu::mode_at(455), Mode::HBlank);
        assert_eq!(Ppu::mode_at(456), Mode::OamScan);
    }

    #[test]
    fn lines_144_to_153_are_vblank() {
        for line in 144..154u32 {
            assert_eq!(Ppu::mode_at(line * DOTS_PER_SCANLINE), Mode::VBlank);
            assert_eq!(Ppu::mode_at(line * DOTS_PER_SCANLINE + 455), Mode::VBlank);
        }
    }

    #[test]
    fn dma_waits_two_cycles_then_streams() {
        let mut dma = DmaState::new();
        dma.start(0xc0);

        assert_eq!(dma.step(), None);
        assert_eq!(dma.step(), None);
        assert_eq!(dma.step(), Some((0xc000, 0)));
        assert_eq!(dma.step(), Some((0xc001, 1)));

        for _ in 2..OAM_SIZE {
            assert!(dma.step().is_some());
        }
        assert!(!dma.is_active());
        assert_eq!(dma.step(), None);
    }
}
