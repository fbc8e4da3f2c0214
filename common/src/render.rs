//! Framebuffer text rendering over a PSF1 glyph table.

use crate::abi::{Framebuffer, Psf1Font};

pub const WHITE: u32 = 0xFFFF_FFFF;

/// Draws single-byte characters straight into the linear framebuffer.
///
/// The cursor lives in pixel coordinates. There is no scroll-back: once
/// the cursor passes the bottom row, characters are dropped silently.
pub struct TextRenderer<'a> {
    fb: &'a Framebuffer,
    font: &'a Psf1Font,
    pub cursor_x: u64,
    pub cursor_y: u64,
}

impl<'a> TextRenderer<'a> {
    /// # Safety
    ///
    /// `fb` must describe `fb.size` bytes of writable pixel memory at
    /// `fb.base`, and `font.glyphs` must cover the font's full glyph
    /// table. Both must stay valid for `'a`.
    pub unsafe fn new(fb: &'a Framebuffer, font: &'a Psf1Font) -> Self {
        debug_assert!(fb.stride >= fb.width);
        Self { fb, font, cursor_x: 0, cursor_y: 0 }
    }

    /// Carriage return rewinds the column, line feed advances one glyph
    /// row; everything else draws at the cursor. A glyph advances the
    /// cursor by `char_size / 2` pixels, the container's convention for
    /// its 8-wide glyphs; wrap checks use the same arithmetic.
    pub fn put_char(&mut self, byte: u8, color: u32) {
        let glyph_h = self.font.header.char_size as u64;
        let advance = glyph_h / 2;
        match byte {
            b'\r' => self.cursor_x = 0,
            b'\n' => self.cursor_y += glyph_h,
            _ => {
                if self.cursor_x + advance > self.fb.width {
                    self.put_char(b'\r', color);
                    self.put_char(b'\n', color);
                }
                if self.cursor_y + glyph_h < self.fb.height {
                    self.draw_glyph(byte, color);
                    self.cursor_x += advance;
                }
            }
        }
    }

    pub fn put_str(&mut self, s: &str, color: u32) {
        for byte in s.bytes() {
            self.put_char(byte, color);
        }
    }

    fn draw_glyph(&self, byte: u8, color: u32) {
        let glyph_h = self.font.header.char_size as usize;
        let cols = (glyph_h / 2).min(8);
        let base = self.fb.base as *mut u32;
        let glyph = unsafe { self.font.glyphs.add(byte as usize * glyph_h) };
        for row in 0..glyph_h {
            let bits = unsafe { glyph.add(row).read() };
            for col in 0..cols {
                if bits & (0x80 >> col) != 0 {
                    let x = self.cursor_x as usize + col;
                    let y = self.cursor_y as usize + row;
                    unsafe {
                        base.add(y * self.fb.stride as usize + x).write_volatile(color);
                    }
                }
            }
        }
    }
}
