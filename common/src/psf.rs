//! PSF1 bitmap font parsing.

use crate::abi::Psf1Header;

pub const PSF1_MAGIC: [u8; 2] = [0x36, 0x04];

const HEADER_LEN: usize = 4;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FontError {
    /// The first two bytes differ from the PSF1 magic pair.
    BadMagic,
    /// The stream is shorter than header + glyph table.
    Truncated,
}

/// Parses a PSF1 container, returning the header and the borrowed glyph
/// table of exactly `char_size * glyph_count` bytes. Trailing bytes
/// (Unicode tables in mode 2 fonts) are ignored.
pub fn parse(bytes: &[u8]) -> Result<(Psf1Header, &[u8]), FontError> {
    if bytes.len() < HEADER_LEN {
        return Err(FontError::Truncated);
    }
    if bytes[0] != PSF1_MAGIC[0] || bytes[1] != PSF1_MAGIC[1] {
        return Err(FontError::BadMagic);
    }
    let header = Psf1Header {
        magic: [bytes[0], bytes[1]],
        mode: bytes[2],
        char_size: bytes[3],
    };
    let glyph_len = header.glyph_table_len();
    let rest = &bytes[HEADER_LEN..];
    if rest.len() < glyph_len {
        return Err(FontError::Truncated);
    }
    Ok((header, &rest[..glyph_len]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn font_bytes(mode: u8, char_size: u8) -> Vec<u8> {
        let count = if mode == 1 { 512 } else { 256 };
        let mut v = vec![PSF1_MAGIC[0], PSF1_MAGIC[1], mode, char_size];
        v.extend((0..char_size as usize * count).map(|i| i as u8));
        v
    }

    #[test]
    fn accepts_valid_header() {
        let bytes = font_bytes(0, 16);
        let (header, glyphs) = parse(&bytes).unwrap();
        assert_eq!(header.char_size, 16);
        assert_eq!(header.glyph_count(), 256);
        assert_eq!(glyphs.len(), 16 * 256);
    }

    #[test]
    fn mode_one_selects_512_glyphs() {
        let bytes = font_bytes(1, 8);
        let (header, glyphs) = parse(&bytes).unwrap();
        assert_eq!(header.glyph_count(), 512);
        assert_eq!(glyphs.len(), 8 * 512);
    }

    #[test]
    fn bad_magic_iff_first_two_bytes_differ() {
        let mut bytes = font_bytes(0, 16);
        bytes[0] = 0x37;
        assert_eq!(parse(&bytes), Err(FontError::BadMagic));

        let mut bytes = font_bytes(0, 16);
        bytes[1] = 0x05;
        assert_eq!(parse(&bytes), Err(FontError::BadMagic));

        // Correct magic never reports BadMagic, whatever follows.
        let bytes = font_bytes(0, 16);
        assert!(parse(&bytes[..4]).is_err_and(|e| e != FontError::BadMagic));
    }

    #[test]
    fn short_glyph_table_is_truncated() {
        let bytes = font_bytes(0, 16);
        assert_eq!(parse(&bytes[..bytes.len() - 1]), Err(FontError::Truncated));
        assert_eq!(parse(&bytes[..3]), Err(FontError::Truncated));
    }

    #[test]
    fn parsing_is_idempotent() {
        let bytes = font_bytes(0, 16);
        let (h1, g1) = parse(&bytes).unwrap();
        let (h2, g2) = parse(&bytes).unwrap();
        assert_eq!(h1, h2);
        assert_eq!(g1, g2);
    }
}
