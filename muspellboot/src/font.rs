//! PSF1 font resource loading.

use alloc::boxed::Box;
use muspell_common::abi::Psf1Font;
use muspell_common::psf;
use uefi::fs::{FileSystem, Path};

#[derive(Debug)]
pub enum FontLoadError {
    Read(uefi::fs::Error),
    Parse(psf::FontError),
}

/// Reads and parses the font file, then moves the glyph table into a
/// leaked allocation. The returned handle and its glyphs become
/// permanent kernel-owned memory.
pub fn load_font(fs: &mut FileSystem, path: &Path) -> Result<&'static Psf1Font, FontLoadError> {
    let bytes = fs.read(path).map_err(FontLoadError::Read)?;
    let (header, glyphs) = psf::parse(&bytes).map_err(FontLoadError::Parse)?;
    let glyphs: &'static [u8] = Box::leak(glyphs.to_vec().into_boxed_slice());
    let font = Box::leak(Box::new(Psf1Font {
        header,
        glyphs: glyphs.as_ptr(),
    }));
    Ok(font)
}
