//! The loader→kernel handoff layout.
//!
//! Every struct here crosses the control transfer by address with no
//! versioning or schema negotiation, so field order and sizes must stay
//! bit-identical between both sides. Keep everything `#[repr(C)]` with
//! fixed-size integers.

/// Pixel channel order of the linear framebuffer.
#[repr(u32)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PixelLayout {
    /// Red in the lowest byte, then green, blue, reserved.
    Rgbx = 0,
    /// Blue in the lowest byte, then green, red, reserved.
    Bgrx = 1,
}

/// Linear framebuffer descriptor, produced once by the loader from the
/// active graphics mode. All geometry is firmware-reported; nothing
/// downstream may recompute it. `stride` is in pixels and may exceed
/// `width` due to scanline padding.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Framebuffer {
    pub base: u64,
    pub size: u64,
    pub width: u64,
    pub height: u64,
    pub stride: u64,
    pub layout: PixelLayout,
}

/// PSF1 container header. Glyphs are 8 pixels wide (one byte per row),
/// `char_size` rows tall.
#[repr(C)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Psf1Header {
    pub magic: [u8; 2],
    pub mode: u8,
    pub char_size: u8,
}

impl Psf1Header {
    /// Glyph count is derived solely from the mode flag.
    pub fn glyph_count(&self) -> usize {
        if self.mode == 1 { 512 } else { 256 }
    }

    pub fn glyph_table_len(&self) -> usize {
        self.char_size as usize * self.glyph_count()
    }
}

/// A loaded font: header plus the packed 1-bit-per-pixel glyph table.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Psf1Font {
    pub header: Psf1Header,
    pub glyphs: *const u8,
}

/// The one structure passed across the handoff. Constructed by the
/// loader after the final memory-map capture, immutable afterwards; all
/// pointees live in loader allocations that are never freed.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct BootInfo {
    pub framebuffer: *const Framebuffer,
    pub font: *const Psf1Font,
    /// Raw firmware memory-map buffer, `mmap_size` bytes.
    pub mmap: *const u8,
    pub mmap_size: u64,
    /// Stride between successive records. Not guaranteed to equal the
    /// record's declared size; all traversal must use this value.
    pub mmap_desc_size: u64,
}

/// Kernel entry point ABI: one pointer argument, never returns.
pub type KernelEntry = unsafe extern "sysv64" fn(*const BootInfo) -> !;
