//! Graphics mode discovery via the Graphics Output Protocol.

use alloc::boxed::Box;
use muspell_common::abi::{Framebuffer, PixelLayout};
use uefi::boot;
use uefi::proto::console::gop::{GraphicsOutput, PixelFormat};

#[derive(Debug)]
pub enum VideoError {
    /// No graphics output protocol on any handle.
    NotFound,
    /// The active mode's pixel layout is neither RGBX nor BGRX; no
    /// renderer can address such a framebuffer.
    UnsupportedFormat,
}

/// Normalizes the active display mode into the portable descriptor.
/// All geometry is taken verbatim from the firmware mode; nothing is
/// recomputed here or later.
pub fn init_display() -> Result<&'static Framebuffer, VideoError> {
    let handle =
        boot::get_handle_for_protocol::<GraphicsOutput>().map_err(|_| VideoError::NotFound)?;
    let mut gop = boot::open_protocol_exclusive::<GraphicsOutput>(handle)
        .map_err(|_| VideoError::NotFound)?;

    let mode = gop.current_mode_info();
    let layout = match mode.pixel_format() {
        PixelFormat::Rgb => PixelLayout::Rgbx,
        PixelFormat::Bgr => PixelLayout::Bgrx,
        PixelFormat::Bitmask | PixelFormat::BltOnly => {
            return Err(VideoError::UnsupportedFormat);
        }
    };
    let (width, height) = mode.resolution();
    let mut raw = gop.frame_buffer();

    let fb = Framebuffer {
        base: raw.as_mut_ptr() as u64,
        size: raw.size() as u64,
        width: width as u64,
        height: height as u64,
        stride: mode.stride() as u64,
        layout,
    };
    Ok(Box::leak(Box::new(fb)))
}
