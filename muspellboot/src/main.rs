//! Muspell pre-kernel loader.
//!
//! Runs exactly once per boot, strictly in sequence: load and place the
//! kernel image, load the console font, normalize the graphics mode,
//! then capture the memory map while exiting boot services and jump.
//! Every stage failure is fatal; there is no kernel to boot without all
//! four resources.

#![no_std]
#![no_main]

extern crate alloc;

mod font;
mod handoff;
mod loader;
mod serial;
mod video;

use alloc::vec::Vec;
use core::arch::asm;
use log::{error, info};
use uefi::prelude::*;
use uefi::{
    boot,
    fs::{FileSystem, Path},
};

#[global_allocator]
static ALLOCATOR: uefi::allocator::Allocator = uefi::allocator::Allocator;

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    slog!("[panic] {}", info);
    halt()
}

#[entry]
fn main() -> Status {
    unsafe { serial::init() };
    slog!(">>> muspellboot entry");

    if uefi::helpers::init().is_err() {
        slog!("[FATAL] helpers::init failed");
        halt();
    }
    info!("loader start");

    let image = boot::image_handle();
    let mut fs: FileSystem = match boot::get_image_file_system(image) {
        Ok(p) => p.into(),
        Err(e) => fatal(&format_args!("no boot filesystem: {e:?}")),
    };

    let kernel_path = Path::new(cstr16!(r"\MUSPELL\KERNEL.ELF"));
    let kernel_bytes: Vec<u8> = match fs.read(kernel_path) {
        Ok(v) => v,
        Err(e) => fatal(&format_args!("read KERNEL.ELF failed: {e:?}")),
    };
    info!("kernel image: {} bytes", kernel_bytes.len());

    let entry = match loader::load_kernel(&kernel_bytes) {
        Ok(entry) => entry,
        Err(e) => fatal(&format_args!("kernel load failed: {e:?}")),
    };
    info!("kernel placed, entry {entry:#x}");

    let font_path = Path::new(cstr16!(r"\MUSPELL\FONT.PSF"));
    let font = match font::load_font(&mut fs, font_path) {
        Ok(f) => f,
        Err(e) => fatal(&format_args!("font load failed: {e:?}")),
    };
    info!("font loaded, char size {}", font.header.char_size);

    let framebuffer = match video::init_display() {
        Ok(fb) => fb,
        Err(e) => fatal(&format_args!("display init failed: {e:?}")),
    };
    info!(
        "framebuffer {}x{} stride {} {:?} at {:#x}",
        framebuffer.width,
        framebuffer.height,
        framebuffer.stride,
        framebuffer.layout,
        framebuffer.base
    );

    // Context storage is allocated here; from the map capture onwards no
    // further allocation may happen or the captured map goes stale.
    let handoff = match handoff::Handoff::new(entry, framebuffer, font) {
        Ok(h) => h,
        Err(e) => fatal(&format_args!("context alloc failed: {e:?}")),
    };

    slog!("exiting boot services, jumping to {:#x}", entry);
    unsafe { handoff.enter() }
}

#[cold]
fn fatal(msg: &core::fmt::Arguments) -> ! {
    error!("[fatal] {}", msg);
    slog!("[FATAL] {}", msg);
    boot::stall(1_000_000);
    halt()
}

fn halt() -> ! {
    unsafe {
        loop {
            asm!("hlt");
        }
    }
}
