//! Muspell kernel entry: consumes the frozen boot context, brings up
//! the framebuffer console and reports the firmware memory map.

#![no_std]
#![no_main]

mod report;
mod serial;

use core::panic::PanicInfo;
use muspell_common::BootInfo;
use muspell_common::render::{TextRenderer, WHITE};

#[unsafe(no_mangle)]
#[unsafe(link_section = ".text._start")]
pub unsafe extern "sysv64" fn _start(info: *const BootInfo) -> ! {
    x86_64::instructions::interrupts::disable();
    serial::init_com1();
    println!("[MUSPELL] kernel entry");

    // The loader guarantees every pointer in the context stays valid
    // forever; it is a read-only view from here on.
    let info = unsafe { &*info };
    let fb = unsafe { &*info.framebuffer };
    let font = unsafe { &*info.font };
    println!(
        "[MUSPELL] framebuffer {}x{} stride {}, font height {}",
        fb.width, fb.height, fb.stride, font.header.char_size
    );

    let mut console = unsafe { TextRenderer::new(fb, font) };
    console.put_str("MUSPELL\r\n", WHITE);
    report::print_memory_map(&mut console, info);

    loop {
        x86_64::instructions::hlt();
    }
}

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    println!("\n*** KERNEL PANIC ***\n{}", info);
    loop {
        x86_64::instructions::hlt();
    }
}
