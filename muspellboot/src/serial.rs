//! Raw COM1 output for QEMU `-serial stdio`.
//!
//! The console logger dies with boot services; this port keeps working
//! across the exit, so the last pre-jump diagnostics go here.

use core::arch::asm;
use core::fmt::{self, Write};

const COM1: u16 = 0x3F8;

unsafe fn outb(port: u16, value: u8) {
    unsafe {
        asm!("out dx, al", in("dx") port, in("al") value);
    }
}

unsafe fn inb(port: u16) -> u8 {
    let value: u8;
    unsafe {
        asm!("in al, dx", out("al") value, in("dx") port);
    }
    value
}

/// 115200 8N1, FIFO on.
pub unsafe fn init() {
    unsafe {
        outb(COM1 + 1, 0x00);
        outb(COM1 + 3, 0x80);
        outb(COM1, 0x01);
        outb(COM1 + 1, 0x00);
        outb(COM1 + 3, 0x03);
        outb(COM1 + 2, 0xC7);
        outb(COM1 + 4, 0x0B);
    }
}

fn putb(byte: u8) {
    unsafe {
        // Wait for the transmit holding register to drain.
        while inb(COM1 + 5) & 0x20 == 0 {}
        outb(COM1, byte);
    }
}

pub struct Com1;

impl Write for Com1 {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            if byte == b'\n' {
                putb(b'\r');
            }
            putb(byte);
        }
        Ok(())
    }
}

#[macro_export]
macro_rules! slog {
    ($($arg:tt)*) => {{
        use core::fmt::Write;
        let _ = writeln!($crate::serial::Com1, $($arg)*);
    }};
}
