//! Firmware memory-map report on the framebuffer console.

use core::slice;
use muspell_common::BootInfo;
use muspell_common::mmap::{MemoryRegions, type_label};
use muspell_common::render::{TextRenderer, WHITE};
use muspell_common::text::format_u64;

const ACCENT: u32 = 0xFFFF_00FF;

/// One line per region: firmware type label and size in kibibytes.
/// Records are stepped by the captured descriptor stride, never by the
/// declared record size, so maps from newer firmware still walk
/// correctly.
pub fn print_memory_map(console: &mut TextRenderer<'_>, info: &BootInfo) {
    let buf = unsafe { slice::from_raw_parts(info.mmap, info.mmap_size as usize) };
    for region in MemoryRegions::new(buf, info.mmap_desc_size as usize) {
        console.put_str(type_label(region.ty), WHITE);
        console.put_char(b' ', WHITE);
        console.put_str(&format_u64(region.page_count * 4096 / 1024), ACCENT);
        console.put_str("kb", ACCENT);
        console.put_str("\r\n", WHITE);
    }
}
