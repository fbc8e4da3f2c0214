//! Boot context assembly and the one-way jump into the kernel.

use core::mem;
use core::ptr::{self, NonNull};
use muspell_common::abi::{BootInfo, Framebuffer, KernelEntry, Psf1Font};
use uefi::boot::{self, AllocateType, MemoryType};
use uefi::mem::memory_map::MemoryMap;

use crate::slog;

/// Everything the kernel receives, staged and ready to freeze. Once
/// built, the only remaining operation is `enter`, which consumes it.
pub struct Handoff {
    entry: u64,
    framebuffer: &'static Framebuffer,
    font: &'static Psf1Font,
    context: NonNull<BootInfo>,
}

impl Handoff {
    /// Stages the handoff and allocates the boot-context page up front,
    /// so nothing has to be allocated between the memory-map capture
    /// and the jump.
    pub fn new(
        entry: u64,
        framebuffer: &'static Framebuffer,
        font: &'static Psf1Font,
    ) -> Result<Self, uefi::Error> {
        let page = boot::allocate_pages(AllocateType::AnyPages, MemoryType::LOADER_DATA, 1)?;
        Ok(Self {
            entry,
            framebuffer,
            font,
            context: page.cast(),
        })
    }

    /// The point of no return. Captures the final memory map while
    /// exiting boot services, writes the frozen context and jumps to
    /// the kernel entry. Never returns; nothing may touch boot
    /// services past this call.
    ///
    /// # Safety
    ///
    /// `entry` must point at the entry of an image loaded at its linked
    /// physical addresses, expecting the sysv64 single-pointer ABI.
    pub unsafe fn enter(self) -> ! {
        // exit_boot_services re-probes the map size until the map key
        // is accepted, so the snapshot cannot go stale between probe
        // and fill. The returned buffer lives in LOADER_DATA and stays
        // valid after the exit.
        let map = unsafe { boot::exit_boot_services(Some(MemoryType::LOADER_DATA)) };
        let meta = map.meta();
        let info = BootInfo {
            framebuffer: self.framebuffer,
            font: self.font,
            mmap: map.buffer().as_ptr(),
            mmap_size: meta.map_size as u64,
            mmap_desc_size: meta.desc_size as u64,
        };
        // From here on the map buffer is a permanent kernel-owned
        // region; it must never be freed.
        mem::forget(map);

        slog!("handoff: {} map bytes, stride {}", info.mmap_size, info.mmap_desc_size);

        let context = self.context.as_ptr();
        unsafe {
            ptr::write(context, info);
            let entry: KernelEntry = mem::transmute(self.entry as usize);
            entry(context)
        }
    }
}
