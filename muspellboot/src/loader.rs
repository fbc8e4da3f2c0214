//! ELF kernel image loading.
//!
//! The kernel is a position-dependent, statically linked executable:
//! every loadable segment names the exact physical address it must land
//! at, and the loader allocates those pages at those addresses. A
//! collision (malformed image, firmware already owns the range) fails
//! the boot instead of relocating anything.

use log::info;
use uefi::boot::{self, AllocateType, MemoryType};
use xmas_elf::ElfFile;
use xmas_elf::header::{Class, Data, Machine, Type as ElfType, Version};
use xmas_elf::program::Type as PhType;

const PAGE_SIZE: u64 = 0x1000;

#[derive(Debug)]
pub enum LoadError {
    /// The image does not parse as ELF at all (bad magic, short file).
    Parse(&'static str),
    /// Parsed, but not a 64-bit little-endian x86_64 executable of the
    /// current format version.
    BadHeader,
    /// A segment's file extent lies outside the image bytes, or claims
    /// more file bytes than memory bytes.
    BadSegment,
    /// No loadable segment at all; nothing to jump to.
    NoLoadSegments,
    /// Fixed-address page allocation was denied.
    Alloc(uefi::Error),
}

/// Validates the image and places every `PT_LOAD` segment at its
/// declared physical address. Returns the entry point.
pub fn load_kernel(image: &[u8]) -> Result<u64, LoadError> {
    let elf = ElfFile::new(image).map_err(LoadError::Parse)?;
    validate(&elf)?;

    let mut loaded = 0usize;
    for ph in elf.program_iter() {
        if ph.get_type().ok() != Some(PhType::Load) {
            continue;
        }
        let mem_size = ph.mem_size();
        if mem_size == 0 {
            continue;
        }
        let file_size = ph.file_size();
        let offset = ph.offset() as usize;
        let paddr = ph.physical_addr();
        if file_size > mem_size {
            return Err(LoadError::BadSegment);
        }
        let src = image
            .get(offset..offset + file_size as usize)
            .ok_or(LoadError::BadSegment)?;

        let base = paddr & !(PAGE_SIZE - 1);
        let pages = ((paddr - base) + mem_size).div_ceil(PAGE_SIZE) as usize;
        boot::allocate_pages(AllocateType::Address(base), MemoryType::LOADER_DATA, pages)
            .map_err(LoadError::Alloc)?;

        let dst =
            unsafe { core::slice::from_raw_parts_mut(paddr as *mut u8, mem_size as usize) };
        muspell_common::segment::place_segment(dst, src);
        info!(
            "segment at {:#x}: file {} bytes, mem {} bytes, {} pages",
            paddr, file_size, mem_size, pages
        );
        loaded += 1;
    }
    if loaded == 0 {
        return Err(LoadError::NoLoadSegments);
    }
    Ok(elf.header.pt2.entry_point())
}

fn validate(elf: &ElfFile) -> Result<(), LoadError> {
    let pt1 = &elf.header.pt1;
    let ok = pt1.class() == Class::SixtyFour
        && pt1.data() == Data::LittleEndian
        && pt1.version() == Version::Current
        && elf.header.pt2.machine().as_machine() == Machine::X86_64
        && elf.header.pt2.type_().as_type() == ElfType::Executable;
    if ok { Ok(()) } else { Err(LoadError::BadHeader) }
}
