//! Firmware memory-map traversal.
//!
//! The map is kept as the raw byte buffer the firmware filled in. Records
//! are stepped by the firmware-reported descriptor stride, never by
//! `size_of::<MemoryDescriptor>()`: firmware may append trailing fields
//! to descriptors, so the stride can exceed the declared layout.

use core::mem::size_of;

/// One firmware memory region record (the declared prefix of it).
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct MemoryDescriptor {
    pub ty: u32,
    pub padding: u32,
    pub phys_start: u64,
    pub virt_start: u64,
    pub page_count: u64,
    pub attribute: u64,
}

/// Iterator over a raw memory-map buffer. Visits exactly
/// `buf.len() / stride` records and never reads past the buffer. A stride
/// smaller than the declared record layout yields nothing.
pub struct MemoryRegions<'a> {
    buf: &'a [u8],
    stride: usize,
    offset: usize,
}

impl<'a> MemoryRegions<'a> {
    pub fn new(buf: &'a [u8], stride: usize) -> Self {
        if stride < size_of::<MemoryDescriptor>() {
            return Self { buf: &[], stride: size_of::<MemoryDescriptor>(), offset: 0 };
        }
        Self { buf, stride, offset: 0 }
    }
}

impl Iterator for MemoryRegions<'_> {
    type Item = MemoryDescriptor;

    fn next(&mut self) -> Option<MemoryDescriptor> {
        if self.offset + self.stride > self.buf.len() {
            return None;
        }
        // The buffer may not be 8-aligned at this offset once a foreign
        // stride is in play.
        let desc = unsafe {
            core::ptr::read_unaligned(self.buf.as_ptr().add(self.offset) as *const MemoryDescriptor)
        };
        self.offset += self.stride;
        Some(desc)
    }
}

const MEMORY_TYPE_LABELS: [&str; 14] = [
    "EfiReservedMemoryType",
    "EfiLoaderCode",
    "EfiLoaderData",
    "EfiBootServicesCode",
    "EfiBootServicesData",
    "EfiRuntimeServicesCode",
    "EfiRuntimeServicesData",
    "EfiConventionalMemory",
    "EfiUnusableMemory",
    "EfiACPIReclaimedMemory",
    "EfiACPIMemoryNVS",
    "EfiMemoryMappedIO",
    "EfiMemoryMappedIOPortSpace",
    "EfiPalCode",
];

/// Human-readable label for a region type code. Total over `u32`:
/// out-of-range codes (vendor or newer-spec types) get a fallback label
/// instead of an out-of-bounds index.
pub fn type_label(ty: u32) -> &'static str {
    MEMORY_TYPE_LABELS
        .get(ty as usize)
        .copied()
        .unwrap_or("UnknownMemoryType")
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn descriptor(ty: u32, pages: u64) -> MemoryDescriptor {
        MemoryDescriptor {
            ty,
            padding: 0,
            phys_start: 0x1000,
            virt_start: 0,
            page_count: pages,
            attribute: 0xF,
        }
    }

    fn pack(descs: &[MemoryDescriptor], stride: usize) -> Vec<u8> {
        let mut buf = Vec::new();
        for d in descs {
            let bytes = unsafe {
                core::slice::from_raw_parts(
                    d as *const MemoryDescriptor as *const u8,
                    size_of::<MemoryDescriptor>(),
                )
            };
            buf.extend_from_slice(bytes);
            buf.resize(buf.len() + stride - size_of::<MemoryDescriptor>(), 0xAA);
        }
        buf
    }

    #[test]
    fn visits_every_record_at_declared_size() {
        let descs = [descriptor(7, 4), descriptor(2, 1), descriptor(0, 9)];
        let buf = pack(&descs, size_of::<MemoryDescriptor>());
        let seen: Vec<_> = MemoryRegions::new(&buf, size_of::<MemoryDescriptor>()).collect();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].ty, 7);
        assert_eq!(seen[2].page_count, 9);
    }

    #[test]
    fn forward_compatible_stride_still_visits_all_records() {
        // Firmware reporting 48-byte descriptors while the declared
        // layout is 40 bytes.
        let stride = size_of::<MemoryDescriptor>() + 8;
        let descs = [descriptor(1, 2), descriptor(3, 4)];
        let buf = pack(&descs, stride);
        assert_eq!(buf.len(), 2 * stride);

        let seen: Vec<_> = MemoryRegions::new(&buf, stride).collect();
        assert_eq!(seen.len(), buf.len() / stride);
        assert_eq!(seen[0].ty, 1);
        assert_eq!(seen[1].ty, 3);
        assert_eq!(seen[1].page_count, 4);
    }

    #[test]
    fn trailing_partial_record_is_not_read() {
        let stride = size_of::<MemoryDescriptor>();
        let descs = [descriptor(1, 2), descriptor(3, 4)];
        let mut buf = pack(&descs, stride);
        buf.truncate(buf.len() - 1);
        assert_eq!(MemoryRegions::new(&buf, stride).count(), 1);
    }

    #[test]
    fn under_strided_buffer_yields_nothing() {
        let descs = [descriptor(1, 2)];
        let buf = pack(&descs, size_of::<MemoryDescriptor>());
        assert_eq!(MemoryRegions::new(&buf, 8).count(), 0);
    }

    #[test]
    fn labels_are_total_over_type_codes() {
        assert_eq!(type_label(0), "EfiReservedMemoryType");
        assert_eq!(type_label(7), "EfiConventionalMemory");
        assert_eq!(type_label(13), "EfiPalCode");
        assert_eq!(type_label(14), "UnknownMemoryType");
        assert_eq!(type_label(u32::MAX), "UnknownMemoryType");
    }
}
