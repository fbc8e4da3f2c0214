//! Shared boot ABI and kernel-side text facilities for Muspell.
//!
//! Everything here is `no_std` and allocation-free so the loader and the
//! kernel agree on one definition of the handoff layout.

#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod abi;
pub mod mmap;
pub mod psf;
pub mod render;
pub mod segment;
pub mod text;

pub use abi::{BootInfo, Framebuffer, KernelEntry, PixelLayout, Psf1Font, Psf1Header};
