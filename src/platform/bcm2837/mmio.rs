//! Volatile MMIO register block

use core::ptr::{read_volatile, write_volatile};

use crate::platform::traits::RegisterInterface;

/// Memory-mapped register block at a fixed physical address
///
/// Every access is a single volatile 32-bit load or store. Nothing is cached
/// between calls.
#[derive(Debug)]
pub struct MmioRegisters {
    base: usize,
}

impl MmioRegisters {
    /// Wrap the register block at `base`
    ///
    /// # Safety
    ///
    /// `base` must be the 4-byte aligned address of a device register block
    /// that is mapped (or identity-addressed with the MMU off) for the
    /// lifetime of this value, and no other code may access the same block
    /// concurrently.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    /// Block base address
    pub fn base(&self) -> usize {
        self.base
    }

    fn ptr(&self, offset: usize) -> *mut u32 {
        debug_assert!(offset % 4 == 0);
        (self.base + offset) as *mut u32
    }
}

impl RegisterInterface for MmioRegisters {
    #[inline(always)]
    fn read(&self, offset: usize) -> u32 {
        // SAFETY: `new` guarantees the block is valid device memory we own.
        unsafe { read_volatile(self.ptr(offset)) }
    }

    #[inline(always)]
    fn write(&mut self, offset: usize, value: u32) {
        // SAFETY: as above.
        unsafe { write_volatile(self.ptr(offset), value) }
    }
}
