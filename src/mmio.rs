// Copyright The Rusted Firmware-A Contributors.
//
// SPDX-License-Identifier: BSD-3-Clause

//! 32-bit memory-mapped register access.

/// Write access to 32-bit memory-mapped registers.
pub trait Mmio32 {
    /// Writes `value` to the 32-bit register at `address`.
    fn write_32(&mut self, address: usize, value: u32);
}

/// Register access going straight to device memory through volatile writes.
///
/// Writes are ordered relative to each other by program order; the mapping of the register
/// region must be non-cacheable device memory for this to translate to the bus.
pub struct DeviceMmio(());

impl DeviceMmio {
    /// Creates device register access.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that every address subsequently passed to
    /// [`Mmio32::write_32`] on the returned value is a valid, mapped device register which no
    /// Rust reference aliases, and that writing any value to it cannot break memory safety.
    pub unsafe fn new() -> Self {
        Self(())
    }
}

impl Mmio32 for DeviceMmio {
    fn write_32(&mut self, address: usize, value: u32) {
        // SAFETY: The constructor contract guarantees that `address` is a valid, unaliased
        // device register.
        unsafe { (address as *mut u32).write_volatile(value) }
    }
}
