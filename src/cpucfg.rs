// Copyright The Rusted Firmware-A Contributors.
//
// SPDX-License-Identifier: BSD-3-Clause

//! Resolution of the CPU configuration registers holding each CPU's reset vector.
//!
//! Older generations of the family expose one RVBAR register pair per core in the per-cluster
//! CPUCFG banks; newer ones only have a single shared alternate bank. Which formula applies is
//! a property of the chip variant.

use crate::{mmio::Mmio32, soc::SocVariant};

/// The pair of 32-bit registers holding the low and high halves of a CPU's reset vector.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RvbarRegisters {
    /// Address of the register holding the low 32 bits.
    pub lo: usize,
    /// Address of the register holding the high 32 bits.
    pub hi: usize,
}

impl RvbarRegisters {
    /// Sentinel pair for chip variants which have neither register bank.
    pub const NONE: Self = Self { lo: 0, hi: 0 };

    /// Programs `entrypoint` into the pair, low half first.
    ///
    /// Writes to the sentinel pair are dropped, so variants without the registers degrade to a
    /// no-op instead of failing.
    pub fn write(&self, mmio: &mut impl Mmio32, entrypoint: u64) {
        if *self == Self::NONE {
            return;
        }
        mmio.write_32(self.lo, entrypoint as u32);
        mmio.write_32(self.hi, (entrypoint >> 32) as u32);
    }
}

/// Resolves which register pair holds the reset vector of the given CPU.
///
/// Resolution always produces a pair; a variant that reports no per-cluster banks and defines
/// no alternate bank gets [`RvbarRegisters::NONE`].
pub fn rvbar_registers<S: SocVariant>(cpu: usize) -> RvbarRegisters {
    if S::has_per_cluster_regs() {
        S::cpucfg_rvbar(cpu)
    } else {
        S::alt_rvbar(cpu)
    }
}
