// Copyright The Rusted Firmware-A Contributors.
//
// SPDX-License-Identifier: BSD-3-Clause

//! Chip-variant descriptions of the supported SoC generations.

use crate::cpucfg::RvbarRegisters;

/// Base of DRAM, shared across the family.
const SUNXI_DRAM_BASE: u64 = 0x4000_0000;

/// The hooks describing one chip generation of the family.
pub trait SocVariant {
    /// The number of CPU cores.
    const CORE_COUNT: usize;

    /// Base of DRAM. Non-secure entry points below this address are rejected.
    const DRAM_BASE: u64;

    /// Returns whether the CPUCFG block exposes per-cluster RVBAR register banks.
    fn has_per_cluster_regs() -> bool;

    /// Returns the per-cluster RVBAR register pair of the given CPU.
    ///
    /// Only consulted when [`has_per_cluster_regs`](Self::has_per_cluster_regs) reports `true`.
    fn cpucfg_rvbar(_cpu: usize) -> RvbarRegisters {
        RvbarRegisters::NONE
    }

    /// Returns the alternate RVBAR register pair of the given CPU, used by variants without
    /// per-cluster banks. Variants lacking the alternate bank keep the sentinel default.
    fn alt_rvbar(_cpu: usize) -> RvbarRegisters {
        RvbarRegisters::NONE
    }
}

/// The A64/H5 generation, with per-cluster CPUCFG register banks.
pub struct Sun50iA64;

impl Sun50iA64 {
    const SUNXI_CPUCFG_BASE: usize = 0x0170_0000;
}

impl SocVariant for Sun50iA64 {
    const CORE_COUNT: usize = 4;
    const DRAM_BASE: u64 = SUNXI_DRAM_BASE;

    fn has_per_cluster_regs() -> bool {
        true
    }

    fn cpucfg_rvbar(cpu: usize) -> RvbarRegisters {
        let lo = Self::SUNXI_CPUCFG_BASE + 0xa0 + cpu * 8;
        RvbarRegisters { lo, hi: lo + 4 }
    }
}

/// The H616 generation, which only has the shared alternate RVBAR bank.
pub struct Sun50iH616;

impl Sun50iH616 {
    const SUNXI_CPUCFG_BASE: usize = 0x0901_0000;
}

impl SocVariant for Sun50iH616 {
    const CORE_COUNT: usize = 4;
    const DRAM_BASE: u64 = SUNXI_DRAM_BASE;

    fn has_per_cluster_regs() -> bool {
        false
    }

    fn alt_rvbar(cpu: usize) -> RvbarRegisters {
        let lo = Self::SUNXI_CPUCFG_BASE + 0x40 + cpu * 8;
        RvbarRegisters { lo, hi: lo + 4 }
    }
}
