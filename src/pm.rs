// Copyright The Rusted Firmware-A Contributors.
//
// SPDX-License-Identifier: BSD-3-Clause

//! Power management hooks exposed to the PSCI framework.

use crate::{cpucfg::rvbar_registers, mmio::Mmio32, soc::SocVariant};
use arm_psci::ErrorCode;
use log::info;
use thiserror::Error;

/// Returned by a suspend-setup collaborator when the SCP firmware is absent or failed to come
/// up, so no SCPI-backed implementation can be installed.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("SCPI-backed suspend implementation is unavailable")]
pub struct ScpiUnavailable;

/// The external setup routines which populate the PSCI operations table.
pub trait SuspendSetup {
    /// Operations table type consumed by the PSCI framework.
    type Ops;

    /// Tries to install the SCPI-backed suspend implementation.
    fn set_scpi_ops(&mut self) -> Result<Self::Ops, ScpiUnavailable>;

    /// Installs the native implementation.
    ///
    /// Always populates a table, though with reduced capabilities (no suspend support).
    fn set_native_ops(&mut self) -> Self::Ops;
}

/// A populated PSCI operations table, together with a record of which backend provided it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PsciOps<T> {
    table: T,
    scpi: bool,
}

impl<T> PsciOps<T> {
    /// Returns whether suspend is backed by SCPI. Fixed for the lifetime of the value.
    pub fn is_scpi(&self) -> bool {
        self.scpi
    }

    /// Returns the operations table.
    pub fn table(&self) -> &T {
        &self.table
    }

    /// Consumes the value, returning the operations table.
    pub fn into_table(self) -> T {
        self.table
    }
}

/// Checks a non-secure entry point requested for CPU resume.
///
/// The entry point must be in DRAM. Only the lower bound is checked; an address beyond the end
/// of DRAM is accepted.
pub fn validate_ns_entrypoint<S: SocVariant>(ns_entrypoint: u64) -> Result<(), ErrorCode> {
    if ns_entrypoint < S::DRAM_BASE {
        return Err(ErrorCode::InvalidAddress);
    }

    Ok(())
}

/// Programs the reset vector of every CPU with `sec_entrypoint` and installs the PSCI
/// operations table, preferring the SCPI-backed implementation and falling back to the native
/// one when SCPI is unavailable.
///
/// This must be called exactly once, early in boot, before any CPU other than the primary is
/// released from reset.
pub fn setup_psci_ops<S: SocVariant, M: Mmio32, B: SuspendSetup>(
    sec_entrypoint: u64,
    mmio: &mut M,
    setup: &mut B,
) -> PsciOps<B::Ops> {
    // Program all CPU entry points.
    for cpu in 0..S::CORE_COUNT {
        rvbar_registers::<S>(cpu).write(mmio, sec_entrypoint);
    }

    match setup.set_scpi_ops() {
        Ok(table) => {
            info!("PSCI: Suspend is available via SCPI");
            PsciOps { table, scpi: true }
        }
        Err(ScpiUnavailable) => {
            info!("PSCI: Suspend is unavailable");
            PsciOps {
                table: setup.set_native_ops(),
                scpi: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        fake::{FakeMmio, FakeOps, FakeSuspendSetup},
        soc::{Sun50iA64, Sun50iH616},
    };

    const SEC_ENTRYPOINT: u64 = 0x0000_0012_3456_7890;

    #[test]
    fn rejects_entrypoint_below_dram() {
        assert_eq!(
            Err(ErrorCode::InvalidAddress),
            validate_ns_entrypoint::<Sun50iA64>(0)
        );
        assert_eq!(
            Err(ErrorCode::InvalidAddress),
            validate_ns_entrypoint::<Sun50iA64>(0x3fff_ffff)
        );
    }

    #[test]
    fn accepts_entrypoint_in_dram() {
        assert_eq!(Ok(()), validate_ns_entrypoint::<Sun50iA64>(0x4000_0000));
        assert_eq!(Ok(()), validate_ns_entrypoint::<Sun50iA64>(0x4800_0000));
    }

    #[test]
    fn accepts_entrypoint_above_dram_end() {
        // Only the lower bound is checked.
        assert_eq!(Ok(()), validate_ns_entrypoint::<Sun50iA64>(0xff_ffff_ffff));
    }

    #[test]
    fn programs_reset_vector_of_every_cpu() {
        let mut mmio = FakeMmio::new();
        let mut setup = FakeSuspendSetup::new(true);

        setup_psci_ops::<Sun50iA64, _, _>(SEC_ENTRYPOINT, &mut mmio, &mut setup);

        for cpu in 0..Sun50iA64::CORE_COUNT {
            let regs = rvbar_registers::<Sun50iA64>(cpu);
            assert_eq!(Some(0x3456_7890), mmio.read_32(regs.lo));
            assert_eq!(Some(0x0000_0012), mmio.read_32(regs.hi));
        }
    }

    #[test]
    fn reconstructs_entrypoint_from_cpu2_registers() {
        let mut mmio = FakeMmio::new();
        let mut setup = FakeSuspendSetup::new(false);

        setup_psci_ops::<Sun50iA64, _, _>(SEC_ENTRYPOINT, &mut mmio, &mut setup);

        let regs = rvbar_registers::<Sun50iA64>(2);
        let lo = u64::from(mmio.read_32(regs.lo).unwrap());
        let hi = u64::from(mmio.read_32(regs.hi).unwrap());
        assert_eq!(SEC_ENTRYPOINT, (hi << 32) | lo);
    }

    #[test]
    fn uses_alternate_bank_without_per_cluster_regs() {
        let mut mmio = FakeMmio::new();
        let mut setup = FakeSuspendSetup::new(true);

        setup_psci_ops::<Sun50iH616, _, _>(SEC_ENTRYPOINT, &mut mmio, &mut setup);

        for cpu in 0..Sun50iH616::CORE_COUNT {
            let regs = rvbar_registers::<Sun50iH616>(cpu);
            assert_eq!(Some(0x3456_7890), mmio.read_32(regs.lo));
            assert_eq!(Some(0x0000_0012), mmio.read_32(regs.hi));
        }
    }

    #[test]
    fn skips_writes_without_any_rvbar_bank() {
        struct Bare;

        impl SocVariant for Bare {
            const CORE_COUNT: usize = 2;
            const DRAM_BASE: u64 = 0x4000_0000;

            fn has_per_cluster_regs() -> bool {
                false
            }
        }

        let mut mmio = FakeMmio::new();
        let mut setup = FakeSuspendSetup::new(false);

        let ops = setup_psci_ops::<Bare, _, _>(SEC_ENTRYPOINT, &mut mmio, &mut setup);

        assert!(mmio.writes().is_empty());
        assert_eq!(FakeOps::Native, *ops.table());
    }

    #[test]
    fn prefers_scpi_backend() {
        let mut mmio = FakeMmio::new();
        let mut setup = FakeSuspendSetup::new(true);

        let ops = setup_psci_ops::<Sun50iA64, _, _>(SEC_ENTRYPOINT, &mut mmio, &mut setup);

        assert!(ops.is_scpi());
        assert_eq!(FakeOps::Scpi, *ops.table());
        assert_eq!(0, setup.native_calls());
    }

    #[test]
    fn falls_back_to_native_backend() {
        let mut mmio = FakeMmio::new();
        let mut setup = FakeSuspendSetup::new(false);

        let ops = setup_psci_ops::<Sun50iA64, _, _>(SEC_ENTRYPOINT, &mut mmio, &mut setup);

        assert!(!ops.is_scpi());
        assert_eq!(FakeOps::Native, ops.into_table());
        assert_eq!(1, setup.native_calls());
    }
}
