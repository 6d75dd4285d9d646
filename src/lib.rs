// Copyright The Rusted Firmware-A Contributors.
//
// SPDX-License-Identifier: BSD-3-Clause

//! PSCI platform glue for the Allwinner (sunxi) SoC family.
//!
//! This crate implements the platform hooks that a PSCI framework needs from a sunxi part:
//! programming the reset vector of every CPU with the secure entry point, validating non-secure
//! entry points requested for CPU resume, and selecting between the SCPI-backed and the native
//! suspend implementation.
//!
//! The PSCI state machine itself, the SCPI transport and the operation tables belong to the
//! embedding firmware; they are reached through the [`SuspendSetup`] trait. Chip generations are
//! described by implementations of [`soc::SocVariant`], and register access goes through
//! [`Mmio32`] so the register programming path can be exercised with fakes in unit tests.

#![cfg_attr(not(any(test, feature = "fakes")), no_std)]

pub mod cpucfg;
#[cfg(any(test, feature = "fakes"))]
pub mod fake;
mod mmio;
mod pm;
pub mod soc;

pub use mmio::{DeviceMmio, Mmio32};
pub use pm::{PsciOps, ScpiUnavailable, SuspendSetup, setup_psci_ops, validate_ns_entrypoint};
