// Copyright The Rusted Firmware-A Contributors.
//
// SPDX-License-Identifier: BSD-3-Clause

//! Fake implementations of the MMIO and suspend-setup collaborators for unit tests.

use crate::{Mmio32, ScpiUnavailable, SuspendSetup};

/// A fake 32-bit register file which records every write in order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FakeMmio {
    writes: Vec<(usize, u32)>,
}

impl FakeMmio {
    /// Creates an empty register file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last value written to `address`, if any.
    pub fn read_32(&self, address: usize) -> Option<u32> {
        self.writes
            .iter()
            .rev()
            .find(|(a, _)| *a == address)
            .map(|(_, value)| *value)
    }

    /// Returns all writes performed so far, in program order.
    pub fn writes(&self) -> &[(usize, u32)] {
        &self.writes
    }
}

impl Mmio32 for FakeMmio {
    fn write_32(&mut self, address: usize, value: u32) {
        self.writes.push((address, value));
    }
}

/// Marker operations table handed out by [`FakeSuspendSetup`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FakeOps {
    /// Table populated by the SCPI setup call.
    Scpi,
    /// Table populated by the native setup call.
    Native,
}

/// A fake suspend-setup collaborator with a configurable SCPI outcome.
pub struct FakeSuspendSetup {
    scpi_available: bool,
    native_calls: usize,
}

impl FakeSuspendSetup {
    /// Creates a collaborator whose SCPI setup call succeeds iff `scpi_available`.
    pub fn new(scpi_available: bool) -> Self {
        Self {
            scpi_available,
            native_calls: 0,
        }
    }

    /// Returns how many times the native setup call was made.
    pub fn native_calls(&self) -> usize {
        self.native_calls
    }
}

impl SuspendSetup for FakeSuspendSetup {
    type Ops = FakeOps;

    fn set_scpi_ops(&mut self) -> Result<FakeOps, ScpiUnavailable> {
        if self.scpi_available {
            Ok(FakeOps::Scpi)
        } else {
            Err(ScpiUnavailable)
        }
    }

    fn set_native_ops(&mut self) -> FakeOps {
        self.native_calls += 1;
        FakeOps::Native
    }
}
