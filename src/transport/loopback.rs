// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: In-memory property transport used for bring-up and tests.
// Author: Lukas Bower

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use super::{PropertyTransport, TransportError};
use crate::registry::Registry;
use crate::types::PropertyId;

/// Simulated device holding property values in memory.
///
/// Every call is recorded before it is answered, so failed calls count as
/// transport invocations too.
#[derive(Debug, Clone, Default)]
pub struct LoopbackDevice {
    values: BTreeMap<PropertyId, u32>,
    unsupported: BTreeSet<PropertyId>,
    faults: BTreeMap<PropertyId, TransportError>,
    sets: Vec<(PropertyId, u32)>,
    gets: Vec<PropertyId>,
}

impl LoopbackDevice {
    /// Empty device; unset properties read back as zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Device holding the power-on defaults of every registered property.
    #[must_use]
    pub fn powered_up(registry: &Registry) -> Self {
        Self {
            values: registry.iter().map(|def| (def.id, def.default_flat())).collect(),
            ..Self::default()
        }
    }

    /// Mark `id` as not implemented by this part.
    #[must_use]
    pub fn without(mut self, id: PropertyId) -> Self {
        self.unsupported.insert(id);
        self.values.remove(&id);
        self
    }

    /// Make every call touching `id` fail with `error`.
    pub fn inject_fault(&mut self, id: PropertyId, error: TransportError) {
        self.faults.insert(id, error);
    }

    /// Remove a fault injected with [`LoopbackDevice::inject_fault`].
    pub fn clear_fault(&mut self, id: PropertyId) {
        self.faults.remove(&id);
    }

    /// Value currently held for `id`.
    #[must_use]
    pub fn value(&self, id: PropertyId) -> Option<u32> {
        self.values.get(&id).copied()
    }

    /// SET_PROPERTY calls seen so far, in order.
    #[must_use]
    pub fn set_calls(&self) -> &[(PropertyId, u32)] {
        &self.sets
    }

    /// GET_PROPERTY calls seen so far, in order.
    #[must_use]
    pub fn get_calls(&self) -> &[PropertyId] {
        &self.gets
    }

    /// Forget recorded calls.
    pub fn clear_calls(&mut self) {
        self.sets.clear();
        self.gets.clear();
    }

    fn check(&self, id: PropertyId) -> Result<(), TransportError> {
        if let Some(error) = self.faults.get(&id) {
            return Err(*error);
        }
        if self.unsupported.contains(&id) {
            return Err(TransportError::UnknownProperty);
        }
        Ok(())
    }
}

impl PropertyTransport for LoopbackDevice {
    fn send_property_set(&mut self, id: PropertyId, value: u32) -> Result<(), TransportError> {
        self.sets.push((id, value));
        self.check(id)?;
        debug!("loopback: {} <- 0x{:04x}", id, value);
        self.values.insert(id, value);
        Ok(())
    }

    fn send_property_get(&mut self, id: PropertyId) -> Result<u32, TransportError> {
        self.gets.push(id);
        self.check(id)?;
        Ok(self.values.get(&id).copied().unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caps::Capabilities;
    use crate::registry::ids;

    #[test]
    fn powered_up_device_reports_defaults() {
        let registry = Registry::new(Capabilities::all());
        let mut device = LoopbackDevice::powered_up(&registry);
        assert_eq!(device.send_property_get(ids::DD_TS_FREQ), Ok(400));
        assert_eq!(device.get_calls(), &[ids::DD_TS_FREQ]);
    }

    #[test]
    fn faults_are_recorded_and_returned() {
        let mut device = LoopbackDevice::new();
        device.inject_fault(ids::DD_TS_FREQ, TransportError::Timeout);
        assert_eq!(
            device.send_property_set(ids::DD_TS_FREQ, 1),
            Err(TransportError::Timeout)
        );
        assert_eq!(device.set_calls().len(), 1);
        assert_eq!(device.value(ids::DD_TS_FREQ), None);
    }

    #[test]
    fn unsupported_property_is_refused() {
        let mut device = LoopbackDevice::new().without(ids::DD_TS_FREQ_MAX);
        assert_eq!(
            device.send_property_set(ids::DD_TS_FREQ_MAX, 1),
            Err(TransportError::UnknownProperty)
        );
    }
}
