// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Shadow of the property values confirmed present on the device.
// Author: Lukas Bower

//! Shadow cache of downloaded property values.
//!
//! The cache starts at the device power-on defaults and is only written after
//! the transport confirmed a download. It is pure in-memory state.

use crate::codec::{pack_values, unpack_values};
use crate::error::PropertyResult;
use crate::record::PropertyStore;
use crate::registry::Registry;
use crate::types::{FieldWidthPolicy, PropertyId};

/// Last confirmed flat value of every registered property.
#[derive(Debug, Clone)]
pub struct ShadowCache {
    store: PropertyStore,
}

impl ShadowCache {
    /// Cache reflecting a freshly powered-up device.
    #[must_use]
    pub fn new(registry: &Registry) -> Self {
        Self {
            store: PropertyStore::with_defaults(registry),
        }
    }

    /// Cached flat value of `id`.
    pub fn get(&self, id: PropertyId) -> PropertyResult<u32> {
        let record = self.store.get(id)?;
        // cached values come from unpack and always fit their fields
        pack_values(record.def(), record.values(), FieldWidthPolicy::Truncate)
    }

    /// Record `flat` as the value now held by the device.
    pub fn update(&mut self, id: PropertyId, flat: u32) -> PropertyResult<()> {
        let record = self.store.get_mut(id)?;
        let values = unpack_values(record.def(), flat);
        record.replace_values(values);
        Ok(())
    }

    /// Forget every download, e.g. after the device was reset.
    pub fn reset(&mut self) {
        self.store.reset();
    }

    /// Cached records, for diagnostics.
    #[must_use]
    pub fn store(&self) -> &PropertyStore {
        &self.store
    }
}
