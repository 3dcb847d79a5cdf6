// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Structured property records and the per-session record store.
// Author: Lukas Bower

//! Structured property values.
//!
//! A [`PropertyRecord`] holds one value per field of its [`PropertyDef`], in
//! declaration order. Values are stored unmasked; truncation (or rejection)
//! happens when the record is packed.

use std::collections::BTreeMap;

use crate::error::{PropertyError, PropertyResult};
use crate::registry::{FieldDef, PropertyDef, Registry};
use crate::types::PropertyId;

/// Field values of one property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRecord {
    def: &'static PropertyDef,
    values: Vec<u32>,
}

impl PropertyRecord {
    /// Record holding the power-on defaults of `def`.
    #[must_use]
    pub fn defaults(def: &'static PropertyDef) -> Self {
        Self {
            def,
            values: def.fields.iter().map(|field| field.default).collect(),
        }
    }

    /// Property this record belongs to.
    #[must_use]
    pub fn id(&self) -> PropertyId {
        self.def.id
    }

    /// Layout of the property.
    #[must_use]
    pub fn def(&self) -> &'static PropertyDef {
        self.def
    }

    /// Value of a field by name.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<u32> {
        self.def.field(field).map(|(index, _)| self.values[index])
    }

    /// Assign a field by name. The value is not range checked here.
    pub fn set(&mut self, field: &str, value: u32) -> PropertyResult<()> {
        let (index, _) = self
            .def
            .field(field)
            .ok_or_else(|| PropertyError::UnknownField {
                property: self.def.id,
                field: field.to_owned(),
            })?;
        self.values[index] = value;
        Ok(())
    }

    /// Builder-style variant of [`PropertyRecord::set`].
    pub fn with(mut self, field: &str, value: u32) -> PropertyResult<Self> {
        self.set(field, value)?;
        Ok(self)
    }

    /// Fields paired with their current values, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static FieldDef, u32)> + '_ {
        self.def.fields.iter().zip(self.values.iter().copied())
    }

    pub(crate) fn values(&self) -> &[u32] {
        &self.values
    }

    pub(crate) fn replace_values(&mut self, values: Vec<u32>) {
        debug_assert_eq!(values.len(), self.values.len());
        self.values = values;
    }
}

/// One record per registered property.
#[derive(Debug, Clone)]
pub struct PropertyStore {
    records: BTreeMap<PropertyId, PropertyRecord>,
}

impl PropertyStore {
    /// Store holding the power-on defaults of every registered property.
    #[must_use]
    pub fn with_defaults(registry: &Registry) -> Self {
        let records = registry
            .iter()
            .map(|def| (def.id, PropertyRecord::defaults(def)))
            .collect();
        Self { records }
    }

    /// Record for `id`.
    pub fn get(&self, id: PropertyId) -> PropertyResult<&PropertyRecord> {
        self.records
            .get(&id)
            .ok_or(PropertyError::UnknownProperty(id))
    }

    /// Mutable record for `id`.
    pub fn get_mut(&mut self, id: PropertyId) -> PropertyResult<&mut PropertyRecord> {
        self.records
            .get_mut(&id)
            .ok_or(PropertyError::UnknownProperty(id))
    }

    /// Restore every record to its power-on defaults.
    pub fn reset(&mut self) {
        for record in self.records.values_mut() {
            *record = PropertyRecord::defaults(record.def);
        }
    }

    /// Records in ascending property order.
    pub fn iter(&self) -> impl Iterator<Item = &PropertyRecord> {
        self.records.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caps::Capabilities;
    use crate::registry::ids;

    #[test]
    fn defaults_follow_the_table() {
        let registry = Registry::new(Capabilities::all());
        let store = PropertyStore::with_defaults(&registry);
        let record = store.get(ids::DD_TS_FREQ).expect("registered");
        assert_eq!(record.get("req_freq_10khz"), Some(400));
    }

    #[test]
    fn setting_an_unknown_field_is_reported() {
        let registry = Registry::new(Capabilities::all());
        let mut store = PropertyStore::with_defaults(&registry);
        let record = store.get_mut(ids::DD_BER_RESOL).expect("registered");
        let err = record.set("bogus", 1).expect_err("no such field");
        assert!(matches!(err, PropertyError::UnknownField { .. }));
        assert_eq!(record.get("exp"), Some(7));
    }

    #[test]
    fn missing_property_is_soft_error() {
        let registry = Registry::new(Capabilities::CABLE);
        let store = PropertyStore::with_defaults(&registry);
        let err = store.get(ids::DVBT2_MODE).expect_err("not registered");
        assert!(err.is_soft());
    }
}
