// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Pack property records into flat values and unpack them again.
// Author: Lukas Bower

//! Bit-field codec between [`PropertyRecord`]s and flat property values.
//!
//! Packing ORs every field, masked to its width, into place; unpacking shifts
//! and masks each field back out. Both are unsigned and side-effect free.

use crate::error::{PropertyError, PropertyResult};
use crate::record::PropertyRecord;
use crate::registry::{PropertyDef, Registry};
use crate::types::{FieldWidthPolicy, PropertyId};

/// Pack/unpack helper bound to one registry.
#[derive(Debug, Clone, Copy)]
pub struct Codec<'r> {
    registry: &'r Registry,
    policy: FieldWidthPolicy,
}

impl<'r> Codec<'r> {
    /// Codec applying `policy` to out-of-range field values.
    #[must_use]
    pub fn new(registry: &'r Registry, policy: FieldWidthPolicy) -> Self {
        Self { registry, policy }
    }

    /// Registry the codec resolves property ids against.
    #[must_use]
    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Encode `record` as the flat value of `id`.
    pub fn pack(&self, record: &PropertyRecord, id: PropertyId) -> PropertyResult<u32> {
        let def = self.resolve(record, id)?;
        pack_values(def, record.values(), self.policy)
    }

    /// Decode `flat` into `record`. The record is untouched on error.
    pub fn unpack(
        &self,
        flat: u32,
        id: PropertyId,
        record: &mut PropertyRecord,
    ) -> PropertyResult<()> {
        let def = self.resolve(record, id)?;
        record.replace_values(unpack_values(def, flat));
        Ok(())
    }

    fn resolve(
        &self,
        record: &PropertyRecord,
        id: PropertyId,
    ) -> PropertyResult<&'static PropertyDef> {
        let def = self
            .registry
            .get(id)
            .ok_or(PropertyError::UnknownProperty(id))?;
        if record.id() != id {
            return Err(PropertyError::RecordMismatch {
                expected: id,
                found: record.id(),
            });
        }
        Ok(def)
    }
}

/// Pack raw field values against a layout.
pub fn pack_values(
    def: &PropertyDef,
    values: &[u32],
    policy: FieldWidthPolicy,
) -> PropertyResult<u32> {
    let mut acc = 0u32;
    for (field, &value) in def.fields.iter().zip(values) {
        if policy == FieldWidthPolicy::Reject && !field.fits(value) {
            return Err(PropertyError::FieldOverflow {
                property: def.id,
                field: field.name,
                value,
                width: field.width,
            });
        }
        acc = field.insert(acc, value);
    }
    Ok(acc)
}

/// Bring a caller-supplied flat value onto the layout of `def`.
///
/// Bits outside every field are dropped under [`FieldWidthPolicy::Truncate`],
/// the same result as unpacking and packing again, and refused under
/// [`FieldWidthPolicy::Reject`].
pub fn normalize_flat(
    def: &PropertyDef,
    flat: u32,
    policy: FieldWidthPolicy,
) -> PropertyResult<u32> {
    let mask = def.layout_mask();
    let stray = flat & !mask;
    if stray != 0 && policy == FieldWidthPolicy::Reject {
        return Err(PropertyError::UndefinedBits {
            property: def.id,
            value: flat,
            bits: stray,
        });
    }
    Ok(flat & mask)
}

/// Split a flat value into field values, in declaration order.
#[must_use]
pub fn unpack_values(def: &PropertyDef, flat: u32) -> Vec<u32> {
    def.fields.iter().map(|field| field.extract(flat)).collect()
}
