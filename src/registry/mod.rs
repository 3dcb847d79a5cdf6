// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Property layout descriptors and the capability-filtered registry built from them.
// Author: Lukas Bower

//! Property registry.
//!
//! Every Si2183 property is described once, at compile time, by a
//! [`PropertyDef`]: its code, its name, the functional group it is downloaded
//! with, the standards it belongs to and the ordered list of bit fields that
//! make up its 16-bit flat value. A [`Registry`] is the subset of that table
//! admitted by one front-end's [`Capabilities`]; a missing entry is a normal
//! lookup miss, reported as `UnknownProperty` by the layers above.

use std::collections::BTreeMap;

use crate::caps::Capabilities;
use crate::types::PropertyId;

mod table;

pub use table::{ids, PROPERTY_TABLE};

/// Enumeration labels attached to a field: raw value and display name.
pub type FieldLabels = &'static [(u32, &'static str)];

/// One bit field inside a property's flat value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name, lower case.
    pub name: &'static str,
    /// Width in bits (1..=32).
    pub width: u8,
    /// Position of the least significant bit.
    pub shift: u8,
    /// Power-on default value.
    pub default: u32,
    /// Labels for enumerated fields; empty for plain numbers.
    pub labels: FieldLabels,
}

impl FieldDef {
    /// Numeric field without labels.
    #[must_use]
    pub const fn new(name: &'static str, width: u8, shift: u8, default: u32) -> Self {
        Self {
            name,
            width,
            shift,
            default,
            labels: &[],
        }
    }

    /// Enumerated field rendered through `labels`.
    #[must_use]
    pub const fn labelled(
        name: &'static str,
        width: u8,
        shift: u8,
        default: u32,
        labels: FieldLabels,
    ) -> Self {
        Self {
            name,
            width,
            shift,
            default,
            labels,
        }
    }

    /// Unshifted mask covering `width` bits.
    #[must_use]
    pub const fn mask(&self) -> u32 {
        if self.width >= 32 {
            u32::MAX
        } else {
            (1u32 << self.width) - 1
        }
    }

    /// True when `value` fits in the field without truncation.
    #[must_use]
    pub const fn fits(&self, value: u32) -> bool {
        value & !self.mask() == 0
    }

    /// OR `value`, masked to width, into `acc` at this field's position.
    #[must_use]
    pub const fn insert(&self, acc: u32, value: u32) -> u32 {
        acc | ((value & self.mask()) << self.shift)
    }

    /// Extract this field from a flat value.
    #[must_use]
    pub const fn extract(&self, flat: u32) -> u32 {
        (flat >> self.shift) & self.mask()
    }

    /// Label for `value`, if the field is enumerated and knows it.
    #[must_use]
    pub fn label(&self, value: u32) -> Option<&'static str> {
        self.labels
            .iter()
            .find(|(raw, _)| *raw == value)
            .map(|(_, name)| *name)
    }

    /// Raw value for a label, compared case-insensitively.
    #[must_use]
    pub fn value_of(&self, label: &str) -> Option<u32> {
        self.labels
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(label))
            .map(|(raw, _)| *raw)
    }
}

/// Functional group a property is downloaded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyGroup {
    /// Master interrupt configuration.
    Common,
    /// Demodulator settings shared by every standard.
    DemodCommon,
    /// DVB-C.
    Dvbc,
    /// DVB-C2.
    Dvbc2,
    /// MCNS (J.83 annex B).
    Mcns,
    /// DVB-S.
    Dvbs,
    /// DVB-S2.
    Dvbs2,
    /// DVB-T.
    Dvbt,
    /// DVB-T2.
    Dvbt2,
    /// ISDB-T.
    Isdbt,
    /// Blind scan.
    Scan,
}

impl PropertyGroup {
    /// Every group in bulk download order.
    pub const ALL: [PropertyGroup; 11] = [
        PropertyGroup::Common,
        PropertyGroup::DemodCommon,
        PropertyGroup::Dvbc,
        PropertyGroup::Dvbc2,
        PropertyGroup::Mcns,
        PropertyGroup::Dvbs,
        PropertyGroup::Dvbs2,
        PropertyGroup::Dvbt,
        PropertyGroup::Dvbt2,
        PropertyGroup::Isdbt,
        PropertyGroup::Scan,
    ];

    /// Standards a front-end must support for the group to be downloaded.
    /// Empty for groups every front-end carries.
    #[must_use]
    pub fn required(self) -> Capabilities {
        match self {
            Self::Common | Self::DemodCommon | Self::Scan => Capabilities::empty(),
            Self::Dvbc => Capabilities::DVB_C,
            Self::Dvbc2 => Capabilities::DVB_C2,
            Self::Mcns => Capabilities::MCNS,
            Self::Dvbs | Self::Dvbs2 => Capabilities::DVB_S_S2_DSS,
            Self::Dvbt => Capabilities::DVB_T,
            Self::Dvbt2 => Capabilities::DVB_T2,
            Self::Isdbt => Capabilities::ISDB_T,
        }
    }
}

/// Compile-time description of one property.
#[derive(Debug, PartialEq, Eq)]
pub struct PropertyDef {
    /// Property code.
    pub id: PropertyId,
    /// Upper-case property name, e.g. `DD_TS_FREQ`.
    pub name: &'static str,
    /// Download group.
    pub group: PropertyGroup,
    /// Standards the property belongs to; empty when always present.
    pub requires: Capabilities,
    /// Bit fields, in rendering order.
    pub fields: &'static [FieldDef],
}

impl PropertyDef {
    /// Field by name, compared case-insensitively.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<(usize, &'static FieldDef)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, f)| f.name.eq_ignore_ascii_case(name))
    }

    /// Bits of the flat value covered by some field.
    #[must_use]
    pub fn layout_mask(&self) -> u32 {
        self.fields
            .iter()
            .fold(0, |acc, field| acc | (field.mask() << field.shift))
    }

    /// Flat value of the power-on defaults.
    #[must_use]
    pub fn default_flat(&self) -> u32 {
        self.fields
            .iter()
            .fold(0, |acc, field| field.insert(acc, field.default))
    }
}

/// Read-only set of properties available to one front-end configuration.
///
/// Built once and shared (typically behind an `Arc`) by every session using
/// the same configuration.
#[derive(Debug, Clone)]
pub struct Registry {
    capabilities: Capabilities,
    by_id: BTreeMap<PropertyId, &'static PropertyDef>,
}

impl Registry {
    /// Registry admitting the table entries allowed by `capabilities`.
    #[must_use]
    pub fn new(capabilities: Capabilities) -> Self {
        Self::from_table(PROPERTY_TABLE, capabilities)
    }

    /// Registry over an arbitrary static table.
    #[must_use]
    pub fn from_table(table: &'static [PropertyDef], capabilities: Capabilities) -> Self {
        let by_id = table
            .iter()
            .filter(|def| capabilities.admits(def.requires))
            .map(|def| (def.id, def))
            .collect();
        Self {
            capabilities,
            by_id,
        }
    }

    /// Capabilities the registry was built for.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Property layout for `id`.
    #[must_use]
    pub fn get(&self, id: PropertyId) -> Option<&'static PropertyDef> {
        self.by_id.get(&id).copied()
    }

    /// Property layout by name, compared case-insensitively.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&'static PropertyDef> {
        self.by_id
            .values()
            .copied()
            .find(|def| def.name.eq_ignore_ascii_case(name))
    }

    /// True when `id` is registered.
    #[must_use]
    pub fn contains(&self, id: PropertyId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Registered properties in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = &'static PropertyDef> + '_ {
        self.by_id.values().copied()
    }

    /// Number of registered properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// True when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
