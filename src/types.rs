// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Shared identifiers, policies and part-identification data for the Si2183 property engine.
// Author: Lukas Bower

//! Small value types used across the registry, codec and session layers.

use core::fmt;

use serde::Deserialize;

/// Identifier of one Si2183 property (16 bits on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropertyId(u16);

impl PropertyId {
    /// Create a property identifier from its raw code.
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Raw property code as sent in SET/GET_PROPERTY commands.
    #[must_use]
    pub const fn code(self) -> u16 {
        self.0
    }
}

impl From<u16> for PropertyId {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04x}", self.0)
    }
}

/// When the setter is allowed to skip a download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// Download only when the new flat value differs from the shadow cache.
    #[default]
    OnChange,
    /// Download on every call, regardless of the cache.
    Always,
}

/// How values that do not fit a property's fields are treated: field values
/// wider than their declared bit-width, and flat values with bits outside
/// every field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldWidthPolicy {
    /// Mask the value to its fields, bit-compatible with the device firmware API.
    #[default]
    Truncate,
    /// Refuse the value with [`crate::PropertyError::FieldOverflow`] or
    /// [`crate::PropertyError::UndefinedBits`].
    Reject,
}

/// Behaviour of a bulk download when a transport failure occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DownloadPolicy {
    /// Record the failure and keep going with the next property.
    #[default]
    BestEffort,
    /// Stop at the first transport failure.
    StopOnFailure,
}

/// Result of a successful `set_property` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// The value was sent to the device and the cache updated.
    Downloaded,
    /// The device already holds this value; nothing was sent.
    Unchanged,
}

/// Part identification as reported by the device after power-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartInfo {
    /// Part number, e.g. `83` for Si2183.
    pub part: u8,
    /// Chip revision major number.
    pub rev_major: u8,
    /// Chip revision minor number.
    pub rev_minor: u8,
    /// Number of demodulator dies in the package.
    pub die_count: u8,
}

impl Default for PartInfo {
    fn default() -> Self {
        Self {
            part: 83,
            rev_major: 6,
            rev_minor: 0,
            die_count: 1,
        }
    }
}

impl PartInfo {
    /// True for multi-chip-module parts carrying more than one die.
    #[must_use]
    pub fn is_multi_die(&self) -> bool {
        self.die_count >= 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_id_displays_as_hex() {
        assert_eq!(PropertyId::new(0x100d).to_string(), "0x100d");
    }

    #[test]
    fn default_part_is_single_die() {
        assert!(!PartInfo::default().is_multi_die());
    }
}
