// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Error taxonomy for the Si2183 property engine.
// Author: Lukas Bower

use thiserror::Error;

use crate::transport::TransportError;
use crate::types::PropertyId;

/// Errors produced by the registry, codec and session layers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PropertyError {
    /// The property is not part of the registry for this configuration, or
    /// the connected part does not implement it.
    #[error("unknown property {0}")]
    UnknownProperty(PropertyId),
    /// The command channel failed while downloading or querying a property.
    #[error("property {property}: transport failure: {source}")]
    Transport {
        /// Property being transferred.
        property: PropertyId,
        /// Failure reported by the collaborator.
        #[source]
        source: TransportError,
    },
    /// A field value does not fit its declared width.
    #[error("property {property}: field {field} value {value} exceeds {width} bits")]
    FieldOverflow {
        /// Property being packed.
        property: PropertyId,
        /// Offending field.
        field: &'static str,
        /// Value supplied by the caller.
        value: u32,
        /// Declared width in bits.
        width: u8,
    },
    /// A flat value sets bits that belong to no field of the property.
    #[error("property {property}: value 0x{value:04x} sets bits 0x{bits:04x} outside its fields")]
    UndefinedBits {
        /// Property being set.
        property: PropertyId,
        /// Flat value supplied by the caller.
        value: u32,
        /// Offending bits.
        bits: u32,
    },
    /// The property has no field with this name.
    #[error("property {property} has no field {field}")]
    UnknownField {
        /// Property addressed.
        property: PropertyId,
        /// Requested field name.
        field: String,
    },
    /// Text could not be interpreted as a value for the field.
    #[error("property {property}: cannot parse {text:?} for field {field}")]
    InvalidFieldText {
        /// Property addressed.
        property: PropertyId,
        /// Field being assigned.
        field: &'static str,
        /// Text supplied by the caller.
        text: String,
    },
    /// A record of one property was handed to the codec for another.
    #[error("record for {found} used as {expected}")]
    RecordMismatch {
        /// Property the caller asked for.
        expected: PropertyId,
        /// Property the record belongs to.
        found: PropertyId,
    },
}

impl PropertyError {
    /// Soft errors never stop a bulk download.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        matches!(self, Self::UnknownProperty(_))
    }

    /// Property the error refers to.
    #[must_use]
    pub fn property(&self) -> PropertyId {
        match self {
            Self::UnknownProperty(id) => *id,
            Self::Transport { property, .. }
            | Self::FieldOverflow { property, .. }
            | Self::UndefinedBits { property, .. }
            | Self::UnknownField { property, .. }
            | Self::InvalidFieldText { property, .. } => *property,
            Self::RecordMismatch { expected, .. } => *expected,
        }
    }
}

/// Result alias used throughout the crate.
pub type PropertyResult<T> = Result<T, PropertyError>;
