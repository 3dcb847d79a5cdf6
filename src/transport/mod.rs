// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Collaborator interface used to download and query device properties.
// Author: Lukas Bower

//! Property transport.
//!
//! The engine talks to the device through exactly two operations: set a
//! property and get a property. [`CommandTransport`] implements them on top of
//! a byte-oriented [`CommandChannel`]; [`LoopbackDevice`] implements them in
//! memory.

use thiserror::Error;

use crate::types::PropertyId;

mod command;
mod loopback;

pub use command::{CommandChannel, CommandTransport, DEFAULT_MAX_POLLS, ERR_BAD_PROPERTY};
pub use loopback::LoopbackDevice;

/// Failures reported by a property transport.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// The device does not implement the property.
    #[error("device does not implement the property")]
    UnknownProperty,
    /// No completion was seen within the polling budget.
    #[error("timed out waiting for command completion")]
    Timeout,
    /// The bus did not acknowledge the transfer.
    #[error("bus transfer not acknowledged")]
    Nack,
    /// The device flagged the command as failed.
    #[error("device reported error code 0x{code:02x}")]
    Device {
        /// Device error code.
        code: u8,
    },
    /// The value does not fit the command's data field.
    #[error("value 0x{value:x} does not fit the command data field")]
    ValueOutOfRange {
        /// Rejected value.
        value: u32,
    },
}

/// Download and query operations consumed by the property engine.
///
/// Calls are synchronous and may block on the bus; any timeout or retry
/// policy belongs to the implementation.
pub trait PropertyTransport {
    /// Issue SET_PROPERTY and wait for the device to acknowledge it.
    fn send_property_set(&mut self, id: PropertyId, value: u32) -> Result<(), TransportError>;

    /// Issue GET_PROPERTY and return the value reported by the device.
    fn send_property_get(&mut self, id: PropertyId) -> Result<u32, TransportError>;
}

impl<T: PropertyTransport + ?Sized> PropertyTransport for &mut T {
    fn send_property_set(&mut self, id: PropertyId, value: u32) -> Result<(), TransportError> {
        (**self).send_property_set(id, value)
    }

    fn send_property_get(&mut self, id: PropertyId) -> Result<u32, TransportError> {
        (**self).send_property_get(id)
    }
}
