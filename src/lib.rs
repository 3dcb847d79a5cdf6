// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Crate root for the Si2183 property engine.
// Author: Lukas Bower
#![forbid(unsafe_code)]

//! Property engine for the Si2183 demodulator.
//!
//! The device is configured through 16-bit properties, each a packed set of
//! bit fields. This crate provides:
//!
//! - a [`Registry`] of property layouts, filtered by front-end [`Capabilities`];
//! - a [`Codec`] packing [`PropertyRecord`]s into flat values and back;
//! - a [`ShadowCache`] of the values confirmed present on the device;
//! - a [`DeviceSession`] downloading properties only when they change, and
//!   running bulk downloads per functional group;
//! - text rendering of records for diagnostics (feature `text`).
//!
//! The bus itself stays outside: sessions drive any [`PropertyTransport`].

pub mod caps;
pub mod codec;
pub mod config;
pub mod download;
pub mod error;
pub mod record;
pub mod registry;
pub mod session;
pub mod shadow;
#[cfg(feature = "text")]
pub mod text;
pub mod transport;
pub mod types;

pub use caps::Capabilities;
pub use codec::Codec;
pub use config::{ConfigError, SessionConfig};
pub use download::{group_entries, DownloadEntry, DownloadReport, PartGate};
pub use error::{PropertyError, PropertyResult};
pub use record::{PropertyRecord, PropertyStore};
pub use registry::{ids, FieldDef, PropertyDef, PropertyGroup, Registry};
pub use session::DeviceSession;
pub use shadow::ShadowCache;
#[cfg(feature = "text")]
pub use text::{parse_field_value, render, PropertyText, PROPERTY_TEXT_CAPACITY};
pub use transport::{
    CommandChannel, CommandTransport, LoopbackDevice, PropertyTransport, TransportError,
    DEFAULT_MAX_POLLS, ERR_BAD_PROPERTY,
};
pub use types::{DownloadPolicy, FieldWidthPolicy, PartInfo, PropertyId, SetOutcome, WriteMode};
