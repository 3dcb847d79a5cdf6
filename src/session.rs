// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Device session owning the property store, shadow cache and transport.
// Author: Lukas Bower

//! Property setter/getter for one device.
//!
//! A [`DeviceSession`] owns everything that is per device: the records the
//! caller edits, the shadow of what the device holds, the part information
//! and the transport. The registry is shared. Sessions are not internally
//! synchronised; callers wrap one in a lock when several threads drive the
//! same device.

use std::sync::Arc;

use log::{debug, trace, warn};

use crate::codec::{normalize_flat, Codec};
use crate::config::SessionConfig;
use crate::error::{PropertyError, PropertyResult};
use crate::record::{PropertyRecord, PropertyStore};
use crate::registry::Registry;
use crate::shadow::ShadowCache;
use crate::transport::{PropertyTransport, TransportError};
use crate::types::{PartInfo, PropertyId, SetOutcome, WriteMode};

/// Property state and transport of one device.
#[derive(Debug)]
pub struct DeviceSession<T> {
    registry: Arc<Registry>,
    config: SessionConfig,
    part: PartInfo,
    props: PropertyStore,
    shadow: ShadowCache,
    transport: T,
}

impl<T: PropertyTransport> DeviceSession<T> {
    /// Session for a freshly powered-up device.
    pub fn new(
        registry: Arc<Registry>,
        config: SessionConfig,
        part: PartInfo,
        transport: T,
    ) -> Self {
        let props = PropertyStore::with_defaults(&registry);
        let shadow = ShadowCache::new(&registry);
        Self {
            registry,
            config,
            part,
            props,
            shadow,
            transport,
        }
    }

    /// Session whose registry is built from `config`.
    pub fn from_config(config: SessionConfig, part: PartInfo, transport: T) -> Self {
        let registry = Arc::new(config.registry());
        Self::new(registry, config, part, transport)
    }

    /// Download `value` for `id` unless the device already holds it.
    ///
    /// `value` is first brought onto the property's field layout (see
    /// [`normalize_flat`]), so the device and the cache always agree. The
    /// shadow cache is updated only after the transport confirmed the
    /// download; on failure it still describes the device.
    pub fn set_property(&mut self, id: PropertyId, value: u32) -> PropertyResult<SetOutcome> {
        let def = self
            .registry
            .get(id)
            .ok_or(PropertyError::UnknownProperty(id))?;
        let requested = value;
        let value = normalize_flat(def, requested, self.config.field_width)?;
        if value != requested {
            debug!("{} 0x{:x} masked to 0x{:04x}", id, requested, value);
        }
        let cached = self.shadow.get(id)?;
        if value == cached && self.config.write_mode == WriteMode::OnChange {
            trace!("{} already 0x{:04x}, not downloaded", id, value);
            return Ok(SetOutcome::Unchanged);
        }
        match self.transport.send_property_set(id, value) {
            Ok(()) => {
                debug!("{} <- 0x{:04x} (was 0x{:04x})", id, value, cached);
                self.shadow.update(id, value)?;
                Ok(SetOutcome::Downloaded)
            }
            Err(TransportError::UnknownProperty) => Err(PropertyError::UnknownProperty(id)),
            Err(source) => {
                warn!("{} <- 0x{:04x} failed: {}", id, value, source);
                Err(PropertyError::Transport { property: id, source })
            }
        }
    }

    /// Pack the current record of `id` and download it with
    /// [`DeviceSession::set_property`].
    ///
    /// `UnknownProperty` is logged and returned; callers iterating several
    /// properties are expected to carry on.
    pub fn set_property2(&mut self, id: PropertyId) -> PropertyResult<SetOutcome> {
        let result = self
            .packed(id)
            .and_then(|value| self.set_property(id, value));
        if let Err(PropertyError::UnknownProperty(_)) = &result {
            warn!("{} not supported, skipped", id);
        }
        result
    }

    /// Query the device for `id` directly, bypassing the cache and registry.
    pub fn get_property(&mut self, id: PropertyId) -> PropertyResult<u32> {
        let value = self.transport.send_property_get(id).map_err(|source| match source {
            TransportError::UnknownProperty => PropertyError::UnknownProperty(id),
            source => PropertyError::Transport { property: id, source },
        })?;
        debug!("{} -> 0x{:04x}", id, value);
        Ok(value)
    }

    /// Query the device for `id` and unpack the answer into the current record.
    pub fn get_property2(&mut self, id: PropertyId) -> PropertyResult<&PropertyRecord> {
        if !self.registry.contains(id) {
            return Err(PropertyError::UnknownProperty(id));
        }
        let value = self.get_property(id)?;
        let codec = Codec::new(&self.registry, self.config.field_width);
        let record = self.props.get_mut(id)?;
        codec.unpack(value, id, record)?;
        Ok(record)
    }

    /// Flat value of the current record of `id`.
    pub fn packed(&self, id: PropertyId) -> PropertyResult<u32> {
        let codec = Codec::new(&self.registry, self.config.field_width);
        codec.pack(self.props.get(id)?, id)
    }

    /// Current record of `id`.
    pub fn record(&self, id: PropertyId) -> PropertyResult<&PropertyRecord> {
        self.props.get(id)
    }

    /// Current record of `id`, for editing before [`DeviceSession::set_property2`].
    pub fn record_mut(&mut self, id: PropertyId) -> PropertyResult<&mut PropertyRecord> {
        self.props.get_mut(id)
    }

    /// Assign one field of the current record of `id`.
    pub fn set_field(&mut self, id: PropertyId, field: &str, value: u32) -> PropertyResult<()> {
        self.props.get_mut(id)?.set(field, value)
    }

    /// Cached flat value of `id`.
    pub fn shadow_value(&self, id: PropertyId) -> PropertyResult<u32> {
        self.shadow.get(id)
    }

    /// Shadow cache, for diagnostics.
    pub fn shadow(&self) -> &ShadowCache {
        &self.shadow
    }

    /// Forget every download after the device was powered up or reset.
    pub fn reset_shadow(&mut self) {
        debug!("shadow cache reset to power-on defaults");
        self.shadow.reset();
    }

    /// Records the caller has been editing.
    pub fn props(&self) -> &PropertyStore {
        &self.props
    }

    /// Shared registry.
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Switch between change-only and always-download.
    pub fn set_write_mode(&mut self, mode: WriteMode) {
        self.config.write_mode = mode;
    }

    /// Identification of the connected part.
    pub fn part(&self) -> &PartInfo {
        &self.part
    }

    /// Replace the part information, e.g. after reading the revision.
    pub fn set_part(&mut self, part: PartInfo) {
        self.part = part;
    }

    /// Transport used by the session.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutable transport, e.g. to issue other device commands.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Tear down the session and return its transport.
    pub fn into_transport(self) -> T {
        self.transport
    }
}
