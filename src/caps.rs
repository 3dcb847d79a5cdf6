// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Front-end capability set consulted when building the property registry.
// Author: Lukas Bower

//! Capability flags describing which broadcast standards a front-end supports.

use bitflags::bitflags;

bitflags! {
    /// Standards supported by the configured front-end. Properties belonging to
    /// an absent standard are left out of the registry.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct Capabilities: u16 {
        const DVB_T = 1 << 0;
        const DVB_T2 = 1 << 1;
        const ISDB_T = 1 << 2;
        const DVB_C = 1 << 3;
        const DVB_C2 = 1 << 4;
        const MCNS = 1 << 5;
        const DVB_S_S2_DSS = 1 << 6;

        const TERRESTRIAL = Self::DVB_T.bits() | Self::DVB_T2.bits() | Self::ISDB_T.bits();
        const CABLE = Self::DVB_C.bits() | Self::DVB_C2.bits() | Self::MCNS.bits();
        const SATELLITE = Self::DVB_S_S2_DSS.bits();
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::all()
    }
}

impl Capabilities {
    /// True when `required` is empty (ungated) or shares at least one standard.
    #[must_use]
    pub fn admits(self, required: Capabilities) -> bool {
        required.is_empty() || self.intersects(required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ungated_properties_are_always_admitted() {
        assert!(Capabilities::empty().admits(Capabilities::empty()));
    }

    #[test]
    fn terrestrial_gate_accepts_any_terrestrial_standard() {
        assert!(Capabilities::DVB_T2.admits(Capabilities::TERRESTRIAL));
        assert!(!Capabilities::CABLE.admits(Capabilities::TERRESTRIAL));
    }
}
