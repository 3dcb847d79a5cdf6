// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Bulk download of property groups with part gating and best-effort semantics.
// Author: Lukas Bower

//! Bulk property download.
//!
//! Each [`PropertyGroup`] has a fixed download order. Entries may name
//! properties missing from the registry (their standard is not configured, or
//! the part lacks them); those come back as `UnknownProperty` and are skipped.
//! Entries gated on part identification are not attempted at all when the
//! gate is closed.

use log::{debug, info, warn};

use crate::error::PropertyError;
use crate::registry::{ids, PropertyGroup};
use crate::session::DeviceSession;
use crate::transport::PropertyTransport;
use crate::types::{DownloadPolicy, PartInfo, PropertyId, SetOutcome};

/// Runtime condition on part identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartGate {
    /// Chip revision major number at least this value.
    MinRevMajor(u8),
    /// Package carries more than one die.
    MultiDie,
}

impl PartGate {
    /// True when the connected part satisfies the gate.
    #[must_use]
    pub fn admits(self, part: &PartInfo) -> bool {
        match self {
            Self::MinRevMajor(major) => part.rev_major >= major,
            Self::MultiDie => part.is_multi_die(),
        }
    }
}

/// One step of a bulk download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadEntry {
    /// Property to download.
    pub id: PropertyId,
    /// Optional part gate.
    pub gate: Option<PartGate>,
}

impl DownloadEntry {
    /// Unconditional entry.
    #[must_use]
    pub const fn new(id: PropertyId) -> Self {
        Self { id, gate: None }
    }

    /// Entry attempted only when `gate` admits the part.
    #[must_use]
    pub const fn gated(id: PropertyId, gate: PartGate) -> Self {
        Self {
            id,
            gate: Some(gate),
        }
    }
}

const fn e(id: PropertyId) -> DownloadEntry {
    DownloadEntry::new(id)
}

const COMMON: &[DownloadEntry] = &[e(ids::MASTER_IEN)];

const DEMOD_COMMON: &[DownloadEntry] = &[
    e(ids::DD_BER_RESOL),
    e(ids::DD_CBER_RESOL),
    e(ids::DD_DISEQC_FREQ),
    e(ids::DD_DISEQC_PARAM),
    e(ids::DD_FER_RESOL),
    e(ids::DD_IEN),
    e(ids::DD_IF_INPUT_FREQ),
    e(ids::DD_INT_SENSE),
    e(ids::DD_MODE),
    e(ids::DD_PER_RESOL),
    e(ids::DD_RSQ_BER_THRESHOLD),
    DownloadEntry::gated(ids::DD_SEC_TS_SERIAL_DIFF, PartGate::MultiDie),
    DownloadEntry::gated(ids::DD_SEC_TS_SETUP_PAR, PartGate::MultiDie),
    DownloadEntry::gated(ids::DD_SEC_TS_SETUP_SER, PartGate::MultiDie),
    DownloadEntry::gated(ids::DD_SEC_TS_SLR_SERIAL, PartGate::MultiDie),
    e(ids::DD_SSI_SQI_PARAM),
    e(ids::DD_TS_FREQ),
    DownloadEntry::gated(ids::DD_TS_FREQ_MAX, PartGate::MinRevMajor(5)),
    e(ids::DD_TS_MODE),
    e(ids::DD_TS_SERIAL_DIFF),
    e(ids::DD_TS_SETUP_PAR),
    e(ids::DD_TS_SETUP_SER),
    e(ids::DD_TS_SLR_SERIAL),
];

const DVBC: &[DownloadEntry] = &[
    e(ids::DVBC_ADC_CREST_FACTOR),
    e(ids::DVBC_AFC_RANGE),
    e(ids::DVBC_CONSTELLATION),
    e(ids::DVBC_SYMBOL_RATE),
];

const DVBC2: &[DownloadEntry] = &[e(ids::DVBC2_ADC_CREST_FACTOR), e(ids::DVBC2_AFC_RANGE)];

const MCNS: &[DownloadEntry] = &[
    e(ids::MCNS_ADC_CREST_FACTOR),
    e(ids::MCNS_AFC_RANGE),
    e(ids::MCNS_CONSTELLATION),
    e(ids::MCNS_SYMBOL_RATE),
];

const DVBS: &[DownloadEntry] = &[
    e(ids::DVBS_ADC_CREST_FACTOR),
    e(ids::DVBS_AFC_RANGE),
    e(ids::DVBS_CONSTELLATION),
    e(ids::DVBS_SYMBOL_RATE),
];

const DVBS2: &[DownloadEntry] = &[
    e(ids::DVBS2_ADC_CREST_FACTOR),
    e(ids::DVBS2_AFC_RANGE),
    e(ids::DVBS2_SYMBOL_RATE),
];

const DVBT: &[DownloadEntry] = &[
    e(ids::DVBT_ADC_CREST_FACTOR),
    e(ids::DVBT_AFC_RANGE),
    e(ids::DVBT_HIERARCHY),
];

const DVBT2: &[DownloadEntry] = &[
    e(ids::DVBT2_ADC_CREST_FACTOR),
    e(ids::DVBT2_AFC_RANGE),
    e(ids::DVBT2_FEF_TUNER),
    e(ids::DVBT2_MODE),
];

const ISDBT: &[DownloadEntry] = &[
    e(ids::ISDBT_AC_SELECT),
    e(ids::ISDBT_ADC_CREST_FACTOR),
    e(ids::ISDBT_AFC_RANGE),
    e(ids::ISDBT_MODE),
];

const SCAN: &[DownloadEntry] = &[
    e(ids::SCAN_FMAX),
    e(ids::SCAN_FMIN),
    e(ids::SCAN_IEN),
    e(ids::SCAN_INT_SENSE),
    e(ids::SCAN_SAT_CONFIG),
    e(ids::SCAN_SAT_UNICABLE_BW),
    e(ids::SCAN_SAT_UNICABLE_MIN_TUNE_STEP),
    e(ids::SCAN_SYMB_RATE_MAX),
    e(ids::SCAN_SYMB_RATE_MIN),
    e(ids::SCAN_TER_CONFIG),
];

/// Download order of `group`.
#[must_use]
pub fn group_entries(group: PropertyGroup) -> &'static [DownloadEntry] {
    match group {
        PropertyGroup::Common => COMMON,
        PropertyGroup::DemodCommon => DEMOD_COMMON,
        PropertyGroup::Dvbc => DVBC,
        PropertyGroup::Dvbc2 => DVBC2,
        PropertyGroup::Mcns => MCNS,
        PropertyGroup::Dvbs => DVBS,
        PropertyGroup::Dvbs2 => DVBS2,
        PropertyGroup::Dvbt => DVBT,
        PropertyGroup::Dvbt2 => DVBT2,
        PropertyGroup::Isdbt => ISDBT,
        PropertyGroup::Scan => SCAN,
    }
}

/// What happened to every entry of a bulk download.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadReport {
    /// Sent to the device.
    pub downloaded: Vec<PropertyId>,
    /// Already held by the device; nothing sent.
    pub unchanged: Vec<PropertyId>,
    /// Not in the registry or not implemented by the part.
    pub unknown: Vec<PropertyId>,
    /// Skipped because a part gate was closed.
    pub gated: Vec<PropertyId>,
    /// Hard failures, in order.
    pub failed: Vec<(PropertyId, PropertyError)>,
    /// True when the download stopped before the end of its list.
    pub stopped: bool,
}

impl DownloadReport {
    /// True when no entry failed and the list ran to completion.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty() && !self.stopped
    }

    /// Entries for which `set_property2` was called.
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.downloaded.len() + self.unchanged.len() + self.unknown.len() + self.failed.len()
    }

    /// Append another report, e.g. of the next group.
    pub fn merge(&mut self, other: DownloadReport) {
        self.downloaded.extend(other.downloaded);
        self.unchanged.extend(other.unchanged);
        self.unknown.extend(other.unknown);
        self.gated.extend(other.gated);
        self.failed.extend(other.failed);
        self.stopped |= other.stopped;
    }
}

impl<T: PropertyTransport> DeviceSession<T> {
    /// Run `set_property2` over `entries` in order.
    ///
    /// `UnknownProperty` never stops the loop. Other failures are recorded and,
    /// under [`DownloadPolicy::StopOnFailure`], end it.
    pub fn download_entries(&mut self, entries: &[DownloadEntry]) -> DownloadReport {
        let mut report = DownloadReport::default();
        for entry in entries {
            if let Some(gate) = entry.gate {
                if !gate.admits(self.part()) {
                    debug!("{} gated out ({:?})", entry.id, gate);
                    report.gated.push(entry.id);
                    continue;
                }
            }
            match self.set_property2(entry.id) {
                Ok(SetOutcome::Downloaded) => report.downloaded.push(entry.id),
                Ok(SetOutcome::Unchanged) => report.unchanged.push(entry.id),
                Err(err) if err.is_soft() => report.unknown.push(entry.id),
                Err(err) => {
                    warn!("download of {} failed: {}", entry.id, err);
                    report.failed.push((entry.id, err));
                    if self.config().download == DownloadPolicy::StopOnFailure {
                        report.stopped = true;
                        break;
                    }
                }
            }
        }
        report
    }

    /// Download every property of `group`.
    pub fn download_group(&mut self, group: PropertyGroup) -> DownloadReport {
        let report = self.download_entries(group_entries(group));
        info!(
            "{:?} properties: {} downloaded, {} unchanged, {} unknown, {} gated, {} failed",
            group,
            report.downloaded.len(),
            report.unchanged.len(),
            report.unknown.len(),
            report.gated.len(),
            report.failed.len()
        );
        report
    }

    /// Download every group the configured capabilities call for.
    pub fn download_all(&mut self) -> DownloadReport {
        let capabilities = self.registry().capabilities();
        let mut report = DownloadReport::default();
        for group in PropertyGroup::ALL {
            if !capabilities.admits(group.required()) {
                debug!("{:?} properties skipped, standard not configured", group);
                continue;
            }
            report.merge(self.download_group(group));
            if report.stopped {
                break;
            }
        }
        report
    }
}
