// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Exercise shadow-cache write suppression and error handling of the device session.
// Author: Lukas Bower

use std::sync::Arc;

use si2183_props::{
    ids, Capabilities, DeviceSession, FieldWidthPolicy, LoopbackDevice, PartInfo, PropertyError,
    PropertyTransport, Registry, SessionConfig, SetOutcome, TransportError, WriteMode,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn session(config: SessionConfig) -> DeviceSession<LoopbackDevice> {
    let registry = Arc::new(config.registry());
    let device = LoopbackDevice::powered_up(&registry);
    DeviceSession::new(registry, config, PartInfo::default(), device)
}

#[test]
fn repeated_value_is_downloaded_once() {
    init_logger();
    let mut session = session(SessionConfig::default());

    assert_eq!(
        session.set_property(ids::DD_TS_FREQ, 720),
        Ok(SetOutcome::Downloaded)
    );
    assert_eq!(
        session.set_property(ids::DD_TS_FREQ, 720),
        Ok(SetOutcome::Unchanged)
    );
    assert_eq!(session.transport().set_calls(), &[(ids::DD_TS_FREQ, 720)]);
    assert_eq!(session.shadow_value(ids::DD_TS_FREQ), Ok(720));
    assert_eq!(session.transport().value(ids::DD_TS_FREQ), Some(720));
}

#[test]
fn always_mode_downloads_every_call() {
    init_logger();
    let mut session = session(SessionConfig {
        write_mode: WriteMode::Always,
        ..SessionConfig::default()
    });

    for _ in 0..3 {
        assert_eq!(
            session.set_property(ids::DD_TS_FREQ, 720),
            Ok(SetOutcome::Downloaded)
        );
    }
    assert_eq!(session.transport().set_calls().len(), 3);
}

#[test]
fn switching_write_mode_at_runtime() {
    init_logger();
    let mut session = session(SessionConfig::default());
    session.set_property(ids::DD_TS_FREQ, 720).expect("download");
    session.set_write_mode(WriteMode::Always);
    assert_eq!(
        session.set_property(ids::DD_TS_FREQ, 720),
        Ok(SetOutcome::Downloaded)
    );
    assert_eq!(session.transport().set_calls().len(), 2);
}

#[test]
fn transport_failure_leaves_the_cache_alone() {
    init_logger();
    let mut session = session(SessionConfig::default());
    session
        .transport_mut()
        .inject_fault(ids::DD_TS_FREQ, TransportError::Timeout);

    let err = session
        .set_property(ids::DD_TS_FREQ, 720)
        .expect_err("injected timeout");
    assert_eq!(
        err,
        PropertyError::Transport {
            property: ids::DD_TS_FREQ,
            source: TransportError::Timeout,
        }
    );
    assert!(!err.is_soft());
    assert_eq!(err.property(), ids::DD_TS_FREQ);
    assert_eq!(session.shadow_value(ids::DD_TS_FREQ), Ok(400));

    // the same value must go out again once the device recovers
    session.transport_mut().clear_fault(ids::DD_TS_FREQ);
    assert_eq!(
        session.set_property(ids::DD_TS_FREQ, 720),
        Ok(SetOutcome::Downloaded)
    );
    assert_eq!(session.transport().set_calls().len(), 2);
}

#[test]
fn property_missing_on_the_part_is_a_soft_error() {
    init_logger();
    let config = SessionConfig::default();
    let registry = Arc::new(config.registry());
    let device = LoopbackDevice::powered_up(&registry).without(ids::DD_TS_FREQ_MAX);
    let mut session = DeviceSession::new(registry, config, PartInfo::default(), device);

    let err = session
        .set_property(ids::DD_TS_FREQ_MAX, 900)
        .expect_err("part lacks the property");
    assert_eq!(err, PropertyError::UnknownProperty(ids::DD_TS_FREQ_MAX));
    assert!(err.is_soft());
    let def = session
        .registry()
        .get(ids::DD_TS_FREQ_MAX)
        .expect("registered");
    assert_eq!(session.shadow_value(ids::DD_TS_FREQ_MAX), Ok(def.default_flat()));
}

#[test]
fn unconfigured_standard_is_unknown_without_transport_traffic() {
    init_logger();
    let mut session = session(SessionConfig {
        capabilities: Capabilities::TERRESTRIAL,
        ..SessionConfig::default()
    });

    assert_eq!(
        session.set_property2(ids::DVBS2_SYMBOL_RATE),
        Err(PropertyError::UnknownProperty(ids::DVBS2_SYMBOL_RATE))
    );
    assert_eq!(
        session.get_property2(ids::DD_DISEQC_FREQ).map(|_| ()),
        Err(PropertyError::UnknownProperty(ids::DD_DISEQC_FREQ))
    );
    assert!(session.transport().set_calls().is_empty());
    assert!(session.transport().get_calls().is_empty());
}

#[test]
fn edited_record_goes_out_through_set_property2() {
    init_logger();
    let mut session = session(SessionConfig::default());
    session
        .record_mut(ids::DD_BER_RESOL)
        .expect("registered")
        .set("exp", 3)
        .expect("field");

    assert_eq!(session.packed(ids::DD_BER_RESOL), Ok(3 | (1 << 3)));
    assert_eq!(
        session.set_property2(ids::DD_BER_RESOL),
        Ok(SetOutcome::Downloaded)
    );
    assert_eq!(session.transport().value(ids::DD_BER_RESOL), Some(11));
    assert_eq!(
        session.set_property2(ids::DD_BER_RESOL),
        Ok(SetOutcome::Unchanged)
    );
}

#[test]
fn get_property_reads_the_device_without_touching_the_cache() {
    init_logger();
    let mut session = session(SessionConfig::default());
    session
        .transport_mut()
        .send_property_set(ids::DD_TS_FREQ, 1234)
        .expect("loopback");

    assert_eq!(session.get_property(ids::DD_TS_FREQ), Ok(1234));
    assert_eq!(session.shadow_value(ids::DD_TS_FREQ), Ok(400));

    let record = session.get_property2(ids::DD_TS_FREQ).expect("query");
    assert_eq!(record.get("req_freq_10khz"), Some(1234));
    assert_eq!(session.shadow_value(ids::DD_TS_FREQ), Ok(400));
}

#[test]
fn reset_shadow_forces_a_fresh_download() {
    init_logger();
    let mut session = session(SessionConfig::default());
    session.set_property(ids::DD_TS_FREQ, 720).expect("download");
    session.reset_shadow();
    assert_eq!(session.shadow_value(ids::DD_TS_FREQ), Ok(400));
    assert_eq!(
        session.set_property(ids::DD_TS_FREQ, 720),
        Ok(SetOutcome::Downloaded)
    );
}

#[test]
fn sessions_sharing_a_registry_keep_separate_caches() {
    init_logger();
    let config = SessionConfig::default();
    let registry = Arc::new(Registry::new(config.capabilities));
    let mut first = DeviceSession::new(
        Arc::clone(&registry),
        config.clone(),
        PartInfo::default(),
        LoopbackDevice::powered_up(&registry),
    );
    let mut second = DeviceSession::new(
        Arc::clone(&registry),
        config,
        PartInfo::default(),
        LoopbackDevice::powered_up(&registry),
    );

    first.set_property(ids::DD_TS_FREQ, 720).expect("download");
    assert_eq!(second.shadow_value(ids::DD_TS_FREQ), Ok(400));
    assert_eq!(
        second.set_property(ids::DD_TS_FREQ, 720),
        Ok(SetOutcome::Downloaded)
    );
}

#[test]
fn bits_outside_the_layout_never_split_device_and_cache() {
    init_logger();
    let mut session = session(SessionConfig::default());

    assert_eq!(
        session.set_property(ids::DD_TS_FREQ, 0x4000),
        Ok(SetOutcome::Downloaded)
    );
    assert_eq!(session.transport().value(ids::DD_TS_FREQ), Some(0));
    assert_eq!(session.shadow_value(ids::DD_TS_FREQ), Ok(0));

    assert_eq!(
        session.set_property(ids::DD_TS_FREQ, 0x4000),
        Ok(SetOutcome::Unchanged)
    );
    assert_eq!(
        session.set_property(ids::DD_TS_FREQ, 720),
        Ok(SetOutcome::Downloaded)
    );
    assert_eq!(
        session.transport().set_calls(),
        &[(ids::DD_TS_FREQ, 0), (ids::DD_TS_FREQ, 720)]
    );
    assert_eq!(session.transport().value(ids::DD_TS_FREQ), Some(720));
}

#[test]
fn reject_policy_refuses_bits_outside_the_layout() {
    init_logger();
    let mut session = session(SessionConfig {
        field_width: FieldWidthPolicy::Reject,
        ..SessionConfig::default()
    });

    let err = session
        .set_property(ids::DD_BER_RESOL, 0xff00)
        .expect_err("undefined bits");
    assert_eq!(
        err,
        PropertyError::UndefinedBits {
            property: ids::DD_BER_RESOL,
            value: 0xff00,
            bits: 0xff00,
        }
    );
    assert_eq!(err.property(), ids::DD_BER_RESOL);
    assert!(session.transport().set_calls().is_empty());
    assert_eq!(session.transport().value(ids::DD_BER_RESOL), Some(15));
    assert_eq!(session.shadow_value(ids::DD_BER_RESOL), Ok(15));
}
