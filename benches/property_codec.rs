// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Benchmark property packing, unpacking and a full bulk download over loopback.
// Author: Lukas Bower

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use si2183_props::{
    Capabilities, Codec, DeviceSession, FieldWidthPolicy, LoopbackDevice, PartInfo,
    PropertyRecord, Registry, SessionConfig, WriteMode,
};

fn bench_codec(c: &mut Criterion) {
    let registry = Registry::new(Capabilities::all());
    let codec = Codec::new(&registry, FieldWidthPolicy::Truncate);
    let records: Vec<PropertyRecord> = registry.iter().map(PropertyRecord::defaults).collect();

    c.bench_function("pack_all_properties", |b| {
        b.iter(|| {
            for record in &records {
                let _ = black_box(codec.pack(record, record.id()));
            }
        });
    });

    c.bench_function("unpack_all_properties", |b| {
        let mut scratch = records.clone();
        b.iter(|| {
            for record in scratch.iter_mut() {
                let id = record.id();
                let _ = codec.unpack(black_box(0xa5a5), id, record);
            }
        });
    });
}

fn bench_download_all(c: &mut Criterion) {
    let config = SessionConfig {
        write_mode: WriteMode::Always,
        ..SessionConfig::default()
    };
    let registry = Arc::new(config.registry());

    c.bench_function("download_all_loopback", |b| {
        b.iter(|| {
            let device = LoopbackDevice::powered_up(&registry);
            let mut session = DeviceSession::new(
                Arc::clone(&registry),
                config.clone(),
                PartInfo::default(),
                device,
            );
            black_box(session.download_all());
        });
    });
}

criterion_group!(benches, bench_codec, bench_download_all);
criterion_main!(benches);
