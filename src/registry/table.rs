// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Static Si2183 property table (codes, bit layouts, power-on defaults, labels).
// Author: Lukas Bower

use super::{FieldDef, FieldLabels, PropertyDef, PropertyGroup};
use crate::caps::Capabilities;
use crate::types::PropertyId;

/// Property codes.
pub mod ids {
    use crate::types::PropertyId;

    pub const MASTER_IEN: PropertyId = PropertyId::new(0x0401);

    pub const DD_TS_MODE: PropertyId = PropertyId::new(0x1001);
    pub const DD_CBER_RESOL: PropertyId = PropertyId::new(0x1002);
    pub const DD_BER_RESOL: PropertyId = PropertyId::new(0x1003);
    pub const DD_PER_RESOL: PropertyId = PropertyId::new(0x1004);
    pub const DD_RSQ_BER_THRESHOLD: PropertyId = PropertyId::new(0x1005);
    pub const DD_IEN: PropertyId = PropertyId::new(0x1006);
    pub const DD_INT_SENSE: PropertyId = PropertyId::new(0x1007);
    pub const DD_TS_SETUP_SER: PropertyId = PropertyId::new(0x1008);
    pub const DD_TS_SETUP_PAR: PropertyId = PropertyId::new(0x1009);
    pub const DD_MODE: PropertyId = PropertyId::new(0x100a);
    pub const DD_IF_INPUT_FREQ: PropertyId = PropertyId::new(0x100b);
    pub const DD_FER_RESOL: PropertyId = PropertyId::new(0x100c);
    pub const DD_TS_FREQ: PropertyId = PropertyId::new(0x100d);
    pub const DD_SSI_SQI_PARAM: PropertyId = PropertyId::new(0x100f);
    pub const DD_TS_SLR_SERIAL: PropertyId = PropertyId::new(0x1010);
    pub const DD_TS_SERIAL_DIFF: PropertyId = PropertyId::new(0x1012);
    pub const DD_TS_FREQ_MAX: PropertyId = PropertyId::new(0x1013);
    pub const DD_SEC_TS_SERIAL_DIFF: PropertyId = PropertyId::new(0x1015);
    pub const DD_SEC_TS_SETUP_PAR: PropertyId = PropertyId::new(0x1016);
    pub const DD_SEC_TS_SETUP_SER: PropertyId = PropertyId::new(0x1017);
    pub const DD_SEC_TS_SLR_SERIAL: PropertyId = PropertyId::new(0x1018);
    pub const DD_DISEQC_FREQ: PropertyId = PropertyId::new(0x1020);
    pub const DD_DISEQC_PARAM: PropertyId = PropertyId::new(0x1021);

    pub const DVBC_CONSTELLATION: PropertyId = PropertyId::new(0x1101);
    pub const DVBC_SYMBOL_RATE: PropertyId = PropertyId::new(0x1102);
    pub const DVBC_AFC_RANGE: PropertyId = PropertyId::new(0x1103);
    pub const DVBC_ADC_CREST_FACTOR: PropertyId = PropertyId::new(0x1104);

    pub const DVBT_HIERARCHY: PropertyId = PropertyId::new(0x1201);
    pub const DVBT_AFC_RANGE: PropertyId = PropertyId::new(0x1202);
    pub const DVBT_ADC_CREST_FACTOR: PropertyId = PropertyId::new(0x1203);

    pub const DVBT2_AFC_RANGE: PropertyId = PropertyId::new(0x1301);
    pub const DVBT2_FEF_TUNER: PropertyId = PropertyId::new(0x1302);
    pub const DVBT2_ADC_CREST_FACTOR: PropertyId = PropertyId::new(0x1303);
    pub const DVBT2_MODE: PropertyId = PropertyId::new(0x1304);

    pub const DVBS2_SYMBOL_RATE: PropertyId = PropertyId::new(0x1401);
    pub const DVBS2_AFC_RANGE: PropertyId = PropertyId::new(0x1402);
    pub const DVBS2_ADC_CREST_FACTOR: PropertyId = PropertyId::new(0x1403);

    pub const DVBS_CONSTELLATION: PropertyId = PropertyId::new(0x1501);
    pub const DVBS_SYMBOL_RATE: PropertyId = PropertyId::new(0x1502);
    pub const DVBS_AFC_RANGE: PropertyId = PropertyId::new(0x1503);
    pub const DVBS_ADC_CREST_FACTOR: PropertyId = PropertyId::new(0x1504);

    pub const MCNS_CONSTELLATION: PropertyId = PropertyId::new(0x1601);
    pub const MCNS_SYMBOL_RATE: PropertyId = PropertyId::new(0x1602);
    pub const MCNS_AFC_RANGE: PropertyId = PropertyId::new(0x1603);
    pub const MCNS_ADC_CREST_FACTOR: PropertyId = PropertyId::new(0x1604);

    pub const DVBC2_AFC_RANGE: PropertyId = PropertyId::new(0x1703);
    pub const DVBC2_ADC_CREST_FACTOR: PropertyId = PropertyId::new(0x1704);

    pub const ISDBT_MODE: PropertyId = PropertyId::new(0x1801);
    pub const ISDBT_AFC_RANGE: PropertyId = PropertyId::new(0x1802);
    pub const ISDBT_ADC_CREST_FACTOR: PropertyId = PropertyId::new(0x1803);
    pub const ISDBT_AC_SELECT: PropertyId = PropertyId::new(0x1804);

    pub const SCAN_TER_CONFIG: PropertyId = PropertyId::new(0x0301);
    pub const SCAN_SAT_CONFIG: PropertyId = PropertyId::new(0x0302);
    pub const SCAN_FMIN: PropertyId = PropertyId::new(0x0303);
    pub const SCAN_FMAX: PropertyId = PropertyId::new(0x0304);
    pub const SCAN_SYMB_RATE_MIN: PropertyId = PropertyId::new(0x0305);
    pub const SCAN_SYMB_RATE_MAX: PropertyId = PropertyId::new(0x0306);
    pub const SCAN_INT_SENSE: PropertyId = PropertyId::new(0x0307);
    pub const SCAN_IEN: PropertyId = PropertyId::new(0x0308);
    pub const SCAN_SAT_UNICABLE_BW: PropertyId = PropertyId::new(0x0309);
    pub const SCAN_SAT_UNICABLE_MIN_TUNE_STEP: PropertyId = PropertyId::new(0x030a);
}

const OFF_ON: FieldLabels = &[(0, "OFF"), (1, "ON")];
const DISABLE_ENABLE: FieldLabels = &[(0, "DISABLE"), (1, "ENABLE")];
const DISABLED_ENABLED: FieldLabels = &[(0, "DISABLED"), (1, "ENABLED")];
const POLARITY: FieldLabels = &[(0, "NOT_INVERTED"), (1, "INVERTED")];

const TS_MODE: FieldLabels = &[
    (0, "TRISTATE"),
    (1, "OFF"),
    (3, "SERIAL"),
    (6, "PARALLEL"),
    (7, "GPIF"),
];
const TS_CLOCK: FieldLabels = &[(0, "AUTO_FIXED"), (1, "AUTO_ADAPT"), (2, "MANUAL")];
const TS_SPECIAL: FieldLabels = &[(0, "FULL_TS"), (1, "DATAS_TRISTATE")];
const TS_FREQ_RESOLUTION: FieldLabels = &[(0, "NORMAL"), (1, "FINE")];
const SERIAL_PIN: FieldLabels = &[
    (0, "D0"),
    (1, "D1"),
    (2, "D2"),
    (3, "D3"),
    (4, "D4"),
    (5, "D5"),
    (6, "D6"),
    (7, "D7"),
];
const SYNC_DURATION: FieldLabels = &[(0, "FIRST_BYTE"), (1, "FIRST_BIT")];
const BYTE_ORDER: FieldLabels = &[(0, "MSB_FIRST"), (1, "LSB_FIRST")];

const BANDWIDTH: FieldLabels = &[
    (2, "BW_1D7MHZ"),
    (5, "BW_5MHZ"),
    (6, "BW_6MHZ"),
    (7, "BW_7MHZ"),
    (8, "BW_8MHZ"),
    (10, "BW_6D1MHZ"),
];
const MODULATION: FieldLabels = &[
    (1, "MCNS"),
    (2, "DVBT"),
    (3, "DVBC"),
    (4, "ISDBT"),
    (7, "DVBT2"),
    (8, "DVBS"),
    (9, "DVBS2"),
    (10, "DSS"),
    (11, "DVBC2"),
    (15, "AUTO_DETECT"),
];
const SPECTRUM: FieldLabels = &[(0, "NORMAL"), (1, "INVERTED")];
const AUTO_DETECT: FieldLabels = &[
    (0, "NONE"),
    (1, "AUTO_DVB_T_T2"),
    (2, "AUTO_DVB_S_S2"),
    (3, "AUTO_DVB_S_S2_DSS"),
];

const QAM: FieldLabels = &[
    (0, "AUTO"),
    (7, "QAM16"),
    (8, "QAM32"),
    (9, "QAM64"),
    (10, "QAM128"),
    (11, "QAM256"),
];
const MCNS_QAM: FieldLabels = &[(0, "AUTO"), (9, "QAM64"), (11, "QAM256")];
const PSK: FieldLabels = &[(0, "AUTO"), (3, "QPSK")];
const HIERARCHY: FieldLabels = &[(0, "HP"), (1, "LP")];
const T2_LOCK_MODE: FieldLabels = &[(0, "ANY"), (1, "BASE_ONLY"), (2, "LITE_ONLY")];
const ISDBT_LAYER: FieldLabels = &[(0, "ALL"), (1, "A"), (2, "B"), (3, "C")];
const AC_FILTERING: FieldLabels = &[(0, "KEEP_SYNC_BYTE"), (1, "SKIP_SYNC_BYTE")];

const TER_SCAN_MODE: FieldLabels = &[(0, "BLIND_SCAN"), (1, "MAPPING_SCAN"), (2, "BLIND_LOCK")];
const ANALOG_BW: FieldLabels = &[(0, "1D7MHZ"), (1, "6MHZ"), (2, "7MHZ"), (3, "8MHZ")];

const fn exp_mant(exp: u32, mant: u32) -> [FieldDef; 2] {
    [FieldDef::new("exp", 4, 0, exp), FieldDef::new("mant", 4, 4, mant)]
}

const CBER_RESOL: [FieldDef; 2] = exp_mant(5, 1);
const PER_RESOL: [FieldDef; 2] = exp_mant(5, 1);
const FER_RESOL: [FieldDef; 2] = exp_mant(3, 1);
const RSQ_BER_THRESHOLD: [FieldDef; 2] = exp_mant(1, 10);

const TS_SERIAL_DIFF: &[FieldDef] = &[
    FieldDef::new("ts_data1_strength", 4, 0, 15),
    FieldDef::new("ts_data1_shape", 2, 4, 3),
    FieldDef::new("ts_data2_strength", 4, 6, 15),
    FieldDef::new("ts_data2_shape", 2, 10, 3),
    FieldDef::labelled("ts_clkb_on_data1", 1, 12, 0, DISABLE_ENABLE),
    FieldDef::labelled("ts_data0b_on_data2", 1, 13, 0, DISABLE_ENABLE),
];

const TS_SETUP_PAR: &[FieldDef] = &[
    FieldDef::new("ts_data_strength", 4, 0, 3),
    FieldDef::new("ts_data_shape", 3, 4, 1),
    FieldDef::new("ts_clk_strength", 4, 7, 3),
    FieldDef::new("ts_clk_shape", 3, 11, 1),
    FieldDef::labelled("ts_clk_invert", 1, 14, 1, POLARITY),
    FieldDef::labelled("ts_clk_shift", 1, 15, 0, DISABLE_ENABLE),
];

const TS_SETUP_SER: &[FieldDef] = &[
    FieldDef::new("ts_data_strength", 4, 0, 15),
    FieldDef::new("ts_data_shape", 2, 4, 3),
    FieldDef::new("ts_clk_strength", 4, 6, 15),
    FieldDef::new("ts_clk_shape", 2, 10, 3),
    FieldDef::labelled("ts_clk_invert", 1, 12, 1, POLARITY),
    FieldDef::labelled("ts_sync_duration", 1, 13, 0, SYNC_DURATION),
    FieldDef::labelled("ts_byte_order", 1, 14, 0, BYTE_ORDER),
];

const TS_SLR_SERIAL: &[FieldDef] = &[
    FieldDef::new("ts_data_slr", 2, 0, 0),
    FieldDef::labelled("ts_data_slr_on", 1, 2, 0, DISABLE_ENABLE),
    FieldDef::new("ts_data1_slr", 2, 3, 0),
    FieldDef::labelled("ts_data1_slr_on", 1, 5, 0, DISABLE_ENABLE),
    FieldDef::new("ts_data2_slr", 2, 6, 0),
    FieldDef::labelled("ts_data2_slr_on", 1, 8, 0, DISABLE_ENABLE),
    FieldDef::new("ts_clk_slr", 2, 9, 0),
    FieldDef::labelled("ts_clk_slr_on", 1, 11, 0, DISABLE_ENABLE),
];

const TS_FREQ: &[FieldDef] = &[FieldDef::new("req_freq_10khz", 14, 0, 400)];
const TS_FREQ_MAX: &[FieldDef] = &[FieldDef::new("req_freq_10khz", 14, 0, 10_000)];

const fn afc(range_khz: u32) -> [FieldDef; 1] {
    [FieldDef::new("range_khz", 16, 0, range_khz)]
}

const fn crest(factor: u32) -> [FieldDef; 1] {
    [FieldDef::new("crest_factor", 8, 0, factor)]
}

const fn symbol_rate(rate: u32) -> [FieldDef; 1] {
    [FieldDef::new("rate", 16, 0, rate)]
}

const AFC_100: [FieldDef; 1] = afc(100);
const AFC_550: [FieldDef; 1] = afc(550);
const AFC_4000: [FieldDef; 1] = afc(4000);
const CREST_104: [FieldDef; 1] = crest(104);
const CREST_112: [FieldDef; 1] = crest(112);
const CREST_130: [FieldDef; 1] = crest(130);
const SR_5361: [FieldDef; 1] = symbol_rate(5361);
const SR_6900: [FieldDef; 1] = symbol_rate(6900);
const SR_27500: [FieldDef; 1] = symbol_rate(27_500);

const fn prop(
    id: PropertyId,
    name: &'static str,
    group: PropertyGroup,
    requires: Capabilities,
    fields: &'static [FieldDef],
) -> PropertyDef {
    PropertyDef {
        id,
        name,
        group,
        requires,
        fields,
    }
}

const ANY: Capabilities = Capabilities::empty();
const SAT: Capabilities = Capabilities::SATELLITE;
const TER: Capabilities = Capabilities::TERRESTRIAL;

use PropertyGroup::*;

/// Every property known to the engine. [`super::Registry`] filters it by
/// capability.
#[rustfmt::skip]
pub static PROPERTY_TABLE: &[PropertyDef] = &[
    prop(ids::MASTER_IEN, "MASTER_IEN", Common, ANY, &[
        FieldDef::labelled("ddien", 1, 0, 0, OFF_ON),
        FieldDef::labelled("scanien", 1, 1, 0, OFF_ON),
        FieldDef::labelled("errien", 1, 6, 0, OFF_ON),
        FieldDef::labelled("ctsien", 1, 7, 0, OFF_ON),
    ]),
    // demod common
    prop(ids::DD_BER_RESOL, "DD_BER_RESOL", DemodCommon, ANY, &[
        FieldDef::new("exp", 3, 0, 7),
        FieldDef::new("mant", 5, 3, 1),
    ]),
    prop(ids::DD_CBER_RESOL, "DD_CBER_RESOL", DemodCommon, ANY, &CBER_RESOL),
    prop(ids::DD_FER_RESOL, "DD_FER_RESOL", DemodCommon, ANY, &FER_RESOL),
    prop(ids::DD_PER_RESOL, "DD_PER_RESOL", DemodCommon, ANY, &PER_RESOL),
    prop(ids::DD_RSQ_BER_THRESHOLD, "DD_RSQ_BER_THRESHOLD", DemodCommon, ANY, &RSQ_BER_THRESHOLD),
    prop(ids::DD_IEN, "DD_IEN", DemodCommon, ANY, &[
        FieldDef::labelled("ien_bit0", 1, 0, 0, DISABLE_ENABLE),
        FieldDef::labelled("ien_bit1", 1, 1, 0, DISABLE_ENABLE),
        FieldDef::labelled("ien_bit2", 1, 2, 0, DISABLE_ENABLE),
        FieldDef::labelled("ien_bit3", 1, 3, 0, DISABLE_ENABLE),
        FieldDef::labelled("ien_bit4", 1, 4, 0, DISABLE_ENABLE),
        FieldDef::labelled("ien_bit5", 1, 5, 0, DISABLE_ENABLE),
        FieldDef::labelled("ien_bit6", 1, 6, 0, DISABLE_ENABLE),
        FieldDef::labelled("ien_bit7", 1, 7, 0, DISABLE_ENABLE),
    ]),
    prop(ids::DD_INT_SENSE, "DD_INT_SENSE", DemodCommon, ANY, &[
        FieldDef::labelled("neg_bit0", 1, 0, 0, DISABLE_ENABLE),
        FieldDef::labelled("neg_bit1", 1, 1, 0, DISABLE_ENABLE),
        FieldDef::labelled("neg_bit2", 1, 2, 0, DISABLE_ENABLE),
        FieldDef::labelled("neg_bit3", 1, 3, 0, DISABLE_ENABLE),
        FieldDef::labelled("neg_bit4", 1, 4, 0, DISABLE_ENABLE),
        FieldDef::labelled("neg_bit5", 1, 5, 0, DISABLE_ENABLE),
        FieldDef::labelled("neg_bit6", 1, 6, 0, DISABLE_ENABLE),
        FieldDef::labelled("neg_bit7", 1, 7, 0, DISABLE_ENABLE),
        FieldDef::labelled("pos_bit0", 1, 8, 0, DISABLE_ENABLE),
        FieldDef::labelled("pos_bit1", 1, 9, 0, DISABLE_ENABLE),
        FieldDef::labelled("pos_bit2", 1, 10, 0, DISABLE_ENABLE),
        FieldDef::labelled("pos_bit3", 1, 11, 0, DISABLE_ENABLE),
        FieldDef::labelled("pos_bit4", 1, 12, 0, DISABLE_ENABLE),
        FieldDef::labelled("pos_bit5", 1, 13, 0, DISABLE_ENABLE),
        FieldDef::labelled("pos_bit6", 1, 14, 0, DISABLE_ENABLE),
        FieldDef::labelled("pos_bit7", 1, 15, 0, DISABLE_ENABLE),
    ]),
    prop(ids::DD_IF_INPUT_FREQ, "DD_IF_INPUT_FREQ", DemodCommon, ANY, &[
        FieldDef::new("offset", 16, 0, 5000),
    ]),
    prop(ids::DD_MODE, "DD_MODE", DemodCommon, ANY, &[
        FieldDef::labelled("bw", 4, 0, 8, BANDWIDTH),
        FieldDef::labelled("modulation", 4, 4, 2, MODULATION),
        FieldDef::labelled("invert_spectrum", 1, 8, 0, SPECTRUM),
        FieldDef::labelled("auto_detect", 3, 9, 0, AUTO_DETECT),
    ]),
    prop(ids::DD_SSI_SQI_PARAM, "DD_SSI_SQI_PARAM", DemodCommon, ANY, &[
        FieldDef::new("sqi_average", 5, 0, 1),
    ]),
    prop(ids::DD_TS_FREQ, "DD_TS_FREQ", DemodCommon, ANY, TS_FREQ),
    prop(ids::DD_TS_FREQ_MAX, "DD_TS_FREQ_MAX", DemodCommon, ANY, TS_FREQ_MAX),
    prop(ids::DD_TS_MODE, "DD_TS_MODE", DemodCommon, ANY, &[
        FieldDef::labelled("mode", 4, 0, 0, TS_MODE),
        FieldDef::labelled("clock", 2, 4, 0, TS_CLOCK),
        FieldDef::labelled("clk_gapped_en", 1, 6, 0, DISABLED_ENABLED),
        FieldDef::labelled("ts_err_polarity", 1, 7, 0, POLARITY),
        FieldDef::labelled("special", 2, 8, 0, TS_SPECIAL),
        FieldDef::labelled("ts_freq_resolution", 1, 10, 0, TS_FREQ_RESOLUTION),
        FieldDef::labelled("serial_pin_selection", 3, 11, 0, SERIAL_PIN),
    ]),
    prop(ids::DD_TS_SERIAL_DIFF, "DD_TS_SERIAL_DIFF", DemodCommon, ANY, TS_SERIAL_DIFF),
    prop(ids::DD_TS_SETUP_PAR, "DD_TS_SETUP_PAR", DemodCommon, ANY, TS_SETUP_PAR),
    prop(ids::DD_TS_SETUP_SER, "DD_TS_SETUP_SER", DemodCommon, ANY, TS_SETUP_SER),
    prop(ids::DD_TS_SLR_SERIAL, "DD_TS_SLR_SERIAL", DemodCommon, ANY, TS_SLR_SERIAL),
    prop(ids::DD_SEC_TS_SERIAL_DIFF, "DD_SEC_TS_SERIAL_DIFF", DemodCommon, ANY, TS_SERIAL_DIFF),
    prop(ids::DD_SEC_TS_SETUP_PAR, "DD_SEC_TS_SETUP_PAR", DemodCommon, ANY, TS_SETUP_PAR),
    prop(ids::DD_SEC_TS_SETUP_SER, "DD_SEC_TS_SETUP_SER", DemodCommon, ANY, TS_SETUP_SER),
    prop(ids::DD_SEC_TS_SLR_SERIAL, "DD_SEC_TS_SLR_SERIAL", DemodCommon, ANY, TS_SLR_SERIAL),
    prop(ids::DD_DISEQC_FREQ, "DD_DISEQC_FREQ", DemodCommon, SAT, &[
        FieldDef::new("freq_hz", 16, 0, 22_000),
    ]),
    prop(ids::DD_DISEQC_PARAM, "DD_DISEQC_PARAM", DemodCommon, SAT, &[
        FieldDef::labelled("sequence_mode", 1, 0, 0, &[(0, "GAP"), (1, "NO_GAP")]),
        FieldDef::new("input_pin", 1, 1, 0),
    ]),
    // cable
    prop(ids::DVBC_ADC_CREST_FACTOR, "DVBC_ADC_CREST_FACTOR", Dvbc, Capabilities::DVB_C, &CREST_112),
    prop(ids::DVBC_AFC_RANGE, "DVBC_AFC_RANGE", Dvbc, Capabilities::DVB_C, &AFC_100),
    prop(ids::DVBC_CONSTELLATION, "DVBC_CONSTELLATION", Dvbc, Capabilities::DVB_C, &[
        FieldDef::labelled("constellation", 6, 0, 0, QAM),
    ]),
    prop(ids::DVBC_SYMBOL_RATE, "DVBC_SYMBOL_RATE", Dvbc, Capabilities::DVB_C, &SR_6900),
    prop(ids::DVBC2_ADC_CREST_FACTOR, "DVBC2_ADC_CREST_FACTOR", Dvbc2, Capabilities::DVB_C2, &CREST_130),
    prop(ids::DVBC2_AFC_RANGE, "DVBC2_AFC_RANGE", Dvbc2, Capabilities::DVB_C2, &AFC_550),
    prop(ids::MCNS_ADC_CREST_FACTOR, "MCNS_ADC_CREST_FACTOR", Mcns, Capabilities::MCNS, &CREST_112),
    prop(ids::MCNS_AFC_RANGE, "MCNS_AFC_RANGE", Mcns, Capabilities::MCNS, &AFC_100),
    prop(ids::MCNS_CONSTELLATION, "MCNS_CONSTELLATION", Mcns, Capabilities::MCNS, &[
        FieldDef::labelled("constellation", 6, 0, 0, MCNS_QAM),
    ]),
    prop(ids::MCNS_SYMBOL_RATE, "MCNS_SYMBOL_RATE", Mcns, Capabilities::MCNS, &SR_5361),
    // satellite
    prop(ids::DVBS_ADC_CREST_FACTOR, "DVBS_ADC_CREST_FACTOR", Dvbs, SAT, &CREST_104),
    prop(ids::DVBS_AFC_RANGE, "DVBS_AFC_RANGE", Dvbs, SAT, &AFC_4000),
    prop(ids::DVBS_CONSTELLATION, "DVBS_CONSTELLATION", Dvbs, SAT, &[
        FieldDef::labelled("constellation", 6, 0, 0, PSK),
    ]),
    prop(ids::DVBS_SYMBOL_RATE, "DVBS_SYMBOL_RATE", Dvbs, SAT, &SR_27500),
    prop(ids::DVBS2_ADC_CREST_FACTOR, "DVBS2_ADC_CREST_FACTOR", Dvbs2, SAT, &CREST_104),
    prop(ids::DVBS2_AFC_RANGE, "DVBS2_AFC_RANGE", Dvbs2, SAT, &AFC_4000),
    prop(ids::DVBS2_SYMBOL_RATE, "DVBS2_SYMBOL_RATE", Dvbs2, SAT, &SR_27500),
    // terrestrial
    prop(ids::DVBT_ADC_CREST_FACTOR, "DVBT_ADC_CREST_FACTOR", Dvbt, Capabilities::DVB_T, &CREST_130),
    prop(ids::DVBT_AFC_RANGE, "DVBT_AFC_RANGE", Dvbt, Capabilities::DVB_T, &AFC_550),
    prop(ids::DVBT_HIERARCHY, "DVBT_HIERARCHY", Dvbt, Capabilities::DVB_T, &[
        FieldDef::labelled("stream", 1, 0, 0, HIERARCHY),
    ]),
    prop(ids::DVBT2_ADC_CREST_FACTOR, "DVBT2_ADC_CREST_FACTOR", Dvbt2, Capabilities::DVB_T2, &CREST_130),
    prop(ids::DVBT2_AFC_RANGE, "DVBT2_AFC_RANGE", Dvbt2, Capabilities::DVB_T2, &AFC_550),
    prop(ids::DVBT2_FEF_TUNER, "DVBT2_FEF_TUNER", Dvbt2, Capabilities::DVB_T2, &[
        FieldDef::new("tuner_delay", 8, 0, 1),
        FieldDef::new("tuner_freeze_time", 4, 8, 1),
        FieldDef::new("tuner_unfreeze_time", 4, 12, 1),
    ]),
    prop(ids::DVBT2_MODE, "DVBT2_MODE", Dvbt2, Capabilities::DVB_T2, &[
        FieldDef::labelled("lock_mode", 2, 0, 0, T2_LOCK_MODE),
    ]),
    prop(ids::ISDBT_AC_SELECT, "ISDBT_AC_SELECT", Isdbt, Capabilities::ISDB_T, &[
        FieldDef::new("seg_sel", 4, 0, 0),
        FieldDef::labelled("filtering", 1, 4, 0, AC_FILTERING),
    ]),
    prop(ids::ISDBT_ADC_CREST_FACTOR, "ISDBT_ADC_CREST_FACTOR", Isdbt, Capabilities::ISDB_T, &CREST_130),
    prop(ids::ISDBT_AFC_RANGE, "ISDBT_AFC_RANGE", Isdbt, Capabilities::ISDB_T, &AFC_550),
    prop(ids::ISDBT_MODE, "ISDBT_MODE", Isdbt, Capabilities::ISDB_T, &[
        FieldDef::labelled("layer_mon", 4, 0, 0, ISDBT_LAYER),
        FieldDef::new("dl_config", 4, 4, 0),
    ]),
    // scan
    prop(ids::SCAN_FMAX, "SCAN_FMAX", Scan, ANY, &[FieldDef::new("scan_fmax", 16, 0, 0)]),
    prop(ids::SCAN_FMIN, "SCAN_FMIN", Scan, ANY, &[FieldDef::new("scan_fmin", 16, 0, 0)]),
    prop(ids::SCAN_IEN, "SCAN_IEN", Scan, ANY, &[
        FieldDef::labelled("buzien", 1, 0, 0, DISABLE_ENABLE),
        FieldDef::labelled("reqien", 1, 1, 0, DISABLE_ENABLE),
    ]),
    prop(ids::SCAN_INT_SENSE, "SCAN_INT_SENSE", Scan, ANY, &[
        FieldDef::labelled("buznegen", 1, 0, 1, DISABLE_ENABLE),
        FieldDef::labelled("reqnegen", 1, 1, 0, DISABLE_ENABLE),
        FieldDef::labelled("buzposen", 1, 8, 0, DISABLE_ENABLE),
        FieldDef::labelled("reqposen", 1, 9, 1, DISABLE_ENABLE),
    ]),
    prop(ids::SCAN_SAT_CONFIG, "SCAN_SAT_CONFIG", Scan, SAT, &[
        FieldDef::labelled("analog_detect", 1, 0, 0, DISABLED_ENABLED),
        FieldDef::new("reserved1", 1, 1, 0),
        FieldDef::new("reserved2", 6, 2, 12),
        FieldDef::new("scan_debug", 4, 8, 0),
    ]),
    prop(ids::SCAN_SAT_UNICABLE_BW, "SCAN_SAT_UNICABLE_BW", Scan, SAT, &[
        FieldDef::new("scan_sat_unicable_bw", 16, 0, 0),
    ]),
    prop(ids::SCAN_SAT_UNICABLE_MIN_TUNE_STEP, "SCAN_SAT_UNICABLE_MIN_TUNE_STEP", Scan, SAT, &[
        FieldDef::new("scan_sat_unicable_min_tune_step", 8, 0, 50),
    ]),
    prop(ids::SCAN_SYMB_RATE_MAX, "SCAN_SYMB_RATE_MAX", Scan, ANY, &[
        FieldDef::new("scan_symb_rate_max", 16, 0, 0),
    ]),
    prop(ids::SCAN_SYMB_RATE_MIN, "SCAN_SYMB_RATE_MIN", Scan, ANY, &[
        FieldDef::new("scan_symb_rate_min", 16, 0, 0),
    ]),
    prop(ids::SCAN_TER_CONFIG, "SCAN_TER_CONFIG", Scan, TER, &[
        FieldDef::labelled("mode", 2, 0, 0, TER_SCAN_MODE),
        FieldDef::labelled("analog_bw", 2, 2, 3, ANALOG_BW),
        FieldDef::labelled("search_analog", 1, 4, 0, DISABLE_ENABLE),
        FieldDef::new("scan_debug", 4, 12, 0),
    ]),
];
