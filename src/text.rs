// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Human-readable rendering and parsing of property records.
// Author: Lukas Bower

//! Diagnostics text for property records.
//!
//! A record renders as its property name followed by one `-FIELD value`
//! token per field, e.g. `DD_TS_MODE -MODE SERIAL -CLOCK AUTO_ADAPT ...`.
//! Enumerated fields use their label when the value has one.

use core::fmt;

use crate::error::{PropertyError, PropertyResult};
use crate::record::PropertyRecord;
use crate::registry::FieldDef;
use crate::session::DeviceSession;
use crate::transport::PropertyTransport;
use crate::types::PropertyId;

/// Maximum rendered length in bytes.
pub const PROPERTY_TEXT_CAPACITY: usize = 1000;

/// Rendered record, bounded to [`PROPERTY_TEXT_CAPACITY`] bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyText {
    text: heapless::String<PROPERTY_TEXT_CAPACITY>,
    truncated: bool,
}

impl PropertyText {
    fn new() -> Self {
        Self {
            text: heapless::String::new(),
            truncated: false,
        }
    }

    /// Append `token` whole, or mark the text truncated.
    fn push(&mut self, token: &str) -> bool {
        if self.truncated || self.text.push_str(token).is_err() {
            self.truncated = true;
            return false;
        }
        true
    }

    /// Rendered text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// True when some fields did not fit.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl fmt::Display for PropertyText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render `record`, separating tokens with `separator`.
///
/// Tokens that would overflow the buffer are dropped whole and the result is
/// flagged as truncated.
#[must_use]
pub fn render(record: &PropertyRecord, separator: &str) -> PropertyText {
    let mut out = PropertyText::new();
    if !out.push(record.def().name) {
        return out;
    }
    let mut token = String::new();
    for (field, value) in record.fields() {
        token.clear();
        token.push_str(separator);
        token.push('-');
        token.push_str(&field.name.to_ascii_uppercase());
        token.push(' ');
        match field.label(value) {
            Some(label) => token.push_str(label),
            None => token.push_str(&value.to_string()),
        }
        if !out.push(&token) {
            break;
        }
    }
    out
}

/// Interpret `text` as a value of `field`: a label, a decimal number or a
/// `0x`-prefixed hexadecimal number.
pub fn parse_field_value(
    property: PropertyId,
    field: &FieldDef,
    text: &str,
) -> PropertyResult<u32> {
    let text = text.trim();
    if let Some(value) = field.value_of(text) {
        return Ok(value);
    }
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => text.parse::<u32>(),
    };
    parsed.map_err(|_| PropertyError::InvalidFieldText {
        property,
        field: field.name,
        text: text.to_owned(),
    })
}

impl<T: PropertyTransport> DeviceSession<T> {
    /// Text of the current record of `id`.
    pub fn property_text(&self, id: PropertyId) -> PropertyResult<PropertyText> {
        Ok(render(self.record(id)?, &self.config().text_separator))
    }

    /// Text of the value the device is known to hold for `id`.
    pub fn shadow_text(&self, id: PropertyId) -> PropertyResult<PropertyText> {
        Ok(render(self.shadow().store().get(id)?, &self.config().text_separator))
    }

    /// Assign one field of the current record from text.
    pub fn set_field_text(
        &mut self,
        id: PropertyId,
        field: &str,
        text: &str,
    ) -> PropertyResult<()> {
        let record = self.record_mut(id)?;
        let (_, def) = record
            .def()
            .field(field)
            .ok_or_else(|| PropertyError::UnknownField {
                property: id,
                field: field.to_owned(),
            })?;
        let value = parse_field_value(id, def, text)?;
        record.set(def.name, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caps::Capabilities;
    use crate::config::SessionConfig;
    use crate::registry::{ids, PropertyDef, PropertyGroup, Registry};
    use crate::transport::LoopbackDevice;
    use crate::types::PartInfo;

    const TS_MODE_SERIAL: &str = "DD_TS_MODE -MODE SERIAL -CLOCK AUTO_FIXED -CLK_GAPPED_EN DISABLED \
-TS_ERR_POLARITY NOT_INVERTED -SPECIAL FULL_TS -TS_FREQ_RESOLUTION NORMAL -SERIAL_PIN_SELECTION D0";

    fn session() -> DeviceSession<LoopbackDevice> {
        DeviceSession::from_config(
            SessionConfig::default(),
            PartInfo::default(),
            LoopbackDevice::new(),
        )
    }

    fn record(id: PropertyId) -> PropertyRecord {
        let registry = Registry::new(Capabilities::all());
        PropertyRecord::defaults(registry.get(id).expect("registered"))
    }

    #[test]
    fn numeric_fields_render_as_numbers() {
        let text = render(&record(ids::DD_BER_RESOL), " ");
        assert_eq!(text.as_str(), "DD_BER_RESOL -EXP 7 -MANT 1");
        assert!(!text.is_truncated());
    }

    #[test]
    fn enumerated_fields_render_labels_and_fall_back_to_numbers() {
        let mut rec = record(ids::DD_MODE);
        rec.set("bw", 8).expect("field");
        rec.set("modulation", 12).expect("field");
        let text = render(&rec, "|");
        assert_eq!(
            text.as_str(),
            "DD_MODE|-BW BW_8MHZ|-MODULATION 12|-INVERT_SPECTRUM NORMAL|-AUTO_DETECT NONE"
        );
    }

    #[test]
    fn overflow_drops_whole_tokens() {
        static WIDE: PropertyDef = PropertyDef {
            id: PropertyId::new(0x7fff),
            name: "WIDE",
            group: PropertyGroup::Common,
            requires: Capabilities::empty(),
            fields: &[FieldDef::new("f", 1, 0, 0)],
        };
        let long_separator = " ".repeat(PROPERTY_TEXT_CAPACITY);
        let text = render(&PropertyRecord::defaults(&WIDE), &long_separator);
        assert!(text.is_truncated());
        assert_eq!(text.as_str(), "WIDE");
    }

    #[test]
    fn parse_accepts_labels_decimal_and_hex() {
        let rec = record(ids::DD_TS_MODE);
        let (_, mode) = rec.def().field("mode").expect("field");
        assert_eq!(parse_field_value(ids::DD_TS_MODE, mode, "serial"), Ok(3));
        assert_eq!(parse_field_value(ids::DD_TS_MODE, mode, "6"), Ok(6));
        assert_eq!(parse_field_value(ids::DD_TS_MODE, mode, "0x7"), Ok(7));
        assert!(matches!(
            parse_field_value(ids::DD_TS_MODE, mode, "fast"),
            Err(PropertyError::InvalidFieldText { .. })
        ));
    }

    #[test]
    fn field_text_updates_the_current_record() {
        let mut session = session();
        session
            .set_field_text(ids::DD_TS_MODE, "mode", "serial")
            .expect("label");
        let text = session.property_text(ids::DD_TS_MODE).expect("registered");
        assert_eq!(text.as_str(), TS_MODE_SERIAL);
        assert_eq!(session.record(ids::DD_TS_MODE).expect("registered").get("mode"), Some(3));

        let shadow = session.shadow_text(ids::DD_TS_MODE).expect("registered");
        assert!(shadow.as_str().starts_with("DD_TS_MODE -MODE TRISTATE"));
    }

    #[test]
    fn shadow_text_follows_confirmed_downloads() {
        let mut session = session();
        session
            .set_field_text(ids::DD_TS_MODE, "MODE", "0x3")
            .expect("hex");
        session.set_property2(ids::DD_TS_MODE).expect("download");
        let shadow = session.shadow_text(ids::DD_TS_MODE).expect("registered");
        assert_eq!(shadow.as_str(), TS_MODE_SERIAL);
        assert_eq!(shadow.to_string(), TS_MODE_SERIAL);
    }

    #[test]
    fn field_text_errors_leave_the_record_alone() {
        let mut session = session();
        assert_eq!(
            session.set_field_text(ids::DD_TS_MODE, "speed", "1"),
            Err(PropertyError::UnknownField {
                property: ids::DD_TS_MODE,
                field: "speed".into(),
            })
        );
        assert_eq!(
            session.set_field_text(ids::DD_TS_MODE, "mode", "fast"),
            Err(PropertyError::InvalidFieldText {
                property: ids::DD_TS_MODE,
                field: "mode",
                text: "fast".into(),
            })
        );
        assert_eq!(session.record(ids::DD_TS_MODE).expect("registered").get("mode"), Some(0));
        assert!(session.transport().set_calls().is_empty());
    }
}
