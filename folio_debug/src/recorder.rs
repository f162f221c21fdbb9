// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them back
//! as an iterator of [`RecordedEvent`].

use folio_core::form::Field;
use folio_core::reveal::ElementId;
use folio_core::time::{Duration, HostTime};
use folio_core::toast::ToastKind;
use folio_core::trace::{
    Component, ComponentInitEvent, FieldValidatedEvent, RevealEvent, SectionActivatedEvent,
    SubmitEvent, SubmitStage, ToastEvent, TraceSink,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_COMPONENT_INIT: u8 = 1;
const TAG_SECTION_ACTIVATED: u8 = 2;
const TAG_REVEAL: u8 = 3;
const TAG_FIELD_VALIDATED: u8 = 4;
const TAG_SUBMIT: u8 = 5;
const TAG_TOAST: u8 = 6;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_count(&mut self, v: usize) {
        self.write_u32(u32::try_from(v).unwrap_or(u32::MAX));
    }

    fn write_option_count(&mut self, v: Option<usize>) {
        match v {
            Some(val) => {
                self.write_u8(1);
                self.write_count(val);
            }
            None => {
                self.write_u8(0);
                self.write_u32(0);
            }
        }
    }

    fn write_component(&mut self, c: Component) {
        let index = Component::ALL.iter().position(|&x| x == c).unwrap_or(0);
        self.write_u8(u8::try_from(index).unwrap_or(0));
    }

    fn write_field(&mut self, f: Field) {
        self.write_u8(match f {
            Field::Name => 0,
            Field::Email => 1,
            Field::Message => 2,
        });
    }

    fn write_stage(&mut self, s: SubmitStage) {
        self.write_u8(match s {
            SubmitStage::Rejected => 0,
            SubmitStage::Sending => 1,
            SubmitStage::Busy => 2,
            SubmitStage::Completed => 3,
        });
    }

    fn write_kind(&mut self, k: ToastKind) {
        self.write_u8(match k {
            ToastKind::Success => 0,
            ToastKind::Error => 1,
        });
    }
}

impl TraceSink for RecorderSink {
    fn on_component_init(&mut self, e: &ComponentInitEvent) {
        self.write_u8(TAG_COMPONENT_INIT);
        self.write_component(e.component);
        self.write_u8(u8::from(e.ok));
        self.write_count(e.bound);
    }

    fn on_section_activated(&mut self, e: &SectionActivatedEvent) {
        self.write_u8(TAG_SECTION_ACTIVATED);
        self.write_count(e.index);
        self.write_option_count(e.previous);
        self.write_f64(e.scroll_y);
        self.write_u64(e.at.millis());
    }

    fn on_reveal(&mut self, e: &RevealEvent) {
        self.write_u8(TAG_REVEAL);
        self.write_component(e.component);
        self.write_u32(e.element.0);
        self.write_u64(e.delay.millis());
        self.write_u64(e.at.millis());
    }

    fn on_field_validated(&mut self, e: &FieldValidatedEvent) {
        self.write_u8(TAG_FIELD_VALIDATED);
        self.write_field(e.field);
        self.write_u8(u8::from(e.valid));
        self.write_u64(e.at.millis());
    }

    fn on_submit(&mut self, e: &SubmitEvent) {
        self.write_u8(TAG_SUBMIT);
        self.write_stage(e.stage);
        self.write_u64(e.at.millis());
    }

    fn on_toast(&mut self, e: &ToastEvent) {
        self.write_u8(TAG_TOAST);
        self.write_kind(e.kind);
        self.write_u64(e.hide_at.millis());
        self.write_u64(e.at.millis());
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug)]
pub enum RecordedEvent {
    /// A [`ComponentInitEvent`].
    ComponentInit(ComponentInitEvent),
    /// A [`SectionActivatedEvent`].
    SectionActivated(SectionActivatedEvent),
    /// A [`RevealEvent`].
    Reveal(RevealEvent),
    /// A [`FieldValidatedEvent`].
    FieldValidated(FieldValidatedEvent),
    /// A [`SubmitEvent`].
    Submit(SubmitEvent),
    /// A [`ToastEvent`].
    Toast(ToastEvent),
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn read_array<const N: usize>(&mut self) -> Option<[u8; N]> {
        let bytes = self.data.get(self.pos..self.pos + N)?;
        self.pos += N;
        bytes.try_into().ok()
    }

    fn read_u8(&mut self) -> Option<u8> {
        self.read_array::<1>().map(|[v]| v)
    }

    fn read_u32(&mut self) -> Option<u32> {
        self.read_array().map(u32::from_le_bytes)
    }

    fn read_u64(&mut self) -> Option<u64> {
        self.read_array().map(u64::from_le_bytes)
    }

    fn read_f64(&mut self) -> Option<f64> {
        self.read_u64().map(f64::from_bits)
    }

    fn read_bool(&mut self) -> Option<bool> {
        self.read_u8().map(|v| v != 0)
    }

    fn read_count(&mut self) -> Option<usize> {
        self.read_u32().map(|v| v as usize)
    }

    fn read_option_count(&mut self) -> Option<Option<usize>> {
        let present = self.read_u8()?;
        let val = self.read_count()?;
        Some(if present != 0 { Some(val) } else { None })
    }

    fn read_time(&mut self) -> Option<HostTime> {
        self.read_u64().map(HostTime)
    }

    fn read_component(&mut self) -> Option<Component> {
        Component::ALL.get(self.read_u8()? as usize).copied()
    }

    fn read_field(&mut self) -> Option<Field> {
        Field::ALL.get(self.read_u8()? as usize).copied()
    }

    fn read_stage(&mut self) -> Option<SubmitStage> {
        Some(match self.read_u8()? {
            0 => SubmitStage::Rejected,
            1 => SubmitStage::Sending,
            2 => SubmitStage::Busy,
            _ => SubmitStage::Completed,
        })
    }

    fn read_kind(&mut self) -> Option<ToastKind> {
        Some(match self.read_u8()? {
            0 => ToastKind::Success,
            _ => ToastKind::Error,
        })
    }

    fn decode_component_init(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::ComponentInit(ComponentInitEvent {
            component: self.read_component()?,
            ok: self.read_bool()?,
            bound: self.read_count()?,
        }))
    }

    fn decode_section_activated(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::SectionActivated(SectionActivatedEvent {
            index: self.read_count()?,
            previous: self.read_option_count()?,
            scroll_y: self.read_f64()?,
            at: self.read_time()?,
        }))
    }

    fn decode_reveal(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Reveal(RevealEvent {
            component: self.read_component()?,
            element: ElementId(self.read_u32()?),
            delay: Duration(self.read_u64()?),
            at: self.read_time()?,
        }))
    }

    fn decode_field_validated(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::FieldValidated(FieldValidatedEvent {
            field: self.read_field()?,
            valid: self.read_bool()?,
            at: self.read_time()?,
        }))
    }

    fn decode_submit(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Submit(SubmitEvent {
            stage: self.read_stage()?,
            at: self.read_time()?,
        }))
    }

    fn decode_toast(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Toast(ToastEvent {
            kind: self.read_kind()?,
            hide_at: self.read_time()?,
            at: self.read_time()?,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_COMPONENT_INIT => self.decode_component_init(),
            TAG_SECTION_ACTIVATED => self.decode_section_activated(),
            TAG_REVEAL => self.decode_reveal(),
            TAG_FIELD_VALIDATED => self.decode_field_validated(),
            TAG_SUBMIT => self.decode_submit(),
            TAG_TOAST => self.decode_toast(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_activation_survives_recording() {
        let mut rec = RecorderSink::new();
        rec.on_section_activated(&SectionActivatedEvent {
            index: 2,
            previous: None,
            scroll_y: 1234.5,
            at: HostTime(900),
        });

        let events: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(events.len(), 1, "one record");
        match &events[0] {
            RecordedEvent::SectionActivated(e) => {
                assert_eq!(e.index, 2, "index");
                assert_eq!(e.previous, None, "no previous section");
                assert!((e.scroll_y - 1234.5).abs() < f64::EPSILON, "scroll_y bits");
                assert_eq!(e.at, HostTime(900), "timestamp");
            }
            other => panic!("expected SectionActivated, got {other:?}"),
        }
    }

    #[test]
    fn submit_flow_decodes_in_order() {
        let mut rec = RecorderSink::new();
        for field in Field::ALL {
            rec.on_field_validated(&FieldValidatedEvent {
                field,
                valid: field != Field::Email,
                at: HostTime(10),
            });
        }
        rec.on_submit(&SubmitEvent {
            stage: SubmitStage::Rejected,
            at: HostTime(10),
        });
        rec.on_toast(&ToastEvent {
            kind: ToastKind::Error,
            hide_at: HostTime(3010),
            at: HostTime(10),
        });

        let events: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(events.len(), 5, "three fields, submit, toast");
        let invalid: Vec<Field> = events
            .iter()
            .filter_map(|e| match e {
                RecordedEvent::FieldValidated(f) if !f.valid => Some(f.field),
                _ => None,
            })
            .collect();
        assert_eq!(invalid, [Field::Email], "only the email failed");
        assert!(
            matches!(
                events[3],
                RecordedEvent::Submit(SubmitEvent {
                    stage: SubmitStage::Rejected,
                    ..
                })
            ),
            "got {:?}",
            events[3]
        );
        match &events[4] {
            RecordedEvent::Toast(t) => {
                assert_eq!(t.kind, ToastKind::Error, "error styling");
                assert_eq!(t.hide_at, HostTime(3010), "hide deadline");
            }
            other => panic!("expected Toast, got {other:?}"),
        }
    }

    #[test]
    fn every_component_round_trips_its_tag() {
        let mut rec = RecorderSink::new();
        for component in Component::ALL {
            rec.on_component_init(&ComponentInitEvent {
                component,
                ok: component != Component::Cursor,
                bound: 3,
            });
        }
        let decoded: Vec<Component> = decode(rec.as_bytes())
            .filter_map(|e| match e {
                RecordedEvent::ComponentInit(e) => Some(e.component),
                _ => None,
            })
            .collect();
        assert_eq!(decoded, Component::ALL, "components in order");
    }

    #[test]
    fn truncated_recording_stops_cleanly() {
        let mut rec = RecorderSink::new();
        rec.on_reveal(&RevealEvent {
            component: Component::TimelineReveal,
            element: ElementId(4),
            delay: Duration(200),
            at: HostTime(50),
        });
        let bytes = rec.into_bytes();
        assert_eq!(
            decode(&bytes[..bytes.len() - 1]).count(),
            0,
            "partial record is dropped"
        );
    }
}
