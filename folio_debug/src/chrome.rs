// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][format] JSON to the given writer.
//!
//! [format]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use folio_core::time::HostTime;
use serde_json::{Value, json};

use crate::recorder::{RecordedEvent, decode};

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of instant events, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
/// Each component gets its own track (`tid`). Initialization events carry no
/// timestamp and are placed at zero.
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();

    for recorded in decode(bytes) {
        match recorded {
            RecordedEvent::ComponentInit(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "ComponentInit",
                    "cat": "Page",
                    "ts": 0,
                    "pid": 0,
                    "tid": e.component.name(),
                    "s": "t",
                    "args": {
                        "ok": e.ok,
                        "bound": e.bound,
                    }
                }));
            }
            RecordedEvent::SectionActivated(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "SectionActivated",
                    "cat": "Nav",
                    "ts": to_us(e.at),
                    "pid": 0,
                    "tid": "scroll-spy",
                    "s": "t",
                    "args": {
                        "index": e.index,
                        "previous": e.previous,
                        "scroll_y": e.scroll_y,
                    }
                }));
            }
            RecordedEvent::Reveal(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Reveal",
                    "cat": "Reveal",
                    "ts": to_us(e.at),
                    "pid": 0,
                    "tid": e.component.name(),
                    "s": "t",
                    "args": {
                        "element": e.element.0,
                        "delay_ms": e.delay.millis(),
                    }
                }));
            }
            RecordedEvent::FieldValidated(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "FieldValidated",
                    "cat": "Form",
                    "ts": to_us(e.at),
                    "pid": 0,
                    "tid": "contact-form",
                    "s": "t",
                    "args": {
                        "field": e.field.name(),
                        "valid": e.valid,
                    }
                }));
            }
            RecordedEvent::Submit(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": format!("Submit{:?}", e.stage),
                    "cat": "Form",
                    "ts": to_us(e.at),
                    "pid": 0,
                    "tid": "contact-form",
                    "s": "t",
                }));
            }
            RecordedEvent::Toast(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Toast",
                    "cat": "Form",
                    "ts": to_us(e.at),
                    "pid": 0,
                    "tid": "contact-form",
                    "s": "t",
                    "args": {
                        "kind": format!("{:?}", e.kind),
                        "hide_at_us": to_us(e.hide_at),
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn to_us(t: HostTime) -> u64 {
    t.millis().saturating_mul(1000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use folio_core::toast::ToastKind;
    use folio_core::trace::{
        Component, ComponentInitEvent, SubmitEvent, SubmitStage, ToastEvent, TraceSink,
    };

    #[test]
    fn export_produces_valid_json() {
        let mut rec = RecorderSink::new();
        rec.on_component_init(&ComponentInitEvent {
            component: Component::ContactForm,
            ok: true,
            bound: 4,
        });
        rec.on_submit(&SubmitEvent {
            stage: SubmitStage::Sending,
            at: HostTime(100),
        });
        rec.on_toast(&ToastEvent {
            kind: ToastKind::Success,
            hide_at: HostTime(4600),
            at: HostTime(1600),
        });

        let mut out = Vec::new();
        export(rec.as_bytes(), &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();

        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed.len(), 3, "one entry per event");

        assert_eq!(parsed[0]["name"], "ComponentInit", "init first");
        assert_eq!(parsed[0]["tid"], "contact-form", "tracked per component");

        assert_eq!(parsed[1]["name"], "SubmitSending", "stage in the name");
        assert_eq!(parsed[1]["ts"], 100_000, "milliseconds become microseconds");

        assert_eq!(parsed[2]["args"]["kind"], "Success", "toast styling");
        assert_eq!(parsed[2]["args"]["hide_at_us"], 4_600_000, "hide deadline");
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert!(parsed.is_empty(), "no events");
    }
}
