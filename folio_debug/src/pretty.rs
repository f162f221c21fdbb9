// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use folio_core::trace::{
    ComponentInitEvent, FieldValidatedEvent, RevealEvent, SectionActivatedEvent, SubmitEvent,
    ToastEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_component_init(&mut self, e: &ComponentInitEvent) {
        let status = if e.ok { "ok" } else { "SKIPPED" };
        let _ = writeln!(
            self.writer,
            "[init] {} {status} bound={}",
            e.component.name(),
            e.bound,
        );
    }

    fn on_section_activated(&mut self, e: &SectionActivatedEvent) {
        let previous = e
            .previous
            .map_or_else(|| "-".to_owned(), |p| p.to_string());
        let _ = writeln!(
            self.writer,
            "[spy] section={} previous={previous} y={:.1} at={}ms",
            e.index,
            e.scroll_y,
            e.at.millis(),
        );
    }

    fn on_reveal(&mut self, e: &RevealEvent) {
        let _ = writeln!(
            self.writer,
            "[reveal] {} element={} delay={}ms at={}ms",
            e.component.name(),
            e.element.0,
            e.delay.millis(),
            e.at.millis(),
        );
    }

    fn on_field_validated(&mut self, e: &FieldValidatedEvent) {
        let verdict = if e.valid { "valid" } else { "INVALID" };
        let _ = writeln!(
            self.writer,
            "[field] {} {verdict} at={}ms",
            e.field.name(),
            e.at.millis(),
        );
    }

    fn on_submit(&mut self, e: &SubmitEvent) {
        let _ = writeln!(self.writer, "[submit] {:?} at={}ms", e.stage, e.at.millis());
    }

    fn on_toast(&mut self, e: &ToastEvent) {
        let _ = writeln!(
            self.writer,
            "[toast] {:?} at={}ms hide_at={}ms",
            e.kind,
            e.at.millis(),
            e.hide_at.millis(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::form::Field;
    use folio_core::time::HostTime;
    use folio_core::trace::Component;

    #[test]
    fn pretty_print_init_and_field() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_component_init(&ComponentInitEvent {
            component: Component::ContactForm,
            ok: false,
            bound: 0,
        });
        sink.on_field_validated(&FieldValidatedEvent {
            field: Field::Email,
            valid: false,
            at: HostTime(42),
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(output.contains("[init] contact-form SKIPPED"), "got: {output}");
        assert!(output.contains("[field] email INVALID at=42ms"), "got: {output}");
        assert_eq!(output.lines().count(), 2, "one line per event");
    }

    #[test]
    fn pretty_print_first_activation_has_no_previous() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_section_activated(&SectionActivatedEvent {
            index: 1,
            previous: None,
            scroll_y: 720.0,
            at: HostTime(5),
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(output.contains("previous=- y=720.0"), "got: {output}");
    }
}
