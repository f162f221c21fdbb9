// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trace sink that writes to the browser console.

use alloc::format;

use folio_core::trace::{
    ComponentInitEvent, FieldValidatedEvent, RevealEvent, SectionActivatedEvent, SubmitEvent,
    ToastEvent, TraceSink,
};
use gloo::console::{debug, log, warn};

/// Logs page events through `console.*`.
///
/// Component failures go to `console.warn`, lifecycle events to
/// `console.log`. Per-element reveals and field checks are noisy and only
/// logged when `verbose` is set.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink {
    verbose: bool,
}

impl ConsoleSink {
    /// Creates a sink that logs lifecycle events and failures.
    #[must_use]
    pub const fn new() -> Self {
        Self { verbose: false }
    }

    /// Creates a sink that also logs reveals and field checks.
    #[must_use]
    pub const fn verbose() -> Self {
        Self { verbose: true }
    }
}

impl TraceSink for ConsoleSink {
    fn on_component_init(&mut self, e: &ComponentInitEvent) {
        if e.ok {
            log!(format!(
                "[folio] {} ready ({} elements)",
                e.component.name(),
                e.bound
            ));
        } else {
            warn!(format!("[folio] {} skipped", e.component.name()));
        }
    }

    fn on_section_activated(&mut self, e: &SectionActivatedEvent) {
        if self.verbose {
            debug!(format!(
                "[folio] section {} active at y={} ({:?})",
                e.index, e.scroll_y, e.at
            ));
        }
    }

    fn on_reveal(&mut self, e: &RevealEvent) {
        if self.verbose {
            debug!(format!(
                "[folio] {} revealed #{} after {:?}",
                e.component.name(),
                e.element.0,
                e.delay
            ));
        }
    }

    fn on_field_validated(&mut self, e: &FieldValidatedEvent) {
        if self.verbose {
            debug!(format!(
                "[folio] {} {}",
                e.field.name(),
                if e.valid { "valid" } else { "invalid" }
            ));
        }
    }

    fn on_submit(&mut self, e: &SubmitEvent) {
        log!(format!("[folio] submit {:?} ({:?})", e.stage, e.at));
    }

    fn on_toast(&mut self, e: &ToastEvent) {
        log!(format!("[folio] toast {:?} until {:?}", e.kind, e.hide_at));
    }
}
