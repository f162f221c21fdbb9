// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted page session that exercises the tracing and diagnostics pipeline.
//!
//! Drives the core state machines through a visit (initialization, scrolling,
//! reveals, a rejected and then an accepted contact form submission) on a
//! virtual clock, recording events to both a
//! [`PrettyPrintSink`](folio_debug::pretty::PrettyPrintSink) and a
//! [`RecorderSink`](folio_debug::recorder::RecorderSink), then exports a
//! Chrome trace JSON file.

use std::fs::File;
use std::io::BufWriter;

use folio_core::config::PageConfig;
use folio_core::form::{ContactForm, Field, FormValues, Notice, SubmitOutcome};
use folio_core::nav::{ScrollSpy, SectionBounds};
use folio_core::reveal::{ElementId, GroupOptions, IntersectionSample, RevealSet};
use folio_core::time::{Duration, HostTime};
use folio_core::timer::{TimerId, TimerQueue};
use folio_core::toast::Toast;
use folio_core::trace::{
    Component, ComponentInitEvent, FieldValidatedEvent, RevealEvent, SectionActivatedEvent,
    SubmitEvent, SubmitStage, ToastEvent, TraceSink, Tracer,
};

use folio_debug::pretty::PrettyPrintSink;
use folio_debug::recorder::RecorderSink;

/// Section heights of the scripted page, in CSS pixels.
const SECTION_HEIGHTS: [f64; 5] = [800.0, 900.0, 1100.0, 1200.0, 700.0];
/// Scroll position sampled every 100ms while the visitor scrolls down.
const SCROLL_STEP: f64 = 120.0;

#[derive(Debug)]
enum Job {
    CompleteSubmit,
    HideToast,
}

/// Forwards every event to both sinks.
struct Tee<'a> {
    pretty: &'a mut PrettyPrintSink,
    recorder: &'a mut RecorderSink,
}

impl TraceSink for Tee<'_> {
    fn on_component_init(&mut self, e: &ComponentInitEvent) {
        self.pretty.on_component_init(e);
        self.recorder.on_component_init(e);
    }

    fn on_section_activated(&mut self, e: &SectionActivatedEvent) {
        self.pretty.on_section_activated(e);
        self.recorder.on_section_activated(e);
    }

    fn on_reveal(&mut self, e: &RevealEvent) {
        self.pretty.on_reveal(e);
        self.recorder.on_reveal(e);
    }

    fn on_field_validated(&mut self, e: &FieldValidatedEvent) {
        self.pretty.on_field_validated(e);
        self.recorder.on_field_validated(e);
    }

    fn on_submit(&mut self, e: &SubmitEvent) {
        self.pretty.on_submit(e);
        self.recorder.on_submit(e);
    }

    fn on_toast(&mut self, e: &ToastEvent) {
        self.pretty.on_toast(e);
        self.recorder.on_toast(e);
    }
}

fn main() {
    let config = PageConfig::portfolio();

    // -- sinks -------------------------------------------------------------
    let mut pretty = PrettyPrintSink::new(Box::new(std::io::stdout()));
    let mut recorder = RecorderSink::new();
    let mut tee = Tee {
        pretty: &mut pretty,
        recorder: &mut recorder,
    };
    let mut tracer = Tracer::new(&mut tee);

    // -- initialization ----------------------------------------------------
    for component in Component::ALL {
        tracer.component_init(&ComponentInitEvent {
            component,
            ok: true,
            bound: 1,
        });
    }

    // -- scroll through every section --------------------------------------
    let mut sections = Vec::with_capacity(SECTION_HEIGHTS.len());
    let mut top = 0.0;
    for height in SECTION_HEIGHTS {
        sections.push(SectionBounds { top, height });
        top += height;
    }
    let page_height = top;

    let mut reveal = RevealSet::new(config.reveal);
    let ids = reveal.register_group(sections.len(), GroupOptions::AS_IS);

    let mut timers: TimerQueue<Job> = TimerQueue::new(HostTime::ZERO);
    let mut spy = ScrollSpy::new(&config.nav);
    let mut scroll_y = 0.0;
    while scroll_y < page_height {
        let now = timers.now();
        if let Some(change) = spy.update(&sections, scroll_y) {
            tracer.section_activated(&SectionActivatedEvent {
                index: change.current,
                previous: change.previous,
                scroll_y,
                at: now,
            });
        }
        let batch: Vec<IntersectionSample> = ids
            .clone()
            .zip(&sections)
            .filter(|(_, s)| s.top < scroll_y + 800.0)
            .map(|(id, _)| IntersectionSample {
                element: ElementId(id),
                is_intersecting: true,
                ratio: 1.0,
            })
            .collect();
        for r in reveal.observe(&batch) {
            tracer.reveal(&RevealEvent {
                component: Component::Reveal,
                element: r.element,
                delay: r.delay,
                at: now,
            });
        }
        timers.advance_by(Duration(100));
        scroll_y += SCROLL_STEP;
    }

    // -- contact form ------------------------------------------------------
    let mut form = ContactForm::new(config.form);
    let mut toast = Toast::new(config.form.toast_lifetime);
    let mut hide_timer: Option<TimerId> = None;

    let attempts = [
        FormValues {
            name: "A",
            email: "ada@analytical",
            message: "Hi",
        },
        FormValues {
            name: "Ada",
            email: "ada@analytical.engine",
            message: "Loved the loom pattern compiler!",
        },
    ];
    for values in attempts {
        let now = timers.now();
        for field in Field::ALL {
            let valid = form.evaluate(field, values.get(field));
            tracer.field_validated(&FieldValidatedEvent {
                field,
                valid,
                at: now,
            });
        }
        let outcome = form.submit(&values, now);
        tracer.submit(&SubmitEvent {
            stage: outcome.into(),
            at: now,
        });
        if let SubmitOutcome::Sending { complete_at } = outcome {
            timers.schedule_at(complete_at, Job::CompleteSubmit);
        }
        let mut notices: Vec<Notice> = outcome.notice().into_iter().collect();

        // Give the visitor two seconds to fix the errors.
        let until = HostTime(now.millis() + 2000);
        loop {
            for notice in notices.drain(..) {
                let at = timers.now();
                let hide_at = toast.show(notice.message, notice.kind, at);
                if let Some(id) = hide_timer.take() {
                    timers.cancel(id);
                }
                hide_timer = Some(timers.schedule_at(hide_at, Job::HideToast));
                tracer.toast(&ToastEvent {
                    kind: notice.kind,
                    hide_at,
                    at,
                });
            }
            let Some(fired) = timers.pop_due(until) else {
                break;
            };
            match fired.payload {
                Job::CompleteSubmit => {
                    tracer.submit(&SubmitEvent {
                        stage: SubmitStage::Completed,
                        at: fired.deadline,
                    });
                    notices.extend(form.complete());
                }
                Job::HideToast => {
                    toast.hide();
                    hide_timer = None;
                }
            }
        }
        timers.advance_to(until);
    }

    // -- export ------------------------------------------------------------
    let path = "trace.json";
    let file = File::create(path).expect("failed to create trace.json");
    let mut writer = BufWriter::new(file);
    folio_debug::chrome::export(recorder.as_bytes(), &mut writer)
        .expect("failed to write Chrome trace");

    println!("Wrote {path} ({} sections)", sections.len());
}
