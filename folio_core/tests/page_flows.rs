// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end page flows driven by a virtual clock.
//!
//! Each test wires core state machines to a `TimerQueue` the same way the web
//! backend wires them to browser timers, then checks the observable result.

use folio_core::config::PageConfig;
use folio_core::effects::TypingReveal;
use folio_core::form::{ContactForm, FormValues, Notice, SubmitOutcome};
use folio_core::nav::{ScrollSpy, SectionBounds};
use folio_core::rate_limit::{Debounce, Throttle};
use folio_core::time::{Duration, HostTime};
use folio_core::timer::{TimerId, TimerQueue};
use folio_core::toast::{Toast, ToastKind};

#[derive(Debug, Clone, PartialEq)]
enum Job {
    DebounceDue,
    CompleteSubmit,
    HideToast,
    TypeNext,
}

/// Toast bound to a single replaceable hide timer, as in the web backend.
struct ToastHarness {
    toast: Toast,
    hide_timer: Option<TimerId>,
    shown: Vec<(String, ToastKind)>,
}

impl ToastHarness {
    fn new(config: &PageConfig) -> Self {
        Self {
            toast: Toast::new(config.form.toast_lifetime),
            hide_timer: None,
            shown: Vec::new(),
        }
    }

    fn show(&mut self, timers: &mut TimerQueue<Job>, notice: Notice) {
        let hide_at = self.toast.show(notice.message, notice.kind, timers.now());
        if let Some(id) = self.hide_timer.take() {
            timers.cancel(id);
        }
        self.hide_timer = Some(timers.schedule_at(hide_at, Job::HideToast));
        self.shown.push((notice.message.to_owned(), notice.kind));
    }
}

fn run_form(
    values: FormValues<'_>,
    until: HostTime,
) -> (ContactForm, ToastHarness, Vec<SubmitOutcome>) {
    let config = PageConfig::portfolio();
    let mut timers = TimerQueue::new(HostTime::ZERO);
    let mut form = ContactForm::new(config.form);
    let mut toast = ToastHarness::new(&config);

    let outcome = form.submit(&values, timers.now());
    match outcome {
        SubmitOutcome::Sending { complete_at } => {
            timers.schedule_at(complete_at, Job::CompleteSubmit);
        }
        SubmitOutcome::Rejected | SubmitOutcome::Busy => {}
    }
    if let Some(notice) = outcome.notice() {
        toast.show(&mut timers, notice);
    }

    while let Some(fired) = timers.pop_due(until) {
        match fired.payload {
            Job::CompleteSubmit => {
                if let Some(notice) = form.complete() {
                    toast.show(&mut timers, notice);
                }
            }
            Job::HideToast => {
                toast.toast.hide();
                toast.hide_timer = None;
            }
            other => panic!("unexpected job {other:?}"),
        }
    }
    (form, toast, vec![outcome])
}

#[test]
fn valid_submission_shows_one_success_toast_after_delay() {
    let values = FormValues {
        name: "Grace",
        email: "grace@navy.mil",
        message: "Found a moth in the relay.",
    };

    let (form, toast, _) = run_form(values, HostTime(1499));
    assert!(form.button().disabled, "still sending before the delay");
    assert!(toast.shown.is_empty(), "no toast yet");

    let (form, toast, outcomes) = run_form(values, HostTime(1500));
    assert!(matches!(outcomes[0], SubmitOutcome::Sending { .. }));
    assert_eq!(
        toast.shown,
        vec![("Message sent (mock).".to_owned(), ToastKind::Success)],
        "exactly one success toast"
    );
    assert!(!form.button().disabled, "button restored");
    assert!(!form.button().busy, "original label restored");
}

#[test]
fn invalid_submission_fails_synchronously() {
    let values = FormValues {
        name: "G",
        email: "grace@navy.mil",
        message: "Found a moth in the relay.",
    };
    let (form, toast, outcomes) = run_form(values, HostTime::ZERO);
    assert_eq!(outcomes[0], SubmitOutcome::Rejected);
    assert_eq!(
        toast.shown,
        vec![("Please fix the errors above.".to_owned(), ToastKind::Error)]
    );
    assert!(!form.button().disabled, "no disabling");

    // Nothing else happens later.
    let (_, toast, _) = run_form(values, HostTime(10_000));
    assert_eq!(toast.shown.len(), 1);
}

#[test]
fn toast_hide_timer_resets_on_every_show() {
    let config = PageConfig::portfolio();
    let mut timers = TimerQueue::new(HostTime::ZERO);
    let mut toast = ToastHarness::new(&config);

    toast.show(&mut timers, Notice::REJECTED);
    timers.advance_to(HostTime(2000));
    toast.show(&mut timers, Notice::SENT);

    // The first show's deadline (3000) was canceled.
    for fired in timers.advance_to(HostTime(4999)) {
        assert_ne!(fired.payload, Job::HideToast, "hid early at {:?}", fired.deadline);
    }
    assert!(toast.toast.is_visible());

    let fired = timers.advance_to(HostTime(5000));
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].payload, Job::HideToast);
}

#[test]
fn debounce_fires_once_with_last_arguments() {
    let mut timers = TimerQueue::new(HostTime::ZERO);
    let mut debounce = Debounce::new(Duration(50));
    let mut armed: Option<TimerId> = None;
    let mut calls = Vec::new();

    for i in 0..5_u32 {
        timers.advance_to(HostTime(u64::from(i) * 10));
        let deadline = debounce.call(timers.now(), i);
        if let Some(id) = armed.take() {
            timers.cancel(id);
        }
        armed = Some(timers.schedule_at(deadline, Job::DebounceDue));
    }

    for fired in timers.advance_to(HostTime(1000)) {
        assert_eq!(fired.payload, Job::DebounceDue);
        if let Some(args) = debounce.poll(fired.deadline) {
            calls.push(args);
        }
    }
    assert_eq!(calls, vec![4], "invoked once, with the final call's argument");
}

#[test]
fn throttle_admits_two_calls_in_105ms() {
    let mut throttle = Throttle::new(Duration(100));
    let mut invoked = Vec::new();
    let mut ms = 0;
    while ms <= 105 {
        if throttle.call(HostTime(ms)) {
            invoked.push(ms);
        }
        ms += 10;
    }
    assert_eq!(invoked, vec![0, 100]);
}

#[test]
fn scroll_spy_activates_only_the_containing_section() {
    let sections = [
        SectionBounds {
            top: 0.0,
            height: 700.0,
        },
        SectionBounds {
            top: 700.0,
            height: 900.0,
        },
        SectionBounds {
            top: 1600.0,
            height: 600.0,
        },
    ];
    let config = PageConfig::portfolio();
    let mut spy = ScrollSpy::new(&config.nav);
    let mut active_flags = [false; 3];

    for scroll_y in [0.0, 650.0, 1000.0] {
        if let Some(change) = spy.update(&sections, scroll_y) {
            active_flags = [false; 3];
            active_flags[change.current] = true;
        }
    }
    assert_eq!(active_flags, [false, true, false], "exactly section B");
}

#[test]
fn hero_typing_completes_on_schedule() {
    let effects = PageConfig::portfolio().effects;
    let mut timers = TimerQueue::new(HostTime::ZERO);
    let mut typing = TypingReveal::new(effects.hero_text);
    let mut title = String::from("Placeholder");
    let mut completed_at = None;
    let mut ticks = 0;

    timers.schedule_after(effects.typing_delay, Job::TypeNext);
    while let Some(fired) = timers.pop_due(HostTime(60_000)) {
        assert_eq!(fired.payload, Job::TypeNext);
        ticks += 1;
        if let Some(prefix) = typing.step() {
            prefix.clone_into(&mut title);
        }
        if typing.is_finished() {
            completed_at.get_or_insert(timers.now());
        } else {
            timers.schedule_after(effects.typing_step, Job::TypeNext);
        }
    }

    let chars = effects.hero_text.chars().count() as u64;
    assert_eq!(title, effects.hero_text);
    // The first character lands after the initial delay, each later one a
    // step after the previous.
    assert_eq!(completed_at, Some(HostTime(1000 + (chars - 1) * 100)));
    assert_eq!(ticks, chars, "no tick after the last character");
    assert_eq!(Some(timers.now()), completed_at, "queue drained at completion");
}
