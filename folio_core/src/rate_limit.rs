// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Call-rate limiting for event handlers.
//!
//! Both limiters are plain state machines that take the current
//! [`HostTime`] as input. They never own a real timer: a backend arms one
//! timer per limiter (replacing it on every [`Debounce::call`]) and the
//! tests drive them with a [`TimerQueue`](crate::timer::TimerQueue).
//!
//! - [`Debounce`] keeps only the trailing call of a burst and releases it once
//!   the input has been quiet for the configured wait.
//! - [`Throttle`] admits the leading call and drops everything else until the
//!   window closes. Dropped calls are not queued.

use crate::time::{Duration, HostTime};

/// Trailing-edge debouncer holding the arguments of the latest call.
#[derive(Clone, Debug)]
pub struct Debounce<A> {
    wait: Duration,
    pending: Option<(HostTime, A)>,
}

impl<A> Debounce<A> {
    /// Creates a debouncer that waits `wait` after the latest call.
    #[must_use]
    pub const fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    /// Returns the configured quiet period.
    #[must_use]
    pub const fn wait(&self) -> Duration {
        self.wait
    }

    /// Records a call at `now`, superseding any pending call.
    ///
    /// Returns the deadline at which the call becomes due. A backend should
    /// cancel its previous timer and arm a new one for this deadline.
    pub fn call(&mut self, now: HostTime, args: A) -> HostTime {
        let deadline = now.saturating_add(self.wait);
        self.pending = Some((deadline, args));
        deadline
    }

    /// Releases the pending arguments if the quiet period has elapsed.
    ///
    /// A burst yields at most one `Some`.
    pub fn poll(&mut self, now: HostTime) -> Option<A> {
        match self.pending {
            Some((deadline, _)) if now >= deadline => self.pending.take().map(|(_, args)| args),
            _ => None,
        }
    }

    /// Releases the pending arguments regardless of the clock.
    ///
    /// For backends whose armed timer is the authority on when the quiet
    /// period ended.
    pub fn fire(&mut self) -> Option<A> {
        self.pending.take().map(|(_, args)| args)
    }

    /// Drops the pending call, returning its arguments.
    pub fn cancel(&mut self) -> Option<A> {
        self.pending.take().map(|(_, args)| args)
    }

    /// Returns the deadline of the pending call.
    #[must_use]
    pub fn deadline(&self) -> Option<HostTime> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    /// Returns `true` if a call is waiting for the quiet period to end.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Leading-edge throttle: at most one admitted call per interval.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    interval: Duration,
    window_end: Option<HostTime>,
}

impl Throttle {
    /// Creates a throttle with the given window length.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            window_end: None,
        }
    }

    /// Returns the configured window length.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns `true` if a call at `now` should run.
    ///
    /// An admitted call opens a new window; calls inside an open window are
    /// dropped and do not extend it.
    pub fn call(&mut self, now: HostTime) -> bool {
        match self.window_end {
            Some(end) if now < end => false,
            _ => {
                self.window_end = Some(now.saturating_add(self.interval));
                true
            }
        }
    }

    /// Returns the end of the current window, if one has been opened.
    #[must_use]
    pub const fn window_end(&self) -> Option<HostTime> {
        self.window_end
    }

    /// Closes the current window so the next call runs immediately.
    pub fn reset(&mut self) {
        self.window_end = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debounce_keeps_trailing_call() {
        let mut d = Debounce::new(Duration(50));
        let mut deadline = HostTime::ZERO;
        for i in 0..5_u64 {
            let now = HostTime(i * 10);
            assert_eq!(d.poll(now), None, "nothing fires mid-burst");
            deadline = d.call(now, i);
        }
        assert_eq!(deadline, HostTime(90), "wait counts from the last call");
        assert_eq!(d.poll(HostTime(89)), None);
        assert_eq!(d.poll(HostTime(90)), Some(4), "last call's args");
        assert_eq!(d.poll(HostTime(200)), None, "fires once per burst");
    }

    #[test]
    fn debounce_cancel_and_fire() {
        let mut d = Debounce::new(Duration(10));
        d.call(HostTime(0), "a");
        assert!(d.is_pending());
        assert_eq!(d.cancel(), Some("a"));
        assert!(!d.is_pending(), "cancel clears the pending call");

        d.call(HostTime(5), "b");
        assert_eq!(d.deadline(), Some(HostTime(15)));
        assert_eq!(d.fire(), Some("b"), "fire ignores the clock");
        assert_eq!(d.fire(), None);
    }

    #[test]
    fn throttle_admits_leading_call_per_window() {
        let mut t = Throttle::new(Duration(100));
        let admitted: alloc::vec::Vec<u64> = (0..=10_u64)
            .map(|i| i * 10)
            .filter(|&ms| t.call(HostTime(ms)))
            .collect();
        assert_eq!(admitted, alloc::vec![0, 100], "calls at 0ms and 100ms run");
    }

    #[test]
    fn throttle_dropped_calls_do_not_extend_window() {
        let mut t = Throttle::new(Duration(100));
        assert!(t.call(HostTime(0)));
        assert!(!t.call(HostTime(99)));
        assert_eq!(t.window_end(), Some(HostTime(100)));
        assert!(t.call(HostTime(100)), "window reopens on time");

        t.reset();
        assert!(t.call(HostTime(101)), "reset reopens immediately");
    }
}
