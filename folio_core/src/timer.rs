// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic virtual timers.
//!
//! [`TimerQueue`] stands in for `setTimeout` when the page logic runs outside
//! a browser. Payloads are scheduled at absolute [`HostTime`] deadlines and
//! handed back in deadline order as the clock is advanced. Timers sharing a
//! deadline fire in the order they were scheduled.

use alloc::vec::Vec;

use crate::time::{Duration, HostTime};

/// Handle to a scheduled timer, usable with [`TimerQueue::cancel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// A timer returned by [`TimerQueue::pop_due`] or [`TimerQueue::advance_to`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fired<T> {
    /// The handle returned when the timer was scheduled.
    pub id: TimerId,
    /// The deadline the timer was scheduled for.
    pub deadline: HostTime,
    /// The scheduled payload.
    pub payload: T,
}

#[derive(Debug)]
struct Entry<T> {
    id: TimerId,
    deadline: HostTime,
    payload: T,
}

/// A virtual clock with a queue of pending timers.
#[derive(Debug)]
pub struct TimerQueue<T> {
    now: HostTime,
    next_id: u64,
    /// Sorted by `(deadline, id)`.
    entries: Vec<Entry<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new(HostTime::ZERO)
    }
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue whose clock reads `now`.
    #[must_use]
    pub const fn new(now: HostTime) -> Self {
        Self {
            now,
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Returns the current virtual time.
    #[must_use]
    pub const fn now(&self) -> HostTime {
        self.now
    }

    /// Returns the number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no timers are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<HostTime> {
        self.entries.first().map(|e| e.deadline)
    }

    /// Schedules `payload` to fire at `deadline`.
    ///
    /// Deadlines in the past fire on the next advance.
    pub fn schedule_at(&mut self, deadline: HostTime, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let pos = self
            .entries
            .partition_point(|e| (e.deadline, e.id) <= (deadline, id));
        self.entries.insert(
            pos,
            Entry {
                id,
                deadline,
                payload,
            },
        );
        id
    }

    /// Schedules `payload` to fire `delay` after the current virtual time.
    pub fn schedule_after(&mut self, delay: Duration, payload: T) -> TimerId {
        self.schedule_at(self.now.saturating_add(delay), payload)
    }

    /// Cancels a pending timer. Returns `false` if it already fired or was
    /// already canceled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the earliest timer due at or before `until`.
    ///
    /// The clock moves to the fired timer's deadline (never backwards), so
    /// timers scheduled while handling it are relative to that instant. Loop
    /// on this when handlers schedule follow-up timers.
    pub fn pop_due(&mut self, until: HostTime) -> Option<Fired<T>> {
        let first = self.entries.first()?;
        if first.deadline > until {
            return None;
        }
        let Entry {
            id,
            deadline,
            payload,
        } = self.entries.remove(0);
        self.now = self.now.max(deadline);
        Some(Fired {
            id,
            deadline,
            payload,
        })
    }

    /// Advances the clock to `until`, returning every timer that was pending
    /// and due, in firing order.
    ///
    /// Advancing to an earlier time than [`now`](Self::now) fires nothing and
    /// leaves the clock unchanged.
    pub fn advance_to(&mut self, until: HostTime) -> Vec<Fired<T>> {
        let mut fired = Vec::new();
        if until < self.now {
            return fired;
        }
        while let Some(f) = self.pop_due(until) {
            fired.push(f);
        }
        self.now = until;
        fired
    }

    /// Advances the clock by `delta`. See [`advance_to`](Self::advance_to).
    pub fn advance_by(&mut self, delta: Duration) -> Vec<Fired<T>> {
        self.advance_to(self.now.saturating_add(delta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn fires_in_deadline_then_insertion_order() {
        let mut q = TimerQueue::new(HostTime::ZERO);
        q.schedule_at(HostTime(30), "c");
        q.schedule_at(HostTime(10), "a");
        q.schedule_at(HostTime(10), "b");

        let fired: Vec<_> = q.advance_to(HostTime(50)).into_iter().map(|f| f.payload).collect();
        assert_eq!(fired, vec!["a", "b", "c"], "ties keep insertion order");
        assert_eq!(q.now(), HostTime(50));
        assert!(q.is_empty(), "all timers drained");
    }

    #[test]
    fn cancel_removes_pending_timer() {
        let mut q = TimerQueue::new(HostTime::ZERO);
        let a = q.schedule_after(Duration(10), 1);
        q.schedule_after(Duration(20), 2);

        assert!(q.cancel(a), "pending timer is cancellable");
        assert!(!q.cancel(a), "second cancel is a no-op");

        let fired: Vec<_> = q.advance_by(Duration(100)).into_iter().map(|f| f.payload).collect();
        assert_eq!(fired, vec![2]);
    }

    #[test]
    fn time_never_moves_backwards() {
        let mut q: TimerQueue<()> = TimerQueue::new(HostTime(100));
        assert!(q.advance_to(HostTime(50)).is_empty(), "nothing fires");
        assert_eq!(q.now(), HostTime(100));
    }

    #[test]
    fn pop_due_moves_clock_to_deadline() {
        let mut q = TimerQueue::new(HostTime::ZERO);
        q.schedule_after(Duration(100), 0_u32);

        let f = q.pop_due(HostTime(1_000)).unwrap();
        assert_eq!(f.deadline, HostTime(100));
        assert_eq!(q.now(), HostTime(100));

        // A follow-up scheduled from the handler is relative to the deadline.
        q.schedule_after(Duration(100), 1);
        assert_eq!(q.next_deadline(), Some(HostTime(200)));
    }

    #[test]
    fn not_yet_due_timers_stay_pending() {
        let mut q = TimerQueue::new(HostTime::ZERO);
        q.schedule_at(HostTime(100), ());
        assert!(q.advance_to(HostTime(99)).is_empty(), "one tick early");
        assert_eq!(q.len(), 1);
        assert_eq!(q.advance_to(HostTime(100)).len(), 1, "due exactly at deadline");
    }
}
