// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debounce and throttle bound to browser timers.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use core::cell::RefCell;

use folio_core::rate_limit::{Debounce, Throttle};
use folio_core::time::Duration;
use gloo::timers::callback::Timeout;

use crate::now;

struct DebouncedInner<A> {
    state: RefCell<Debounce<A>>,
    timer: RefCell<Option<Timeout>>,
    action: RefCell<Box<dyn FnMut(A)>>,
}

/// Debounced callback: runs `wait` after the most recent call, with that
/// call's arguments.
///
/// Dropping the handle cancels a pending invocation.
pub struct Debounced<A: 'static> {
    inner: Rc<DebouncedInner<A>>,
}

impl<A: 'static> core::fmt::Debug for Debounced<A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Debounced")
            .field("pending", &self.is_pending())
            .finish_non_exhaustive()
    }
}

/// Wraps `action` so that bursts of calls collapse into one trailing call.
pub fn debounce<A: 'static>(wait: Duration, action: impl FnMut(A) + 'static) -> Debounced<A> {
    Debounced {
        inner: Rc::new(DebouncedInner {
            state: RefCell::new(Debounce::new(wait)),
            timer: RefCell::new(None),
            action: RefCell::new(Box::new(action)),
        }),
    }
}

impl<A: 'static> Debounced<A> {
    /// Records a call and restarts the wait.
    pub fn call(&self, args: A) {
        let wait = {
            let mut state = self.inner.state.borrow_mut();
            state.call(now(), args);
            state.wait()
        };
        let weak: Weak<DebouncedInner<A>> = Rc::downgrade(&self.inner);
        let timeout = Timeout::new(wait.as_timer_millis(), move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.timer.borrow_mut().take();
            let args = inner.state.borrow_mut().fire();
            if let Some(args) = args {
                (inner.action.borrow_mut())(args);
            }
        });
        // Replacing the previous timeout cancels it.
        *self.inner.timer.borrow_mut() = Some(timeout);
    }

    /// Drops a pending invocation.
    pub fn cancel(&self) {
        self.inner.timer.borrow_mut().take();
        let _ = self.inner.state.borrow_mut().cancel();
    }

    /// Returns `true` while an invocation is scheduled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.inner.state.borrow().is_pending()
    }
}

/// Throttled callback: runs at most once per interval, leading edge only.
pub struct Throttled<A> {
    state: RefCell<Throttle>,
    action: RefCell<Box<dyn FnMut(A)>>,
}

impl<A> core::fmt::Debug for Throttled<A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Throttled")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Wraps `action` so that calls inside an open window are dropped.
pub fn throttle<A>(interval: Duration, action: impl FnMut(A) + 'static) -> Throttled<A> {
    Throttled {
        state: RefCell::new(Throttle::new(interval)),
        action: RefCell::new(Box::new(action)),
    }
}

impl<A> Throttled<A> {
    /// Runs the action if no window is open. Returns whether it ran.
    pub fn call(&self, args: A) -> bool {
        let admitted = self.state.borrow_mut().call(now());
        if admitted {
            (self.action.borrow_mut())(args);
        }
        admitted
    }

    /// Closes the current window so the next call runs.
    pub fn reset(&self) {
        self.state.borrow_mut().reset();
    }
}
