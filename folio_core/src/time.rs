// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Monotonic host time in millisecond ticks.
//!
//! [`HostTime`] is a point on the page's monotonic clock. On the web this is
//! `performance.now()` truncated to whole milliseconds; in tests it is whatever
//! a [`TimerQueue`](crate::timer::TimerQueue) says it is.
//!
//! [`Duration`] is a span in the same millisecond units. Every delay the page
//! runtime uses (debounce waits, toast lifetime, typing steps) is expressed as
//! a [`Duration`].

use core::fmt;

/// A point in time expressed as milliseconds on the page's monotonic clock.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HostTime(pub u64);

impl HostTime {
    /// The clock origin.
    pub const ZERO: Self = Self(0);

    /// Returns the raw millisecond value.
    #[inline]
    #[must_use]
    pub const fn millis(self) -> u64 {
        self.0
    }

    /// Converts a `DOMHighResTimeStamp` (fractional milliseconds) to a
    /// [`HostTime`].
    ///
    /// Negative and NaN inputs clamp to [`HostTime::ZERO`].
    #[inline]
    #[must_use]
    pub fn from_millis_f64(ms: f64) -> Self {
        if ms.is_nan() || ms <= 0.0 {
            return Self::ZERO;
        }
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "positive f64 milliseconds; truncation to whole ms is intended"
        )]
        let ms = ms as u64;
        Self(ms)
    }

    /// Returns the duration between `self` and an earlier time, or zero if
    /// `earlier` is after `self`.
    #[inline]
    #[must_use]
    pub const fn saturating_duration_since(self, earlier: Self) -> Duration {
        Duration(self.0.saturating_sub(earlier.0))
    }

    /// Deadline `duration` after `self`. Saturates instead of wrapping.
    #[inline]
    #[must_use]
    pub const fn saturating_add(self, duration: Duration) -> Self {
        Self(self.0.saturating_add(duration.0))
    }
}

impl fmt::Debug for HostTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostTime({}ms)", self.0)
    }
}

/// A span of time in milliseconds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration(pub u64);

impl Duration {
    /// A zero-length duration.
    pub const ZERO: Self = Self(0);

    /// Creates a duration from whole milliseconds.
    #[inline]
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    /// Returns the raw millisecond value.
    #[inline]
    #[must_use]
    pub const fn millis(self) -> u64 {
        self.0
    }

    /// Returns the duration as fractional seconds, for CSS `s` values.
    #[inline]
    #[must_use]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1000.0
    }

    /// Returns the duration clamped into a `u32`, the range accepted by
    /// browser timers.
    #[inline]
    #[must_use]
    pub fn as_timer_millis(self) -> u32 {
        u32::try_from(self.0).unwrap_or(u32::MAX)
    }

    /// Saturating multiplication by an index, used for staggered delays.
    #[inline]
    #[must_use]
    pub const fn saturating_mul(self, factor: u64) -> Self {
        Self(self.0.saturating_mul(factor))
    }

    /// Saturating addition.
    #[inline]
    #[must_use]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Saturating subtraction.
    #[inline]
    #[must_use]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duration({}ms)", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn performance_now_is_truncated_to_whole_ms() {
        assert_eq!(HostTime::from_millis_f64(1234.9), HostTime(1234), "truncated");
        assert_eq!(HostTime::from_millis_f64(-5.0), HostTime::ZERO, "negative clamps");
        assert_eq!(HostTime::from_millis_f64(f64::NAN), HostTime::ZERO, "NaN clamps");
    }

    #[test]
    fn card_stagger_delays() {
        let step = Duration(100);
        let delays: [Duration; 3] = [0, 1, 2].map(|i| step.saturating_mul(i));
        assert_eq!(
            delays,
            [Duration::ZERO, Duration(100), Duration(200)],
            "100ms per card"
        );
        assert_eq!(step.saturating_mul(u64::MAX), Duration(u64::MAX), "saturates");
        assert_eq!(
            Duration(100).saturating_sub(Duration(600)),
            Duration::ZERO,
            "never negative"
        );
        assert_eq!(
            Duration(1000).saturating_add(Duration(100)),
            Duration(1100),
            "typing delay plus one step"
        );
    }

    #[test]
    fn toast_deadline_and_remaining_time() {
        let shown = HostTime(2000);
        let hide_at = shown.saturating_add(Duration(3000));
        assert_eq!(hide_at, HostTime(5000), "hide 3s after show");
        assert_eq!(
            hide_at.saturating_duration_since(HostTime(4500)),
            Duration(500),
            "time left"
        );
        assert_eq!(
            hide_at.saturating_duration_since(HostTime(9000)),
            Duration::ZERO,
            "already past"
        );
        assert_eq!(
            HostTime(u64::MAX).saturating_add(Duration(1)),
            HostTime(u64::MAX),
            "saturates at the end of time"
        );
    }

    #[test]
    fn timer_millis_clamps_to_u32() {
        assert_eq!(Duration(1500).as_timer_millis(), 1500, "submit delay fits");
        assert_eq!(Duration(u64::MAX).as_timer_millis(), u32::MAX, "clamped");
        assert!((Duration(800).as_secs_f64() - 0.8).abs() < 1e-12, "800ms is 0.8s");
    }
}
