// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunable constants, grouped per component.
//!
//! [`PageConfig::portfolio`] returns the values the portfolio page ships
//! with. Each group is plain data so tests and embedders can override single
//! fields with struct update syntax.

use crate::reveal::RevealConfig;
use crate::time::Duration;

/// Navigation controller settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavConfig {
    /// Fixed header height subtracted from anchor scroll targets, in px.
    pub header_offset: f64,
    /// Distance below the scroll position used as the scroll-spy reading line, in px.
    pub spy_offset: f64,
    /// Scroll position past which the navbar is elevated, in px.
    pub elevation_threshold: f64,
    /// Quiet period before section bounds are re-measured after a resize.
    pub resize_debounce: Duration,
}

impl NavConfig {
    /// Portfolio page defaults.
    #[must_use]
    pub const fn portfolio() -> Self {
        Self {
            header_offset: 70.0,
            spy_offset: 100.0,
            elevation_threshold: 50.0,
            resize_debounce: Duration(150),
        }
    }
}

/// Contact form settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormConfig {
    /// Minimum trimmed name length, in UTF-16 code units.
    pub name_min_len: usize,
    /// Minimum trimmed message length, in UTF-16 code units.
    pub message_min_len: usize,
    /// Simulated network delay before a valid submission completes.
    pub submit_delay: Duration,
    /// How long a toast stays visible after its latest show.
    pub toast_lifetime: Duration,
}

impl FormConfig {
    /// Portfolio page defaults.
    #[must_use]
    pub const fn portfolio() -> Self {
        Self {
            name_min_len: 2,
            message_min_len: 10,
            submit_delay: Duration(1500),
            toast_lifetime: Duration(3000),
        }
    }
}

/// Decorative effect settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectsConfig {
    /// Text typed into the hero title.
    pub hero_text: &'static str,
    /// Delay before the hero title is cleared and typing starts.
    pub typing_delay: Duration,
    /// Delay between typed characters.
    pub typing_step: Duration,
    /// Lifetime of a ripple overlay.
    pub ripple_lifetime: Duration,
    /// Divisor applied to pointer offsets to get tilt angles in degrees.
    pub tilt_divisor: f64,
    /// Throttle window for the `[data-animate]` scroll check.
    pub data_animate_throttle: Duration,
    /// Distance above the viewport bottom an element's top must pass before
    /// it is marked `animated`, in px.
    pub data_animate_offset: f64,
}

impl EffectsConfig {
    /// Portfolio page defaults.
    #[must_use]
    pub const fn portfolio() -> Self {
        Self {
            hero_text: "Software Engineer / Developer",
            typing_delay: Duration(1000),
            typing_step: Duration(100),
            ripple_lifetime: Duration(600),
            tilt_divisor: 10.0,
            data_animate_throttle: Duration(100),
            data_animate_offset: 150.0,
        }
    }
}

/// Every setting the page runtime reads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageConfig {
    /// Navigation controller.
    pub nav: NavConfig,
    /// Contact form and toast.
    pub form: FormConfig,
    /// Decorative effects.
    pub effects: EffectsConfig,
    /// Section and card reveal.
    pub reveal: RevealConfig,
    /// Timeline entry reveal.
    pub timeline: RevealConfig,
}

impl PageConfig {
    /// Portfolio page defaults.
    #[must_use]
    pub const fn portfolio() -> Self {
        Self {
            nav: NavConfig::portfolio(),
            form: FormConfig::portfolio(),
            effects: EffectsConfig::portfolio(),
            reveal: RevealConfig::generic(),
            timeline: RevealConfig::timeline(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::portfolio()
    }
}
