// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot viewport reveal.
//!
//! A [`RevealSet`] tracks which registered elements have been revealed. Feed
//! it batches of [`IntersectionSample`]s (one batch per observer callback)
//! and it returns the [`Reveal`]s to apply. Revealing is monotonic: an
//! element is revealed at most once and never hidden again, so a backend can
//! stop observing it as soon as it shows up in the output.
//!
//! The first batch after registration carries every element's initial state,
//! so elements that start inside the viewport are revealed by that batch.
//!
//! [`intersection_ratio`] provides the same visibility measure from plain
//! geometry, for environments without an intersection observer.

use alloc::format;
use alloc::vec;
use alloc::vec::Vec;
use core::ops::Range;

use kurbo::{Insets, Rect};

use crate::style::StyleDecl;
use crate::time::Duration;

/// Slack applied to threshold comparisons. Browsers report ratios at a
/// threshold crossing that can sit a hair below the threshold.
const RATIO_EPSILON: f64 = 1e-3;

/// How a revealed element animates in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealMotion {
    /// Keyframe fade in from below (`fadeInUp`).
    FadeUp {
        /// Initial downward offset for elements hidden until revealed, in px.
        offset: f64,
        /// Keyframe animation duration.
        duration: Duration,
    },
    /// Transition in from a horizontal offset.
    SlideIn {
        /// Initial horizontal offset, in px (negative slides in from the left).
        offset: f64,
        /// Transition duration.
        duration: Duration,
    },
}

impl RevealMotion {
    /// Styles applied at registration to elements hidden until revealed.
    #[must_use]
    pub fn initial_styles(&self) -> Vec<StyleDecl> {
        match *self {
            Self::FadeUp { offset, .. } => vec![
                StyleDecl::new("opacity", "0"),
                StyleDecl::new("transform", format!("translateY({offset}px)")),
            ],
            Self::SlideIn { offset, duration } => vec![
                StyleDecl::new("opacity", "0"),
                StyleDecl::new("transform", format!("translateX({offset}px)")),
                StyleDecl::new(
                    "transition",
                    format!("all {}s ease", duration.as_secs_f64()),
                ),
            ],
        }
    }

    /// Styles applied when the element is revealed.
    ///
    /// For [`FadeUp`](Self::FadeUp) the delay is folded into the animation
    /// shorthand. For [`SlideIn`](Self::SlideIn) the caller applies these
    /// styles once `delay` has elapsed.
    #[must_use]
    pub fn final_styles(&self, delay: Duration) -> Vec<StyleDecl> {
        match *self {
            Self::FadeUp { duration, .. } => vec![StyleDecl::new(
                "animation",
                format!(
                    "fadeInUp {}s ease {}s forwards",
                    duration.as_secs_f64(),
                    delay.as_secs_f64()
                ),
            )],
            Self::SlideIn { .. } => vec![
                StyleDecl::new("opacity", "1"),
                StyleDecl::new("transform", "translateX(0)"),
            ],
        }
    }

    /// Returns `true` if the backend must wait out the delay itself before
    /// applying [`final_styles`](Self::final_styles).
    #[must_use]
    pub const fn defers_to_timer(&self) -> bool {
        matches!(self, Self::SlideIn { .. })
    }
}

/// How reveal delays are spread across elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stagger {
    /// Every element reveals without delay.
    None,
    /// Delay is `step × position within the element's registration group`,
    /// for groups registered with [`GroupOptions::staggered`].
    ByRegistration(Duration),
    /// Delay is `step × position of the sample within its batch`.
    ByBatch(Duration),
}

/// Settings for one reveal observer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    /// Fraction of the element that must be visible, `0.0..=1.0`.
    pub threshold: f64,
    /// Adjustment applied to the viewport before intersecting. Positive
    /// values grow the viewport, negative values shrink it.
    pub root_margin: Insets,
    /// Animation applied on reveal.
    pub motion: RevealMotion,
    /// Delay distribution.
    pub stagger: Stagger,
}

impl RevealConfig {
    /// Sections and cards: 10% visible, viewport bottom pulled in by 50px,
    /// cards staggered by 100ms per position.
    #[must_use]
    pub const fn generic() -> Self {
        Self {
            threshold: 0.1,
            root_margin: Insets {
                x0: 0.0,
                y0: 0.0,
                x1: 0.0,
                y1: -50.0,
            },
            motion: RevealMotion::FadeUp {
                offset: 30.0,
                duration: Duration(800),
            },
            stagger: Stagger::ByRegistration(Duration(100)),
        }
    }

    /// Timeline entries: 30% visible, sliding in from the left, staggered by
    /// 200ms per batch position.
    #[must_use]
    pub const fn timeline() -> Self {
        Self {
            threshold: 0.3,
            root_margin: Insets {
                x0: 0.0,
                y0: 0.0,
                x1: 0.0,
                y1: 0.0,
            },
            motion: RevealMotion::SlideIn {
                offset: -50.0,
                duration: Duration(600),
            },
            stagger: Stagger::ByBatch(Duration(200)),
        }
    }

    /// Formats [`root_margin`](Self::root_margin) as an `IntersectionObserver`
    /// `rootMargin` string (`top right bottom left`).
    #[must_use]
    pub fn root_margin_css(&self) -> alloc::string::String {
        let m = self.root_margin;
        format!("{}px {}px {}px {}px", m.y0, m.x1, m.y1, m.x0)
    }
}

/// Per-group registration options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GroupOptions {
    /// Apply [`RevealMotion::initial_styles`] at registration.
    pub hide_until_revealed: bool,
    /// Participate in [`Stagger::ByRegistration`].
    pub staggered: bool,
}

impl GroupOptions {
    /// Elements left as authored until revealed (page sections).
    pub const AS_IS: Self = Self {
        hide_until_revealed: false,
        staggered: false,
    };

    /// Elements hidden and staggered until revealed (cards, timeline items).
    pub const HIDDEN_STAGGERED: Self = Self {
        hide_until_revealed: true,
        staggered: true,
    };
}

/// Index of a registered element within a [`RevealSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub u32);

/// One observer report for one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    /// Which element.
    pub element: ElementId,
    /// Whether the element intersects the (margin-adjusted) viewport.
    pub is_intersecting: bool,
    /// Visible fraction of the element, `0.0..=1.0`.
    pub ratio: f64,
}

/// A reveal the backend should apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    /// Which element.
    pub element: ElementId,
    /// Delay before the element starts animating in.
    pub delay: Duration,
}

#[derive(Clone, Copy, Debug)]
struct Slot {
    group_index: u32,
    staggered: bool,
    revealed: bool,
}

/// Reveal state for every element registered with one observer.
#[derive(Clone, Debug)]
pub struct RevealSet {
    config: RevealConfig,
    slots: Vec<Slot>,
    revealed: usize,
}

impl RevealSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            slots: Vec::new(),
            revealed: 0,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Registers `len` elements as one group and returns their ids.
    pub fn register_group(&mut self, len: usize, options: GroupOptions) -> Range<u32> {
        let start = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
        for group_index in 0..len {
            self.slots.push(Slot {
                group_index: u32::try_from(group_index).unwrap_or(u32::MAX),
                staggered: options.staggered,
                revealed: false,
            });
        }
        let end = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
        start..end
    }

    /// Returns the number of registered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` if `element` has been revealed.
    #[must_use]
    pub fn is_revealed(&self, element: ElementId) -> bool {
        self.slots
            .get(element.0 as usize)
            .is_some_and(|slot| slot.revealed)
    }

    /// Returns `true` once every registered element has been revealed.
    #[must_use]
    pub fn all_revealed(&self) -> bool {
        self.revealed == self.slots.len()
    }

    /// Processes one observer batch.
    ///
    /// Samples for unknown or already revealed elements are ignored, as are
    /// samples below the threshold.
    pub fn observe(&mut self, batch: &[IntersectionSample]) -> Vec<Reveal> {
        let threshold = self.config.threshold;
        let stagger = self.config.stagger;
        let mut out = Vec::new();
        for (batch_pos, sample) in batch.iter().enumerate() {
            let Some(slot) = self.slots.get_mut(sample.element.0 as usize) else {
                continue;
            };
            if slot.revealed
                || !sample.is_intersecting
                || sample.ratio + RATIO_EPSILON < threshold
            {
                continue;
            }
            slot.revealed = true;
            self.revealed += 1;
            let delay = match stagger {
                Stagger::None => Duration::ZERO,
                Stagger::ByRegistration(step) if slot.staggered => {
                    step.saturating_mul(u64::from(slot.group_index))
                }
                Stagger::ByRegistration(_) => Duration::ZERO,
                Stagger::ByBatch(step) => step.saturating_mul(batch_pos as u64),
            };
            out.push(Reveal {
                element: sample.element,
                delay,
            });
        }
        out
    }
}

/// Returns the visible fraction of `element` inside `viewport` adjusted by
/// `margin`.
///
/// A zero-area element counts as fully visible when it touches the adjusted
/// viewport.
#[must_use]
pub fn intersection_ratio(element: Rect, viewport: Rect, margin: Insets) -> f64 {
    let root = viewport + margin;
    let area = element.area();
    if area <= 0.0 {
        let inside = element.x0 >= root.x0
            && element.x0 <= root.x1
            && element.y0 >= root.y0
            && element.y0 <= root.y1;
        return if inside { 1.0 } else { 0.0 };
    }
    let overlap = element.intersect(root);
    (overlap.area() / area).clamp(0.0, 1.0)
}

/// Builds a sample from geometry, for backends without an intersection
/// observer.
#[must_use]
pub fn sample_from_geometry(
    element: ElementId,
    rect: Rect,
    viewport: Rect,
    margin: Insets,
) -> IntersectionSample {
    let ratio = intersection_ratio(rect, viewport, margin);
    IntersectionSample {
        element,
        is_intersecting: ratio > 0.0,
        ratio,
    }
}

/// Returns `true` if a `[data-animate]` element whose bounding top sits at
/// `top` should be marked animated, given the viewport height and the
/// required distance above the viewport bottom.
#[must_use]
pub fn data_animate_due(top: f64, viewport_height: f64, offset: f64) -> bool {
    top < viewport_height - offset
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: u32, ratio: f64) -> IntersectionSample {
        IntersectionSample {
            element: ElementId(id),
            is_intersecting: ratio > 0.0,
            ratio,
        }
    }

    #[test]
    fn reveal_is_one_shot() {
        let mut set = RevealSet::new(RevealConfig::generic());
        set.register_group(2, GroupOptions::AS_IS);

        let first = set.observe(&[sample(0, 0.5), sample(1, 0.0)]);
        assert_eq!(first.len(), 1, "only the visible element reveals");
        assert_eq!(first[0].element, ElementId(0));

        // Scrolling away and back does not reveal again.
        assert!(set.observe(&[sample(0, 0.0)]).is_empty());
        assert!(set.observe(&[sample(0, 1.0)]).is_empty(), "monotonic");
        assert!(set.is_revealed(ElementId(0)));
        assert!(!set.all_revealed());
    }

    #[test]
    fn initially_visible_elements_reveal_on_first_pass() {
        let mut set = RevealSet::new(RevealConfig::timeline());
        set.register_group(3, GroupOptions::HIDDEN_STAGGERED);

        let reveals = set.observe(&[sample(0, 1.0), sample(1, 1.0), sample(2, 1.0)]);
        assert_eq!(reveals.len(), 3, "every visible element fires once");
        assert!(set.all_revealed());
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut set = RevealSet::new(RevealConfig::timeline());
        set.register_group(2, GroupOptions::AS_IS);

        let reveals = set.observe(&[sample(0, 0.29), sample(1, 0.3)]);
        assert_eq!(reveals.len(), 1);
        assert_eq!(reveals[0].element, ElementId(1), "exactly at threshold");
    }

    #[test]
    fn timeline_staggers_by_batch_position() {
        let mut set = RevealSet::new(RevealConfig::timeline());
        set.register_group(3, GroupOptions::HIDDEN_STAGGERED);

        let reveals = set.observe(&[sample(2, 0.0), sample(0, 0.5), sample(1, 0.5)]);
        let delays: Vec<u64> = reveals.iter().map(|r| r.delay.millis()).collect();
        assert_eq!(delays, vec![200, 400], "position counts every batch entry");
    }

    #[test]
    fn generic_staggers_by_group_position_for_cards_only() {
        let mut set = RevealSet::new(RevealConfig::generic());
        let sections = set.register_group(2, GroupOptions::AS_IS);
        let cards = set.register_group(3, GroupOptions::HIDDEN_STAGGERED);
        assert_eq!(sections, 0..2);
        assert_eq!(cards, 2..5);

        let reveals = set.observe(&[sample(1, 1.0), sample(4, 1.0), sample(3, 1.0)]);
        let delays: Vec<u64> = reveals.iter().map(|r| r.delay.millis()).collect();
        assert_eq!(delays, vec![0, 200, 100], "sections are not staggered");
    }

    #[test]
    fn unknown_elements_are_ignored() {
        let mut set = RevealSet::new(RevealConfig::generic());
        set.register_group(1, GroupOptions::AS_IS);
        assert!(set.observe(&[sample(7, 1.0)]).is_empty());
    }

    #[test]
    fn ratio_respects_negative_bottom_margin() {
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let margin = RevealConfig::generic().root_margin;

        // Element occupying 760..860: 40px visible in the raw viewport but
        // hidden by the 50px bottom inset.
        let el = Rect::new(0.0, 760.0, 100.0, 860.0);
        assert_eq!(intersection_ratio(el, viewport, margin), 0.0);
        assert!((intersection_ratio(el, viewport, Insets::ZERO) - 0.4).abs() < 1e-9);

        let inside = Rect::new(0.0, 100.0, 100.0, 200.0);
        assert_eq!(intersection_ratio(inside, viewport, margin), 1.0);
    }

    #[test]
    fn geometry_sample_feeds_reveal_set() {
        let mut set = RevealSet::new(RevealConfig::generic());
        set.register_group(1, GroupOptions::AS_IS);
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let s = sample_from_geometry(
            ElementId(0),
            Rect::new(0.0, 700.0, 100.0, 900.0),
            viewport,
            set.config().root_margin,
        );
        assert!(s.is_intersecting);
        assert!((s.ratio - 0.25).abs() < 1e-9, "50 of 200px visible");
        assert_eq!(set.observe(&[s]).len(), 1);
    }

    #[test]
    fn motion_styles() {
        let fade = RevealConfig::generic().motion;
        assert_eq!(
            fade.final_styles(Duration(300)),
            vec![StyleDecl::new("animation", "fadeInUp 0.8s ease 0.3s forwards")]
        );
        assert!(!fade.defers_to_timer());

        let slide = RevealConfig::timeline().motion;
        let initial = slide.initial_styles();
        assert_eq!(initial[1], StyleDecl::new("transform", "translateX(-50px)"));
        assert_eq!(initial[2], StyleDecl::new("transition", "all 0.6s ease"));
        assert!(slide.defers_to_timer());
    }

    #[test]
    fn root_margin_formats_top_right_bottom_left() {
        assert_eq!(RevealConfig::generic().root_margin_css(), "0px 0px -50px 0px");
    }

    #[test]
    fn data_animate_offset() {
        assert!(data_animate_due(600.0, 800.0, 150.0));
        assert!(!data_animate_due(650.0, 800.0, 150.0), "boundary is exclusive");
    }
}
