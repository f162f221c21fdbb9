// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation state: mobile menu, scroll-spy, navbar elevation and anchor
//! scroll targets.

use crate::config::NavConfig;
use crate::style::{ClassChange, class};

/// Icon shown on the mobile menu toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuIcon {
    /// Hamburger glyph, shown while the menu is closed.
    Bars,
    /// Close glyph, shown while the menu is open.
    Times,
}

impl MenuIcon {
    /// Class name of the glyph.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Bars => class::ICON_BARS,
            Self::Times => class::ICON_TIMES,
        }
    }

    /// Class changes that leave exactly this glyph on the icon element.
    #[must_use]
    pub const fn class_changes(self) -> [ClassChange; 2] {
        [
            ClassChange::set(class::ICON_BARS, matches!(self, Self::Bars)),
            ClassChange::set(class::ICON_TIMES, matches!(self, Self::Times)),
        ]
    }
}

/// What the menu and its toggle should look like.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuView {
    /// Whether the menu carries the `active` class.
    pub open: bool,
    /// Glyph on the toggle.
    pub icon: MenuIcon,
}

impl MenuView {
    /// Class change for the menu element.
    #[must_use]
    pub const fn menu_class(&self) -> ClassChange {
        ClassChange::set(class::ACTIVE, self.open)
    }
}

/// Open/closed state of the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Returns `true` if the menu is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the menu (toggle control clicked).
    pub fn toggle(&mut self) -> MenuView {
        self.open = !self.open;
        self.view()
    }

    /// Closes the menu (a menu link was clicked). Closing a closed menu still
    /// yields the closed view so the glyph is restored.
    pub fn close(&mut self) -> MenuView {
        self.open = false;
        self.view()
    }

    /// Returns the current view.
    #[must_use]
    pub const fn view(&self) -> MenuView {
        MenuView {
            open: self.open,
            icon: if self.open {
                MenuIcon::Times
            } else {
                MenuIcon::Bars
            },
        }
    }
}

/// Vertical extent of a page section in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    /// `offsetTop`, in px.
    pub top: f64,
    /// `offsetHeight`, in px.
    pub height: f64,
}

impl SectionBounds {
    /// Returns `true` if `y` lies in `[top, top + height)`.
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Returns the index of the first section, in document order, containing the
/// reading line `scroll_y + spy_offset`.
#[must_use]
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, spy_offset: f64) -> Option<usize> {
    let line = scroll_y + spy_offset;
    sections.iter().position(|s| s.contains(line))
}

/// A change of highlighted section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpyChange {
    /// Previously highlighted section, if any.
    pub previous: Option<usize>,
    /// Newly highlighted section.
    pub current: usize,
}

/// Tracks which section's nav entry is highlighted.
///
/// When no section contains the reading line the current highlight is kept.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSpy {
    spy_offset: f64,
    active: Option<usize>,
}

impl ScrollSpy {
    /// Creates a spy with nothing highlighted.
    #[must_use]
    pub const fn new(config: &NavConfig) -> Self {
        Self {
            spy_offset: config.spy_offset,
            active: None,
        }
    }

    /// Returns the highlighted section.
    #[must_use]
    pub const fn active(&self) -> Option<usize> {
        self.active
    }

    /// Re-evaluates after a scroll. Returns a change only when the
    /// highlighted section differs from the previous one.
    pub fn update(&mut self, sections: &[SectionBounds], scroll_y: f64) -> Option<SpyChange> {
        let current = active_section(sections, scroll_y, self.spy_offset)?;
        if self.active == Some(current) {
            return None;
        }
        let previous = self.active.replace(current);
        Some(SpyChange { previous, current })
    }
}

/// Tracks the navbar's `scrolled` state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavbarElevation {
    threshold: f64,
    scrolled: bool,
}

impl NavbarElevation {
    /// Creates a tracker in the unscrolled state.
    #[must_use]
    pub const fn new(config: &NavConfig) -> Self {
        Self {
            threshold: config.elevation_threshold,
            scrolled: false,
        }
    }

    /// Returns `true` while the navbar is elevated.
    #[must_use]
    pub const fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Re-evaluates after a scroll, returning the class change only when the
    /// state flips.
    pub fn update(&mut self, scroll_y: f64) -> Option<ClassChange> {
        let scrolled = scroll_y > self.threshold;
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(ClassChange::set(class::SCROLLED, scrolled))
    }
}

/// Extracts the target id from an in-page link (`"#about"` → `"about"`).
///
/// Returns `None` for links that leave the page or have an empty fragment.
#[must_use]
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that brings a section's top just below the fixed header.
/// Never negative.
#[must_use]
pub fn anchor_scroll_top(section_top: f64, header_offset: f64) -> f64 {
    (section_top - header_offset).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn page() -> [SectionBounds; 3] {
        [
            SectionBounds {
                top: 0.0,
                height: 600.0,
            },
            SectionBounds {
                top: 600.0,
                height: 800.0,
            },
            SectionBounds {
                top: 1400.0,
                height: 500.0,
            },
        ]
    }

    #[test]
    fn menu_toggle_swaps_glyph() {
        let mut menu = MenuState::default();
        let open = menu.toggle();
        assert!(open.open);
        assert_eq!(open.icon, MenuIcon::Times);
        assert_eq!(open.menu_class(), ClassChange::add("active"));

        let closed = menu.toggle();
        assert_eq!(closed.icon, MenuIcon::Bars);
        assert!(!menu.is_open());
    }

    #[test]
    fn link_click_closes_and_restores_glyph() {
        let mut menu = MenuState::default();
        menu.toggle();
        let view = menu.close();
        assert!(!view.open);
        assert_eq!(
            view.icon.class_changes(),
            [ClassChange::add("fa-bars"), ClassChange::remove("fa-times")]
        );
        assert_eq!(menu.close(), view, "closing twice is stable");
    }

    #[test]
    fn reading_line_is_offset_below_scroll_position() {
        let sections = page();
        assert_eq!(active_section(&sections, 0.0, 100.0), Some(0));
        assert_eq!(active_section(&sections, 499.0, 100.0), Some(0));
        assert_eq!(active_section(&sections, 500.0, 100.0), Some(1), "end is exclusive");
        assert_eq!(active_section(&sections, 1400.0, 100.0), Some(2));
        assert_eq!(active_section(&sections, 5000.0, 100.0), None);
    }

    #[test]
    fn first_matching_section_wins() {
        let overlapping = [
            SectionBounds {
                top: 0.0,
                height: 1000.0,
            },
            SectionBounds {
                top: 500.0,
                height: 1000.0,
            },
        ];
        assert_eq!(active_section(&overlapping, 600.0, 100.0), Some(0));
    }

    #[test]
    fn spy_activates_exactly_one_section() {
        let sections = page();
        let mut spy = ScrollSpy::new(&NavConfig::portfolio());

        let change = spy.update(&sections, 800.0).unwrap();
        assert_eq!(
            change,
            SpyChange {
                previous: None,
                current: 1
            }
        );
        assert_eq!(spy.update(&sections, 900.0), None, "same section, no change");

        let change = spy.update(&sections, 1350.0).unwrap();
        assert_eq!(change.previous, Some(1));
        assert_eq!(change.current, 2);

        assert_eq!(spy.update(&sections, 10_000.0), None, "past the end");
        assert_eq!(spy.active(), Some(2), "highlight is kept");
    }

    #[test]
    fn elevation_is_idempotent() {
        let mut nav = NavbarElevation::new(&NavConfig::portfolio());
        let changes: Vec<_> = [0.0, 50.0, 51.0, 80.0, 80.0, 10.0, 10.0]
            .into_iter()
            .filter_map(|y| nav.update(y))
            .collect();
        assert_eq!(
            changes,
            [ClassChange::add("scrolled"), ClassChange::remove("scrolled")],
            "one change per crossing"
        );
    }

    #[test]
    fn anchors() {
        assert_eq!(anchor_id("#about"), Some("about"));
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id("https://example.com/#about"), None);
        assert_eq!(anchor_scroll_top(670.0, 70.0), 600.0);
        assert_eq!(anchor_scroll_top(20.0, 70.0), 0.0, "clamped at the top");
    }
}
