// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decorative effects: hero typing, button ripple, card tilt, custom cursor
//! and skill-tag lift.
//!
//! None of these share state. Each exposes the geometry or text a backend
//! needs and leaves listener wiring to the backend.

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::style::{ClassChange, StyleDecl, class};

/// Character-by-character reveal of a fixed string.
///
/// Each [`step`](Self::step) extends the visible prefix by one character.
/// Once the full text is shown the sequence is finished for good.
#[derive(Clone, Debug)]
pub struct TypingReveal {
    text: &'static str,
    /// Byte length of the visible prefix; always on a char boundary.
    shown: usize,
}

impl TypingReveal {
    /// Creates a sequence with nothing typed yet.
    #[must_use]
    pub const fn new(text: &'static str) -> Self {
        Self { text, shown: 0 }
    }

    /// Returns the visible prefix.
    #[must_use]
    pub fn visible(&self) -> &'static str {
        &self.text[..self.shown]
    }

    /// Returns `true` once every character is visible.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.shown == self.text.len()
    }

    /// Reveals one more character and returns the new prefix, or `None` if
    /// the text is already complete.
    pub fn step(&mut self) -> Option<&'static str> {
        let next = self.text[self.shown..].chars().next()?;
        self.shown += next.len_utf8();
        Some(self.visible())
    }
}

/// Size and placement of a ripple overlay, relative to its button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    /// Diameter, in px.
    pub size: f64,
    /// Left offset inside the button, in px.
    pub left: f64,
    /// Top offset inside the button, in px.
    pub top: f64,
}

impl RippleGeometry {
    /// Inline styles for the ripple `<span>`.
    #[must_use]
    pub fn styles(&self) -> Vec<StyleDecl> {
        vec![
            StyleDecl::new("width", format!("{}px", self.size)),
            StyleDecl::new("height", format!("{}px", self.size)),
            StyleDecl::new("left", format!("{}px", self.left)),
            StyleDecl::new("top", format!("{}px", self.top)),
        ]
    }
}

/// Computes a ripple centered on `click` (viewport coordinates) inside
/// `button` (its bounding client rect), sized to the button's larger side.
#[must_use]
pub fn ripple_geometry(button: Rect, click: Point) -> RippleGeometry {
    let size = button.width().max(button.height());
    RippleGeometry {
        size,
        left: click.x - button.x0 - size / 2.0,
        top: click.y - button.y0 - size / 2.0,
    }
}

/// 3-D rotation applied to a hovered card, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    /// Rotation around the horizontal axis.
    pub rotate_x: f64,
    /// Rotation around the vertical axis.
    pub rotate_y: f64,
}

impl Tilt {
    /// Transform restoring a card when the pointer leaves.
    pub const NEUTRAL_CSS: &'static str = "perspective(1000px) rotateX(0) rotateY(0) translateY(0)";

    /// Computes the tilt for a pointer at `pointer` over `card` (both in
    /// viewport coordinates). Offsets from the card center are divided by
    /// `divisor`.
    #[must_use]
    pub fn from_pointer(card: Rect, pointer: Point, divisor: f64) -> Self {
        let x = pointer.x - card.x0;
        let y = pointer.y - card.y0;
        let center_x = card.width() / 2.0;
        let center_y = card.height() / 2.0;
        Self {
            rotate_x: (y - center_y) / divisor,
            rotate_y: (center_x - x) / divisor,
        }
    }

    /// CSS `transform` value for this tilt, lifted 10px.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-10px)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Skill-tag hover transforms.
pub mod skill_tag {
    /// Transform while hovered.
    pub const LIFTED: &str = "translateY(-3px) scale(1.05)";
    /// Transform at rest.
    pub const REST: &str = "translateY(0) scale(1)";
}

/// State of the floating cursor element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CursorState {
    visible: bool,
    hover: bool,
}

impl CursorState {
    /// Returns `true` once the pointer has moved inside the document.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns `true` while over an interactive element.
    #[must_use]
    pub const fn is_hovering(&self) -> bool {
        self.hover
    }

    /// Pointer moved to `at`. Returns the position styles and, on the first
    /// move after being hidden, the class change that shows the cursor.
    pub fn moved(&mut self, at: Point) -> (Vec<StyleDecl>, Option<ClassChange>) {
        let styles = vec![
            StyleDecl::new("left", format!("{}px", at.x)),
            StyleDecl::new("top", format!("{}px", at.y)),
        ];
        let shown = (!self.visible).then(|| {
            self.visible = true;
            ClassChange::add(class::VISIBLE)
        });
        (styles, shown)
    }

    /// Pointer left the document.
    pub fn left_document(&mut self) -> Option<ClassChange> {
        self.visible.then(|| {
            self.visible = false;
            ClassChange::remove(class::VISIBLE)
        })
    }

    /// Pointer entered or left an interactive element.
    pub fn set_hover(&mut self, hover: bool) -> Option<ClassChange> {
        (self.hover != hover).then(|| {
            self.hover = hover;
            ClassChange::set(class::HOVER, hover)
        })
    }
}

/// Stylesheet injected for the ripple overlay.
pub const RIPPLE_CSS: &str = "
.btn {
    position: relative;
    overflow: hidden;
}
.ripple {
    position: absolute;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.3);
    transform: scale(0);
    animation: ripple-animation 0.6s linear;
    pointer-events: none;
}
@keyframes ripple-animation {
    to {
        transform: scale(4);
        opacity: 0;
    }
}
";

/// Stylesheet injected for the custom cursor.
pub const CURSOR_CSS: &str = "
.custom-cursor {
    width: 20px;
    height: 20px;
    background: rgba(37, 99, 235, 0.8);
    border-radius: 50%;
    position: fixed;
    pointer-events: none;
    z-index: 9999;
    transition: all 0.1s ease;
    transform: translate(-50%, -50%);
    opacity: 0;
}
.custom-cursor.visible {
    opacity: 1;
}
.custom-cursor.hover {
    transform: translate(-50%, -50%) scale(1.5);
    background: rgba(37, 99, 235, 0.6);
}
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_reveals_one_char_per_step() {
        let mut typing = TypingReveal::new("Hi!");
        assert_eq!(typing.visible(), "");
        assert_eq!(typing.step(), Some("H"));
        assert_eq!(typing.step(), Some("Hi"));
        assert_eq!(typing.step(), Some("Hi!"));
        assert!(typing.is_finished());
        assert_eq!(typing.step(), None, "not restartable");
    }

    #[test]
    fn typing_respects_char_boundaries() {
        let mut typing = TypingReveal::new("né");
        assert_eq!(typing.step(), Some("n"));
        assert_eq!(typing.step(), Some("né"));
        assert!(typing.is_finished());
    }

    #[test]
    fn hero_text_takes_one_step_per_char() {
        let text = crate::config::EffectsConfig::portfolio().hero_text;
        let mut typing = TypingReveal::new(text);
        let steps = core::iter::from_fn(|| typing.step()).count();
        assert_eq!(steps, text.chars().count());
    }

    #[test]
    fn ripple_is_centered_on_click() {
        let button = Rect::new(100.0, 50.0, 300.0, 90.0);
        let g = ripple_geometry(button, Point::new(150.0, 60.0));
        assert_eq!(g.size, 200.0, "larger side wins");
        assert_eq!(g.left, -50.0);
        assert_eq!(g.top, -90.0);
        assert_eq!(g.styles()[0], StyleDecl::new("width", "200px"));
    }

    #[test]
    fn tilt_from_pointer_offset() {
        let card = Rect::new(0.0, 0.0, 200.0, 100.0);
        let centered = Tilt::from_pointer(card, Point::new(100.0, 50.0), 10.0);
        assert_eq!(centered, Tilt { rotate_x: 0.0, rotate_y: 0.0 });

        let corner = Tilt::from_pointer(card, Point::new(0.0, 100.0), 10.0);
        assert_eq!(corner.rotate_x, 5.0);
        assert_eq!(corner.rotate_y, 10.0);
        assert_eq!(
            corner.css(),
            "perspective(1000px) rotateX(5deg) rotateY(10deg) translateY(-10px)"
        );
    }

    #[test]
    fn cursor_visibility_and_hover() {
        let mut cursor = CursorState::default();
        let (styles, shown) = cursor.moved(Point::new(10.0, 20.5));
        assert_eq!(styles[1], StyleDecl::new("top", "20.5px"));
        assert_eq!(shown, Some(ClassChange::add("visible")));
        assert_eq!(cursor.moved(Point::new(11.0, 20.0)).1, None, "shown once");

        assert_eq!(cursor.set_hover(true), Some(ClassChange::add("hover")));
        assert_eq!(cursor.set_hover(true), None);
        assert_eq!(cursor.set_hover(false), Some(ClassChange::remove("hover")));

        assert_eq!(cursor.left_document(), Some(ClassChange::remove("visible")));
        assert_eq!(cursor.left_document(), None);
        assert!(cursor.moved(Point::ZERO).1.is_some(), "shows again on return");
    }
}
