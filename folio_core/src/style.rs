// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation changes produced by the state machines.
//!
//! The runtime only ever toggles class membership and sets inline style
//! properties. These two small types carry those changes from `folio_core`
//! to a backend, which applies them verbatim.

use alloc::string::String;

/// One inline style property assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleDecl {
    /// CSS property name, e.g. `"transform"`.
    pub property: &'static str,
    /// CSS value, e.g. `"translateX(0)"`.
    pub value: String,
}

impl StyleDecl {
    /// Creates a declaration.
    #[must_use]
    pub fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

/// Adds or removes one class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClassChange {
    /// Class name.
    pub class: &'static str,
    /// `true` to add, `false` to remove.
    pub present: bool,
}

impl ClassChange {
    /// Adds `class`.
    #[must_use]
    pub const fn add(class: &'static str) -> Self {
        Self {
            class,
            present: true,
        }
    }

    /// Removes `class`.
    #[must_use]
    pub const fn remove(class: &'static str) -> Self {
        Self {
            class,
            present: false,
        }
    }

    /// Adds `class` if `present`, removes it otherwise.
    #[must_use]
    pub const fn set(class: &'static str, present: bool) -> Self {
        Self { class, present }
    }
}

/// Class names the runtime toggles. The stylesheet defines what they look like.
pub mod class {
    /// Open mobile menu, highlighted nav link.
    pub const ACTIVE: &str = "active";
    /// Navbar past the elevation threshold.
    pub const SCROLLED: &str = "scrolled";
    /// Visible toast.
    pub const SHOW: &str = "show";
    /// Visible custom cursor.
    pub const VISIBLE: &str = "visible";
    /// Custom cursor over an interactive element.
    pub const HOVER: &str = "hover";
    /// Revealed `[data-animate]` element.
    pub const ANIMATED: &str = "animated";
    /// Transient ripple overlay.
    pub const RIPPLE: &str = "ripple";
    /// Custom cursor element.
    pub const CUSTOM_CURSOR: &str = "custom-cursor";
    /// Closed-menu icon glyph.
    pub const ICON_BARS: &str = "fa-bars";
    /// Open-menu icon glyph.
    pub const ICON_TIMES: &str = "fa-times";
}
