// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The singleton notification banner.
//!
//! Every [`Toast::show`] overwrites the message and kind and pushes the hide
//! deadline to `now + lifetime`, so a later show is never hidden early by an
//! earlier one. Backends keep a single hide timer and replace it on each show.

use alloc::string::String;

use crate::style::{ClassChange, StyleDecl, class};
use crate::time::{Duration, HostTime};

/// Success or failure styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToastKind {
    /// Green banner.
    Success,
    /// Red banner.
    Error,
}

impl ToastKind {
    /// Inline `background` value for this kind.
    #[must_use]
    pub const fn background(self) -> &'static str {
        match self {
            Self::Success => "linear-gradient(135deg, #10b981 0%, #059669 100%)",
            Self::Error => "linear-gradient(135deg, #ef4444 0%, #dc2626 100%)",
        }
    }
}

/// What the toast should look like.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastView<'a> {
    /// Message text.
    pub message: &'a str,
    /// Styling.
    pub kind: ToastKind,
    /// Whether the toast carries the `show` class.
    pub visible: bool,
}

impl ToastView<'_> {
    /// Background declaration for the toast element.
    #[must_use]
    pub fn background(&self) -> StyleDecl {
        StyleDecl::new("background", self.kind.background())
    }

    /// Visibility class change for the toast element.
    #[must_use]
    pub const fn show_class(&self) -> ClassChange {
        ClassChange::set(class::SHOW, self.visible)
    }
}

/// Toast state.
#[derive(Clone, Debug)]
pub struct Toast {
    lifetime: Duration,
    message: String,
    kind: ToastKind,
    hide_at: Option<HostTime>,
}

impl Toast {
    /// Creates a hidden toast that stays visible for `lifetime` per show.
    #[must_use]
    pub const fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            message: String::new(),
            kind: ToastKind::Success,
            hide_at: None,
        }
    }

    /// Shows `message`, replacing whatever is displayed, and returns the new
    /// hide deadline.
    pub fn show(&mut self, message: &str, kind: ToastKind, now: HostTime) -> HostTime {
        self.message.clear();
        self.message.push_str(message);
        self.kind = kind;
        let hide_at = now.saturating_add(self.lifetime);
        self.hide_at = Some(hide_at);
        hide_at
    }

    /// Hides the toast if its deadline has passed. Returns `true` if this call
    /// hid it.
    pub fn expire(&mut self, now: HostTime) -> bool {
        match self.hide_at {
            Some(deadline) if now >= deadline => {
                self.hide_at = None;
                true
            }
            _ => false,
        }
    }

    /// Hides the toast immediately (the backend's single hide timer fired).
    pub fn hide(&mut self) {
        self.hide_at = None;
    }

    /// Returns `true` while the toast is shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.hide_at.is_some()
    }

    /// Returns the pending hide deadline.
    #[must_use]
    pub const fn hide_at(&self) -> Option<HostTime> {
        self.hide_at
    }

    /// Returns the current view.
    #[must_use]
    pub fn view(&self) -> ToastView<'_> {
        ToastView {
            message: &self.message,
            kind: self.kind,
            visible: self.is_visible(),
        }
    }
}
