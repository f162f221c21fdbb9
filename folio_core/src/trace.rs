// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the page runtime.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! backend calls as page components react to input. All method bodies default
//! to no-ops, so implementing only the events you care about is fine.
//!
//! Backends emit through [`Tracer`], which borrows an optional sink. Without
//! the `trace` feature its methods are empty and the events are never built
//! into calls; with it, each call is one `Option` check.

use crate::form::{Field, SubmitOutcome};
use crate::reveal::ElementId;
use crate::time::{Duration, HostTime};
use crate::toast::ToastKind;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Independently initialized page component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    /// Mobile menu toggle and link closing.
    MobileMenu,
    /// Navbar `scrolled` state.
    NavbarElevation,
    /// Nav link highlighting.
    ScrollSpy,
    /// Animated in-page anchor scrolling.
    SmoothScroll,
    /// Section and card reveal.
    Reveal,
    /// Timeline entry reveal.
    TimelineReveal,
    /// `[data-animate]` scroll check.
    DataAnimate,
    /// Contact form and toast.
    ContactForm,
    /// Hero title typing.
    HeroTyping,
    /// Button ripple.
    Ripple,
    /// Project card tilt.
    CardTilt,
    /// Skill-tag lift.
    SkillTags,
    /// Custom cursor.
    Cursor,
}

impl Component {
    /// Every component, in initialization order.
    pub const ALL: [Self; 13] = [
        Self::MobileMenu,
        Self::NavbarElevation,
        Self::ScrollSpy,
        Self::SmoothScroll,
        Self::Reveal,
        Self::TimelineReveal,
        Self::DataAnimate,
        Self::ContactForm,
        Self::HeroTyping,
        Self::Ripple,
        Self::CardTilt,
        Self::SkillTags,
        Self::Cursor,
    ];

    /// Short kebab-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MobileMenu => "mobile-menu",
            Self::NavbarElevation => "navbar-elevation",
            Self::ScrollSpy => "scroll-spy",
            Self::SmoothScroll => "smooth-scroll",
            Self::Reveal => "reveal",
            Self::TimelineReveal => "timeline-reveal",
            Self::DataAnimate => "data-animate",
            Self::ContactForm => "contact-form",
            Self::HeroTyping => "hero-typing",
            Self::Ripple => "ripple",
            Self::CardTilt => "card-tilt",
            Self::SkillTags => "skill-tags",
            Self::Cursor => "cursor",
        }
    }
}

/// Coarse submit result carried by [`SubmitEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubmitStage {
    /// Rejected by validation.
    Rejected,
    /// Accepted; waiting out the simulated delay.
    Sending,
    /// Ignored because a submission was in flight.
    Busy,
    /// Simulated delay elapsed; form reset.
    Completed,
}

impl From<SubmitOutcome> for SubmitStage {
    fn from(outcome: SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Rejected => Self::Rejected,
            SubmitOutcome::Sending { .. } => Self::Sending,
            SubmitOutcome::Busy => Self::Busy,
        }
    }
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted once per component during page initialization.
#[derive(Clone, Copy, Debug)]
pub struct ComponentInitEvent {
    /// Which component.
    pub component: Component,
    /// `false` if the component was skipped (missing element, DOM failure).
    pub ok: bool,
    /// Number of elements the component bound to.
    pub bound: usize,
}

/// Emitted when scroll-spy highlights a new section.
#[derive(Clone, Copy, Debug)]
pub struct SectionActivatedEvent {
    /// Index of the section in document order.
    pub index: usize,
    /// Previously highlighted section.
    pub previous: Option<usize>,
    /// Scroll position that caused the change.
    pub scroll_y: f64,
    /// When.
    pub at: HostTime,
}

/// Emitted when an element is revealed.
#[derive(Clone, Copy, Debug)]
pub struct RevealEvent {
    /// Which observer.
    pub component: Component,
    /// Which element.
    pub element: ElementId,
    /// Stagger delay applied.
    pub delay: Duration,
    /// When.
    pub at: HostTime,
}

/// Emitted after a field is evaluated.
#[derive(Clone, Copy, Debug)]
pub struct FieldValidatedEvent {
    /// Which field.
    pub field: Field,
    /// Verdict.
    pub valid: bool,
    /// When.
    pub at: HostTime,
}

/// Emitted on submit attempts and completion.
#[derive(Clone, Copy, Debug)]
pub struct SubmitEvent {
    /// What happened.
    pub stage: SubmitStage,
    /// When.
    pub at: HostTime,
}

/// Emitted when the toast is shown.
#[derive(Clone, Copy, Debug)]
pub struct ToastEvent {
    /// Styling.
    pub kind: ToastKind,
    /// Scheduled hide deadline.
    pub hide_at: HostTime,
    /// When.
    pub at: HostTime,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the page runtime.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called once per component during initialization.
    fn on_component_init(&mut self, e: &ComponentInitEvent) {
        _ = e;
    }

    /// Called when scroll-spy highlights a new section.
    fn on_section_activated(&mut self, e: &SectionActivatedEvent) {
        _ = e;
    }

    /// Called when an element is revealed.
    fn on_reveal(&mut self, e: &RevealEvent) {
        _ = e;
    }

    /// Called after a field is evaluated.
    fn on_field_validated(&mut self, e: &FieldValidatedEvent) {
        _ = e;
    }

    /// Called on submit attempts and completion.
    fn on_submit(&mut self, e: &SubmitEvent) {
        _ = e;
    }

    /// Called when the toast is shown.
    fn on_toast(&mut self, e: &ToastEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

macro_rules! dispatch {
    ($self:ident, $method:ident, $e:ident) => {{
        #[cfg(feature = "trace")]
        if let Some(s) = &mut $self.sink {
            s.$method($e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = (&$self, $e);
        }
    }};
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`ComponentInitEvent`].
    #[inline]
    pub fn component_init(&mut self, e: &ComponentInitEvent) {
        dispatch!(self, on_component_init, e);
    }

    /// Emits a [`SectionActivatedEvent`].
    #[inline]
    pub fn section_activated(&mut self, e: &SectionActivatedEvent) {
        dispatch!(self, on_section_activated, e);
    }

    /// Emits a [`RevealEvent`].
    #[inline]
    pub fn reveal(&mut self, e: &RevealEvent) {
        dispatch!(self, on_reveal, e);
    }

    /// Emits a [`FieldValidatedEvent`].
    #[inline]
    pub fn field_validated(&mut self, e: &FieldValidatedEvent) {
        dispatch!(self, on_field_validated, e);
    }

    /// Emits a [`SubmitEvent`].
    #[inline]
    pub fn submit(&mut self, e: &SubmitEvent) {
        dispatch!(self, on_submit, e);
    }

    /// Emits a [`ToastEvent`].
    #[inline]
    pub fn toast(&mut self, e: &ToastEvent) {
        dispatch!(self, on_toast, e);
    }
}
