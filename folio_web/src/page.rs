// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page initialization and teardown.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use folio_core::config::PageConfig;
use folio_core::trace::{Component, ComponentInitEvent, TraceSink, Tracer};
use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use crate::console::ConsoleSink;
use crate::error::InitError;
use crate::selectors::Selectors;
use crate::{effects, form, nav, reveal};

/// Trace sink shared by every component of a page.
pub type SharedSink = Rc<RefCell<dyn TraceSink>>;

/// Runs `f` with a tracer over `sink`.
///
/// Events raised while the sink is already borrowed (a sink that re-enters
/// the page) are dropped.
pub(crate) fn emit(sink: &SharedSink, f: impl FnOnce(&mut Tracer<'_>)) {
    if let Ok(mut sink) = sink.try_borrow_mut() {
        let mut tracer = Tracer::new(&mut *sink);
        f(&mut tracer);
    }
}

/// Everything a component needs to attach itself.
pub(crate) struct PageContext {
    pub(crate) window: Window,
    pub(crate) document: Document,
    pub(crate) config: PageConfig,
    pub(crate) selectors: Selectors,
    pub(crate) sink: SharedSink,
}

/// Listeners and teardown hooks owned by one attached component.
///
/// Dropping it removes the listeners, then runs the hooks in registration
/// order. Hooks cancel timers and remove injected nodes.
pub(crate) struct Attached {
    pub(crate) bound: usize,
    listeners: Vec<EventListener>,
    cleanup: Vec<Box<dyn FnOnce()>>,
}

impl Attached {
    pub(crate) fn new(bound: usize) -> Self {
        Self {
            bound,
            listeners: Vec::new(),
            cleanup: Vec::new(),
        }
    }

    pub(crate) fn listen(&mut self, listener: EventListener) {
        self.listeners.push(listener);
    }

    pub(crate) fn on_dispose(&mut self, hook: impl FnOnce() + 'static) {
        self.cleanup.push(Box::new(hook));
    }
}

impl Drop for Attached {
    fn drop(&mut self) {
        self.listeners.clear();
        for hook in self.cleanup.drain(..) {
            hook();
        }
    }
}

type AttachFn = fn(&PageContext) -> Result<Attached, InitError>;

const COMPONENTS: [(Component, AttachFn); 13] = [
    (Component::MobileMenu, nav::attach_mobile_menu),
    (Component::NavbarElevation, nav::attach_navbar_elevation),
    (Component::ScrollSpy, nav::attach_scroll_spy),
    (Component::SmoothScroll, nav::attach_smooth_scroll),
    (Component::Reveal, reveal::attach_reveal),
    (Component::TimelineReveal, reveal::attach_timeline_reveal),
    (Component::DataAnimate, reveal::attach_data_animate),
    (Component::ContactForm, form::attach_contact_form),
    (Component::HeroTyping, effects::attach_hero_typing),
    (Component::Ripple, effects::attach_ripple),
    (Component::CardTilt, effects::attach_card_tilt),
    (Component::SkillTags, effects::attach_skill_tags),
    (Component::Cursor, effects::attach_cursor),
];

/// A live page: every attached component plus the ones that failed.
///
/// Dropping the page (or calling [`dispose`](Self::dispose)) removes every
/// listener, cancels every pending timer, and removes injected elements.
pub struct Page {
    attached: Vec<(Component, Attached)>,
    failures: Vec<InitError>,
}

impl core::fmt::Debug for Page {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Page")
            .field(
                "attached",
                &self.attached.iter().map(|(c, _)| *c).collect::<Vec<_>>(),
            )
            .field("failures", &self.failures)
            .finish()
    }
}

impl Page {
    /// Components that failed to attach, in initialization order.
    #[must_use]
    pub fn failures(&self) -> &[InitError] {
        &self.failures
    }

    /// Components that attached, in initialization order.
    pub fn attached(&self) -> impl Iterator<Item = Component> + '_ {
        self.attached.iter().map(|(component, _)| *component)
    }

    /// Returns `true` if `component` attached.
    #[must_use]
    pub fn is_attached(&self, component: Component) -> bool {
        self.attached.iter().any(|(c, _)| *c == component)
    }

    /// Detaches every component.
    pub fn dispose(self) {}
}

/// Attaches every component to `document`.
///
/// Each component is attempted independently, in [`Component::ALL`] order.
/// One [`ComponentInitEvent`] is emitted per component.
pub fn init(
    window: Window,
    document: Document,
    config: PageConfig,
    selectors: Selectors,
    sink: SharedSink,
) -> Page {
    let ctx = PageContext {
        window,
        document,
        config,
        selectors,
        sink,
    };
    let mut attached = Vec::new();
    let mut failures = Vec::new();
    for (component, attach) in COMPONENTS {
        let (ok, bound) = match attach(&ctx) {
            Ok(a) => {
                let bound = a.bound;
                attached.push((component, a));
                (true, bound)
            }
            Err(err) => {
                failures.push(err);
                (false, 0)
            }
        };
        emit(&ctx.sink, |t| {
            t.component_init(&ComponentInitEvent {
                component,
                ok,
                bound,
            });
        });
    }
    Page { attached, failures }
}

/// Attaches the portfolio page to the global document with console tracing.
///
/// # Errors
///
/// Returns an error if there is no global `window` or `document`.
pub fn start() -> Result<Page, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let sink: SharedSink = Rc::new(RefCell::new(ConsoleSink::new()));
    Ok(init(
        window,
        document,
        PageConfig::portfolio(),
        Selectors::portfolio(),
        sink,
    ))
}
