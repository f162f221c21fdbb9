// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reveal bindings over `IntersectionObserver`, plus the `[data-animate]`
//! scroll check.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use folio_core::reveal::{
    ElementId, GroupOptions, IntersectionSample, RevealConfig, RevealSet, data_animate_due,
};
use folio_core::style::{ClassChange, class};
use folio_core::time::Duration;
use folio_core::trace::{Component, RevealEvent};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Window,
};

use crate::dom;
use crate::error::InitError;
use crate::now;
use crate::page::{Attached, PageContext, SharedSink, emit};
use crate::rate_limit::throttle;

type ObserverClosure = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct RevealState {
    component: Component,
    set: RefCell<RevealSet>,
    /// Registered elements; index `i` is `ElementId(i)`.
    elements: Vec<HtmlElement>,
    /// Delayed reveals not yet applied.
    pending: RefCell<Vec<Timeout>>,
    sink: SharedSink,
}

impl RevealState {
    fn element_id(&self, target: &Element) -> Option<ElementId> {
        let index = self
            .elements
            .iter()
            .position(|el| AsRef::<Element>::as_ref(el) == target)?;
        u32::try_from(index).ok().map(ElementId)
    }

    fn on_batch(&self, entries: &Array, observer: &IntersectionObserver) {
        let samples: Vec<IntersectionSample> = entries
            .iter()
            .filter_map(|v| v.dyn_into::<IntersectionObserverEntry>().ok())
            .filter_map(|entry| {
                Some(IntersectionSample {
                    element: self.element_id(&entry.target())?,
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                })
            })
            .collect();
        let reveals = self.set.borrow_mut().observe(&samples);
        let motion = self.set.borrow().config().motion;
        let at = now();

        for reveal in reveals {
            let Some(el) = self.elements.get(reveal.element.0 as usize) else {
                continue;
            };
            observer.unobserve(el);
            let styles = motion.final_styles(reveal.delay);
            if motion.defers_to_timer() && reveal.delay > Duration::ZERO {
                let el = el.clone();
                self.pending.borrow_mut().push(Timeout::new(
                    reveal.delay.as_timer_millis(),
                    move || dom::apply_styles(&el, &styles),
                ));
            } else {
                dom::apply_styles(el, &styles);
            }
            emit(&self.sink, |t| {
                t.reveal(&RevealEvent {
                    component: self.component,
                    element: reveal.element,
                    delay: reveal.delay,
                    at,
                });
            });
        }
    }
}

/// Registers `groups` with a fresh observer.
///
/// Groups hidden until revealed get the motion's initial styles now.
fn observe(
    ctx: &PageContext,
    component: Component,
    config: RevealConfig,
    groups: Vec<(Vec<HtmlElement>, GroupOptions)>,
) -> Result<Attached, InitError> {
    let mut set = RevealSet::new(config);
    let mut elements = Vec::new();
    for (group, options) in groups {
        let ids = set.register_group(group.len(), options);
        debug_assert_eq!(ids.len(), group.len(), "one id per element");
        if options.hide_until_revealed {
            let initial = config.motion.initial_styles();
            for el in &group {
                dom::apply_styles(el, &initial);
            }
        }
        elements.extend(group);
    }

    let state = Rc::new(RevealState {
        component,
        set: RefCell::new(set),
        elements,
        pending: RefCell::new(Vec::new()),
        sink: Rc::clone(&ctx.sink),
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin_css());

    let callback: ObserverClosure = {
        let state = Rc::clone(&state);
        Closure::new(move |entries: Array, observer: IntersectionObserver| {
            state.on_batch(&entries, &observer);
        })
    };
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| InitError::js(component, &e))?;
    for el in &state.elements {
        observer.observe(el);
    }

    let mut attached = Attached::new(state.elements.len());
    attached.on_dispose(move || {
        observer.disconnect();
        drop(callback);
        state.pending.borrow_mut().clear();
    });
    Ok(attached)
}

pub(crate) fn attach_reveal(ctx: &PageContext) -> Result<Attached, InitError> {
    let c = Component::Reveal;
    let sections = dom::query_all(&ctx.document, c, ctx.selectors.sections)?;
    let cards = dom::query_all(&ctx.document, c, ctx.selectors.reveal_cards)?;
    observe(
        ctx,
        c,
        ctx.config.reveal,
        alloc::vec![
            (sections, GroupOptions::AS_IS),
            (cards, GroupOptions::HIDDEN_STAGGERED),
        ],
    )
}

pub(crate) fn attach_timeline_reveal(ctx: &PageContext) -> Result<Attached, InitError> {
    let c = Component::TimelineReveal;
    let items = dom::query_all(&ctx.document, c, ctx.selectors.timeline_items)?;
    observe(
        ctx,
        c,
        ctx.config.timeline,
        alloc::vec![(items, GroupOptions::HIDDEN_STAGGERED)],
    )
}

struct DataAnimate {
    window: Window,
    elements: Vec<Element>,
    animated: RefCell<Vec<bool>>,
    offset: f64,
}

impl DataAnimate {
    fn check(&self) {
        let viewport_height = dom::viewport_height(&self.window);
        let mut animated = self.animated.borrow_mut();
        for (el, done) in self.elements.iter().zip(animated.iter_mut()) {
            if *done {
                continue;
            }
            if data_animate_due(dom::client_rect(el).y0, viewport_height, self.offset) {
                dom::apply_class(el, ClassChange::add(class::ANIMATED));
                *done = true;
            }
        }
    }
}

pub(crate) fn attach_data_animate(ctx: &PageContext) -> Result<Attached, InitError> {
    let c = Component::DataAnimate;
    let elements: Vec<Element> = dom::query_all(&ctx.document, c, ctx.selectors.data_animate)?;
    let effects = &ctx.config.effects;
    let state = Rc::new(DataAnimate {
        window: ctx.window.clone(),
        animated: RefCell::new(alloc::vec![false; elements.len()]),
        elements,
        offset: effects.data_animate_offset,
    });

    let mut attached = Attached::new(state.elements.len());
    let check = {
        let state = Rc::clone(&state);
        throttle(effects.data_animate_throttle, move |()| state.check())
    };
    attached.listen(EventListener::new(&ctx.window, "scroll", move |_| {
        check.call(());
    }));
    Ok(attached)
}
