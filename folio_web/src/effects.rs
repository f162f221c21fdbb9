// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decorative effect bindings.

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use folio_core::effects::{
    CURSOR_CSS, CursorState, RIPPLE_CSS, Tilt, TypingReveal, ripple_geometry, skill_tag,
};
use folio_core::style::{ClassChange, class};
use folio_core::time::Duration;
use folio_core::trace::Component;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use web_sys::{Document, Element, Event, HtmlElement};

use crate::dom;
use crate::error::InitError;
use crate::page::{Attached, PageContext};

struct Hero {
    title: Element,
    typing: RefCell<TypingReveal>,
    step: Duration,
    timer: RefCell<Option<Timeout>>,
}

impl Hero {
    fn schedule(self: &Rc<Self>, delay: Duration) {
        let weak: Weak<Self> = Rc::downgrade(self);
        let timeout = Timeout::new(delay.as_timer_millis(), move || {
            if let Some(hero) = weak.upgrade() {
                hero.type_next();
            }
        });
        *self.timer.borrow_mut() = Some(timeout);
    }

    fn type_next(self: &Rc<Self>) {
        self.typing.borrow_mut().step();
        let typing = self.typing.borrow();
        // The first pass also clears the placeholder title.
        self.title.set_text_content(Some(typing.visible()));
        if typing.is_finished() {
            self.timer.borrow_mut().take();
        } else {
            self.schedule(self.step);
        }
    }
}

pub(crate) fn attach_hero_typing(ctx: &PageContext) -> Result<Attached, InitError> {
    let c = Component::HeroTyping;
    let title = dom::query(&ctx.document, c, ctx.selectors.hero_title)?;
    let effects = &ctx.config.effects;
    let hero = Rc::new(Hero {
        title,
        typing: RefCell::new(TypingReveal::new(effects.hero_text)),
        step: effects.typing_step,
        timer: RefCell::new(None),
    });
    hero.schedule(effects.typing_delay);

    let mut attached = Attached::new(1);
    attached.on_dispose(move || {
        hero.timer.borrow_mut().take();
    });
    Ok(attached)
}

struct Ripples {
    document: Document,
    lifetime: Duration,
    next_id: Cell<u64>,
    live: RefCell<Vec<(u64, Element, Timeout)>>,
}

impl Ripples {
    fn spawn(self: &Rc<Self>, button: &HtmlElement, event: &Event) {
        let Some(click) = dom::client_point(event) else {
            return;
        };
        let Ok(span) = dom::create::<HtmlElement>(&self.document, Component::Ripple, "span")
        else {
            return;
        };
        let geometry = ripple_geometry(dom::client_rect(button), click);
        dom::apply_styles(&span, &geometry.styles());
        dom::apply_class(&span, ClassChange::add(class::RIPPLE));
        if button.append_child(&span).is_err() {
            return;
        }

        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let weak: Weak<Self> = Rc::downgrade(self);
        let timeout = Timeout::new(self.lifetime.as_timer_millis(), move || {
            if let Some(ripples) = weak.upgrade() {
                ripples.retire(id);
            }
        });
        self.live.borrow_mut().push((id, span.into(), timeout));
    }

    fn retire(&self, id: u64) {
        let entry = {
            let mut live = self.live.borrow_mut();
            let Some(pos) = live.iter().position(|(i, ..)| *i == id) else {
                return;
            };
            live.swap_remove(pos)
        };
        entry.1.remove();
    }

    fn clear(&self) {
        for (_, span, _) in self.live.borrow_mut().drain(..) {
            span.remove();
        }
    }
}

pub(crate) fn attach_ripple(ctx: &PageContext) -> Result<Attached, InitError> {
    let c = Component::Ripple;
    let buttons: Vec<HtmlElement> = dom::query_all(&ctx.document, c, ctx.selectors.buttons)?;
    let style = dom::inject_style(&ctx.document, c, RIPPLE_CSS)?;
    let ripples = Rc::new(Ripples {
        document: ctx.document.clone(),
        lifetime: ctx.config.effects.ripple_lifetime,
        next_id: Cell::new(0),
        live: RefCell::new(Vec::new()),
    });

    let mut attached = Attached::new(buttons.len());
    for button in buttons {
        let ripples = Rc::clone(&ripples);
        let target = button.clone();
        attached.listen(EventListener::new(&target, "click", move |event| {
            ripples.spawn(&button, event);
        }));
    }
    attached.on_dispose(move || {
        ripples.clear();
        style.remove();
    });
    Ok(attached)
}

pub(crate) fn attach_card_tilt(ctx: &PageContext) -> Result<Attached, InitError> {
    let c = Component::CardTilt;
    let cards: Vec<HtmlElement> = dom::query_all(&ctx.document, c, ctx.selectors.project_cards)?;
    let divisor = ctx.config.effects.tilt_divisor;

    let mut attached = Attached::new(cards.len());
    for card in &cards {
        let target = card.clone();
        attached.listen(EventListener::new(card, "mousemove", move |event| {
            if let Some(pointer) = dom::client_point(event) {
                let tilt = Tilt::from_pointer(dom::client_rect(&target), pointer, divisor);
                dom::apply_style(&target, "transform", &tilt.css());
            }
        }));
        let target = card.clone();
        attached.listen(EventListener::new(card, "mouseleave", move |_| {
            dom::apply_style(&target, "transform", Tilt::NEUTRAL_CSS);
        }));
    }
    Ok(attached)
}

pub(crate) fn attach_skill_tags(ctx: &PageContext) -> Result<Attached, InitError> {
    let c = Component::SkillTags;
    let tags: Vec<HtmlElement> = dom::query_all(&ctx.document, c, ctx.selectors.skill_tags)?;

    let mut attached = Attached::new(tags.len());
    for tag in &tags {
        for (event, transform) in [
            ("mouseenter", skill_tag::LIFTED),
            ("mouseleave", skill_tag::REST),
        ] {
            let target = tag.clone();
            attached.listen(EventListener::new(tag, event, move |_| {
                dom::apply_style(&target, "transform", transform);
            }));
        }
    }
    Ok(attached)
}

struct Cursor {
    el: HtmlElement,
    state: RefCell<CursorState>,
}

impl Cursor {
    fn apply(&self, change: Option<ClassChange>) {
        if let Some(change) = change {
            dom::apply_class(&self.el, change);
        }
    }
}

pub(crate) fn attach_cursor(ctx: &PageContext) -> Result<Attached, InitError> {
    let c = Component::Cursor;
    let body = ctx.document.body().ok_or(InitError::MissingElement {
        component: c,
        selector: "body",
    })?;
    let root = ctx
        .document
        .document_element()
        .ok_or(InitError::MissingElement {
            component: c,
            selector: "html",
        })?;
    let targets: Vec<Element> = dom::query_all(&ctx.document, c, ctx.selectors.hover_targets)?;

    let el: HtmlElement = dom::create(&ctx.document, c, "div")?;
    dom::apply_class(&el, ClassChange::add(class::CUSTOM_CURSOR));
    body.append_child(&el).map_err(|e| InitError::js(c, &e))?;
    // Injected last so a failed attach leaves nothing behind.
    let style = match dom::inject_style(&ctx.document, c, CURSOR_CSS) {
        Ok(style) => style,
        Err(e) => {
            el.remove();
            return Err(e);
        }
    };
    let cursor = Rc::new(Cursor {
        el,
        state: RefCell::new(CursorState::default()),
    });

    let mut attached = Attached::new(targets.len() + 1);
    {
        let cursor = Rc::clone(&cursor);
        attached.listen(EventListener::new(&ctx.document, "mousemove", move |event| {
            let Some(at) = dom::client_point(event) else {
                return;
            };
            let (styles, shown) = cursor.state.borrow_mut().moved(at);
            dom::apply_styles(&cursor.el, &styles);
            cursor.apply(shown);
        }));
    }
    {
        let cursor = Rc::clone(&cursor);
        attached.listen(EventListener::new(&root, "mouseleave", move |_| {
            let change = cursor.state.borrow_mut().left_document();
            cursor.apply(change);
        }));
    }
    for target in &targets {
        for (event, hover) in [("mouseenter", true), ("mouseleave", false)] {
            let cursor = Rc::clone(&cursor);
            attached.listen(EventListener::new(target, event, move |_| {
                let change = cursor.state.borrow_mut().set_hover(hover);
                cursor.apply(change);
            }));
        }
    }
    attached.on_dispose(move || {
        cursor.el.remove();
        style.remove();
    });
    Ok(attached)
}
