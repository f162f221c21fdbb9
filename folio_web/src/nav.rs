// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation bindings: mobile menu, navbar elevation, scroll-spy and
//! anchor scrolling.

use alloc::format;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use folio_core::nav::{
    MenuState, MenuView, NavbarElevation, ScrollSpy, SectionBounds, anchor_id, anchor_scroll_top,
};
use folio_core::style::{ClassChange, class};
use folio_core::trace::{Component, SectionActivatedEvent};
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::dom;
use crate::error::InitError;
use crate::now;
use crate::page::{Attached, PageContext, SharedSink, emit};
use crate::rate_limit::debounce;

struct MenuDom {
    menu: Element,
    icon: Element,
}

impl MenuDom {
    fn render(&self, view: MenuView) {
        dom::apply_class(&self.menu, view.menu_class());
        for change in view.icon.class_changes() {
            dom::apply_class(&self.icon, change);
        }
    }
}

pub(crate) fn attach_mobile_menu(ctx: &PageContext) -> Result<Attached, InitError> {
    let c = Component::MobileMenu;
    let sel = &ctx.selectors;
    let toggle = dom::query(&ctx.document, c, sel.nav_toggle)?;
    let icon = dom::query(&toggle, c, sel.nav_toggle_icon)?;
    let menu = dom::query(&ctx.document, c, sel.nav_menu)?;
    let links: Vec<Element> = dom::query_all(&ctx.document, c, sel.nav_links)?;

    let state = Rc::new(RefCell::new(MenuState::default()));
    let view = Rc::new(MenuDom { menu, icon });

    let mut attached = Attached::new(links.len() + 1);
    {
        let state = Rc::clone(&state);
        let view = Rc::clone(&view);
        attached.listen(EventListener::new(&toggle, "click", move |_| {
            let next = state.borrow_mut().toggle();
            view.render(next);
        }));
    }
    for link in &links {
        let state = Rc::clone(&state);
        let view = Rc::clone(&view);
        attached.listen(EventListener::new(link, "click", move |_| {
            let next = state.borrow_mut().close();
            view.render(next);
        }));
    }
    Ok(attached)
}

pub(crate) fn attach_navbar_elevation(ctx: &PageContext) -> Result<Attached, InitError> {
    let c = Component::NavbarElevation;
    let navbar = dom::query(&ctx.document, c, ctx.selectors.navbar)?;
    let elevation = Rc::new(RefCell::new(NavbarElevation::new(&ctx.config.nav)));

    let update = {
        let window = ctx.window.clone();
        move || {
            let change = elevation.borrow_mut().update(dom::scroll_y(&window));
            if let Some(change) = change {
                dom::apply_class(&navbar, change);
            }
        }
    };
    // A page restored mid-scroll starts elevated.
    update();

    let mut attached = Attached::new(1);
    attached.listen(EventListener::new(&ctx.window, "scroll", move |_| update()));
    Ok(attached)
}

/// Scroll-spy state shared by the scroll and resize listeners.
struct Spy {
    window: Window,
    sections: Vec<HtmlElement>,
    /// Nav entry for each section, by index.
    section_links: Vec<Option<Element>>,
    links: Vec<Element>,
    spy: RefCell<ScrollSpy>,
    sink: SharedSink,
}

impl Spy {
    /// Section bounds as laid out right now.
    fn measure(&self) -> Vec<SectionBounds> {
        self.sections
            .iter()
            .map(|s| SectionBounds {
                top: f64::from(s.offset_top()),
                height: f64::from(s.offset_height()),
            })
            .collect()
    }

    fn refresh(&self) {
        let scroll_y = dom::scroll_y(&self.window);
        let bounds = self.measure();
        let change = self.spy.borrow_mut().update(&bounds, scroll_y);
        let Some(change) = change else {
            return;
        };
        for link in &self.links {
            dom::apply_class(link, ClassChange::remove(class::ACTIVE));
        }
        if let Some(Some(link)) = self.section_links.get(change.current) {
            dom::apply_class(link, ClassChange::add(class::ACTIVE));
        }
        emit(&self.sink, |t| {
            t.section_activated(&SectionActivatedEvent {
                index: change.current,
                previous: change.previous,
                scroll_y,
                at: now(),
            });
        });
    }
}

fn link_for(links: &[Element], section: &HtmlElement) -> Option<Element> {
    let id = section.id();
    if id.is_empty() {
        return None;
    }
    let href = format!("#{id}");
    links
        .iter()
        .find(|link| link.get_attribute("href").as_deref() == Some(href.as_str()))
        .cloned()
}

pub(crate) fn attach_scroll_spy(ctx: &PageContext) -> Result<Attached, InitError> {
    let c = Component::ScrollSpy;
    let sections: Vec<HtmlElement> = dom::query_all(&ctx.document, c, ctx.selectors.sections)?;
    let links: Vec<Element> = dom::query_all(&ctx.document, c, ctx.selectors.nav_links)?;
    let section_links = sections.iter().map(|s| link_for(&links, s)).collect();

    let spy = Rc::new(Spy {
        window: ctx.window.clone(),
        section_links,
        links,
        spy: RefCell::new(ScrollSpy::new(&ctx.config.nav)),
        sink: Rc::clone(&ctx.sink),
        sections,
    });
    spy.refresh();

    let mut attached = Attached::new(spy.sections.len());
    {
        let spy = Rc::clone(&spy);
        attached.listen(EventListener::new(&ctx.window, "scroll", move |_| {
            spy.refresh();
        }));
    }
    // A resize reflows the sections without necessarily scrolling.
    let settle = {
        let spy = Rc::clone(&spy);
        debounce(ctx.config.nav.resize_debounce, move |()| spy.refresh())
    };
    attached.listen(EventListener::new(&ctx.window, "resize", move |_| {
        settle.call(());
    }));
    Ok(attached)
}

fn scroll_to_anchor(window: &Window, document: &Document, id: &str, header_offset: f64) {
    let Some(target) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(anchor_scroll_top(f64::from(target.offset_top()), header_offset));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub(crate) fn attach_smooth_scroll(ctx: &PageContext) -> Result<Attached, InitError> {
    let c = Component::SmoothScroll;
    let links: Vec<Element> = dom::query_all(&ctx.document, c, ctx.selectors.nav_links)?;
    let header_offset = ctx.config.nav.header_offset;

    let mut attached = Attached::new(links.len());
    for link in &links {
        let window = ctx.window.clone();
        let document = ctx.document.clone();
        let href = link.get_attribute("href");
        attached.listen(EventListener::new_with_options(
            link,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                // Links leaving the page navigate normally.
                let Some(id) = href.as_deref().and_then(anchor_id) else {
                    return;
                };
                event.prevent_default();
                scroll_to_anchor(&window, &document, id, header_offset);
            },
        ));
    }
    Ok(attached)
}
