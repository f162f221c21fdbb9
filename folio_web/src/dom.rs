// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thin DOM helpers shared by the component binders.

use alloc::vec::Vec;

use folio_core::style::{ClassChange, StyleDecl};
use folio_core::trace::Component;
use kurbo::{Point, Rect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent, NodeList, Window};

use crate::error::InitError;

/// Something selectors can be resolved against.
pub(crate) trait QueryRoot {
    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue>;
    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue>;
}

impl QueryRoot for Document {
    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

impl QueryRoot for Element {
    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

/// Resolves a required element under `root`.
pub(crate) fn query(
    root: &impl QueryRoot,
    component: Component,
    selector: &'static str,
) -> Result<Element, InitError> {
    root.select(selector)
        .map_err(|e| InitError::js(component, &e))?
        .ok_or(InitError::MissingElement {
            component,
            selector,
        })
}

/// Resolves a required element under `root` and narrows it to `T`.
pub(crate) fn query_as<T: JsCast>(
    root: &impl QueryRoot,
    component: Component,
    selector: &'static str,
) -> Result<T, InitError> {
    query(root, component, selector)?
        .dyn_into::<T>()
        .map_err(|_| InitError::MissingElement {
            component,
            selector,
        })
}

/// Resolves every element matching `selector`, in document order.
///
/// Matches that are not `T` are skipped.
pub(crate) fn query_all<T: JsCast>(
    root: &impl QueryRoot,
    component: Component,
    selector: &'static str,
) -> Result<Vec<T>, InitError> {
    let list = root
        .select_all(selector)
        .map_err(|e| InitError::js(component, &e))?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

/// Creates an element and narrows it to `T`.
pub(crate) fn create<T: JsCast>(
    document: &Document,
    component: Component,
    tag: &str,
) -> Result<T, InitError> {
    document
        .create_element(tag)
        .map_err(|e| InitError::js(component, &e))?
        .dyn_into::<T>()
        .map_err(|e| InitError::js(component, e.as_ref()))
}

/// Appends a `<style>` element with `css` to the document head.
pub(crate) fn inject_style(
    document: &Document,
    component: Component,
    css: &str,
) -> Result<Element, InitError> {
    let head = document.head().ok_or(InitError::MissingElement {
        component,
        selector: "head",
    })?;
    let style: Element = create(document, component, "style")?;
    style.set_text_content(Some(css));
    head.append_child(&style)
        .map_err(|e| InitError::js(component, &e))?;
    Ok(style)
}

pub(crate) fn apply_styles(el: &HtmlElement, styles: &[StyleDecl]) {
    let style = el.style();
    for decl in styles {
        let _ = style.set_property(decl.property, &decl.value);
    }
}

pub(crate) fn apply_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

pub(crate) fn apply_class(el: &Element, change: ClassChange) {
    let list = el.class_list();
    let _ = if change.present {
        list.add_1(change.class)
    } else {
        list.remove_1(change.class)
    };
}

/// Bounding client rectangle as a [`Rect`].
pub(crate) fn client_rect(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.right(), r.bottom())
}

/// Pointer position in client coordinates, if `event` is a mouse event.
pub(crate) fn client_point(event: &Event) -> Option<Point> {
    event
        .dyn_ref::<MouseEvent>()
        .map(|m| Point::new(f64::from(m.client_x()), f64::from(m.client_y())))
}

pub(crate) fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub(crate) fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}
