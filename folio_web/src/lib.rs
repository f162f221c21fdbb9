// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for folio.
//!
//! This crate binds the `folio_core` state machines to a live document:
//!
//! - [`init`] / [`Page`]: attach every page component and detach them again
//! - [`debounce`] / [`throttle`]: rate-limited callbacks on browser timers
//! - [`ConsoleSink`]: trace events to the browser console
//! - [`Selectors`]: the ids and classes the runtime binds to
//!
//! Every component is attached independently. A component whose elements are
//! missing is skipped and reported through [`Page::failures`]; the rest of the
//! page keeps working.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;
// `gloo::console` macros expand to `::std` paths.
extern crate std;

mod console;
mod dom;
mod effects;
mod error;
mod form;
mod nav;
mod page;
mod rate_limit;
mod reveal;
mod selectors;

pub use console::ConsoleSink;
pub use error::InitError;
pub use page::{Page, SharedSink, init, start};
pub use rate_limit::{Debounced, Throttled, debounce, throttle};
pub use selectors::Selectors;

use folio_core::time::HostTime;
use wasm_bindgen::prelude::*;

// Direct global binding instead of `web_sys::Window::performance` — avoids
// fetching (and unwrapping) the Window/Performance objects on every event.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    fn performance_now() -> f64;
}

/// Returns the current host time from `performance.now()`, in whole
/// milliseconds.
#[must_use]
pub fn now() -> HostTime {
    HostTime::from_millis_f64(performance_now())
}
