// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: the portfolio page from `index.html`, wired up by `folio_web`.
//!
//! Build with: `wasm-pack build --target web demos/portfolio_page`
//!
//! Then serve `demos/portfolio_page/` and open `index.html` in a browser.

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

use wasm_bindgen::prelude::*;

/// Entry point — called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let page = folio_web::start()?;

    // Keep every listener alive — the page never tears itself down.
    core::mem::forget(page);

    Ok(())
}
