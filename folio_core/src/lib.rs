// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation state machines for the folio portfolio page runtime.
//!
//! `folio_core` holds every decision the page runtime makes, with no DOM
//! dependency. It is `no_std` compatible (with `alloc`) so the same logic runs
//! in the browser and in native tests driven by a virtual clock.
//!
//! # Architecture
//!
//! Each page feature is split into a pure *compute* step that lives here and
//! a thin *apply* step that lives in a backend crate (`folio_web`):
//!
//! ```text
//!   Browser event / timer expiry
//!       │
//!       ▼
//!   backend reads geometry, text, HostTime
//!       │
//!       ▼
//!   folio_core state machine ──► view / style declarations
//!                                       │
//!                 ┌─────────────────────┘
//!                 ▼
//!   backend applies classes and inline styles, arms timers
//! ```
//!
//! **[`rate_limit`]** — [`Debounce`](rate_limit::Debounce) and
//! [`Throttle`](rate_limit::Throttle) as explicit state machines.
//!
//! **[`reveal`]** — One-shot viewport reveal tracking and intersection
//! geometry.
//!
//! **[`nav`]** — Mobile menu, scroll-spy, navbar elevation and anchor scroll
//! targets.
//!
//! **[`form`]** / **[`toast`]** — Contact form validation, the mock submit
//! flow, and the singleton notification.
//!
//! **[`effects`]** — Hero typing, button ripple, card tilt and custom cursor.
//!
//! **[`timer`]** — [`TimerQueue`](timer::TimerQueue), a deterministic virtual
//! clock for tests and native simulation.
//!
//! **[`config`]** — Tunable constants grouped per component.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types with
//! a zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod config;
pub mod effects;
pub mod form;
pub mod nav;
pub mod rate_limit;
pub mod reveal;
pub mod style;
pub mod time;
pub mod timer;
pub mod toast;
pub mod trace;
