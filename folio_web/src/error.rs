// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use core::fmt;

use folio_core::trace::Component;
use wasm_bindgen::JsValue;

/// Why a page component was not attached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InitError {
    /// A required element was not found.
    MissingElement {
        /// The component that needed it.
        component: Component,
        /// The selector that matched nothing.
        selector: &'static str,
    },
    /// A DOM call failed while attaching.
    Js {
        /// The component being attached.
        component: Component,
        /// The JS error, stringified.
        message: String,
    },
}

impl InitError {
    /// Returns the component that failed.
    #[must_use]
    pub fn component(&self) -> Component {
        match self {
            Self::MissingElement { component, .. } | Self::Js { component, .. } => *component,
        }
    }

    pub(crate) fn js(component: Component, err: &JsValue) -> Self {
        let message = err.as_string().unwrap_or_else(|| format!("{err:?}"));
        Self::Js { component, message }
    }
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingElement {
                component,
                selector,
            } => write!(f, "{}: no element matches `{selector}`", component.name()),
            Self::Js { component, message } => {
                write!(f, "{}: DOM call failed ({message})", component.name())
            }
        }
    }
}

impl core::error::Error for InitError {}
