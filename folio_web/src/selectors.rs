// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use folio_core::form::Field;

/// CSS selectors for every element the runtime binds to.
///
/// Single-element selectors are resolved with `querySelector`; list
/// selectors with `querySelectorAll` and may legitimately match nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selectors {
    /// Navigation bar.
    pub navbar: &'static str,
    /// Mobile menu toggle.
    pub nav_toggle: &'static str,
    /// Icon inside the toggle, resolved relative to it.
    pub nav_toggle_icon: &'static str,
    /// Collapsible menu.
    pub nav_menu: &'static str,
    /// Menu links (list).
    pub nav_links: &'static str,
    /// Page sections (list).
    pub sections: &'static str,
    /// Cards faded in by the generic reveal (list).
    pub reveal_cards: &'static str,
    /// Timeline entries (list).
    pub timeline_items: &'static str,
    /// Elements revealed by the scroll check (list).
    pub data_animate: &'static str,
    /// Contact form.
    pub contact_form: &'static str,
    /// Name input.
    pub name_input: &'static str,
    /// Email input.
    pub email_input: &'static str,
    /// Message input.
    pub message_input: &'static str,
    /// Name error slot.
    pub name_error: &'static str,
    /// Email error slot.
    pub email_error: &'static str,
    /// Message error slot.
    pub message_error: &'static str,
    /// Submit button, resolved relative to the form.
    pub submit_button: &'static str,
    /// Toast banner.
    pub toast: &'static str,
    /// Toast text, resolved relative to the document.
    pub toast_message: &'static str,
    /// Hero title.
    pub hero_title: &'static str,
    /// Buttons with a ripple (list).
    pub buttons: &'static str,
    /// Tilting project cards (list).
    pub project_cards: &'static str,
    /// Lifting skill tags (list).
    pub skill_tags: &'static str,
    /// Elements that put the custom cursor in its hover state (list).
    pub hover_targets: &'static str,
}

impl Selectors {
    /// Selectors for the portfolio page markup.
    #[must_use]
    pub const fn portfolio() -> Self {
        Self {
            navbar: "#navbar",
            nav_toggle: "#nav-toggle",
            nav_toggle_icon: "i",
            nav_menu: ".nav-menu",
            nav_links: ".nav-link",
            sections: "section",
            reveal_cards: ".stat-item, .skill-category, .timeline-item, .project-card, .education-card",
            timeline_items: ".timeline-item",
            data_animate: "[data-animate]",
            contact_form: "#contactForm",
            name_input: "#name",
            email_input: "#email",
            message_input: "#message",
            name_error: "#nameError",
            email_error: "#emailError",
            message_error: "#messageError",
            submit_button: r#"button[type="submit"]"#,
            toast: "#toast",
            toast_message: "#toastMessage",
            hero_title: ".hero-title",
            buttons: ".btn",
            project_cards: ".project-card",
            skill_tags: ".skill-tag",
            hover_targets: "a, button, .project-card, .skill-tag",
        }
    }

    /// Input selector for `field`.
    #[must_use]
    pub const fn input(&self, field: Field) -> &'static str {
        match field {
            Field::Name => self.name_input,
            Field::Email => self.email_input,
            Field::Message => self.message_input,
        }
    }

    /// Error slot selector for `field`.
    #[must_use]
    pub const fn error(&self, field: Field) -> &'static str {
        match field {
            Field::Name => self.name_error,
            Field::Email => self.email_error,
            Field::Message => self.message_error,
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self::portfolio()
    }
}
