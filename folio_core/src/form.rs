// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contact form validation and the mock submit flow.
//!
//! Each field moves `Untouched → Valid | Invalid` the first time it is
//! evaluated (on blur or on submit) and is re-evaluated on every later blur
//! and submit. [`ContactForm::evaluate`] both records the new status and
//! returns the verdict, so the submit path aggregates without re-deriving
//! anything.
//!
//! A valid submission enters [`SubmitPhase::Sending`] for the configured
//! delay; completing it resets every field and yields the success notice. No
//! request is ever made.

use crate::config::FormConfig;
use crate::style::StyleDecl;
use crate::time::HostTime;
use crate::toast::ToastKind;

/// Label shown on the submit button while a submission is in flight.
pub const BUSY_LABEL: &str = r#"<i class="fas fa-spinner fa-spin"></i> Sending..."#;

/// One of the three form inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// Sender name.
    Name,
    /// Sender email address.
    Email,
    /// Message body.
    Message,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Position in [`Field::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Message => 2,
        }
    }

    /// Message shown under the field when its rule fails.
    #[must_use]
    pub const fn error_message(self) -> &'static str {
        match self {
            Self::Name => "Name must be at least 2 characters long",
            Self::Email => "Please enter a valid email address",
            Self::Message => "Message must be at least 10 characters long",
        }
    }

    /// Short lowercase name, for diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// Result of the most recent evaluation of a field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FieldStatus {
    /// Never evaluated since load or the last reset.
    #[default]
    Untouched,
    /// Passed its rule.
    Valid,
    /// Failed its rule.
    Invalid,
}

/// Border color of an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BorderTone {
    /// Default border.
    Neutral,
    /// Passed validation.
    Valid,
    /// Failed validation.
    Invalid,
}

impl BorderTone {
    /// CSS color for this tone.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Neutral => "#e5e7eb",
            Self::Valid => "#10b981",
            Self::Invalid => "#ef4444",
        }
    }
}

/// What an input and its error slot should look like.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldView {
    /// Which field.
    pub field: Field,
    /// Current status.
    pub status: FieldStatus,
    /// Text for the error slot; empty unless invalid.
    pub error_text: &'static str,
    /// Input border tone.
    pub border: BorderTone,
}

impl FieldView {
    /// Inline border declaration for the input.
    #[must_use]
    pub fn border_style(&self) -> StyleDecl {
        StyleDecl::new("border-color", self.border.color())
    }
}

/// Returns `true` for the characters a browser strips when trimming form
/// input and matches with `\s`: Unicode space separators, the ASCII controls
/// TAB, LF, VT, FF and CR, NBSP, the line and paragraph separators, and the
/// byte order mark.
///
/// This differs from [`char::is_whitespace`] in two places: U+FEFF counts,
/// U+0085 does not.
#[must_use]
pub const fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Strips leading and trailing [form whitespace](is_form_whitespace).
#[must_use]
pub fn trim_input(text: &str) -> &str {
    text.trim_matches(is_form_whitespace)
}

/// Length of `text` as a browser reports it: UTF-16 code units, so a
/// character outside the Basic Multilingual Plane counts twice.
#[must_use]
pub fn input_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Returns `true` if `text` has the `local@domain.tld` shape: a run of
/// non-whitespace, non-`@` characters, an `@`, another such run containing a
/// `.` that is neither its first nor its last character.
#[must_use]
pub fn is_email(text: &str) -> bool {
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    let plain =
        |s: &str| !s.is_empty() && !s.chars().any(|c| c == '@' || is_form_whitespace(c));
    if !plain(local) || !plain(domain) {
        return false;
    }
    // Any dot with at least one character on each side.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Checks `text` against `field`'s rule. Text is trimmed first with
/// [`trim_input`]; lengths are [`input_len`].
#[must_use]
pub fn check(field: Field, text: &str, config: &FormConfig) -> bool {
    let text = trim_input(text);
    match field {
        Field::Name => input_len(text) >= config.name_min_len,
        Field::Email => is_email(text),
        Field::Message => input_len(text) >= config.message_min_len,
    }
}

/// Current text of every field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormValues<'a> {
    /// Name input.
    pub name: &'a str,
    /// Email input.
    pub email: &'a str,
    /// Message textarea.
    pub message: &'a str,
}

impl<'a> FormValues<'a> {
    /// Returns the text of `field`.
    #[must_use]
    pub const fn get(&self, field: Field) -> &'a str {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }
}

/// A notification the form asks the toast to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Message text.
    pub message: &'static str,
    /// Styling.
    pub kind: ToastKind,
}

impl Notice {
    /// Shown when a submission completes.
    pub const SENT: Self = Self {
        message: "Message sent (mock).",
        kind: ToastKind::Success,
    };

    /// Shown when a submission is rejected.
    pub const REJECTED: Self = Self {
        message: "Please fix the errors above.",
        kind: ToastKind::Error,
    };
}

/// Whether a submission is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    /// Form is editable.
    #[default]
    Idle,
    /// Waiting out the simulated delay.
    Sending {
        /// When the submission completes.
        complete_at: HostTime,
    },
}

/// Result of a submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed. Show [`Notice::REJECTED`] now; the form
    /// stays editable.
    Rejected,
    /// Every field passed. Disable the button and call
    /// [`ContactForm::complete`] at `complete_at`.
    Sending {
        /// When the submission completes.
        complete_at: HostTime,
    },
    /// A submission is already in flight; nothing happened.
    Busy,
}

impl SubmitOutcome {
    /// Notice to show immediately, if any.
    #[must_use]
    pub const fn notice(&self) -> Option<Notice> {
        match self {
            Self::Rejected => Some(Notice::REJECTED),
            Self::Sending { .. } | Self::Busy => None,
        }
    }
}

/// What the submit button should look like.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitButtonView {
    /// `disabled` attribute.
    pub disabled: bool,
    /// Show [`BUSY_LABEL`] instead of the original label.
    pub busy: bool,
}

/// Contact form state.
#[derive(Clone, Debug)]
pub struct ContactForm {
    config: FormConfig,
    statuses: [FieldStatus; 3],
    phase: SubmitPhase,
}

impl ContactForm {
    /// Creates a form with every field untouched.
    #[must_use]
    pub const fn new(config: FormConfig) -> Self {
        Self {
            config,
            statuses: [FieldStatus::Untouched; 3],
            phase: SubmitPhase::Idle,
        }
    }

    /// Evaluates `field` against `text`, records the status and returns the
    /// verdict.
    pub fn evaluate(&mut self, field: Field, text: &str) -> bool {
        let valid = check(field, text, &self.config);
        self.statuses[field.index()] = if valid {
            FieldStatus::Valid
        } else {
            FieldStatus::Invalid
        };
        valid
    }

    /// Returns the recorded status of `field`.
    #[must_use]
    pub const fn status(&self, field: Field) -> FieldStatus {
        self.statuses[field.index()]
    }

    /// Returns how `field` should be displayed.
    #[must_use]
    pub const fn view(&self, field: Field) -> FieldView {
        let status = self.status(field);
        let (error_text, border) = match status {
            FieldStatus::Untouched => ("", BorderTone::Neutral),
            FieldStatus::Valid => ("", BorderTone::Valid),
            FieldStatus::Invalid => (field.error_message(), BorderTone::Invalid),
        };
        FieldView {
            field,
            status,
            error_text,
            border,
        }
    }

    /// Returns the submit phase.
    #[must_use]
    pub const fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Returns `true` while a submission is in flight.
    #[must_use]
    pub const fn is_sending(&self) -> bool {
        matches!(self.phase, SubmitPhase::Sending { .. })
    }

    /// Returns how the submit button should look.
    #[must_use]
    pub const fn button(&self) -> SubmitButtonView {
        let sending = self.is_sending();
        SubmitButtonView {
            disabled: sending,
            busy: sending,
        }
    }

    /// Handles a submit attempt at `now`.
    ///
    /// All three fields are evaluated (no short-circuit) so every error slot
    /// is updated.
    pub fn submit(&mut self, values: &FormValues<'_>, now: HostTime) -> SubmitOutcome {
        if self.is_sending() {
            return SubmitOutcome::Busy;
        }
        let mut all_valid = true;
        for field in Field::ALL {
            all_valid &= self.evaluate(field, values.get(field));
        }
        if !all_valid {
            return SubmitOutcome::Rejected;
        }
        let complete_at = now.saturating_add(self.config.submit_delay);
        self.phase = SubmitPhase::Sending { complete_at };
        SubmitOutcome::Sending { complete_at }
    }

    /// Finishes an in-flight submission: every field returns to untouched and
    /// the button is restored. Returns the success notice, or `None` if
    /// nothing was in flight.
    pub fn complete(&mut self) -> Option<Notice> {
        if !self.is_sending() {
            return None;
        }
        self.phase = SubmitPhase::Idle;
        self.statuses = [FieldStatus::Untouched; 3];
        Some(Notice::SENT)
    }

    /// Completes the in-flight submission if its delay has elapsed at `now`.
    pub fn poll(&mut self, now: HostTime) -> Option<Notice> {
        match self.phase {
            SubmitPhase::Sending { complete_at } if now >= complete_at => self.complete(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_values() -> FormValues<'static> {
        FormValues {
            name: "Ada",
            email: "ada@example.com",
            message: "Hello there, nice portfolio!",
        }
    }

    #[test]
    fn email_shapes() {
        assert!(is_email("a@b.co"));
        assert!(!is_email("not-an-email"));
        assert!(!is_email("a@b"), "needs a dot-suffix");
        assert!(!is_email("a@.co"), "dot cannot lead the domain");
        assert!(!is_email("a@b."), "dot cannot end the domain");
        assert!(!is_email("a b@c.de"), "no whitespace");
        assert!(!is_email("a@b@c.de"), "single @");
        assert!(!is_email("@b.co"));
        assert!(is_email("first.last@sub.example.org"));
        assert!(is_email("a@b..c"), "any inner dot counts");
    }

    #[test]
    fn length_rules_trim_and_count_code_units() {
        let config = FormConfig::portfolio();
        assert!(!check(Field::Name, "", &config));
        assert!(!check(Field::Name, " a ", &config), "trimmed before counting");
        assert!(check(Field::Name, "ab", &config));
        assert!(check(Field::Name, "Zoë", &config));
        assert!(!check(Field::Message, "123456789", &config));
        assert!(check(Field::Message, "1234567890", &config));
        assert!(!check(Field::Message, "   short    ", &config));
        assert!(check(Field::Email, "  a@b.co  ", &config), "email is trimmed too");
    }

    #[test]
    fn astral_characters_count_twice() {
        let config = FormConfig::portfolio();
        assert_eq!(input_len("😀"), 2, "surrogate pair");
        assert!(check(Field::Name, "😀", &config), "one emoji is two units");
        assert!(
            check(Field::Message, "😀😀😀😀😀", &config),
            "five emoji reach ten units"
        );
        assert!(!check(Field::Message, "😀😀😀😀", &config), "eight units");
    }

    #[test]
    fn trimming_follows_browser_whitespace() {
        let config = FormConfig::portfolio();
        assert_eq!(trim_input("\u{FEFF}a\u{3000}"), "a", "BOM and ideographic space");
        assert!(!check(Field::Name, "\u{FEFF}a", &config), "BOM is stripped");
        assert!(!check(Field::Name, "\u{00A0}a\u{00A0}", &config), "NBSP is stripped");
        assert_eq!(trim_input("\u{0085}a"), "\u{0085}a", "NEL is kept");
        assert!(check(Field::Name, "\u{0085}a", &config), "NEL counts");
        assert!(!is_email("a\u{FEFF}b@c.de"), "BOM inside breaks the shape");
    }

    #[test]
    fn below_minimum_fails_with_message() {
        let mut form = ContactForm::new(FormConfig::portfolio());
        for text in ["", "x"] {
            assert!(!form.evaluate(Field::Name, text));
            let view = form.view(Field::Name);
            assert_eq!(view.status, FieldStatus::Invalid);
            assert!(!view.error_text.is_empty(), "message for {text:?}");
            assert_eq!(view.border_style(), StyleDecl::new("border-color", "#ef4444"));
        }
        assert!(form.evaluate(Field::Name, "xy"));
        let view = form.view(Field::Name);
        assert_eq!(view.error_text, "", "message cleared");
        assert_eq!(view.border, BorderTone::Valid);
    }

    #[test]
    fn untouched_fields_show_nothing() {
        let form = ContactForm::new(FormConfig::portfolio());
        for field in Field::ALL {
            let view = form.view(field);
            assert_eq!(view.status, FieldStatus::Untouched);
            assert_eq!(view.error_text, "");
            assert_eq!(view.border, BorderTone::Neutral);
        }
    }

    #[test]
    fn invalid_submit_rejects_without_disabling() {
        let mut form = ContactForm::new(FormConfig::portfolio());
        let values = FormValues {
            email: "nope",
            ..valid_values()
        };
        let outcome = form.submit(&values, HostTime(0));
        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(outcome.notice(), Some(Notice::REJECTED));
        assert!(!form.button().disabled);
        assert_eq!(form.status(Field::Name), FieldStatus::Valid, "all fields evaluated");
        assert_eq!(form.status(Field::Email), FieldStatus::Invalid);
        assert_eq!(form.status(Field::Message), FieldStatus::Valid);
    }

    #[test]
    fn valid_submit_sends_then_resets() {
        let mut form = ContactForm::new(FormConfig::portfolio());
        let outcome = form.submit(&valid_values(), HostTime(1000));
        assert_eq!(
            outcome,
            SubmitOutcome::Sending {
                complete_at: HostTime(2500)
            }
        );
        assert_eq!(outcome.notice(), None);
        assert_eq!(
            form.button(),
            SubmitButtonView {
                disabled: true,
                busy: true
            }
        );
        assert_eq!(form.submit(&valid_values(), HostTime(1200)), SubmitOutcome::Busy);

        assert_eq!(form.poll(HostTime(2499)), None);
        assert_eq!(form.poll(HostTime(2500)), Some(Notice::SENT));
        assert!(!form.button().disabled, "button restored");
        for field in Field::ALL {
            assert_eq!(form.status(field), FieldStatus::Untouched, "{field:?} reset");
        }
        assert_eq!(form.complete(), None, "completes once");
    }
}
