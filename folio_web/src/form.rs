// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contact form and toast bindings.

use alloc::rc::{Rc, Weak};
use alloc::string::String;
use core::cell::RefCell;

use folio_core::form::{BUSY_LABEL, ContactForm, Field, FormValues, Notice, SubmitOutcome};
use folio_core::toast::Toast;
use folio_core::trace::{Component, FieldValidatedEvent, SubmitEvent, SubmitStage, ToastEvent};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
};

use crate::dom;
use crate::error::InitError;
use crate::now;
use crate::page::{Attached, PageContext, SharedSink, emit};

/// A text control the form reads from.
enum TextControl {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl TextControl {
    fn resolve(ctx: &PageContext, selector: &'static str) -> Result<Self, InitError> {
        let c = Component::ContactForm;
        let el = dom::query(&ctx.document, c, selector)?;
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            return Ok(Self::Input(input.clone()));
        }
        el.dyn_into::<HtmlTextAreaElement>()
            .map(Self::TextArea)
            .map_err(|_| InitError::MissingElement {
                component: c,
                selector,
            })
    }

    fn value(&self) -> String {
        match self {
            Self::Input(el) => el.value(),
            Self::TextArea(el) => el.value(),
        }
    }

    fn element(&self) -> &HtmlElement {
        match self {
            Self::Input(el) => el,
            Self::TextArea(el) => el,
        }
    }
}

struct FormDom {
    form: HtmlFormElement,
    /// Indexed like [`Field::ALL`].
    controls: [TextControl; 3],
    errors: [Element; 3],
    button: HtmlButtonElement,
    /// Markup of the button before the first submit.
    label: String,
    toast: HtmlElement,
    toast_message: Element,
}

struct FormState {
    form: ContactForm,
    toast: Toast,
    submit_timer: Option<Timeout>,
    hide_timer: Option<Timeout>,
}

struct ContactShared {
    dom: FormDom,
    state: RefCell<FormState>,
    sink: SharedSink,
}

impl ContactShared {
    fn render_field(&self, field: Field) {
        let view = self.state.borrow().form.view(field);
        let i = field.index();
        self.dom.errors[i].set_text_content(Some(view.error_text));
        let border = view.border_style();
        dom::apply_style(self.dom.controls[i].element(), border.property, &border.value);
    }

    fn render_button(&self) {
        let view = self.state.borrow().form.button();
        self.dom.button.set_disabled(view.disabled);
        let label = if view.busy {
            BUSY_LABEL
        } else {
            self.dom.label.as_str()
        };
        self.dom.button.set_inner_html(label);
    }

    fn validate(&self, field: Field) {
        let text = self.dom.controls[field.index()].value();
        let valid = self.state.borrow_mut().form.evaluate(field, &text);
        self.render_field(field);
        emit(&self.sink, |t| {
            t.field_validated(&FieldValidatedEvent {
                field,
                valid,
                at: now(),
            });
        });
    }

    fn submit(self: &Rc<Self>) {
        let [name, email, message] = self.dom.controls.each_ref().map(TextControl::value);
        let values = FormValues {
            name: &name,
            email: &email,
            message: &message,
        };
        let at = now();
        let outcome = self.state.borrow_mut().form.submit(&values, at);
        emit(&self.sink, |t| {
            t.submit(&SubmitEvent {
                stage: outcome.into(),
                at,
            });
        });
        match outcome {
            SubmitOutcome::Busy => return,
            SubmitOutcome::Rejected => {}
            SubmitOutcome::Sending { complete_at } => {
                let weak: Weak<Self> = Rc::downgrade(self);
                let delay = complete_at.saturating_duration_since(at);
                let timer = Timeout::new(delay.as_timer_millis(), move || {
                    if let Some(shared) = weak.upgrade() {
                        shared.complete();
                    }
                });
                self.state.borrow_mut().submit_timer = Some(timer);
            }
        }
        for field in Field::ALL {
            self.render_field(field);
        }
        self.render_button();
        if let Some(notice) = outcome.notice() {
            self.show_toast(notice);
        }
    }

    fn complete(self: &Rc<Self>) {
        let notice = {
            let mut state = self.state.borrow_mut();
            state.submit_timer = None;
            state.form.complete()
        };
        let Some(notice) = notice else {
            return;
        };
        self.dom.form.reset();
        for field in Field::ALL {
            self.render_field(field);
        }
        self.render_button();
        emit(&self.sink, |t| {
            t.submit(&SubmitEvent {
                stage: SubmitStage::Completed,
                at: now(),
            });
        });
        self.show_toast(notice);
    }

    fn show_toast(self: &Rc<Self>, notice: Notice) {
        let at = now();
        let (hide_at, lifetime) = {
            let mut state = self.state.borrow_mut();
            let hide_at = state.toast.show(notice.message, notice.kind, at);
            (hide_at, hide_at.saturating_duration_since(at))
        };
        {
            let state = self.state.borrow();
            let view = state.toast.view();
            self.dom.toast_message.set_text_content(Some(view.message));
            let background = view.background();
            dom::apply_style(&self.dom.toast, background.property, &background.value);
            dom::apply_class(&self.dom.toast, view.show_class());
        }

        let weak: Weak<Self> = Rc::downgrade(self);
        let timer = Timeout::new(lifetime.as_timer_millis(), move || {
            if let Some(shared) = weak.upgrade() {
                shared.hide_toast();
            }
        });
        // Replacing the previous hide timer cancels it.
        self.state.borrow_mut().hide_timer = Some(timer);

        emit(&self.sink, |t| {
            t.toast(&ToastEvent {
                kind: notice.kind,
                hide_at,
                at,
            });
        });
    }

    fn hide_toast(&self) {
        let mut state = self.state.borrow_mut();
        state.hide_timer = None;
        state.toast.hide();
        dom::apply_class(&self.dom.toast, state.toast.view().show_class());
    }
}

pub(crate) fn attach_contact_form(ctx: &PageContext) -> Result<Attached, InitError> {
    let c = Component::ContactForm;
    let sel = &ctx.selectors;
    let form: HtmlFormElement = dom::query_as(&ctx.document, c, sel.contact_form)?;
    let controls = [
        TextControl::resolve(ctx, sel.input(Field::Name))?,
        TextControl::resolve(ctx, sel.input(Field::Email))?,
        TextControl::resolve(ctx, sel.input(Field::Message))?,
    ];
    let errors = [
        dom::query(&ctx.document, c, sel.error(Field::Name))?,
        dom::query(&ctx.document, c, sel.error(Field::Email))?,
        dom::query(&ctx.document, c, sel.error(Field::Message))?,
    ];
    let form_root: &Element = &form;
    let button: HtmlButtonElement = dom::query_as(form_root, c, sel.submit_button)?;
    let toast: HtmlElement = dom::query_as(&ctx.document, c, sel.toast)?;
    let toast_message = dom::query(&ctx.document, c, sel.toast_message)?;
    let label = button.inner_html();

    let config = ctx.config.form;
    let shared = Rc::new(ContactShared {
        dom: FormDom {
            form,
            controls,
            errors,
            button,
            label,
            toast,
            toast_message,
        },
        state: RefCell::new(FormState {
            form: ContactForm::new(config),
            toast: Toast::new(config.toast_lifetime),
            submit_timer: None,
            hide_timer: None,
        }),
        sink: Rc::clone(&ctx.sink),
    });

    let mut attached = Attached::new(Field::ALL.len() + 1);
    for field in Field::ALL {
        let target = shared.dom.controls[field.index()].element().clone();
        let shared = Rc::clone(&shared);
        attached.listen(EventListener::new(&target, "blur", move |_| {
            shared.validate(field);
        }));
    }
    {
        let target = shared.dom.form.clone();
        let shared = Rc::clone(&shared);
        attached.listen(EventListener::new_with_options(
            &target,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                shared.submit();
            },
        ));
    }
    attached.on_dispose(move || {
        let mut state = shared.state.borrow_mut();
        state.submit_timer = None;
        state.hide_timer = None;
    });
    Ok(attached)
}
