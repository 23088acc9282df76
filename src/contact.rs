use std::rc::Rc;

use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::{SUBMIT_DELAY_MS, TOAST_DURATION_MS};

/// Deliberately permissive: one or more non-whitespace/non-`@` characters,
/// `@`, same again, a dot, same again. Matches the shipped behavior, which
/// accepts addresses a stricter validator would not.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(|c| c.is_whitespace()) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain
                    .match_indices('.')
                    .any(|(i, _)| i > 0 && i + 1 < domain.len())
        }
        _ => false,
    }
}

pub fn name_error(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some("Please enter your name.")
    } else {
        None
    }
}

pub fn email_error(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some("Please enter your email.")
    } else if !is_valid_email(value) {
        Some("Please enter a valid email address.")
    } else {
        None
    }
}

pub fn message_error(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some("Please enter a message.")
    } else {
        None
    }
}

#[derive(Clone, Default, PartialEq, Debug)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_clean(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

pub fn validate_all(name: &str, email: &str, message: &str) -> FieldErrors {
    FieldErrors {
        name: name_error(name),
        email: email_error(email),
        message: message_error(message),
    }
}

/// What crosses the submission boundary once validation passes. The real
/// transport is out of scope; sending is simulated with a fixed delay.
#[derive(Serialize)]
struct ContactPayload {
    name: String,
    email: String,
    message: String,
}

/// The whole form as one state machine, so the submit flow (validate, send,
/// toast, clear) is plain data transitions the component only schedules.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct FormModel {
    pub name: String,
    pub email: String,
    pub message: String,
    pub errors: FieldErrors,
    pub sending: bool,
    pub sent: bool,
}

pub enum FormAction {
    EditName(String),
    EditEmail(String),
    EditMessage(String),
    BlurName,
    BlurEmail,
    BlurMessage,
    Submit,
    SendComplete,
    DismissToast,
}

impl Reducible for FormModel {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: FormAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::EditName(value) => next.name = value,
            FormAction::EditEmail(value) => next.email = value,
            FormAction::EditMessage(value) => next.message = value,
            FormAction::BlurName => next.errors.name = name_error(&next.name),
            FormAction::BlurEmail => next.errors.email = email_error(&next.email),
            FormAction::BlurMessage => next.errors.message = message_error(&next.message),
            FormAction::Submit => {
                if !next.sending {
                    let found = validate_all(&next.name, &next.email, &next.message);
                    if found.is_clean() {
                        next.errors = FieldErrors::default();
                        next.sending = true;
                    } else {
                        next.errors = found;
                    }
                }
            }
            FormAction::SendComplete => {
                next.sending = false;
                next.sent = true;
                next.name.clear();
                next.email.clear();
                next.message.clear();
            }
            FormAction::DismissToast => next.sent = false,
        }
        Rc::new(next)
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form = use_reducer(FormModel::default);

    let on_name_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::EditName(input.value()));
        })
    };
    let on_email_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::EditEmail(input.value()));
        })
    };
    let on_message_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(FormAction::EditMessage(input.value()));
        })
    };

    let on_name_blur = {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| form.dispatch(FormAction::BlurName))
    };
    let on_email_blur = {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| form.dispatch(FormAction::BlurEmail))
    };
    let on_message_blur = {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| form.dispatch(FormAction::BlurMessage))
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.sending {
                return;
            }
            let accepted = validate_all(&form.name, &form.email, &form.message).is_clean();
            let payload = ContactPayload {
                name: form.name.clone(),
                email: form.email.clone(),
                message: form.message.clone(),
            };
            form.dispatch(FormAction::Submit);
            if accepted {
                let form = form.clone();
                spawn_local(async move {
                    TimeoutFuture::new(SUBMIT_DELAY_MS).await;
                    if let Ok(body) = serde_json::to_string(&payload) {
                        log!("contact submission (stubbed transport):", body);
                    }
                    form.dispatch(FormAction::SendComplete);
                    TimeoutFuture::new(TOAST_DURATION_MS).await;
                    form.dispatch(FormAction::DismissToast);
                });
            }
        })
    };

    let field_error = |error: Option<&'static str>| -> Html {
        match error {
            Some(text) => html! { <span class="field-error-text">{text}</span> },
            None => html! {},
        }
    };

    html! {
        <>
            <style>
                {r#"
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    max-width: 520px;
                    margin: 0 auto;
                    text-align: left;
                }
                .form-input, .form-textarea {
                    width: 100%;
                    padding: 0.85rem 1rem;
                    border: 1px solid var(--border-color);
                    border-radius: 8px;
                    background: var(--surface-color);
                    color: var(--text-color);
                    font-size: 1rem;
                    transition: border-color 0.2s ease;
                }
                .form-input:focus, .form-textarea:focus {
                    outline: none;
                    border-color: var(--accent-color);
                }
                .form-input.field-error, .form-textarea.field-error {
                    border-color: #e74c3c;
                }
                .field-error-text {
                    color: #e74c3c;
                    font-size: 0.85rem;
                }
                .form-textarea {
                    min-height: 140px;
                    resize: vertical;
                }
                .submit-button {
                    padding: 0.9rem 2rem;
                    border: none;
                    border-radius: 8px;
                    background: var(--accent-color);
                    color: #fff;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: opacity 0.2s ease;
                }
                .submit-button:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }
                .form-toast {
                    position: fixed;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: #2ecc71;
                    color: #fff;
                    padding: 0.9rem 1.5rem;
                    border-radius: 8px;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.2);
                    animation: toastIn 0.3s ease-out;
                    z-index: 130;
                }
                "#}
            </style>
            <form class="contact-form" novalidate=true {onsubmit}>
                <div class="form-field">
                    <input
                        class={classes!("form-input", form.errors.name.map(|_| "field-error"))}
                        type="text"
                        name="name"
                        placeholder="Your name"
                        value={form.name.clone()}
                        oninput={on_name_input}
                        onblur={on_name_blur}
                    />
                    { field_error(form.errors.name) }
                </div>
                <div class="form-field">
                    <input
                        class={classes!("form-input", form.errors.email.map(|_| "field-error"))}
                        type="email"
                        name="email"
                        placeholder="Your email"
                        value={form.email.clone()}
                        oninput={on_email_input}
                        onblur={on_email_blur}
                    />
                    { field_error(form.errors.email) }
                </div>
                <div class="form-field">
                    <textarea
                        class={classes!("form-textarea", form.errors.message.map(|_| "field-error"))}
                        name="message"
                        placeholder="Your message"
                        value={form.message.clone()}
                        oninput={on_message_input}
                        onblur={on_message_blur}
                    />
                    { field_error(form.errors.message) }
                </div>
                <button type="submit" class="submit-button" disabled={form.sending}>
                    { if form.sending { "Sending..." } else { "Send Message" } }
                </button>
            </form>
            {
                if form.sent {
                    html! {
                        <div class="form-toast" role="status">
                            {"Thank you for your message! We'll get back to you soon."}
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn email_pattern_matches_shipped_behavior() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn email_pattern_stays_permissive() {
        // These would fail a strict validator but pass the shipped one.
        assert!(is_valid_email("a@b.c.d"));
        assert!(is_valid_email("!#$%@--.--"));
    }

    #[test]
    fn email_pattern_edge_cases() {
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@co."));
        assert!(!is_valid_email("a@b.co "));
    }

    #[test]
    fn empty_name_yields_only_a_name_error() {
        let errors = validate_all("", "a@b.co", "hello");
        assert_eq!(errors.name, Some("Please enter your name."));
        assert_eq!(errors.email, None);
        assert_eq!(errors.message, None);
        assert!(!errors.is_clean());
    }

    #[test]
    fn whitespace_only_fields_are_rejected() {
        let errors = validate_all("   ", "a@b.co", "\t\n");
        assert!(errors.name.is_some());
        assert!(errors.message.is_some());
    }

    #[test]
    fn fully_valid_form_is_clean() {
        assert!(validate_all("Ada", "ada@example.org", "hi there").is_clean());
    }

    #[test]
    fn invalid_email_reports_the_format_message() {
        let errors = validate_all("Ada", "ada@example", "hi");
        assert_eq!(errors.email, Some("Please enter a valid email address."));
    }

    fn filled(name: &str, email: &str, message: &str) -> Rc<FormModel> {
        Rc::new(FormModel {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            ..FormModel::default()
        })
    }

    #[test]
    fn valid_submission_shows_toast_and_clears_the_form() {
        let model = filled("Ada", "a@b.co", "hello").reduce(FormAction::Submit);
        assert!(model.sending);
        assert!(model.errors.is_clean());

        let model = model.reduce(FormAction::SendComplete);
        assert!(!model.sending);
        assert!(model.sent, "success toast must be visible after the send");
        assert_eq!(model.name, "");
        assert_eq!(model.email, "");
        assert_eq!(model.message, "");

        let model = model.reduce(FormAction::DismissToast);
        assert!(!model.sent);
    }

    #[test]
    fn submitting_with_empty_name_marks_the_field_and_never_sends() {
        let model = filled("", "a@b.co", "hello").reduce(FormAction::Submit);
        assert_eq!(model.errors.name, Some("Please enter your name."));
        assert!(!model.sending);
        assert!(!model.sent);
        assert_eq!(model.email, "a@b.co", "failed submit keeps the input");
    }

    #[test]
    fn submit_while_sending_is_ignored() {
        let model = filled("Ada", "a@b.co", "hello").reduce(FormAction::Submit);
        let again = model.clone().reduce(FormAction::Submit);
        assert_eq!(*again, *model);
    }

    #[test]
    fn blur_validates_only_its_own_field() {
        let model = filled("", "", "")
            .reduce(FormAction::EditEmail("a@b".into()))
            .reduce(FormAction::BlurEmail);
        assert_eq!(model.errors.email, Some("Please enter a valid email address."));
        assert_eq!(model.errors.name, None);
        assert_eq!(model.errors.message, None);
    }
}
