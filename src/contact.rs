use std::sync::LazyLock;

use async_trait::async_trait;
use dioxus::prelude::*;
use regex::Regex;
use thiserror::Error;

use crate::config::PortfolioConfig;
use crate::i18n::{text, Locale, UiKey};
use crate::page::{GlassCard, Section, SocialLinks};
use crate::profile::profile;

pub const NAME_MAX_CHARS: usize = 80;
pub const EMAIL_MAX_CHARS: usize = 120;
pub const MESSAGE_MAX_CHARS: usize = 2000;
#[cfg(target_arch = "wasm32")]
const SUBMIT_TIMEOUT_MS: u32 = 15_000;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$")
        .expect("email regex should compile")
});

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("name cannot be empty")]
    MissingName,
    #[error("name too long (max {} chars)", NAME_MAX_CHARS)]
    NameTooLong,
    #[error("invalid email format")]
    InvalidEmail,
    #[error("message cannot be empty")]
    MissingMessage,
    #[error("message too long (max {} chars)", MESSAGE_MAX_CHARS)]
    MessageTooLong,
    #[error("a message is already being sent")]
    AlreadySending,
    #[error("endpoint answered with status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
}

impl ContactError {
    /// The string shown under the form for this failure.
    pub fn message_key(&self) -> UiKey {
        match self {
            ContactError::MissingName => UiKey::ErrMissingName,
            ContactError::NameTooLong => UiKey::ErrNameTooLong,
            ContactError::InvalidEmail => UiKey::ErrInvalidEmail,
            ContactError::MissingMessage => UiKey::ErrMissingMessage,
            ContactError::MessageTooLong => UiKey::ErrMessageTooLong,
            ContactError::AlreadySending => UiKey::FormSending,
            ContactError::Status(_) | ContactError::Transport(_) => UiKey::FormFailed,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ContactError::MissingName);
        }
        if name.chars().count() > NAME_MAX_CHARS {
            return Err(ContactError::NameTooLong);
        }
        let email = self.email.trim();
        if email.chars().count() > EMAIL_MAX_CHARS || !EMAIL_REGEX.is_match(email) {
            return Err(ContactError::InvalidEmail);
        }
        let message = self.message.trim();
        if message.is_empty() {
            return Err(ContactError::MissingMessage);
        }
        if message.chars().count() > MESSAGE_MAX_CHARS {
            return Err(ContactError::MessageTooLong);
        }
        Ok(())
    }

    /// `application/x-www-form-urlencoded` body with the three fields.
    pub fn form_encoded(&self) -> String {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
    }
}

/// `mailto:` link whose subject and body carry the whole message.
pub fn compose_mailto(recipient: &str, form: &ContactForm) -> String {
    let subject = format!("New message from {}", form.name);
    let body = format!(
        "Name: {}\nEmail: {}\n\n{}",
        form.name, form.email, form.message
    );
    format!(
        "mailto:{recipient}?subject={}&body={}",
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delivery {
    Remote { endpoint: String },
    Mailto { recipient: String },
}

impl Delivery {
    pub fn from_config(config: &PortfolioConfig) -> Self {
        let endpoint = config.contact_endpoint.trim();
        if endpoint.is_empty() {
            Delivery::Mailto {
                recipient: config.contact_recipient.clone(),
            }
        } else {
            Delivery::Remote {
                endpoint: endpoint.to_string(),
            }
        }
    }
}

#[async_trait(?Send)]
pub trait ContactTransport {
    /// POSTs a form-encoded body and returns the response status.
    async fn post_form(&self, endpoint: &str, body: String) -> Result<u16, ContactError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl ContactTransport for FetchTransport {
    async fn post_form(&self, endpoint: &str, body: String) -> Result<u16, ContactError> {
        fetch_post_form(endpoint, body).await
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_post_form(endpoint: &str, body: String) -> Result<u16, ContactError> {
    use gloo_timers::callback::Timeout;

    let controller = web_sys::AbortController::new()
        .map_err(|_| ContactError::Transport("abort controller unavailable".to_string()))?;
    let signal = controller.signal();
    // Dropped on return, which cancels the abort for requests that finished.
    let _abort_timer = Timeout::new(SUBMIT_TIMEOUT_MS, move || controller.abort());
    let response = gloo_net::http::Request::post(endpoint)
        .header("Accept", "application/json")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .abort_signal(Some(&signal))
        .body(body)
        .map_err(|err| ContactError::Transport(err.to_string()))?
        .send()
        .await
        .map_err(|err| ContactError::Transport(err.to_string()))?;
    Ok(response.status())
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_post_form(endpoint: &str, _body: String) -> Result<u16, ContactError> {
    Err(ContactError::Transport(format!(
        "no browser fetch available for {endpoint}"
    )))
}

pub async fn post_contact<T: ContactTransport>(
    transport: &T,
    endpoint: &str,
    form: &ContactForm,
) -> Result<(), ContactError> {
    let status = transport.post_form(endpoint, form.form_encoded()).await?;
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ContactError::Status(status))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Sent,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    state: SubmissionState,
    form: ContactForm,
    last_error: Option<ContactError>,
}

impl ContactSubmission {
    #[cfg(test)]
    pub fn with_form(form: ContactForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn last_error(&self) -> Option<&ContactError> {
        self.last_error.as_ref()
    }

    pub fn is_sending(&self) -> bool {
        self.state == SubmissionState::Sending
    }

    /// Moves to `Sending` and hands back the fields to post.
    pub fn start(&mut self) -> Result<ContactForm, ContactError> {
        if self.is_sending() {
            return Err(ContactError::AlreadySending);
        }
        if let Err(err) = self.form.validate() {
            self.last_error = Some(err.clone());
            return Err(err);
        }
        self.state = SubmissionState::Sending;
        self.last_error = None;
        Ok(self.form.clone())
    }

    pub fn complete(&mut self, outcome: Result<(), ContactError>) {
        match outcome {
            Ok(()) => {
                self.state = SubmissionState::Sent;
                self.form = ContactForm::default();
                self.last_error = None;
            }
            Err(err) => {
                tracing::warn!("contact submission failed: {err}");
                self.state = SubmissionState::Idle;
                self.last_error = Some(err);
            }
        }
    }

    /// Builds the fallback link without touching the submission state.
    pub fn prepare_mailto(&mut self, recipient: &str) -> Result<String, ContactError> {
        if let Err(err) = self.form.validate() {
            self.last_error = Some(err.clone());
            return Err(err);
        }
        self.last_error = None;
        Ok(compose_mailto(recipient, &self.form))
    }

    pub fn button_label(&self, locale: Locale) -> &'static str {
        match self.state {
            SubmissionState::Sending => text(locale, UiKey::FormSending),
            SubmissionState::Sent => text(locale, UiKey::FormSent),
            SubmissionState::Idle => text(locale, UiKey::FormSend),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn open_mailto(uri: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.location().set_href(uri).is_err() {
        tracing::warn!("mailto navigation rejected");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn open_mailto(uri: &str) {
    tracing::info!("mailto fallback: {uri}");
}

fn submit(mut submission: Signal<ContactSubmission>, delivery: Delivery) {
    match delivery {
        Delivery::Remote { endpoint } => {
            let form = match submission.write().start() {
                Ok(form) => form,
                Err(err) => {
                    tracing::debug!("contact submission not started: {err}");
                    return;
                }
            };
            spawn(async move {
                let outcome = post_contact(&FetchTransport, &endpoint, &form).await;
                submission.write().complete(outcome);
            });
        }
        Delivery::Mailto { recipient } => {
            let prepared = submission.write().prepare_mailto(&recipient);
            if let Ok(uri) = prepared {
                open_mailto(&uri);
            }
        }
    }
}

#[component]
pub fn ContactSection(locale: Locale) -> Element {
    let config = use_context::<PortfolioConfig>();
    let delivery = Delivery::from_config(&config);
    let mut submission = use_signal(ContactSubmission::default);
    let data = profile();

    let current = submission.read().clone();
    let sending = current.is_sending();
    let error_message = current
        .last_error()
        .map(|err| text(locale, err.message_key()));
    let collab = ["Remote", "Kontrak", "Freelance", "Full-time"];

    rsx! {
        Section {
            id: "contact",
            title: text(locale, UiKey::ContactTitle),
            subtitle: text(locale, UiKey::ContactSub),
            div { class: "grid two",
                GlassCard {
                    h3 { class: "card-title", "{text(locale, UiKey::SendMsg)}" }
                    form {
                        class: "contact-form",
                        onsubmit: move |event| {
                            event.prevent_default();
                            submit(submission, delivery.clone());
                        },
                        input {
                            name: "name",
                            disabled: sending,
                            r#type: "text",
                            required: true,
                            maxlength: "{NAME_MAX_CHARS}",
                            placeholder: "{text(locale, UiKey::FormName)}",
                            value: "{current.form().name}",
                            class: "field",
                            oninput: move |event| submission.write().form_mut().name = event.value(),
                        }
                        input {
                            name: "email",
                            disabled: sending,
                            r#type: "email",
                            required: true,
                            maxlength: "{EMAIL_MAX_CHARS}",
                            placeholder: "{text(locale, UiKey::FormEmail)}",
                            value: "{current.form().email}",
                            class: "field",
                            oninput: move |event| submission.write().form_mut().email = event.value(),
                        }
                        textarea {
                            name: "message",
                            disabled: sending,
                            rows: "4",
                            required: true,
                            maxlength: "{MESSAGE_MAX_CHARS}",
                            placeholder: "{text(locale, UiKey::FormMessage)}",
                            value: "{current.form().message}",
                            class: "field field-area",
                            oninput: move |event| submission.write().form_mut().message = event.value(),
                        }
                        if let Some(message) = error_message {
                            p { class: "form-error", role: "alert", "{message}" }
                        }
                        button {
                            r#type: "submit",
                            class: "button-gradient",
                            disabled: sending,
                            span { class: "button-icon", "➤" }
                            "{current.button_label(locale)}"
                        }
                    }
                }
                div { class: "grid two-sm",
                    GlassCard {
                        h3 { class: "card-title", "{text(locale, UiKey::Info)}" }
                        div { class: "info-list",
                            span { "✉ {data.email}" }
                            span { "☏ {data.phone}" }
                            span { "⌖ {data.location}" }
                        }
                        SocialLinks {}
                    }
                    GlassCard {
                        h3 { class: "card-title", "{text(locale, UiKey::Collab)}" }
                        div { class: "chip-row",
                            for item in collab {
                                span { key: "{item}", class: "chip", "{item}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
