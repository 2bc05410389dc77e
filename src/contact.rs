use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::content::{
    CONTACT_EMAIL, GITHUB_URL, LINKEDIN_URL, RESUME_DOWNLOAD_NAME, RESUME_PATH, WHATSAPP_URL,
};
use crate::error::{SendError, ValidationError};
use crate::mailer::{EmailJs, Mailer};
use crate::toast::Notice;
use crate::types::{ContactField, ContactFields, Section};

pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILED_MESSAGE: &str = "Oops! Something went wrong. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed,
}

impl SubmitOutcome {
    pub fn notice(self) -> Notice {
        match self {
            SubmitOutcome::Sent => Notice::success(SENT_MESSAGE),
            SubmitOutcome::Failed => Notice::error(FAILED_MESSAGE),
        }
    }
}

fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let labels: Vec<&str> = domain.split('.').collect();
    !local.is_empty() && labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

/// Every field must be non-blank and the email must look like `local@domain.tld`.
pub fn validate(fields: &ContactFields) -> Result<(), ValidationError> {
    for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
        if fields.get(field).trim().is_empty() {
            return Err(ValidationError::Missing(field));
        }
    }
    if !is_plausible_email(fields.email.trim()) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Sends the snapshot exactly once and maps the result to what the visitor is told.
pub async fn submit<M: Mailer>(mailer: &M, fields: &ContactFields) -> SubmitOutcome {
    match mailer.send(fields).await {
        Ok(()) => SubmitOutcome::Sent,
        Err(error) => {
            report_failure(&error);
            SubmitOutcome::Failed
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn report_failure(error: &SendError) {
    gloo::console::error!(format!("Email delivery failed: {}", error));
}

#[cfg(not(target_arch = "wasm32"))]
fn report_failure(error: &SendError) {
    eprintln!("Email delivery failed: {}", error);
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ContactState {
    pub fields: ContactFields,
    pub submitting: bool,
}

pub enum ContactAction {
    Edit(ContactField, String),
    Begin,
    Finish(SubmitOutcome),
}

impl ContactState {
    pub fn edit(&mut self, field: ContactField, value: String) {
        self.fields.set(field, value);
    }

    /// Marks a submission in flight and returns the snapshot to send.
    /// Refused while another submission is pending.
    pub fn begin(&mut self) -> Option<ContactFields> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        Some(self.fields.clone())
    }

    /// Fields are cleared only on success so a failed message can be retried as typed.
    pub fn finish(&mut self, outcome: SubmitOutcome) {
        self.submitting = false;
        if outcome == SubmitOutcome::Sent {
            self.fields = ContactFields::default();
        }
    }
}

impl Reducible for ContactState {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Edit(field, value) => next.edit(field, value),
            ContactAction::Begin => {
                if next.begin().is_none() {
                    return self;
                }
            }
            ContactAction::Finish(outcome) => next.finish(outcome),
        }
        next.into()
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub on_notify: Callback<Notice>,
    pub on_navigate: Callback<Section>,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let state = use_reducer(ContactState::default);
    let mailer = use_memo((), |_| EmailJs::from_env());
    let in_flight = use_mut_ref(|| false);

    {
        let mailer = mailer.clone();
        use_effect_with((), move |_| {
            if let Some(error) = mailer.config_error() {
                gloo::console::warn!(format!("Contact form disabled: {}", error));
            }
            || () // Cleanup function
        });
    }

    let on_input = |field: ContactField| {
        let state = state.clone();
        Callback::from(move |value: String| state.dispatch(ContactAction::Edit(field, value)))
    };
    let on_name = on_input(ContactField::Name)
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());
    let on_email = on_input(ContactField::Email)
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());
    let on_message = on_input(ContactField::Message)
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlTextAreaElement>().value());

    let on_submit = {
        let state = state.clone();
        let on_notify = props.on_notify.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // Submit events can arrive twice before the disabled button re-renders.
            if *in_flight.borrow() {
                return;
            }

            if let Err(error) = validate(&state.fields) {
                on_notify.emit(Notice::error(error.to_string()));
                return;
            }

            let mut pending = (*state).clone();
            let Some(fields) = pending.begin() else {
                return;
            };
            *in_flight.borrow_mut() = true;
            state.dispatch(ContactAction::Begin);

            let dispatcher = state.dispatcher();
            let on_notify = on_notify.clone();
            let mailer = mailer.clone();
            let in_flight = in_flight.clone();
            spawn_local(async move {
                let outcome = submit(&*mailer, &fields).await;
                *in_flight.borrow_mut() = false;
                dispatcher.dispatch(ContactAction::Finish(outcome));
                on_notify.emit(outcome.notice());
            });
        })
    };

    let on_view_work = props.on_navigate.reform(|_: MouseEvent| Section::Work);

    html! {
        <section id="contact" class="section contact-section">
            <div class="container">
                <div class="contact-content">
                    <div class="section-header">
                        <div class="section-tag">{"Get In Touch"}</div>
                        <h2 class="section-title">{"Let's Create Something "}<span>{"Amazing Together"}</span></h2>
                        <p class="section-subtitle">
                            {"Have a project in mind? I'd love to hear about it. Let's collaborate and bring your vision to life."}
                        </p>
                    </div>

                    <div class="contact-grid">
                        <div class="contact-info">
                            <a href={format!("mailto:{}", CONTACT_EMAIL)} class="contact-email" title="Send me an email">
                                <span>{"✉"}</span>
                                <span>{CONTACT_EMAIL}</span>
                            </a>

                            <div class="social-links">
                                <a href={WHATSAPP_URL} class="social-link" aria-label="WhatsApp" title="Chat on WhatsApp" target="_blank" rel="noopener noreferrer">{"WA"}</a>
                                <a href={LINKEDIN_URL} class="social-link" aria-label="LinkedIn" title="Connect on LinkedIn" target="_blank" rel="noopener noreferrer">{"in"}</a>
                                <a href={GITHUB_URL} class="social-link" aria-label="GitHub" title="View GitHub Profile" target="_blank" rel="noopener noreferrer">{"GH"}</a>
                            </div>

                            <div class="contact-actions">
                                <a href={RESUME_PATH} download={RESUME_DOWNLOAD_NAME} class="btn btn-outline">
                                    <span>{"Download Resume"}</span>
                                </a>
                                <button onclick={on_view_work} class="btn btn-ghost">
                                    <span>{"View All Work"}</span>
                                    <span>{"→"}</span>
                                </button>
                            </div>
                        </div>

                        <form class="contact-form" onsubmit={on_submit}>
                            <div class="form-group">
                                <label for="name" class="form-label">{"Name"}</label>
                                <input
                                    type="text"
                                    id="name"
                                    name="from_name"
                                    class="form-input"
                                    placeholder="Your name"
                                    value={state.fields.name.clone()}
                                    oninput={on_name}
                                    required=true
                                />
                            </div>
                            <div class="form-group">
                                <label for="email" class="form-label">{"Email"}</label>
                                <input
                                    type="email"
                                    id="email"
                                    name="from_email"
                                    class="form-input"
                                    placeholder="your@email.com"
                                    value={state.fields.email.clone()}
                                    oninput={on_email}
                                    required=true
                                />
                            </div>
                            <div class="form-group">
                                <label for="message" class="form-label">{"Message"}</label>
                                <textarea
                                    id="message"
                                    name="message"
                                    rows="6"
                                    class="form-input form-textarea"
                                    placeholder="Tell me about your project..."
                                    value={state.fields.message.clone()}
                                    oninput={on_message}
                                    required=true
                                />
                            </div>
                            <button type="submit" class="btn btn-primary btn-full" disabled={state.submitting}>
                                if state.submitting {
                                    <span class="spinner" />
                                    <span>{"Sending..."}</span>
                                } else {
                                    <span>{"Send Message"}</span>
                                }
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}
