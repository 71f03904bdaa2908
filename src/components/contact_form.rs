//! Contact form controller: validation, simulated submission, and
//! transient result messages.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures and transport failures both surface as transient
//! messages; the user's input is only cleared after a successful
//! submission, so every failure path leaves the form ready to retry.

use leptos::prelude::*;

use crate::state::form::{ContactSubmission, SubmitPhase};
use crate::state::message::{MessageKind, StatusMessage};

const SUCCESS_TEXT: &str = "Thank you for your message! We will get back to you soon.";
const FAILURE_TEXT: &str = "Sorry, there was an error sending your message. Please try again later.";

/// The contact form. Mounted only on the contact page; on pages without
/// it, no form handling exists at all.
///
/// At most one submission is in flight: submit events arriving while one
/// is pending are ignored. The fields stay interactive throughout.
#[component]
pub fn ContactForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let phase = RwSignal::new(SubmitPhase::Idle);
    let messages = RwSignal::new(Vec::<StatusMessage>::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Refuse a submit while one is in flight; the phase is committed
        // only once validation has passed.
        let mut next = phase.get_untracked();
        if !next.try_begin() {
            return;
        }

        let submission = ContactSubmission {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        if let Err(err) = submission.validate() {
            push_message(messages, MessageKind::Error, err.message());
            return;
        }

        phase.set(next);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::transport::{SimulatedTransport, SubmissionTransport};

            match SimulatedTransport::default().submit(&submission).await {
                Ok(()) => {
                    push_message(messages, MessageKind::Success, SUCCESS_TEXT);
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                }
                Err(detail) => {
                    leptos::logging::warn!("contact form submission failed: {detail}");
                    push_message(messages, MessageKind::Error, FAILURE_TEXT);
                }
            }
            phase.update(SubmitPhase::finish);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = submission;
            phase.update(SubmitPhase::finish);
        }
    };

    view! {
        <div class="contact-form">
            {move || {
                messages
                    .get()
                    .into_iter()
                    .map(|m| view! { <div class=m.kind.css_class()>{m.text}</div> })
                    .collect::<Vec<_>>()
            }}

            <form id="contactForm" on:submit=on_submit>
                <label class="contact-form__label">
                    "Name"
                    <input
                        class="contact-form__input"
                        type="text"
                        name="name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="contact-form__label">
                    "Email"
                    <input
                        class="contact-form__input"
                        type="text"
                        name="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="contact-form__label">
                    "Message"
                    <textarea
                        class="contact-form__input contact-form__message"
                        name="message"
                        rows="6"
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button class="btn btn--primary" type="submit">
                    "Send Message"
                </button>
            </form>
        </div>
    }
}

/// Show a transient message above the form and schedule its removal.
/// Each message owns its own timer, so removals stay independent.
fn push_message(messages: RwSignal<Vec<StatusMessage>>, kind: MessageKind, text: &str) {
    #[cfg(feature = "hydrate")]
    let now_ms = js_sys::Date::now();
    #[cfg(not(feature = "hydrate"))]
    let now_ms = 0.0;

    let msg = StatusMessage::new(kind, text, now_ms);
    #[cfg(feature = "hydrate")]
    let id = msg.id.clone();
    messages.update(|m| m.push(msg));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::message::{MESSAGE_DURATION_MS, remove_message};

        gloo_timers::future::sleep(std::time::Duration::from_millis(MESSAGE_DURATION_MS)).await;
        messages.update(|m| remove_message(m, &id));
    });
}
