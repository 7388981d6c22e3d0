use gloo_timers::future::TimeoutFuture;
use log::{debug, info, warn};
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::button::Button;
use super::reveal::use_reveal;
use crate::config;
use crate::content::ContactItem;
use crate::motion::scroll::{stagger_style, Reveal};

const SEND_LABEL: &str = "Send Message";

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactDraft {
    pub fn with(&self, field: Field, value: String) -> Self {
        let mut next = self.clone();
        match field {
            Field::Name => next.name = value,
            Field::Email => next.email = value,
            Field::Subject => next.subject = value,
            Field::Message => next.message = value,
        }
        next
    }

    /// Names of the fields left blank. Presence is all that is checked.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

/// Simulated submission: nothing leaves the browser and it always succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Sending,
    Sent,
}

impl SubmitPhase {
    pub fn label(self) -> &'static str {
        match self {
            SubmitPhase::Idle => SEND_LABEL,
            SubmitPhase::Sending => "Sending...",
            SubmitPhase::Sent => "Message Sent! ✓",
        }
    }

    pub fn background(self) -> Option<&'static str> {
        match self {
            SubmitPhase::Idle => None,
            SubmitPhase::Sending => Some("linear-gradient(135deg, #059669 0%, #047857 100%)"),
            SubmitPhase::Sent => Some("linear-gradient(135deg, #10b981 0%, #059669 100%)"),
        }
    }

    pub fn accepts_submit(self) -> bool {
        self == SubmitPhase::Idle
    }
}

fn input_value(e: &InputEvent) -> String {
    e.target_dyn_into::<HtmlInputElement>()
        .map(|input| input.value())
        .or_else(|| e.target_dyn_into::<HtmlTextAreaElement>().map(|area| area.value()))
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub items: Vec<ContactItem>,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let section = use_node_ref();
    use_reveal(section.clone());

    let draft = use_state(ContactDraft::default);
    let phase = use_state(|| SubmitPhase::Idle);
    let missing = use_state(Vec::<&'static str>::new);

    let oninput = |field: Field| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| draft.set(draft.with(field, input_value(&e))))
    };

    let onsubmit = {
        let draft = draft.clone();
        let phase = phase.clone();
        let missing = missing.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !phase.accepts_submit() {
                return;
            }
            let gaps = draft.missing_fields();
            if !gaps.is_empty() {
                missing.set(gaps);
                return;
            }
            missing.set(Vec::new());

            match serde_json::to_string(&*draft) {
                Ok(json) => debug!("simulated contact submission: {}", json),
                Err(e) => warn!("could not serialize contact draft: {}", e),
            }
            phase.set(SubmitPhase::Sending);

            let draft = draft.clone();
            let phase = phase.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::CONTACT_SENDING_MS).await;
                info!("contact message sent");
                phase.set(SubmitPhase::Sent);
                draft.set(ContactDraft::default());

                TimeoutFuture::new(config::CONTACT_RESET_MS).await;
                phase.set(SubmitPhase::Idle);
            });
        })
    };

    html! {
        <section id="contact" ref={section} class="contact-section">
            <div class="container contact-grid">
                <div class="contact-info">
                    <h2 class="section-title">{"Get In Touch"}</h2>
                    { for props.items.iter().enumerate().map(|(i, item)| html! {
                        <div
                            class={format!("contact-info-item {}", Reveal::SlideIn.class())}
                            style={stagger_style(i)}
                        >
                            <span class="contact-icon">{ item.icon.clone() }</span>
                            <div>
                                <h4>{ item.title.clone() }</h4>
                                <p>{ item.detail.clone() }</p>
                            </div>
                        </div>
                    }) }
                </div>
                <form id="contactForm" class="contact-form" {onsubmit}>
                    <input
                        type="text"
                        placeholder="Your Name"
                        required=true
                        value={draft.name.clone()}
                        oninput={oninput(Field::Name)}
                    />
                    <input
                        type="email"
                        placeholder="Your Email"
                        required=true
                        value={draft.email.clone()}
                        oninput={oninput(Field::Email)}
                    />
                    <input
                        type="text"
                        placeholder="Subject"
                        required=true
                        value={draft.subject.clone()}
                        oninput={oninput(Field::Subject)}
                    />
                    <textarea
                        rows="5"
                        placeholder="Your Message"
                        required=true
                        value={draft.message.clone()}
                        oninput={oninput(Field::Message)}
                    />
                    {
                        if missing.is_empty() {
                            html! {}
                        } else {
                            html! {
                                <p class="form-error">
                                    { format!("Please fill in: {}", missing.join(", ")) }
                                </p>
                            }
                        }
                    }
                    <Button
                        label={phase.label()}
                        submit=true
                        disabled={!phase.accepts_submit()}
                        background={phase.background()}
                    />
                </form>
            </div>
        </section>
    }
}
