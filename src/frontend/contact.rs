use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::{
    dom::{log_event, LogLevel, Timeout},
    render_runs,
    reveal::Reveal,
};
use crate::{
    choreography,
    contact::{
        ContactField, ContactForm, ContactLimits, ContactMessage, RelayResponse, SubmitRejected,
        SubmitStatus, CONTACT_ENDPOINT, STATUS_CLEAR_MS,
    },
    content::{CONTACT_DETAILS, CONTACT_SUBTITLE, CONTACT_TITLE, SOCIALS},
};

/// Name, email, message and the submit row.
const FORM_ELEMENTS: usize = 4;
const BLOBS: usize = 2;

async fn relay(message: &ContactMessage) -> Result<(), String> {
    let response = Request::post(CONTACT_ENDPOINT)
        .json(message)
        .map_err(|err| err.to_string())?
        .send()
        .await
        .map_err(|err| err.to_string())?;

    let status = response.status();
    let reply = response
        .json::<RelayResponse>()
        .await
        .map_err(|err| format!("status {status}: {err}"))?;

    if reply.ok {
        Ok(())
    } else {
        Err(reply.error.unwrap_or_else(|| format!("status {status}")))
    }
}

fn input_value(event: &InputEvent) -> Option<String> {
    let target = event.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    target.dyn_ref::<HtmlTextAreaElement>().map(HtmlTextAreaElement::value)
}

fn detail_icon(label: &str) -> &'static str {
    match label {
        "Email" => "✉",
        "Phone" => "☎",
        _ => "📍",
    }
}

#[function_component(ContactMe)]
pub fn contact_me() -> Html {
    let form = use_mut_ref(ContactForm::default);
    let status_timer = use_mut_ref(|| None::<Timeout>);
    let redraw = use_force_update();

    let on_input = |field: ContactField| {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(value) = input_value(&event) {
                form.borrow_mut().set_field(field, value);
                redraw.force_update();
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let begun = form.borrow_mut().begin_submit(&ContactLimits::default());
            redraw.force_update();
            let (ticket, message) = match begun {
                Ok(begun) => begun,
                Err(SubmitRejected::AlreadySending) => return,
                Err(SubmitRejected::Invalid(error)) => {
                    log_event(
                        LogLevel::Debug,
                        "contact_invalid",
                        serde_json::json!({ "reason": error.as_str() }),
                    );
                    return;
                }
            };

            status_timer.borrow_mut().take();
            let form = form.clone();
            let redraw = redraw.clone();
            let status_timer = status_timer.clone();
            spawn_local(async move {
                let result = relay(&message).await;
                match &result {
                    Ok(()) => log_event(LogLevel::Info, "contact_sent", serde_json::json!({})),
                    Err(error) => log_event(
                        LogLevel::Warn,
                        "contact_failed",
                        serde_json::json!({ "error": error }),
                    ),
                }

                if !form.borrow_mut().finish(ticket, result.is_ok()) {
                    return;
                }
                redraw.force_update();

                *status_timer.borrow_mut() = Timeout::new(STATUS_CLEAR_MS, move || {
                    form.borrow_mut().clear_status(ticket);
                    redraw.force_update();
                });
            });
        })
    };

    let state = form.borrow().clone();
    let status = state.status();
    let error = state.field_error();
    let invalid = |field: ContactField| error.is_some_and(|error| error.field() == field);
    let hint = |field: ContactField| match error {
        Some(error) if error.field() == field => html! {
            <p class="field-hint" role="alert">{error.hint()}</p>
        },
        _ => Html::default(),
    };

    let title: Vec<char> = CONTACT_TITLE.chars().collect();
    let status_line = status.message().map(|message| {
        let class = match status {
            SubmitStatus::Sent => "status-message is-sent",
            _ => "status-message is-failed",
        };
        html! {
            <Reveal key={message} reveal={choreography::status_message()} class={class}>
                <span aria-hidden="true">{if status == SubmitStatus::Sent { "✓ " } else { "✕ " }}</span>
                {message}
            </Reveal>
        }
    });

    html! {
        <Reveal reveal={choreography::contact_section()} tag="section" id="contact" class="contact">
            <div class="blob-layer" aria-hidden="true">
                {for (0..BLOBS).map(|index| html! {
                    <Reveal
                        key={index}
                        reveal={choreography::background_blob(index, BLOBS)}
                        class={format!("blob blob-{}", index + 1)}
                    />
                })}
            </div>

            <div class="section-inner">
                <header class="section-header">
                    <h2 class="section-title contact-title" aria-label={CONTACT_TITLE}>
                        {for title.iter().enumerate().map(|(index, ch)| html! {
                            <Reveal
                                key={index}
                                reveal={choreography::title_char(index, title.len())}
                                tag="span"
                                class="title-char"
                            >
                                {if ch.is_whitespace() { "\u{00A0}".to_string() } else { ch.to_string() }}
                            </Reveal>
                        })}
                    </h2>
                    <Reveal reveal={choreography::contact_subtitle()} tag="p" class="section-subtitle">
                        {render_runs(CONTACT_SUBTITLE)}
                    </Reveal>
                </header>

                <div class="contact-columns">
                    <Reveal reveal={choreography::contact_form()} class="card contact-card">
                        <h3>{"Send me a message"}</h3>
                        <form class="contact-form" onsubmit={on_submit} novalidate="novalidate">
                            <Reveal reveal={choreography::form_element(0, FORM_ELEMENTS)} class="form-element">
                                <label for="name">{"Your Name"}</label>
                                <input
                                    id="name"
                                    name="user_name"
                                    type="text"
                                    placeholder="Your Name"
                                    value={state.draft.name.clone()}
                                    aria-invalid={invalid(ContactField::Name).to_string()}
                                    oninput={on_input(ContactField::Name)}
                                />
                                {hint(ContactField::Name)}
                            </Reveal>
                            <Reveal reveal={choreography::form_element(1, FORM_ELEMENTS)} class="form-element">
                                <label for="email">{"Your Email"}</label>
                                <input
                                    id="email"
                                    name="user_email"
                                    type="email"
                                    placeholder="your.email@example.com"
                                    value={state.draft.email.clone()}
                                    aria-invalid={invalid(ContactField::Email).to_string()}
                                    oninput={on_input(ContactField::Email)}
                                />
                                {hint(ContactField::Email)}
                            </Reveal>
                            <Reveal reveal={choreography::form_element(2, FORM_ELEMENTS)} class="form-element">
                                <label for="message">{"Your Message"}</label>
                                <textarea
                                    id="message"
                                    name="message"
                                    rows="5"
                                    placeholder="Hello, I'd like to talk about..."
                                    value={state.draft.message.clone()}
                                    aria-invalid={invalid(ContactField::Message).to_string()}
                                    oninput={on_input(ContactField::Message)}
                                />
                                {hint(ContactField::Message)}
                            </Reveal>
                            <Reveal reveal={choreography::form_element(3, FORM_ELEMENTS)} class="form-actions">
                                <button
                                    class="button button-gradient"
                                    type="submit"
                                    disabled={status == SubmitStatus::Sending}
                                    aria-busy={(status == SubmitStatus::Sending).to_string()}
                                >
                                    if status == SubmitStatus::Sending {
                                        <span class="spinner" aria-hidden="true"></span>
                                    }
                                    {status.button_label()}
                                </button>
                                <div class="status-slot" aria-live="polite">{for status_line}</div>
                            </Reveal>
                        </form>
                    </Reveal>

                    <div class="contact-aside">
                        <Reveal reveal={choreography::contact_info()} class="card contact-info">
                            <h3>{"Contact Information"}</h3>
                            {for CONTACT_DETAILS.iter().enumerate().map(|(index, detail)| html! {
                                <Reveal
                                    key={detail.label}
                                    reveal={choreography::info_item(index, CONTACT_DETAILS.len())}
                                    class="info-item"
                                >
                                    <span class="info-icon" aria-hidden="true">{detail_icon(detail.label)}</span>
                                    <div>
                                        <h4>{detail.label}</h4>
                                        if detail.href.is_empty() {
                                            <p>{detail.value}</p>
                                        } else {
                                            <a href={detail.href}>{detail.value}</a>
                                        }
                                    </div>
                                </Reveal>
                            })}
                        </Reveal>

                        <Reveal reveal={choreography::social_block()} class="card social-card">
                            <h3>{"Social Media I Exist On"}</h3>
                            <div class="social-icons">
                                {for SOCIALS.iter().enumerate().map(|(index, social)| html! {
                                    <Reveal
                                        key={social.name}
                                        reveal={choreography::social_icon(index, SOCIALS.len())}
                                        tag="span"
                                        class="social-icon"
                                    >
                                        <a
                                            href={social.href}
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label={social.name}
                                        >
                                            {social.name}
                                        </a>
                                    </Reveal>
                                })}
                            </div>
                        </Reveal>
                    </div>
                </div>
            </div>
        </Reveal>
    }
}
