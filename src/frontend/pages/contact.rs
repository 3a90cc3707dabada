use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::{ContactDraft, ContactError, ContactField};
use crate::content::{FAQS, OWNER_EMAIL, OWNER_LOCATION, OWNER_PHONE, SOCIAL_LINKS};
use crate::frontend::hover::RiverHover;
use crate::frontend::reveal::{FlowingCard, FlowingSection};
use crate::frontend::text::{FlowingText, FlowingTitle};
use crate::frontend::{DeliveryContext, ExternalLink};

#[derive(Clone, Debug, PartialEq, Eq)]
enum SendStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

fn field_error(errors: &[ContactError], field: ContactField) -> Option<String> {
    errors
        .iter()
        .find(|error| error.field() == field)
        .map(ToString::to_string)
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    html! {
        <>
            <section class="page-hero compact" aria-labelledby="contact-heading">
                <h1 id="contact-heading"><FlowingTitle text="Get In Touch" class="gradient-text" /></h1>
                <FlowingText
                    text="Have a project in mind or just want to chat? I'd love to hear from you. Let's create something amazing together."
                    class="lead"
                    delay={0.3}
                />
            </section>

            <FlowingSection class="section-block contact-grid">
                <ContactForm />
                <div class="contact-details">
                    <FlowingCard>
                        <h2>{"Contact Information"}</h2>
                        <dl class="contact-list">
                            <dt>{"Email"}</dt>
                            <dd><a class="link" href={format!("mailto:{OWNER_EMAIL}")}>{OWNER_EMAIL}</a></dd>
                            <dt>{"Phone"}</dt>
                            <dd>{OWNER_PHONE}</dd>
                            <dt>{"Location"}</dt>
                            <dd>{OWNER_LOCATION}</dd>
                        </dl>
                    </FlowingCard>
                    <FlowingCard delay={0.1}>
                        <h2>{"Follow Me"}</h2>
                        <ul class="social-links">
                            { for SOCIAL_LINKS.iter().map(|link| html! {
                                <li key={link.label}>
                                    <ExternalLink href={link.href} label={link.label} />
                                </li>
                            }) }
                        </ul>
                    </FlowingCard>
                    <FlowingCard delay={0.2} class="availability">
                        <span class="status-dot" aria-hidden="true" />
                        <p>{"Available for freelance work. Typical response time is within 24 hours."}</p>
                    </FlowingCard>
                </div>
            </FlowingSection>

            <FlowingSection class="section-block">
                <h2><FlowingTitle text="Frequently Asked Questions" /></h2>
                <div class="faq-list">
                    { for FAQS.iter().enumerate().map(|(index, faq)| html! {
                        <FlowingCard key={faq.question} delay={index as f64 * 0.1}>
                            <details>
                                <summary>{faq.question}</summary>
                                <p class="muted">{faq.answer}</p>
                            </details>
                        </FlowingCard>
                    }) }
                </div>
            </FlowingSection>
        </>
    }
}

#[function_component(ContactForm)]
fn contact_form() -> Html {
    let draft = use_state_eq(ContactDraft::default);
    let errors = use_state_eq(Vec::<ContactError>::new);
    let status = use_state_eq(|| SendStatus::Idle);
    let delivery = use_context::<DeliveryContext>().unwrap_or_default();

    let on_field_input = |field: ContactField| {
        let draft = draft.clone();
        let errors = errors.clone();
        Callback::from(move |event: InputEvent| {
            let value = match field {
                ContactField::Message => event.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => event.target_unchecked_into::<HtmlInputElement>().value(),
            };
            let mut next = (*draft).clone();
            next.set(field, value);
            draft.set(next);
            if errors.iter().any(|error| error.field() == field) {
                errors.set(errors.iter().filter(|error| error.field() != field).cloned().collect());
            }
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let status = status.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *status == SendStatus::Sending {
                return;
            }

            let submission = match draft.validate() {
                Ok(submission) => submission,
                Err(found) => {
                    errors.set(found);
                    status.set(SendStatus::Idle);
                    return;
                }
            };

            errors.set(Vec::new());
            status.set(SendStatus::Sending);
            let pending = delivery.0.deliver(submission);
            let draft = draft.clone();
            let status = status.clone();
            spawn_local(async move {
                match pending.await {
                    Ok(()) => {
                        draft.set(ContactDraft::default());
                        status.set(SendStatus::Sent);
                    }
                    Err(error) => status.set(SendStatus::Failed(error.to_string())),
                }
            });
        })
    };

    let sending = *status == SendStatus::Sending;
    let status_line = match &*status {
        SendStatus::Idle => Html::default(),
        SendStatus::Sending => html! { <p class="form-status" role="status">{"Sending..."}</p> },
        SendStatus::Sent => html! {
            <p class="form-status form-success" role="status">
                {"Thanks for reaching out! I'll get back to you soon."}
            </p>
        },
        SendStatus::Failed(reason) => html! {
            <p class="form-status form-error" role="alert">{reason.clone()}</p>
        },
    };

    html! {
        <FlowingCard class="contact-form-card">
            <h2>{"Send Me a Message"}</h2>
            <form class="contact-form" onsubmit={onsubmit} novalidate={true}>
                { for ContactField::ALL.into_iter().map(|field| {
                    let id = format!("contact-{}", field.as_str());
                    let error = field_error(&errors, field);
                    let error_id = format!("{id}-error");
                    let describedby = error.as_ref().map(|_| error_id.clone());
                    let has_error = error.is_some();
                    let invalid = has_error.to_string();
                    let value = draft.get(field).to_string();
                    let oninput = on_field_input(field);
                    html! {
                        <div key={field.as_str()} class={classes!("form-field", has_error.then_some("has-error"))}>
                            <label for={id.clone()}>{field.label()}</label>
                            if field == ContactField::Message {
                                <textarea
                                    id={id}
                                    name={field.as_str()}
                                    rows="6"
                                    placeholder={field.placeholder()}
                                    value={value}
                                    oninput={oninput}
                                    aria-invalid={invalid}
                                    aria-describedby={describedby}
                                />
                            } else {
                                <input
                                    id={id}
                                    name={field.as_str()}
                                    type={if field == ContactField::Email { "email" } else { "text" }}
                                    placeholder={field.placeholder()}
                                    value={value}
                                    oninput={oninput}
                                    aria-invalid={invalid}
                                    aria-describedby={describedby}
                                />
                            }
                            if let Some(message) = error {
                                <p id={error_id} class="form-error">{message}</p>
                            }
                        </div>
                    }
                }) }
                <RiverHover>
                    <button type="submit" class="button button-primary" disabled={sending}>
                        {if sending { "Sending..." } else { "Send Message" }}
                    </button>
                </RiverHover>
                {status_line}
            </form>
        </FlowingCard>
    }
}
