use std::rc::Rc;

use log::{debug, info, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::toast::ToastHandle;
use crate::components::section_header::SectionHeader;
use crate::config;
use crate::contact::{Acknowledge, Acknowledgement, ContactForm, ContactFormInput, Field, FormPhase, SubmitOutcome};
use crate::content::{BUSINESS_HOURS, CONTACT_ADDRESS, CONTACT_PHONE, SOCIAL_LINKS};
use crate::motion::Entrance;

pub enum ContactAction {
    Edit(Field, String),
    Settle(ContactForm),
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ContactAction::Edit(field, value) => {
                let mut next = (*self).clone();
                next.edit(field, value);
                Rc::new(next)
            }
            ContactAction::Settle(next) => Rc::new(next),
        }
    }
}

/// Run a submit attempt against a copy of `current`. The caller stores the
/// returned form and acts on the outcome.
fn attempt_submit(current: &ContactForm, ack: &dyn Acknowledge) -> (ContactForm, SubmitOutcome) {
    let mut next = current.clone();
    let outcome = next.submit(ack);
    (next, outcome)
}

/// Stand-in for a real backend: print the accepted payload to the console.
fn log_submission(input: &ContactFormInput) {
    match serde_wasm_bindgen::to_value(input) {
        Ok(value) => gloo_console::log!("contact form submission", value),
        Err(err) => {
            warn!("could not convert submission for console: {}", err);
            info!("contact form submission {}", serde_json::to_string(input).unwrap_or_default());
        }
    }
}

/// Acknowledgements fall back to the log when no toaster is mounted.
struct LogOnly;

impl Acknowledge for LogOnly {
    fn acknowledge(&self, ack: Acknowledgement) {
        info!("{}: {}", ack.title, ack.description);
    }
}

#[function_component(ContactFormView)]
pub fn contact_form_view() -> Html {
    let form = use_reducer(ContactForm::default);
    let toast = use_context::<ToastHandle>();

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (next, outcome) = match toast.as_ref() {
                Some(handle) => attempt_submit(&form, handle),
                None => attempt_submit(&form, &LogOnly),
            };
            match &outcome {
                SubmitOutcome::Sent(input) => log_submission(input),
                SubmitOutcome::Rejected => {
                    debug!("invalid fields: {:?}", next.errors().fields().collect::<Vec<_>>());
                }
            }
            form.dispatch(ContactAction::Settle(next));
        })
    };

    let field_view = |field: Field| -> Html {
        let value = form.input().get(field).to_string();
        let error = form.errors().get(field);
        let oninput = {
            let form = form.clone();
            Callback::from(move |e: InputEvent| {
                let value = if field == Field::Message {
                    e.target_unchecked_into::<HtmlTextAreaElement>().value()
                } else {
                    e.target_unchecked_into::<HtmlInputElement>().value()
                };
                form.dispatch(ContactAction::Edit(field, value));
            })
        };

        html! {
            <div class="form-field">
                <label for={field.id()}>{field.label()}</label>
                if field == Field::Message {
                    <textarea
                        id={field.id()}
                        name={field.id()}
                        placeholder={field.placeholder()}
                        {value}
                        {oninput}
                    />
                } else {
                    <input
                        id={field.id()}
                        name={field.id()}
                        type={if field == Field::Email { "email" } else { "text" }}
                        placeholder={field.placeholder()}
                        {value}
                        {oninput}
                    />
                }
                if let Some(error) = error {
                    <p class="field-error">{error.to_string()}</p>
                }
            </div>
        }
    };

    html! {
        <form
            class={classes!("contact-form", (form.phase() == FormPhase::Invalid).then_some("attempted"))}
            {onsubmit}
            novalidate=true
        >
            { for Field::ALL.into_iter().map(field_view) }
            <button type="submit" class="contact-submit">{"Send Message"}</button>
        </form>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let mailto = format!(
        "mailto:{}?subject={}",
        config::SUPPORT_EMAIL,
        urlencoding::encode("Meditox enquiry")
    );

    html! {
        <section id="contact" class="contact-section">
            <div class="section-container">
                <SectionHeader
                    title="Get in Touch"
                    subtitle="Have questions? We'd love to hear from you. Send us a message and we'll respond as soon as possible."
                />

                <div class="contact-grid">
                    <Reveal entrance={Entrance::slide_x(-50.0)}>
                        <ContactFormView />
                    </Reveal>

                    <Reveal entrance={Entrance::slide_x(50.0)} class={classes!("contact-aside")}>
                        <div class="contact-info">
                            <h3>{"Contact Information"}</h3>
                            <div class="info-row">
                                <span class="info-icon">{"✉️"}</span>
                                <div>
                                    <p class="info-label">{"Email"}</p>
                                    <a href={mailto}>{config::SUPPORT_EMAIL}</a>
                                </div>
                            </div>
                            <div class="info-row">
                                <span class="info-icon">{"📞"}</span>
                                <div>
                                    <p class="info-label">{"Phone"}</p>
                                    <p>{CONTACT_PHONE}</p>
                                </div>
                            </div>
                            <div class="info-row">
                                <span class="info-icon">{"📍"}</span>
                                <div>
                                    <p class="info-label">{"Address"}</p>
                                    { for CONTACT_ADDRESS.iter().map(|line| html! { <p>{*line}</p> }) }
                                </div>
                            </div>
                            <div class="social">
                                <p class="info-label">{"Follow Us"}</p>
                                <div class="social-links">
                                    { for SOCIAL_LINKS.iter().map(|link| html! {
                                        <a href={link.href} aria-label={link.label}>{link.initial()}</a>
                                    }) }
                                </div>
                            </div>
                        </div>

                        <div class="business-hours">
                            <h3>{"Business Hours"}</h3>
                            { for BUSINESS_HOURS.iter().map(|(days, hours)| html! {
                                <div class="hours-row">
                                    <span>{*days}</span>
                                    <span class="hours">{*hours}</span>
                                </div>
                            }) }
                        </div>
                    </Reveal>
                </div>
            </div>

            <style>
                {r#"
                    .contact-section {
                        padding: 5rem 0;
                        background: #ffffff;
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    @media (max-width: 1024px) {
                        .contact-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .form-field label {
                        display: block;
                        font-weight: 600;
                        color: #2D5016;
                    }
                    .form-field input,
                    .form-field textarea {
                        width: 100%;
                        box-sizing: border-box;
                        margin-top: 0.5rem;
                        padding: 0.6rem 0.75rem;
                        border: 1px solid #d1d5db;
                        border-radius: 0.375rem;
                        font: inherit;
                    }
                    .form-field input:focus,
                    .form-field textarea:focus {
                        outline: none;
                        border-color: #4A7C2C;
                        box-shadow: 0 0 0 2px rgba(74, 124, 44, 0.3);
                    }
                    .form-field textarea {
                        min-height: 120px;
                    }
                    .field-error {
                        color: #ef4444;
                        font-size: 0.875rem;
                        margin: 0.25rem 0 0 0;
                    }
                    .contact-submit {
                        width: 100%;
                        padding: 1.1rem 0;
                        border: none;
                        border-radius: 0.5rem;
                        font-size: 1.1rem;
                        font-weight: 600;
                        color: #ffffff;
                        cursor: pointer;
                        background: linear-gradient(90deg, #6BA547, #4A7C2C);
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                        transition: all 0.3s;
                    }
                    .contact-submit:hover {
                        background: linear-gradient(90deg, #4A7C2C, #2D5016);
                    }
                    .contact-aside {
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }
                    .contact-info {
                        border-radius: 1rem;
                        padding: 2rem;
                        color: #ffffff;
                        background: linear-gradient(135deg, #A8D08D, #6BA547);
                    }
                    .contact-info h3 {
                        font-size: 1.5rem;
                        margin: 0 0 1.5rem 0;
                    }
                    .contact-info a {
                        color: #ffffff;
                    }
                    .info-row {
                        display: flex;
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                    }
                    .info-row p {
                        margin: 0;
                        color: rgba(255, 255, 255, 0.9);
                    }
                    .info-icon {
                        width: 3rem;
                        height: 3rem;
                        flex-shrink: 0;
                        border-radius: 0.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(255, 255, 255, 0.2);
                    }
                    .info-label {
                        font-weight: 600;
                        margin: 0 0 0.25rem 0;
                    }
                    .social {
                        margin-top: 2rem;
                        padding-top: 2rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.2);
                    }
                    .social-links {
                        display: flex;
                        gap: 1rem;
                        margin-top: 1rem;
                    }
                    .social-links a {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 0.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-decoration: none;
                        font-weight: 700;
                        background: rgba(255, 255, 255, 0.2);
                        transition: background 0.2s;
                    }
                    .social-links a:hover {
                        background: rgba(255, 255, 255, 0.3);
                    }
                    .business-hours {
                        border-radius: 1rem;
                        padding: 2rem;
                        background: #f9fafb;
                        color: #374151;
                    }
                    .business-hours h3 {
                        font-size: 1.25rem;
                        color: #2D5016;
                        margin: 0 0 1rem 0;
                    }
                    .hours-row {
                        display: flex;
                        justify-content: space-between;
                        margin-bottom: 0.5rem;
                    }
                    .hours {
                        font-weight: 600;
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct Counter(Cell<usize>);

    impl Acknowledge for Counter {
        fn acknowledge(&self, _ack: Acknowledgement) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn filled() -> Rc<ContactForm> {
        [
            (Field::Name, "John Doe"),
            (Field::Email, "john@example.com"),
            (Field::Phone, "9876543210"),
            (Field::ShopName, "ABC Pharmacy"),
            (Field::Message, "Need a demo please"),
        ]
        .into_iter()
        .fold(Rc::new(ContactForm::default()), |form, (field, value)| {
            form.reduce(ContactAction::Edit(field, value.to_string()))
        })
    }

    #[test]
    fn edits_flow_through_the_reducer() {
        let form = filled();
        assert_eq!(form.input().shop_name, "ABC Pharmacy");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn submit_acknowledges_outside_the_reducer() {
        let counter = Counter::default();
        let form = filled();

        let (next, outcome) = attempt_submit(&form, &counter);
        assert!(matches!(outcome, SubmitOutcome::Sent(ref sent) if sent.name == "John Doe"));
        assert_eq!(counter.0.get(), 1);
        // the rendered state is untouched until the result is settled
        assert_eq!(form.input().name, "John Doe");

        let settled = form.reduce(ContactAction::Settle(next));
        assert_eq!(settled.input(), &ContactFormInput::default());
        assert_eq!(counter.0.get(), 1);
    }

    #[test]
    fn rejected_submit_settles_errors_without_acknowledging() {
        let counter = Counter::default();
        let form = Rc::new(ContactForm::default());

        let (next, outcome) = attempt_submit(&form, &counter);
        assert_eq!(outcome, SubmitOutcome::Rejected);
        let settled = form.reduce(ContactAction::Settle(next));
        assert_eq!(settled.phase(), FormPhase::Invalid);
        assert_eq!(settled.errors().len(), Field::ALL.len());
        assert_eq!(counter.0.get(), 0);
    }
}
