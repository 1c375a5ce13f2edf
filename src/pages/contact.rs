use log::info;
use serde::{Deserialize, Serialize};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::service_card::{check_icon, email_icon};
use crate::components::shapes::FloatingShapes;
use crate::config;

/// In-progress form entry. Lives only for the page session; submission never
/// clears it, so the submitted draft stays behind the confirmation view.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let draft = use_state(ContactDraft::default);
    let submitted = use_state(|| false);

    let edit_field = |apply: fn(&mut ContactDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            apply(&mut next, input.value());
            draft.set(next);
        })
    };

    let on_name = edit_field(|d, value| d.name = value);
    let on_email = edit_field(|d, value| d.email = value);
    let on_company = edit_field(|d, value| d.company = value);

    let on_message = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.message = textarea.value();
            draft.set(next);
        })
    };

    // Submission is simulated: nothing leaves the browser. The captured
    // draft goes to the console and the confirmation view takes over.
    let onsubmit = {
        let draft = draft.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Ok(payload) = serde_json::to_string(&*draft) {
                info!("Contact form captured: {}", payload);
            }
            submitted.set(true);
        })
    };

    html! {
        <div class="page subpage">
            <section class="subpage-hero contact-hero">
                <FloatingShapes />
                <div class="hero-backdrop"></div>

                <div class="shell">
                    <div class="contact-grid">
                        <div>
                            <Reveal>
                                <span class="eyebrow">{"Contact"}</span>
                                <h1 class="page-title">
                                    {"Let's start"}
                                    <span class="accent-text">{"something great."}</span>
                                </h1>
                            </Reveal>

                            <Reveal delay_ms={200}>
                                <p class="lede">
                                    {"Ready to transform your marketing? Drop us a line and we'll get back to you within 24 hours."}
                                </p>

                                <div class="contact-channels">
                                    <div class="channel">
                                        <div class="channel-icon">
                                            { email_icon() }
                                        </div>
                                        <div>
                                            <p class="channel-hint">{"Email us at"}</p>
                                            <p class="channel-value">{ config::CONTACT_EMAIL }</p>
                                        </div>
                                    </div>

                                    <div class="channel">
                                        <div class="channel-icon">
                                            <svg fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="1.5" d="M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z" />
                                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="1.5" d="M15 11a3 3 0 11-6 0 3 3 0 016 0z" />
                                            </svg>
                                        </div>
                                        <div>
                                            <p class="channel-hint">{"Serving clients in"}</p>
                                            <p class="channel-value">{"United States & United Kingdom"}</p>
                                        </div>
                                    </div>
                                </div>
                            </Reveal>
                        </div>

                        <Reveal delay_ms={300}>
                            <div class="contact-card">
                                { if *submitted {
                                    html! {
                                        <div class="confirmation">
                                            <div class="confirm-badge">
                                                { check_icon("#16A34A") }
                                            </div>
                                            <h3>{"Message Sent!"}</h3>
                                            <p>{"We'll get back to you within 24 hours."}</p>
                                        </div>
                                    }
                                } else {
                                    html! {
                                        <form onsubmit={onsubmit}>
                                            <div class="form-field">
                                                <label>{"Your Name"}</label>
                                                <input
                                                    type="text"
                                                    required={true}
                                                    value={draft.name.clone()}
                                                    oninput={on_name}
                                                    placeholder="John Doe"
                                                />
                                            </div>

                                            <div class="form-field">
                                                <label>{"Email Address"}</label>
                                                <input
                                                    type="email"
                                                    required={true}
                                                    value={draft.email.clone()}
                                                    oninput={on_email}
                                                    placeholder="john@company.com"
                                                />
                                            </div>

                                            <div class="form-field">
                                                <label>{"Company"}</label>
                                                <input
                                                    type="text"
                                                    value={draft.company.clone()}
                                                    oninput={on_company}
                                                    placeholder="Your Company"
                                                />
                                            </div>

                                            <div class="form-field">
                                                <label>{"Tell us about your project"}</label>
                                                <textarea
                                                    required={true}
                                                    rows="4"
                                                    value={draft.message.clone()}
                                                    oninput={on_message}
                                                    placeholder="What are your marketing goals?"
                                                />
                                            </div>

                                            <button type="submit" class="submit-button">
                                                {"Send Message"}
                                                <svg fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M14 5l7 7m0 0l-7 7m7-7H3" />
                                                </svg>
                                            </button>
                                        </form>
                                    }
                                } }
                            </div>
                        </Reveal>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_starts_empty() {
        assert_eq!(ContactDraft::default(), ContactDraft {
            name: String::new(),
            email: String::new(),
            company: String::new(),
            message: String::new(),
        });
    }

    #[test]
    fn field_edits_accumulate() {
        let mut draft = ContactDraft::default();
        draft.name = "Ada".into();
        draft.email = "ada@example.com".into();
        draft.message = "Scale our app".into();
        assert_eq!(draft.name, "Ada");
        assert_eq!(draft.email, "ada@example.com");
        assert!(draft.company.is_empty());
    }

    #[test]
    fn draft_serializes_for_the_console_log() {
        let draft = ContactDraft {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            company: String::new(),
            message: "Scale our app".into(),
        };
        let json = serde_json::to_string(&draft).unwrap();
        assert!(json.contains("\"name\":\"Ada\""));
        assert!(json.contains("\"company\":\"\""));
    }
}
