//! Contact section with the floating-label form.
//!
//! Validation runs before anything is sent; the request itself goes out
//! through [`FetchTransport`] while the submit button is disabled.

use dioxus::prelude::*;
use portfolio_core::{ContactForm, Transport};
use portfolio_ui::{Button, FloatingField};

use super::sections::section_class;
use crate::browser::FetchTransport;
use crate::context::use_page;

#[component]
pub fn Contact() -> Element {
    let page = use_page();
    let mut form = use_signal(|| ContactForm::new(&page.config.peek().contact));

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let begun = form.write().begin_submit();
        match begun {
            Err(notification) => page.notify(notification),
            Ok(submission) => {
                tracing::info!(endpoint = %submission.endpoint, "sending contact form");
                spawn(async move {
                    let outcome = FetchTransport.post_form(&submission).await;
                    let notification = form.write().finish_submit(outcome);
                    page.notify(notification);
                });
            }
        }
    };

    let class = section_class(&page, "contact", "");
    let current = form.read();

    rsx! {
        section { id: "contact", class: "{class}",
            div { class: "container",
                h2 { class: "section-title", "Get In Touch" }
                p { class: "contact-intro",
                    "Have a project in mind or just want to say hello? Drop me a message."
                }

                form {
                    id: "contact-form",
                    action: "{current.endpoint()}",
                    method: "POST",
                    "novalidate": "true",
                    onsubmit: onsubmit,

                    for field in current.fields().iter().cloned() {
                        FloatingField {
                            key: "{field.name()}",
                            field: field,
                            onfocus: move |name: String| {
                                let _ = form.write().focus(&name);
                            },
                            onblur: move |name: String| {
                                let _ = form.write().blur(&name);
                            },
                            oninput: move |(name, value): (String, String)| {
                                let _ = form.write().input(&name, value);
                            },
                        }
                    }

                    Button {
                        button_type: "submit".to_string(),
                        disabled: current.is_submitting(),
                        "{current.submit_label()}"
                    }
                }
            }
        }
    }
}
