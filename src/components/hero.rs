//! Hero section with the typing effect.

use std::ops::ControlFlow;
use std::time::Duration;

use dioxus::prelude::*;
use portfolio_core::{Pausable, SeededJitter, TypingEffect, CURSOR};
use portfolio_ui::ButtonVariant;

use super::sections::section_class;
use super::AnchorLink;
use crate::browser::BrowserTimer;
use crate::content::{HERO_INTRO, HERO_SUMMARY, OWNER_NAME};
use crate::context::use_page;

/// How often a hidden tab re-checks visibility before resuming the effect
const HIDDEN_POLL: Duration = Duration::from_millis(250);

#[component]
pub fn Hero() -> Element {
    let page = use_page();
    let mut typed = use_signal(String::new);

    use_future(move || async move {
        let config = page.config.peek().typing.clone();
        let seed = js_sys::Date::now() as u64;
        let mut effect = match TypingEffect::new(config, SeededJitter::new(seed)) {
            Ok(effect) => effect,
            Err(e) => {
                tracing::warn!(error = %e, "typing effect disabled");
                return;
            }
        };

        let hidden = page.hidden;
        let timer = Pausable::new(BrowserTimer, move || *hidden.peek(), HIDDEN_POLL);
        effect
            .run(&timer, |frame| {
                typed.set(frame.text.clone());
                ControlFlow::Continue(())
            })
            .await;
    });

    let class = section_class(&page, "home", "hero");

    rsx! {
        section { id: "home", class: "{class}",
            div { class: "container hero-content",
                p { class: "hero-intro", "{HERO_INTRO}" }
                h1 { class: "hero-name", "{OWNER_NAME}" }
                h2 { class: "hero-role",
                    span { id: "typing-text",
                        "{typed}"
                        span { class: "cursor", "{CURSOR}" }
                    }
                }
                p { class: "hero-summary", "{HERO_SUMMARY}" }
                div { class: "hero-actions",
                    AnchorLink {
                        href: "#projects".to_string(),
                        class: ButtonVariant::Primary.class().to_string(),
                        "View My Work"
                    }
                    AnchorLink {
                        href: "#contact".to_string(),
                        class: ButtonVariant::Outline.class().to_string(),
                        "Get In Touch"
                    }
                }
            }
        }
    }
}
