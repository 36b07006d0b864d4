//! Page footer with the current year.

use chrono::Datelike;
use dioxus::prelude::*;

use crate::content::OWNER_NAME;

#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                p {
                    "\u{00A9} "
                    span { id: "current-year", "{year}" }
                    " {OWNER_NAME}. Built with Rust and Dioxus."
                }
            }
        }
    }
}
