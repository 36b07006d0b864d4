//! Navigation Header Component
//!
//! Fixed header with the site logo, section links and the mobile menu
//! toggle. Hides while scrolling down and gains a shadow once scrolled.

use dioxus::prelude::*;
use portfolio_core::NavEvent;
use portfolio_ui::IconButton;

use crate::components::AnchorLink;
use crate::content::{OWNER_NAME, SECTIONS};
use crate::context::use_page;

#[component]
pub fn NavHeader() -> Element {
    let page = use_page();
    let menu = *page.nav.read();
    let header = *page.header.read();
    let active = page.active_section.read().clone();

    rsx! {
        header {
            class: "{header.class()}",
            style: "transform: {header.transform()};",

            div { class: "container nav-container",
                AnchorLink { href: "#home".to_string(), class: "logo".to_string(),
                    "{OWNER_NAME}"
                }

                nav {
                    ul { class: "{menu.list_class()}",
                        for section in SECTIONS.iter() {
                            li { key: "{section.id}",
                                AnchorLink {
                                    href: format!("#{}", section.id),
                                    class: link_class(active.as_deref(), section.id),
                                    onnavigate: move |_| page.nav_event(NavEvent::LinkClick),
                                    "{section.label}"
                                }
                            }
                        }
                    }
                }

                IconButton {
                    class: menu.toggle_class().to_string(),
                    aria_label: "Toggle navigation".to_string(),
                    onclick: move |_| page.nav_event(NavEvent::Toggle),
                    i { class: "fas {menu.icon().class()}" }
                }
            }
        }
    }
}

/// Class list for the nav link pointing at `section_id`
fn link_class(active: Option<&str>, section_id: &str) -> String {
    if active == Some(section_id) {
        "nav-link active".to_string()
    } else {
        "nav-link".to_string()
    }
}
