//! In-page anchor link with smooth scrolling.

use dioxus::prelude::*;
use portfolio_core::anchor_target;

use crate::browser;
use crate::context::use_page;

#[derive(Props, Clone, PartialEq)]
pub struct AnchorLinkProps {
    /// `#section-id` target
    pub href: String,
    #[props(default)]
    pub class: Option<String>,
    /// Called before scrolling, e.g. to close the mobile menu
    #[props(default)]
    pub onnavigate: Option<EventHandler<()>>,
    pub children: Element,
}

/// Scrolls to the target section leaving room for the fixed header, and
/// marks the matching nav link active. A bare `#` or a missing target does
/// nothing beyond `onnavigate`.
#[component]
pub fn AnchorLink(props: AnchorLinkProps) -> Element {
    let page = use_page();
    let href = props.href.clone();
    let class = props.class.clone().unwrap_or_default();

    let onclick = move |evt: MouseEvent| {
        evt.prevent_default();
        if let Some(handler) = &props.onnavigate {
            handler.call(());
        }

        let Some(id) = anchor_target(&props.href) else {
            return;
        };
        let Some(top) = browser::section_top(id) else {
            tracing::debug!(section = id, "anchor target missing");
            return;
        };

        let target = page.scroll.read().scroll_target(top, browser::header_height());
        browser::smooth_scroll_to(target);
        page.set_active(id);
    };

    rsx! {
        a { href: "{href}", class: "{class}", onclick: onclick, {props.children} }
    }
}
