use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures::StreamExt;

use crate::browser::PageListeners;
use crate::components::{About, Contact, Footer, Hero, NavHeader, Projects, Skills, ToastHost};
use crate::config;
use crate::context::{PageContext, PageEvent};
use crate::theme::GLOBAL_STYLES;

const FONT_AWESOME: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css";

/// Root application component.
///
/// Provides global styles and the page context, and attaches the native
/// scroll, click, keyboard, visibility and intersection listeners once the
/// page is mounted.
#[component]
pub fn App() -> Element {
    let page = use_context_provider(|| PageContext::new(config::load()));

    // Native listeners hand events to this coroutine so signal writes happen
    // inside the Dioxus runtime.
    let events = use_coroutine(move |mut rx: UnboundedReceiver<PageEvent>| async move {
        while let Some(event) = rx.next().await {
            page.handle(event);
        }
    });

    let listeners: Rc<RefCell<Option<PageListeners>>> = use_hook(|| Rc::new(RefCell::new(None)));

    use_effect(move || {
        let reveal = page.config.peek().reveal.clone();
        *listeners.borrow_mut() = Some(PageListeners::attach(events.tx(), &reveal));
        tracing::debug!("page listeners attached");
    });

    rsx! {
        document::Link { rel: "stylesheet", href: FONT_AWESOME }
        style { {GLOBAL_STYLES} }

        div {
            class: "page",

            NavHeader {}
            main {
                Hero {}
                About {}
                Skills {}
                Projects {}
                Contact {}
            }
            Footer {}
            ToastHost {}
        }
    }
}
