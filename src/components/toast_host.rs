//! Renders the active toast, if any.

use dioxus::prelude::*;
use portfolio_ui::ToastBanner;

use crate::context::use_page;

#[component]
pub fn ToastHost() -> Element {
    let page = use_page();
    let toast = page.toaster.read().current().cloned();

    rsx! {
        if let Some(toast) = toast {
            ToastBanner {
                key: "{toast.id}",
                toast: toast,
                onclose: move |id: u64| page.close_toast(id),
            }
        }
    }
}
