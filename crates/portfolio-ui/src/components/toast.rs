//! Toast Banner
//!
//! Fixed top-right message with a close button. Entry and exit animations
//! are driven by the `leaving` flag of the toast.

use dioxus::prelude::*;
use portfolio_core::Toast;

use super::CloseButton;

/// Properties for the ToastBanner component
#[derive(Clone, PartialEq, Props)]
pub struct ToastBannerProps {
    pub toast: Toast,
    /// Called with the toast id when the close button is pressed
    pub onclose: EventHandler<u64>,
}

#[component]
pub fn ToastBanner(props: ToastBannerProps) -> Element {
    let toast = &props.toast;
    let id = toast.id;
    let style = banner_style(toast);

    rsx! {
        div {
            class: "{toast.class()}",
            role: "status",
            style: "{style}",
            span { "{toast.notification.message}" }
            CloseButton {
                class: "notification-close".to_string(),
                onclick: move |_| props.onclose.call(id),
            }
        }
    }
}

/// Inline style carrying the kind colour and current animation
pub fn banner_style(toast: &Toast) -> String {
    format!(
        "background: {}; animation: {};",
        toast.notification.kind.background(),
        toast.animation()
    )
}
