//! Button Components
//!
//! - Primary: filled call-to-action (hero, contact submit)
//! - Outline: secondary call-to-action
//! - Icon: compact square button (menu toggle, toast close)

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled primary action
    #[default]
    Primary,
    /// Transparent with a border
    Outline,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
        }
    }
}

/// Join a base class with optional extra classes
pub(crate) fn with_extra(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         button_type: "submit".to_string(),
///         disabled: form.read().is_submitting(),
///         "{form.read().submit_label()}"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = with_extra(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            {props.children}
        }
    }
}

/// Icon button for compact actions (menu toggle, close, ...)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler; receives the raw event so callers can stop propagation
    pub onclick: EventHandler<MouseEvent>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = with_extra("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |evt| props.onclick.call(evt),
            {props.children}
        }
    }
}

/// Close button with × icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconButton {
            onclick: move |_| onclick.call(()),
            aria_label: "Close".to_string(),
            class: with_extra("close-btn", class.as_deref()),
            "\u{00D7}"
        }
    }
}
