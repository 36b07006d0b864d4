//! Floating Label Field
//!
//! Input or textarea whose placeholder is rendered as a label that floats
//! above the control once it is focused or filled. No `placeholder`
//! attribute is emitted.

use dioxus::prelude::*;
use portfolio_core::{FieldKind, FormField};

/// Properties for the FloatingField component
#[derive(Clone, PartialEq, Props)]
pub struct FloatingFieldProps {
    /// Field state from the contact form controller
    pub field: FormField,
    /// Called with the field name on focus
    pub onfocus: EventHandler<String>,
    /// Called with the field name on blur
    pub onblur: EventHandler<String>,
    /// Called with `(name, value)` on every input
    pub oninput: EventHandler<(String, String)>,
    /// Rows for textarea fields
    #[props(default = 5)]
    pub rows: u32,
}

/// One contact form control with its floating label
///
/// # Example
///
/// ```rust,ignore
/// for field in form.read().fields().iter().cloned() {
///     FloatingField {
///         field,
///         onfocus: move |name: String| { let _ = form.write().focus(&name); },
///         onblur: move |name: String| { let _ = form.write().blur(&name); },
///         oninput: move |(name, value): (String, String)| { let _ = form.write().input(&name, value); },
///     }
/// }
/// ```
#[component]
pub fn FloatingField(props: FloatingFieldProps) -> Element {
    let field = &props.field;
    let name = field.name().to_string();
    let border = field.border_style();

    let focus_name = name.clone();
    let blur_name = name.clone();
    let input_name = name.clone();

    rsx! {
        div { class: "{field.group_class()}",
            label {
                r#for: "{name}",
                class: "{field.label_class()}",
                "{field.label()}"
            }
            if field.kind() == FieldKind::Textarea {
                textarea {
                    id: "{name}",
                    name: "{name}",
                    rows: "{props.rows}",
                    required: field.required(),
                    style: "{border}",
                    value: "{field.value()}",
                    onfocus: move |_| props.onfocus.call(focus_name.clone()),
                    onblur: move |_| props.onblur.call(blur_name.clone()),
                    oninput: move |e| props.oninput.call((input_name.clone(), e.value())),
                }
            } else {
                input {
                    id: "{name}",
                    name: "{name}",
                    r#type: "{field.kind().input_type()}",
                    required: field.required(),
                    style: "{border}",
                    value: "{field.value()}",
                    onfocus: move |_| props.onfocus.call(focus_name.clone()),
                    onblur: move |_| props.onblur.call(blur_name.clone()),
                    oninput: move |e| props.oninput.call((input_name.clone(), e.value())),
                }
            }
        }
    }
}
