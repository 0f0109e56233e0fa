//! Common presentation components.

use dioxus::prelude::*;

/// Labelled form field wrapper.
#[component]
pub fn FormField(
    label: String,
    #[props(default = false)] required: bool,
    children: Element,
) -> Element {
    rsx! {
        label { class: "form-field",
            span { class: "form-field-label",
                "{label}"
                if required {
                    span { class: "form-field-required", " *" }
                }
            }
            {children}
        }
    }
}
