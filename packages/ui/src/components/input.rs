use dioxus::prelude::*;

#[component]
pub fn Label(#[props(default = "".to_string())] html_for: String, children: Element) -> Element {
    rsx! {
        label {
            class: "field__label",
            r#for: "{html_for}",
            {children}
        }
    }
}

/// Text input with optional label and field-scoped error message.
#[component]
pub fn Input(
    #[props(default = "".to_string())] id: String,
    label: Option<String>,
    error: Option<String>,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] value: String,
    #[props(default = "".to_string())] class: String,
    #[props(default)] oninput: EventHandler<FormEvent>,
) -> Element {
    let invalid = error.is_some();

    rsx! {
        div {
            class: "field {class}",
            if let Some(label) = label {
                Label { html_for: id.clone(), "{label}" }
            }
            input {
                id: "{id}",
                class: if invalid { "field__input field__input--invalid" } else { "field__input" },
                r#type: r#type,
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| oninput.call(evt),
            }
            if let Some(error) = error {
                p { class: "field__error", "{error}" }
            }
        }
    }
}
