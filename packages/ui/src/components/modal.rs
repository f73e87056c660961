use dioxus::prelude::*;

/// Centered dialog over a dimmed backdrop. The parent decides whether to
/// render it; clicking the backdrop or the close button calls `on_close`.
#[component]
pub fn Modal(
    title: String,
    description: Option<String>,
    on_close: EventHandler<()>,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal {class}",
                // keep clicks inside the dialog from reaching the backdrop
                onclick: move |evt| evt.stop_propagation(),
                div {
                    class: "modal__header",
                    div {
                        h2 { class: "modal__title", "{title}" }
                        if let Some(description) = description {
                            p { class: "modal__description", "{description}" }
                        }
                    }
                    button {
                        class: "modal__close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div {
                    class: "modal__body",
                    {children}
                }
            }
        }
    }
}
