use dioxus::prelude::*;

/// Active tab value, provided by [`Tabs`] for its triggers and panels.
#[derive(Clone, Copy, PartialEq)]
struct ActiveTab(Signal<String>);

/// Controlled tab group: the parent owns the active-value signal, so it can
/// switch tabs programmatically (e.g. after a successful registration).
#[component]
pub fn Tabs(active: Signal<String>, children: Element) -> Element {
    use_context_provider(|| ActiveTab(active));

    rsx! {
        div {
            class: "tabs",
            {children}
        }
    }
}

#[component]
pub fn TabsList(children: Element) -> Element {
    rsx! {
        div {
            class: "tabs__list",
            {children}
        }
    }
}

#[component]
pub fn TabTrigger(value: String, children: Element) -> Element {
    let mut active = use_context::<ActiveTab>().0;
    let selected = active() == value;

    rsx! {
        button {
            class: if selected { "tabs__trigger tabs__trigger--active" } else { "tabs__trigger" },
            onclick: move |_| active.set(value.clone()),
            {children}
        }
    }
}

#[component]
pub fn TabPanel(value: String, children: Element) -> Element {
    let active = use_context::<ActiveTab>().0;

    if active() != value {
        return rsx! {};
    }

    rsx! {
        div {
            class: "tabs__panel",
            {children}
        }
    }
}
