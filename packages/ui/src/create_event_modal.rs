use api::validate::{EventForm, FieldErrors};
use api::EventDraft;
use chrono::Utc;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Modal};

/// Dialog for creating a new event. Validation failures stay field-scoped
/// and block submission; a valid form hands the draft to the page.
#[component]
pub fn CreateEventModal(
    #[props(default)] busy: bool,
    on_close: EventHandler<()>,
    on_submit: EventHandler<EventDraft>,
) -> Element {
    let mut form = use_signal(EventForm::default);
    let mut errors = use_signal(FieldErrors::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match form.read().validate(Utc::now()) {
            Ok(draft) => {
                errors.set(FieldErrors::default());
                on_submit.call(draft);
            }
            Err(failed) => errors.set(failed),
        }
    };

    rsx! {
        Modal {
            title: "Create a new event",
            description: "Fill in the details to host a new event.",
            on_close: move |_| on_close.call(()),

            form {
                class: "form",
                onsubmit: handle_submit,

                Input {
                    id: "event-title",
                    label: "Event title",
                    placeholder: "Ex: Tech Meetup 2031",
                    value: form.read().title.clone(),
                    error: errors.read().get("title").map(str::to_string),
                    oninput: move |evt: FormEvent| form.write().title = evt.value(),
                }
                Input {
                    id: "event-description",
                    label: "Description",
                    placeholder: "Describe your event...",
                    value: form.read().description.clone(),
                    error: errors.read().get("description").map(str::to_string),
                    oninput: move |evt: FormEvent| form.write().description = evt.value(),
                }
                Input {
                    id: "event-date",
                    label: "Date and time",
                    r#type: "datetime-local",
                    value: form.read().date.clone(),
                    error: errors.read().get("date").map(str::to_string),
                    oninput: move |evt: FormEvent| form.write().date = evt.value(),
                }
                Input {
                    id: "event-location",
                    label: "Location",
                    placeholder: "Ex: Main Hall",
                    value: form.read().location.clone(),
                    error: errors.read().get("location").map(str::to_string),
                    oninput: move |evt: FormEvent| form.write().location = evt.value(),
                }
                Input {
                    id: "event-capacity",
                    label: "Max attendees",
                    r#type: "number",
                    placeholder: "50",
                    value: form.read().max_attendees.clone(),
                    error: errors.read().get("max_attendees").map(str::to_string),
                    oninput: move |evt: FormEvent| form.write().max_attendees = evt.value(),
                }

                div {
                    class: "form__actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: busy,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        r#type: "submit",
                        disabled: busy,
                        if busy { "Creating..." } else { "Create event" }
                    }
                }
            }
        }
    }
}
