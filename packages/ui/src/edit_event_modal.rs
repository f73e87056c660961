use api::validate::{EventForm, FieldErrors};
use api::{Event, EventDraft};
use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Modal};

/// Turn the server's ISO timestamp into a `datetime-local` input value.
fn datetime_local_value(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(date) => date.with_timezone(&Utc).format("%Y-%m-%dT%H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn form_from_event(event: &Event) -> EventForm {
    EventForm {
        title: event.title.clone(),
        description: event.description.clone(),
        date: datetime_local_value(&event.date),
        location: event.location.clone(),
        max_attendees: event.max_attendees.to_string(),
    }
}

/// Dialog for editing an existing event, pre-filled from it. The validated
/// draft goes back to the page, which issues the partial update.
#[component]
pub fn EditEventModal(
    event: Event,
    #[props(default)] busy: bool,
    on_close: EventHandler<()>,
    on_submit: EventHandler<EventDraft>,
) -> Element {
    let mut form = use_signal({
        let event = event.clone();
        move || form_from_event(&event)
    });
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
            title: "Edit event",
            on_close: move |_| on_close.call(()),

            form {
                class: "form",
                onsubmit: handle_submit,

                Input {
                    id: "edit-title",
                    label: "Event title",
                    value: form.read().title.clone(),
                    error: errors.read().get("title").map(str::to_string),
                    oninput: move |evt: FormEvent| form.write().title = evt.value(),
                }
                Input {
                    id: "edit-description",
                    label: "Description",
                    value: form.read().description.clone(),
                    error: errors.read().get("description").map(str::to_string),
                    oninput: move |evt: FormEvent| form.write().description = evt.value(),
                }
                Input {
                    id: "edit-date",
                    label: "Date and time",
                    r#type: "datetime-local",
                    value: form.read().date.clone(),
                    error: errors.read().get("date").map(str::to_string),
                    oninput: move |evt: FormEvent| form.write().date = evt.value(),
                }
                Input {
                    id: "edit-location",
                    label: "Location",
                    value: form.read().location.clone(),
                    error: errors.read().get("location").map(str::to_string),
                    oninput: move |evt: FormEvent| form.write().location = evt.value(),
                }
                Input {
                    id: "edit-capacity",
                    label: "Max attendees",
                    r#type: "number",
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
                        if busy { "Saving..." } else { "Save changes" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datetime_local_value() {
        assert_eq!(
            datetime_local_value("2031-06-01T21:00:00-03:00"),
            "2031-06-02T00:00"
        );
        assert_eq!(datetime_local_value("garbage"), "garbage");
    }
}
