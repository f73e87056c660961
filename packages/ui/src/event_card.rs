//! Per-event card: renders the allowed action set for the current user and
//! issues subscribe/unsubscribe/delete requests.
//!
//! Derived states: *owner* (user organizes the event), *full* (capacity
//! reached; capacity 0 means uncapped), *subscribed* (from the attending
//! projection). Capacity is advisory only; the server's 409 is the
//! authority, and a failed request leaves local state unchanged.

use api::Event;
use chrono::DateTime;
use dioxus::prelude::*;

use crate::check_in_list::CheckInList;
use crate::components::{Badge, BadgeVariant, Button, ButtonVariant};
use crate::confirm::confirm;
use crate::credential_modal::CredentialModal;
use crate::queries::Mutation;
use crate::toasts::use_toasts;
use crate::{use_auth, use_client};

/// "Jan 5, 2031 18:00" out of the server's ISO timestamp; falls back to the
/// raw string for anything unparseable.
fn format_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(date) => date.format("%b %-d, %Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[component]
pub fn EventCard(
    event: Event,
    /// Whether the current user already attends this event.
    #[props(default)]
    subscribed: bool,
    /// Notified after a mutation the server accepted.
    #[props(default)]
    on_changed: EventHandler<Mutation>,
    /// Owner action, handled by the page (opens the edit modal).
    #[props(default)]
    on_edit: EventHandler<Event>,
    /// Browse-only rendering: the register button delegates to `on_browse`
    /// instead of issuing a request (the public page routes to login).
    #[props(default)]
    browse_only: bool,
    #[props(default)]
    on_browse: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let client = use_client();
    let toasts = use_toasts();

    let mut busy = use_signal(|| false);
    let mut show_check_in = use_signal(|| false);
    let mut show_credential = use_signal(|| false);

    let user = auth.user();
    let owner = event.is_owned_by(user.as_ref());
    let full = event.is_full();
    let date_label = format_date(&event.date);

    let notify = move |mutation: Mutation| on_changed.call(mutation);

    let handle_subscribe = {
        let client = client.clone();
        let event_id = event.id.clone();
        move |_| {
            if browse_only {
                on_browse.call(());
                return;
            }
            let client = client.clone();
            let event_id = event_id.clone();
            spawn(async move {
                busy.set(true);
                match client.subscribe(&event_id, None).await {
                    Ok(()) => {
                        toasts.success("Registration confirmed!");
                        notify(Mutation::Subscribed);
                    }
                    Err(err) if err.is_conflict() => {
                        toasts.error(format!("Could not register: {err}"));
                    }
                    Err(err) => {
                        tracing::error!(%err, "subscribe failed");
                        toasts.error("Could not register. Try again.");
                    }
                }
                busy.set(false);
            });
        }
    };

    let handle_unsubscribe = {
        let client = client.clone();
        let event_id = event.id.clone();
        move |_| {
            if !confirm("Cancel your registration for this event?") {
                return;
            }
            let client = client.clone();
            let event_id = event_id.clone();
            spawn(async move {
                busy.set(true);
                match client.unsubscribe(&event_id, None).await {
                    Ok(()) => {
                        toasts.info("Registration cancelled.");
                        notify(Mutation::Unsubscribed);
                    }
                    Err(err) => {
                        tracing::error!(%err, "unsubscribe failed");
                        toasts.error("Could not cancel your registration.");
                    }
                }
                busy.set(false);
            });
        }
    };

    let handle_delete = {
        let client = client.clone();
        let event_id = event.id.clone();
        move |_| {
            if !confirm("Delete this event? This cannot be undone.") {
                return;
            }
            let client = client.clone();
            let event_id = event_id.clone();
            spawn(async move {
                busy.set(true);
                match client.delete_event(&event_id).await {
                    Ok(()) => {
                        toasts.success("Event deleted.");
                        notify(Mutation::Deleted);
                    }
                    Err(err) => {
                        tracing::error!(%err, "delete failed");
                        toasts.error("Could not delete the event.");
                    }
                }
                busy.set(false);
            });
        }
    };

    let event_for_edit = event.clone();

    rsx! {
        div {
            class: "event-card",
            div {
                class: "event-card__header",
                h3 { class: "event-card__title", "{event.title}" }
                if full {
                    Badge { variant: BadgeVariant::Destructive, "Sold out" }
                } else if event.max_attendees > 0 {
                    Badge { variant: BadgeVariant::Success, "{event.attendees_count} / {event.max_attendees}" }
                } else {
                    Badge { "{event.attendees_count} going" }
                }
            }
            p { class: "event-card__description", "{event.description}" }
            div {
                class: "event-card__meta",
                span { "📅 {date_label}" }
                span { "📍 {event.location}" }
            }
            div {
                class: "event-card__actions",
                if owner {
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: busy(),
                        onclick: move |_| on_edit.call(event_for_edit.clone()),
                        "Edit"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| show_check_in.set(true),
                        "Check-in"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        disabled: busy(),
                        onclick: handle_delete,
                        "Delete"
                    }
                } else if subscribed {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| show_credential.set(true),
                        "Credential"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        disabled: busy(),
                        onclick: handle_unsubscribe,
                        "Cancel registration"
                    }
                } else {
                    Button {
                        disabled: full || busy(),
                        onclick: handle_subscribe,
                        if full { "Sold out" } else { "Register" }
                    }
                }
            }
        }

        if show_check_in() {
            CheckInList {
                event_id: event.id.clone(),
                event_title: event.title.clone(),
                on_changed: on_changed,
                on_close: move |_| show_check_in.set(false),
            }
        }

        if show_credential() {
            if let Some(user) = user.clone() {
                CredentialModal {
                    event_id: event.id.clone(),
                    event_title: event.title.clone(),
                    user_id: user.id,
                    user_name: user.name,
                    checked_in: event.checked_in.unwrap_or(false),
                    on_close: move |_| show_credential.set(false),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2031-01-05T18:00:00Z"), "Jan 5, 2031 18:00");
        assert_eq!(format_date("whenever"), "whenever");
    }
}
