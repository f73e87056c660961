//! Organizer view of an event's attendees, with search and check-in.
//!
//! The checked-in flag flips locally once the server accepts the check-in;
//! a failed request leaves the row unchanged and surfaces an error toast.

use api::Subscription;
use dioxus::prelude::*;

use crate::components::{Button, Input, Modal};
use crate::queries::Mutation;
use crate::toasts::use_toasts;
use crate::use_client;

fn matches_query(sub: &Subscription, query: &str) -> bool {
    let query = query.to_lowercase();
    sub.user_name.to_lowercase().contains(&query)
        || sub.user_email.to_lowercase().contains(&query)
}

#[component]
pub fn CheckInList(
    event_id: String,
    event_title: String,
    on_close: EventHandler<()>,
    #[props(default)] on_changed: EventHandler<Mutation>,
) -> Element {
    let client = use_client();
    let toasts = use_toasts();

    let mut subscriptions = use_signal(Vec::<Subscription>::new);
    let mut loading = use_signal(|| true);
    let mut search = use_signal(String::new);

    let _loader = use_resource({
        let client = client.clone();
        let event_id = event_id.clone();
        move || {
            let client = client.clone();
            let event_id = event_id.clone();
            async move {
                match client.subscriptions(&event_id).await {
                    Ok(list) => subscriptions.set(list),
                    Err(err) => {
                        tracing::error!(%err, "failed to load subscriptions");
                        toasts.error("Could not load the attendee list.");
                    }
                }
                loading.set(false);
            }
        }
    });

    let handle_check_in = {
        let client = client.clone();
        let event_id = event_id.clone();
        move |user_id: String| {
            let client = client.clone();
            let event_id = event_id.clone();
            spawn(async move {
                match client.check_in(&event_id, &user_id).await {
                    Ok(()) => {
                        for sub in subscriptions.write().iter_mut() {
                            if sub.user_id == user_id {
                                sub.checked_in = true;
                            }
                        }
                        toasts.success("Check-in confirmed!");
                        on_changed.call(Mutation::CheckedIn);
                    }
                    Err(err) => {
                        tracing::error!(%err, "check-in failed");
                        toasts.error("Could not check the attendee in.");
                    }
                }
            });
        }
    };

    let visible: Vec<Subscription> = subscriptions
        .read()
        .iter()
        .filter(|sub| matches_query(sub, &search.read()))
        .cloned()
        .collect();
    let confirmed = visible.iter().filter(|sub| sub.checked_in).count();
    let searching = !search.read().is_empty();

    rsx! {
        Modal {
            title: "Manage check-in: {event_title}",
            class: "modal--wide",
            on_close: move |_| on_close.call(()),

            div {
                class: "check-in",
                Input {
                    id: "check-in-search",
                    placeholder: "Search attendees by name or email...",
                    value: search.read().clone(),
                    oninput: move |evt: FormEvent| search.set(evt.value()),
                }

                div {
                    class: "check-in__list",
                    if loading() {
                        p { class: "check-in__empty", "Loading..." }
                    } else if visible.is_empty() {
                        p {
                            class: "check-in__empty",
                            if searching { "No attendee matches the search." } else { "Nobody registered for this event yet." }
                        }
                    } else {
                        for sub in visible.iter().cloned() {
                            div {
                                key: "{sub.user_id}",
                                class: "check-in__row",
                                div {
                                    class: "check-in__who",
                                    span { class: "check-in__name", "{sub.user_name}" }
                                    span { class: "check-in__email", "{sub.user_email}" }
                                }
                                if sub.checked_in {
                                    span { class: "check-in__confirmed", "✓ Confirmed" }
                                } else {
                                    Button {
                                        onclick: {
                                            let handle_check_in = handle_check_in.clone();
                                            let user_id = sub.user_id.clone();
                                            move |_| handle_check_in(user_id.clone())
                                        },
                                        "Check in"
                                    }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "check-in__totals",
                    span { "Total: {visible.len()}" }
                    span { "Confirmed: {confirmed}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(name: &str, email: &str) -> Subscription {
        Subscription {
            user_id: "u1".into(),
            user_name: name.into(),
            user_email: email.into(),
            checked_in: false,
            subscription_date: "2031-01-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn test_matches_name_or_email_case_insensitive() {
        let ana = sub("Ana Souza", "ana@example.com");
        assert!(matches_query(&ana, "ana"));
        assert!(matches_query(&ana, "SOUZA"));
        assert!(matches_query(&ana, "example.com"));
        assert!(!matches_query(&ana, "bruno"));
        assert!(matches_query(&ana, ""));
    }
}
