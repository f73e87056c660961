//! Signed-in event panel: explore, my events, attending.

use std::collections::HashSet;

use dioxus::prelude::*;

use api::{Event, EventPatch};
use ui::components::{Button, ButtonVariant, TabPanel, TabTrigger, Tabs, TabsList};
use ui::{
    use_auth, use_client, use_event_cache, use_events, use_toasts, CreateEventModal,
    EditEventModal, EventCard, Mutation, QueryKey,
};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let client = use_client();
    let toasts = use_toasts();
    let nav = use_navigator();

    // Keep all three collections fresh while the dashboard is open.
    use_events(QueryKey::AllEvents);
    use_events(QueryKey::MyEvents);
    use_events(QueryKey::Attending);
    let mut cache = use_event_cache();

    let active_tab = use_signal(|| "all".to_string());
    let mut show_create = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Event>::None);
    let mut saving = use_signal(|| false);

    let user = auth.user();
    if !auth.is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    let on_changed = move |mutation: Mutation| {
        cache.write().after_mutation(mutation);
    };

    let handle_logout = {
        let auth = auth.clone();
        move |_| {
            let mut auth = auth.clone();
            auth.logout();
            toasts.info("You signed out.");
            nav.replace(Route::Home {});
        }
    };

    let handle_create = {
        let client = client.clone();
        move |draft: api::EventDraft| {
            let client = client.clone();
            spawn(async move {
                saving.set(true);
                match client.create_event(&draft).await {
                    Ok(_) => {
                        toasts.success("Event created successfully!");
                        show_create.set(false);
                        cache.write().after_mutation(Mutation::Created);
                    }
                    Err(err) => {
                        tracing::error!(%err, "create event failed");
                        toasts.error(format!("Could not create the event: {err}"));
                    }
                }
                saving.set(false);
            });
        }
    };

    let handle_update = {
        let client = client.clone();
        move |draft: api::EventDraft| {
            let Some(event) = editing() else { return };
            let client = client.clone();
            spawn(async move {
                saving.set(true);
                let patch = EventPatch::from(draft);
                match client.update_event(&event.id, &patch).await {
                    Ok(_) => {
                        toasts.success("Event updated successfully!");
                        editing.set(None);
                        cache.write().after_mutation(Mutation::Updated);
                    }
                    Err(err) => {
                        tracing::error!(%err, "update event failed");
                        toasts.error(format!("Could not update the event: {err}"));
                    }
                }
                saving.set(false);
            });
        }
    };

    let snapshot = cache.read();
    let attending: Vec<Event> = snapshot
        .data(QueryKey::Attending)
        .map(<[Event]>::to_vec)
        .unwrap_or_default();
    let my_events: Vec<Event> = snapshot
        .data(QueryKey::MyEvents)
        .map(<[Event]>::to_vec)
        .unwrap_or_default();
    let subscribed_ids: HashSet<String> = attending.iter().map(|e| e.id.clone()).collect();
    let user_id = user.as_ref().map(|u| u.id.clone()).unwrap_or_default();
    let explore: Vec<Event> = snapshot
        .data(QueryKey::AllEvents)
        .map(|events| {
            events
                .iter()
                .filter(|e| e.organizer_id != user_id && !subscribed_ids.contains(&e.id))
                .cloned()
                .collect()
        })
        .unwrap_or_default();
    let loading = snapshot.is_loading(QueryKey::AllEvents);
    drop(snapshot);

    let user_name = user.map(|u| u.name).unwrap_or_default();

    rsx! {
        div {
            class: "page",
            header {
                class: "page__header",
                div {
                    class: "page__header-title",
                    h1 {
                        class: "brand",
                        onclick: move |_| { nav.push(Route::Home {}); },
                        "EventSync"
                    }
                    span { class: "page__crumb", "/ Dashboard" }
                }
                div {
                    class: "page__header-actions",
                    span { class: "page__greeting", "{user_name}" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: handle_logout,
                        "Sign out"
                    }
                }
            }

            main {
                class: "page__content",
                div {
                    class: "page__content-header",
                    h2 { "Event panel" }
                    Button {
                        onclick: move |_| show_create.set(true),
                        "+ Create event"
                    }
                }

                if loading && explore.is_empty() && my_events.is_empty() && attending.is_empty() {
                    p { class: "empty-state", "Loading..." }
                } else {
                    Tabs {
                        active: active_tab,
                        TabsList {
                            TabTrigger { value: "all", "Explore" }
                            TabTrigger { value: "my-events", "Created by me" }
                            TabTrigger { value: "attending", "My registrations" }
                        }

                        TabPanel {
                            value: "all",
                            if explore.is_empty() {
                                p { class: "empty-state", "No new events to discover." }
                            } else {
                                div {
                                    class: "event-grid",
                                    for event in explore {
                                        EventCard {
                                            key: "{event.id}",
                                            event: event.clone(),
                                            subscribed: false,
                                            on_changed: on_changed,
                                        }
                                    }
                                }
                            }
                        }

                        TabPanel {
                            value: "my-events",
                            if my_events.is_empty() {
                                p { class: "empty-state", "You have not created any events yet." }
                            } else {
                                div {
                                    class: "event-grid",
                                    for event in my_events {
                                        EventCard {
                                            key: "{event.id}",
                                            event: event.clone(),
                                            subscribed: subscribed_ids.contains(&event.id),
                                            on_changed: on_changed,
                                            on_edit: move |event| editing.set(Some(event)),
                                        }
                                    }
                                }
                            }
                        }

                        TabPanel {
                            value: "attending",
                            if attending.is_empty() {
                                p { class: "empty-state", "You are not registered for any events." }
                            } else {
                                div {
                                    class: "event-grid",
                                    for event in attending {
                                        EventCard {
                                            key: "{event.id}",
                                            event: event.clone(),
                                            subscribed: true,
                                            on_changed: on_changed,
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if show_create() {
            CreateEventModal {
                busy: saving(),
                on_close: move |_| show_create.set(false),
                on_submit: handle_create,
            }
        }

        if let Some(event) = editing() {
            EditEventModal {
                event: event,
                busy: saving(),
                on_close: move |_| editing.set(None),
                on_submit: handle_update,
            }
        }
    }
}
