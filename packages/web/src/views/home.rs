//! Public landing page: hero plus a browse-only event grid.

use dioxus::prelude::*;

use ui::components::{Button, ButtonVariant};
use ui::{use_auth, use_events, EventCard, QueryKey};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let cache = use_events(QueryKey::AllEvents);

    let user = auth.user();
    let authenticated = auth.is_authenticated();

    // Anonymous visitors go to login; signed-in users manage registrations
    // from the dashboard.
    let browse_target = move || {
        if authenticated {
            Route::Dashboard {}
        } else {
            Route::Login {}
        }
    };

    let loading = cache.read().is_loading(QueryKey::AllEvents);
    let failed = cache.read().error(QueryKey::AllEvents).is_some();
    let events = cache
        .read()
        .data(QueryKey::AllEvents)
        .map(<[api::Event]>::to_vec)
        .unwrap_or_default();

    rsx! {
        div {
            class: "page",
            header {
                class: "page__header",
                h1 { class: "brand", "EventSync" }
                div {
                    class: "page__header-actions",
                    if let Some(user) = user {
                        span { class: "page__greeting", "Hello, {user.name}" }
                        Button {
                            onclick: move |_| { nav.push(Route::Dashboard {}); },
                            "Dashboard"
                        }
                    } else {
                        Button {
                            onclick: move |_| { nav.push(Route::Login {}); },
                            "Sign in / Register"
                        }
                    }
                }
            }

            section {
                class: "hero",
                h2 { "Discover great events" }
                p { "Join the community to find workshops, conferences and meetups made for you." }
                if !authenticated {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| { nav.push(Route::Login {}); },
                        "Get started"
                    }
                }
            }

            main {
                class: "page__content",
                h3 { "Upcoming events" }

                if loading {
                    p { class: "empty-state", "Loading events..." }
                } else if failed {
                    p { class: "empty-state empty-state--error", "Could not load events." }
                } else if events.is_empty() {
                    div {
                        class: "empty-state",
                        p { "No events found right now." }
                        p { "Check back later for what's new!" }
                    }
                } else {
                    div {
                        class: "event-grid",
                        for event in events {
                            EventCard {
                                key: "{event.id}",
                                event: event.clone(),
                                browse_only: true,
                                on_browse: move |_| { nav.push(browse_target()); },
                            }
                        }
                    }
                }
            }
        }
    }
}
