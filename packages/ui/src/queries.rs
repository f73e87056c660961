//! Client-side query cache for the three event collections.
//!
//! Each logical resource ("all events", "my events", "attending") carries an
//! epoch. Invalidation bumps the epoch; a fetch takes a ticket for the epoch
//! it started under, and completions whose ticket no longer matches are
//! dropped. At most one fetch per key is in flight at a time, so concurrent
//! readers of the same key share one request.
//!
//! Reconciliation after mutations is uniform cache invalidation: the UI
//! reflects server truth within one round trip, and a failed request leaves
//! the cached lists untouched.

use std::collections::HashMap;

use api::{ApiError, Client, Event};
use dioxus::prelude::*;

use crate::auth::use_client;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryKey {
    AllEvents,
    MyEvents,
    Attending,
}

/// A mutation that just succeeded against the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutation {
    Created,
    Updated,
    Deleted,
    Subscribed,
    Unsubscribed,
    CheckedIn,
}

impl Mutation {
    /// Every key whose underlying collection could have changed.
    ///
    /// Subscribing and unsubscribing move attendee counts, which organizer
    /// views show too, so they fan out to all three keys.
    pub fn affected(self) -> &'static [QueryKey] {
        use QueryKey::*;
        match self {
            Mutation::Created => &[AllEvents, MyEvents],
            Mutation::Updated | Mutation::Deleted => &[AllEvents, MyEvents, Attending],
            Mutation::Subscribed | Mutation::Unsubscribed => &[AllEvents, MyEvents, Attending],
            Mutation::CheckedIn => &[Attending],
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct QueryState {
    epoch: u64,
    /// Epoch the data was fetched under; `None` until the first completion.
    fetched: Option<u64>,
    /// Ticket of the fetch currently in flight, if any.
    in_flight: Option<u64>,
    data: Option<Vec<Event>>,
    error: Option<String>,
}

/// The cache itself: pure state, no I/O.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventCache {
    states: HashMap<QueryKey, QueryState>,
}

impl EventCache {
    fn state(&self, key: QueryKey) -> Option<&QueryState> {
        self.states.get(&key)
    }

    fn state_mut(&mut self, key: QueryKey) -> &mut QueryState {
        self.states.entry(key).or_default()
    }

    pub fn data(&self, key: QueryKey) -> Option<&[Event]> {
        self.state(key)?.data.as_deref()
    }

    pub fn error(&self, key: QueryKey) -> Option<&str> {
        self.state(key)?.error.as_deref()
    }

    /// True while the first load for a key is outstanding.
    pub fn is_loading(&self, key: QueryKey) -> bool {
        match self.state(key) {
            Some(state) => state.data.is_none() && state.error.is_none(),
            None => true,
        }
    }

    /// Force a re-fetch on next read.
    pub fn invalidate(&mut self, key: QueryKey) {
        let state = self.state_mut(key);
        state.epoch += 1;
        state.error = None;
    }

    pub fn after_mutation(&mut self, mutation: Mutation) {
        for &key in mutation.affected() {
            self.invalidate(key);
        }
    }

    /// Whether a fetch should be started for this key.
    pub fn needs_fetch(&self, key: QueryKey) -> bool {
        match self.state(key) {
            Some(state) => {
                state.fetched != Some(state.epoch) && state.in_flight != Some(state.epoch)
            }
            None => true,
        }
    }

    /// Claim the fetch for the current epoch. Returns `None` when a fetch
    /// for this epoch is already in flight or the data is current.
    pub fn begin_fetch(&mut self, key: QueryKey) -> Option<u64> {
        if !self.needs_fetch(key) {
            return None;
        }
        let state = self.state_mut(key);
        state.in_flight = Some(state.epoch);
        Some(state.epoch)
    }

    /// Record a fetch outcome. Completions holding a stale ticket are
    /// dropped; an error keeps any previously cached data.
    pub fn complete(
        &mut self,
        key: QueryKey,
        ticket: u64,
        result: Result<Vec<Event>, String>,
    ) -> bool {
        let state = self.state_mut(key);
        if state.epoch != ticket {
            return false;
        }
        state.in_flight = None;
        state.fetched = Some(ticket);
        match result {
            Ok(events) => {
                state.data = Some(events);
                state.error = None;
            }
            Err(message) => {
                state.error = Some(message);
            }
        }
        true
    }
}

/// Get the shared cache signal.
pub fn use_event_cache() -> Signal<EventCache> {
    use_context::<Signal<EventCache>>()
}

/// Provider component owning the cache for the app.
#[component]
pub fn EventCacheProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(EventCache::default()));

    rsx! {
        {children}
    }
}

async fn fetch(client: &Client, key: QueryKey) -> Result<Vec<Event>, ApiError> {
    match key {
        QueryKey::AllEvents => client.list_events().await,
        QueryKey::MyEvents => client.my_events().await,
        QueryKey::Attending => client.attending_events().await,
    }
}

/// Keep the given key fetched, re-fetching whenever it is invalidated.
/// Returns the cache signal for reading.
pub fn use_events(key: QueryKey) -> Signal<EventCache> {
    let mut cache = use_event_cache();
    let client = use_client();

    use_effect(move || {
        let ticket = if cache.read().needs_fetch(key) {
            cache.write().begin_fetch(key)
        } else {
            None
        };
        if let Some(ticket) = ticket {
            let client = client.clone();
            spawn(async move {
                let result = fetch(&client, key).await.map_err(|err| {
                    tracing::error!(?key, %err, "event query failed");
                    err.to_string()
                });
                cache.write().complete(key, ticket, result);
            });
        }
    });

    cache
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str, count: u32) -> Event {
        Event {
            id: id.into(),
            title: "Tech Meetup".into(),
            description: "An introductory meetup".into(),
            date: "2031-01-01T18:00:00Z".into(),
            location: "Room A".into(),
            max_attendees: 10,
            attendees_count: count,
            organizer_id: "u1".into(),
            checked_in: None,
        }
    }

    #[test]
    fn test_fetch_lifecycle() {
        let mut cache = EventCache::default();
        assert!(cache.needs_fetch(QueryKey::AllEvents));
        assert!(cache.is_loading(QueryKey::AllEvents));

        let ticket = cache.begin_fetch(QueryKey::AllEvents).unwrap();
        // in flight: no second fetch for the same key
        assert!(cache.begin_fetch(QueryKey::AllEvents).is_none());

        assert!(cache.complete(QueryKey::AllEvents, ticket, Ok(vec![event("e1", 0)])));
        assert_eq!(cache.data(QueryKey::AllEvents).unwrap().len(), 1);
        assert!(!cache.needs_fetch(QueryKey::AllEvents));
        assert!(!cache.is_loading(QueryKey::AllEvents));
    }

    #[test]
    fn test_invalidate_forces_refetch() {
        let mut cache = EventCache::default();
        let ticket = cache.begin_fetch(QueryKey::Attending).unwrap();
        cache.complete(QueryKey::Attending, ticket, Ok(vec![]));
        assert!(!cache.needs_fetch(QueryKey::Attending));

        cache.invalidate(QueryKey::Attending);
        assert!(cache.needs_fetch(QueryKey::Attending));
        // the stale data stays readable until the refetch lands
        assert!(cache.data(QueryKey::Attending).is_some());
    }

    #[test]
    fn test_stale_completion_dropped() {
        let mut cache = EventCache::default();
        let stale = cache.begin_fetch(QueryKey::AllEvents).unwrap();
        cache.invalidate(QueryKey::AllEvents);

        assert!(!cache.complete(QueryKey::AllEvents, stale, Ok(vec![event("old", 0)])));
        assert!(cache.data(QueryKey::AllEvents).is_none());

        let fresh = cache.begin_fetch(QueryKey::AllEvents).unwrap();
        assert!(cache.complete(QueryKey::AllEvents, fresh, Ok(vec![event("new", 1)])));
        assert_eq!(cache.data(QueryKey::AllEvents).unwrap()[0].id, "new");
    }

    #[test]
    fn test_error_keeps_previous_data_and_stops_refetching() {
        let mut cache = EventCache::default();
        let ticket = cache.begin_fetch(QueryKey::MyEvents).unwrap();
        cache.complete(QueryKey::MyEvents, ticket, Ok(vec![event("e1", 2)]));

        cache.invalidate(QueryKey::MyEvents);
        let ticket = cache.begin_fetch(QueryKey::MyEvents).unwrap();
        cache.complete(QueryKey::MyEvents, ticket, Err("network error".into()));

        assert_eq!(cache.error(QueryKey::MyEvents), Some("network error"));
        assert_eq!(cache.data(QueryKey::MyEvents).unwrap()[0].id, "e1");
        // no retry loop: the failed epoch counts as fetched
        assert!(!cache.needs_fetch(QueryKey::MyEvents));
    }

    #[test]
    fn test_mutation_fanout() {
        use QueryKey::*;
        assert_eq!(Mutation::Created.affected(), &[AllEvents, MyEvents]);
        assert_eq!(Mutation::Unsubscribed.affected(), &[AllEvents, MyEvents, Attending]);
        assert_eq!(Mutation::CheckedIn.affected(), &[Attending]);

        let mut cache = EventCache::default();
        for key in [AllEvents, MyEvents, Attending] {
            let ticket = cache.begin_fetch(key).unwrap();
            cache.complete(key, ticket, Ok(vec![]));
        }
        cache.after_mutation(Mutation::Subscribed);
        assert!(cache.needs_fetch(AllEvents));
        assert!(cache.needs_fetch(MyEvents));
        assert!(cache.needs_fetch(Attending));

        // a failed mutation never touches the cache, so membership state is
        // unchanged by a 409; there is simply no after_mutation call
    }
}
