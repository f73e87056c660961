//! This crate contains all shared UI for the EventSync client.

pub mod components;

mod auth;
pub use auth::{use_auth, use_client, AuthContext, AuthProvider, AuthState};

mod toasts;
pub use toasts::{use_toasts, Toast, ToastLevel, ToastProvider, ToastStore, Toasts, DEFAULT_TOAST_MS};

mod queries;
pub use queries::{use_event_cache, use_events, EventCache, EventCacheProvider, Mutation, QueryKey};

mod event_card;
pub use event_card::EventCard;

mod create_event_modal;
pub use create_event_modal::CreateEventModal;

mod edit_event_modal;
pub use edit_event_modal::EditEventModal;

mod credential_modal;
pub use credential_modal::CredentialModal;

mod check_in_list;
pub use check_in_list::CheckInList;

mod confirm;
pub use confirm::confirm;

mod session_store;
pub use session_store::platform_store;
