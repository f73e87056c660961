//! Client-side API layer for the EventSync event service.
//!
//! Holds the domain types, the bearer-token HTTP client, session persistence
//! and form validation. No UI in this crate.

mod client;
mod error;
mod session;
pub mod types;
pub mod validate;

pub use client::Client;
pub use error::ApiError;
pub use session::{decode_user_claims, Session, SessionStore};
pub use types::{AuthResponse, Event, EventDraft, EventPatch, Role, Subscription, User};
