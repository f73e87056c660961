//! Authentication context and hooks for the UI.
//!
//! The session is an explicit context-provided object: [`AuthProvider`] owns
//! one [`Client`] and one [`SessionStore`] for the whole app and exposes them
//! through [`AuthContext`]. Logging in persists the session and installs the
//! bearer token on the shared client; logging out clears both, so no request
//! issued afterwards carries the old token.

use api::{decode_user_claims, Client, Session, SessionStore, User};
use dioxus::prelude::*;

use crate::session_store::platform_store;

/// Authentication state for the application.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    token: Option<String>,
}

impl AuthState {
    /// Derived purely from token presence.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Handle to the current session, provided via context by [`AuthProvider`].
#[derive(Clone)]
pub struct AuthContext {
    state: Signal<AuthState>,
    client: Client,
    sessions: SessionStore,
}

impl AuthContext {
    pub fn state(&self) -> AuthState {
        self.state.read().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    /// Persist the session and mark it authenticated.
    ///
    /// When the server returned no user record, the token's claims fill in a
    /// minimal one.
    pub fn login(&mut self, token: String, user: Option<User>) {
        let user = user.or_else(|| decode_user_claims(&token));
        self.sessions.save(&Session {
            token: token.clone(),
            user: user.clone(),
        });
        self.client.set_token(&token);
        self.state.set(AuthState {
            user,
            token: Some(token),
        });
    }

    /// Clear all persisted identity and strip the bearer token.
    pub fn logout(&mut self) {
        self.sessions.clear();
        self.client.clear_token();
        self.state.set(AuthState::default());
    }
}

/// Get the current authentication context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

/// Get the shared API client.
pub fn use_client() -> Client {
    use_context::<Client>()
}

fn restore(client: &Client, sessions: &SessionStore) -> AuthState {
    match sessions.load() {
        Some(session) => {
            client.set_token(&session.token);
            AuthState {
                user: session.user,
                token: Some(session.token),
            }
        }
        None => AuthState::default(),
    }
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let client = use_context_provider(Client::default);
    let sessions = use_hook(|| SessionStore::new(platform_store()));

    let state = use_signal({
        let client = client.clone();
        let sessions = sessions.clone();
        move || restore(&client, &sessions)
    });

    use_context_provider(|| AuthContext {
        state,
        client,
        sessions,
    });

    rsx! {
        {children}
    }
}
