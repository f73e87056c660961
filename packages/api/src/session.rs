//! Session persistence: token + user record in a [`KeyValue`] store.
//!
//! The persisted record is best-effort. A corrupt or unparseable user entry
//! is removed and the session restores as logged-out; restore never errors.
//! When the server hands back only a token, the user is reconstructed from
//! the token's claims (`sub` required; `name`, `email` optional; `role`
//! defaults to participant).

use std::sync::Arc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

use crate::types::{Role, User};
use store::KeyValue;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// An authenticated session as persisted on the client.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: Option<User>,
}

/// Reads and writes the session record in a key/value store.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValue>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValue>) -> Self {
        Self { store }
    }

    /// Restore a prior session, if any.
    ///
    /// Fails open: no token means no session, and a corrupt user record is
    /// discarded (falling back to the token's claims where possible).
    pub fn load(&self) -> Option<Session> {
        let token = self.store.get(TOKEN_KEY)?;
        let user = match self.store.get(USER_KEY) {
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(err) => {
                    tracing::warn!(%err, "discarding corrupt persisted user record");
                    self.store.remove(USER_KEY);
                    None
                }
            },
            None => None,
        };
        let user = user.or_else(|| decode_user_claims(&token));
        Some(Session { token, user })
    }

    pub fn save(&self, session: &Session) {
        self.store.set(TOKEN_KEY, &session.token);
        match &session.user {
            Some(user) => {
                if let Ok(raw) = serde_json::to_string(user) {
                    self.store.set(USER_KEY, &raw);
                }
            }
            None => self.store.remove(USER_KEY),
        }
    }

    /// Clear token and user together.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }
}

#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    role: Option<Role>,
}

/// Decode the payload segment of a JWT into a minimal [`User`].
///
/// No signature verification: the server remains the authority, and this only
/// fills UI state when no user record accompanied the token.
pub fn decode_user_claims(token: &str) -> Option<User> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.as_bytes()).ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;
    Some(User {
        id: claims.sub,
        name: claims.name.unwrap_or_default(),
        email: claims.email.unwrap_or_default(),
        role: claims.role.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    fn make_store() -> (SessionStore, MemoryStore) {
        let backing = MemoryStore::new();
        (SessionStore::new(Arc::new(backing.clone())), backing)
    }

    fn fake_jwt(payload: serde_json::Value) -> String {
        let body = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("eyJhbGciOiJIUzI1NiJ9.{body}.sig")
    }

    #[test]
    fn test_save_load_roundtrip() {
        let (sessions, _) = make_store();
        let session = Session {
            token: "tok".into(),
            user: Some(User {
                id: "u1".into(),
                name: "Ana".into(),
                email: "ana@example.com".into(),
                role: Role::Organizer,
            }),
        };
        sessions.save(&session);
        assert_eq!(sessions.load(), Some(session));
    }

    #[test]
    fn test_no_token_means_no_session() {
        let (sessions, backing) = make_store();
        backing.set("user", "{\"id\":\"u1\"}");
        assert!(sessions.load().is_none());
    }

    #[test]
    fn test_corrupt_user_record_discarded() {
        let (sessions, backing) = make_store();
        backing.set("token", "opaque-token");
        backing.set("user", "{not json");

        let restored = sessions.load().expect("token alone restores a session");
        assert_eq!(restored.token, "opaque-token");
        // opaque token carries no decodable claims either
        assert_eq!(restored.user, None);
        // the bad record was removed
        assert!(backing.get("user").is_none());
    }

    #[test]
    fn test_claims_fallback_when_user_missing() {
        let (sessions, backing) = make_store();
        let token = fake_jwt(serde_json::json!({
            "sub": "u9",
            "name": "Bruno",
            "role": "ORGANIZER"
        }));
        backing.set("token", &token);

        let user = sessions.load().unwrap().user.unwrap();
        assert_eq!(user.id, "u9");
        assert_eq!(user.name, "Bruno");
        assert_eq!(user.role, Role::Organizer);
    }

    #[test]
    fn test_claims_role_defaults_to_participant() {
        let user = decode_user_claims(&fake_jwt(serde_json::json!({ "sub": "u2" }))).unwrap();
        assert_eq!(user.role, Role::Participant);
        assert_eq!(user.name, "");
    }

    #[test]
    fn test_legacy_user_role_claim() {
        let user = decode_user_claims(&fake_jwt(serde_json::json!({
            "sub": "u3",
            "role": "USER"
        })))
        .unwrap();
        assert_eq!(user.role, Role::Participant);
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let (sessions, backing) = make_store();
        sessions.save(&Session {
            token: "tok".into(),
            user: None,
        });
        sessions.clear();
        assert!(backing.get("token").is_none());
        assert!(backing.get("user").is_none());
        assert!(sessions.load().is_none());
    }
}
