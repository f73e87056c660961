//! HTTP client for the event service.
//!
//! A thin wrapper over `reqwest` with a shared bearer-token slot. The token
//! slot is written by the session layer on login/logout and read by every
//! outgoing request; clones of a `Client` share the same slot, so installing
//! or stripping the token takes effect everywhere at once. No retries, no
//! backoff; failures propagate to the caller.

use std::sync::{Arc, RwLock};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, ServerMessage};
use crate::types::{AuthResponse, Event, EventDraft, EventPatch, Subscription};
use crate::validate::RegisterPayload;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl Default for Client {
    fn default() -> Self {
        let base = option_env!("EVENTSYNC_API_URL").unwrap_or(DEFAULT_BASE_URL);
        Self::new(base)
    }
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// Install the bearer token used by all subsequent requests.
    pub fn set_token(&self, token: &str) {
        *self.token.write().unwrap() = Some(token.to_string());
    }

    /// Strip the bearer token. Requests issued afterwards carry no
    /// Authorization header.
    pub fn clear_token(&self) {
        *self.token.write().unwrap() = None;
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap().clone()
    }

    pub fn has_token(&self) -> bool {
        self.token.read().unwrap().is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let req = match self.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        };
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let message = match resp.json::<ServerMessage>().await {
            Ok(body) => body.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };
        tracing::warn!(status = status.as_u16(), %message, "request rejected");
        Err(ApiError::from_status(status.as_u16(), message))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.send(self.http.get(self.url(path))).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self.send(self.http.post(self.url(path)).json(body)).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.http.post(self.url(path))).await?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.http.delete(self.url(path))).await?;
        Ok(())
    }

    // --- auth ---

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = serde_json::json!({ "email": email, "password": password });
        self.post_json("/api/auth/login", &body).await
    }

    pub async fn register(&self, payload: &RegisterPayload) -> Result<(), ApiError> {
        self.send(self.http.post(self.url("/api/auth/register")).json(payload))
            .await?;
        Ok(())
    }

    // --- events ---

    pub async fn list_events(&self) -> Result<Vec<Event>, ApiError> {
        self.get_json("/api/events").await
    }

    pub async fn my_events(&self) -> Result<Vec<Event>, ApiError> {
        self.get_json("/api/events/my-events").await
    }

    pub async fn attending_events(&self) -> Result<Vec<Event>, ApiError> {
        self.get_json("/api/events/attending").await
    }

    pub async fn create_event(&self, draft: &EventDraft) -> Result<Event, ApiError> {
        self.post_json("/api/events", draft).await
    }

    pub async fn update_event(&self, id: &str, patch: &EventPatch) -> Result<Event, ApiError> {
        let resp = self
            .send(
                self.http
                    .put(self.url(&format!("/api/events/{id}")))
                    .json(patch),
            )
            .await?;
        resp.json::<Event>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn delete_event(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/events/{id}")).await
    }

    // --- subscriptions ---

    /// Join an event. With `user_id`, subscribes that user (organizer flow);
    /// without, subscribes the caller. May fail with 409 on full/duplicate.
    pub async fn subscribe(&self, event_id: &str, user_id: Option<&str>) -> Result<(), ApiError> {
        self.post_empty(&subscribe_path(event_id, user_id)).await
    }

    /// Leave an event.
    pub async fn unsubscribe(&self, event_id: &str, user_id: Option<&str>) -> Result<(), ApiError> {
        self.delete(&subscribe_path(event_id, user_id)).await
    }

    pub async fn subscriptions(&self, event_id: &str) -> Result<Vec<Subscription>, ApiError> {
        self.get_json(&format!("/api/events/{event_id}/subscriptions"))
            .await
    }

    pub async fn check_in(&self, event_id: &str, user_id: &str) -> Result<(), ApiError> {
        self.post_empty(&format!("/api/events/{event_id}/checkin/{user_id}"))
            .await
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn subscribe_path(event_id: &str, user_id: Option<&str>) -> String {
    match user_id {
        Some(uid) => format!("/api/events/{event_id}/subscribe/{uid}"),
        None => format!("/api/events/{event_id}/subscribe"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_slot_shared_across_clones() {
        let client = Client::new("http://localhost:8080");
        let clone = client.clone();

        client.set_token("abc");
        assert_eq!(clone.token().as_deref(), Some("abc"));
        assert!(clone.has_token());

        clone.clear_token();
        assert!(client.token().is_none());
        assert!(!client.has_token());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = Client::new("http://api.example.com/");
        assert_eq!(client.url("/api/events"), "http://api.example.com/api/events");
    }

    #[test]
    fn test_subscribe_path() {
        assert_eq!(subscribe_path("e1", None), "/api/events/e1/subscribe");
        assert_eq!(
            subscribe_path("e1", Some("u2")),
            "/api/events/e1/subscribe/u2"
        );
    }
}
