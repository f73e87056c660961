//! Transient, queued user-facing notifications.
//!
//! [`ToastStore`] is the plain queue (push, dismiss, expiry); the Dioxus
//! layer holds it in a context signal and spawns a timer per toast so each
//! one self-dismisses after its duration unless dismissed earlier. Several
//! toasts can be visible at once; dismissal removes exactly the dismissed
//! entry and preserves the order of the rest.

use dioxus::prelude::*;

pub const DEFAULT_TOAST_MS: f64 = 3000.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast--success",
            ToastLevel::Error => "toast toast--error",
            ToastLevel::Info => "toast toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
    pub created_ms: f64,
    pub duration_ms: f64,
}

impl Toast {
    fn expires_at(&self) -> f64 {
        self.created_ms + self.duration_ms
    }
}

/// The notification queue, independent of any UI runtime.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastStore {
    next_id: u64,
    entries: Vec<Toast>,
}

impl ToastStore {
    pub fn push(&mut self, level: ToastLevel, message: String, now_ms: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            level,
            message,
            created_ms: now_ms,
            duration_ms: DEFAULT_TOAST_MS,
        });
        id
    }

    /// Remove exactly the given entry, keeping the rest in order.
    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|toast| toast.id != id);
    }

    /// Drop every entry whose duration has elapsed.
    pub fn purge_expired(&mut self, now_ms: f64) {
        self.entries.retain(|toast| toast.expires_at() > now_ms);
    }

    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }
}

/// Context handle for pushing notifications from anywhere in the tree.
#[derive(Clone, Copy)]
pub struct Toasts {
    store: Signal<ToastStore>,
}

impl Toasts {
    pub fn push(mut self, level: ToastLevel, message: impl Into<String>) {
        self.store.write().push(level, message.into(), now_ms());
        spawn(async move {
            sleep_ms(DEFAULT_TOAST_MS as u64 + 1).await;
            self.store.write().purge_expired(now_ms());
        });
    }

    pub fn success(self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message);
    }

    pub fn error(self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message);
    }

    pub fn info(self, message: impl Into<String>) {
        self.push(ToastLevel::Info, message);
    }

    pub fn dismiss(mut self, id: u64) {
        self.store.write().dismiss(id);
    }
}

/// Get the notification channel.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

/// Provider component that owns the queue and renders the toast stack.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let store = use_signal(ToastStore::default);
    let toasts = use_context_provider(|| Toasts { store });

    rsx! {
        {children}
        div {
            class: "toast-viewport",
            for toast in store.read().entries().iter().cloned() {
                div {
                    key: "{toast.id}",
                    class: "{toast.level.class()}",
                    span { class: "toast__message", "{toast.message}" }
                    button {
                        class: "toast__dismiss",
                        onclick: move |_| toasts.dismiss(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u64) {
    gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_after_duration() {
        let mut store = ToastStore::default();
        store.push(ToastLevel::Success, "saved".into(), 1000.0);

        store.purge_expired(1000.0 + 2999.0);
        assert_eq!(store.entries().len(), 1);

        store.purge_expired(1000.0 + 3001.0);
        assert!(store.entries().is_empty());
    }

    #[test]
    fn test_dismiss_preserves_order_of_rest() {
        let mut store = ToastStore::default();
        let a = store.push(ToastLevel::Info, "a".into(), 0.0);
        let b = store.push(ToastLevel::Error, "b".into(), 0.0);
        let c = store.push(ToastLevel::Success, "c".into(), 0.0);

        store.dismiss(b);
        let ids: Vec<u64> = store.entries().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![a, c]);

        // dismissing an unknown id is a no-op
        store.dismiss(999);
        assert_eq!(store.entries().len(), 2);
    }

    #[test]
    fn test_multiple_visible_concurrently() {
        let mut store = ToastStore::default();
        store.push(ToastLevel::Info, "first".into(), 0.0);
        store.push(ToastLevel::Info, "second".into(), 100.0);
        assert_eq!(store.entries().len(), 2);

        // only the first has expired at t=3050
        store.purge_expired(3050.0);
        assert_eq!(store.entries().len(), 1);
        assert_eq!(store.entries()[0].message, "second");
    }
}
