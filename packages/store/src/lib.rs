//! Key/value persistence for client state (session token and user record).
//!
//! [`KeyValue`] is the storage seam: [`WebStore`] persists into the browser's
//! localStorage on the **web platform**, [`MemoryStore`] backs native builds
//! and tests.

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web::WebStore;

/// A minimal string key/value store.
///
/// Implementations never surface storage failures: a broken or unavailable
/// backend degrades to "no persisted data" rather than crashing the UI.
pub trait KeyValue: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
