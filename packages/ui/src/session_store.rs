//! Platform-appropriate session persistence.
//!
//! - **Web** (WASM + `web` feature): browser localStorage via [`store::WebStore`]
//! - **Native** (tests, tooling): in-memory via [`store::MemoryStore`]

use std::sync::Arc;

use store::KeyValue;

/// The key/value backend the session layer persists into.
pub fn platform_store() -> Arc<dyn KeyValue> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Arc::new(store::WebStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Arc::new(store::MemoryStore::new())
    }
}
