//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryStore;

/// The demonstration catalogue: one user, two people, and two planets.
pub fn seeded_store() -> InMemoryStore {
    InMemoryStore::demo_catalogue()
}

/// [`HttpState`] wired over [`seeded_store`].
pub fn seeded_state() -> HttpState {
    let store = Arc::new(seeded_store());
    HttpState::from_stores(store.clone(), store)
}
