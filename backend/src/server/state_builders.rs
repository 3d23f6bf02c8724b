//! Builders wiring driven adapters into HTTP state.

use std::sync::Arc;

use starbase::inbound::http::state::HttpState;
use starbase::outbound::memory::InMemoryStore;
use starbase::outbound::persistence::{DbPool, DieselEntityStore, DieselFavoriteLinkStore};
use tracing::warn;

/// Build handler state over Diesel when a pool is configured, otherwise over
/// the in-memory demonstration catalogue.
pub(super) fn build_http_state(db_pool: Option<&DbPool>) -> HttpState {
    match db_pool {
        Some(pool) => HttpState::from_stores(
            Arc::new(DieselEntityStore::new(pool.clone())),
            Arc::new(DieselFavoriteLinkStore::new(pool.clone())),
        ),
        None => {
            warn!("no database configured; serving the in-memory demo catalogue");
            let store = Arc::new(InMemoryStore::demo_catalogue());
            HttpState::from_stores(store.clone(), store)
        }
    }
}
