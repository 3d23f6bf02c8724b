//! Shared HTTP adapter state.
//!
//! Handlers receive this state via `actix_web::web::Data` and depend only on
//! the driving ports, so they can be tested without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CatalogueQuery, EntityStore, FavoriteLinkStore, FavoritesCommand, FavoritesQuery,
};
use crate::domain::{CatalogueService, FavoritesService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Add and remove favourites.
    pub favorites: Arc<dyn FavoritesCommand>,
    /// List favourites.
    pub favorites_query: Arc<dyn FavoritesQuery>,
    /// Catalogue read-through.
    pub catalogue: Arc<dyn CatalogueQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(
        favorites: Arc<dyn FavoritesCommand>,
        favorites_query: Arc<dyn FavoritesQuery>,
        catalogue: Arc<dyn CatalogueQuery>,
    ) -> Self {
        Self {
            favorites,
            favorites_query,
            catalogue,
        }
    }

    /// Wire the domain services over a pair of driven adapters.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use starbase::inbound::http::state::HttpState;
    /// use starbase::outbound::memory::InMemoryStore;
    ///
    /// let store = Arc::new(InMemoryStore::new());
    /// let state = HttpState::from_stores(store.clone(), store);
    /// let _catalogue = state.catalogue.clone();
    /// ```
    pub fn from_stores<E, L>(entities: Arc<E>, links: Arc<L>) -> Self
    where
        E: EntityStore + 'static,
        L: FavoriteLinkStore + 'static,
    {
        let favorites = Arc::new(FavoritesService::new(entities.clone(), links));
        let catalogue = Arc::new(CatalogueService::new(entities));
        Self::new(favorites.clone(), favorites, catalogue)
    }
}
