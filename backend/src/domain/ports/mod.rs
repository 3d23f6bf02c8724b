//! Domain ports for the hexagonal boundary.
//!
//! Driven ports ([`EntityStore`], [`FavoriteLinkStore`]) are implemented by
//! outbound adapters. Driving ports ([`FavoritesCommand`],
//! [`FavoritesQuery`], [`CatalogueQuery`]) are implemented by domain services
//! and consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod catalogue_query;
mod entity_store;
mod favorite_link_store;
mod favorites_command;
mod favorites_query;

pub use catalogue_query::CatalogueQuery;
#[cfg(test)]
pub use entity_store::MockEntityStore;
pub use entity_store::{EntityStore, EntityStoreError};
#[cfg(test)]
pub use favorite_link_store::MockFavoriteLinkStore;
pub use favorite_link_store::{FavoriteLinkStore, FavoriteLinkStoreError};
pub use favorites_command::FavoritesCommand;
pub use favorites_query::FavoritesQuery;
