//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the [`EntityStore`] and [`FavoriteLinkStore`]
//! ports backed by PostgreSQL through `diesel-async` and a `bb8` pool.
//!
//! - **Thin adapters**: the stores translate between Diesel rows and domain
//!   types and contain no business rules.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Typed errors**: Diesel and pool failures map to the port error enums.
//!
//! # Example
//!
//! ```ignore
//! use starbase::outbound::persistence::{DbPool, DieselEntityStore, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgresql://localhost/starwars")).await?;
//! let store = DieselEntityStore::new(pool);
//! ```
//!
//! [`EntityStore`]: crate::domain::ports::EntityStore
//! [`FavoriteLinkStore`]: crate::domain::ports::FavoriteLinkStore

mod diesel_entity_store;
mod diesel_favorite_link_store;
mod diesel_helpers;
mod models;
mod pool;
mod schema;

pub use diesel_entity_store::DieselEntityStore;
pub use diesel_favorite_link_store::DieselFavoriteLinkStore;
pub use pool::{DbPool, PoolConfig, PoolError};
