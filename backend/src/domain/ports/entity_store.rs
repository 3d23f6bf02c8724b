//! Driven port for reading users and catalogue entities.
//!
//! The favourites service treats these lookups as authoritative existence
//! checks. Implementations have no side effects.

use async_trait::async_trait;

use crate::domain::{Person, PersonId, Planet, PlanetId, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by entity store adapters.
    pub enum EntityStoreError {
        /// The store could not be reached.
        Connection {
            /// Adapter-supplied detail.
            message: String,
        } => "entity store connection failed: {message}",
        /// A query failed during execution.
        Query {
            /// Adapter-supplied detail.
            message: String,
        } => "entity store query failed: {message}",
    }
}

/// Read access to users, people, and planets.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Fetch a user by id; `None` when absent.
    async fn find_user(&self, id: UserId) -> Result<Option<User>, EntityStoreError>;

    /// Fetch a person by id; `None` when absent.
    async fn find_person(&self, id: PersonId) -> Result<Option<Person>, EntityStoreError>;

    /// Fetch a planet by id; `None` when absent.
    async fn find_planet(&self, id: PlanetId) -> Result<Option<Planet>, EntityStoreError>;

    /// List every user ordered by id.
    async fn list_users(&self) -> Result<Vec<User>, EntityStoreError>;

    /// List every person ordered by id.
    async fn list_people(&self) -> Result<Vec<Person>, EntityStoreError>;

    /// List every planet ordered by id.
    async fn list_planets(&self) -> Result<Vec<Planet>, EntityStoreError>;
}
