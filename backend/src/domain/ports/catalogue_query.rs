//! Driving port for catalogue read-through endpoints.

use async_trait::async_trait;

use crate::domain::{Error, Person, PersonId, Planet, PlanetId, User};

/// Use-case port for listing and fetching catalogue entities.
#[async_trait]
pub trait CatalogueQuery: Send + Sync {
    /// All people ordered by id.
    async fn list_people(&self) -> Result<Vec<Person>, Error>;

    /// One person, or a not-found error.
    async fn get_person(&self, id: PersonId) -> Result<Person, Error>;

    /// All planets ordered by id.
    async fn list_planets(&self) -> Result<Vec<Planet>, Error>;

    /// One planet, or a not-found error.
    async fn get_planet(&self, id: PlanetId) -> Result<Planet, Error>;

    /// All users ordered by id.
    async fn list_users(&self) -> Result<Vec<User>, Error>;
}
