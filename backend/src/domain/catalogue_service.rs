//! Read-through service for catalogue listings.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::favorites::{map_entity_error, target_not_found};
use crate::domain::ports::{CatalogueQuery, EntityStore};
use crate::domain::{Error, Person, PersonId, Planet, PlanetId, TargetRef, User};

/// Catalogue service implementing [`CatalogueQuery`] over an [`EntityStore`].
#[derive(Clone)]
pub struct CatalogueService<E> {
    entities: Arc<E>,
}

impl<E> CatalogueService<E> {
    /// Create a new service over the given store.
    pub fn new(entities: Arc<E>) -> Self {
        Self { entities }
    }
}

#[async_trait]
impl<E> CatalogueQuery for CatalogueService<E>
where
    E: EntityStore,
{
    async fn list_people(&self) -> Result<Vec<Person>, Error> {
        self.entities.list_people().await.map_err(map_entity_error)
    }

    async fn get_person(&self, id: PersonId) -> Result<Person, Error> {
        self.entities
            .find_person(id)
            .await
            .map_err(map_entity_error)?
            .ok_or_else(|| target_not_found(TargetRef::Person(id)))
    }

    async fn list_planets(&self) -> Result<Vec<Planet>, Error> {
        self.entities.list_planets().await.map_err(map_entity_error)
    }

    async fn get_planet(&self, id: PlanetId) -> Result<Planet, Error> {
        self.entities
            .find_planet(id)
            .await
            .map_err(map_entity_error)?
            .ok_or_else(|| target_not_found(TargetRef::Planet(id)))
    }

    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.entities.list_users().await.map_err(map_entity_error)
    }
}
