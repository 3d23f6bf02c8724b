//! PostgreSQL-backed `EntityStore` implementation using Diesel ORM.
//!
//! Read-only lookups over `users`, `people`, and `planets`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{EntityStore, EntityStoreError};
use crate::domain::{Person, PersonId, Planet, PlanetId, User, UserId};

use super::diesel_helpers::{map_basic_diesel_error, map_pool_error};
use super::models::{PersonRow, PlanetRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{people, planets, users};

/// Diesel-backed implementation of the [`EntityStore`] port.
#[derive(Clone)]
pub struct DieselEntityStore {
    pool: DbPool,
}

impl DieselEntityStore {
    /// Create a new store with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> EntityStoreError {
    map_pool_error(error, |message| EntityStoreError::connection(message))
}

fn diesel_error(error: diesel::result::Error) -> EntityStoreError {
    map_basic_diesel_error(error, EntityStoreError::query, EntityStoreError::connection)
}

#[async_trait]
impl EntityStore for DieselEntityStore {
    async fn find_user(&self, id: UserId) -> Result<Option<User>, EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row: Option<UserRow> = users::table
            .find(id.get())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        Ok(row.map(User::from))
    }

    async fn find_person(&self, id: PersonId) -> Result<Option<Person>, EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row: Option<PersonRow> = people::table
            .find(id.get())
            .select(PersonRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        Ok(row.map(Person::from))
    }

    async fn find_planet(&self, id: PlanetId) -> Result<Option<Planet>, EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row: Option<PlanetRow> = planets::table
            .find(id.get())
            .select(PlanetRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        Ok(row.map(Planet::from))
    }

    async fn list_users(&self) -> Result<Vec<User>, EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows: Vec<UserRow> = users::table
            .select(UserRow::as_select())
            .order_by(users::id.asc())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn list_people(&self) -> Result<Vec<Person>, EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows: Vec<PersonRow> = people::table
            .select(PersonRow::as_select())
            .order_by(people::id.asc())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(rows.into_iter().map(Person::from).collect())
    }

    async fn list_planets(&self) -> Result<Vec<Planet>, EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows: Vec<PlanetRow> = planets::table
            .select(PlanetRow::as_select())
            .order_by(planets::id.asc())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(rows.into_iter().map(Planet::from).collect())
    }
}
