//! PostgreSQL-backed `FavoriteLinkStore` implementation using Diesel ORM.
//!
//! Person favourites live in `favorite_people` and planet favourites in
//! `favorites_planets`. Each table carries a `UNIQUE (user_id, <target>)`
//! constraint; a losing concurrent insert surfaces as
//! [`FavoriteLinkStoreError::ConstraintViolation`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{FavoriteLinkStore, FavoriteLinkStoreError};
use crate::domain::{
    FavoriteEntry, FavoriteLink, FavoriteTarget, Person, Planet, TargetKind, TargetRef, UserId,
};

use super::diesel_helpers::{map_link_diesel_error, map_pool_error};
use super::models::{
    FavoritePersonRow, FavoritePlanetRow, NewFavoritePersonRow, NewFavoritePlanetRow, PersonRow,
    PlanetRow,
};
use super::pool::{DbPool, PoolError};
use super::schema::{favorite_people, favorites_planets, people, planets};

/// Diesel-backed implementation of the [`FavoriteLinkStore`] port.
#[derive(Clone)]
pub struct DieselFavoriteLinkStore {
    pool: DbPool,
}

impl DieselFavoriteLinkStore {
    /// Create a new store with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> FavoriteLinkStoreError {
    map_pool_error(error, |message| FavoriteLinkStoreError::connection(message))
}

#[async_trait]
impl FavoriteLinkStore for DieselFavoriteLinkStore {
    async fn find_link(
        &self,
        user_id: UserId,
        target: TargetRef,
    ) -> Result<Option<FavoriteLink>, FavoriteLinkStoreError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let link = match target {
            TargetRef::Person(person_id) => favorite_people::table
                .filter(favorite_people::user_id.eq(user_id.get()))
                .filter(favorite_people::people_id.eq(person_id.get()))
                .select(FavoritePersonRow::as_select())
                .first::<FavoritePersonRow>(&mut conn)
                .await
                .optional()
                .map_err(map_link_diesel_error)?
                .map(FavoriteLink::from),
            TargetRef::Planet(planet_id) => favorites_planets::table
                .filter(favorites_planets::user_id.eq(user_id.get()))
                .filter(favorites_planets::planet_id.eq(planet_id.get()))
                .select(FavoritePlanetRow::as_select())
                .first::<FavoritePlanetRow>(&mut conn)
                .await
                .optional()
                .map_err(map_link_diesel_error)?
                .map(FavoriteLink::from),
        };
        Ok(link)
    }

    async fn list_links(
        &self,
        user_id: UserId,
        kind: TargetKind,
    ) -> Result<Vec<FavoriteEntry>, FavoriteLinkStoreError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let entries = match kind {
            TargetKind::Person => favorite_people::table
                .inner_join(people::table)
                .filter(favorite_people::user_id.eq(user_id.get()))
                .order_by(favorite_people::id.asc())
                .select((FavoritePersonRow::as_select(), PersonRow::as_select()))
                .load::<(FavoritePersonRow, PersonRow)>(&mut conn)
                .await
                .map_err(map_link_diesel_error)?
                .into_iter()
                .map(|(link, person)| FavoriteEntry {
                    link: link.into(),
                    target: FavoriteTarget::Person(Person::from(person)),
                })
                .collect(),
            TargetKind::Planet => favorites_planets::table
                .inner_join(planets::table)
                .filter(favorites_planets::user_id.eq(user_id.get()))
                .order_by(favorites_planets::id.asc())
                .select((FavoritePlanetRow::as_select(), PlanetRow::as_select()))
                .load::<(FavoritePlanetRow, PlanetRow)>(&mut conn)
                .await
                .map_err(map_link_diesel_error)?
                .into_iter()
                .map(|(link, planet)| FavoriteEntry {
                    link: link.into(),
                    target: FavoriteTarget::Planet(Planet::from(planet)),
                })
                .collect(),
        };
        Ok(entries)
    }

    async fn insert_link(
        &self,
        user_id: UserId,
        target: TargetRef,
    ) -> Result<FavoriteLink, FavoriteLinkStoreError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let link = match target {
            TargetRef::Person(person_id) => diesel::insert_into(favorite_people::table)
                .values(NewFavoritePersonRow {
                    user_id: user_id.get(),
                    people_id: person_id.get(),
                })
                .returning(FavoritePersonRow::as_returning())
                .get_result::<FavoritePersonRow>(&mut conn)
                .await
                .map_err(map_link_diesel_error)?
                .into(),
            TargetRef::Planet(planet_id) => diesel::insert_into(favorites_planets::table)
                .values(NewFavoritePlanetRow {
                    user_id: user_id.get(),
                    planet_id: planet_id.get(),
                })
                .returning(FavoritePlanetRow::as_returning())
                .get_result::<FavoritePlanetRow>(&mut conn)
                .await
                .map_err(map_link_diesel_error)?
                .into(),
        };
        Ok(link)
    }

    async fn delete_link(&self, link: &FavoriteLink) -> Result<bool, FavoriteLinkStoreError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let removed = match link.target.kind() {
            TargetKind::Person => {
                diesel::delete(favorite_people::table.find(link.id.get()))
                    .execute(&mut conn)
                    .await
            }
            TargetKind::Planet => {
                diesel::delete(favorites_planets::table.find(link.id.get()))
                    .execute(&mut conn)
                    .await
            }
        }
        .map_err(map_link_diesel_error)?;
        Ok(removed > 0)
    }
}
