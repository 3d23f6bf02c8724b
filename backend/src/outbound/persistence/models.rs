//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Conversions into domain types live here so
//! both adapters share them.

use diesel::prelude::*;

use crate::domain::{
    FavoriteLink, LinkId, Person, PersonId, Planet, PlanetId, TargetRef, User, UserId,
};

use super::schema::{favorite_people, favorites_planets, people, planets, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self::new(UserId::new(row.id), row.email, row.password, row.is_active)
    }
}

/// Row struct for reading from the planets table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = planets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PlanetRow {
    pub id: i32,
    pub name: String,
    pub population: Option<i64>,
    pub climate: Option<String>,
    pub diameter: Option<f64>,
}

impl From<PlanetRow> for Planet {
    fn from(row: PlanetRow) -> Self {
        Self {
            id: PlanetId::new(row.id),
            name: row.name,
            population: row.population,
            climate: row.climate,
            diameter: row.diameter,
        }
    }
}

/// Row struct for reading from the people table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = people)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PersonRow {
    pub id: i32,
    pub name: String,
    pub birth_year: Option<i32>,
    pub gender: Option<String>,
    pub height: Option<f64>,
    pub eye_color: Option<String>,
    pub planet_id: Option<i32>,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Self {
            id: PersonId::new(row.id),
            name: row.name,
            birth_year: row.birth_year,
            gender: row.gender,
            height: row.height,
            eye_color: row.eye_color,
            planet_id: row.planet_id.map(PlanetId::new),
        }
    }
}

// ---------------------------------------------------------------------------
// Favourite link models
// ---------------------------------------------------------------------------

/// Row struct for reading from the favorite_people table.
#[derive(Debug, Clone, Copy, Queryable, Selectable)]
#[diesel(table_name = favorite_people)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FavoritePersonRow {
    pub id: i32,
    pub user_id: i32,
    pub people_id: i32,
}

impl From<FavoritePersonRow> for FavoriteLink {
    fn from(row: FavoritePersonRow) -> Self {
        Self {
            id: LinkId::new(row.id),
            user_id: UserId::new(row.user_id),
            target: TargetRef::Person(PersonId::new(row.people_id)),
        }
    }
}

/// Insertable struct for new person favourites.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = favorite_people)]
pub(crate) struct NewFavoritePersonRow {
    pub user_id: i32,
    pub people_id: i32,
}

/// Row struct for reading from the favorites_planets table.
#[derive(Debug, Clone, Copy, Queryable, Selectable)]
#[diesel(table_name = favorites_planets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FavoritePlanetRow {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: i32,
}

impl From<FavoritePlanetRow> for FavoriteLink {
    fn from(row: FavoritePlanetRow) -> Self {
        Self {
            id: LinkId::new(row.id),
            user_id: UserId::new(row.user_id),
            target: TargetRef::Planet(PlanetId::new(row.planet_id)),
        }
    }
}

/// Insertable struct for new planet favourites.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = favorites_planets)]
pub(crate) struct NewFavoritePlanetRow {
    pub user_id: i32,
    pub planet_id: i32,
}
