//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` when a migration changes a table.

diesel::table! {
    /// Registered user accounts.
    users (id) {
        /// Primary key (`SERIAL`).
        id -> Int4,
        /// Unique email address.
        email -> Varchar,
        /// Stored password; never leaves the persistence layer unredacted.
        password -> Varchar,
        /// Whether the account is active.
        is_active -> Bool,
    }
}

diesel::table! {
    /// Catalogue planets.
    planets (id) {
        id -> Int4,
        name -> Varchar,
        population -> Nullable<Int8>,
        climate -> Nullable<Varchar>,
        diameter -> Nullable<Float8>,
    }
}

diesel::table! {
    /// Catalogue people.
    people (id) {
        id -> Int4,
        name -> Varchar,
        birth_year -> Nullable<Int4>,
        gender -> Nullable<Varchar>,
        height -> Nullable<Float8>,
        eye_color -> Nullable<Varchar>,
        /// Home planet; `NULL` when unknown.
        planet_id -> Nullable<Int4>,
    }
}

diesel::table! {
    /// Person favourites. `(user_id, people_id)` is unique.
    favorite_people (id) {
        id -> Int4,
        user_id -> Int4,
        people_id -> Int4,
    }
}

diesel::table! {
    /// Planet favourites. `(user_id, planet_id)` is unique.
    favorites_planets (id) {
        id -> Int4,
        user_id -> Int4,
        planet_id -> Int4,
    }
}

diesel::joinable!(people -> planets (planet_id));
diesel::joinable!(favorite_people -> people (people_id));
diesel::joinable!(favorite_people -> users (user_id));
diesel::joinable!(favorites_planets -> planets (planet_id));
diesel::joinable!(favorites_planets -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(
    favorite_people,
    favorites_planets,
    people,
    planets,
    users,
);
