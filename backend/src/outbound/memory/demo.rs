//! Demonstration catalogue served when no database is configured.

use super::InMemoryStore;
use crate::domain::{Person, PersonId, Planet, PlanetId, User, UserId};

impl InMemoryStore {
    /// Create a store holding a small demonstration catalogue: one user, two
    /// people, and two planets.
    ///
    /// # Examples
    /// ```
    /// use starbase::outbound::memory::InMemoryStore;
    ///
    /// let store = InMemoryStore::demo_catalogue();
    /// # let _ = store;
    /// ```
    #[must_use]
    pub fn demo_catalogue() -> Self {
        Self::new()
            .with_user(User::new(UserId::new(1), "luke@rebellion.org", "hunter2", true))
            .with_planet(Planet {
                population: Some(200_000),
                climate: Some("arid".to_owned()),
                diameter: Some(10_465.0),
                ..Planet::named(PlanetId::new(5), "Tatooine")
            })
            .with_planet(Planet {
                population: Some(2_000_000_000),
                climate: Some("temperate".to_owned()),
                diameter: Some(12_500.0),
                ..Planet::named(PlanetId::new(2), "Alderaan")
            })
            .with_person(Person {
                birth_year: Some(19),
                gender: Some("male".to_owned()),
                height: Some(172.0),
                eye_color: Some("blue".to_owned()),
                planet_id: Some(PlanetId::new(5)),
                ..Person::named(PersonId::new(1), "Luke Skywalker")
            })
            .with_person(Person {
                birth_year: Some(19),
                gender: Some("female".to_owned()),
                height: Some(150.0),
                eye_color: Some("brown".to_owned()),
                planet_id: Some(PlanetId::new(2)),
                ..Person::named(PersonId::new(4), "Leia Organa")
            })
    }
}
