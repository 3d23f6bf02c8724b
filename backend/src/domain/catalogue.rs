//! Catalogue entities: people and planets.
//!
//! Both are read-only from the point of view of this service. Apart from the
//! identifier and the unique name every column is optional, matching the
//! source data where many values are unknown.

use super::{PersonId, PlanetId};

/// A planet from the catalogue.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    /// Primary key.
    pub id: PlanetId,
    /// Unique planet name.
    pub name: String,
    /// Number of inhabitants; some worlds exceed `i32::MAX`.
    pub population: Option<i64>,
    /// Free-form climate description, e.g. `"arid"`.
    pub climate: Option<String>,
    /// Diameter in kilometres.
    pub diameter: Option<f64>,
}

impl Planet {
    /// Create a planet with only its identifier and name set.
    ///
    /// # Examples
    /// ```
    /// use starbase::domain::{Planet, PlanetId};
    ///
    /// let planet = Planet::named(PlanetId::new(5), "Tatooine");
    /// assert!(planet.population.is_none());
    /// ```
    pub fn named(id: PlanetId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            population: None,
            climate: None,
            diameter: None,
        }
    }
}

/// A character from the catalogue.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    /// Primary key.
    pub id: PersonId,
    /// Unique character name.
    pub name: String,
    /// Birth year as stored by the catalogue.
    pub birth_year: Option<i32>,
    /// Free-form gender description.
    pub gender: Option<String>,
    /// Height in centimetres.
    pub height: Option<f64>,
    /// Eye colour.
    pub eye_color: Option<String>,
    /// Home planet reference.
    pub planet_id: Option<PlanetId>,
}

impl Person {
    /// Create a person with only its identifier and name set.
    pub fn named(id: PersonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            birth_year: None,
            gender: None,
            height: None,
            eye_color: None,
            planet_id: None,
        }
    }
}
