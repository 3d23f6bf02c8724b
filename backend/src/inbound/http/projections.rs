//! JSON projections for HTTP responses.
//!
//! Domain types carry no serialisation of their own; these views fix the
//! wire shape. Field names are snake_case to match existing clients.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{
    FavoriteEntry, FavoriteLink, FavoriteMutation, FavoriteStatus, FavoriteTarget, Person, Planet,
    TargetRef, User,
};

/// Public user fields. The password is never projected.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UserView {
    /// User identifier.
    #[schema(example = 1)]
    pub id: i32,
    /// Unique email address.
    #[schema(example = "luke@rebellion.org")]
    pub email: String,
    /// Whether the account is active.
    pub is_active: bool,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().get(),
            email: user.email().to_owned(),
            is_active: user.is_active(),
        }
    }
}

/// Planet fields.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PlanetView {
    /// Planet identifier.
    #[schema(example = 5)]
    pub id: i32,
    /// Unique planet name.
    #[schema(example = "Tatooine")]
    pub name: String,
    /// Number of inhabitants, when known.
    pub population: Option<i64>,
    /// Climate description.
    pub climate: Option<String>,
    /// Diameter in kilometres.
    pub diameter: Option<f64>,
}

impl From<Planet> for PlanetView {
    fn from(planet: Planet) -> Self {
        Self {
            id: planet.id.get(),
            name: planet.name,
            population: planet.population,
            climate: planet.climate,
            diameter: planet.diameter,
        }
    }
}

/// Person fields.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PersonView {
    /// Person identifier.
    #[schema(example = 1)]
    pub id: i32,
    /// Unique character name.
    #[schema(example = "Luke Skywalker")]
    pub name: String,
    /// Birth year.
    pub birth_year: Option<i32>,
    /// Gender description.
    pub gender: Option<String>,
    /// Height in centimetres.
    pub height: Option<f64>,
    /// Eye colour.
    pub eye_color: Option<String>,
    /// Home planet identifier.
    pub planet_id: Option<i32>,
}

impl From<Person> for PersonView {
    fn from(person: Person) -> Self {
        Self {
            id: person.id.get(),
            name: person.name,
            birth_year: person.birth_year,
            gender: person.gender,
            height: person.height,
            eye_color: person.eye_color,
            planet_id: person.planet_id.map(|id| id.get()),
        }
    }
}

/// A stored favourite link; exactly one of `person_id` and `planet_id` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FavoriteLinkView {
    /// Link identifier within its relation.
    pub id: i32,
    /// Owning user.
    pub user_id: i32,
    /// Favourited person, for person links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<i32>,
    /// Favourited planet, for planet links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planet_id: Option<i32>,
}

impl From<FavoriteLink> for FavoriteLinkView {
    fn from(link: FavoriteLink) -> Self {
        let (person_id, planet_id) = match link.target {
            TargetRef::Person(id) => (Some(id.get()), None),
            TargetRef::Planet(id) => (None, Some(id.get())),
        };
        Self {
            id: link.id.get(),
            user_id: link.user_id.get(),
            person_id,
            planet_id,
        }
    }
}

/// One favourite entry, serialised as `{"person": {...}}` or
/// `{"planet": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteEntryView {
    /// A favourite person.
    Person(PersonView),
    /// A favourite planet.
    Planet(PlanetView),
}

impl From<FavoriteEntry> for FavoriteEntryView {
    fn from(entry: FavoriteEntry) -> Self {
        match entry.target {
            FavoriteTarget::Person(person) => Self::Person(person.into()),
            FavoriteTarget::Planet(planet) => Self::Planet(planet.into()),
        }
    }
}

/// Response body for add and remove operations.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FavoriteMutationResponse {
    /// Outcome message.
    #[schema(
        example = "The planet with id 5 has been correctly added to the favorites of the user with id 1"
    )]
    pub msg: String,
    /// Machine-readable outcome.
    pub status: FavoriteStatus,
    /// The link involved, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<FavoriteLinkView>,
}

impl From<FavoriteMutation> for FavoriteMutationResponse {
    fn from(mutation: FavoriteMutation) -> Self {
        Self {
            msg: mutation_message(&mutation),
            status: mutation.status,
            favorite: mutation.link.map(FavoriteLinkView::from),
        }
    }
}

/// Human-readable outcome of a mutation.
///
/// # Examples
/// ```
/// use starbase::domain::{FavoriteMutation, FavoriteStatus, PlanetId, TargetRef, UserId};
/// use starbase::inbound::http::projections::mutation_message;
///
/// let mutation = FavoriteMutation {
///     user_id: UserId::new(1),
///     target: TargetRef::Planet(PlanetId::new(5)),
///     status: FavoriteStatus::NotFavorited,
///     link: None,
/// };
/// assert_eq!(
///     mutation_message(&mutation),
///     "The planet with id 5 is not a favorite for the user with id 1"
/// );
/// ```
pub fn mutation_message(mutation: &FavoriteMutation) -> String {
    let noun = mutation.target.kind().noun();
    let target_id = mutation.target.raw_id();
    let user_id = mutation.user_id;
    match mutation.status {
        FavoriteStatus::Created => format!(
            "The {noun} with id {target_id} has been correctly added to the favorites of the user with id {user_id}"
        ),
        FavoriteStatus::AlreadyFavorited => format!(
            "The {noun} with id {target_id} is already a favorite for the user with id {user_id}"
        ),
        FavoriteStatus::Deleted => format!(
            "The {noun} with id {target_id} has been correctly deleted from the favorites of the user with id {user_id}"
        ),
        FavoriteStatus::NotFavorited => format!(
            "The {noun} with id {target_id} is not a favorite for the user with id {user_id}"
        ),
    }
}

/// Response body for `GET /favoritePeople/user/{user_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PeopleFavoritesResponse {
    /// Always `"ok"`.
    #[schema(example = "ok")]
    pub msg: String,
    /// Favourite people in link order.
    pub people_favorite: Vec<FavoriteEntryView>,
    /// Owner of the favourites.
    pub user: UserView,
}

/// Response body for `GET /favoritesPlanets/user/{user_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PlanetsFavoritesResponse {
    /// Always `"ok"`.
    #[schema(example = "ok")]
    pub msg: String,
    /// Favourite planets in link order.
    pub planets_favorites: Vec<FavoriteEntryView>,
    /// Owner of the favourites.
    pub user: UserView,
}

/// Response body for `GET /users/favorites/{user_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AllFavoritesResponse {
    /// Always `"ok"`.
    #[schema(example = "ok")]
    pub msg: String,
    /// Favourite people followed by favourite planets.
    pub results: Vec<FavoriteEntryView>,
    /// Owner of the favourites.
    pub user: UserView,
}

/// Response body for `GET /people`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PeopleResponse {
    /// Always `"ok"`.
    #[schema(example = "ok")]
    pub msg: String,
    /// Requested records.
    pub results: Vec<PersonView>,
}

/// Response body for `GET /people/{people_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PersonResponse {
    /// Always `"ok"`.
    #[schema(example = "ok")]
    pub msg: String,
    /// Requested records.
    pub results: PersonView,
}

/// Response body for `GET /planets`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PlanetsResponse {
    /// Always `"ok"`.
    #[schema(example = "ok")]
    pub msg: String,
    /// Requested records.
    pub results: Vec<PlanetView>,
}

/// Response body for `GET /planets/{planet_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PlanetResponse {
    /// Always `"ok"`.
    #[schema(example = "ok")]
    pub msg: String,
    /// Requested records.
    pub results: PlanetView,
}

/// Response body for `GET /users`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UsersResponse {
    /// Always `"ok"`.
    #[schema(example = "ok")]
    pub msg: String,
    /// Requested records.
    pub results: Vec<UserView>,
}

pub(crate) const OK: &str = "ok";

pub(crate) fn entry_views(entries: Vec<FavoriteEntry>) -> Vec<FavoriteEntryView> {
    entries.into_iter().map(FavoriteEntryView::from).collect()
}
