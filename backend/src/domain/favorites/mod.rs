//! Favourite links between users and catalogue entities.
//!
//! A user may favourite a person or a planet. Both relations share one
//! abstraction, [`FavoriteLink`], whose [`TargetRef`] records which relation
//! the link belongs to. For each `(user, target)` pair there is at most one
//! link; the pair is either absent or present.

mod service;

pub(crate) use service::{map_entity_error, target_not_found};
pub use service::FavoritesService;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{LinkId, Person, PersonId, Planet, PlanetId, User, UserId};

/// Discriminator selecting the person or planet relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    /// Links stored in `favorite_people`.
    Person,
    /// Links stored in `favorites_planets`.
    Planet,
}

impl TargetKind {
    /// Lower-case noun used in user-facing messages.
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Planet => "planet",
        }
    }
}

/// Typed reference to a favourite target.
///
/// # Examples
/// ```
/// use starbase::domain::{PlanetId, TargetKind, TargetRef};
///
/// let target = TargetRef::Planet(PlanetId::new(5));
/// assert_eq!(target.kind(), TargetKind::Planet);
/// assert_eq!(target.raw_id(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetRef {
    /// A person by id.
    Person(PersonId),
    /// A planet by id.
    Planet(PlanetId),
}

impl TargetRef {
    /// Relation the target lives in.
    #[must_use]
    pub const fn kind(self) -> TargetKind {
        match self {
            Self::Person(_) => TargetKind::Person,
            Self::Planet(_) => TargetKind::Planet,
        }
    }

    /// Raw database identifier of the target.
    #[must_use]
    pub const fn raw_id(self) -> i32 {
        match self {
            Self::Person(id) => id.get(),
            Self::Planet(id) => id.get(),
        }
    }
}

impl std::fmt::Display for TargetRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind().noun(), self.raw_id())
    }
}

/// Persisted favourite link. Links are created and destroyed, never updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteLink {
    /// Row identifier within the target kind's relation.
    pub id: LinkId,
    /// Owning user.
    pub user_id: UserId,
    /// Favourited entity.
    pub target: TargetRef,
}

/// A resolved favourite target entity.
#[derive(Debug, Clone, PartialEq)]
pub enum FavoriteTarget {
    /// A favourited person.
    Person(Person),
    /// A favourited planet.
    Planet(Planet),
}

impl FavoriteTarget {
    /// Reference to this entity.
    #[must_use]
    pub const fn target_ref(&self) -> TargetRef {
        match self {
            Self::Person(person) => TargetRef::Person(person.id),
            Self::Planet(planet) => TargetRef::Planet(planet.id),
        }
    }
}

/// A link joined with the entity it points at.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteEntry {
    /// The stored link.
    pub link: FavoriteLink,
    /// The entity the link references.
    pub target: FavoriteTarget,
}

/// Which relations a listing covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteScope {
    /// Person favourites only.
    People,
    /// Planet favourites only.
    Planets,
    /// Person favourites followed by planet favourites.
    All,
}

impl FavoriteScope {
    /// Relations to read, in output order.
    #[must_use]
    pub const fn kinds(self) -> &'static [TargetKind] {
        match self {
            Self::People => &[TargetKind::Person],
            Self::Planets => &[TargetKind::Planet],
            Self::All => &[TargetKind::Person, TargetKind::Planet],
        }
    }
}

/// Result of an add or remove call.
///
/// `AlreadyFavorited` and `NotFavorited` are not failures: the requested end
/// state already holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteStatus {
    /// A new link was inserted.
    Created,
    /// A link for the pair already existed.
    AlreadyFavorited,
    /// The link was removed.
    Deleted,
    /// No link existed for the pair.
    NotFavorited,
}

/// Input for add and remove operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteRequest {
    /// User whose favourites change.
    pub user_id: UserId,
    /// Target entity.
    pub target: TargetRef,
}

impl FavoriteRequest {
    /// Build a request for a person favourite.
    #[must_use]
    pub const fn person(user_id: UserId, person_id: PersonId) -> Self {
        Self {
            user_id,
            target: TargetRef::Person(person_id),
        }
    }

    /// Build a request for a planet favourite.
    #[must_use]
    pub const fn planet(user_id: UserId, planet_id: PlanetId) -> Self {
        Self {
            user_id,
            target: TargetRef::Planet(planet_id),
        }
    }
}

/// Outcome of an add or remove operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteMutation {
    /// User whose favourites were addressed.
    pub user_id: UserId,
    /// Target of the operation.
    pub target: TargetRef,
    /// What happened.
    pub status: FavoriteStatus,
    /// Link created, found, or removed; `None` when no link was involved.
    pub link: Option<FavoriteLink>,
}

/// A user together with their resolved favourites.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoritesListing {
    /// Owner of the favourites.
    pub user: User,
    /// Entries ordered by relation, then by link id.
    pub entries: Vec<FavoriteEntry>,
}
