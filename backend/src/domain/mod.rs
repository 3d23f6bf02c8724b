//! Domain primitives, services, and ports.
//!
//! The domain is transport agnostic: HTTP handlers and storage adapters live
//! in `inbound` and `outbound` and talk to this module only through the
//! traits in [`ports`].
//!
//! Public surface:
//! - [`User`], [`Person`], [`Planet`] are the stored entities.
//! - [`FavoriteLink`] and [`TargetRef`] model a user's favourites.
//! - [`FavoritesService`] and [`CatalogueService`] implement the driving
//!   ports.
//! - [`Error`] and [`ErrorCode`] form the error payload shared by every
//!   operation.

pub mod catalogue;
mod catalogue_service;
pub mod error;
pub mod favorites;
pub mod ids;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::catalogue::{Person, Planet};
pub use self::catalogue_service::CatalogueService;
pub use self::error::{Error, ErrorCode};
pub use self::favorites::{
    FavoriteEntry, FavoriteLink, FavoriteMutation, FavoriteRequest, FavoriteScope,
    FavoriteStatus, FavoriteTarget, FavoritesListing, FavoritesService, TargetKind, TargetRef,
};
pub use self::ids::{LinkId, PersonId, PlanetId, UserId};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::User;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use starbase::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found("The user with id 1 does not exist"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
