//! Driving port for favourite mutations.

use async_trait::async_trait;

use crate::domain::{Error, FavoriteMutation, FavoriteRequest};

/// Use-case port for adding and removing favourites.
///
/// Both operations are idempotent with respect to the final state: repeating
/// an add reports [`crate::domain::FavoriteStatus::AlreadyFavorited`] and
/// repeating a remove reports [`crate::domain::FavoriteStatus::NotFavorited`].
#[async_trait]
pub trait FavoritesCommand: Send + Sync {
    /// Ensure the favourite exists.
    ///
    /// # Errors
    ///
    /// Returns a not-found [`Error`] when the user or the target is missing.
    async fn add_favorite(&self, request: FavoriteRequest) -> Result<FavoriteMutation, Error>;

    /// Ensure the favourite does not exist.
    ///
    /// # Errors
    ///
    /// Returns a not-found [`Error`] when the user or the target is missing.
    async fn remove_favorite(&self, request: FavoriteRequest)
    -> Result<FavoriteMutation, Error>;
}
