//! Driving port for reading a user's favourites.

use async_trait::async_trait;

use crate::domain::{Error, FavoriteScope, FavoritesListing, UserId};

/// Use-case port for listing favourites.
#[async_trait]
pub trait FavoritesQuery: Send + Sync {
    /// List the user's favourites within `scope`.
    ///
    /// # Errors
    ///
    /// Returns a not-found [`Error`] when the user is missing.
    async fn list_favorites(
        &self,
        user_id: UserId,
        scope: FavoriteScope,
    ) -> Result<FavoritesListing, Error>;
}
