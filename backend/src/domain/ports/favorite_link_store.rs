//! Driven port for the favourite link relations.
//!
//! The store is a keyed relation with no business rules. It must enforce a
//! uniqueness constraint on `(user_id, target_id)` per relation so that two
//! racing inserts resolve to one row and one
//! [`FavoriteLinkStoreError::ConstraintViolation`].

use async_trait::async_trait;

use crate::domain::{FavoriteEntry, FavoriteLink, TargetKind, TargetRef, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by favourite link store adapters.
    pub enum FavoriteLinkStoreError {
        /// The store could not be reached.
        Connection {
            /// Adapter-supplied detail.
            message: String,
        } => "favourite store connection failed: {message}",
        /// A query failed during execution.
        Query {
            /// Adapter-supplied detail.
            message: String,
        } => "favourite store query failed: {message}",
        /// A link for the same `(user, target)` pair already exists.
        ConstraintViolation {
            /// Name of the violated constraint.
            message: String,
        } =>
            "favourite link already exists: {message}",
        /// A referenced user or target row does not exist.
        MissingReference {
            /// Foreign key column, e.g. `user_id`.
            column: String,
        } =>
            "favourite link references a missing row via {column}",
    }
}

/// Persistence for the person and planet favourite relations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavoriteLinkStore: Send + Sync {
    /// Find the link for an exact `(user, target)` pair.
    async fn find_link(
        &self,
        user_id: UserId,
        target: TargetRef,
    ) -> Result<Option<FavoriteLink>, FavoriteLinkStoreError>;

    /// List a user's links of one kind joined with their targets, ordered by
    /// ascending link id.
    async fn list_links(
        &self,
        user_id: UserId,
        kind: TargetKind,
    ) -> Result<Vec<FavoriteEntry>, FavoriteLinkStoreError>;

    /// Insert a new link.
    ///
    /// # Errors
    ///
    /// Returns [`FavoriteLinkStoreError::ConstraintViolation`] when the pair
    /// already has a link and [`FavoriteLinkStoreError::MissingReference`]
    /// when the user or target row is gone.
    async fn insert_link(
        &self,
        user_id: UserId,
        target: TargetRef,
    ) -> Result<FavoriteLink, FavoriteLinkStoreError>;

    /// Delete a link, returning whether a row was removed.
    async fn delete_link(&self, link: &FavoriteLink) -> Result<bool, FavoriteLinkStoreError>;
}
