//! Favourites domain service.
//!
//! Implements [`FavoritesCommand`] and [`FavoritesQuery`] over the
//! [`EntityStore`] and [`FavoriteLinkStore`] driven ports. Every mutation
//! validates the user first, then the target, then consults the link store.
//! Racing inserts are resolved by the store's uniqueness constraint: the
//! loser observes a constraint violation and reports
//! [`FavoriteStatus::AlreadyFavorited`].

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{
    EntityStore, EntityStoreError, FavoriteLinkStore, FavoriteLinkStoreError, FavoritesCommand,
    FavoritesQuery,
};
use crate::domain::{
    Error, FavoriteLink, FavoriteMutation, FavoriteRequest, FavoriteScope, FavoriteStatus,
    FavoritesListing, TargetKind, TargetRef, User, UserId,
};

/// Favourites service implementing the driving ports.
#[derive(Clone)]
pub struct FavoritesService<E, L> {
    entities: Arc<E>,
    links: Arc<L>,
}

impl<E, L> FavoritesService<E, L> {
    /// Create a new service over the given stores.
    pub fn new(entities: Arc<E>, links: Arc<L>) -> Self {
        Self { entities, links }
    }
}

pub(crate) fn map_entity_error(error: EntityStoreError) -> Error {
    match error {
        EntityStoreError::Connection { message } => {
            Error::service_unavailable(format!("entity store unavailable: {message}"))
        }
        EntityStoreError::Query { message } => {
            Error::internal(format!("entity store error: {message}"))
        }
    }
}

fn user_not_found(user_id: UserId) -> Error {
    Error::not_found(format!("The user with id {user_id} does not exist")).with_details(json!({
        "userId": user_id,
        "code": "user_not_found",
    }))
}

pub(crate) fn target_not_found(target: TargetRef) -> Error {
    let (key, code) = match target.kind() {
        TargetKind::Person => ("personId", "person_not_found"),
        TargetKind::Planet => ("planetId", "planet_not_found"),
    };
    Error::not_found(format!(
        "The {} with id {} does not exist",
        target.kind().noun(),
        target.raw_id()
    ))
    .with_details(json!({
        key: target.raw_id(),
        "code": code,
    }))
}

impl<E, L> FavoritesService<E, L>
where
    E: EntityStore,
    L: FavoriteLinkStore,
{
    fn map_link_error(error: FavoriteLinkStoreError, request: &FavoriteRequest) -> Error {
        match error {
            FavoriteLinkStoreError::Connection { message } => {
                Error::service_unavailable(format!("favourite store unavailable: {message}"))
            }
            FavoriteLinkStoreError::Query { message } => {
                Error::internal(format!("favourite store error: {message}"))
            }
            FavoriteLinkStoreError::ConstraintViolation { message } => {
                Error::internal(format!("unexpected favourite conflict: {message}"))
            }
            FavoriteLinkStoreError::MissingReference { column } => {
                if column == "user_id" {
                    user_not_found(request.user_id)
                } else {
                    target_not_found(request.target)
                }
            }
        }
    }

    async fn require_user(&self, user_id: UserId) -> Result<User, Error> {
        self.entities
            .find_user(user_id)
            .await
            .map_err(map_entity_error)?
            .ok_or_else(|| user_not_found(user_id))
    }

    async fn require_target(&self, target: TargetRef) -> Result<(), Error> {
        let exists = match target {
            TargetRef::Person(id) => self
                .entities
                .find_person(id)
                .await
                .map_err(map_entity_error)?
                .is_some(),
            TargetRef::Planet(id) => self
                .entities
                .find_planet(id)
                .await
                .map_err(map_entity_error)?
                .is_some(),
        };
        if exists {
            Ok(())
        } else {
            Err(target_not_found(target))
        }
    }

    async fn validate(&self, request: &FavoriteRequest) -> Result<(), Error> {
        self.require_user(request.user_id).await?;
        self.require_target(request.target).await
    }

    /// Re-read the winning row after losing an insert race.
    async fn resolve_insert_race(
        &self,
        request: FavoriteRequest,
    ) -> Result<FavoriteMutation, Error> {
        info!(
            user_id = %request.user_id,
            target = %request.target,
            "concurrent favourite insert resolved by uniqueness constraint"
        );
        let link = self
            .links
            .find_link(request.user_id, request.target)
            .await
            .map_err(|err| Self::map_link_error(err, &request))?;
        Ok(mutation(request, FavoriteStatus::AlreadyFavorited, link))
    }
}

fn mutation(
    request: FavoriteRequest,
    status: FavoriteStatus,
    link: Option<FavoriteLink>,
) -> FavoriteMutation {
    FavoriteMutation {
        user_id: request.user_id,
        target: request.target,
        status,
        link,
    }
}

#[async_trait]
impl<E, L> FavoritesCommand for FavoritesService<E, L>
where
    E: EntityStore,
    L: FavoriteLinkStore,
{
    async fn add_favorite(&self, request: FavoriteRequest) -> Result<FavoriteMutation, Error> {
        self.validate(&request).await?;

        let existing = self
            .links
            .find_link(request.user_id, request.target)
            .await
            .map_err(|err| Self::map_link_error(err, &request))?;
        if let Some(link) = existing {
            debug!(user_id = %request.user_id, target = %request.target, "favourite already present");
            return Ok(mutation(request, FavoriteStatus::AlreadyFavorited, Some(link)));
        }

        match self.links.insert_link(request.user_id, request.target).await {
            Ok(link) => {
                debug!(user_id = %request.user_id, target = %request.target, link_id = %link.id, "favourite created");
                Ok(mutation(request, FavoriteStatus::Created, Some(link)))
            }
            Err(FavoriteLinkStoreError::ConstraintViolation { .. }) => {
                self.resolve_insert_race(request).await
            }
            Err(err) => Err(Self::map_link_error(err, &request)),
        }
    }

    async fn remove_favorite(&self, request: FavoriteRequest) -> Result<FavoriteMutation, Error> {
        self.validate(&request).await?;

        let existing = self
            .links
            .find_link(request.user_id, request.target)
            .await
            .map_err(|err| Self::map_link_error(err, &request))?;
        let Some(link) = existing else {
            debug!(user_id = %request.user_id, target = %request.target, "favourite not present");
            return Ok(mutation(request, FavoriteStatus::NotFavorited, None));
        };

        let removed = self
            .links
            .delete_link(&link)
            .await
            .map_err(|err| Self::map_link_error(err, &request))?;
        if removed {
            debug!(user_id = %request.user_id, target = %request.target, link_id = %link.id, "favourite deleted");
            Ok(mutation(request, FavoriteStatus::Deleted, Some(link)))
        } else {
            info!(
                user_id = %request.user_id,
                target = %request.target,
                "favourite removed concurrently"
            );
            Ok(mutation(request, FavoriteStatus::NotFavorited, None))
        }
    }
}

#[async_trait]
impl<E, L> FavoritesQuery for FavoritesService<E, L>
where
    E: EntityStore,
    L: FavoriteLinkStore,
{
    async fn list_favorites(
        &self,
        user_id: UserId,
        scope: FavoriteScope,
    ) -> Result<FavoritesListing, Error> {
        let user = self.require_user(user_id).await?;

        let mut entries = Vec::new();
        for kind in scope.kinds() {
            let links = self
                .links
                .list_links(user_id, *kind)
                .await
                .map_err(|err| match err {
                    FavoriteLinkStoreError::Connection { message } => Error::service_unavailable(
                        format!("favourite store unavailable: {message}"),
                    ),
                    other => Error::internal(format!("favourite store error: {other}")),
                })?;
            entries.extend(links);
        }

        Ok(FavoritesListing { user, entries })
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
