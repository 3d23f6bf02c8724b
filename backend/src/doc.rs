//! OpenAPI documentation for the REST API.
//!
//! Served through Swagger UI at `/docs` in debug builds and printed by the
//! `openapi-dump` binary.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, FavoriteStatus};
use crate::inbound::http::projections::{
    AllFavoritesResponse, FavoriteEntryView, FavoriteLinkView, FavoriteMutationResponse,
    PeopleFavoritesResponse, PeopleResponse, PersonResponse, PersonView, PlanetResponse,
    PlanetView, PlanetsFavoritesResponse, PlanetsResponse, UserView, UsersResponse,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Starbase API",
        description = "People and planets catalogue with per-user favourites."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::favorites::list_favorite_people,
        crate::inbound::http::favorites::list_favorite_planets,
        crate::inbound::http::favorites::list_all_favorites,
        crate::inbound::http::favorites::add_favorite_person,
        crate::inbound::http::favorites::remove_favorite_person,
        crate::inbound::http::favorites::add_favorite_planet,
        crate::inbound::http::favorites::remove_favorite_planet,
        crate::inbound::http::catalogue::list_people,
        crate::inbound::http::catalogue::get_person,
        crate::inbound::http::catalogue::list_planets,
        crate::inbound::http::catalogue::get_planet,
        crate::inbound::http::catalogue::list_users,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        FavoriteStatus,
        UserView,
        PersonView,
        PlanetView,
        FavoriteLinkView,
        FavoriteEntryView,
        FavoriteMutationResponse,
        PeopleFavoritesResponse,
        PlanetsFavoritesResponse,
        AllFavoritesResponse,
        PeopleResponse,
        PersonResponse,
        PlanetsResponse,
        PlanetResponse,
        UsersResponse,
    )),
    tags(
        (name = "favorites", description = "Per-user favourite people and planets"),
        (name = "catalogue", description = "Read-only catalogue listings"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
