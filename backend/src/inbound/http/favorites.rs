//! Favourites endpoints.
//!
//! ```text
//! GET    /favoritePeople/user/{user_id}
//! GET    /favoritesPlanets/user/{user_id}
//! GET    /users/favorites/{user_id}
//! POST   /favorite/people/{people_id}/user/{user_id}
//! DELETE /favorite/people/{people_id}/user/{user_id}
//! POST   /favorite/planet/{planet_id}/user/{user_id}
//! DELETE /favorite/planet/{planet_id}/user/{user_id}
//! ```
//!
//! Adds answer `201 Created` for a new link and `200 OK` when the link already
//! existed. Removes answer `200 OK` either way; the body's `status` tells the
//! outcomes apart.

use actix_web::{HttpResponse, delete, get, post, web};

use crate::domain::{
    Error, FavoriteMutation, FavoriteRequest, FavoriteScope, FavoriteStatus, PersonId, PlanetId,
    UserId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::projections::{
    AllFavoritesResponse, FavoriteMutationResponse, OK, PeopleFavoritesResponse,
    PlanetsFavoritesResponse, UserView, entry_views,
};
use crate::inbound::http::state::HttpState;

fn mutation_response(mutation: FavoriteMutation) -> HttpResponse {
    let mut builder = match mutation.status {
        FavoriteStatus::Created => HttpResponse::Created(),
        FavoriteStatus::AlreadyFavorited | FavoriteStatus::Deleted | FavoriteStatus::NotFavorited => {
            HttpResponse::Ok()
        }
    };
    builder.json(FavoriteMutationResponse::from(mutation))
}

/// List a user's favourite people.
#[utoipa::path(
    get,
    path = "/favoritePeople/user/{user_id}",
    params(("user_id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Favourite people", body = PeopleFavoritesResponse),
        (status = 404, description = "User not found", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["favorites"],
    operation_id = "listFavoritePeople"
)]
#[get("/favoritePeople/user/{user_id}")]
pub async fn list_favorite_people(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<PeopleFavoritesResponse>> {
    let listing = state
        .favorites_query
        .list_favorites(UserId::new(path.into_inner()), FavoriteScope::People)
        .await?;
    Ok(web::Json(PeopleFavoritesResponse {
        msg: OK.to_owned(),
        user: UserView::from(&listing.user),
        people_favorite: entry_views(listing.entries),
    }))
}

/// List a user's favourite planets.
#[utoipa::path(
    get,
    path = "/favoritesPlanets/user/{user_id}",
    params(("user_id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Favourite planets", body = PlanetsFavoritesResponse),
        (status = 404, description = "User not found", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["favorites"],
    operation_id = "listFavoritePlanets"
)]
#[get("/favoritesPlanets/user/{user_id}")]
pub async fn list_favorite_planets(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<PlanetsFavoritesResponse>> {
    let listing = state
        .favorites_query
        .list_favorites(UserId::new(path.into_inner()), FavoriteScope::Planets)
        .await?;
    Ok(web::Json(PlanetsFavoritesResponse {
        msg: OK.to_owned(),
        user: UserView::from(&listing.user),
        planets_favorites: entry_views(listing.entries),
    }))
}

/// List all of a user's favourites, people first.
#[utoipa::path(
    get,
    path = "/users/favorites/{user_id}",
    params(("user_id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "All favourites", body = AllFavoritesResponse),
        (status = 404, description = "User not found", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["favorites"],
    operation_id = "listAllFavorites"
)]
#[get("/users/favorites/{user_id}")]
pub async fn list_all_favorites(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<AllFavoritesResponse>> {
    let listing = state
        .favorites_query
        .list_favorites(UserId::new(path.into_inner()), FavoriteScope::All)
        .await?;
    Ok(web::Json(AllFavoritesResponse {
        msg: OK.to_owned(),
        user: UserView::from(&listing.user),
        results: entry_views(listing.entries),
    }))
}

/// Favourite a person.
#[utoipa::path(
    post,
    path = "/favorite/people/{people_id}/user/{user_id}",
    params(
        ("people_id" = i32, Path, description = "Person identifier"),
        ("user_id" = i32, Path, description = "User identifier")
    ),
    responses(
        (status = 201, description = "Favourite created", body = FavoriteMutationResponse),
        (status = 200, description = "Already a favourite", body = FavoriteMutationResponse),
        (status = 404, description = "User or person not found", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["favorites"],
    operation_id = "addFavoritePerson"
)]
#[post("/favorite/people/{people_id}/user/{user_id}")]
pub async fn add_favorite_person(
    state: web::Data<HttpState>,
    path: web::Path<(i32, i32)>,
) -> ApiResult<HttpResponse> {
    let (people_id, user_id) = path.into_inner();
    let request = FavoriteRequest::person(UserId::new(user_id), PersonId::new(people_id));
    let mutation = state.favorites.add_favorite(request).await?;
    Ok(mutation_response(mutation))
}

/// Remove a person from a user's favourites.
#[utoipa::path(
    delete,
    path = "/favorite/people/{people_id}/user/{user_id}",
    params(
        ("people_id" = i32, Path, description = "Person identifier"),
        ("user_id" = i32, Path, description = "User identifier")
    ),
    responses(
        (status = 200, description = "Favourite deleted or not present", body = FavoriteMutationResponse),
        (status = 404, description = "User or person not found", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["favorites"],
    operation_id = "removeFavoritePerson"
)]
#[delete("/favorite/people/{people_id}/user/{user_id}")]
pub async fn remove_favorite_person(
    state: web::Data<HttpState>,
    path: web::Path<(i32, i32)>,
) -> ApiResult<HttpResponse> {
    let (people_id, user_id) = path.into_inner();
    let request = FavoriteRequest::person(UserId::new(user_id), PersonId::new(people_id));
    let mutation = state.favorites.remove_favorite(request).await?;
    Ok(mutation_response(mutation))
}

/// Favourite a planet.
#[utoipa::path(
    post,
    path = "/favorite/planet/{planet_id}/user/{user_id}",
    params(
        ("planet_id" = i32, Path, description = "Planet identifier"),
        ("user_id" = i32, Path, description = "User identifier")
    ),
    responses(
        (status = 201, description = "Favourite created", body = FavoriteMutationResponse),
        (status = 200, description = "Already a favourite", body = FavoriteMutationResponse),
        (status = 404, description = "User or planet not found", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["favorites"],
    operation_id = "addFavoritePlanet"
)]
#[post("/favorite/planet/{planet_id}/user/{user_id}")]
pub async fn add_favorite_planet(
    state: web::Data<HttpState>,
    path: web::Path<(i32, i32)>,
) -> ApiResult<HttpResponse> {
    let (planet_id, user_id) = path.into_inner();
    let request = FavoriteRequest::planet(UserId::new(user_id), PlanetId::new(planet_id));
    let mutation = state.favorites.add_favorite(request).await?;
    Ok(mutation_response(mutation))
}

/// Remove a planet from a user's favourites.
#[utoipa::path(
    delete,
    path = "/favorite/planet/{planet_id}/user/{user_id}",
    params(
        ("planet_id" = i32, Path, description = "Planet identifier"),
        ("user_id" = i32, Path, description = "User identifier")
    ),
    responses(
        (status = 200, description = "Favourite deleted or not present", body = FavoriteMutationResponse),
        (status = 404, description = "User or planet not found", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["favorites"],
    operation_id = "removeFavoritePlanet"
)]
#[delete("/favorite/planet/{planet_id}/user/{user_id}")]
pub async fn remove_favorite_planet(
    state: web::Data<HttpState>,
    path: web::Path<(i32, i32)>,
) -> ApiResult<HttpResponse> {
    let (planet_id, user_id) = path.into_inner();
    let request = FavoriteRequest::planet(UserId::new(user_id), PlanetId::new(planet_id));
    let mutation = state.favorites.remove_favorite(request).await?;
    Ok(mutation_response(mutation))
}

/// Register the favourites endpoints on an actix service config.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_favorite_people)
        .service(list_favorite_planets)
        .service(list_all_favorites)
        .service(add_favorite_person)
        .service(remove_favorite_person)
        .service(add_favorite_planet)
        .service(remove_favorite_planet);
}
