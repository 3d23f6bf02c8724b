//! Catalogue read-through endpoints.
//!
//! ```text
//! GET /people
//! GET /people/{people_id}
//! GET /planets
//! GET /planets/{planet_id}
//! GET /users
//! ```

use actix_web::{get, web};

use crate::domain::{Error, PersonId, PlanetId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::projections::{
    OK, PeopleResponse, PersonResponse, PersonView, PlanetResponse, PlanetView, PlanetsResponse,
    UserView, UsersResponse,
};
use crate::inbound::http::state::HttpState;

/// List every person.
#[utoipa::path(
    get,
    path = "/people",
    responses(
        (status = 200, description = "People", body = PeopleResponse),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["catalogue"],
    operation_id = "listPeople"
)]
#[get("/people")]
pub async fn list_people(state: web::Data<HttpState>) -> ApiResult<web::Json<PeopleResponse>> {
    let people = state.catalogue.list_people().await?;
    Ok(web::Json(PeopleResponse {
        msg: OK.to_owned(),
        results: people.into_iter().map(PersonView::from).collect(),
    }))
}

/// Fetch one person.
#[utoipa::path(
    get,
    path = "/people/{people_id}",
    params(("people_id" = i32, Path, description = "Person identifier")),
    responses(
        (status = 200, description = "Person", body = PersonResponse),
        (status = 404, description = "Person not found", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["catalogue"],
    operation_id = "getPerson"
)]
#[get("/people/{people_id}")]
pub async fn get_person(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<PersonResponse>> {
    let person = state
        .catalogue
        .get_person(PersonId::new(path.into_inner()))
        .await?;
    Ok(web::Json(PersonResponse {
        msg: OK.to_owned(),
        results: person.into(),
    }))
}

/// List every planet.
#[utoipa::path(
    get,
    path = "/planets",
    responses(
        (status = 200, description = "Planets", body = PlanetsResponse),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["catalogue"],
    operation_id = "listPlanets"
)]
#[get("/planets")]
pub async fn list_planets(state: web::Data<HttpState>) -> ApiResult<web::Json<PlanetsResponse>> {
    let planets = state.catalogue.list_planets().await?;
    Ok(web::Json(PlanetsResponse {
        msg: OK.to_owned(),
        results: planets.into_iter().map(PlanetView::from).collect(),
    }))
}

/// Fetch one planet.
#[utoipa::path(
    get,
    path = "/planets/{planet_id}",
    params(("planet_id" = i32, Path, description = "Planet identifier")),
    responses(
        (status = 200, description = "Planet", body = PlanetResponse),
        (status = 404, description = "Planet not found", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["catalogue"],
    operation_id = "getPlanet"
)]
#[get("/planets/{planet_id}")]
pub async fn get_planet(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<PlanetResponse>> {
    let planet = state
        .catalogue
        .get_planet(PlanetId::new(path.into_inner()))
        .await?;
    Ok(web::Json(PlanetResponse {
        msg: OK.to_owned(),
        results: planet.into(),
    }))
}

/// List every user without credentials.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = UsersResponse),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["catalogue"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<UsersResponse>> {
    let users = state.catalogue.list_users().await?;
    Ok(web::Json(UsersResponse {
        msg: OK.to_owned(),
        results: users.iter().map(UserView::from).collect(),
    }))
}

/// Register the catalogue endpoints on an actix service config.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_people)
        .service(get_person)
        .service(list_planets)
        .service(get_planet)
        .service(list_users);
}
