//! Behaviour tests for adding, removing, and listing favourites.
//!
//! Scenarios run the favourites service over the in-memory store. Steps are
//! synchronous and share one current-thread Tokio runtime owned by the world.

use std::cell::RefCell;
use std::sync::Arc;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use starbase::domain::ports::{FavoritesCommand, FavoritesQuery};
use starbase::domain::{
    Error, FavoriteMutation, FavoriteRequest, FavoriteScope, FavoritesListing, FavoritesService,
    Person, PersonId, Planet, PlanetId, User, UserId,
};
use starbase::outbound::memory::InMemoryStore;
use tokio::runtime::Runtime;

type Service = FavoritesService<InMemoryStore, InMemoryStore>;

struct FavoritesWorld {
    runtime: Runtime,
    store: RefCell<InMemoryStore>,
    outcome: RefCell<Option<Result<FavoriteMutation, Error>>>,
}

impl FavoritesWorld {
    fn new() -> Self {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("tokio runtime");
        Self {
            runtime,
            store: RefCell::new(InMemoryStore::new()),
            outcome: RefCell::new(None),
        }
    }

    fn seed(&self, apply: impl FnOnce(InMemoryStore) -> InMemoryStore) {
        let store = self.store.take();
        self.store.replace(apply(store));
    }

    fn service(&self) -> Service {
        let store = Arc::new(self.store.borrow().clone());
        FavoritesService::new(store.clone(), store)
    }

    fn add(&self, request: FavoriteRequest) {
        let service = self.service();
        let result = self.runtime.block_on(service.add_favorite(request));
        self.outcome.replace(Some(result));
    }

    fn remove(&self, request: FavoriteRequest) {
        let service = self.service();
        let result = self.runtime.block_on(service.remove_favorite(request));
        self.outcome.replace(Some(result));
    }

    fn list(&self, user_id: i32, scope: FavoriteScope) -> Result<FavoritesListing, Error> {
        let service = self.service();
        self.runtime
            .block_on(service.list_favorites(UserId::new(user_id), scope))
    }

    fn with_outcome<F>(&self, f: F)
    where
        F: FnOnce(&Result<FavoriteMutation, Error>),
    {
        let outcome = self.outcome.borrow();
        f(outcome.as_ref().expect("a favourite operation ran"));
    }
}

fn scope_named(name: &str) -> FavoriteScope {
    match name {
        "people" => FavoriteScope::People,
        "planets" => FavoriteScope::Planets,
        "all" => FavoriteScope::All,
        other => panic!("unknown favourite scope {other}"),
    }
}

fn detail_code(error: &Error) -> Option<&str> {
    error
        .details()
        .and_then(|details| details.get("code"))
        .and_then(serde_json::Value::as_str)
}

#[fixture]
fn world() -> FavoritesWorld {
    FavoritesWorld::new()
}

#[given("a user with id {user_id}")]
fn a_user_with_id(world: &FavoritesWorld, user_id: i32) {
    let email = format!("user{user_id}@rebellion.org");
    world.seed(|store| store.with_user(User::new(UserId::new(user_id), email, "hunter2", true)));
}

#[given("a planet with id {planet_id} named {name}")]
fn a_planet_with_id_named(world: &FavoritesWorld, planet_id: i32, name: String) {
    world.seed(|store| store.with_planet(Planet::named(PlanetId::new(planet_id), name)));
}

#[given("a person with id {person_id} named {name}")]
fn a_person_with_id_named(world: &FavoritesWorld, person_id: i32, name: String) {
    world.seed(|store| store.with_person(Person::named(PersonId::new(person_id), name)));
}

#[when("user {user_id} favourites planet {planet_id}")]
fn user_favourites_planet(world: &FavoritesWorld, user_id: i32, planet_id: i32) {
    world.add(FavoriteRequest::planet(
        UserId::new(user_id),
        PlanetId::new(planet_id),
    ));
}

#[when("user {user_id} favourites person {person_id}")]
fn user_favourites_person(world: &FavoritesWorld, user_id: i32, person_id: i32) {
    world.add(FavoriteRequest::person(
        UserId::new(user_id),
        PersonId::new(person_id),
    ));
}

#[when("user {user_id} unfavourites planet {planet_id}")]
fn user_unfavourites_planet(world: &FavoritesWorld, user_id: i32, planet_id: i32) {
    world.remove(FavoriteRequest::planet(
        UserId::new(user_id),
        PlanetId::new(planet_id),
    ));
}

#[when("user {user_id} unfavourites person {person_id}")]
fn user_unfavourites_person(world: &FavoritesWorld, user_id: i32, person_id: i32) {
    world.remove(FavoriteRequest::person(
        UserId::new(user_id),
        PersonId::new(person_id),
    ));
}

#[then("the outcome is {status}")]
fn the_outcome_is(world: &FavoritesWorld, status: String) {
    world.with_outcome(|outcome| {
        let mutation = outcome.as_ref().expect("operation succeeds");
        let rendered = serde_json::to_value(mutation.status).expect("serialise status");
        assert_eq!(rendered, serde_json::Value::String(status));
    });
}

#[then("user {user_id} has {count} favourite in scope {scope}")]
fn user_has_favourites_in_scope(world: &FavoritesWorld, user_id: i32, count: usize, scope: String) {
    let listing = world
        .list(user_id, scope_named(&scope))
        .expect("listing succeeds");
    assert_eq!(listing.entries.len(), count);
}

#[then("the favourites of user {user_id} are listed as {listing}")]
fn the_favourites_are_listed_as(world: &FavoritesWorld, user_id: i32, listing: String) {
    let entries = world
        .list(user_id, FavoriteScope::All)
        .expect("listing succeeds")
        .entries;
    let rendered: Vec<String> = entries
        .iter()
        .map(|entry| entry.link.target.to_string())
        .collect();
    assert_eq!(rendered.join(", "), listing);
}

#[then("the call fails with {code}")]
fn the_call_fails_with(world: &FavoritesWorld, code: String) {
    world.with_outcome(|outcome| {
        let error = outcome.as_ref().expect_err("operation fails");
        assert_eq!(detail_code(error), Some(code.as_str()));
    });
}

#[then("listing the favourites of user {user_id} fails with {code}")]
fn listing_fails_with(world: &FavoritesWorld, user_id: i32, code: String) {
    let error = world
        .list(user_id, FavoriteScope::All)
        .expect_err("listing fails");
    assert_eq!(detail_code(&error), Some(code.as_str()));
}

#[scenario(
    path = "tests/features/favorites.feature",
    name = "Adding and removing a planet favourite is idempotent"
)]
fn adding_and_removing_a_planet_favourite_is_idempotent(world: FavoritesWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/favorites.feature",
    name = "Removing a favourite that was never added deletes nothing"
)]
fn removing_a_favourite_that_was_never_added_deletes_nothing(world: FavoritesWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/favorites.feature",
    name = "Listing every favourite returns people before planets"
)]
fn listing_every_favourite_returns_people_before_planets(world: FavoritesWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/favorites.feature",
    name = "An unknown user cannot add favourites"
)]
fn an_unknown_user_cannot_add_favourites(world: FavoritesWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/favorites.feature",
    name = "An unknown target cannot be favourited"
)]
fn an_unknown_target_cannot_be_favourited(world: FavoritesWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/favorites.feature",
    name = "Listing favourites of an unknown user fails"
)]
fn listing_favourites_of_an_unknown_user_fails(world: FavoritesWorld) {
    drop(world);
}
