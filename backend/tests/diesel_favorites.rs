//! Integration tests for the Diesel adapters against embedded PostgreSQL.
//!
//! Each test provisions its own migrated database, seeds a small catalogue
//! with `postgres`, and drives the adapters (and the favourites service over
//! them) through a shared multi-threaded Tokio runtime.

use std::sync::Arc;

use pg_embedded_setup_unpriv::{TemporaryDatabase, TestCluster};
use postgres::{Client, NoTls};
use rstest::{fixture, rstest};
use starbase::domain::ports::{
    EntityStore, FavoriteLinkStore, FavoriteLinkStoreError, FavoritesCommand, FavoritesQuery,
};
use starbase::domain::{
    FavoriteRequest, FavoriteScope, FavoriteStatus, FavoriteTarget, FavoritesService, PersonId,
    PlanetId, TargetKind, TargetRef, UserId,
};
use starbase::outbound::persistence::{
    DbPool, DieselEntityStore, DieselFavoriteLinkStore, PoolConfig,
};
use tokio::runtime::Runtime;

#[path = "support/pg_embed.rs"]
mod pg_embed;

mod support;

use pg_embed::test_cluster;
use support::{format_postgres_error, handle_cluster_setup_failure, provision_database};

const SEED_SQL: &str = "
    INSERT INTO users (id, email, password, is_active)
        VALUES (1, 'luke@rebellion.org', 'hunter2', true);
    INSERT INTO planets (id, name, population, climate, diameter)
        VALUES (5, 'Tatooine', 200000, 'arid', 10465.0),
               (2, 'Alderaan', 2000000000, 'temperate', 12500.0);
    INSERT INTO people (id, name, birth_year, gender, height, eye_color, planet_id)
        VALUES (1, 'Luke Skywalker', 19, 'male', 172.0, 'blue', 5),
               (4, 'Leia Organa', 19, 'female', 150.0, 'brown', 2);
";

struct TestContext {
    runtime: Runtime,
    entities: Arc<DieselEntityStore>,
    links: Arc<DieselFavoriteLinkStore>,
    database_url: String,
    _database: TemporaryDatabase,
    _cluster: TestCluster,
}

impl TestContext {
    fn service(&self) -> FavoritesService<DieselEntityStore, DieselFavoriteLinkStore> {
        FavoritesService::new(self.entities.clone(), self.links.clone())
    }

    fn count_rows(&self, sql: &str) -> i64 {
        let mut client = Client::connect(&self.database_url, NoTls).expect("connect");
        client
            .query_one(sql, &[])
            .map_err(|err| format_postgres_error(&err))
            .expect("count rows")
            .get(0)
    }

    fn execute(&self, sql: &str) {
        let mut client = Client::connect(&self.database_url, NoTls).expect("connect");
        client
            .batch_execute(sql)
            .map_err(|err| format_postgres_error(&err))
            .expect("execute");
    }
}

fn seed_catalogue(url: &str) -> Result<(), String> {
    let mut client = Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(SEED_SQL)
        .map_err(|err| format_postgres_error(&err))
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = test_cluster()?;
    let database = provision_database(&cluster)?;
    let database_url = database.url().to_owned();
    seed_catalogue(&database_url)?;

    let config = PoolConfig::new(&database_url)
        .with_max_size(4)
        .with_min_idle(Some(1));
    let pool = runtime
        .block_on(async { DbPool::new(config).await })
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        entities: Arc::new(DieselEntityStore::new(pool.clone())),
        links: Arc::new(DieselFavoriteLinkStore::new(pool)),
        database_url,
        _database: database,
        _cluster: cluster,
    })
}

#[fixture]
fn db_context() -> Option<TestContext> {
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

#[rstest]
fn entity_store_reads_seeded_catalogue(db_context: Option<TestContext>) {
    let Some(context) = db_context else {
        eprintln!("SKIP-TEST-CLUSTER: entity_store_reads_seeded_catalogue skipped");
        return;
    };
    let entities = context.entities.clone();

    let (user, planet, missing, planets) = context.runtime.block_on(async {
        (
            entities.find_user(UserId::new(1)).await,
            entities.find_planet(PlanetId::new(5)).await,
            entities.find_person(PersonId::new(42)).await,
            entities.list_planets().await,
        )
    });

    let user = user.expect("find user").expect("user exists");
    assert_eq!(user.email(), "luke@rebellion.org");
    let planet = planet.expect("find planet").expect("planet exists");
    assert_eq!(planet.name, "Tatooine");
    assert_eq!(planet.population, Some(200_000));
    assert!(missing.expect("find person").is_none());
    let names: Vec<String> = planets
        .expect("list planets")
        .into_iter()
        .map(|planet| planet.name)
        .collect();
    assert_eq!(names, ["Alderaan", "Tatooine"]);
}

#[rstest]
fn link_store_round_trip(db_context: Option<TestContext>) {
    let Some(context) = db_context else {
        eprintln!("SKIP-TEST-CLUSTER: link_store_round_trip skipped");
        return;
    };
    let links = context.links.clone();
    let user_id = UserId::new(1);
    let target = TargetRef::Person(PersonId::new(4));

    context.runtime.block_on(async {
        let inserted = links.insert_link(user_id, target).await.expect("insert");
        assert_eq!(inserted.user_id, user_id);
        assert_eq!(inserted.target, target);

        let found = links.find_link(user_id, target).await.expect("find");
        assert_eq!(found, Some(inserted));

        let entries = links
            .list_links(user_id, TargetKind::Person)
            .await
            .expect("list");
        assert_eq!(entries.len(), 1);
        assert!(matches!(
            &entries[0].target,
            FavoriteTarget::Person(person) if person.name == "Leia Organa"
        ));

        assert!(links.delete_link(&inserted).await.expect("delete"));
        assert!(!links.delete_link(&inserted).await.expect("second delete"));
        assert!(links.find_link(user_id, target).await.expect("find").is_none());
    });
}

#[rstest]
fn duplicate_insert_reports_constraint_violation(db_context: Option<TestContext>) {
    let Some(context) = db_context else {
        eprintln!("SKIP-TEST-CLUSTER: duplicate_insert_reports_constraint_violation skipped");
        return;
    };
    let links = context.links.clone();
    let target = TargetRef::Planet(PlanetId::new(5));

    let second = context.runtime.block_on(async {
        links
            .insert_link(UserId::new(1), target)
            .await
            .expect("first insert");
        links.insert_link(UserId::new(1), target).await
    });

    assert!(matches!(
        second,
        Err(FavoriteLinkStoreError::ConstraintViolation { .. })
    ));
}

#[rstest]
#[case(UserId::new(999_999), TargetRef::Planet(PlanetId::new(5)), "user_id")]
#[case(UserId::new(1), TargetRef::Planet(PlanetId::new(42)), "planet_id")]
#[case(UserId::new(1), TargetRef::Person(PersonId::new(42)), "people_id")]
fn dangling_insert_reports_missing_reference(
    db_context: Option<TestContext>,
    #[case] user_id: UserId,
    #[case] target: TargetRef,
    #[case] column: &str,
) {
    let Some(context) = db_context else {
        eprintln!("SKIP-TEST-CLUSTER: dangling_insert_reports_missing_reference skipped");
        return;
    };
    let links = context.links.clone();

    let result = context
        .runtime
        .block_on(async { links.insert_link(user_id, target).await });

    assert_eq!(
        result,
        Err(FavoriteLinkStoreError::missing_reference(column))
    );
}

#[rstest]
fn tatooine_favourite_lifecycle(db_context: Option<TestContext>) {
    let Some(context) = db_context else {
        eprintln!("SKIP-TEST-CLUSTER: tatooine_favourite_lifecycle skipped");
        return;
    };
    let service = context.service();
    let request = FavoriteRequest::planet(UserId::new(1), PlanetId::new(5));
    let count_sql = "SELECT COUNT(*) FROM favorites_planets WHERE user_id = 1 AND planet_id = 5";

    let added = context
        .runtime
        .block_on(service.add_favorite(request))
        .expect("add");
    assert_eq!(added.status, FavoriteStatus::Created);
    assert_eq!(context.count_rows(count_sql), 1);

    let repeated = context
        .runtime
        .block_on(service.add_favorite(request))
        .expect("repeat add");
    assert_eq!(repeated.status, FavoriteStatus::AlreadyFavorited);
    assert_eq!(repeated.link, added.link);
    assert_eq!(context.count_rows(count_sql), 1);

    let removed = context
        .runtime
        .block_on(service.remove_favorite(request))
        .expect("remove");
    assert_eq!(removed.status, FavoriteStatus::Deleted);
    assert_eq!(context.count_rows(count_sql), 0);

    let repeated = context
        .runtime
        .block_on(service.remove_favorite(request))
        .expect("repeat remove");
    assert_eq!(repeated.status, FavoriteStatus::NotFavorited);
}

#[rstest]
fn listing_all_puts_people_before_planets(db_context: Option<TestContext>) {
    let Some(context) = db_context else {
        eprintln!("SKIP-TEST-CLUSTER: listing_all_puts_people_before_planets skipped");
        return;
    };
    let service = context.service();
    let user_id = UserId::new(1);

    for request in [
        FavoriteRequest::planet(user_id, PlanetId::new(2)),
        FavoriteRequest::person(user_id, PersonId::new(1)),
        FavoriteRequest::planet(user_id, PlanetId::new(5)),
    ] {
        context
            .runtime
            .block_on(service.add_favorite(request))
            .expect("add");
    }
    let listing = context
        .runtime
        .block_on(service.list_favorites(user_id, FavoriteScope::All))
        .expect("listing");

    let order: Vec<TargetRef> = listing
        .entries
        .iter()
        .map(|entry| entry.link.target)
        .collect();
    assert_eq!(
        order,
        [
            TargetRef::Person(PersonId::new(1)),
            TargetRef::Planet(PlanetId::new(2)),
            TargetRef::Planet(PlanetId::new(5)),
        ]
    );
    assert_eq!(listing.user.id(), user_id);
}

#[rstest]
fn concurrent_adds_persist_one_link(db_context: Option<TestContext>) {
    let Some(context) = db_context else {
        eprintln!("SKIP-TEST-CLUSTER: concurrent_adds_persist_one_link skipped");
        return;
    };
    let request = FavoriteRequest::person(UserId::new(1), PersonId::new(1));
    let first = context.service();
    let second = context.service();

    let (a, b) = context.runtime.block_on(async {
        let a = tokio::spawn(async move { first.add_favorite(request).await });
        let b = tokio::spawn(async move { second.add_favorite(request).await });
        (a.await, b.await)
    });

    let mut statuses = vec![
        a.expect("join").expect("first add").status,
        b.expect("join").expect("second add").status,
    ];
    statuses.sort_by_key(|status| matches!(status, FavoriteStatus::AlreadyFavorited));
    assert_eq!(
        statuses,
        [FavoriteStatus::Created, FavoriteStatus::AlreadyFavorited]
    );
    assert_eq!(
        context.count_rows("SELECT COUNT(*) FROM favorite_people WHERE user_id = 1 AND people_id = 1"),
        1
    );
}

#[rstest]
fn concurrent_inserts_leave_one_violation(db_context: Option<TestContext>) {
    let Some(context) = db_context else {
        eprintln!("SKIP-TEST-CLUSTER: concurrent_inserts_leave_one_violation skipped");
        return;
    };
    let target = TargetRef::Planet(PlanetId::new(2));
    let first = context.links.clone();
    let second = context.links.clone();

    let (a, b) = context.runtime.block_on(async {
        let a = tokio::spawn(async move { first.insert_link(UserId::new(1), target).await });
        let b = tokio::spawn(async move { second.insert_link(UserId::new(1), target).await });
        (a.await.expect("join"), b.await.expect("join"))
    });

    let outcomes = [a, b];
    assert_eq!(outcomes.iter().filter(|outcome| outcome.is_ok()).count(), 1);
    assert_eq!(
        outcomes
            .iter()
            .filter(|outcome| matches!(
                outcome,
                Err(FavoriteLinkStoreError::ConstraintViolation { .. })
            ))
            .count(),
        1
    );
}

#[rstest]
fn deleting_a_user_cascades_to_favourites(db_context: Option<TestContext>) {
    let Some(context) = db_context else {
        eprintln!("SKIP-TEST-CLUSTER: deleting_a_user_cascades_to_favourites skipped");
        return;
    };
    let service = context.service();
    for request in [
        FavoriteRequest::planet(UserId::new(1), PlanetId::new(5)),
        FavoriteRequest::person(UserId::new(1), PersonId::new(4)),
    ] {
        context
            .runtime
            .block_on(service.add_favorite(request))
            .expect("add");
    }

    context.execute("DELETE FROM users WHERE id = 1");

    assert_eq!(
        context.count_rows("SELECT COUNT(*) FROM favorites_planets WHERE user_id = 1"),
        0
    );
    assert_eq!(
        context.count_rows("SELECT COUNT(*) FROM favorite_people WHERE user_id = 1"),
        0
    );
    let listing = context
        .runtime
        .block_on(service.list_favorites(UserId::new(1), FavoriteScope::All));
    assert!(listing.is_err());
}
