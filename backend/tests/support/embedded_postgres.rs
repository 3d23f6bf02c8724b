//! Database provisioning for suites running against embedded PostgreSQL.
//!
//! Each test gets its own temporary database with the Diesel migrations
//! applied, so tests never observe each other's rows.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pg_embedded_setup_unpriv::{TemporaryDatabase, TestCluster};
use uuid::Uuid;

/// Embedded migrations from the backend/migrations directory.
const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Create a uniquely named database on `cluster` and migrate it.
pub fn provision_database(cluster: &TestCluster) -> Result<TemporaryDatabase, String> {
    let name = format!("starbase_{}", Uuid::new_v4().simple());
    let database = cluster
        .temporary_database(name.as_str())
        .map_err(|err| format!("create database {name}: {err:?}"))?;
    migrate_schema(database.url())?;
    Ok(database)
}

/// Run all pending Diesel migrations against `url`.
fn migrate_schema(url: &str) -> Result<(), String> {
    let mut conn = PgConnection::establish(url).map_err(|err| format!("connect: {err:?}"))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|err| format!("migration: {err:?}"))?;
    Ok(())
}
