//! Shared error mapping for the Diesel adapters.
//!
//! Both adapters translate pool and Diesel failures into their port's error
//! enum. The favourite link store additionally distinguishes unique and
//! foreign key violations so the service can resolve races and vanished
//! references.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::{debug, warn};

use crate::domain::ports::FavoriteLinkStoreError;

use super::pool::PoolError;

/// Map pool errors into a port-specific connection error constructor.
pub fn map_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

fn log_diesel_error(error: &DieselError) {
    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(error),
            "diesel operation failed"
        ),
    }
}

/// Map common Diesel error variants into query/connection constructors.
pub fn map_basic_diesel_error<E, Q, C>(error: DieselError, query: Q, connection: C) -> E
where
    Q: Fn(&'static str) -> E,
    C: Fn(&'static str) -> E,
{
    log_diesel_error(&error);

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        _ => query("database error"),
    }
}

/// Identify which column a foreign key violation refers to.
///
/// PostgreSQL names generated constraints `<table>_<column>_fkey`, so the
/// constraint name is checked first and the message is the fallback.
fn foreign_key_column(message: &str, constraint_name: Option<&str>) -> Option<&'static str> {
    let haystack = constraint_name.unwrap_or(message).to_lowercase();
    ["user_id", "people_id", "planet_id"]
        .into_iter()
        .find(|column| haystack.contains(column))
}

/// Map Diesel errors to favourite link store errors.
pub fn map_link_diesel_error(error: DieselError) -> FavoriteLinkStoreError {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            debug!(
                constraint_name = ?info.constraint_name(),
                "favourite link uniqueness violated"
            );
            FavoriteLinkStoreError::constraint_violation(
                info.constraint_name().unwrap_or("unique favourite"),
            )
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
            match foreign_key_column(info.message(), info.constraint_name()) {
                Some(column) => FavoriteLinkStoreError::missing_reference(column),
                None => {
                    warn!(
                        message = info.message(),
                        constraint_name = ?info.constraint_name(),
                        "unrecognised foreign key violation"
                    );
                    FavoriteLinkStoreError::query("foreign key violation")
                }
            }
        }
        other => map_basic_diesel_error(
            other,
            FavoriteLinkStoreError::query,
            FavoriteLinkStoreError::connection,
        ),
    }
}
