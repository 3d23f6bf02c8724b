//! Outbound adapters implementing the driven ports.
//!
//! - **persistence**: PostgreSQL-backed stores using Diesel ORM
//! - **memory**: an in-process store for database-less runs and tests
//!
//! Adapters translate between domain types and their storage representation.
//! They contain no business logic.

pub mod memory;
pub mod persistence;
