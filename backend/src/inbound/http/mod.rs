//! HTTP inbound adapter exposing REST endpoints.

pub mod catalogue;
pub mod error;
pub mod favorites;
pub mod health;
pub mod projections;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
