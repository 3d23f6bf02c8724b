//! Process configuration loaded via OrthoConfig.
//!
//! Values come from `STARBASE_*` environment variables, matching CLI flags,
//! or configuration files. The database URL also honours the conventional
//! `DATABASE_URL` variable.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const FALLBACK_DATABASE_URL_VAR: &str = "DATABASE_URL";

fn default_host() -> String {
    String::from("0.0.0.0")
}

/// Server and persistence settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STARBASE")]
pub struct AppSettings {
    /// PostgreSQL connection URL. The in-memory store is used when unset.
    pub database_url: Option<String>,
    /// Interface to bind.
    #[ortho_config(default = default_host())]
    pub host: String,
    /// TCP port to bind.
    #[ortho_config(default = DEFAULT_PORT)]
    pub port: u16,
    /// Maximum number of pooled database connections.
    #[ortho_config(default = DEFAULT_POOL_MAX_SIZE)]
    pub pool_max_size: u32,
}

impl AppSettings {
    /// Configured database URL, falling back to `DATABASE_URL`.
    ///
    /// A `postgres://` scheme is rewritten to `postgresql://`. Blank values
    /// count as unset.
    #[must_use]
    pub fn database_url(&self) -> Option<String> {
        self.database_url
            .clone()
            .or_else(|| std::env::var(FALLBACK_DATABASE_URL_VAR).ok())
            .filter(|url| !url.trim().is_empty())
            .map(|url| normalise_database_url(&url))
    }
}

/// Rewrite the legacy `postgres://` scheme to `postgresql://`.
///
/// # Examples
/// ```
/// use starbase::settings::normalise_database_url;
///
/// assert_eq!(
///     normalise_database_url("postgres://db/starwars"),
///     "postgresql://db/starwars"
/// );
/// ```
#[must_use]
pub fn normalise_database_url(url: &str) -> String {
    match url.strip_prefix("postgres://") {
        Some(rest) => format!("postgresql://{rest}"),
        None => url.to_owned(),
    }
}
