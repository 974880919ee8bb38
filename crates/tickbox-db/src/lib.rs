//! # Tickbox DB
//!
//! Persistence for user credential records.
//!
//! - [`store`]: the [`UserStore`] trait the auth service depends on
//! - [`postgres`]: [`PgUserStore`], backed by SQLx and PostgreSQL
//! - [`memory`]: [`InMemoryUserStore`] for tests and local runs
//!
//! # Example
//!
//! ```ignore
//! use tickbox_db::{PgUserStore, init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&database_url).await?;
//! run_migrations(&pool).await?;
//! let users = PgUserStore::new(pool);
//! ```

use std::env;

pub mod memory;
pub mod postgres;
pub mod store;

pub use memory::InMemoryUserStore;
pub use postgres::PgUserStore;
pub use store::{StoreError, UserStore};

// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Reads `DATABASE_URL`.
pub fn database_url_from_env() -> Result<String, env::VarError> {
    env::var("DATABASE_URL")
}

/// Connects a PostgreSQL pool. The pool is cheaply cloneable.
pub async fn init_db_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Applies the embedded migrations under `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
