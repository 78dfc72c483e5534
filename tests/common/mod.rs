// common/mod.rs - Shared test utilities for database setup and teardown
//
// These helpers keep the database suites idempotent: every run drops and
// recreates the catalog schema from the fixtures, so tests can run any
// number of times against the same database.

use std::env;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use catalog_admin::fixtures::tables::{CategoriesTable, ProductsTable};
use catalog_admin::fixtures::TestTable;

/// Create a database connection pool for testing
pub async fn create_test_pool() -> anyhow::Result<PgPool> {
    dotenv::dotenv().ok();
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(60))
        .connect(&database_url)
        .await?;

    Ok(pool)
}

/// Drop the catalog schema and everything in it
pub async fn teardown_catalog(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::query("DROP SCHEMA IF EXISTS catalog CASCADE")
        .execute(pool)
        .await?;
    Ok(())
}

/// Recreate the catalog schema from the fixtures
pub async fn setup_catalog(pool: &PgPool) -> anyhow::Result<()> {
    teardown_catalog(pool).await?;

    for sql in CategoriesTable::setup_sql() {
        sqlx::query(sql).execute(pool).await?;
    }
    for sql in ProductsTable::setup_sql() {
        sqlx::query(sql).execute(pool).await?;
    }

    Ok(())
}
