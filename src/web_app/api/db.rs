// web_app/api/db.rs - Database connection pool setup

use std::env;
use std::sync::Mutex;
use std::sync::OnceLock;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

static POOL: OnceLock<PgPool> = OnceLock::new();
static TEST_POOL_OVERRIDE: Mutex<Option<PgPool>> = Mutex::new(None);

/// Initialize the global database pool
pub fn init_db(pool: PgPool) {
    if POOL.set(pool).is_err() {
        tracing::warn!("Database pool already initialized");
    } else {
        tracing::info!("Global database pool initialized");
    }
}

/// Set a pool override for testing
pub fn set_test_pool(pool: PgPool) {
    let mut guard = TEST_POOL_OVERRIDE.lock().unwrap();
    *guard = Some(pool);
}

/// Get the global database pool
pub fn get_db() -> Option<PgPool> {
    {
        let guard = TEST_POOL_OVERRIDE.lock().unwrap();
        if let Some(ref pool) = *guard {
            return Some(pool.clone());
        }
    }

    POOL.get().cloned()
}

/// Create a PostgreSQL connection pool
///
/// Reads DATABASE_URL from environment and creates a connection pool
/// with sensible defaults for a web application.
pub async fn create_pool() -> Result<PgPool, sqlx::Error> {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    PgPoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await
}
