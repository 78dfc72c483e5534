// web_app/api/mod.rs - API module for server-side logic
//
// Database queries, the connection pool, and upload storage for the
// catalog screen. Everything here is SSR-only.

#[cfg(feature = "ssr")]
pub mod db;

#[cfg(feature = "ssr")]
pub mod queries;

#[cfg(feature = "ssr")]
pub mod uploads;
