// Postgres connection pool and embedded migrations
pub mod database;

pub use database::{Database, DbConnection, DbPool, MIGRATIONS};
