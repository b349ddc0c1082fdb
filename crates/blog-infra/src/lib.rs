//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL database support via SeaORM

pub mod database;

pub use database::{DatabaseConnections, InMemoryPostStore};

#[cfg(feature = "postgres")]
pub use database::PostgresPostStore;
