//! Database connection management and post stores.

mod connections;
mod memory;

#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
mod postgres_repo;

pub use connections::{DatabaseConfig, DatabaseConnections};
pub use memory::InMemoryPostStore;

#[cfg(feature = "postgres")]
pub use postgres_repo::PostgresPostStore;

#[cfg(feature = "postgres")]
#[cfg(test)]
mod tests;
