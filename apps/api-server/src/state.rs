//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::PostService;
use blog_core::ports::PostStore;
use blog_infra::database::{DatabaseConfig, InMemoryPostStore};

#[cfg(feature = "postgres")]
use blog_infra::database::{DatabaseConnections, PostgresPostStore};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
}

impl AppState {
    /// Build the state around an explicit store.
    pub fn with_store(store: Arc<dyn PostStore>) -> Self {
        Self {
            posts: PostService::new(store),
        }
    }

    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let store: Arc<dyn PostStore> = {
            if let Some(config) = db_config {
                match DatabaseConnections::init(config).await {
                    Ok(connections) => Arc::new(PostgresPostStore::new(connections.main)),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        Arc::new(InMemoryPostStore::new())
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(InMemoryPostStore::new())
            }
        };

        #[cfg(not(feature = "postgres"))]
        let store: Arc<dyn PostStore> = {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory store");
            Arc::new(InMemoryPostStore::new())
        };

        tracing::info!("Application state initialized");

        Self::with_store(store)
    }
}
