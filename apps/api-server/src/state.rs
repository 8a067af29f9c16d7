//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostRepository;
use blog_core::{BlogService, BlogSettings};
use blog_infra::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "database")]
use blog_infra::SqlPostRepository;

use crate::config::AppConfig;

/// Which post store backs the running server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Sql,
    Memory,
}

impl StorageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKind::Sql => "sql",
            StorageKind::Memory => "memory",
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blog: BlogService,
    pub storage: StorageKind,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let (posts, storage) = Self::post_store(config.database.as_ref()).await;

        let settings = config.blog.settings();
        if settings.post_password.is_none() {
            tracing::warn!("POST_PASSWORD not set. Every /api/blog request will fail with 500.");
        }

        tracing::info!(storage = storage.as_str(), "Application state initialized");

        Self::with_store(posts, settings, storage)
    }

    /// Assemble state around an existing store.
    pub fn with_store(
        posts: Arc<dyn PostRepository>,
        settings: BlogSettings,
        storage: StorageKind,
    ) -> Self {
        Self {
            blog: BlogService::new(posts, settings),
            storage,
        }
    }

    async fn post_store(
        db_config: Option<&DatabaseConfig>,
    ) -> (Arc<dyn PostRepository>, StorageKind) {
        #[cfg(feature = "database")]
        {
            if let Some(config) = db_config {
                match blog_infra::database::connect(config).await {
                    Ok(conn) => {
                        return (Arc::new(SqlPostRepository::new(conn)), StorageKind::Sql);
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            }
        }

        #[cfg(not(feature = "database"))]
        if db_config.is_some() {
            tracing::warn!("DATABASE_URL ignored: built without the database feature.");
        }

        (Arc::new(InMemoryPostRepository::new()), StorageKind::Memory)
    }
}
