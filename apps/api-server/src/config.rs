//! Application configuration loaded from environment variables.

use std::env;

use blog_core::BlogSettings;
use blog_core::domain::PostPassword;
use blog_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub blog: BlogConfig,
}

/// Settings for the `/api/blog` endpoint.
#[derive(Debug, Clone)]
pub struct BlogConfig {
    pub post_password: Option<String>,
    pub author: String,
}

impl BlogConfig {
    pub fn settings(&self) -> BlogSettings {
        BlogSettings {
            post_password: self.post_password.clone().map(PostPassword::new),
            author: self.author.clone(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the configuration from any variable lookup.
    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let database = var("DATABASE_URL").map(|url| DatabaseConfig {
            url,
            max_connections: var("DB_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            min_connections: var("DB_MIN_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(1),
        });

        Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(1234),
            database,
            blog: BlogConfig {
                post_password: var("POST_PASSWORD"),
                author: var("BLOG_AUTHOR").unwrap_or_else(|| "Steffo".to_string()),
            },
        }
    }
}
