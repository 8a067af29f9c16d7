#[cfg(feature = "database")]
use std::time::Duration;

#[cfg(feature = "database")]
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr, Schema};

#[cfg(feature = "database")]
use super::entity::post::Entity as PostEntity;

/// Configuration for the post database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SeaORM connection URL, e.g. `postgres://...` or `sqlite://blog.db?mode=rwc`.
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Open the connection pool and make sure the `blogposts` table exists.
#[cfg(feature = "database")]
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, DbErr> {
    tracing::info!("Initializing database connection...");

    let opts = ConnectOptions::new(&config.url)
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true)
        .to_owned();

    let db = Database::connect(opts).await?;
    tracing::info!(
        backend = ?db.get_database_backend(),
        "Database connected (pool: {})",
        config.max_connections
    );

    ensure_schema(&db).await?;
    Ok(db)
}

/// Create the `blogposts` table when it is missing. Existing tables are left alone.
#[cfg(feature = "database")]
pub async fn ensure_schema(db: &DbConn) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let mut statement = Schema::new(backend).create_table_from_entity(PostEntity);
    statement.if_not_exists();

    db.execute(backend.build(&statement)).await?;
    tracing::debug!("Table 'blogposts' is ready");

    Ok(())
}
