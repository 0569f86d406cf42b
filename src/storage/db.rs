use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, Schema};

use crate::entities::{habit, note, task};

/// Connections in the pool are never rotated: rotating the only connection of
/// an in-memory database would drop its contents.
const CONNECTION_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 7);

/// SQLite-backed store for tasks, notes and habits
pub struct LocalStorage {
    pub(crate) conn: DatabaseConnection,
}

impl LocalStorage {
    /// Open the store.
    ///
    /// # Arguments
    /// * `database_path` - SQLite file to use; `None` keeps everything in memory
    pub async fn new(database_path: Option<&Path>) -> Result<Self> {
        let database_url = match database_path {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create database directory: {}", parent.display()))?;
                }
                format!("sqlite://{}?mode=rwc", path.display())
            }
            None => "sqlite::memory:".to_string(),
        };

        let mut options = ConnectOptions::new(database_url.clone());
        options
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(CONNECTION_LIFETIME)
            .max_lifetime(CONNECTION_LIFETIME)
            .sqlx_logging(false);

        let conn = Database::connect(options)
            .await
            .with_context(|| format!("Failed to open database: {}", database_url))?;

        let storage = LocalStorage { conn };
        storage.init_schema().await.context("Failed to initialize database schema")?;
        log::info!("Storage: opened {}", database_url);

        Ok(storage)
    }

    /// In-memory store, used when no database path is configured and in tests
    pub async fn in_memory() -> Result<Self> {
        Self::new(None).await
    }

    /// Create tables and owner indexes if they don't exist yet
    async fn init_schema(&self) -> Result<(), DbErr> {
        self.create_table(task::Entity).await?;
        self.create_table(note::Entity).await?;
        self.create_table(habit::Entity).await?;
        Ok(())
    }

    async fn create_table<E>(&self, entity: E) -> Result<(), DbErr>
    where
        E: EntityTrait,
    {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut table = schema.create_table_from_entity(entity);
        table.if_not_exists();
        self.conn.execute(backend.build(&table)).await?;

        for mut index in schema.create_index_from_entity(entity) {
            index.if_not_exists();
            self.conn.execute(backend.build(&index)).await?;
        }

        Ok(())
    }
}
