use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

/// Shared handle to the connection pool.
#[derive(Clone)]
pub struct DatabaseService {
    pub(crate) database_connection: DatabaseConnection,
}

impl DatabaseService {
    /// Connects to `uri` (postgres:// or sqlite:) and brings the schema up to date.
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(uri.to_owned());
        options.sqlx_logging(false);
        if uri.starts_with("sqlite") {
            // An in-memory SQLite database only exists inside its one connection.
            options.max_connections(1).min_connections(1);
        }

        info!("Connecting to database...");
        let database_connection = Database::connect(options).await?;
        info!("Running migrations...");
        Migrator::up(&database_connection, None).await?;
        info!("Database ready.");
        Ok(Self { database_connection })
    }
}

impl DatabaseService {
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.database_connection.ping().await
    }
}
