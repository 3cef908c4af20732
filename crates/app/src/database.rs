//! Database connection management

use clap::Args;
use sqlx::{
    PgPool,
    migrate::{MigrateError, Migrator},
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
};
use thiserror::Error;
use tracing::info;

use crate::domain::products::{PgProductsRepository, records::ProductId};

/// Embedded schema migrations.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Sample catalogue written by [`seed`].
const SEED_PRODUCTS: [(i64, &str, &str, i64); 3] = [
    (1, "Product 1", "Product 1 description", 10),
    (2, "Product 2", "Product 2 description", 20),
    (3, "Product 3", "Product 3 description", 30),
];

#[derive(Debug, Error)]
pub enum DatabaseConfigError {
    #[error("invalid DB_SSLMODE value {0:?}")]
    SslMode(String),
}

/// `PostgreSQL` connection settings.
#[derive(Debug, Clone, Args)]
pub struct DatabaseConfig {
    /// Database host
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    pub db_port: u16,

    /// Database user
    #[arg(long, env = "DB_USER")]
    pub db_user: String,

    /// Database password
    #[arg(long, env = "DB_PASSWORD", hide_env_values = true)]
    pub db_password: String,

    /// Database name
    #[arg(long, env = "DB_NAME")]
    pub db_name: String,

    /// libpq SSL mode (disable, allow, prefer, require, verify-ca, verify-full)
    #[arg(long, env = "DB_SSLMODE", default_value = "prefer")]
    pub db_sslmode: String,

    /// Maximum pooled connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 10)]
    pub db_max_connections: u32,
}

impl DatabaseConfig {
    /// Build driver connect options from the configured fields.
    ///
    /// # Errors
    ///
    /// Returns an error when the SSL mode is not a recognised libpq mode.
    pub fn connect_options(&self) -> Result<PgConnectOptions, DatabaseConfigError> {
        let ssl_mode = self
            .db_sslmode
            .parse::<PgSslMode>()
            .map_err(|_ignored| DatabaseConfigError::SslMode(self.db_sslmode.clone()))?;

        Ok(PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name)
            .ssl_mode(ssl_mode))
    }
}

#[derive(Debug, Error)]
pub enum ConnectError {
    #[error(transparent)]
    Config(#[from] DatabaseConfigError),

    #[error("failed to connect to database")]
    Sql(#[from] sqlx::Error),
}

/// Shared database handle.
#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the settings are invalid or the connection cannot be
/// established.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, ConnectError> {
    let options = config.connect_options()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Apply pending migrations.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;

    info!("database migrations applied");

    Ok(())
}

/// Insert the sample products that are not already present.
///
/// Returns the number of products inserted.
///
/// # Errors
///
/// Returns an error if any insert fails; no rows are written in that case.
pub async fn seed(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let repository = PgProductsRepository::new();

    let mut tx = pool.begin().await?;
    let mut inserted = 0;

    for (id, name, description, price) in SEED_PRODUCTS {
        inserted += repository
            .seed_product(&mut *tx, ProductId::from_i64(id), name, description, price)
            .await?;
    }

    repository.sync_product_sequence(&mut *tx).await?;

    tx.commit().await?;

    info!(inserted, "seeded products");

    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestDb;

    use super::*;

    fn config(ssl_mode: &str) -> DatabaseConfig {
        DatabaseConfig {
            db_host: "db.internal".to_string(),
            db_port: 6543,
            db_user: "shelf".to_string(),
            db_password: "secret".to_string(),
            db_name: "catalogue".to_string(),
            db_sslmode: ssl_mode.to_string(),
            db_max_connections: 4,
        }
    }

    #[test]
    fn connect_options_use_configured_fields() -> TestResult {
        let options = config("require").connect_options()?;

        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "shelf");
        assert_eq!(options.get_database(), Some("catalogue"));
        assert!(matches!(options.get_ssl_mode(), PgSslMode::Require));

        Ok(())
    }

    #[test]
    fn connect_options_reject_unknown_ssl_mode() {
        let result = config("sometimes").connect_options();

        assert!(
            matches!(result, Err(DatabaseConfigError::SslMode(ref mode)) if mode == "sometimes"),
            "expected SslMode error, got {result:?}"
        );
    }

    #[tokio::test]
    async fn seed_is_idempotent() -> TestResult {
        let db = TestDb::new().await;

        let first = seed(db.pool()).await?;
        let second = seed(db.pool()).await?;

        assert_eq!(first, 3);
        assert_eq!(second, 0);

        Ok(())
    }

    #[tokio::test]
    async fn generated_ids_follow_seeded_ids() -> TestResult {
        let db = TestDb::new().await;

        seed(db.pool()).await?;

        let next: i64 =
            sqlx::query_scalar("SELECT nextval(pg_get_serial_sequence('products', 'id'))")
                .fetch_one(db.pool())
                .await?;

        assert_eq!(next, 4);

        Ok(())
    }
}
