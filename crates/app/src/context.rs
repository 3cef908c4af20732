//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, ConnectError, DatabaseConfig, Db},
    domain::products::{PgProductsService, ProductsService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] ConnectError),
}

#[derive(Clone)]
pub struct AppContext {
    pub db: Db,
    pub products: Arc<dyn ProductsService>,
}

impl AppContext {
    /// Build application context from database settings.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppInitError> {
        let pool = database::connect(config)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::from_db(Db::new(pool)))
    }

    #[must_use]
    pub fn from_db(db: Db) -> Self {
        Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            db,
        }
    }
}
