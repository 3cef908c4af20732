//! Products service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::products::{
        data::ProductPatch,
        errors::ProductsServiceError,
        patch::ProductUpdateStatement,
        records::{ProductId, ProductRecord},
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let products = self.repository.list_products(self.db.pool()).await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError> {
        let product = self.repository.get_product(self.db.pool(), product).await?;

        Ok(product)
    }

    async fn update_product(
        &self,
        product: ProductId,
        patch: ProductPatch,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let statement = ProductUpdateStatement::new(product, patch)?;

        debug!(
            product_id = %product,
            columns = ?statement.columns().collect::<Vec<_>>(),
            "updating product"
        );

        let rows_affected = self
            .repository
            .update_product(self.db.pool(), statement)
            .await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        self.repository
            .get_product(self.db.pool(), product)
            .await
            .map_err(ProductsServiceError::RefetchFailed)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products, ordered by id.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError>;

    /// Writes the supplied fields of `patch` to a product and returns its
    /// current state.
    async fn update_product(
        &self,
        product: ProductId,
        patch: ProductPatch,
    ) -> Result<ProductRecord, ProductsServiceError>;
}
