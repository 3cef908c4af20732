//! Products Repository

use sqlx::{FromRow, PgExecutor, Postgres, Row, postgres::PgRow, query, query_as};

use crate::domain::products::{
    patch::ProductUpdateStatement,
    records::{ProductId, ProductRecord},
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const SEED_PRODUCT_SQL: &str = include_str!("sql/seed_product.sql");
const SYNC_PRODUCT_SEQUENCE_SQL: &str = include_str!("sql/sync_product_sequence.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products<'e, E>(
        &self,
        executor: E,
    ) -> Result<Vec<ProductRecord>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .fetch_all(executor)
            .await
    }

    pub(crate) async fn get_product<'e, E>(
        &self,
        executor: E,
        product: ProductId,
    ) -> Result<ProductRecord, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_i64())
            .fetch_one(executor)
            .await
    }

    /// Insert a product unless its id is taken; returns the rows inserted.
    pub(crate) async fn seed_product<'e, E>(
        &self,
        executor: E,
        product: ProductId,
        name: &str,
        description: &str,
        price: i64,
    ) -> Result<u64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let rows_affected = query(SEED_PRODUCT_SQL)
            .bind(product.into_i64())
            .bind(name)
            .bind(description)
            .bind(price)
            .execute(executor)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Move the id sequence past the highest stored id.
    pub(crate) async fn sync_product_sequence<'e, E>(&self, executor: E) -> Result<(), sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        query(SYNC_PRODUCT_SEQUENCE_SQL).execute(executor).await?;

        Ok(())
    }

    pub(crate) async fn update_product<'e, E>(
        &self,
        executor: E,
        statement: ProductUpdateStatement,
    ) -> Result<u64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        statement.execute(executor).await
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use sqlx::query_scalar;
    use testresult::TestResult;

    use crate::{domain::products::data::ProductPatch, test::TestDb};

    use super::*;

    #[tokio::test]
    async fn sync_product_sequence_moves_past_highest_id() -> TestResult {
        let db = TestDb::new().await;
        let repository = PgProductsRepository::new();

        repository
            .seed_product(db.pool(), ProductId::from_i64(7), "Lamp", "Desk lamp", 25)
            .await?;

        repository.sync_product_sequence(db.pool()).await?;

        let next: i64 = query_scalar("SELECT nextval(pg_get_serial_sequence('products', 'id'))")
            .fetch_one(db.pool())
            .await?;

        assert_eq!(next, 8);

        Ok(())
    }

    #[tokio::test]
    async fn list_products_orders_by_id() -> TestResult {
        let db = TestDb::new().await;
        let repository = PgProductsRepository::new();

        for id in [3, 1, 2] {
            repository
                .seed_product(db.pool(), ProductId::from_i64(id), "P", "p", id)
                .await?;
        }

        let ids: Vec<i64> = repository
            .list_products(db.pool())
            .await?
            .into_iter()
            .map(|product| product.id.into_i64())
            .collect();

        assert_eq!(ids, vec![1, 2, 3]);

        Ok(())
    }

    #[tokio::test]
    async fn update_product_touches_only_assigned_columns() -> TestResult {
        let db = TestDb::new().await;
        let repository = PgProductsRepository::new();
        let product = ProductId::from_i64(10);

        repository
            .seed_product(db.pool(), product, "Kettle", "Electric kettle", 40)
            .await?;

        let statement = ProductUpdateStatement::new(
            product,
            ProductPatch {
                description: Some("Stovetop kettle".to_string()),
                ..ProductPatch::default()
            },
        )?;

        let rows_affected = repository.update_product(db.pool(), statement).await?;

        let updated = repository.get_product(db.pool(), product).await?;

        assert_eq!(rows_affected, 1);
        assert_eq!(updated.name, "Kettle");
        assert_eq!(updated.description, "Stovetop kettle");
        assert_eq!(updated.price, 40);

        Ok(())
    }
    #[tokio::test]
    async fn update_missing_product_affects_no_rows() -> TestResult {
        let db = TestDb::new().await;
        let repository = PgProductsRepository::new();

        let statement = ProductUpdateStatement::new(
            ProductId::from_i64(404),
            ProductPatch {
                price: Some(1),
                ..ProductPatch::default()
            },
        )?;

        let rows_affected = repository.update_product(db.pool(), statement).await?;

        assert_eq!(rows_affected, 0);

        Ok(())
    }

    #[tokio::test]
    async fn seed_product_skips_existing_ids() -> TestResult {
        let db = TestDb::new().await;
        let repository = PgProductsRepository::new();
        let id = ProductId::from_i64(1);

        let first = repository
            .seed_product(db.pool(), id, "Product 1", "Product 1 description", 10)
            .await?;

        let second = repository
            .seed_product(db.pool(), id, "Other", "Other", 99)
            .await?;

        let stored = repository.get_product(db.pool(), id).await?;

        assert_eq!(first, 1);
        assert_eq!(second, 0);
        assert_eq!(stored.name, "Product 1");

        Ok(())
    }
}
