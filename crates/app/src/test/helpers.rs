//! Test Helpers

use crate::{
    domain::products::{PgProductsRepository, records::ProductId},
    test::TestContext,
};

/// Insert a product row directly, bypassing the service.
pub(crate) async fn insert_product(
    ctx: &TestContext,
    id: i64,
    name: &str,
    description: &str,
    price: i64,
) -> Result<(), sqlx::Error> {
    PgProductsRepository::new()
        .seed_product(ctx.db.pool(), ProductId::from_i64(id), name, description, price)
        .await?;

    Ok(())
}
