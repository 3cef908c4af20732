use shelf_app::database;
use sqlx::PgPool;

pub(crate) async fn run(pool: &PgPool) -> Result<(), String> {
    let inserted = database::seed(pool)
        .await
        .map_err(|error| format!("failed to seed products: {error}"))?;

    println!("seeded {inserted} product(s)");

    Ok(())
}
