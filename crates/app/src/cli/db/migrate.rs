use shelf_app::database;
use sqlx::PgPool;

pub(crate) async fn run(pool: &PgPool) -> Result<(), String> {
    database::migrate(pool)
        .await
        .map_err(|error| format!("failed to run migrations: {error}"))?;

    println!("migrations applied");

    Ok(())
}
