use clap::{Args, Subcommand};
use shelf_app::database::{self, DatabaseConfig};
use sqlx::PgPool;

mod migrate;
mod seed;

#[derive(Debug, Args)]
pub(crate) struct DbCommand {
    #[command(flatten)]
    database: DatabaseConfig,

    #[command(subcommand)]
    command: DbSubcommand,
}

#[derive(Debug, Subcommand)]
enum DbSubcommand {
    /// Create or upgrade the schema
    Migrate,

    /// Insert the sample products
    Seed,
}

pub(crate) async fn run(command: DbCommand) -> Result<(), String> {
    let pool = connect(&command.database).await?;

    match command.command {
        DbSubcommand::Migrate => migrate::run(&pool).await,
        DbSubcommand::Seed => seed::run(&pool).await,
    }
}

async fn connect(config: &DatabaseConfig) -> Result<PgPool, String> {
    database::connect(config)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))
}
