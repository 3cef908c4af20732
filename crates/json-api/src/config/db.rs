//! Database Startup Config

use clap::Args;

/// Schema steps run before the server accepts requests.
#[derive(Debug, Args)]
pub struct SchemaConfig {
    /// Apply pending migrations on startup.
    #[arg(long, env = "DB_AUTO_MIGRATE", default_value_t = true)]
    pub auto_migrate: bool,

    /// Insert the sample products on startup.
    #[arg(long, env = "DB_SEED", default_value_t = false)]
    pub seed: bool,
}
