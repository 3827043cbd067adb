use dotenv::dotenv;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use theme_migration_service::services::config::MigrationConfig;
use theme_migration_service::services::migration::run_migration;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match MigrationConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("failed migrating: {}", e);
            return;
        }
    };

    if let Err(e) = run_migration(&config).await {
        error!("failed migrating: {}", e);
    }
}
