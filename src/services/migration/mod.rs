//! Migration orchestration
//!
//! Drives one run end to end: resolve the source store's published theme,
//! fetch its asset list, resolve the destination theme by name, then move
//! each eligible asset through the transfer unit one at a time. Lookup
//! failures abort the run; per-asset failures are recorded and the run
//! continues, so the summary reports exactly what happened.

use tracing::{debug, error, info};

use crate::services::asset::AssetTransfer;
use crate::services::client::theme_resolver::{resolve_theme, ThemeSelector};
use crate::services::client::ShopifyClient;
use crate::services::config::MigrationConfig;
use crate::services::errors::MigrationError;

/// Outcome of one migration run.
#[derive(Debug, Clone, Default)]
pub struct MigrationSummary {
    /// Assets listed on the source theme.
    pub total_assets: u32,
    /// Assets downloaded and uploaded successfully.
    pub transferred: u32,
    /// Assets without a public URL, never attempted.
    pub skipped: u32,
    pub failed: Vec<AssetFailure>,
}

/// One asset that could not be moved.
#[derive(Debug, Clone)]
pub struct AssetFailure {
    pub key: String,
    /// "download" or "upload"
    pub operation: String,
    pub error: String,
}

impl MigrationSummary {
    fn record_failure(&mut self, key: &str, operation: &str, error: &MigrationError) {
        error!("Failed migrating {} ({}): {}", key, operation, error);
        self.failed.push(AssetFailure {
            key: key.to_string(),
            operation: operation.to_string(),
            error: error.to_string(),
        });
    }
}

/// Run a full migration, returning the per-asset outcome summary.
/// Configuration and resolution failures are fatal; asset failures are not.
pub async fn run_migration(config: &MigrationConfig) -> Result<MigrationSummary, MigrationError> {
    let client = ShopifyClient::new();

    let source_theme = resolve_theme(&client, &config.source, ThemeSelector::Role("main")).await?;
    let assets = client.list_assets(&config.source, source_theme.id).await?;
    info!(
        "Source theme {} ({}) has {} assets",
        source_theme.name,
        source_theme.id,
        assets.len()
    );

    let destination_theme = resolve_theme(
        &client,
        &config.destination,
        ThemeSelector::Name(&config.destination_theme_name),
    )
    .await?;

    let transfer = AssetTransfer::new(&client, &config.destination, destination_theme.id);
    let mut summary = MigrationSummary {
        total_assets: assets.len() as u32,
        ..Default::default()
    };

    for asset in &assets {
        if !asset.is_transferable() {
            debug!("Skipping {} (no public URL)", asset.key);
            summary.skipped += 1;
            continue;
        }

        info!("Migrating asset: {}", asset.key);
        if let Err(error) = transfer.download(asset).await {
            summary.record_failure(&asset.key, "download", &error);
            continue;
        }
        match transfer.upload(&asset.key).await {
            Ok(()) => summary.transferred += 1,
            Err(error) => summary.record_failure(&asset.key, "upload", &error),
        }
    }

    info!("{}", format_migration_stats(&summary));
    Ok(summary)
}

/// One-line run report.
pub fn format_migration_stats(summary: &MigrationSummary) -> String {
    format!(
        "Migrated {}/{} assets ({} skipped, {} failed)",
        summary.transferred,
        summary.total_assets,
        summary.skipped,
        summary.failed.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::config::StoreConfig;

    fn unreachable_config() -> MigrationConfig {
        let store = |token: &str| StoreConfig {
            base_url: "http://127.0.0.1:1/admin/api/2024-01/".to_string(),
            access_token: token.to_string(),
        };
        MigrationConfig {
            source: store("shpat_src"),
            destination: store("shpat_dst"),
            destination_theme_name: "Copy".to_string(),
        }
    }

    #[tokio::test]
    async fn source_resolution_failure_is_fatal() {
        // The source theme lookup fails before any asset I/O, so the run
        // ends with an error instead of a summary.
        let result = run_migration(&unreachable_config()).await;
        assert!(matches!(result, Err(MigrationError::Client(_))));
    }

    #[test]
    fn stats_line_reports_all_counts() {
        let summary = MigrationSummary {
            total_assets: 10,
            transferred: 7,
            skipped: 2,
            failed: vec![AssetFailure {
                key: "assets/a.css".to_string(),
                operation: "upload".to_string(),
                error: "boom".to_string(),
            }],
        };
        assert_eq!(
            format_migration_stats(&summary),
            "Migrated 7/10 assets (2 skipped, 1 failed)"
        );
    }

    #[test]
    fn record_failure_keeps_key_and_operation() {
        let mut summary = MigrationSummary::default();
        let error = MigrationError::MissingPublicUrl {
            key: "assets/a.css".to_string(),
        };
        summary.record_failure("assets/a.css", "download", &error);
        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.failed[0].operation, "download");
        assert!(summary.failed[0].error.contains("assets/a.css"));
    }
}
