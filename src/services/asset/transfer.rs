//! Asset transfer unit
//!
//! Moves one asset at a time: download the bytes from the asset's public
//! URL, stage them to a local file named after the key's base name, read
//! the file back, base64-encode and PUT to the destination theme, then
//! remove the staged file. Cleanup happens only after a successful upload;
//! a failed upload leaves the staged file behind.

use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine};
use tokio::fs;
use tracing::{debug, info};

use crate::services::client::types::Asset;
use crate::services::client::ShopifyClient;
use crate::services::config::StoreConfig;
use crate::services::errors::MigrationError;

/// Transfers assets into one destination theme.
pub struct AssetTransfer<'a> {
    client: &'a ShopifyClient,
    destination: &'a StoreConfig,
    theme_id: u64,
    staging_dir: PathBuf,
}

impl<'a> AssetTransfer<'a> {
    /// Transfer unit staging into the current working directory.
    pub fn new(client: &'a ShopifyClient, destination: &'a StoreConfig, theme_id: u64) -> Self {
        Self::with_staging_dir(client, destination, theme_id, PathBuf::from("."))
    }

    /// Transfer unit staging into an explicit directory.
    pub fn with_staging_dir(
        client: &'a ShopifyClient,
        destination: &'a StoreConfig,
        theme_id: u64,
        staging_dir: PathBuf,
    ) -> Self {
        Self {
            client,
            destination,
            theme_id,
            staging_dir,
        }
    }

    /// Run the full download, stage, upload, cleanup cycle for one asset.
    pub async fn transfer(&self, asset: &Asset) -> Result<(), MigrationError> {
        self.download(asset).await?;
        self.upload(&asset.key).await
    }

    /// Download the asset's bytes from its public URL and write them to
    /// the staged file.
    pub async fn download(&self, asset: &Asset) -> Result<(), MigrationError> {
        let key = &asset.key;
        let url = asset
            .public_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or_else(|| MigrationError::MissingPublicUrl { key: key.clone() })?;

        let body = self.client.download_public(url, key).await?;
        let path = self.staged_path(key);
        debug!("Staging {} bytes at {}", body.len(), path.display());
        self.stage(key, &body).await
    }

    /// Read the staged file back, base64-encode and PUT it to the
    /// destination theme, removing the staged file on success.
    ///
    /// The destination token is checked before anything else so a
    /// misconfigured run fails without touching the network.
    pub async fn upload(&self, key: &str) -> Result<(), MigrationError> {
        if self.destination.access_token.is_empty() {
            return Err(MigrationError::Configuration {
                field: "DESTINATION_STORE_TOKEN".to_string(),
            });
        }

        let attachment = self.read_attachment(key).await?;
        self.client
            .put_asset(self.destination, self.theme_id, key, attachment)
            .await?;

        self.remove_staged(key).await?;
        info!("Uploaded {} to theme {}", key, self.theme_id);
        Ok(())
    }

    /// Where the staged copy of `key` lives.
    pub fn staged_path(&self, key: &str) -> PathBuf {
        self.staging_dir.join(staged_file_name(key))
    }

    async fn stage(&self, key: &str, bytes: &[u8]) -> Result<(), MigrationError> {
        fs::write(self.staged_path(key), bytes)
            .await
            .map_err(|source| MigrationError::Staging {
                key: key.to_string(),
                source,
            })
    }

    async fn read_attachment(&self, key: &str) -> Result<String, MigrationError> {
        let bytes = fs::read(self.staged_path(key))
            .await
            .map_err(|source| MigrationError::Staging {
                key: key.to_string(),
                source,
            })?;
        Ok(STANDARD.encode(bytes))
    }

    async fn remove_staged(&self, key: &str) -> Result<(), MigrationError> {
        fs::remove_file(self.staged_path(key))
            .await
            .map_err(|source| MigrationError::Staging {
                key: key.to_string(),
                source,
            })
    }
}

/// Base name of an asset key: directory components are dropped, so
/// `assets/a.css` stages as `a.css`. Keys sharing a base name across
/// sub-paths collide in the staging directory; the upload still targets
/// the full key, so file identity on the destination is unaffected.
fn staged_file_name(key: &str) -> &str {
    Path::new(key)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(key)
}
