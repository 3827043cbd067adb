//! Shopify Admin API client
//!
//! Thin wrapper over `reqwest` for the handful of endpoints the migration
//! touches: theme listing, asset listing, public-URL downloads and asset
//! uploads. Every operation returns an explicit `Result`; callers decide
//! whether a failure is fatal or only fails the asset at hand.

pub mod errors;
pub mod theme_resolver;
pub mod types;

use bytes::Bytes;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};

use crate::services::config::StoreConfig;
use errors::{ClientError, ClientResult};
use types::{Asset, AssetListResponse, AssetUploadRequest, Theme, ThemesResponse};

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Client for Shopify theme and asset operations.
#[derive(Clone)]
pub struct ShopifyClient {
    http_client: Client,
}

impl ShopifyClient {
    /// Create a new client.
    pub fn new() -> Self {
        Self {
            http_client: Client::builder()
                .user_agent("theme-migration-service/0.1")
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Authenticated GET against a store's Admin API, parsed as `T`.
    #[instrument(skip(self, store), err)]
    pub async fn query<T: DeserializeOwned>(
        &self,
        store: &StoreConfig,
        endpoint: &str,
    ) -> ClientResult<T> {
        let url = format!("{}{}", store.base_url, endpoint);
        debug!("Querying {}", url);

        let response = self
            .http_client
            .get(&url)
            .header(ACCESS_TOKEN_HEADER, &store.access_token)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ClientError::Network {
                message: format!("Failed to fetch {}: {}", endpoint, e),
            })?;

        if !response.status().is_success() {
            return Err(ClientError::ApiStatus {
                endpoint: endpoint.to_string(),
                status: response.status(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            })
    }

    /// List all themes on a store.
    pub async fn list_themes(&self, store: &StoreConfig) -> ClientResult<Vec<Theme>> {
        let response: ThemesResponse = self.query(store, "themes.json").await?;
        Ok(response.themes)
    }

    /// List all assets of one theme.
    pub async fn list_assets(
        &self,
        store: &StoreConfig,
        theme_id: u64,
    ) -> ClientResult<Vec<Asset>> {
        let endpoint = format!("themes/{}/assets.json", theme_id);
        let response: AssetListResponse = self.query(store, &endpoint).await?;
        Ok(response.assets)
    }

    /// Download an asset's bytes from its public URL. Public URLs carry
    /// their own access signature, so no auth header is sent.
    #[instrument(skip(self), err)]
    pub async fn download_public(&self, url: &str, key: &str) -> ClientResult<Bytes> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::Network {
                message: format!("Failed to download {}: {}", key, e),
            })?;

        if !response.status().is_success() {
            return Err(ClientError::Download {
                key: key.to_string(),
                status: response.status(),
            });
        }

        response.bytes().await.map_err(|e| ClientError::Network {
            message: format!("Failed to read body of {}: {}", key, e),
        })
    }

    /// Upload one asset to a destination theme, base64 content in the
    /// `{asset: {key, attachment}}` envelope.
    #[instrument(skip(self, store, attachment), err)]
    pub async fn put_asset(
        &self,
        store: &StoreConfig,
        theme_id: u64,
        key: &str,
        attachment: String,
    ) -> ClientResult<()> {
        let url = format!("{}themes/{}/assets.json", store.base_url, theme_id);
        let request = AssetUploadRequest::new(key, attachment);

        let response = self
            .http_client
            .put(&url)
            .header(ACCESS_TOKEN_HEADER, &store.access_token)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ClientError::Network {
                message: format!("Failed to upload {}: {}", key, e),
            })?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Asset upload failed: {} - {}", status, body);
            Err(ClientError::Upload {
                key: key.to_string(),
                status,
                body,
            })
        }
    }
}

impl Default for ShopifyClient {
    fn default() -> Self {
        Self::new()
    }
}
