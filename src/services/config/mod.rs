//! Configuration loaded once at startup
//!
//! All credentials and endpoints are read from the environment exactly once
//! in `main` and handed to the rest of the system by reference; no other
//! component touches ambient state.

use crate::services::errors::MigrationError;

/// Credentials for one store's Admin API.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the store's Admin API, including the trailing slash,
    /// e.g. `https://example.myshopify.com/admin/api/2024-01/`.
    pub base_url: String,
    /// Access token sent in the `X-Shopify-Access-Token` header.
    pub access_token: String,
}

/// Configuration for one migration run.
#[derive(Debug, Clone)]
pub struct MigrationConfig {
    pub source: StoreConfig,
    pub destination: StoreConfig,
    /// Name of the destination theme that receives the assets.
    pub destination_theme_name: String,
}

impl MigrationConfig {
    /// Build the run configuration from the process environment.
    ///
    /// Missing or empty variables are configuration errors naming the
    /// variable, raised before any network call.
    pub fn from_env() -> Result<Self, MigrationError> {
        Ok(Self {
            source: StoreConfig {
                base_url: require_env("SOURCE_STORE_URL")?,
                access_token: require_env("SOURCE_STORE_TOKEN")?,
            },
            destination: StoreConfig {
                base_url: require_env("DESTINATION_STORE_URL")?,
                access_token: require_env("DESTINATION_STORE_TOKEN")?,
            },
            destination_theme_name: require_env("DESTINATION_STORE_THEME")?,
        })
    }
}

fn require_env(name: &str) -> Result<String, MigrationError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(MigrationError::Configuration {
            field: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [(&str, &str); 5] = [
        ("SOURCE_STORE_URL", "https://src.myshopify.com/admin/api/2024-01/"),
        ("SOURCE_STORE_TOKEN", "shpat_src"),
        ("DESTINATION_STORE_URL", "https://dst.myshopify.com/admin/api/2024-01/"),
        ("DESTINATION_STORE_TOKEN", "shpat_dst"),
        ("DESTINATION_STORE_THEME", "Copy"),
    ];

    // Environment mutation is process-wide, so all from_env assertions live
    // in a single test.
    #[test]
    fn from_env_requires_every_variable() {
        for (name, value) in VARS {
            std::env::set_var(name, value);
        }
        let config = MigrationConfig::from_env().expect("all variables set");
        assert_eq!(config.source.access_token, "shpat_src");
        assert_eq!(config.destination_theme_name, "Copy");

        std::env::remove_var("DESTINATION_STORE_TOKEN");
        match MigrationConfig::from_env() {
            Err(MigrationError::Configuration { field }) => {
                assert_eq!(field, "DESTINATION_STORE_TOKEN")
            }
            other => panic!("expected configuration error, got {:?}", other),
        }

        // Whitespace-only values count as unset.
        std::env::set_var("DESTINATION_STORE_TOKEN", "  ");
        assert!(MigrationConfig::from_env().is_err());

        std::env::set_var("DESTINATION_STORE_TOKEN", "shpat_dst");
        assert!(MigrationConfig::from_env().is_ok());
    }
}
