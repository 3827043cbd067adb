use serde::{Deserialize, Serialize};

/// One theme on a store. Role `"main"` marks the currently published theme.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Theme {
    pub id: u64,
    pub name: String,
    pub role: String,
}

impl Theme {
    pub fn is_main(&self) -> bool {
        self.role == "main"
    }
}

/// Response shape of `GET themes.json`.
#[derive(Deserialize, Debug, Clone)]
pub struct ThemesResponse {
    pub themes: Vec<Theme>,
}

/// One static file belonging to a theme, addressed by its path-like key.
///
/// Only `key` is guaranteed; the asset endpoint omits the other fields for
/// some asset kinds, so they all default.
#[derive(Deserialize, Debug, Clone)]
pub struct Asset {
    pub key: String,
    #[serde(default)]
    pub public_url: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub theme_id: Option<u64>,
}

impl Asset {
    /// Whether this asset can be transferred. Assets without a public URL
    /// (liquid templates with no rendered copy, for instance) are skipped.
    pub fn is_transferable(&self) -> bool {
        self.public_url.as_deref().is_some_and(|url| !url.is_empty())
    }
}

/// Response shape of `GET themes/{id}/assets.json`.
#[derive(Deserialize, Debug, Clone)]
pub struct AssetListResponse {
    pub assets: Vec<Asset>,
}

/// Body of `PUT themes/{id}/assets.json`: `{asset: {key, attachment}}`.
#[derive(Serialize, Debug, Clone)]
pub struct AssetUploadRequest {
    pub asset: AssetUpload,
}

#[derive(Serialize, Debug, Clone)]
pub struct AssetUpload {
    pub key: String,
    /// File content, standard base64 with padding.
    pub attachment: String,
}

impl AssetUploadRequest {
    pub fn new(key: &str, attachment: String) -> Self {
        Self {
            asset: AssetUpload {
                key: key.to_string(),
                attachment,
            },
        }
    }
}
