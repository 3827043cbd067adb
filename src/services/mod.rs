//! Infrastructure Services
//!
//! This module provides the core services of the migration binary:
//!
//! - **client**: Shopify Admin API client with theme resolution
//! - **asset**: per-asset transfer pipeline (download, stage, upload)
//! - **migration**: run orchestration and outcome aggregation
//! - **config**: configuration loaded once at startup
//! - **errors**: common error types

pub mod asset;
pub mod client;
pub mod config;
pub mod errors;
pub mod migration;
