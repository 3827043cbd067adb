//! Theme asset migration service
//!
//! Copies the static assets of a source store's published ("main") theme to
//! a named theme on a destination store through the Shopify REST asset API.
//! Assets are moved one at a time: download from the asset's public URL,
//! stage to a local file, re-upload base64-encoded, clean up.

pub mod services;
