//! Per-asset transfer pipeline

pub mod transfer;

pub use transfer::AssetTransfer;
