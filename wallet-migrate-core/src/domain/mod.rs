//! Core domain types
//!
//! Pure data structures with no I/O: the payloads exchanged with the wallet
//! engine and the error type.

pub mod result;
mod wallet;

pub use wallet::{
    ExportConfig, ImportConfig, StorageConfig, StorageCredentials, WalletConfig,
    WalletCredentials, WalletHandle,
};
