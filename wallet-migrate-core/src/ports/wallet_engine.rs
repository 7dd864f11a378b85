//! Wallet engine port - native crypto engine abstraction

use async_trait::async_trait;

use crate::domain::result::Result;
use crate::domain::{ExportConfig, ImportConfig, WalletConfig, WalletCredentials, WalletHandle};

/// Native wallet engine abstraction
///
/// Mirrors the engine's four entry points. Implementations serialize the
/// typed payloads into the JSON documents the engine expects; callers never
/// see JSON.
#[async_trait]
pub trait WalletEngine: Send + Sync {
    /// Open a wallet, returning an exclusively owned handle
    async fn open(
        &self,
        config: &WalletConfig,
        credentials: &WalletCredentials,
    ) -> Result<WalletHandle>;

    /// Export an open wallet to an encrypted package file. The engine
    /// creates the file at the configured path.
    async fn export(&self, handle: WalletHandle, export: &ExportConfig) -> Result<()>;

    /// Create a new wallet per `config` and populate it from an export
    /// package. The destination storage must already be provisioned.
    async fn import(
        &self,
        config: &WalletConfig,
        credentials: &WalletCredentials,
        import: &ImportConfig,
    ) -> Result<()>;

    /// Release a wallet handle
    async fn close(&self, handle: WalletHandle) -> Result<()>;
}
