//! Export service - snapshots the source wallet into an encrypted package

use std::path::PathBuf;
use std::sync::Arc;

use uuid::Uuid;

use crate::config::MigrationConfig;
use crate::domain::result::Result;
use crate::domain::ExportConfig;
use crate::ports::WalletEngine;

/// Exports the source wallet through the wallet engine
pub struct ExportService {
    engine: Arc<dyn WalletEngine>,
}

impl ExportService {
    pub fn new(engine: Arc<dyn WalletEngine>) -> Self {
        Self { engine }
    }

    /// Export the source wallet to a fresh temp path, encrypted under the
    /// configured export key.
    ///
    /// The file is created by the engine, not here, and is never deleted by
    /// this tool, so the package stays available for manual inspection or a
    /// retried import.
    pub async fn export_wallet(&self, config: &MigrationConfig) -> Result<PathBuf> {
        let path = export_package_path();
        let export = ExportConfig {
            path: path.clone(),
            key: config.wallet.export_key.clone(),
        };

        let handle = self
            .engine
            .open(&config.source_wallet_config(), &config.source_credentials())
            .await?;

        // The handle must be released on both paths before any error
        // propagates.
        let exported = self.engine.export(handle, &export).await;
        let closed = self.engine.close(handle).await;
        exported?;
        closed?;

        Ok(path)
    }
}

/// Unique path for the export package under the system temp directory.
/// Only the path is generated; the export operation creates the file.
fn export_package_path() -> PathBuf {
    std::env::temp_dir().join(format!("wallet-export-{}", Uuid::new_v4()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_package_path_is_unique_and_under_temp_dir() {
        let a = export_package_path();
        let b = export_package_path();
        assert_ne!(a, b);
        assert!(a.starts_with(std::env::temp_dir()));
        assert!(!a.exists());
    }
}
