//! Import service - loads the storage plugin and imports the export package

use std::path::Path;
use std::sync::Arc;

use crate::config::MigrationConfig;
use crate::domain::result::Result;
use crate::domain::ImportConfig;
use crate::ports::{StorageBackendLoader, WalletEngine};

/// Imports the export package into a new MySQL-backed wallet
pub struct ImportService {
    engine: Arc<dyn WalletEngine>,
    loader: Arc<dyn StorageBackendLoader>,
}

impl ImportService {
    pub fn new(engine: Arc<dyn WalletEngine>, loader: Arc<dyn StorageBackendLoader>) -> Self {
        Self { engine, loader }
    }

    /// Create the destination wallet and populate it from the export
    /// package.
    ///
    /// The destination schema must already exist. An import that fails
    /// midway is not rolled back; the operator has to clear the destination
    /// tables before retrying.
    pub async fn import_wallet(&self, config: &MigrationConfig, export_path: &Path) -> Result<()> {
        // The engine resolves the "mysql" storage type through the plugin,
        // so it has to be loaded and initialised before import.
        self.loader.load_and_init()?;

        let import = ImportConfig {
            path: export_path.to_path_buf(),
            key: config.wallet.export_key.clone(),
        };
        self.engine
            .import(
                &config.destination_wallet_config(),
                &config.destination_credentials(),
                &import,
            )
            .await
    }
}
