//! Migration orchestration - export, provision, import, strictly in order

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::MigrationConfig;
use crate::domain::result::Result;
use crate::ports::{SchemaStore, StorageBackendLoader, WalletEngine};

use super::{ExportService, ImportService};

/// Runs the full migration sequence over the three port implementations
pub struct MigrationService {
    export_service: ExportService,
    import_service: ImportService,
    schema_store: Arc<dyn SchemaStore>,
}

impl MigrationService {
    pub fn new(
        engine: Arc<dyn WalletEngine>,
        loader: Arc<dyn StorageBackendLoader>,
        schema_store: Arc<dyn SchemaStore>,
    ) -> Self {
        Self {
            export_service: ExportService::new(Arc::clone(&engine)),
            import_service: ImportService::new(engine, loader),
            schema_store,
        }
    }

    /// Run the migration: export the old wallet, ensure the destination
    /// schema, import. Ordering is load-bearing: the schema must exist and
    /// the plugin must be initialised before the engine touches the
    /// destination.
    ///
    /// Returns the export package path, which is left in place.
    pub async fn run(&self, config: &MigrationConfig) -> Result<PathBuf> {
        println!("Exporting old wallet...");
        let export_path = self.export_service.export_wallet(config).await?;

        println!("Checking database for required tables...");
        self.schema_store.ensure_schema().await?;

        println!("Importing wallet...");
        self.import_service.import_wallet(config, &export_path).await?;

        Ok(export_path)
    }
}
