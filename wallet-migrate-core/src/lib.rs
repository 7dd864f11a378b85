//! Wallet migration core - file-based wallet storage to MySQL
//!
//! This crate implements the migration logic following hexagonal
//! architecture:
//!
//! - **domain**: engine payloads and the error type
//! - **ports**: trait definitions for the three external collaborators
//!   (WalletEngine, StorageBackendLoader, SchemaStore)
//! - **services**: phase orchestration (export, import, full run, report)
//! - **adapters**: libindy FFI, libmysqlstorage loader, sqlx/MySQL
//! - **schema**: the embedded destination DDL

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod schema;
pub mod services;

use std::sync::Arc;

use adapters::indy::IndyWalletEngine;
use adapters::mysql::MySqlSchemaStore;
use adapters::mysql_plugin::MysqlStoragePlugin;
use config::MigrationConfig;
use services::MigrationService;

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result};
pub use domain::{StorageConfig, StorageCredentials, WalletHandle};

/// Main context for a migration run
///
/// Wires the real adapters to the services. Constructed once at startup;
/// the single plugin loader instance guarantees the storage library is
/// loaded at most once per process.
pub struct MigrationContext {
    pub config: MigrationConfig,
    pub migration_service: MigrationService,
}

impl MigrationContext {
    /// Create a new migration context from a loaded configuration
    pub fn new(config: MigrationConfig) -> Self {
        let engine = Arc::new(IndyWalletEngine::new());
        let loader = Arc::new(MysqlStoragePlugin::new());
        let schema_store = Arc::new(MySqlSchemaStore::new(&config.mysql));

        let migration_service = MigrationService::new(engine, loader, schema_store);

        Self {
            config,
            migration_service,
        }
    }
}
