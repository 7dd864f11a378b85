//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - libindy FFI for the WalletEngine port
//! - libmysqlstorage dynamic loading for StorageBackendLoader
//! - sqlx/MySQL for the SchemaStore port

pub mod indy;
pub mod mysql;
pub mod mysql_plugin;
pub mod platform;
