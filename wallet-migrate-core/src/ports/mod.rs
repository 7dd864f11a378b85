//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for the three external collaborators: the
//! native wallet engine, the storage backend plugin, and the destination
//! database. The services depend only on these traits.

mod schema_store;
mod storage_loader;
mod wallet_engine;

pub use schema_store::SchemaStore;
pub use storage_loader::StorageBackendLoader;
pub use wallet_engine::WalletEngine;
