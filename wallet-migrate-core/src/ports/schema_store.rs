//! Schema store port - destination database abstraction

use async_trait::async_trait;

use crate::domain::result::Result;

/// Destination database abstraction
#[async_trait]
pub trait SchemaStore: Send + Sync {
    /// Idempotently create the destination tables. Safe to run against an
    /// already-migrated database; existing rows are never altered.
    async fn ensure_schema(&self) -> Result<()>;
}
