//! Storage backend loader port

use crate::domain::result::Result;

/// Storage backend plugin abstraction
///
/// Loads the platform-specific shared library and runs its init entry
/// point. Implementations memoize: the library is loaded and initialised at
/// most once per process, and repeated calls are cheap no-ops.
pub trait StorageBackendLoader: Send + Sync {
    fn load_and_init(&self) -> Result<()>;
}
