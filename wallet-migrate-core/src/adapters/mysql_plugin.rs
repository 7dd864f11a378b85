//! MySQL storage plugin loader
//!
//! Resolves `<prefix>mysqlstorage<suffix>` for the current platform, loads
//! it and calls its init entry point. The library must stay loaded for the
//! rest of the process (the wallet engine resolves the storage type through
//! it during import), so the handle is kept in the loader.

use std::sync::Mutex;

use libloading::{Library, Symbol};
use tracing::debug;

use crate::adapters::platform::shared_library_name;
use crate::domain::result::{Error, Result};
use crate::ports::StorageBackendLoader;

const PLUGIN_STEM: &str = "mysqlstorage";
const INIT_SYMBOL: &[u8] = b"mysql_storage_init";

type InitFn = unsafe extern "C" fn() -> i32;

/// Loads and initialises the MySQL storage plugin at most once per process.
///
/// One instance is constructed at startup and shared by whichever phases
/// need the plugin.
pub struct MysqlStoragePlugin {
    library: Mutex<Option<Library>>,
}

impl MysqlStoragePlugin {
    pub fn new() -> Self {
        Self {
            library: Mutex::new(None),
        }
    }
}

impl Default for MysqlStoragePlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackendLoader for MysqlStoragePlugin {
    fn load_and_init(&self) -> Result<()> {
        let mut guard = self
            .library
            .lock()
            .map_err(|_| Error::plugin("storage plugin loader lock poisoned"))?;
        if guard.is_some() {
            return Ok(());
        }

        let name = shared_library_name(PLUGIN_STEM, std::env::consts::OS)?;
        debug!(library = %name, "loading storage backend plugin");

        let library = unsafe { Library::new(&name) }
            .map_err(|e| Error::plugin(format!("cannot load {name}: {e}")))?;

        let code = unsafe {
            let init: Symbol<InitFn> = library
                .get(INIT_SYMBOL)
                .map_err(|e| Error::plugin(format!("missing init symbol in {name}: {e}")))?;
            init()
        };
        debug!(code, "storage backend init returned");
        if code != 0 {
            return Err(Error::plugin(format!(
                "libmysqlstorage not initialised, aborting (code {code})"
            )));
        }

        *guard = Some(library);
        Ok(())
    }
}
