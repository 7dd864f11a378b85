//! Native wallet engine adapter
//!
//! Binds the four wallet entry points out of the libindy shared library and
//! serializes the typed payloads into the JSON documents the C API expects.
//! The library is loaded lazily on the first call and kept for the process
//! lifetime.
//!
//! Engine calls block; the migration is strictly sequential with at most
//! one live handle, so they are invoked inline.

use std::ffi::CString;
use std::os::raw::c_char;
use std::sync::Mutex;

use async_trait::async_trait;
use libloading::{Library, Symbol};
use serde::Serialize;
use tracing::debug;

use crate::adapters::platform::shared_library_name;
use crate::domain::result::{Error, Result};
use crate::domain::{ExportConfig, ImportConfig, WalletConfig, WalletCredentials, WalletHandle};
use crate::ports::WalletEngine;

const ENGINE_STEM: &str = "indy";

type OpenFn = unsafe extern "C" fn(*const c_char, *const c_char, *mut i32) -> i32;
type ExportFn = unsafe extern "C" fn(i32, *const c_char) -> i32;
type ImportFn = unsafe extern "C" fn(*const c_char, *const c_char, *const c_char) -> i32;
type CloseFn = unsafe extern "C" fn(i32) -> i32;

/// Wallet engine backed by the native libindy library
pub struct IndyWalletEngine {
    library: Mutex<Option<Library>>,
}

impl IndyWalletEngine {
    pub fn new() -> Self {
        Self {
            library: Mutex::new(None),
        }
    }

    fn with_library<T>(&self, f: impl FnOnce(&Library) -> Result<T>) -> Result<T> {
        let mut guard = self
            .library
            .lock()
            .map_err(|_| Error::wallet_engine("wallet engine lock poisoned"))?;
        if guard.is_none() {
            let name = shared_library_name(ENGINE_STEM, std::env::consts::OS)
                .map_err(|e| Error::wallet_engine(e.to_string()))?;
            debug!(library = %name, "loading wallet engine");
            let library = unsafe { Library::new(&name) }
                .map_err(|e| Error::wallet_engine(format!("cannot load {name}: {e}")))?;
            *guard = Some(library);
        }
        let library = guard
            .as_ref()
            .ok_or_else(|| Error::wallet_engine("wallet engine library unavailable"))?;
        f(library)
    }
}

impl Default for IndyWalletEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn json_cstring<T: Serialize>(value: &T) -> Result<CString> {
    let json = serde_json::to_string(value)?;
    CString::new(json).map_err(|e| Error::wallet_engine(format!("payload contains NUL: {e}")))
}

fn symbol<'a, F>(library: &'a Library, name: &[u8]) -> Result<Symbol<'a, F>> {
    unsafe { library.get(name) }.map_err(|e| {
        Error::wallet_engine(format!(
            "missing engine symbol {}: {e}",
            String::from_utf8_lossy(name)
        ))
    })
}

#[async_trait]
impl WalletEngine for IndyWalletEngine {
    async fn open(
        &self,
        config: &WalletConfig,
        credentials: &WalletCredentials,
    ) -> Result<WalletHandle> {
        let config_json = json_cstring(config)?;
        let credentials_json = json_cstring(credentials)?;
        self.with_library(|library| {
            let open: Symbol<OpenFn> = symbol(library, b"indy_open_wallet")?;
            let mut handle: i32 = 0;
            let code = unsafe { open(config_json.as_ptr(), credentials_json.as_ptr(), &mut handle) };
            if code != 0 {
                return Err(Error::wallet_engine(format!(
                    "open_wallet failed for '{}' (code {code})",
                    config.id
                )));
            }
            debug!(handle, wallet = %config.id, "wallet opened");
            Ok(WalletHandle(handle))
        })
    }

    async fn export(&self, handle: WalletHandle, export: &ExportConfig) -> Result<()> {
        let export_json = json_cstring(export)?;
        self.with_library(|library| {
            let export_fn: Symbol<ExportFn> = symbol(library, b"indy_export_wallet")?;
            let code = unsafe { export_fn(handle.0, export_json.as_ptr()) };
            if code != 0 {
                return Err(Error::wallet_engine(format!(
                    "export_wallet failed (code {code})"
                )));
            }
            debug!(path = %export.path.display(), "wallet exported");
            Ok(())
        })
    }

    async fn import(
        &self,
        config: &WalletConfig,
        credentials: &WalletCredentials,
        import: &ImportConfig,
    ) -> Result<()> {
        let config_json = json_cstring(config)?;
        let credentials_json = json_cstring(credentials)?;
        let import_json = json_cstring(import)?;
        self.with_library(|library| {
            let import_fn: Symbol<ImportFn> = symbol(library, b"indy_import_wallet")?;
            let code = unsafe {
                import_fn(
                    config_json.as_ptr(),
                    credentials_json.as_ptr(),
                    import_json.as_ptr(),
                )
            };
            if code != 0 {
                return Err(Error::wallet_engine(format!(
                    "import_wallet failed for '{}' (code {code})",
                    config.id
                )));
            }
            debug!(wallet = %config.id, "wallet imported");
            Ok(())
        })
    }

    async fn close(&self, handle: WalletHandle) -> Result<()> {
        self.with_library(|library| {
            let close: Symbol<CloseFn> = symbol(library, b"indy_close_wallet")?;
            let code = unsafe { close(handle.0) };
            if code != 0 {
                return Err(Error::wallet_engine(format!(
                    "close_wallet failed (code {code})"
                )));
            }
            debug!(handle = handle.0, "wallet closed");
            Ok(())
        })
    }
}
