//! Migration configuration
//!
//! Loaded once from a YAML document with two sections:
//!
//! ```yaml
//! wallet:
//!   name: my_wallet
//!   key: wallet_key
//!   key_derivation_method: RAW
//!   export_key: export_key
//! mysql:
//!   host: localhost
//!   port: 3306
//!   db_name: wallet_db
//!   user: root
//!   password: secret
//! ```
//!
//! A missing file, malformed document, or missing required key fails here,
//! before any side effect.

use std::path::Path;

use serde::Deserialize;

use crate::domain::result::{Error, Result};
use crate::domain::{StorageConfig, StorageCredentials, WalletConfig, WalletCredentials};

/// Full migration configuration, read-only after load
#[derive(Debug, Clone, Deserialize)]
pub struct MigrationConfig {
    pub wallet: WalletSettings,
    pub mysql: MysqlSettings,
}

/// `wallet:` section - identity and keys of the source wallet
#[derive(Debug, Clone, Deserialize)]
pub struct WalletSettings {
    pub name: String,
    pub key: String,
    pub key_derivation_method: String,
    pub export_key: String,
}

/// `mysql:` section - destination database connection
#[derive(Debug, Clone, Deserialize)]
pub struct MysqlSettings {
    pub host: String,
    pub port: u16,
    pub db_name: String,
    pub user: String,
    pub password: String,
}

impl MigrationConfig {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("cannot read config file {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse config from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::config(format!("malformed config: {e}")))
    }

    /// Identity of the source wallet in its file-based store
    pub fn source_wallet_config(&self) -> WalletConfig {
        WalletConfig {
            id: self.wallet.name.clone(),
            storage_type: None,
            storage_config: None,
        }
    }

    /// Open credentials for the source wallet
    pub fn source_credentials(&self) -> WalletCredentials {
        WalletCredentials {
            key: self.wallet.key.clone(),
            key_derivation_method: self.wallet.key_derivation_method.clone(),
            storage_credentials: None,
        }
    }

    /// Destination wallet pointed at the MySQL storage backend
    pub fn destination_wallet_config(&self) -> WalletConfig {
        WalletConfig {
            id: self.wallet.name.clone(),
            storage_type: Some("mysql".to_string()),
            storage_config: Some(self.storage_config()),
        }
    }

    /// Open credentials for the destination wallet, including the database
    /// credentials the storage plugin needs
    pub fn destination_credentials(&self) -> WalletCredentials {
        WalletCredentials {
            key: self.wallet.key.clone(),
            key_derivation_method: self.wallet.key_derivation_method.clone(),
            storage_credentials: Some(self.storage_credentials()),
        }
    }

    /// Storage connection block, also printed in the final report
    pub fn storage_config(&self) -> StorageConfig {
        StorageConfig {
            db_name: self.mysql.db_name.clone(),
            port: self.mysql.port,
            write_host: self.mysql.host.clone(),
            read_host: self.mysql.host.clone(),
        }
    }

    /// Storage credentials block, also printed in the final report
    pub fn storage_credentials(&self) -> StorageCredentials {
        StorageCredentials {
            user: self.mysql.user.clone(),
            pass: self.mysql.password.clone(),
        }
    }
}
