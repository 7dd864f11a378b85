//! Typed payloads exchanged with the wallet engine
//!
//! The engine's C API consumes JSON documents. These structs are the typed
//! side of that boundary; serialization to JSON happens inside the engine
//! adapter, never in the services.

use std::path::PathBuf;

use serde::Serialize;

/// Identifies a wallet to the engine.
///
/// For the source wallet only `id` is set (default file-based storage). For
/// the destination, `storage_type` and `storage_config` point the engine at
/// the MySQL backend.
#[derive(Debug, Clone, Serialize)]
pub struct WalletConfig {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_config: Option<StorageConfig>,
}

/// Secrets needed to unlock a wallet, plus database credentials when the
/// wallet lives in the MySQL backend.
#[derive(Debug, Clone, Serialize)]
pub struct WalletCredentials {
    pub key: String,
    pub key_derivation_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_credentials: Option<StorageCredentials>,
}

/// Connection block the storage plugin reads. Write and read host are both
/// set to the single configured host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageConfig {
    pub db_name: String,
    pub port: u16,
    pub write_host: String,
    pub read_host: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageCredentials {
    pub user: String,
    pub pass: String,
}

/// Where to write the export package and the key it is encrypted under
#[derive(Debug, Clone, Serialize)]
pub struct ExportConfig {
    pub path: PathBuf,
    pub key: String,
}

/// Where to read the export package from and the key it is encrypted under
#[derive(Debug, Clone, Serialize)]
pub struct ImportConfig {
    pub path: PathBuf,
    pub key: String,
}

/// Opaque wallet handle returned by the engine on open.
///
/// Exclusively owned by whichever service opened it; must be closed exactly
/// once on every exit path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalletHandle(pub i32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_wallet_config_omits_storage_fields() {
        let config = WalletConfig {
            id: "w1".to_string(),
            storage_type: None,
            storage_config: None,
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "w1" }));
    }

    #[test]
    fn test_destination_wallet_config_serializes_nested_storage() {
        let config = WalletConfig {
            id: "w1".to_string(),
            storage_type: Some("mysql".to_string()),
            storage_config: Some(StorageConfig {
                db_name: "wallet_db".to_string(),
                port: 3306,
                write_host: "db".to_string(),
                read_host: "db".to_string(),
            }),
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "w1",
                "storage_type": "mysql",
                "storage_config": {
                    "db_name": "wallet_db",
                    "port": 3306,
                    "write_host": "db",
                    "read_host": "db",
                }
            })
        );
    }

    #[test]
    fn test_credentials_serialize_pass_not_password() {
        let creds = WalletCredentials {
            key: "k".to_string(),
            key_derivation_method: "RAW".to_string(),
            storage_credentials: Some(StorageCredentials {
                user: "u".to_string(),
                pass: "p".to_string(),
            }),
        };
        let json = serde_json::to_string(&creds).unwrap();
        assert!(json.contains("\"pass\":\"p\""));
        assert!(!json.contains("password"));
    }
}
