//! Result and error types for the core library
//!
//! Every failure in a migration run is fatal; the taxonomy only exists so
//! the operator can tell which collaborator rejected the run.

use thiserror::Error;

/// Core library error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage plugin error: {0}")]
    PluginLoad(String),

    #[error("Wallet engine error: {0}")]
    WalletEngine(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a storage plugin error
    pub fn plugin(msg: impl Into<String>) -> Self {
        Self::PluginLoad(msg.into())
    }

    /// Create a wallet engine error
    pub fn wallet_engine(msg: impl Into<String>) -> Self {
        Self::WalletEngine(msg.into())
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_the_phase() {
        let e = Error::plugin("libmysqlstorage not initialised, aborting");
        assert_eq!(
            e.to_string(),
            "Storage plugin error: libmysqlstorage not initialised, aborting"
        );

        let e = Error::database("access denied for user 'u'");
        assert!(e.to_string().starts_with("Database error:"));
    }
}
