//! MySQL schema provisioning adapter
//!
//! One short-lived connection per provisioning call; no transaction, each
//! DDL statement is independently idempotent.

use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{ConnectOptions, Connection};
use tracing::debug;

use crate::config::MysqlSettings;
use crate::domain::result::{Error, Result};
use crate::ports::SchemaStore;
use crate::schema::DDL_STATEMENTS;

/// Schema store backed by the destination MySQL server
pub struct MySqlSchemaStore {
    options: MySqlConnectOptions,
}

impl MySqlSchemaStore {
    pub fn new(settings: &MysqlSettings) -> Self {
        let options = MySqlConnectOptions::new()
            .host(&settings.host)
            .port(settings.port)
            .database(&settings.db_name)
            .username(&settings.user)
            .password(&settings.password);
        Self { options }
    }
}

#[async_trait]
impl SchemaStore for MySqlSchemaStore {
    async fn ensure_schema(&self) -> Result<()> {
        let mut conn: MySqlConnection = self
            .options
            .connect()
            .await
            .map_err(|e| Error::database(format!("cannot connect to MySQL: {e}")))?;

        for ddl in DDL_STATEMENTS {
            sqlx::query(ddl)
                .execute(&mut conn)
                .await
                .map_err(|e| Error::database(e.to_string()))?;
        }
        debug!(statements = DDL_STATEMENTS.len(), "destination schema ensured");

        conn.close()
            .await
            .map_err(|e| Error::database(e.to_string()))?;
        Ok(())
    }
}
