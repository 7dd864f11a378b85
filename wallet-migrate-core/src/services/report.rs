//! Config report - the block the operator pastes into their VCX config
//!
//! The downstream config stores `storage_config` and `storage_credentials`
//! as JSON strings, so both blocks are rendered JSON-encoded (quoted and
//! escaped), ready to copy verbatim.

use crate::config::MigrationConfig;
use crate::domain::result::Result;

/// Render the follow-up configuration block. Pure; the CLI prints it.
pub fn render_report(config: &MigrationConfig) -> Result<String> {
    let storage_config = serde_json::to_string(&config.storage_config())?;
    let storage_credentials = serde_json::to_string(&config.storage_credentials())?;

    let mut out = String::new();
    out.push_str("Done! Now you need to update your VCX config with these values:\n");
    out.push_str("\"wallet_type\": \"mysql\",\n");
    out.push_str(&format!(
        "\"storage_config\": {},\n",
        serde_json::to_string(&storage_config)?
    ));
    out.push_str(&format!(
        "\"storage_credentials\": {}\n",
        serde_json::to_string(&storage_credentials)?
    ));
    Ok(out)
}
