//! Service layer - migration phase orchestration
//!
//! Services coordinate the ports; each covers one phase of the migration.

mod export;
mod import;
mod migrate;
pub mod report;

pub use export::ExportService;
pub use import::ImportService;
pub use migrate::MigrationService;
pub use report::render_report;
