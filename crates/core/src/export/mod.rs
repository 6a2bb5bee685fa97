//! Redacted data export.

pub mod service;
pub mod types;

pub use service::ExportService;
pub use types::{EXPORT_VERSION, ExportDocument, ImportedRecords};
