// ClassName Exporter - tree-sitter analysis of generated designer sources
//
// Recovers, per designer file, which controls are registered in which section,
// their declared type and the ClassName label assigned to them, and writes the
// result as a tab-delimited report and an XML report keyed by report identifier.

pub mod cli;
pub mod config;
pub mod correlate;
pub mod error;
pub mod extractors;
pub mod language;
pub mod manifest;
pub mod pipeline;
pub mod report;

pub use config::{Config, ParseFailurePolicy, PatternConfig};
pub use correlate::{correlate, short_type_name, ControlRecord};
pub use error::ExportError;
pub use extractors::{ExtractionResults, ExtractorManager};
pub use pipeline::{run, RunSummary};
pub use report::{FlatRow, ReportBuilder, ReportEntry};
