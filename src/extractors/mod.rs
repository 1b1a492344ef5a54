//! Designer Extractors Module
//!
//! Tree-sitter based extractors that read generated UI source files and recover
//! the raw facts the correlator joins: declared fields, label assignments and
//! grouping calls.
//!
//! # Architecture
//!
//! - `base` - BaseExtractor (node text, tree walking) and the extraction result types
//! - `manager.rs` - ExtractorManager public API (parser setup + dispatch)
//! - `csharp` - C# designer extractor

pub mod base;
pub mod csharp;
pub mod manager;

// Re-export the public API
pub use base::{ExtractionResults, FieldInfo, FieldMap, GroupMembership, LabelAssignment, LabelMap};
pub use manager::ExtractorManager;
